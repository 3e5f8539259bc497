//! Search, recommendation, and popular-load tests.

use ratatui::crossterm::event::KeyCode;

use super::helpers::{
    ApiCall, RecordingApi, create_test_app, ctrl_key, key, sample_ai_recipe, sample_recipe, settle,
};
use crate::app::state::{BrowseFocus, Listing};
use crate::tui::widgets::NoticeKind;

#[tokio::test]
async fn blank_ingredients_search_issues_no_request() {
    let api = RecordingApi::with_stored(vec![]);
    let mut app = create_test_app(&api).await;

    app.search.set_ingredients("   ");
    app.submit_search();
    settle(&mut app).await;

    assert!(api.calls().is_empty());
    assert!(!app.is_loading);
    let last = app.notices.last().expect("notice");
    assert_eq!(last.kind, NoticeKind::Warning);
    assert!(last.text.contains("Please enter some ingredients!"));
}

#[tokio::test]
async fn search_sends_trimmed_ingredients_and_dietary() {
    let api = RecordingApi::with_stored(vec![sample_recipe(1)]);
    let mut app = create_test_app(&api).await;

    app.search.set_ingredients("  eggs, flour  ");
    app.search.set_dietary(" vegetarian ");
    app.submit_search();
    settle(&mut app).await;

    assert_eq!(
        api.calls(),
        vec![ApiCall::Search {
            ingredients: "eggs, flour".to_string(),
            dietary: Some("vegetarian".to_string()),
        }]
    );
}

#[tokio::test]
async fn blank_dietary_is_omitted_from_the_request() {
    let api = RecordingApi::with_stored(vec![]);
    let mut app = create_test_app(&api).await;

    app.search.set_ingredients("eggs");
    app.search.set_dietary("   ");
    app.submit_search();
    settle(&mut app).await;

    assert_eq!(
        api.calls(),
        vec![ApiCall::Search {
            ingredients: "eggs".to_string(),
            dietary: None,
        }]
    );
}

#[tokio::test]
async fn search_results_title_names_the_ingredients() {
    let api = RecordingApi::with_stored(vec![sample_recipe(1), sample_recipe(2)]);
    let mut app = create_test_app(&api).await;

    app.search.set_ingredients("eggs");
    app.submit_search();
    assert!(app.is_loading);
    settle(&mut app).await;

    assert!(!app.is_loading);
    assert_eq!(app.results.title, "Recipes with: eggs");
    assert_eq!(app.results.len(), 2);
    assert!(matches!(app.results.listing, Listing::Stored(_)));
}

#[tokio::test]
async fn blank_ingredients_recommendations_issue_no_request() {
    let api = RecordingApi::with_generated(vec![]);
    let mut app = create_test_app(&api).await;

    app.submit_recommendations();
    settle(&mut app).await;

    assert!(api.calls().is_empty());
    assert_eq!(
        app.notices.last().map(|n| n.kind),
        Some(NoticeKind::Warning)
    );
}

#[tokio::test]
async fn recommendations_replace_results_with_generated_listing() {
    let api = RecordingApi::with_generated(vec![sample_ai_recipe("Fried Rice")]);
    let mut app = create_test_app(&api).await;

    app.search.set_ingredients("rice, egg");
    app.handle_key(ctrl_key('r'));
    settle(&mut app).await;

    assert_eq!(
        api.calls(),
        vec![ApiCall::Recommendations {
            ingredients: "rice, egg".to_string(),
            dietary: None,
        }]
    );
    assert_eq!(app.results.title, "AI Recommendations");
    assert!(matches!(app.results.listing, Listing::Generated(_)));
}

#[tokio::test]
async fn startup_loads_popular_recipes() {
    let api = RecordingApi::with_stored(vec![sample_recipe(1)]);
    let mut app = crate::app::App::new(std::sync::Arc::clone(&api) as _);
    settle(&mut app).await;

    assert_eq!(api.calls(), vec![ApiCall::Popular]);
    assert_eq!(app.results.title, "Popular Recipes");
    assert_eq!(app.results.len(), 1);
}

#[tokio::test]
async fn ctrl_p_reloads_popular() {
    let api = RecordingApi::with_stored(vec![sample_recipe(3)]);
    let mut app = create_test_app(&api).await;

    app.handle_key(ctrl_key('p'));
    settle(&mut app).await;

    assert_eq!(api.calls(), vec![ApiCall::Popular]);
    assert_eq!(app.results.title, "Popular Recipes");
}

#[tokio::test]
async fn request_failure_clears_loading_and_logs_one_error() {
    let api = RecordingApi::failing("backend down");
    let mut app = create_test_app(&api).await;
    let alerts_before = app.notices.iter().filter(|n| n.is_alert()).count();

    app.search.set_ingredients("eggs");
    app.submit_search();
    settle(&mut app).await;

    assert!(!app.is_loading);
    let alerts: Vec<_> = app.notices.iter().filter(|n| n.is_alert()).collect();
    assert_eq!(alerts.len() - alerts_before, 1);
    assert!(
        alerts
            .last()
            .expect("alert")
            .text
            .contains("Search failed. Please try again.")
    );
    // Diagnostic detail follows as an informational line.
    assert!(
        app.notices
            .last()
            .expect("notice")
            .text
            .contains("backend down")
    );
}

#[tokio::test]
async fn recommendation_failure_clears_loading_and_logs_one_error() {
    let api = RecordingApi::failing("model unavailable");
    let mut app = create_test_app(&api).await;
    let alerts_before = app.notices.iter().filter(|n| n.is_alert()).count();

    app.search.set_ingredients("rice");
    app.submit_recommendations();
    settle(&mut app).await;

    assert!(!app.is_loading);
    let alerts: Vec<_> = app.notices.iter().filter(|n| n.is_alert()).collect();
    assert_eq!(alerts.len() - alerts_before, 1);
    assert!(
        alerts
            .last()
            .expect("alert")
            .text
            .contains("Failed to get AI recommendations. Please try again.")
    );
    // The previous listing survives a failed refresh.
    assert_eq!(app.results.title, "Recipes");
}

#[tokio::test]
async fn selection_moves_within_bounds() {
    let api = RecordingApi::with_stored(vec![sample_recipe(1), sample_recipe(2)]);
    let mut app = create_test_app(&api).await;

    app.search.set_ingredients("eggs");
    app.submit_search();
    settle(&mut app).await;

    app.focus = BrowseFocus::Results;
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.results.selected, 1);
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.results.selected, 1);
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.results.selected, 0);
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.results.selected, 0);
}

#[tokio::test]
async fn typing_reaches_the_focused_input() {
    let api = RecordingApi::with_stored(vec![]);
    let mut app = create_test_app(&api).await;

    for c in "eggs".chars() {
        app.handle_key(super::helpers::char_key(c));
    }
    assert_eq!(app.search.ingredients_text(), "eggs");

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus, BrowseFocus::Dietary);
    for c in "vegan".chars() {
        app.handle_key(super::helpers::char_key(c));
    }
    assert_eq!(app.search.dietary_text().as_deref(), Some("vegan"));
}

#[tokio::test]
async fn paste_into_single_line_input_flattens_newlines() {
    let api = RecordingApi::with_stored(vec![]);
    let mut app = create_test_app(&api).await;

    app.handle_paste("eggs,\nflour");
    assert_eq!(app.search.ingredients_text(), "eggs, flour");
}
