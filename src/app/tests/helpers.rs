//! Shared test utilities for the app module.
//!
//! Provides:
//! - [`RecordingApi`] - a [`RecipeApi`] stub that records every call and
//!   serves canned responses
//! - [`create_test_app`] - builds an [`App`] over the stub with the
//!   startup load settled
//! - [`settle`] - lets spawned request tasks finish and applies their
//!   events
//! - Key event constructors for input tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use crate::api::{AiRecipe, ApiError, NewRecipe, RatingRequest, Recipe, RecipeApi};
use crate::app::App;

/// A recorded API call with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Search {
        ingredients: String,
        dietary: Option<String>,
    },
    Popular,
    Recommendations {
        ingredients: String,
        dietary: Option<String>,
    },
    Recipe(i64),
    Rate {
        id: i64,
        body: RatingRequest,
    },
    Create(NewRecipe),
}

/// [`RecipeApi`] stub recording calls and serving canned responses.
///
/// When `failure` is set, every call returns a backend error with that
/// detail instead of its canned response.
#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<ApiCall>>,
    stored: Mutex<Vec<Recipe>>,
    generated: Mutex<Vec<AiRecipe>>,
    detail: Mutex<Option<Recipe>>,
    failure: Mutex<Option<String>>,
}

impl RecordingApi {
    pub fn with_stored(recipes: Vec<Recipe>) -> Arc<Self> {
        let api = Self::default();
        *api.stored.lock().unwrap() = recipes;
        Arc::new(api)
    }

    pub fn with_generated(recipes: Vec<AiRecipe>) -> Arc<Self> {
        let api = Self::default();
        *api.generated.lock().unwrap() = recipes;
        Arc::new(api)
    }

    pub fn with_detail(recipe: Recipe) -> Arc<Self> {
        let api = Self::default();
        *api.detail.lock().unwrap() = Some(recipe);
        Arc::new(api)
    }

    pub fn failing(detail: &str) -> Arc<Self> {
        let api = Self::default();
        *api.failure.lock().unwrap() = Some(detail.to_string());
        Arc::new(api)
    }

    /// Direct handle on the failure slot, for injecting failures mid-test.
    pub fn failure_handle(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.failure.lock().unwrap()
    }

    /// Direct handle on the detail response, for setting it mid-test.
    pub fn detail_handle(&self) -> std::sync::MutexGuard<'_, Option<Recipe>> {
        self.detail.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if let Some(detail) = self.failure.lock().unwrap().clone() {
            return Err(ApiError::Backend {
                status: 500,
                detail,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeApi for RecordingApi {
    async fn search(
        &self,
        ingredients: &str,
        dietary_restriction: Option<&str>,
    ) -> Result<Vec<Recipe>, ApiError> {
        self.record(ApiCall::Search {
            ingredients: ingredients.to_string(),
            dietary: dietary_restriction.map(String::from),
        })?;
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn popular(&self) -> Result<Vec<Recipe>, ApiError> {
        self.record(ApiCall::Popular)?;
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn recommendations(
        &self,
        ingredients: &str,
        dietary_preferences: Option<&str>,
    ) -> Result<Vec<AiRecipe>, ApiError> {
        self.record(ApiCall::Recommendations {
            ingredients: ingredients.to_string(),
            dietary: dietary_preferences.map(String::from),
        })?;
        Ok(self.generated.lock().unwrap().clone())
    }

    async fn recipe(&self, id: i64) -> Result<Recipe, ApiError> {
        self.record(ApiCall::Recipe(id))?;
        self.detail
            .lock()
            .unwrap()
            .clone()
            .ok_or(ApiError::Backend {
                status: 404,
                detail: "Recipe not found".to_string(),
            })
    }

    async fn rate(&self, id: i64, rating: &RatingRequest) -> Result<(), ApiError> {
        self.record(ApiCall::Rate {
            id,
            body: rating.clone(),
        })
    }

    async fn create(&self, recipe: &NewRecipe) -> Result<(), ApiError> {
        self.record(ApiCall::Create(recipe.clone()))
    }
}

/// Lets spawned request tasks run to completion, then applies their
/// events. The stub never blocks, so a few yields suffice.
pub async fn settle(app: &mut App) {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
    app.process_events();
}

/// Builds an [`App`] over the stub with the startup popular load settled
/// and its recorded call cleared, so tests observe only their own calls.
pub async fn create_test_app(api: &Arc<RecordingApi>) -> App {
    let mut app = App::new(Arc::clone(api) as Arc<dyn RecipeApi>);
    settle(&mut app).await;
    api.clear_calls();
    app
}

/// A stored recipe with predictable fields for assertions.
pub fn sample_recipe(id: i64) -> Recipe {
    Recipe {
        id,
        title: format!("Recipe {id}"),
        description: Some("A sample dish".to_string()),
        ingredients: r#"["egg","flour","milk","butter"]"#.to_string(),
        instructions: "Mix everything\nCook it".to_string(),
        prep_time: Some(20),
        servings: Some(2),
        difficulty: Some("Medium".to_string()),
        average_rating: 4.2,
    }
}

/// An AI recipe with predictable fields for assertions.
pub fn sample_ai_recipe(title: &str) -> AiRecipe {
    AiRecipe {
        title: title.to_string(),
        description: "Generated just for you".to_string(),
        ingredients: vec!["rice".to_string(), "egg".to_string()],
        instructions: vec!["Cook rice".to_string(), "Fry egg".to_string()],
        prep_time: 15,
        difficulty: "Easy".to_string(),
        why_recommended: "Uses your ingredients".to_string(),
    }
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for a character key with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for a non-character key with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Renders the app to a [`TestBackend`] and returns the buffer contents
/// as a debug string for containment assertions.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| app.render(frame)).expect("draw");
    format!("{:?}", terminal.backend().buffer())
}
