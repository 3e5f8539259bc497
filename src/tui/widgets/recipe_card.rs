//! Recipe card rendering.
//!
//! Cards are fixed-height blocks of [`Line`]s so the results list can
//! window and scroll them without measuring. Both card kinds share the
//! ingredient-tag policy: at most [`MAX_INGREDIENT_TAGS`] tags, then a
//! "+N more" tag when the list is longer.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::api::{AiRecipe, Recipe};
use crate::tui::Theme;

/// Number of lines every card occupies, including the trailing separator.
pub const CARD_HEIGHT: usize = 5;

/// Maximum ingredient tags shown on a card before collapsing to "+N more".
pub const MAX_INGREDIENT_TAGS: usize = 3;

/// Placeholder shown when a recipe has no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Formats the 5-star rating glyph row with the numeric average.
///
/// Filled stars are the floor of the average; the rest of the five are
/// empty glyphs.
#[must_use]
pub fn star_rating(average: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=5
    let filled = average.floor().clamp(0.0, 5.0) as usize;
    format!(
        "{}{} ({average:.1})",
        "★".repeat(filled),
        "☆".repeat(5 - filled)
    )
}

/// Builds the ingredient tag spans for a card.
#[must_use]
pub fn ingredient_tag_spans(ingredients: &[String], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for ingredient in ingredients.iter().take(MAX_INGREDIENT_TAGS) {
        spans.push(Span::styled(format!("[{ingredient}] "), theme.tag_style()));
    }
    if ingredients.len() > MAX_INGREDIENT_TAGS {
        spans.push(Span::styled(
            format!("[+{} more]", ingredients.len() - MAX_INGREDIENT_TAGS),
            theme.muted_style(),
        ));
    }
    spans
}

/// Truncates a string to the given display width, appending `…` when cut.
/// Text that already fits is returned unchanged.
#[must_use]
pub fn fit_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    // Leave one column for the ellipsis.
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

fn title_line(title: &str, selected: bool, badge: Option<&str>, theme: &Theme) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker.to_string(), theme.highlight_style()),
        Span::styled(
            title.to_string(),
            if selected {
                theme.highlight_style()
            } else {
                theme.header_style()
            },
        ),
    ];
    if let Some(badge) = badge {
        spans.push(Span::styled(format!("  {badge}"), theme.success_style()));
    }
    Line::from(spans)
}

/// Builds the card lines for a stored recipe.
#[must_use]
pub fn stored_card_lines(
    recipe: &Recipe,
    theme: &Theme,
    selected: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let description = recipe
        .description
        .clone()
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let prep = recipe
        .prep_time
        .map_or_else(|| "N/A".to_string(), |t| t.to_string());
    let difficulty = recipe.difficulty.clone().unwrap_or_else(|| "Easy".to_string());

    let meta = Line::from(vec![
        Span::styled(format!("  {prep} min  {difficulty}  "), theme.muted_style()),
        Span::styled(star_rating(recipe.average_rating), theme.rating_style()),
    ]);

    let mut tag_spans = vec![Span::raw("  ")];
    tag_spans.extend(ingredient_tag_spans(&recipe.ingredient_list(), theme));

    vec![
        title_line(&recipe.title, selected, None, theme),
        Line::from(Span::styled(
            format!("  {}", fit_to_width(&description, width.saturating_sub(2))),
            theme.normal_style(),
        )),
        Line::from(tag_spans),
        meta,
        Line::from(""),
    ]
}

/// Builds the card lines for an AI-generated recipe.
#[must_use]
pub fn generated_card_lines(
    recipe: &AiRecipe,
    theme: &Theme,
    selected: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let meta = Line::from(Span::styled(
        format!("  {} min  {}", recipe.prep_time, recipe.difficulty),
        theme.muted_style(),
    ));

    let mut tag_spans = vec![Span::raw("  ")];
    tag_spans.extend(ingredient_tag_spans(&recipe.ingredients, theme));

    let why = format!("Why recommended: {}", recipe.why_recommended);

    vec![
        title_line(&recipe.title, selected, Some("AI Recommendation"), theme),
        Line::from(Span::styled(
            format!(
                "  {}",
                fit_to_width(&recipe.description, width.saturating_sub(2))
            ),
            theme.normal_style(),
        )),
        Line::from(tag_spans),
        meta,
        Line::from(Span::styled(
            format!("  {}", fit_to_width(&why, width.saturating_sub(2))),
            theme.muted_style(),
        )),
    ]
}
