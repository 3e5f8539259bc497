//! Browse screen layout calculation.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the notice log panel, including its borders.
pub const NOTICE_PANEL_HEIGHT: u16 = 6;

/// Height of the search form row, including input borders.
pub const SEARCH_ROW_HEIGHT: u16 = 3;

/// Computed areas for the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseLayout {
    /// One-line header bar.
    pub header: Rect,
    /// Results list, takes the remaining height.
    pub results: Rect,
    /// Notice log panel.
    pub notices: Rect,
    /// Ingredients input (left half of the search row).
    pub ingredients: Rect,
    /// Dietary restriction input (right half of the search row).
    pub dietary: Rect,
    /// One-line key hint footer.
    pub footer: Rect,
}

/// Splits the terminal area into the browse screen regions.
#[must_use]
pub fn calculate_browse_layout(area: Rect) -> BrowseLayout {
    let [header, results, notices, search_row, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(NOTICE_PANEL_HEIGHT),
        Constraint::Length(SEARCH_ROW_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    let [ingredients, dietary] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(search_row);

    BrowseLayout {
        header,
        results,
        notices,
        ingredients,
        dietary,
        footer,
    }
}

/// Centers a modal of the given proportions inside `area`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);
    horizontal
}
