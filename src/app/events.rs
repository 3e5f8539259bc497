//! Terminal event handling.
//!
//! Key and paste events are routed by mode. Text keys fall through to the
//! focused `tui-textarea` input; everything else maps to an application
//! action.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::{AddField, AppMode, BrowseFocus};

impl App {
    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::Detail => self.handle_detail_key(key),
            AppMode::AddRecipe => self.handle_add_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => self.submit_recommendations(),
                KeyCode::Char('p') => self.load_popular(),
                KeyCode::Char('n') => self.open_add_form(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                BrowseFocus::Ingredients | BrowseFocus::Dietary => self.submit_search(),
                BrowseFocus::Results => self.view_selected(),
            },
            KeyCode::Up if self.focus == BrowseFocus::Results => self.results.select_up(),
            KeyCode::Down if self.focus == BrowseFocus::Results => self.results.select_down(),
            _ => {
                let area = match self.focus {
                    BrowseFocus::Ingredients => Some(&mut self.search.ingredients),
                    BrowseFocus::Dietary => Some(&mut self.search.dietary),
                    BrowseFocus::Results => None,
                };
                if let Some(area) = area {
                    area.input(key);
                }
            }
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_detail(),
            KeyCode::Enter => self.submit_rating(),
            KeyCode::Left => {
                if let Some(detail) = &mut self.detail
                    && detail.can_rate()
                {
                    detail.rating_down();
                }
            }
            KeyCode::Right => {
                if let Some(detail) = &mut self.detail
                    && detail.can_rate()
                {
                    detail.rating_up();
                }
            }
            KeyCode::Up => {
                if let Some(detail) = &mut self.detail {
                    detail.scroll = detail.scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if let Some(detail) = &mut self.detail {
                    detail.scroll = detail.scroll.saturating_add(1);
                }
            }
            _ => {}
        }
    }

    fn handle_add_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit_add_recipe();
            return;
        }
        match key.code {
            KeyCode::Esc => self.cancel_add_form(),
            KeyCode::Tab => self.add_form.field = self.add_form.field.next(),
            KeyCode::BackTab => self.add_form.field = self.add_form.field.prev(),
            KeyCode::Enter => {
                if self.add_form.field.is_multiline() {
                    if let Some(area) = self.add_form.focused_area() {
                        area.insert_newline();
                    }
                } else {
                    // Enter advances through single-line fields, and
                    // cycles the difficulty selector.
                    if self.add_form.field == AddField::Difficulty {
                        self.add_form.difficulty = self.add_form.difficulty.next();
                    } else {
                        self.add_form.field = self.add_form.field.next();
                    }
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.add_form.field == AddField::Difficulty =>
            {
                self.add_form.difficulty = self.add_form.difficulty.next();
            }
            _ => {
                if let Some(area) = self.add_form.focused_area() {
                    area.input(key);
                }
            }
        }
    }

    /// Handles a bracketed-paste event, inserting into the focused input.
    /// Single-line fields flatten newlines to spaces.
    pub fn handle_paste(&mut self, text: &str) {
        match self.mode {
            AppMode::Browse => {
                let area = match self.focus {
                    BrowseFocus::Ingredients => Some(&mut self.search.ingredients),
                    BrowseFocus::Dietary => Some(&mut self.search.dietary),
                    BrowseFocus::Results => None,
                };
                if let Some(area) = area {
                    area.insert_str(flatten_newlines(text));
                }
            }
            AppMode::AddRecipe => {
                let multiline = self.add_form.field.is_multiline();
                if let Some(area) = self.add_form.focused_area() {
                    if multiline {
                        area.insert_str(text);
                    } else {
                        area.insert_str(flatten_newlines(text));
                    }
                }
            }
            AppMode::Detail => {}
        }
    }
}

fn flatten_newlines(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
