//! Rendering methods for the App.
//!
//! - **Browse mode**: header, results list, notice log, search form, footer
//! - **Detail modal**: recipe detail overlay with the rating row
//! - **Add-recipe form**: modal overlay with the submission fields

mod add_form;
mod browse;
mod detail;

pub use browse::{NO_RECOMMENDATIONS, NO_RESULTS};

use ratatui::Frame;

use super::{App, AppMode};

impl App {
    /// Renders the application UI. Modal modes render the browse screen
    /// first, then the overlay on top.
    pub fn render(&self, frame: &mut Frame) {
        match self.mode {
            AppMode::Browse => self.render_browse(frame),
            AppMode::Detail => {
                self.render_browse(frame);
                self.render_detail(frame);
            }
            AppMode::AddRecipe => {
                self.render_browse(frame);
                self.render_add_form(frame);
            }
        }
    }
}
