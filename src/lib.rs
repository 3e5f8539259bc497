//! `Ladle` - TUI client for the Smart Recipe Recommendation API.
//!
//! Searches recipes by ingredients, fetches AI-generated recommendations,
//! and lets the user view, rate, and submit recipes from the terminal.

pub mod api;
pub mod app;
pub mod cli;
pub mod tui;
