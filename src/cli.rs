//! CLI argument parsing using clap.

use clap::Parser;

/// Default API origin when `--api-url` is not given.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// `Ladle` - Smart Recipe TUI
///
/// Terminal client for the Smart Recipe Recommendation API. Searches stored
/// recipes by ingredients, fetches AI recommendations, and submits ratings
/// and new recipes.
#[derive(Parser, Debug)]
#[command(name = "ladle", version, about, long_about = None)]
pub struct Args {
    /// Base URL of the recipe API.
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}
