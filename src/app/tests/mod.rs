//! Tests for the app module.
//!
//! Organized into submodules by functionality:
//! - `add_recipe` - Add-recipe form validation and submission
//! - `helpers` - Shared test utilities and the recording API stub
//! - `integration` - End-to-end request/response workflows
//! - `rating` - Rating eligibility and submission
//! - `search` - Search, recommendations, and popular loads
//! - `ui` - Rendering smoke tests against a `TestBackend`

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod search;
