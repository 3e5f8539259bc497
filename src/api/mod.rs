//! Recipe API access layer.
//!
//! The [`RecipeApi`] trait is the seam between the UI and the network:
//! the application only talks to the trait, so tests can substitute a
//! recording stub while production uses the reqwest-backed
//! [`HttpRecipeApi`].

pub mod client;
pub mod models;

use async_trait::async_trait;

pub use client::{ApiError, HttpRecipeApi};
pub use models::{
    AiRecipe, NewRecipe, RatingRequest, Recipe, decode_ingredients, encode_ingredients,
    split_ingredients,
};

/// Operations exposed by the recipe backend.
///
/// One method per consumed endpoint. All methods are independent requests;
/// the caller is responsible for sequencing (there is none - the last
/// response to arrive wins).
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Searches stored recipes by ingredients, optionally filtered by a
    /// dietary restriction.
    async fn search(
        &self,
        ingredients: &str,
        dietary_restriction: Option<&str>,
    ) -> Result<Vec<Recipe>, ApiError>;

    /// Fetches the most popular stored recipes.
    async fn popular(&self) -> Result<Vec<Recipe>, ApiError>;

    /// Fetches AI-generated recommendations for the given ingredients.
    async fn recommendations(
        &self,
        ingredients: &str,
        dietary_preferences: Option<&str>,
    ) -> Result<Vec<AiRecipe>, ApiError>;

    /// Fetches a single stored recipe by identifier.
    async fn recipe(&self, id: i64) -> Result<Recipe, ApiError>;

    /// Submits a rating for a stored recipe.
    async fn rate(&self, id: i64, rating: &RatingRequest) -> Result<(), ApiError>;

    /// Submits a new recipe.
    async fn create(&self, recipe: &NewRecipe) -> Result<(), ApiError>;
}
