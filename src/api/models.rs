//! Wire models for the recipe API.
//!
//! Stored recipes transmit their ingredient list as a JSON-encoded string
//! (a quirk of the backend schema), so the helpers here decode it for
//! display and re-encode it for submission. AI recipes arrive with plain
//! sequences and need no decoding.

use serde::{Deserialize, Serialize};

/// A recipe stored by the backend. Addressable by `id`, rateable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON-encoded array of ingredient strings.
    pub ingredients: String,
    /// Newline-separated preparation steps.
    pub instructions: String,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub average_rating: f64,
}

impl Recipe {
    /// Decodes the transmitted ingredients string into a list.
    #[must_use]
    pub fn ingredient_list(&self) -> Vec<String> {
        decode_ingredients(&self.ingredients)
    }

    /// Splits the instructions into display lines.
    #[must_use]
    pub fn instruction_lines(&self) -> Vec<String> {
        self.instructions.split('\n').map(String::from).collect()
    }
}

/// A recipe generated on demand by the recommendation endpoint.
///
/// Has no identifier - it is not stored and cannot be rated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub difficulty: String,
    pub why_recommended: String,
}

/// Body for `POST /recipes/{id}/rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: i32,
    pub comment: String,
    pub user_name: String,
}

impl RatingRequest {
    /// Builds the anonymous rating this client always submits.
    #[must_use]
    pub fn anonymous(rating: i32) -> Self {
        Self {
            rating,
            comment: String::new(),
            user_name: "Anonymous".to_string(),
        }
    }
}

/// Body for `POST /recipes/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    /// JSON-encoded array of ingredient strings (see [`encode_ingredients`]).
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: Option<u32>,
    pub difficulty: String,
}

/// Decodes the transmitted ingredients string into a list.
///
/// Malformed or empty payloads decode to an empty list rather than
/// failing the render.
#[must_use]
pub fn decode_ingredients(encoded: &str) -> Vec<String> {
    serde_json::from_str(encoded).unwrap_or_default()
}

/// Encodes an ingredient list into the transmitted string form.
#[must_use]
pub fn encode_ingredients(ingredients: &[String]) -> String {
    serde_json::to_string(ingredients).unwrap_or_else(|_| "[]".to_string())
}

/// Splits a comma-separated ingredients input into trimmed items,
/// dropping empty ones (blank input and trailing commas).
#[must_use]
pub fn split_ingredients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
