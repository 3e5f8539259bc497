//! HTTP implementation of the recipe API.
//!
//! Thin pass-through client: each method builds a request against the
//! configured base URL, checks the status, and decodes the JSON body.
//! No retries, no timeouts beyond the transport defaults.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::RecipeApi;
use super::models::{AiRecipe, NewRecipe, RatingRequest, Recipe};

/// Errors from the recipe API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success status with the backend's error detail.
    #[error("{detail} (status {status})")]
    Backend {
        status: u16,
        detail: String,
    },
}

/// Error body shape the backend returns on failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Maps a non-success response to [`ApiError::Backend`], decoding the
/// backend's error detail when present.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .json::<ErrorBody>()
        .await
        .map_or_else(|_| format!("status {status}"), |body| body.detail);
    Err(ApiError::Backend {
        status: status.as_u16(),
        detail,
    })
}

/// reqwest-backed [`RecipeApi`] implementation.
pub struct HttpRecipeApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRecipeApi {
    /// Creates a client for the given API origin.
    ///
    /// A trailing slash on the base URL is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Builds query parameters for the search endpoint.
///
/// `dietary_restriction` is included only when non-empty, matching the
/// backend's optional-filter semantics.
#[must_use]
pub fn search_params(
    ingredients: &str,
    dietary_restriction: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("ingredients", ingredients.to_string())];
    if let Some(dietary) = dietary_restriction
        && !dietary.is_empty()
    {
        params.push(("dietary_restriction", dietary.to_string()));
    }
    params
}

/// Builds query parameters for the recommendations endpoint.
///
/// `skill_level` is pinned to `beginner`; the UI does not expose it.
#[must_use]
pub fn recommendation_params(
    ingredients: &str,
    dietary_preferences: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("ingredients", ingredients.to_string())];
    if let Some(dietary) = dietary_preferences
        && !dietary.is_empty()
    {
        params.push(("dietary_preferences", dietary.to_string()));
    }
    params.push(("skill_level", "beginner".to_string()));
    params
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn search(
        &self,
        ingredients: &str,
        dietary_restriction: Option<&str>,
    ) -> Result<Vec<Recipe>, ApiError> {
        let response = self
            .http
            .get(self.url("/recipes/"))
            .query(&search_params(ingredients, dietary_restriction))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn popular(&self) -> Result<Vec<Recipe>, ApiError> {
        let response = self.http.get(self.url("/recipes/popular/")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn recommendations(
        &self,
        ingredients: &str,
        dietary_preferences: Option<&str>,
    ) -> Result<Vec<AiRecipe>, ApiError> {
        let response = self
            .http
            .get(self.url("/recommendations/"))
            .query(&recommendation_params(ingredients, dietary_preferences))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn recipe(&self, id: i64) -> Result<Recipe, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/recipes/{id}")))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn rate(&self, id: i64, rating: &RatingRequest) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/recipes/{id}/rate")))
            .json(rating)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn create(&self, recipe: &NewRecipe) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/recipes/"))
            .json(recipe)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
