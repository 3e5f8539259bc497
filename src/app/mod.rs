//! Application state and orchestration.
//!
//! The [`App`] owns all UI state and a handle to the [`RecipeApi`]. Every
//! user-triggered request is spawned on the runtime; the spawned task
//! sends exactly one [`ApiEvent`] back over an mpsc channel, and
//! [`App::process_events`] applies it to the state on the next tick. The
//! loading indicator is set when a request is dispatched and cleared on
//! every received event, so it cannot stick.

pub mod events;
pub mod layout;
pub mod render;
pub mod state;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{RatingRequest, RecipeApi};
use crate::tui::Theme;
use crate::tui::widgets::{MAX_NOTICES, Notice};

pub use state::{
    AddField, AddFormState, ApiEvent, AppMode, BrowseFocus, DetailState, Difficulty, Listing,
    ResultsState, SearchFormState,
};

/// Top-level application state.
pub struct App {
    /// Backend handle, shared with spawned request tasks.
    pub api: Arc<dyn RecipeApi>,
    /// Color theme.
    pub theme: Theme,
    /// Current mode (browse, detail modal, add-recipe form).
    pub mode: AppMode,
    /// Set when the user asks to exit.
    pub should_quit: bool,
    /// True while a request is in flight.
    pub is_loading: bool,
    /// Focused element on the browse screen.
    pub focus: BrowseFocus,
    /// Search form inputs.
    pub search: SearchFormState,
    /// Results area contents.
    pub results: ResultsState,
    /// Detail modal state, present in [`AppMode::Detail`].
    pub detail: Option<DetailState>,
    /// Add-recipe form state.
    pub add_form: AddFormState,
    /// Notice log contents.
    pub notices: Vec<Notice>,
    event_tx: mpsc::UnboundedSender<ApiEvent>,
    event_rx: mpsc::UnboundedReceiver<ApiEvent>,
}

impl App {
    /// Creates the application and dispatches the initial popular-recipes
    /// load.
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            api,
            theme: Theme::default(),
            mode: AppMode::default(),
            should_quit: false,
            is_loading: false,
            focus: BrowseFocus::default(),
            search: SearchFormState::default(),
            results: ResultsState::default(),
            detail: None,
            add_form: AddFormState::default(),
            notices: Vec::new(),
            event_tx,
            event_rx,
        };
        app.load_popular();
        app
    }

    /// Appends a notice, dropping the oldest past the cap.
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }

    fn send_event(tx: &mpsc::UnboundedSender<ApiEvent>, event: ApiEvent) {
        // The receiver lives as long as the app; a send failure only means
        // we are shutting down.
        let _ = tx.send(event);
    }

    /// Dispatches an ingredient search. Blank ingredients are a local
    /// validation failure and issue no request.
    pub fn submit_search(&mut self) {
        let ingredients = self.search.ingredients_text();
        if ingredients.is_empty() {
            self.push_notice(Notice::warning("Please enter some ingredients!"));
            return;
        }
        let dietary = self.search.dietary_text();
        self.is_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match api.search(&ingredients, dietary.as_deref()).await {
                Ok(recipes) => ApiEvent::Recipes {
                    title: format!("Recipes with: {ingredients}"),
                    recipes,
                },
                Err(err) => ApiEvent::Failed {
                    message: "Search failed. Please try again.".to_string(),
                    detail: err.to_string(),
                },
            };
            Self::send_event(&tx, event);
        });
    }

    /// Dispatches an AI recommendation request. Shares the search form's
    /// validation rule: blank ingredients issue no request.
    pub fn submit_recommendations(&mut self) {
        let ingredients = self.search.ingredients_text();
        if ingredients.is_empty() {
            self.push_notice(Notice::warning("Please enter some ingredients!"));
            return;
        }
        let dietary = self.search.dietary_text();
        self.is_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match api.recommendations(&ingredients, dietary.as_deref()).await {
                Ok(recipes) => ApiEvent::Recommendations(recipes),
                Err(err) => ApiEvent::Failed {
                    message: "Failed to get AI recommendations. Please try again.".to_string(),
                    detail: err.to_string(),
                },
            };
            Self::send_event(&tx, event);
        });
    }

    /// Dispatches a popular-recipes load.
    pub fn load_popular(&mut self) {
        self.is_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match api.popular().await {
                Ok(recipes) => ApiEvent::Recipes {
                    title: "Popular Recipes".to_string(),
                    recipes,
                },
                Err(err) => ApiEvent::Failed {
                    message: "Failed to load popular recipes.".to_string(),
                    detail: err.to_string(),
                },
            };
            Self::send_event(&tx, event);
        });
    }

    /// Opens the detail modal for the selected result.
    ///
    /// Stored recipes are re-fetched by identifier so the modal shows the
    /// latest persisted fields. AI recipes have no identifier; their modal
    /// is built directly from the listed recipe, no request issued.
    pub fn view_selected(&mut self) {
        let index = self.results.selected;
        match &self.results.listing {
            Listing::Stored(recipes) => {
                if let Some(recipe) = recipes.get(index) {
                    self.view_recipe(recipe.id);
                }
            }
            Listing::Generated(recipes) => {
                if let Some(recipe) = recipes.get(index) {
                    self.detail = Some(DetailState::from_generated(recipe));
                    self.mode = AppMode::Detail;
                }
            }
        }
    }

    /// Dispatches a fetch of a stored recipe for the detail modal.
    pub fn view_recipe(&mut self, id: i64) {
        self.is_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match api.recipe(id).await {
                Ok(recipe) => ApiEvent::RecipeDetail(recipe),
                Err(err) => ApiEvent::Failed {
                    message: "Failed to load recipe details.".to_string(),
                    detail: err.to_string(),
                },
            };
            Self::send_event(&tx, event);
        });
    }

    /// Submits the detail modal's rating selection.
    ///
    /// Eligibility is a pure function of the modal state: AI recipes carry
    /// no identifier and are rejected locally with no request issued.
    pub fn submit_rating(&mut self) {
        let Some(detail) = &self.detail else {
            return;
        };
        let Some(id) = detail.recipe_id else {
            self.push_notice(Notice::warning("Cannot rate AI-generated recipes"));
            return;
        };
        let rating = RatingRequest::anonymous(i32::from(detail.rating_choice));
        self.is_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match api.rate(id, &rating).await {
                Ok(()) => ApiEvent::RatingAccepted,
                Err(err) => ApiEvent::Failed {
                    message: "Failed to submit rating.".to_string(),
                    detail: err.to_string(),
                },
            };
            Self::send_event(&tx, event);
        });
    }

    /// Submits the add-recipe form.
    ///
    /// Title, ingredients, and instructions are required; a missing one is
    /// a local validation failure with no request issued.
    pub fn submit_add_recipe(&mut self) {
        let recipe = self.add_form.to_new_recipe();
        if recipe.title.is_empty()
            || recipe.ingredients == "[]"
            || recipe.instructions.trim().is_empty()
        {
            self.push_notice(Notice::warning("Please fill in all required fields!"));
            return;
        }
        self.is_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match api.create(&recipe).await {
                Ok(()) => ApiEvent::RecipeCreated,
                Err(err) => ApiEvent::Failed {
                    message: "Failed to add recipe. Please try again.".to_string(),
                    detail: err.to_string(),
                },
            };
            Self::send_event(&tx, event);
        });
    }

    /// Closes the detail modal.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.mode = AppMode::Browse;
    }

    /// Opens the add-recipe form.
    pub fn open_add_form(&mut self) {
        self.add_form.clear();
        self.mode = AppMode::AddRecipe;
    }

    /// Cancels the add-recipe form without submitting.
    pub fn cancel_add_form(&mut self) {
        self.add_form.clear();
        self.mode = AppMode::Browse;
    }

    /// Drains completed request events and applies them to the state.
    ///
    /// Every event clears the loading indicator; requests overlap freely
    /// and the last response to arrive wins the results area.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.is_loading = false;
            match event {
                ApiEvent::Recipes { title, recipes } => {
                    self.results = ResultsState::stored(title, recipes);
                }
                ApiEvent::Recommendations(recipes) => {
                    self.results = ResultsState::generated(recipes);
                }
                ApiEvent::RecipeDetail(recipe) => {
                    self.detail = Some(DetailState::from_stored(&recipe));
                    self.mode = AppMode::Detail;
                }
                ApiEvent::RatingAccepted => {
                    self.push_notice(Notice::success("Rating submitted successfully!"));
                    self.close_detail();
                }
                ApiEvent::RecipeCreated => {
                    self.push_notice(Notice::success("Recipe added successfully!"));
                    self.add_form.clear();
                    self.mode = AppMode::Browse;
                    self.load_popular();
                }
                ApiEvent::Failed { message, detail } => {
                    self.push_notice(Notice::error(message));
                    self.push_notice(Notice::info(detail));
                }
            }
        }
    }
}
