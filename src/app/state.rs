//! Application state structures.
//!
//! - **`SearchFormState`**: the ingredients/dietary inputs on the browse screen
//! - **`ResultsState`**: the rendered recipe listing (stored or AI-generated)
//! - **`DetailState`**: the recipe detail modal, including rating eligibility
//! - **`AddFormState`**: the add-recipe form overlay
//! - **`ApiEvent`**: completion events sent back from spawned requests
//!
//! The only transient cross-screen state is the current recipe identifier,
//! carried inside [`DetailState::recipe_id`]. Rating eligibility is a pure
//! function of that field ([`DetailState::can_rate`]), never an ambient
//! flag.

use tui_textarea::TextArea;

use crate::api::{AiRecipe, NewRecipe, Recipe, split_ingredients};

/// Application mode.
///
/// - **Browse**: search form, results list, and notice log.
/// - **Detail**: recipe modal overlaid on the browse screen.
/// - **`AddRecipe`**: add-recipe form overlaid on the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Main screen with search form and results.
    #[default]
    Browse,
    /// Recipe detail modal overlay.
    Detail,
    /// Add-recipe form overlay.
    AddRecipe,
}

/// Focused element on the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseFocus {
    /// Ingredients input field.
    #[default]
    Ingredients,
    /// Dietary restriction input field.
    Dietary,
    /// Results list.
    Results,
}

impl BrowseFocus {
    /// Cycles focus forward (Tab order).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Ingredients => Self::Dietary,
            Self::Dietary => Self::Results,
            Self::Results => Self::Ingredients,
        }
    }

    /// Cycles focus backward (Shift+Tab order).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Ingredients => Self::Results,
            Self::Dietary => Self::Ingredients,
            Self::Results => Self::Dietary,
        }
    }
}

/// Completion events sent from spawned API requests to the UI.
///
/// Every request sends exactly one event, success or failure, which is
/// what guarantees the loading indicator always clears.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    /// Stored recipes arrived for the results area.
    Recipes {
        /// Results area title, e.g. "Recipes with: eggs".
        title: String,
        /// The recipes to render.
        recipes: Vec<Recipe>,
    },
    /// AI recommendations arrived.
    Recommendations(Vec<AiRecipe>),
    /// A single stored recipe arrived for the detail modal.
    RecipeDetail(Recipe),
    /// A rating submission was accepted.
    RatingAccepted,
    /// A new recipe was accepted.
    RecipeCreated,
    /// A request failed.
    Failed {
        /// Generic user-facing message.
        message: String,
        /// Diagnostic detail for the notice log.
        detail: String,
    },
}

fn single_line_area(placeholder: &str) -> TextArea<'static> {
    let mut area = TextArea::default();
    area.set_placeholder_text(placeholder);
    area
}

fn collect_text(area: &TextArea<'static>) -> String {
    area.lines().join("\n")
}

/// State for the search form on the browse screen.
pub struct SearchFormState {
    /// Ingredients input (required for search and recommendations).
    pub ingredients: TextArea<'static>,
    /// Dietary restriction input (optional).
    pub dietary: TextArea<'static>,
}

impl Default for SearchFormState {
    fn default() -> Self {
        Self {
            ingredients: single_line_area("e.g. eggs, flour, milk"),
            dietary: single_line_area("vegetarian, vegan, gluten-free..."),
        }
    }
}

impl SearchFormState {
    /// Returns the trimmed ingredients input.
    #[must_use]
    pub fn ingredients_text(&self) -> String {
        collect_text(&self.ingredients).trim().to_string()
    }

    /// Returns the dietary input when non-empty after trimming.
    #[must_use]
    pub fn dietary_text(&self) -> Option<String> {
        let text = collect_text(&self.dietary).trim().to_string();
        if text.is_empty() { None } else { Some(text) }
    }

    #[cfg(test)]
    pub fn set_ingredients(&mut self, text: &str) {
        self.ingredients = TextArea::new(vec![text.to_string()]);
    }

    #[cfg(test)]
    pub fn set_dietary(&mut self, text: &str) {
        self.dietary = TextArea::new(vec![text.to_string()]);
    }
}

/// The recipes currently shown in the results area.
#[derive(Debug, Clone)]
pub enum Listing {
    /// Stored recipes (search results or popular).
    Stored(Vec<Recipe>),
    /// AI-generated recommendations.
    Generated(Vec<AiRecipe>),
}

/// State for the results area.
#[derive(Debug, Clone)]
pub struct ResultsState {
    /// Results area title.
    pub title: String,
    /// The listed recipes.
    pub listing: Listing,
    /// Selected card index.
    pub selected: usize,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            title: "Recipes".to_string(),
            listing: Listing::Stored(Vec::new()),
            selected: 0,
        }
    }
}

impl ResultsState {
    /// Creates a results state for stored recipes.
    #[must_use]
    pub fn stored(title: impl Into<String>, recipes: Vec<Recipe>) -> Self {
        Self {
            title: title.into(),
            listing: Listing::Stored(recipes),
            selected: 0,
        }
    }

    /// Creates a results state for AI recommendations.
    #[must_use]
    pub fn generated(recipes: Vec<AiRecipe>) -> Self {
        Self {
            title: "AI Recommendations".to_string(),
            listing: Listing::Generated(recipes),
            selected: 0,
        }
    }

    /// Number of listed recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.listing {
            Listing::Stored(recipes) => recipes.len(),
            Listing::Generated(recipes) => recipes.len(),
        }
    }

    /// Returns true when nothing is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the selection up.
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the selection down.
    pub fn select_down(&mut self) {
        let max = self.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }
}

/// Default rating selection when the modal opens.
pub const DEFAULT_RATING: u8 = 5;

/// State for the recipe detail modal.
///
/// Built either from a stored recipe (decoding its transmitted forms) or
/// from an AI recipe (whose sequences are used directly). The stored
/// recipe's identifier is the client's only transient cross-request state.
#[derive(Debug, Clone)]
pub struct DetailState {
    /// Identifier of the stored recipe, `None` for AI recipes.
    pub recipe_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: Option<u32>,
    pub difficulty: Option<String>,
    pub servings: Option<u32>,
    /// Present only for AI recipes.
    pub why_recommended: Option<String>,
    /// Current rating selection (1-5).
    pub rating_choice: u8,
    /// Content scroll offset.
    pub scroll: usize,
}

impl DetailState {
    /// Builds the modal state from a stored recipe, decoding the
    /// transmitted ingredient and instruction forms.
    #[must_use]
    pub fn from_stored(recipe: &Recipe) -> Self {
        Self {
            recipe_id: Some(recipe.id),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredient_list(),
            instructions: recipe.instruction_lines(),
            prep_time: recipe.prep_time,
            difficulty: recipe.difficulty.clone(),
            servings: recipe.servings,
            why_recommended: None,
            rating_choice: DEFAULT_RATING,
            scroll: 0,
        }
    }

    /// Builds the modal state from an AI recipe. AI recipes have no
    /// identifier, so the modal opens without rating eligibility.
    #[must_use]
    pub fn from_generated(recipe: &AiRecipe) -> Self {
        Self {
            recipe_id: None,
            title: recipe.title.clone(),
            description: Some(recipe.description.clone()),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            prep_time: Some(recipe.prep_time),
            difficulty: Some(recipe.difficulty.clone()),
            servings: None,
            why_recommended: Some(recipe.why_recommended.clone()),
            rating_choice: DEFAULT_RATING,
            scroll: 0,
        }
    }

    /// Rating eligibility: only stored recipes can be rated.
    #[must_use]
    pub const fn can_rate(&self) -> bool {
        self.recipe_id.is_some()
    }

    /// Increments the rating selection, capped at 5.
    pub fn rating_up(&mut self) {
        self.rating_choice = (self.rating_choice + 1).min(5);
    }

    /// Decrements the rating selection, floored at 1.
    pub fn rating_down(&mut self) {
        self.rating_choice = self.rating_choice.saturating_sub(1).max(1);
    }
}

/// Difficulty options on the add-recipe form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Cycles to the next option.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Returns the display/wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Fields of the add-recipe form in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Title,
    Description,
    Ingredients,
    Instructions,
    PrepTime,
    Difficulty,
}

impl AddField {
    /// All fields in display order.
    #[must_use]
    pub fn all() -> &'static [AddField] {
        &[
            AddField::Title,
            AddField::Description,
            AddField::Ingredients,
            AddField::Instructions,
            AddField::PrepTime,
            AddField::Difficulty,
        ]
    }

    /// Cycles to the next field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Ingredients,
            Self::Ingredients => Self::Instructions,
            Self::Instructions => Self::PrepTime,
            Self::PrepTime => Self::Difficulty,
            Self::Difficulty => Self::Title,
        }
    }

    /// Cycles to the previous field.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Difficulty,
            Self::Description => Self::Title,
            Self::Ingredients => Self::Description,
            Self::Instructions => Self::Ingredients,
            Self::PrepTime => Self::Instructions,
            Self::Difficulty => Self::PrepTime,
        }
    }

    /// Display label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Ingredients => "Ingredients (comma-separated)",
            Self::Instructions => "Instructions",
            Self::PrepTime => "Prep time (minutes)",
            Self::Difficulty => "Difficulty",
        }
    }

    /// Whether the field accepts embedded newlines.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Description | Self::Instructions)
    }
}

/// State for the add-recipe form.
pub struct AddFormState {
    /// Currently focused field.
    pub field: AddField,
    pub title: TextArea<'static>,
    pub description: TextArea<'static>,
    pub ingredients: TextArea<'static>,
    pub instructions: TextArea<'static>,
    pub prep_time: TextArea<'static>,
    pub difficulty: Difficulty,
}

impl Default for AddFormState {
    fn default() -> Self {
        Self {
            field: AddField::default(),
            title: single_line_area("Recipe title"),
            description: single_line_area("Short description"),
            ingredients: single_line_area("egg, flour, milk"),
            instructions: single_line_area("One step per line"),
            prep_time: single_line_area("e.g. 20"),
            difficulty: Difficulty::default(),
        }
    }
}

impl AddFormState {
    /// Returns the text area for the focused field, if it has one.
    pub fn focused_area(&mut self) -> Option<&mut TextArea<'static>> {
        match self.field {
            AddField::Title => Some(&mut self.title),
            AddField::Description => Some(&mut self.description),
            AddField::Ingredients => Some(&mut self.ingredients),
            AddField::Instructions => Some(&mut self.instructions),
            AddField::PrepTime => Some(&mut self.prep_time),
            AddField::Difficulty => None,
        }
    }

    /// Returns the text area for a given field for rendering.
    #[must_use]
    pub fn area_for(&self, field: AddField) -> Option<&TextArea<'static>> {
        match field {
            AddField::Title => Some(&self.title),
            AddField::Description => Some(&self.description),
            AddField::Ingredients => Some(&self.ingredients),
            AddField::Instructions => Some(&self.instructions),
            AddField::PrepTime => Some(&self.prep_time),
            AddField::Difficulty => None,
        }
    }

    /// Builds the submission body from the form inputs.
    ///
    /// Ingredients are split on commas and trimmed per item, then encoded
    /// into the transmitted string form. Prep time parses as an integer or
    /// transmits as null.
    #[must_use]
    pub fn to_new_recipe(&self) -> NewRecipe {
        let ingredients = split_ingredients(&collect_text(&self.ingredients));
        NewRecipe {
            title: collect_text(&self.title).trim().to_string(),
            description: collect_text(&self.description).trim().to_string(),
            ingredients: crate::api::encode_ingredients(&ingredients),
            instructions: collect_text(&self.instructions),
            prep_time: collect_text(&self.prep_time).trim().parse().ok(),
            difficulty: self.difficulty.name().to_string(),
        }
    }

    /// Clears every field and resets focus.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn set_field_text(&mut self, field: AddField, text: &str) {
        let lines: Vec<String> = text.split('\n').map(String::from).collect();
        match field {
            AddField::Title => self.title = TextArea::new(lines),
            AddField::Description => self.description = TextArea::new(lines),
            AddField::Ingredients => self.ingredients = TextArea::new(lines),
            AddField::Instructions => self.instructions = TextArea::new(lines),
            AddField::PrepTime => self.prep_time = TextArea::new(lines),
            AddField::Difficulty => {}
        }
    }
}
