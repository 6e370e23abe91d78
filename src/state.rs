use crate::core::{RecipeDetails, RecipeSummary};
use serde::{Deserialize, Serialize};

/// Everything the front end shows, owned by the top-level controller and only
/// changed through [`AppState::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub selected_ingredients: Vec<String>,
    pub recipes: Vec<RecipeSummary>,
    pub selected_recipe: Option<RecipeDetails>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddIngredient(String),
    RemoveIngredient(String),
    SearchRequested,
    SearchSucceeded(Vec<RecipeSummary>),
    SearchFailed,
    DetailsLoaded(RecipeDetails),
    DetailsFailed,
    CloseDetails,
}

/// Short message for the user produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Success(String),
    Info(String),
    Error(String),
}

pub const SEARCH_FAILED: &str = "Failed to fetch recipes. Please try again.";
pub const DETAILS_FAILED: &str = "Failed to fetch recipe details. Please try again.";
pub const NO_INGREDIENTS: &str = "Please add at least one ingredient";

impl AppState {
    pub fn reduce(mut self, action: Action) -> (Self, Option<Notice>) {
        let notice = match action {
            Action::AddIngredient(name) => {
                if name.trim().is_empty() || self.selected_ingredients.contains(&name) {
                    None
                } else {
                    let notice = Notice::Success(format!("Added {name}"));
                    self.selected_ingredients.push(name);
                    Some(notice)
                }
            }
            Action::RemoveIngredient(name) => {
                self.selected_ingredients.retain(|ing| *ing != name);
                Some(Notice::Info(format!("Removed {name}")))
            }
            Action::SearchRequested => {
                if self.selected_ingredients.is_empty() {
                    Some(Notice::Error(NO_INGREDIENTS.to_string()))
                } else if self.loading {
                    None
                } else {
                    self.loading = true;
                    None
                }
            }
            Action::SearchSucceeded(recipes) => {
                self.recipes = recipes;
                self.loading = false;
                None
            }
            Action::SearchFailed => {
                self.loading = false;
                Some(Notice::Error(SEARCH_FAILED.to_string()))
            }
            Action::DetailsLoaded(details) => {
                self.selected_recipe = Some(details);
                None
            }
            Action::DetailsFailed => Some(Notice::Error(DETAILS_FAILED.to_string())),
            Action::CloseDetails => {
                self.selected_recipe = None;
                None
            }
        };
        (self, notice)
    }

    /// Whether a search may be started (the original "Find Recipes" button).
    pub fn can_search(&self) -> bool {
        !self.loading && !self.selected_ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64) -> RecipeSummary {
        RecipeSummary {
            id,
            title: format!("Recipe {id}"),
            image: String::new(),
            used_ingredient_count: 2,
            missed_ingredient_count: 1,
            likes: 10,
        }
    }

    #[test]
    fn adding_ingredients_skips_blanks_and_duplicates() {
        let state = AppState::default();
        let (state, notice) = state.reduce(Action::AddIngredient("egg".into()));
        assert_eq!(notice, Some(Notice::Success("Added egg".into())));

        let (state, notice) = state.reduce(Action::AddIngredient("egg".into()));
        assert_eq!(notice, None);
        let (state, notice) = state.reduce(Action::AddIngredient("  ".into()));
        assert_eq!(notice, None);

        assert_eq!(state.selected_ingredients, vec!["egg".to_string()]);
    }

    #[test]
    fn removing_an_ingredient() {
        let (state, _) = AppState::default().reduce(Action::AddIngredient("milk".into()));
        let (state, notice) = state.reduce(Action::RemoveIngredient("milk".into()));

        assert!(state.selected_ingredients.is_empty());
        assert_eq!(notice, Some(Notice::Info("Removed milk".into())));
    }

    #[test]
    fn search_needs_an_ingredient() {
        let (state, notice) = AppState::default().reduce(Action::SearchRequested);

        assert!(!state.loading);
        assert_eq!(notice, Some(Notice::Error(NO_INGREDIENTS.into())));
    }

    #[test]
    fn search_lifecycle() {
        let (state, _) = AppState::default().reduce(Action::AddIngredient("rice".into()));
        assert!(state.can_search());

        let (state, notice) = state.reduce(Action::SearchRequested);
        assert!(state.loading);
        assert!(!state.can_search());
        assert_eq!(notice, None);

        let (state, _) = state.reduce(Action::SearchSucceeded(vec![summary(1), summary(2)]));
        assert!(!state.loading);
        assert_eq!(state.recipes.len(), 2);

        let (state, _) = state.reduce(Action::SearchRequested);
        let (state, notice) = state.reduce(Action::SearchFailed);
        assert!(!state.loading);
        assert_eq!(state.recipes.len(), 2);
        assert_eq!(notice, Some(Notice::Error(SEARCH_FAILED.into())));
    }

    #[test]
    fn details_open_and_close() {
        let details = RecipeDetails {
            id: 7,
            title: "Risotto".into(),
            image: String::new(),
            summary: String::new(),
            instructions: None,
            ready_in_minutes: None,
            servings: None,
            cuisines: vec![],
            diets: vec![],
            dish_types: vec![],
            extended_ingredients: vec![],
        };

        let (state, _) = AppState::default().reduce(Action::DetailsLoaded(details.clone()));
        assert_eq!(state.selected_recipe, Some(details));

        let (state, notice) = state.reduce(Action::DetailsFailed);
        assert!(state.selected_recipe.is_some());
        assert_eq!(notice, Some(Notice::Error(DETAILS_FAILED.into())));

        let (state, _) = state.reduce(Action::CloseDetails);
        assert_eq!(state.selected_recipe, None);
    }
}
