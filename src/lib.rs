//! Find recipes you can cook with the ingredients you have.
//!
//! The matcher scores a recipe corpus against the user's ingredients and an
//! optional [`FilterSelection`]; the remaining modules supply that corpus
//! (local TOML files or the remote recipe service) and present the results.

pub mod api;
pub mod config;
pub mod core;
pub mod facets;
pub mod filter;
pub mod matcher;
pub mod sanitize;
pub mod search;
pub mod sources;
pub mod state;
pub mod ui;

pub use crate::core::{PantryError, Recipe, RecipeDetails, RecipeId, RecipeSummary};
pub use crate::facets::{unique_categories, unique_cuisines, unique_dietary};
pub use crate::filter::FilterSelection;
pub use crate::matcher::{find_recipes_by_ingredients, match_recipes, MATCH_THRESHOLD_PERCENT};
