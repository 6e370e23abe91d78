use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Label used when the recipe service does not classify a recipe.
pub const UNCLASSIFIED: &str = "Other";

/// Opaque, stable key for a recipe. Local recipes use their file-declared id,
/// remote ones the numeric id of the recipe service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for RecipeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A recipe as seen by the matcher.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    pub ingredients: Vec<String>,
    pub cuisine: String,
    pub category: String,
    #[serde(default)]
    pub dietary: Vec<String>,
}

impl Recipe {
    pub fn has_dietary(&self, tag: &str) -> bool {
        self.dietary.iter().any(|d| d == tag)
    }
}

/// One hit of a search by ingredients against the recipe service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
    #[serde(default)]
    pub likes: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExtendedIngredient {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub original: String,
}

/// Full recipe record returned by the detail lookup. `summary` and
/// `instructions` carry markup from the service and must go through
/// `sanitize::to_plain_text` before display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub dish_types: Vec<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
}

impl From<&RecipeDetails> for Recipe {
    fn from(details: &RecipeDetails) -> Self {
        let first_or_other = |labels: &[String]| {
            labels
                .first()
                .cloned()
                .unwrap_or_else(|| UNCLASSIFIED.to_string())
        };

        Self {
            id: RecipeId::from(details.id),
            title: details.title.clone(),
            ingredients: details
                .extended_ingredients
                .iter()
                .map(|ing| ing.name.clone())
                .filter(|name| !name.is_empty())
                .collect(),
            cuisine: first_or_other(&details.cuisines),
            category: first_or_other(&details.dish_types),
            dietary: details.diets.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Recipe service API key is not configured (set SPOONACULAR_API_KEY or run 'pantry config --set-api-key')")]
    MissingApiKey,

    #[error("Could not determine a home directory for pantry data")]
    HomeDirUnavailable,

    #[error("Recipe corpus error: {0}")]
    CorpusError(String),

    #[error("File system error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Recipe service request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Git repository error: {0}")]
    GitError(#[from] git2::Error),

    #[error("Recipe parsing error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
