use crate::core::Recipe;
use serde::{Deserialize, Serialize};

/// Optional constraints narrowing a matched recipe set.
///
/// An absent or empty cuisine or category, or an empty dietary list, places
/// no constraint on that dimension. Requested dietary tags are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
}

impl FilterSelection {
    pub fn new(cuisine: Option<String>, category: Option<String>, dietary: Vec<String>) -> Self {
        Self {
            cuisine,
            category,
            dietary,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let cuisine_ok = active(&self.cuisine).map_or(true, |c| recipe.cuisine == c);
        let category_ok = active(&self.category).map_or(true, |c| recipe.category == c);
        let dietary_ok = self.dietary.iter().all(|tag| recipe.has_dietary(tag));

        cuisine_ok && category_ok && dietary_ok
    }

    /// Selecting the active cuisine again clears it.
    pub fn toggle_cuisine(&mut self, cuisine: &str) {
        self.cuisine = toggled(self.cuisine.take(), cuisine);
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.category = toggled(self.category.take(), category);
    }

    pub fn toggle_dietary(&mut self, tag: &str) {
        if let Some(pos) = self.dietary.iter().position(|d| d == tag) {
            self.dietary.remove(pos);
        } else {
            self.dietary.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_count(&self) -> usize {
        usize::from(active(&self.cuisine).is_some())
            + usize::from(active(&self.category).is_some())
            + self.dietary.len()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

fn active(label: &Option<String>) -> Option<&str> {
    label.as_deref().filter(|l| !l.is_empty())
}

fn toggled(current: Option<String>, value: &str) -> Option<String> {
    match current {
        Some(c) if c == value => None,
        _ => Some(value.to_string()),
    }
}
