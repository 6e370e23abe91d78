use crate::core::Recipe;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashSet;

pub struct SearchEngine;

impl SearchEngine {
    /// Ingredient names to offer while the user is typing `input`.
    ///
    /// Candidates must contain the input as typed (case-insensitive, spaces
    /// included) and must not be selected already. Best fuzzy score first; ties
    /// keep the order of `known`.
    pub fn suggest(input: &str, known: &[String], selected: &[String]) -> Vec<String> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        let needle = input.to_lowercase();

        let matcher = SkimMatcherV2::default();
        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for name in known {
            if selected.contains(name) || !seen.insert(name.as_str()) {
                continue;
            }
            let haystack = name.to_lowercase();
            if !haystack.contains(&needle) {
                continue;
            }
            // Relevance score
            let score = matcher.fuzzy_match(&haystack, &needle).unwrap_or(0);
            results.push((score, name));
        }

        // Sort by relevance (descending), stable for equal scores
        results.sort_by(|a, b| b.0.cmp(&a.0));

        results.into_iter().map(|(_, name)| name.clone()).collect()
    }

    /// Every ingredient name mentioned by the corpus, first occurrence wins.
    pub fn known_ingredients(corpus: &[Recipe]) -> Vec<String> {
        let mut seen = HashSet::new();
        corpus
            .iter()
            .flat_map(|r| r.ingredients.iter())
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecipeId;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn blank_input_suggests_nothing() {
        let known = strings(&["tomato", "potato"]);
        assert!(SearchEngine::suggest("   ", &known, &[]).is_empty());
    }

    #[test]
    fn suggestions_contain_the_input() {
        let known = strings(&["Tomato", "potato", "basil", "sun-dried tomatoes"]);
        let found = SearchEngine::suggest("TOMA", &known, &[]);

        assert_eq!(found.len(), 2);
        assert!(found.contains(&"Tomato".to_string()));
        assert!(found.contains(&"sun-dried tomatoes".to_string()));
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_input() {
        let known = strings(&["tomato", "cherry tomato"]);

        assert_eq!(SearchEngine::suggest(" tom", &known, &[]), strings(&["cherry tomato"]));
        assert_eq!(SearchEngine::suggest("tom", &known, &[]).len(), 2);
    }

    #[test]
    fn selected_ingredients_are_not_suggested_again() {
        let known = strings(&["garlic", "garlic powder", "garlic"]);
        let selected = strings(&["garlic"]);

        assert_eq!(
            SearchEngine::suggest("gar", &known, &selected),
            strings(&["garlic powder"])
        );
    }

    #[test]
    fn known_ingredients_are_distinct() {
        let recipe = |id: &str, ings: &[&str]| Recipe {
            id: RecipeId(id.into()),
            title: String::new(),
            ingredients: strings(ings),
            cuisine: "Any".into(),
            category: "Any".into(),
            dietary: vec![],
        };
        let corpus = vec![recipe("a", &["rice", "egg"]), recipe("b", &["egg", "leek"])];

        assert_eq!(
            SearchEngine::known_ingredients(&corpus),
            strings(&["rice", "egg", "leek"])
        );
    }
}
