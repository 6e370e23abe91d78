use crate::core::Recipe;
use crate::filter::FilterSelection;

/// Minimum share of a recipe's ingredients (in percent, inclusive) the user
/// must have on hand for the recipe to match.
pub const MATCH_THRESHOLD_PERCENT: usize = 60;

/// A recipe that passed both the ingredient test and the filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub matching: usize,
    pub total: usize,
}

impl RecipeMatch<'_> {
    pub fn percentage(&self) -> f64 {
        self.matching as f64 / self.total as f64 * 100.0
    }
}

pub fn normalize(ingredient: &str) -> String {
    ingredient.to_lowercase()
}

/// Either string containing the other counts as a match ("egg" / "eggs",
/// "tomato" / "cherry tomato"). Both sides must already be normalized.
fn ingredient_matches(recipe_ingredient: &str, available: &str) -> bool {
    recipe_ingredient.contains(available) || available.contains(recipe_ingredient)
}

/// Number of the recipe's ingredients covered by at least one available one.
pub fn matching_count(recipe_ingredients: &[String], available: &[String]) -> usize {
    recipe_ingredients
        .iter()
        .map(|ing| normalize(ing))
        .filter(|ing| available.iter().any(|have| ingredient_matches(ing, have)))
        .count()
}

/// Match percentage in `0..=100`, or `None` for a recipe without ingredients.
/// `available` must already be normalized.
pub fn match_percentage(recipe_ingredients: &[String], available: &[String]) -> Option<f64> {
    if recipe_ingredients.is_empty() {
        return None;
    }
    let matching = matching_count(recipe_ingredients, available);
    Some(matching as f64 / recipe_ingredients.len() as f64 * 100.0)
}

fn meets_threshold(matching: usize, total: usize) -> bool {
    total > 0 && matching * 100 >= MATCH_THRESHOLD_PERCENT * total
}

/// Scores every recipe of the corpus and keeps the ones that pass, in corpus
/// order.
pub fn match_recipes<'a>(
    available: &[String],
    corpus: &'a [Recipe],
    filters: Option<&FilterSelection>,
) -> Vec<RecipeMatch<'a>> {
    if available.is_empty() {
        return Vec::new();
    }

    let normalized: Vec<String> = available.iter().map(|a| normalize(a)).collect();

    corpus
        .iter()
        .filter_map(|recipe| {
            let total = recipe.ingredients.len();
            let matching = matching_count(&recipe.ingredients, &normalized);
            let ingredient_ok = meets_threshold(matching, total);
            let filter_ok = filters.map_or(true, |f| f.matches(recipe));

            (ingredient_ok && filter_ok).then_some(RecipeMatch {
                recipe,
                matching,
                total,
            })
        })
        .collect()
}

/// Recipes of `corpus` the user can (mostly) cook with `available`, in corpus
/// order. Callers wanting ranked output sort the result themselves.
pub fn find_recipes_by_ingredients<'a>(
    available: &[String],
    corpus: &'a [Recipe],
    filters: Option<&FilterSelection>,
) -> Vec<&'a Recipe> {
    match_recipes(available, corpus, filters)
        .into_iter()
        .map(|m| m.recipe)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecipeId;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId(id.into()),
            title: id.into(),
            ingredients: strings(ingredients),
            cuisine: "Italian".into(),
            category: "Main".into(),
            dietary: vec![],
        }
    }

    #[test]
    fn forty_percent_is_excluded() {
        let corpus = vec![recipe("cake", &["eggs", "flour", "sugar", "butter", "vanilla"])];
        let available = strings(&["egg", "flour"]);

        assert_eq!(matching_count(&corpus[0].ingredients, &available), 2);
        assert_eq!(match_percentage(&corpus[0].ingredients, &available), Some(40.0));
        assert!(find_recipes_by_ingredients(&available, &corpus, None).is_empty());
    }

    #[test]
    fn full_coverage_is_included() {
        let corpus = vec![recipe("batter", &["eggs", "flour"])];
        let available = strings(&["egg", "flour"]);

        let found = match_recipes(&available, &corpus, None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].percentage(), 100.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let corpus = vec![recipe("soup", &["onion", "carrot", "celery", "salt", "leek"])];
        let available = strings(&["onion", "carrot", "celery"]);

        assert_eq!(find_recipes_by_ingredients(&available, &corpus, None).len(), 1);
    }

    #[test]
    fn containment_works_both_ways_and_ignores_case() {
        let corpus = vec![recipe("salad", &["Cherry Tomato", "basil"])];
        let available = strings(&["TOMATO", "fresh basil leaves"]);

        let normalized: Vec<String> = available.iter().map(|a| normalize(a)).collect();

        assert_eq!(matching_count(&corpus[0].ingredients, &normalized), 2);
        assert_eq!(find_recipes_by_ingredients(&available, &corpus, None).len(), 1);
    }

    #[test]
    fn no_available_ingredients_means_no_matches() {
        let corpus = vec![recipe("anything", &["water"])];
        assert!(find_recipes_by_ingredients(&[], &corpus, None).is_empty());
    }

    #[test]
    fn recipe_without_ingredients_never_matches() {
        let corpus = vec![recipe("air", &[]), recipe("toast", &["bread"])];
        let available = strings(&["bread", ""]);

        assert_eq!(match_percentage(&corpus[0].ingredients, &available), None);
        let found = find_recipes_by_ingredients(&available, &corpus, None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, RecipeId("toast".into()));
    }

    #[test]
    fn output_keeps_corpus_order() {
        let corpus = vec![
            recipe("b", &["rice", "beans", "salt"]),
            recipe("a", &["rice"]),
            recipe("c", &["beans"]),
        ];
        let available = strings(&["rice", "beans"]);

        let ids: Vec<_> = find_recipes_by_ingredients(&available, &corpus, None)
            .into_iter()
            .map(|r| r.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn filters_apply_on_top_of_ingredient_match() {
        let mut vegan = recipe("vegan", &["tofu"]);
        vegan.dietary = strings(&["vegan", "gluten free"]);
        let mut vegetarian = recipe("vegetarian", &["tofu"]);
        vegetarian.dietary = strings(&["vegetarian"]);
        let corpus = vec![vegan, vegetarian];
        let available = strings(&["tofu"]);

        let filters = FilterSelection::new(None, None, strings(&["vegan"]));
        let found = find_recipes_by_ingredients(&available, &corpus, Some(&filters));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.0, "vegan");

        let filters = FilterSelection::new(Some("Mexican".into()), None, vec![]);
        assert!(find_recipes_by_ingredients(&available, &corpus, Some(&filters)).is_empty());
    }

    #[test]
    fn inputs_are_left_untouched() {
        let corpus = vec![recipe("pie", &["Apple", "Flour"])];
        let available = strings(&["APPLE", "flour"]);
        let before = corpus.clone();

        find_recipes_by_ingredients(&available, &corpus, None);

        assert_eq!(corpus, before);
        assert_eq!(available, strings(&["APPLE", "flour"]));
    }
}
