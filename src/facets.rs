//! Distinct cuisines, categories and dietary tags of a corpus, used to offer
//! filter choices.

use crate::core::Recipe;
use std::collections::BTreeSet;

fn distinct<'a>(labels: impl Iterator<Item = &'a String>) -> Vec<String> {
    labels.cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

pub fn unique_cuisines(corpus: &[Recipe]) -> Vec<String> {
    distinct(corpus.iter().map(|r| &r.cuisine))
}

pub fn unique_categories(corpus: &[Recipe]) -> Vec<String> {
    distinct(corpus.iter().map(|r| &r.category))
}

pub fn unique_dietary(corpus: &[Recipe]) -> Vec<String> {
    distinct(corpus.iter().flat_map(|r| r.dietary.iter()))
}
