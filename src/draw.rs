//! Random question draw, the "shake the jar" action.

use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use crate::{
    dataset::{Category, Dataset},
    language::Language,
    resolve::Resolver,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawnQuestion {
    /// Index of the topic in the dataset.
    pub topic: usize,
    pub topic_name: String,
    pub category: Category,
    /// Index of the record inside its category list.
    pub index: usize,
    pub text: String,
}

/// Pick a random topic, category and record, and resolve it for `language`.
///
/// Topics are picked uniformly, then a category among the topic's non-empty
/// ones, then a record. Returns `None` when the dataset has no records.
pub fn draw<R: Rng + ?Sized>(
    dataset: &Dataset,
    resolver: &Resolver<'_>,
    language: Language,
    rng: &mut R,
) -> Option<DrawnQuestion> {
    let topics: Vec<usize> = dataset
        .topics
        .iter()
        .enumerate()
        .filter(|(_, topic)| !topic.is_empty())
        .map(|(i, _)| i)
        .collect();
    let &topic_index = topics.choose(rng)?;
    let topic = &dataset.topics[topic_index];

    let categories: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|&category| !topic.records(category).is_empty())
        .collect();
    let &category = categories.choose(rng)?;

    let records = topic.records(category);
    let index = rng.gen_range(0..records.len());

    Some(DrawnQuestion {
        topic: topic_index,
        topic_name: topic.name.clone(),
        category,
        index,
        text: resolver.resolve(&records[index], language),
    })
}
