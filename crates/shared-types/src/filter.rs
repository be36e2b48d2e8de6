//! Client-side collection filter.
//!
//! `apply` narrows an already-fetched list by a free-text query and a set of
//! selected tags. Output is recomputed from scratch on every call and keeps
//! the source order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An item that can be narrowed by text and tag criteria.
pub trait Filterable {
    /// Text fields searched by the query.
    fn search_fields(&self) -> Vec<&str>;

    /// Categorical labels used for faceted filtering.
    fn tags(&self) -> &BTreeSet<String>;
}

/// Page-owned filter input: a query string and the selected tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub selected_tags: BTreeSet<String>,
}

impl FilterState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select an absent tag, or deselect a present one.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_tags.clear();
    }

    pub fn is_cleared(&self) -> bool {
        self.query.is_empty() && self.selected_tags.is_empty()
    }

    fn text_match<T: Filterable>(&self, item: &T) -> bool {
        let needle = self.query.to_lowercase();
        needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    fn tag_match<T: Filterable>(&self, item: &T) -> bool {
        self.selected_tags.is_empty()
            || item
                .tags()
                .iter()
                .any(|tag| self.selected_tags.contains(tag))
    }

    /// Whether a single item passes both predicates.
    pub fn includes<T: Filterable>(&self, item: &T) -> bool {
        self.text_match(item) && self.tag_match(item)
    }

    /// Classify the filtered view for display.
    pub fn outcome<'a, T: Filterable>(&self, items: &'a [T]) -> FilterOutcome<'a, T> {
        let visible = apply(items, self);
        if !visible.is_empty() {
            FilterOutcome::Matches(visible)
        } else if self.is_cleared() {
            FilterOutcome::NoItems
        } else {
            FilterOutcome::NoMatches
        }
    }
}

/// The terminal display state of a filtered list.
#[derive(Debug, PartialEq)]
pub enum FilterOutcome<'a, T> {
    Matches(Vec<&'a T>),
    /// Items exist but none pass the current filter.
    NoMatches,
    /// The source collection itself is empty.
    NoItems,
}

/// Visible subset of `items` under `state`, in source order.
pub fn apply<'a, T: Filterable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    items.iter().filter(|item| state.includes(*item)).collect()
}

/// Sorted distinct tags across `items`.
pub fn tag_catalog<T: Filterable>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
