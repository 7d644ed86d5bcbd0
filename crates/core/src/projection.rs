//! Projection
//!
//! Derived, non-mutating filtered/sorted views of the catalog for display.

use std::cmp::Ordering;

use crate::{catalog::Catalog, lessons::Lesson};

/// Attribute a projection sorts lessons by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by subject, case-insensitively.
    Subject,

    /// Sort by location, case-insensitively.
    Location,

    /// Sort by price.
    Price,

    /// Sort by remaining spaces.
    Availability,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    Ascending,

    /// Largest first.
    Descending,
}

/// A sort key with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    /// Attribute to sort by.
    pub key: SortKey,

    /// Direction to sort in.
    pub direction: Direction,
}

/// Project the catalog for display: filter by a search query, then sort.
///
/// A non-empty query matches case-insensitively as a substring of the subject
/// or the location; an empty query keeps every lesson. Sorting is stable and
/// runs on the filtered copy, so ties keep catalog order and the catalog
/// itself is never reordered.
#[must_use]
pub fn project<'a>(catalog: &'a Catalog, query: &str, sort: Option<Sort>) -> Vec<&'a Lesson> {
    let query = query.trim().to_lowercase();

    let mut lessons: Vec<&Lesson> = catalog
        .iter()
        .filter(|lesson| query.is_empty() || matches_query(lesson, &query))
        .collect();

    if let Some(sort) = sort {
        lessons.sort_by(|a, b| {
            let ordering = compare(a, b, sort.key);

            match sort.direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
    }

    lessons
}

fn matches_query(lesson: &Lesson, query: &str) -> bool {
    lesson.subject.to_lowercase().contains(query) || lesson.location.to_lowercase().contains(query)
}

fn compare(a: &Lesson, b: &Lesson, key: SortKey) -> Ordering {
    match key {
        SortKey::Subject => a.subject.to_lowercase().cmp(&b.subject.to_lowercase()),
        SortKey::Location => a.location.to_lowercase().cmp(&b.location.to_lowercase()),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Availability => a.spaces.cmp(&b.spaces),
    }
}
