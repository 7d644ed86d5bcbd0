//! Catalog

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::lessons::{Lesson, LessonId};

/// Errors related to catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No lesson with the given id exists in the catalog.
    #[error("Lesson {0} not found in catalog")]
    UnknownLesson(LessonId),
}

/// The authoritative set of lessons and their remaining capacity.
///
/// Display order matches load order; lookups go through an id index so that
/// opaque remote string ids cost the same as local numeric ones.
#[derive(Debug, Default)]
pub struct Catalog {
    lessons: Vec<Lesson>,
    index: FxHashMap<LessonId, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from the given lessons, preserving their order.
    #[must_use]
    pub fn from_lessons(lessons: impl Into<Vec<Lesson>>) -> Self {
        let mut catalog = Self::new();

        catalog.replace(lessons.into());

        catalog
    }

    /// Replace the full lesson set, e.g. after a remote refresh or a
    /// server-side search.
    pub fn replace(&mut self, lessons: Vec<Lesson>) {
        self.index = lessons
            .iter()
            .enumerate()
            .map(|(position, lesson)| (lesson.id.clone(), position))
            .collect();

        self.lessons = lessons;
    }

    /// Get a lesson by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownLesson` if the id is not in the catalog.
    pub fn get(&self, id: &LessonId) -> Result<&Lesson, CatalogError> {
        self.index
            .get(id)
            .and_then(|position| self.lessons.get(*position))
            .ok_or_else(|| CatalogError::UnknownLesson(id.clone()))
    }

    pub(crate) fn get_mut(&mut self, id: &LessonId) -> Result<&mut Lesson, CatalogError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| CatalogError::UnknownLesson(id.clone()))?;

        self.lessons
            .get_mut(position)
            .ok_or_else(|| CatalogError::UnknownLesson(id.clone()))
    }

    /// Whether a lesson with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &LessonId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over the lessons in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter()
    }

    /// Get the number of lessons in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
