//! Fixtures
//!
//! The seed catalog used by in-memory sessions, the examples, and the test
//! suites.

use crate::lessons::{Lesson, LessonId};

/// The eight seed lessons the storefront ships with.
#[must_use]
pub fn seed_lessons() -> Vec<Lesson> {
    (1u64..)
        .zip([
            ("Mathematics", "Dubai", 150, 5, "math.png"),
            ("English", "Abu Dhabi", 120, 8, "english.png"),
            ("Science", "Sharjah", 180, 3, "science.png"),
            ("Art", "Dubai", 100, 10, "art.png"),
            ("Music", "Ajman", 130, 6, "music.png"),
            ("History", "Dubai", 140, 7, "history.png"),
            ("Geography", "Sharjah", 135, 4, "geography.png"),
            ("Physics", "Abu Dhabi", 170, 5, "physics.png"),
        ])
        .map(|(id, (subject, location, price, spaces, image))| Lesson {
            id: LessonId::Local(id),
            subject: subject.to_owned(),
            location: location.to_owned(),
            price,
            spaces,
            image: format!("https://images.example.com/lessons/{image}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_sequential_from_one() {
        let lessons = seed_lessons();

        assert_eq!(lessons.len(), 8);
        assert_eq!(lessons.first().map(|l| l.id.clone()), Some(LessonId::Local(1)));
        assert_eq!(lessons.last().map(|l| l.id.clone()), Some(LessonId::Local(8)));
    }
}
