//! Lessons

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque comparable key identifying a lesson.
///
/// Locally seeded catalogs use small numeric ids; a remote inventory service
/// hands back opaque string identifiers. Both are valid keys and compare only
/// against themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LessonId {
    /// Numeric id from a locally seeded catalog.
    Local(u64),

    /// Opaque string id assigned by the remote inventory service.
    Remote(String),
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(id) => write!(f, "{id}"),
            Self::Remote(id) => f.write_str(id),
        }
    }
}

impl From<u64> for LessonId {
    fn from(id: u64) -> Self {
        Self::Local(id)
    }
}

impl From<&str> for LessonId {
    fn from(id: &str) -> Self {
        Self::Remote(id.to_owned())
    }
}

/// A purchasable class offering with bounded remaining capacity.
///
/// Capacity (`spaces`) is mutated only through cart reservations; lessons are
/// created at catalog load and never deleted within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson identity; accepts the remote `_id` field on the wire.
    #[serde(alias = "_id")]
    pub id: LessonId,

    /// Subject taught, e.g. "Mathematics".
    pub subject: String,

    /// Where the lesson is held.
    pub location: String,

    /// Price per space.
    pub price: u64,

    /// Remaining reservable capacity.
    pub spaces: u64,

    /// Display image URL.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn lesson_id_from_number_and_string_differ() {
        assert_ne!(
            LessonId::from(5),
            LessonId::from("5"),
            "local and remote ids must not collide"
        );
    }

    #[test]
    fn deserializes_local_numeric_id() -> TestResult {
        let lesson: Lesson = serde_json::from_str(
            r#"{"id":1,"subject":"Mathematics","location":"Dubai","price":150,"spaces":5,"image":"math.png"}"#,
        )?;

        assert_eq!(lesson.id, LessonId::Local(1));
        assert_eq!(lesson.subject, "Mathematics");

        Ok(())
    }

    #[test]
    fn deserializes_remote_underscore_id() -> TestResult {
        let lesson: Lesson = serde_json::from_str(
            r#"{"_id":"66f1a2","subject":"Art","location":"Dubai","price":100,"spaces":10,"image":"art.png"}"#,
        )?;

        assert_eq!(lesson.id, LessonId::Remote("66f1a2".to_owned()));

        Ok(())
    }

    #[test]
    fn display_round_trips_both_variants() {
        assert_eq!(LessonId::Local(3).to_string(), "3");
        assert_eq!(LessonId::from("abc123").to_string(), "abc123");
    }
}
