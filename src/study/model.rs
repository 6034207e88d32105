//! Study record types.
//!
//! Field names on the wire are camelCase so documents written by earlier
//! StudyHub versions load unchanged. Every collection defaults to empty when
//! its key is missing.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Client-generated record id: a millisecond timestamp, bumped when needed to
/// stay unique.
pub type RecordId = i64;

/// Largest id accepted from a saved document or backup. Anything above it
/// leaves the allocator no room to hand out fresh ids.
pub const MAX_RECORD_ID: RecordId = i64::MAX / 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub subject: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub value: f64,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSubject {
    pub id: RecordId,
    pub subject: String,
    #[serde(default)]
    pub scores: Vec<Score>,
}

impl GradeSubject {
    /// Arithmetic mean of all recorded values. `None` when no score exists.
    pub fn average(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: f64 = self.scores.iter().map(|s| s.value).sum();
        Some(sum / self.scores.len() as f64)
    }

    /// Average rendered with two decimals, e.g. `"85.00"`.
    pub fn average_display(&self) -> String {
        match self.average() {
            Some(avg) => format!("{:.2}", avg),
            None => "-".to_string(),
        }
    }
}

/// Render a score without a trailing `.0` for whole numbers.
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: RecordId,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardSet {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
}

impl Note {
    /// Subject label, treating an empty string the same as no subject.
    pub fn subject_label(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.is_empty())
    }
}

/// The four user collections, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyData {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub grades: Vec<GradeSubject>,
    #[serde(default)]
    pub flashcard_sets: Vec<FlashcardSet>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl StudyData {
    /// Largest id used by any record, including nested cards.
    pub fn max_id(&self) -> RecordId {
        let tasks = self.tasks.iter().map(|t| t.id);
        let grades = self.grades.iter().map(|g| g.id);
        let sets = self.flashcard_sets.iter().map(|s| s.id);
        let cards = self
            .flashcard_sets
            .iter()
            .flat_map(|s| s.cards.iter().map(|c| c.id));
        let notes = self.notes.iter().map(|n| n.id);
        tasks
            .chain(grades)
            .chain(sets)
            .chain(cards)
            .chain(notes)
            .max()
            .unwrap_or(0)
    }

    /// True when every id is at most [`MAX_RECORD_ID`].
    pub fn ids_in_range(&self) -> bool {
        self.max_id() <= MAX_RECORD_ID
    }

    pub fn find_set(&self, id: RecordId) -> Option<&FlashcardSet> {
        self.flashcard_sets.iter().find(|s| s.id == id)
    }
}

/// Hands out timestamp-based ids that never repeat within a session.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: RecordId,
}

impl IdAllocator {
    pub fn next(&mut self) -> RecordId {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }

    /// Make sure future ids are above every id already present in `data`.
    pub fn observe(&mut self, data: &StudyData) {
        self.last = self.last.max(data.max_id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(values: &[f64]) -> GradeSubject {
        GradeSubject {
            id: 1,
            subject: "Math".into(),
            scores: values
                .iter()
                .map(|v| Score {
                    value: *v,
                    note: "-".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn average_is_mean_with_two_decimals() {
        assert_eq!(grade(&[80.0, 90.0]).average_display(), "85.00");
        assert_eq!(grade(&[70.0, 75.0, 77.0]).average_display(), "74.00");
        assert_eq!(grade(&[100.0]).average(), Some(100.0));
        assert_eq!(grade(&[]).average_display(), "-");
    }

    #[test]
    fn scores_render_without_trailing_zero() {
        assert_eq!(format_score(80.0), "80");
        assert_eq!(format_score(72.5), "72.5");
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = IdAllocator::default();
        let mut prev = ids.next();
        for _ in 0..1000 {
            let id = ids.next();
            assert!(id > prev);
            prev = id;
        }
    }

    #[test]
    fn observe_moves_past_existing_ids() {
        let mut ids = IdAllocator::default();
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        let data = StudyData {
            notes: vec![Note {
                id: far_future,
                title: "t".into(),
                subject: None,
                content: "c".into(),
            }],
            ..Default::default()
        };
        ids.observe(&data);
        assert_eq!(ids.next(), far_future + 1);
    }

    #[test]
    fn allocator_saturates_instead_of_overflowing() {
        let mut ids = IdAllocator::default();
        let data = StudyData {
            notes: vec![Note {
                id: i64::MAX,
                title: "t".into(),
                subject: None,
                content: "c".into(),
            }],
            ..Default::default()
        };
        assert!(!data.ids_in_range());
        ids.observe(&data);
        assert_eq!(ids.next(), i64::MAX);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let data: StudyData =
            serde_json::from_str(r#"{"tasks":[{"id":1,"title":"a","subject":"b","deadline":"2026-01-30","completed":false}]}"#)
                .unwrap();
        assert_eq!(data.tasks.len(), 1);
        assert!(data.grades.is_empty());
        assert!(data.flashcard_sets.is_empty());
        assert!(data.notes.is_empty());
    }

    #[test]
    fn flashcard_sets_use_camel_case_key() {
        let data = StudyData {
            flashcard_sets: vec![FlashcardSet {
                id: 3,
                name: "Vocab".into(),
                cards: vec![],
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"flashcardSets\""));
    }

    #[test]
    fn empty_note_subject_has_no_label() {
        let note: Note =
            serde_json::from_str(r#"{"id":1,"title":"t","subject":"","content":"c"}"#).unwrap();
        assert_eq!(note.subject_label(), None);
    }
}
