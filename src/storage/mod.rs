//! Persistence of the study collections.
//!
//! The whole data set is one JSON document under [`DATA_KEY`]. Writes are
//! fire-and-forget: a failed save is logged and the in-memory state stays
//! authoritative for the rest of the session.

pub mod store;

use crate::study::model::{Card, FlashcardSet, Note, Task};
use crate::study::StudyData;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use store::{FileStore, Store};
#[cfg(test)]
pub use store::MemoryStore;

pub const DATA_KEY: &str = "studyhub_data";
const CORRUPT_KEY: &str = "studyhub_data.corrupt";

/// The persisted document: all collections plus the time of the last save.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedDocument {
    #[serde(flatten)]
    data: StudyData,
    #[serde(default)]
    last_saved: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedDocumentRef<'a> {
    #[serde(flatten)]
    data: &'a StudyData,
    last_saved: DateTime<Utc>,
}

/// Write the current collections. Returns `false` if the store rejected the
/// write; the failure is logged, never surfaced.
pub fn save_data(store: &mut dyn Store, data: &StudyData) -> bool {
    let doc = SavedDocumentRef {
        data,
        last_saved: Utc::now(),
    };
    let blob = match serde_json::to_string(&doc) {
        Ok(blob) => blob,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize study data");
            return false;
        }
    };
    match store.set(DATA_KEY, &blob) {
        Ok(()) => {
            tracing::debug!(bytes = blob.len(), "study data saved");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not persist study data; keeping it in memory");
            false
        }
    }
}

/// Load the collections, defaulting anything missing.
///
/// With no saved document and `seed_sample` set, a small example data set is
/// created and saved. An unreadable document is copied aside under
/// `studyhub_data.corrupt` and the session starts empty.
pub fn load_data(store: &mut dyn Store, seed_sample: bool, today: NaiveDate) -> StudyData {
    match store.get(DATA_KEY) {
        Ok(Some(blob)) => match serde_json::from_str::<SavedDocument>(&blob) {
            Ok(doc) if !doc.data.ids_in_range() => {
                tracing::error!("saved study data has out-of-range ids; starting empty");
                keep_corrupt_copy(store, &blob);
                StudyData::default()
            }
            Ok(doc) => {
                tracing::info!(
                    tasks = doc.data.tasks.len(),
                    grades = doc.data.grades.len(),
                    sets = doc.data.flashcard_sets.len(),
                    notes = doc.data.notes.len(),
                    last_saved = ?doc.last_saved,
                    "study data loaded"
                );
                doc.data
            }
            Err(e) => {
                tracing::error!(error = %e, "saved study data is unreadable; starting empty");
                keep_corrupt_copy(store, &blob);
                StudyData::default()
            }
        },
        Ok(None) if seed_sample => {
            tracing::info!("no saved study data; seeding examples");
            let data = sample_data(today);
            save_data(store, &data);
            data
        }
        Ok(None) => StudyData::default(),
        Err(e) => {
            tracing::warn!(error = %e, "study data store unavailable; starting empty");
            StudyData::default()
        }
    }
}

fn keep_corrupt_copy(store: &mut dyn Store, blob: &str) {
    if let Err(e) = store.set(CORRUPT_KEY, blob) {
        tracing::warn!(error = %e, "could not keep a copy of the unreadable data");
    }
}

/// Example records shown on first launch.
pub fn sample_data(today: NaiveDate) -> StudyData {
    let in_days = |n: u64| today.checked_add_days(Days::new(n)).unwrap_or(today);
    StudyData {
        tasks: vec![
            Task {
                id: 1,
                title: "Math homework - page 45".into(),
                subject: "Math".into(),
                deadline: in_days(2),
                completed: false,
            },
            Task {
                id: 2,
                title: "Science presentation on photosynthesis".into(),
                subject: "Science".into(),
                deadline: in_days(4),
                completed: false,
            },
        ],
        grades: Vec::new(),
        flashcard_sets: vec![FlashcardSet {
            id: 1,
            name: "Indonesian vocabulary".into(),
            cards: vec![
                Card {
                    id: 1,
                    front: "Beautiful".into(),
                    back: "Indah".into(),
                },
                Card {
                    id: 2,
                    front: "Difficult".into(),
                    back: "Sulit".into(),
                },
            ],
        }],
        notes: vec![Note {
            id: 1,
            title: "Math formulas".into(),
            subject: Some("Math".into()),
            content: "a² + b² = c²\n(a+b)² = a² + 2ab + b²".into(),
        }],
    }
}
