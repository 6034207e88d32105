//! Full JSON backup and the matching import.
//!
//! A backup has the same shape as the saved document, with `exportDate` in
//! place of `lastSaved`. Import accepts either, and any missing collection
//! defaults to empty.

use crate::study::StudyData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupRef<'a> {
    #[serde(flatten)]
    data: &'a StudyData,
    export_date: DateTime<Utc>,
}

#[derive(Deserialize)]
struct BackupDocument {
    #[serde(flatten)]
    data: StudyData,
}

pub fn render_backup(data: &StudyData, exported_at: DateTime<Utc>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&BackupRef {
        data,
        export_date: exported_at,
    })
}

/// Parse a backup document. Nothing is applied here; the caller decides
/// whether to replace the current data.
pub fn parse_backup(text: &str) -> serde_json::Result<StudyData> {
    let doc: BackupDocument = serde_json::from_str(text)?;
    Ok(doc.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample_data;
    use crate::study::model::{GradeSubject, Score};
    use chrono::NaiveDate;

    #[test]
    fn backup_then_import_reproduces_data() {
        let mut data = sample_data(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        data.grades.push(GradeSubject {
            id: 9,
            subject: "Physics".into(),
            scores: vec![
                Score {
                    value: 72.5,
                    note: "lab".into(),
                },
                Score {
                    value: 88.0,
                    note: "-".into(),
                },
            ],
        });
        let text = render_backup(&data, Utc::now()).unwrap();
        assert!(text.contains("\"exportDate\""));
        assert_eq!(parse_backup(&text).unwrap(), data);
    }

    #[test]
    fn import_accepts_saved_document_shape() {
        let text = r#"{"tasks":[],"grades":[{"id":1,"subject":"Math","scores":[{"value":80,"note":"-"}]}],"lastSaved":"2026-01-01T00:00:00.000Z"}"#;
        let data = parse_backup(text).unwrap();
        assert_eq!(data.grades[0].scores[0].value, 80.0);
        assert!(data.notes.is_empty());
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(parse_backup("not json").is_err());
        assert!(parse_backup("[1, 2, 3]").is_err());
        assert!(parse_backup(r#"{"tasks": "nope"}"#).is_err());
    }
}
