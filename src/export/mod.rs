//! Read-only exports of the current data: CSV, JSON backup and an HTML
//! report, plus parsing of backups for import.

pub mod backup;
pub mod csv;
pub mod report;

use crate::study::StudyData;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use std::path::{Path, PathBuf};

pub use backup::parse_backup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Json,
    Report,
}

impl ExportKind {
    pub const ALL: [ExportKind; 3] = [ExportKind::Csv, ExportKind::Json, ExportKind::Report];

    pub fn file_name(self, now: &DateTime<Local>) -> String {
        let date = now.format("%Y-%m-%d");
        match self {
            ExportKind::Csv => format!("StudyHub_Data_{}.csv", date),
            ExportKind::Json => format!("StudyHub_Backup_{}.json", date),
            ExportKind::Report => format!("StudyHub_Report_{}.html", date),
        }
    }

    pub fn render(self, data: &StudyData, now: &DateTime<Local>) -> Result<String> {
        Ok(match self {
            ExportKind::Csv => csv::render_csv(data)?,
            ExportKind::Json => backup::render_backup(data, now.with_timezone(&Utc))
                .context("Failed to serialize backup")?,
            ExportKind::Report => report::render_report(data, now.date_naive()),
        })
    }
}

/// Render `kind` and write it into `dir`, returning the written path.
pub fn write_export(
    kind: ExportKind,
    data: &StudyData,
    dir: &Path,
    now: &DateTime<Local>,
) -> Result<PathBuf> {
    let contents = kind.render(data, now)?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let path = dir.join(kind.file_name(now));
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), ?kind, "export written");
    Ok(path)
}

/// Read and parse a backup file for import.
pub fn read_backup(path: &Path) -> Result<StudyData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = parse_backup(&text)
        .with_context(|| format!("{} is not a valid StudyHub backup", path.display()))?;
    anyhow::ensure!(
        data.ids_in_range(),
        "{} contains record ids too large to continue from",
        path.display()
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample_data;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn file_names_carry_the_date() {
        assert_eq!(ExportKind::Csv.file_name(&now()), "StudyHub_Data_2026-02-14.csv");
        assert_eq!(ExportKind::Json.file_name(&now()), "StudyHub_Backup_2026-02-14.json");
        assert_eq!(ExportKind::Report.file_name(&now()), "StudyHub_Report_2026-02-14.html");
    }

    #[test]
    fn written_backup_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let data = sample_data(now().date_naive());
        let path = write_export(ExportKind::Json, &data, dir.path(), &now()).unwrap();
        assert_eq!(read_backup(&path).unwrap(), data);
    }

    #[test]
    fn read_backup_reports_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{oops").unwrap();
        let err = read_backup(&path).unwrap_err();
        assert!(err.to_string().contains("not a valid StudyHub backup"));
        assert!(read_backup(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn read_backup_rejects_ids_without_headroom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.json");
        std::fs::write(
            &path,
            r#"{"notes":[{"id":9223372036854775807,"title":"t","content":"c"}]}"#,
        )
        .unwrap();
        let err = read_backup(&path).unwrap_err();
        assert!(err.to_string().contains("record ids too large"));
    }
}
