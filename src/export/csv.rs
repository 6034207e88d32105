//! Spreadsheet-friendly CSV export with one section per collection.
//!
//! Sections are separated by `=== NAME ===` banner lines, which are written
//! outside the CSV writer. Every field inside a section is quoted.

use crate::study::model::format_score;
use crate::study::StudyData;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

/// Run `write` against a fresh quoting writer and return what it produced.
fn records<F>(write: F) -> Result<String>
where
    F: FnOnce(&mut Writer<Vec<u8>>) -> csv::Result<()>,
{
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());
    write(&mut wtr).context("Failed to write CSV records")?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush CSV records")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

pub fn render_csv(data: &StudyData) -> Result<String> {
    let mut out = String::from("StudyHub Data Export\n\n");

    out.push_str("=== TASKS ===\n");
    out.push_str(&records(|wtr| {
        wtr.write_record(["Task", "Subject", "Deadline", "Status"])?;
        for task in &data.tasks {
            let deadline = task.deadline.format("%Y-%m-%d").to_string();
            wtr.write_record([
                task.title.as_str(),
                task.subject.as_str(),
                deadline.as_str(),
                if task.completed { "Done" } else { "Pending" },
            ])?;
        }
        Ok(())
    })?);
    out.push_str("\n\n");

    out.push_str("=== GRADES ===\n");
    for grade in &data.grades {
        out.push('\n');
        out.push_str(&records(|wtr| {
            wtr.write_record([grade.subject.as_str()])?;
            wtr.write_record(["Score", "Note"])?;
            for score in &grade.scores {
                let value = format_score(score.value);
                wtr.write_record([value.as_str(), score.note.as_str()])?;
            }
            let average = grade.average_display();
            wtr.write_record(["Average", average.as_str()])?;
            Ok(())
        })?);
    }
    out.push_str("\n\n");

    out.push_str("=== NOTES ===\n");
    out.push_str(&records(|wtr| {
        wtr.write_record(["Title", "Subject", "Content"])?;
        for note in &data.notes {
            wtr.write_record([
                note.title.as_str(),
                note.subject_label().unwrap_or("-"),
                note.content.as_str(),
            ])?;
        }
        Ok(())
    })?);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::model::{GradeSubject, Note, Score, Task};
    use chrono::NaiveDate;

    fn data() -> StudyData {
        StudyData {
            tasks: vec![Task {
                id: 1,
                title: "Read \"Hamlet\"".into(),
                subject: "English".into(),
                deadline: NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
                completed: true,
            }],
            grades: vec![GradeSubject {
                id: 2,
                subject: "Math".into(),
                scores: vec![
                    Score {
                        value: 80.0,
                        note: "quiz".into(),
                    },
                    Score {
                        value: 90.0,
                        note: "-".into(),
                    },
                ],
            }],
            flashcard_sets: vec![],
            notes: vec![Note {
                id: 3,
                title: "Pythagoras".into(),
                subject: None,
                content: "a, b and \"c\"".into(),
            }],
        }
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut data = data();
        data.tasks[0].title = "say \"hi\"".into();
        let csv = render_csv(&data).unwrap();
        assert!(csv.contains("\"say \"\"hi\"\"\","));
    }

    #[test]
    fn has_three_sections_in_order() {
        let csv = render_csv(&data()).unwrap();
        let tasks = csv.find("=== TASKS ===").unwrap();
        let grades = csv.find("=== GRADES ===").unwrap();
        let notes = csv.find("=== NOTES ===").unwrap();
        assert!(tasks < grades && grades < notes);
    }

    #[test]
    fn rows_are_escaped_and_averaged() {
        let csv = render_csv(&data()).unwrap();
        assert!(csv.contains("\"Task\",\"Subject\",\"Deadline\",\"Status\"\n"));
        assert!(csv.contains("\"Read \"\"Hamlet\"\"\",\"English\",\"2026-01-30\",\"Done\"\n"));
        assert!(csv.contains("\"Math\"\n\"Score\",\"Note\"\n\"80\",\"quiz\"\n\"90\",\"-\"\n\"Average\",\"85.00\"\n"));
        assert!(csv.contains("\"Pythagoras\",\"-\",\"a, b and \"\"c\"\"\"\n"));
    }
}
