//! Printable HTML report of tasks, grades and notes.

use crate::study::model::format_score;
use crate::study::StudyData;
use chrono::NaiveDate;
use std::fmt::Write;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; padding: 20px; }
h1 { color: #059669; }
h2 { color: #0d9488; margin-top: 30px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
th { background-color: #f0fdfa; color: #064e3b; font-weight: bold; }
.completed { text-decoration: line-through; color: #888; }
.section { margin-bottom: 40px; }
.note { white-space: pre-wrap; background: #f8fafc; padding: 15px; border-left: 4px solid #059669; }";

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render_report(data: &StudyData, today: NaiveDate) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>StudyHub Report</title>\n<style>\n{}\n</style>\n</head>\n<body>\n",
        STYLE
    );
    html.push_str("<h1>StudyHub - Data Report</h1>\n");
    let _ = writeln!(
        html,
        "<p><strong>Export date:</strong> {}</p>",
        today.format("%A, %e %B %Y")
    );

    html.push_str("<div class=\"section\">\n<h2>Tasks &amp; Deadlines</h2>\n<table>\n");
    html.push_str("<tr><th>Task</th><th>Subject</th><th>Deadline</th><th>Status</th></tr>\n");
    for task in &data.tasks {
        let _ = writeln!(
            html,
            "<tr><td{}>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            if task.completed { " class=\"completed\"" } else { "" },
            html_escape(&task.title),
            html_escape(&task.subject),
            task.deadline.format("%d/%m/%Y"),
            if task.completed { "Done" } else { "Pending" },
        );
    }
    html.push_str("</table>\n</div>\n");

    html.push_str("<div class=\"section\">\n<h2>Grades</h2>\n");
    for grade in &data.grades {
        let _ = writeln!(html, "<h3>{}</h3>", html_escape(&grade.subject));
        html.push_str("<table>\n<tr><th>Score</th><th>Note</th></tr>\n");
        for score in &grade.scores {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td></tr>",
                format_score(score.value),
                html_escape(&score.note)
            );
        }
        let _ = writeln!(
            html,
            "<tr><th>Average</th><th>{}</th></tr>\n</table>",
            grade.average_display()
        );
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"section\">\n<h2>Notes</h2>\n");
    for note in &data.notes {
        let subject = note
            .subject_label()
            .map(|s| format!(" ({})", html_escape(s)))
            .unwrap_or_default();
        let _ = writeln!(
            html,
            "<h3>{}{}</h3>\n<p class=\"note\">{}</p>",
            html_escape(&note.title),
            subject,
            html_escape(&note.content)
        );
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample_data;
    use crate::study::model::Note;

    #[test]
    fn escapes_user_text() {
        let data = StudyData {
            notes: vec![Note {
                id: 1,
                title: "<script>".into(),
                subject: Some("A & B".into()),
                content: "x < y".into(),
            }],
            ..Default::default()
        };
        let html = render_report(&data, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(html.contains("<h3>&lt;script&gt; (A &amp; B)</h3>"));
        assert!(html.contains("x &lt; y"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn lists_every_task() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let data = sample_data(today);
        let html = render_report(&data, today);
        for task in &data.tasks {
            assert!(html.contains(&task.title));
        }
        assert!(html.contains("Thursday,  1 January 2026"));
    }
}
