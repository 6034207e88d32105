//! Deadline reminders.
//!
//! The sweep compares each open task's deadline with today's date and yields
//! a reminder for anything due today or tomorrow. Delivery is gated by the
//! notification permission in the application state.

use crate::study::model::Task;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    DueToday,
    DueTomorrow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub title: String,
    pub body: String,
}

impl ReminderKind {
    pub fn title(self) -> &'static str {
        match self {
            ReminderKind::DueToday => "Deadline today!",
            ReminderKind::DueTomorrow => "Deadline tomorrow!",
        }
    }
}

/// Collect reminders for incomplete tasks due today or tomorrow, in task order.
pub fn sweep(tasks: &[Task], today: NaiveDate) -> Vec<Reminder> {
    tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| {
            let kind = match (task.deadline - today).num_days() {
                0 => ReminderKind::DueToday,
                1 => ReminderKind::DueTomorrow,
                _ => return None,
            };
            Some(Reminder {
                kind,
                title: kind.title().to_string(),
                body: format!("{} - {}", task.title, task.subject),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn task(title: &str, deadline: NaiveDate, completed: bool) -> Task {
        Task {
            id: 1,
            title: title.into(),
            subject: "Math".into(),
            deadline,
            completed,
        }
    }

    #[test]
    fn due_today_and_tomorrow_are_reported() {
        let tasks = vec![
            task("today", date(10), false),
            task("tomorrow", date(11), false),
            task("later", date(12), false),
            task("overdue", date(9), false),
        ];
        let reminders = sweep(&tasks, date(10));
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].kind, ReminderKind::DueToday);
        assert_eq!(reminders[0].body, "today - Math");
        assert_eq!(reminders[1].kind, ReminderKind::DueTomorrow);
        assert_eq!(reminders[1].title, "Deadline tomorrow!");
    }

    #[test]
    fn completed_tasks_never_remind() {
        let tasks = vec![task("done", date(10), true), task("done too", date(11), true)];
        assert!(sweep(&tasks, date(10)).is_empty());
    }

    #[test]
    fn month_boundary_counts_as_tomorrow() {
        let tasks = vec![task("april", NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(), false)];
        let reminders = sweep(&tasks, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
        assert_eq!(reminders[0].kind, ReminderKind::DueTomorrow);
    }
}
