use crate::app::form::Form;
use crate::app::input::InputState;
use crate::config::{AppConfig, Permission};
use crate::flashcards::Navigator;
use crate::pomodoro::{Durations, PomodoroTimer};
use crate::study::{RecordId, StudyData, Tracker};
use chrono::Local;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tasks,
    Grades,
    Flashcards,
    Pomodoro,
    Notes,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Tasks,
        Tab::Grades,
        Tab::Flashcards,
        Tab::Pomodoro,
        Tab::Notes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Tasks => "Tasks",
            Tab::Grades => "Grades",
            Tab::Flashcards => "Flashcards",
            Tab::Pomodoro => "Pomodoro",
            Tab::Notes => "Notes",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Operations that only run after the user answers yes.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingOp {
    DeleteTask(RecordId),
    DeleteNote(RecordId),
    Import(Box<StudyData>),
    NotificationPermission,
}

#[derive(Debug, Clone)]
pub struct Confirm {
    pub prompt: String,
    pub op: PendingOp,
}

/// What currently captures keyboard input on top of the tab content.
#[derive(Debug, Clone, Default)]
pub enum Overlay {
    #[default]
    None,
    Form(Form),
    Confirm(Confirm),
    Command(InputState),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub timestamp: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Cursor into a list whose length can change underneath it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCursor {
    pub selected: usize,
}

impl ListCursor {
    pub fn down(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor inside `0..len` after removals.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub tracker: Tracker,
    pub timer: PomodoroTimer,
    pub navigator: Navigator,
    /// The one note currently open for editing, if any.
    pub editing_note: Option<RecordId>,
    pub tab: Tab,
    pub tasks_cursor: ListCursor,
    pub grades_cursor: ListCursor,
    pub sets_cursor: ListCursor,
    pub notes_cursor: ListCursor,
    pub overlay: Overlay,
    /// Command line history survives closing the command line.
    pub command_history: Vec<String>,
    pub notifications: VecDeque<Notification>,
    pub status_message: Option<StatusMessage>,
    pub pending_bell: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, data: StudyData) -> Self {
        let timer = PomodoroTimer::new(Durations::from(&config.pomodoro));
        Self {
            config,
            tracker: Tracker::new(data),
            timer,
            navigator: Navigator::default(),
            editing_note: None,
            tab: Tab::Tasks,
            tasks_cursor: ListCursor::default(),
            grades_cursor: ListCursor::default(),
            sets_cursor: ListCursor::default(),
            notes_cursor: ListCursor::default(),
            overlay: Overlay::None,
            command_history: Vec::new(),
            notifications: VecDeque::new(),
            status_message: None,
            pending_bell: false,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn data(&self) -> &StudyData {
        self.tracker.data()
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.status_message = None;
        }
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
        self.dirty = true;
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
        self.dirty = true;
    }

    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = overlay;
        self.dirty = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
        self.dirty = true;
    }

    pub fn ask(&mut self, prompt: impl Into<String>, op: PendingOp) {
        self.open_overlay(Overlay::Confirm(Confirm {
            prompt: prompt.into(),
            op,
        }));
    }

    /// Deliver a notification if the user allowed them. Returns whether it
    /// was shown.
    pub fn notify(&mut self, title: &str, body: &str) -> bool {
        if self.config.notifications.permission != Permission::Granted {
            tracing::debug!(title, "notification suppressed by permission");
            return false;
        }
        self.notifications.push_front(Notification {
            timestamp: Local::now().format("%H:%M").to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });
        self.notifications.truncate(self.config.ui.max_notifications.max(1));
        if self.config.ui.bell {
            self.pending_bell = true;
        }
        self.dirty = true;
        true
    }

    pub fn selected_task_id(&self) -> Option<RecordId> {
        self.data().tasks.get(self.tasks_cursor.selected).map(|t| t.id)
    }

    pub fn selected_set_id(&self) -> Option<RecordId> {
        self.data()
            .flashcard_sets
            .get(self.sets_cursor.selected)
            .map(|s| s.id)
    }

    pub fn selected_note_id(&self) -> Option<RecordId> {
        self.data().notes.get(self.notes_cursor.selected).map(|n| n.id)
    }

    /// Number of cards in the open flashcard set (0 when none is open).
    pub fn open_card_count(&self) -> usize {
        self.navigator
            .current_set(self.tracker.data())
            .map(|s| s.cards.len())
            .unwrap_or(0)
    }

    /// Swap in imported data. Study mode and the note edit target refer to
    /// records that may no longer exist, so both are cleared.
    pub fn apply_import(&mut self, data: StudyData) {
        self.tracker.replace(data);
        self.navigator.close();
        self.editing_note = None;
        self.clamp_cursors();
        self.dirty = true;
    }

    pub fn clamp_cursors(&mut self) {
        let data = self.tracker.data();
        let (tasks, grades, sets, notes) = (
            data.tasks.len(),
            data.grades.len(),
            data.flashcard_sets.len(),
            data.notes.len(),
        );
        self.tasks_cursor.clamp(tasks);
        self.grades_cursor.clamp(grades);
        self.sets_cursor.clamp(sets);
        self.notes_cursor.clamp(notes);
    }

    pub fn status_line(&self) -> String {
        let data = self.data();
        let open = data.tasks.iter().filter(|t| !t.completed).count();
        let mut s = format!(
            "Tasks: {} open | Subjects: {} | Sets: {} | Notes: {}",
            open,
            data.grades.len(),
            data.flashcard_sets.len(),
            data.notes.len()
        );
        if self.timer.is_running() {
            s.push_str(&format!(" | {} {}", self.timer.mode().label(), self.timer.display()));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), StudyData::default())
    }

    #[test]
    fn tabs_cycle_both_ways() {
        assert_eq!(Tab::Tasks.next(), Tab::Grades);
        assert_eq!(Tab::Notes.next(), Tab::Tasks);
        assert_eq!(Tab::Tasks.prev(), Tab::Notes);
    }

    #[test]
    fn notifications_need_permission() {
        let mut state = state();
        assert!(!state.notify("t", "b"));
        state.config.notifications.permission = Permission::Granted;
        assert!(state.notify("t", "b"));
        assert_eq!(state.notifications.len(), 1);
        assert!(state.pending_bell);
    }

    #[test]
    fn notifications_are_capped_newest_first() {
        let mut state = state();
        state.config.notifications.permission = Permission::Granted;
        state.config.ui.max_notifications = 2;
        state.notify("one", "");
        state.notify("two", "");
        state.notify("three", "");
        let titles: Vec<_> = state.notifications.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["three", "two"]);
    }

    #[test]
    fn cursor_clamps_after_removal() {
        let mut cursor = ListCursor { selected: 4 };
        cursor.clamp(2);
        assert_eq!(cursor.selected, 1);
        cursor.clamp(0);
        assert_eq!(cursor.selected, 0);
        cursor.down(0);
        assert_eq!(cursor.selected, 0);
    }
}
