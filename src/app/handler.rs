use crate::app::action::Action;
use crate::app::commands::{self, ParsedCommand};
use crate::app::event::AppEvent;
use crate::app::form::{Form, FormKind};
use crate::app::input::InputState;
use crate::app::state::*;
use crate::config::Permission;
use crate::pomodoro::{self, TimerTransition};
use crate::reminder;
use crate::study::{GradeOutcome, StudyData};
use chrono::{Local, NaiveDate};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::PomodoroTick { .. } => handle_pomodoro_tick(state),
        AppEvent::ReminderSweep { .. } => {
            run_reminders(state, Local::now().date_naive());
            vec![]
        }
    }
}

fn handle_pomodoro_tick(state: &mut AppState) -> Vec<Action> {
    match state.timer.tick() {
        TimerTransition::Ticked => {
            state.dirty = true;
            vec![]
        }
        TimerTransition::Completed(finished) => {
            let (title, body) = pomodoro::completion_message(finished);
            tracing::info!(?finished, "pomodoro phase complete");
            if !state.notify(title, body) && state.config.ui.bell {
                state.pending_bell = true;
            }
            state.set_status(body);
            vec![Action::StopPomodoro]
        }
        // A tick that raced a pause
        _ => vec![],
    }
}

/// Post reminders for tasks due `today` or the day after.
pub fn run_reminders(state: &mut AppState, today: NaiveDate) -> usize {
    let reminders = reminder::sweep(&state.data().tasks, today);
    let mut delivered = 0;
    for r in &reminders {
        if state.notify(&r.title, &r.body) {
            delivered += 1;
        }
    }
    if !reminders.is_empty() {
        tracing::info!(due = reminders.len(), delivered, "reminder sweep");
    }
    delivered
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match std::mem::take(&mut state.overlay) {
        Overlay::None => handle_normal_key(state, key),
        Overlay::Confirm(confirm) => handle_confirm_key(state, confirm, key),
        Overlay::Form(form) => handle_form_key(state, form, key),
        Overlay::Command(input) => handle_command_key(state, input, key),
        Overlay::Help => vec![],
    }
}

fn handle_normal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('/') => {
            let mut input = InputState::with_text("/");
            input.history = state.command_history.clone();
            state.open_overlay(Overlay::Command(input));
            return vec![];
        }
        KeyCode::Char('?') => {
            state.open_overlay(Overlay::Help);
            return vec![];
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Tab => {
            state.switch_tab(state.tab.next());
            return vec![];
        }
        KeyCode::BackTab => {
            state.switch_tab(state.tab.prev());
            return vec![];
        }
        KeyCode::F(n @ 1..=5) => {
            state.switch_tab(Tab::ALL[n as usize - 1]);
            return vec![];
        }
        KeyCode::Char(c @ '1'..='5') => {
            state.switch_tab(Tab::ALL[c as usize - '1' as usize]);
            return vec![];
        }
        _ => {}
    }

    match state.tab {
        Tab::Tasks => handle_tasks_key(state, key),
        Tab::Grades => handle_grades_key(state, key),
        Tab::Flashcards => {
            if state.navigator.is_open() {
                handle_study_key(state, key)
            } else {
                handle_sets_key(state, key)
            }
        }
        Tab::Pomodoro => handle_pomodoro_key(state, key),
        Tab::Notes => handle_notes_key(state, key),
    }
}

fn handle_tasks_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.data().tasks.len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.tasks_cursor.down(len),
        KeyCode::Up | KeyCode::Char('k') => state.tasks_cursor.up(),
        KeyCode::Char('a') => state.open_overlay(Overlay::Form(Form::new(FormKind::Task))),
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = state.selected_task_id() {
                if state.tracker.toggle_task(id) {
                    return vec![Action::Persist];
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(task) = state.data().tasks.get(state.tasks_cursor.selected) {
                let prompt = format!("Delete task \"{}\"?", task.title);
                let id = task.id;
                state.ask(prompt, PendingOp::DeleteTask(id));
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_grades_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.data().grades.len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.grades_cursor.down(len),
        KeyCode::Up | KeyCode::Char('k') => state.grades_cursor.up(),
        KeyCode::Char('a') => state.open_overlay(Overlay::Form(Form::new(FormKind::Grade))),
        _ => {}
    }
    vec![]
}

fn handle_sets_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.data().flashcard_sets.len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.sets_cursor.down(len),
        KeyCode::Up | KeyCode::Char('k') => state.sets_cursor.up(),
        KeyCode::Char('a') => {
            state.open_overlay(Overlay::Form(Form::new(FormKind::FlashcardSet)))
        }
        KeyCode::Enter => {
            if let Some(id) = state.selected_set_id() {
                if let Err(e) = state.navigator.open(id, state.tracker.data()) {
                    state.set_error(e.to_string());
                }
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_study_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let count = state.open_card_count();
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Enter => {
            state.navigator.flip();
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            state.navigator.next(count);
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            state.navigator.prev();
        }
        KeyCode::Char('a') => state.open_overlay(Overlay::Form(Form::new(FormKind::Card))),
        KeyCode::Esc | KeyCode::Backspace => state.navigator.close(),
        _ => {}
    }
    vec![]
}

fn handle_pomodoro_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let transition = match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') => state.timer.toggle(),
        KeyCode::Char('r') => state.timer.reset(),
        _ => return vec![],
    };
    timer_actions(transition)
}

/// Translate a timer transition into tick-source scheduling.
fn timer_actions(transition: TimerTransition) -> Vec<Action> {
    match transition {
        TimerTransition::Started => vec![Action::StartPomodoro],
        TimerTransition::Paused | TimerTransition::Reset | TimerTransition::Completed(_) => {
            vec![Action::StopPomodoro]
        }
        TimerTransition::Ticked | TimerTransition::Ignored => vec![],
    }
}

fn handle_notes_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.data().notes.len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.notes_cursor.down(len),
        KeyCode::Up | KeyCode::Char('k') => state.notes_cursor.up(),
        KeyCode::Char('a') => {
            state.editing_note = None;
            state.open_overlay(Overlay::Form(Form::new(FormKind::Note)));
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = state.selected_note_id() {
                begin_note_edit(state, id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(note) = state.data().notes.get(state.notes_cursor.selected) {
                let prompt = format!("Delete note \"{}\"?", note.title);
                let id = note.id;
                state.ask(prompt, PendingOp::DeleteNote(id));
            }
        }
        _ => {}
    }
    vec![]
}

/// Open the note form on an existing note. Replaces any previous edit target.
pub fn begin_note_edit(state: &mut AppState, id: crate::study::RecordId) {
    let Some(note) = state.tracker.find_note(id) else {
        return;
    };
    let form = Form::for_note(note);
    state.editing_note = Some(id);
    state.open_overlay(Overlay::Form(form));
}

fn handle_confirm_key(state: &mut AppState, confirm: Confirm, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => confirm_yes(state, confirm.op),
        KeyCode::Char('n') | KeyCode::Char('N') => confirm_no(state, confirm.op),
        KeyCode::Esc => {
            state.set_status("Cancelled");
            vec![]
        }
        _ => {
            state.overlay = Overlay::Confirm(confirm);
            vec![]
        }
    }
}

fn confirm_yes(state: &mut AppState, op: PendingOp) -> Vec<Action> {
    match op {
        PendingOp::DeleteTask(id) => {
            if state.tracker.delete_task(id) {
                state.clamp_cursors();
                state.set_status("Task deleted");
                return vec![Action::Persist];
            }
            vec![]
        }
        PendingOp::DeleteNote(id) => {
            if state.tracker.delete_note(id) {
                if state.editing_note == Some(id) {
                    state.editing_note = None;
                }
                state.clamp_cursors();
                state.set_status("Note deleted");
                return vec![Action::Persist];
            }
            vec![]
        }
        PendingOp::Import(data) => {
            let data: StudyData = *data;
            tracing::info!(
                tasks = data.tasks.len(),
                grades = data.grades.len(),
                sets = data.flashcard_sets.len(),
                notes = data.notes.len(),
                "importing backup"
            );
            state.apply_import(data);
            state.set_status("Data imported");
            vec![Action::Persist]
        }
        PendingOp::NotificationPermission => {
            state.config.notifications.permission = Permission::Granted;
            tracing::info!("notifications granted");
            run_reminders(state, Local::now().date_naive());
            vec![Action::SaveConfig]
        }
    }
}

fn confirm_no(state: &mut AppState, op: PendingOp) -> Vec<Action> {
    if op == PendingOp::NotificationPermission {
        state.config.notifications.permission = Permission::Denied;
        tracing::info!("notifications denied");
        return vec![Action::SaveConfig];
    }
    state.set_status("Cancelled");
    vec![]
}

fn handle_form_key(state: &mut AppState, mut form: Form, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            if form.kind == FormKind::Note {
                state.editing_note = None;
            }
            state.status_message = None;
            return vec![];
        }
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            if !form.is_last_field() {
                form.next_field();
            } else {
                return submit_form(state, form);
            }
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return submit_form(state, form);
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.focused_input_mut().delete_word_back()
        }
        KeyCode::Char(c) => form.focused_input_mut().insert_char(c),
        KeyCode::Backspace => form.focused_input_mut().delete_back(),
        KeyCode::Delete => form.focused_input_mut().delete_forward(),
        KeyCode::Left => form.focused_input_mut().move_left(),
        KeyCode::Right => form.focused_input_mut().move_right(),
        KeyCode::Home => form.focused_input_mut().move_home(),
        KeyCode::End => form.focused_input_mut().move_end(),
        _ => {}
    }
    state.overlay = Overlay::Form(form);
    vec![]
}

/// Validate and apply a form. On a validation error the form stays open and
/// nothing changes.
pub fn submit_form(state: &mut AppState, form: Form) -> Vec<Action> {
    let result: Result<String, crate::study::StudyError> = match form.kind {
        FormKind::Task => state.tracker.add_task(form.task_draft()).map(|_| {
            state.tasks_cursor.selected = state.tracker.data().tasks.len() - 1;
            "Task added".to_string()
        }),
        FormKind::Grade => state.tracker.add_grade(form.grade_draft()).map(|outcome| {
            match outcome {
                GradeOutcome::Appended(_) => "Score added to subject",
                GradeOutcome::Created(_) => "Subject added",
            }
            .to_string()
        }),
        FormKind::FlashcardSet => state.tracker.create_set(form.value(0)).map(|_| {
            state.sets_cursor.selected = state.tracker.data().flashcard_sets.len() - 1;
            "Flashcard set created".to_string()
        }),
        FormKind::Card => match state.navigator.open_set_id() {
            Some(set_id) => state
                .tracker
                .add_card(set_id, form.value(0), form.value(1))
                .map(|_| "Card added".to_string()),
            None => Err(crate::study::StudyError::NoOpenSet),
        },
        FormKind::Note => state
            .tracker
            .save_note(state.editing_note, form.note_draft())
            .map(|_| {
                state.editing_note = None;
                "Note saved".to_string()
            }),
    };

    match result {
        Ok(message) => {
            state.close_overlay();
            state.set_status(message);
            vec![Action::Persist]
        }
        Err(e) => {
            state.set_error(e.to_string());
            state.overlay = Overlay::Form(form);
            vec![]
        }
    }
}

fn handle_command_key(state: &mut AppState, mut input: InputState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.command_history = input.history;
            return vec![];
        }
        KeyCode::Enter => {
            let text = input.take_text();
            state.command_history = input.history;
            return run_command(state, &text);
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back()
        }
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => {
            if input.text.is_empty() {
                state.command_history = input.history;
                return vec![];
            }
            input.delete_back();
        }
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Up => input.history_up(),
        KeyCode::Down => input.history_down(),
        _ => {}
    }
    state.overlay = Overlay::Command(input);
    vec![]
}

fn run_command(state: &mut AppState, text: &str) -> Vec<Action> {
    match commands::parse_command(text) {
        Some(ParsedCommand::Export { kinds }) => vec![Action::Export { kinds }],
        Some(ParsedCommand::Import { path }) => vec![Action::LoadImport { path }],
        Some(ParsedCommand::Help) => {
            state.open_overlay(Overlay::Help);
            vec![]
        }
        Some(ParsedCommand::Quit) => vec![Action::Quit],
        None => {
            if !text.trim().is_empty() && text.trim() != "/" {
                state.set_error(format!("Unknown command: {}  (try /help)", text.trim()));
            }
            vec![]
        }
    }
}

/// A backup was read and parsed; ask before overwriting everything.
pub fn request_import(state: &mut AppState, data: StudyData) {
    state.ask(
        "Importing will replace all current data. Continue?",
        PendingOp::Import(Box::new(data)),
    );
}
