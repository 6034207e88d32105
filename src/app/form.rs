//! Modal data-entry forms.

use crate::app::input::InputState;
use crate::study::model::Note;
use crate::study::{GradeDraft, NoteDraft, TaskDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Task,
    Grade,
    FlashcardSet,
    Card,
    Note,
}

impl FormKind {
    fn labels(self) -> &'static [&'static str] {
        match self {
            FormKind::Task => &["Title", "Subject", "Deadline (YYYY-MM-DD)"],
            FormKind::Grade => &["Subject", "Score (0-100)", "Note"],
            FormKind::FlashcardSet => &["Set name"],
            FormKind::Card => &["Front", "Back"],
            FormKind::Note => &["Title", "Subject", "Content"],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::Task => " New task ",
            FormKind::Grade => " Add grade ",
            FormKind::FlashcardSet => " New flashcard set ",
            FormKind::Card => " New card ",
            FormKind::Note => " Note ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub input: InputState,
}

#[derive(Debug, Clone)]
pub struct Form {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Form {
    pub fn new(kind: FormKind) -> Self {
        let fields = kind
            .labels()
            .iter()
            .map(|&label| FormField {
                label,
                input: InputState::new(),
            })
            .collect();
        Self {
            kind,
            fields,
            focused: 0,
        }
    }

    /// A note form prefilled from an existing note.
    pub fn for_note(note: &Note) -> Self {
        let mut form = Self::new(FormKind::Note);
        let values = [
            note.title.as_str(),
            note.subject.as_deref().unwrap_or(""),
            note.content.as_str(),
        ];
        for (field, value) in form.fields.iter_mut().zip(values) {
            field.input = InputState::with_text(value);
        }
        form
    }

    pub fn value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.input.text.clone())
            .unwrap_or_default()
    }

    pub fn focused_input_mut(&mut self) -> &mut InputState {
        &mut self.fields[self.focused].input
    }

    pub fn is_last_field(&self) -> bool {
        self.focused + 1 == self.fields.len()
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.focused = if self.focused == 0 {
            self.fields.len() - 1
        } else {
            self.focused - 1
        };
    }

    pub fn task_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.value(0),
            subject: self.value(1),
            deadline: self.value(2),
        }
    }

    pub fn grade_draft(&self) -> GradeDraft {
        GradeDraft {
            subject: self.value(0),
            score: self.value(1),
            note: self.value(2),
        }
    }

    pub fn note_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.value(0),
            subject: self.value(1),
            content: self.value(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_focus_wraps() {
        let mut form = Form::new(FormKind::Card);
        assert_eq!(form.fields.len(), 2);
        form.prev_field();
        assert_eq!(form.focused, 1);
        assert!(form.is_last_field());
        form.next_field();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn note_form_is_prefilled() {
        let note = Note {
            id: 1,
            title: "Formulas".into(),
            subject: Some("Math".into()),
            content: "a + b".into(),
        };
        let form = Form::for_note(&note);
        let draft = form.note_draft();
        assert_eq!(draft.title, "Formulas");
        assert_eq!(draft.subject, "Math");
        assert_eq!(draft.content, "a + b");
    }
}
