//! Collection operations for tasks, grades, flashcard sets and notes.
//!
//! Every write validates first and returns a [`StudyError`] without touching
//! the collections when a field is missing or malformed. Persisting and
//! re-rendering are left to the caller.

use super::error::StudyError;
use super::model::*;
use chrono::NaiveDate;

/// Raw task form input.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub subject: String,
    pub deadline: String,
}

/// Raw grade form input. `score` is parsed here.
#[derive(Debug, Clone, Default)]
pub struct GradeDraft {
    pub subject: String,
    pub score: String,
    pub note: String,
}

/// Raw note form input. An empty subject is stored as no subject.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub subject: String,
    pub content: String,
}

/// Whether a grade landed in an existing subject or created a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeOutcome {
    Appended(RecordId),
    Created(RecordId),
}

fn require(fields: &[(&'static str, &str)]) -> Result<(), StudyError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(StudyError::MissingFields(missing))
    }
}

/// Owns the study collections and the id allocator.
#[derive(Debug, Default)]
pub struct Tracker {
    data: StudyData,
    ids: IdAllocator,
}

impl Tracker {
    pub fn new(data: StudyData) -> Self {
        let mut ids = IdAllocator::default();
        ids.observe(&data);
        Self { data, ids }
    }

    pub fn data(&self) -> &StudyData {
        &self.data
    }

    /// Replace all four collections wholesale (used by import).
    pub fn replace(&mut self, data: StudyData) {
        self.ids.observe(&data);
        self.data = data;
    }

    // Tasks

    pub fn add_task(&mut self, draft: TaskDraft) -> Result<RecordId, StudyError> {
        require(&[
            ("title", draft.title.as_str()),
            ("subject", draft.subject.as_str()),
            ("deadline", draft.deadline.as_str()),
        ])?;
        let deadline = NaiveDate::parse_from_str(draft.deadline.trim(), "%Y-%m-%d")
            .map_err(|_| StudyError::InvalidDate)?;
        let id = self.ids.next();
        self.data.tasks.push(Task {
            id,
            title: draft.title,
            subject: draft.subject,
            deadline,
            completed: false,
        });
        Ok(id)
    }

    /// Flip a task's completed flag. Returns `false` for an unknown id.
    pub fn toggle_task(&mut self, id: RecordId) -> bool {
        match self.data.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn delete_task(&mut self, id: RecordId) -> bool {
        let before = self.data.tasks.len();
        self.data.tasks.retain(|t| t.id != id);
        self.data.tasks.len() != before
    }

    // Grades

    /// Record a score. Subjects match by exact, case-sensitive string.
    pub fn add_grade(&mut self, draft: GradeDraft) -> Result<GradeOutcome, StudyError> {
        require(&[("subject", draft.subject.as_str()), ("score", draft.score.as_str())])?;
        let value: f64 = draft
            .score
            .trim()
            .parse()
            .map_err(|_| StudyError::InvalidScore)?;
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(StudyError::InvalidScore);
        }
        let score = Score {
            value,
            note: if draft.note.is_empty() {
                "-".to_string()
            } else {
                draft.note
            },
        };

        if let Some(existing) = self
            .data
            .grades
            .iter_mut()
            .find(|g| g.subject == draft.subject)
        {
            existing.scores.push(score);
            return Ok(GradeOutcome::Appended(existing.id));
        }

        let id = self.ids.next();
        self.data.grades.push(GradeSubject {
            id,
            subject: draft.subject,
            scores: vec![score],
        });
        Ok(GradeOutcome::Created(id))
    }

    // Flashcards

    pub fn create_set(&mut self, name: String) -> Result<RecordId, StudyError> {
        require(&[("name", name.as_str())])?;
        let id = self.ids.next();
        self.data.flashcard_sets.push(FlashcardSet {
            id,
            name,
            cards: Vec::new(),
        });
        Ok(id)
    }

    pub fn add_card(
        &mut self,
        set_id: RecordId,
        front: String,
        back: String,
    ) -> Result<RecordId, StudyError> {
        require(&[("front", front.as_str()), ("back", back.as_str())])?;
        if self.data.find_set(set_id).is_none() {
            return Err(StudyError::UnknownSet(set_id));
        }
        let id = self.ids.next();
        if let Some(set) = self.data.flashcard_sets.iter_mut().find(|s| s.id == set_id) {
            set.cards.push(Card { id, front, back });
        }
        Ok(id)
    }

    // Notes

    /// Update the note being edited, or append a new one.
    ///
    /// If `editing` names a note that no longer exists, the draft is kept as a
    /// new note.
    pub fn save_note(
        &mut self,
        editing: Option<RecordId>,
        draft: NoteDraft,
    ) -> Result<RecordId, StudyError> {
        require(&[("title", draft.title.as_str()), ("content", draft.content.as_str())])?;
        let subject = if draft.subject.is_empty() {
            None
        } else {
            Some(draft.subject)
        };

        if let Some(id) = editing {
            if let Some(note) = self.data.notes.iter_mut().find(|n| n.id == id) {
                note.title = draft.title;
                note.subject = subject;
                note.content = draft.content;
                return Ok(id);
            }
            tracing::warn!(note_id = id, "edited note vanished; saving as new");
        }

        let id = self.ids.next();
        self.data.notes.push(Note {
            id,
            title: draft.title,
            subject,
            content: draft.content,
        });
        Ok(id)
    }

    pub fn find_note(&self, id: RecordId) -> Option<&Note> {
        self.data.notes.iter().find(|n| n.id == id)
    }

    pub fn delete_note(&mut self, id: RecordId) -> bool {
        let before = self.data.notes.len();
        self.data.notes.retain(|n| n.id != id);
        self.data.notes.len() != before
    }
}
