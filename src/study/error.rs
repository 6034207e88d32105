use super::model::RecordId;
use thiserror::Error;

/// User-facing validation failures. None of these mutate state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StudyError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Deadline must be a date like 2026-01-30")]
    InvalidDate,
    #[error("Score must be a number between 0 and 100")]
    InvalidScore,
    #[error("Flashcard set {0} does not exist")]
    UnknownSet(RecordId),
    #[error("Open a flashcard set first")]
    NoOpenSet,
}
