//! Study records and the operations that create, update and remove them.

pub mod error;
pub mod model;
pub mod tracker;

pub use error::StudyError;
pub use model::{RecordId, StudyData};
pub use tracker::{GradeDraft, GradeOutcome, NoteDraft, TaskDraft, Tracker};
