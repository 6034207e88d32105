//! Flashcard study mode.

pub mod navigator;

pub use navigator::Navigator;
