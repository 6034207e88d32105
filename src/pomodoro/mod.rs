pub mod ticker;
pub mod timer;

pub use ticker::Ticker;
pub use timer::{Durations, PomodoroTimer, TimerMode, TimerTransition};

/// Message shown when a phase finishes.
pub fn completion_message(finished: TimerMode) -> (&'static str, &'static str) {
    match finished {
        TimerMode::Focus => ("Focus complete", "Focus time is over, take a break!"),
        TimerMode::Break => ("Break complete", "Break is over, ready to focus?"),
    }
}
