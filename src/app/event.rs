use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One second of pomodoro countdown, tagged with the ticker generation
    /// that produced it.
    PomodoroTick { generation: u64 },

    /// Periodic deadline reminder sweep
    ReminderSweep { generation: u64 },
}
