//! Pomodoro countdown state machine.
//!
//! The timer alternates between a focus phase and a break phase. It never
//! schedules anything itself: each call returns a [`TimerTransition`] so the
//! caller can start or cancel the one-second tick source and re-render.

use crate::config::model::PomodoroConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Focus,
    Break,
}

impl TimerMode {
    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Focus => "FOCUS TIME",
            TimerMode::Break => "BREAK TIME",
        }
    }

    fn other(self) -> Self {
        match self {
            TimerMode::Focus => TimerMode::Break,
            TimerMode::Break => TimerMode::Focus,
        }
    }
}

/// Phase lengths in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub focus_minutes: u32,
    pub break_minutes: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl From<&PomodoroConfig> for Durations {
    fn from(cfg: &PomodoroConfig) -> Self {
        Self {
            focus_minutes: cfg.focus_minutes,
            break_minutes: cfg.break_minutes,
        }
    }
}

impl Durations {
    pub fn minutes_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_minutes,
            TimerMode::Break => self.break_minutes,
        }
    }
}

/// What a call did, so the caller knows whether to (re)schedule ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTransition {
    /// Countdown began; a tick source must be started.
    Started,
    /// Countdown stopped; the tick source must be cancelled.
    Paused,
    /// Stopped and rewound to the current mode's full length.
    Reset,
    /// One second elapsed.
    Ticked,
    /// The countdown for the given mode finished. The timer has already
    /// switched to the other mode and stopped.
    Completed(TimerMode),
    /// Nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    durations: Durations,
    mode: TimerMode,
    minutes: u32,
    seconds: u32,
    running: bool,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}

impl PomodoroTimer {
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            mode: TimerMode::Focus,
            minutes: durations.focus_minutes,
            seconds: 0,
            running: false,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// `MM:SS`, zero padded.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    /// Fraction of the current phase already elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = self.durations.minutes_for(self.mode) * 60;
        if total == 0 {
            return 1.0;
        }
        let elapsed = total.saturating_sub(self.remaining_secs());
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    pub fn start(&mut self) -> TimerTransition {
        if self.running {
            return TimerTransition::Ignored;
        }
        self.running = true;
        TimerTransition::Started
    }

    pub fn pause(&mut self) -> TimerTransition {
        if !self.running {
            return TimerTransition::Ignored;
        }
        self.running = false;
        TimerTransition::Paused
    }

    pub fn toggle(&mut self) -> TimerTransition {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and rewind to the current mode's full length. The mode is kept.
    pub fn reset(&mut self) -> TimerTransition {
        self.running = false;
        self.minutes = self.durations.minutes_for(self.mode);
        self.seconds = 0;
        TimerTransition::Reset
    }

    /// Advance one second. Passing below 00:00 completes the phase.
    pub fn tick(&mut self) -> TimerTransition {
        if !self.running {
            return TimerTransition::Ignored;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
            return TimerTransition::Ticked;
        }
        if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
            return TimerTransition::Ticked;
        }

        let finished = self.mode;
        self.running = false;
        self.mode = finished.other();
        self.minutes = self.durations.minutes_for(self.mode);
        self.seconds = 0;
        TimerTransition::Completed(finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_zero(timer: &mut PomodoroTimer) {
        while timer.remaining_secs() > 0 {
            assert_eq!(timer.tick(), TimerTransition::Ticked);
        }
    }

    #[test]
    fn starts_in_focus_at_twenty_five_minutes() {
        let timer = PomodoroTimer::default();
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.display(), "25:00");
        assert!(!timer.is_running());
    }

    #[test]
    fn start_twice_is_a_no_op() {
        let mut timer = PomodoroTimer::default();
        assert_eq!(timer.start(), TimerTransition::Started);
        assert_eq!(timer.start(), TimerTransition::Ignored);
        assert_eq!(timer.pause(), TimerTransition::Paused);
        assert_eq!(timer.pause(), TimerTransition::Ignored);
    }

    #[test]
    fn first_tick_borrows_a_minute() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        assert_eq!(timer.tick(), TimerTransition::Ticked);
        assert_eq!(timer.display(), "24:59");
    }

    #[test]
    fn remaining_time_never_increases_while_running() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        let mut prev = timer.remaining_secs();
        for _ in 0..200 {
            timer.tick();
            let now = timer.remaining_secs();
            assert!(now <= prev);
            prev = now;
        }
    }

    #[test]
    fn paused_timer_ignores_ticks() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        timer.tick();
        timer.pause();
        let frozen = timer.remaining_secs();
        for _ in 0..10 {
            assert_eq!(timer.tick(), TimerTransition::Ignored);
        }
        assert_eq!(timer.remaining_secs(), frozen);
    }

    #[test]
    fn focus_completion_switches_to_break() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        run_to_zero(&mut timer);
        assert_eq!(timer.display(), "00:00");
        assert!(timer.is_running());

        assert_eq!(timer.tick(), TimerTransition::Completed(TimerMode::Focus));
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.display(), "05:00");
        assert!(!timer.is_running());
    }

    #[test]
    fn break_completion_switches_to_focus() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        run_to_zero(&mut timer);
        timer.tick();

        timer.start();
        run_to_zero(&mut timer);
        assert_eq!(timer.tick(), TimerTransition::Completed(TimerMode::Break));
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.display(), "25:00");
        assert!(!timer.is_running());
    }

    #[test]
    fn reset_keeps_mode_and_restores_its_length() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        run_to_zero(&mut timer);
        timer.tick();
        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.reset(), TimerTransition::Reset);
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.display(), "05:00");
        assert!(!timer.is_running());
    }

    #[test]
    fn toggle_alternates_start_and_pause() {
        let mut timer = PomodoroTimer::default();
        assert_eq!(timer.toggle(), TimerTransition::Started);
        assert_eq!(timer.toggle(), TimerTransition::Paused);
        assert_eq!(timer.toggle(), TimerTransition::Started);
    }

    #[test]
    fn custom_durations_apply() {
        let mut timer = PomodoroTimer::new(Durations {
            focus_minutes: 1,
            break_minutes: 2,
        });
        assert_eq!(timer.display(), "01:00");
        timer.start();
        for _ in 0..60 {
            timer.tick();
        }
        assert_eq!(timer.tick(), TimerTransition::Completed(TimerMode::Focus));
        assert_eq!(timer.display(), "02:00");
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let mut timer = PomodoroTimer::new(Durations {
            focus_minutes: 1,
            break_minutes: 1,
        });
        assert_eq!(timer.progress(), 0.0);
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < f64::EPSILON);
    }
}
