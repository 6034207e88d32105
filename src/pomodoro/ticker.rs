//! Recurring event source with an explicit start/cancel lifecycle.
//!
//! A [`Ticker`] owns at most one background interval task. Every event it
//! sends carries the generation it was started under; cancelling bumps the
//! generation so events already sitting in the channel can be recognised as
//! stale and dropped.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub struct Ticker {
    period: Duration,
    make_event: fn(u64) -> AppEvent,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl Ticker {
    pub fn new(period: Duration, make_event: fn(u64) -> AppEvent) -> Self {
        Self {
            period,
            make_event,
            handle: None,
            generation: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// True if `generation` belongs to the currently active task.
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_active() && generation == self.generation
    }

    /// Spawn the interval task. The first event fires one period from now.
    /// Starting an already active ticker does nothing.
    pub fn start(&mut self, tx: mpsc::UnboundedSender<AppEvent>) {
        if self.handle.is_some() {
            return;
        }
        let generation = self.generation;
        let period = self.period;
        let make_event = self.make_event;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(make_event(generation)).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, period_ms = period.as_millis() as u64, "ticker started");
    }

    /// Abort the interval task, if any. Queued events from it become stale.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(generation = self.generation, "ticker cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_event(generation: u64) -> AppEvent {
        AppEvent::PomodoroTick { generation }
    }

    #[tokio::test]
    async fn sends_events_tagged_with_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(Duration::from_millis(5), tick_event);
        ticker.start(tx);
        let event = rx.recv().await.unwrap();
        match event {
            AppEvent::PomodoroTick { generation } => assert!(ticker.is_current(generation)),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn cancel_makes_queued_events_stale() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(Duration::from_millis(5), tick_event);
        ticker.start(tx.clone());
        let AppEvent::PomodoroTick { generation } = rx.recv().await.unwrap() else {
            panic!("expected a tick");
        };
        ticker.cancel();
        assert!(!ticker.is_active());
        assert!(!ticker.is_current(generation));

        ticker.start(tx);
        assert!(ticker.is_active());
        assert!(!ticker.is_current(generation));
        assert!(ticker.is_current(generation + 1));
    }

    #[tokio::test]
    async fn second_start_keeps_single_source() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(Duration::from_secs(60), tick_event);
        ticker.start(tx.clone());
        ticker.start(tx);
        assert!(ticker.is_current(0));
        ticker.cancel();
        assert!(!ticker.is_active());
    }
}
