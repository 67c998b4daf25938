//! Timer effects keyed by the event date.
//!
//! Each effect is owned by a [`KeyedTask`]: starting it under a new key aborts
//! whatever was running under the old one, so at most one countdown loop and
//! one celebration timer exist at any time.

use std::{fmt, sync::Arc};

use chrono::NaiveDateTime;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::countdown::{
    delay_to_next_second, phase_at, plan_countdown, Clock, CountdownPhase, CountdownPlan,
    CELEBRATION_DURATION,
};

/// Updates pushed from the timer tasks to whoever renders the dashboard.
/// Every event carries the date text it was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectEvent {
    Countdown { date: String, phase: CountdownPhase },
    CountdownCleared { date: String },
    Celebration { date: String, active: bool },
}

impl EffectEvent {
    pub fn date(&self) -> &str {
        match self {
            Self::Countdown { date, .. }
            | Self::CountdownCleared { date }
            | Self::Celebration { date, .. } => date,
        }
    }
}

/// A background task bound to the value that started it.
#[derive(Debug)]
pub struct KeyedTask<K> {
    key: Option<K>,
    handle: Option<JoinHandle<()>>,
}

impl<K> Default for KeyedTask<K> {
    fn default() -> Self {
        Self {
            key: None,
            handle: None,
        }
    }
}

impl<K: fmt::Debug> KeyedTask<K> {
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn restart(&mut self, key: K, handle: JoinHandle<()>) {
        if let Some(previous) = &self.key {
            debug!(?previous, next = ?key, "replacing keyed task");
        }
        self.cancel();
        self.key = Some(key);
        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.key = None;
    }
}

impl<K> Drop for KeyedTask<K> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

pub struct EventEffects {
    runtime: Handle,
    clock: Arc<dyn Clock>,
    events: UnboundedSender<EffectEvent>,
    watched: Option<String>,
    countdown: KeyedTask<String>,
    celebration: KeyedTask<String>,
}

impl EventEffects {
    pub fn new(
        runtime: Handle,
        clock: Arc<dyn Clock>,
        events: UnboundedSender<EffectEvent>,
    ) -> Self {
        Self {
            runtime,
            clock,
            events,
            watched: None,
            countdown: KeyedTask::default(),
            celebration: KeyedTask::default(),
        }
    }

    pub fn watched_date(&self) -> Option<&str> {
        self.watched.as_deref()
    }

    pub fn countdown_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn celebration_running(&self) -> bool {
        self.celebration.is_running()
    }

    /// Points the effects at a new event date. Watching the date that is
    /// already watched does nothing; anything else restarts both timers.
    pub fn watch_date(&mut self, date_text: &str) {
        let date = date_text.trim().to_string();
        if self.watched.as_ref() == Some(&date) {
            return;
        }
        self.countdown.cancel();
        self.celebration.cancel();
        self.watched = Some(date.clone());

        match plan_countdown(&date, self.clock.now()) {
            CountdownPlan::Inactive => {
                debug!(date = %date, "no countdown for event date");
                self.emit(EffectEvent::CountdownCleared { date });
            }
            CountdownPlan::EventDay => {
                info!(date = %date, "event day reached; celebrating");
                self.emit(EffectEvent::Countdown {
                    date: date.clone(),
                    phase: CountdownPhase::EventDay,
                });
                self.emit(EffectEvent::Celebration {
                    date: date.clone(),
                    active: true,
                });
                let handle = self
                    .runtime
                    .spawn(hide_celebration(date.clone(), self.events.clone()));
                self.celebration.restart(date, handle);
            }
            CountdownPlan::CountingDown { target } => {
                debug!(date = %date, %target, "starting countdown");
                let handle = self.runtime.spawn(run_countdown(
                    date.clone(),
                    target,
                    Arc::clone(&self.clock),
                    self.events.clone(),
                ));
                self.countdown.restart(date, handle);
            }
        }
    }

    pub fn clear(&mut self) {
        self.watch_date("");
    }

    fn emit(&self, event: EffectEvent) {
        if self.events.send(event).is_err() {
            debug!("effect receiver dropped");
        }
    }
}

async fn run_countdown(
    date: String,
    target: NaiveDateTime,
    clock: Arc<dyn Clock>,
    events: UnboundedSender<EffectEvent>,
) {
    loop {
        let now = clock.now();
        let phase = phase_at(target, now);
        let event = EffectEvent::Countdown {
            date: date.clone(),
            phase,
        };
        if events.send(event).is_err() {
            debug!(date = %date, "countdown receiver dropped");
            return;
        }
        if phase == CountdownPhase::EventDay {
            info!(date = %date, "countdown finished");
            return;
        }
        tokio::time::sleep(delay_to_next_second(now)).await;
    }
}

async fn hide_celebration(date: String, events: UnboundedSender<EffectEvent>) {
    tokio::time::sleep(CELEBRATION_DURATION).await;
    let event = EffectEvent::Celebration {
        date: date.clone(),
        active: false,
    };
    if events.send(event).is_err() {
        debug!(date = %date, "celebration receiver dropped");
        return;
    }
    debug!(date = %date, "celebration hidden");
}

#[cfg(test)]
#[path = "tests/effects_tests.rs"]
mod tests;
