use shared::domain::InvitationRecord;
use shared::protocol::RsvpSummary;
use tracing::debug;

use crate::countdown::CountdownPhase;
use crate::effects::EffectEvent;

/// Counts by status. Extra guests only count toward the total once their
/// host has accepted.
pub fn summarize(records: &[InvitationRecord]) -> RsvpSummary {
    RsvpSummary::from_records(records)
}

/// Event header state: free-text name, date text, and whatever the timer
/// effects last reported for that date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    event_name: String,
    event_date: String,
    countdown: Option<CountdownPhase>,
    celebrating: bool,
}

impl DashboardState {
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn event_date(&self) -> &str {
        &self.event_date
    }

    pub fn countdown(&self) -> Option<CountdownPhase> {
        self.countdown
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn set_event_name(&mut self, name: &str) {
        self.event_name = name.to_string();
    }

    /// Returns whether the date actually changed. A change drops the
    /// countdown and celebration until effects for the new date arrive.
    pub fn set_event_date(&mut self, date: &str) -> bool {
        let date = date.trim();
        if self.event_date == date {
            return false;
        }
        self.event_date = date.to_string();
        self.countdown = None;
        self.celebrating = false;
        true
    }

    pub fn apply_effect(&mut self, event: &EffectEvent) {
        if event.date() != self.event_date {
            debug!(
                stale = event.date(),
                current = %self.event_date,
                "ignoring effect for previous event date"
            );
            return;
        }
        match event {
            EffectEvent::Countdown { phase, .. } => self.countdown = Some(*phase),
            EffectEvent::CountdownCleared { .. } => {
                self.countdown = None;
                self.celebrating = false;
            }
            EffectEvent::Celebration { active, .. } => self.celebrating = *active,
        }
    }
}

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod tests;
