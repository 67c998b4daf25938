//! Date arithmetic behind the event countdown.

use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};

/// Display and input format of the event date, e.g. `24-12-2026`.
pub const EVENT_DATE_FORMAT: &str = "%d-%m-%Y";
/// How long the event-day decoration stays up before hiding itself.
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(8);

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Source of local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Strict parse: out-of-range days such as `32-01-2026` are rejected rather
/// than rolled over.
pub fn parse_event_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, EVENT_DATE_FORMAT).ok()
}

pub fn format_event_date(date: NaiveDate) -> String {
    date.format(EVENT_DATE_FORMAT).to_string()
}

/// How a piece of date text reads relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEntry {
    Blank,
    Unparseable,
    /// Before today; the event cannot be in the past.
    Past(NaiveDate),
    Selectable(NaiveDate),
}

pub fn classify_event_date(text: &str, today: NaiveDate) -> DateEntry {
    if text.trim().is_empty() {
        return DateEntry::Blank;
    }
    match parse_event_date(text) {
        None => DateEntry::Unparseable,
        Some(date) if date < today => DateEntry::Past(date),
        Some(date) => DateEntry::Selectable(date),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    LastDay,
    LastHour,
    EventDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    millis: i64,
}

impl Remaining {
    pub fn from_millis(millis: i64) -> Self {
        Self {
            millis: millis.max(0),
        }
    }

    pub fn millis(&self) -> i64 {
        self.millis
    }

    pub fn days(&self) -> i64 {
        self.total_seconds() / (24 * 3600)
    }

    pub fn hours(&self) -> i64 {
        (self.total_seconds() % (24 * 3600)) / 3600
    }

    pub fn minutes(&self) -> i64 {
        (self.total_seconds() % 3600) / 60
    }

    pub fn seconds(&self) -> i64 {
        self.total_seconds() % 60
    }

    pub fn urgency(&self) -> Urgency {
        match self.millis {
            ms if ms <= 0 => Urgency::EventDay,
            ms if ms <= HOUR_MS => Urgency::LastHour,
            ms if ms <= DAY_MS => Urgency::LastDay,
            _ => Urgency::Normal,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{} d  {} h  {} m  {} s",
            self.days(),
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }

    fn total_seconds(&self) -> i64 {
        self.millis / 1000
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Counting(Remaining),
    EventDay,
}

impl CountdownPhase {
    pub fn urgency(&self) -> Urgency {
        match self {
            Self::Counting(remaining) => remaining.urgency(),
            Self::EventDay => Urgency::EventDay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPlan {
    /// Blank, unparseable or past date: no countdown at all.
    Inactive,
    /// The event is today; celebrate immediately.
    EventDay,
    /// Tick until local midnight of the event date.
    CountingDown { target: NaiveDateTime },
}

pub fn plan_countdown(date_text: &str, now: NaiveDateTime) -> CountdownPlan {
    let DateEntry::Selectable(date) = classify_event_date(date_text, now.date()) else {
        return CountdownPlan::Inactive;
    };
    if date == now.date() {
        return CountdownPlan::EventDay;
    }
    match date.and_hms_opt(0, 0, 0) {
        Some(target) => CountdownPlan::CountingDown { target },
        None => CountdownPlan::Inactive,
    }
}

/// Phase at `now`, measured in the local time zone.
pub fn phase_at(target: NaiveDateTime, now: NaiveDateTime) -> CountdownPhase {
    phase_in(&Local, target, now)
}

/// Both instants are resolved in `tz` first, so an offset change between
/// them (daylight saving) shortens or lengthens the remaining time.
pub fn phase_in<Tz: TimeZone>(
    tz: &Tz,
    target: NaiveDateTime,
    now: NaiveDateTime,
) -> CountdownPhase {
    let diff = match (
        tz.from_local_datetime(&target).earliest(),
        tz.from_local_datetime(&now).earliest(),
    ) {
        (Some(target), Some(now)) => target.signed_duration_since(now).num_milliseconds(),
        // inside a skipped hour; the wall-clock difference is the best we have
        _ => (target - now).num_milliseconds(),
    };
    if diff <= 0 {
        CountdownPhase::EventDay
    } else {
        CountdownPhase::Counting(Remaining::from_millis(diff))
    }
}

/// Sleep needed to land on the next wall-clock second boundary.
pub fn delay_to_next_second(now: NaiveDateTime) -> Duration {
    let millis_into_second = u64::from((now.nanosecond() / 1_000_000).min(999));
    Duration::from_millis(1000 - millis_into_second)
}

#[cfg(test)]
#[path = "tests/countdown_tests.rs"]
mod tests;
