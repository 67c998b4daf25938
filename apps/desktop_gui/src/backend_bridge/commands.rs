//! Commands queued from the UI to the effects worker.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectCommand {
    /// Restart the countdown and celebration timers for this date text.
    /// Blank or unparseable text stops them.
    WatchEventDate { date: String },
}

impl EffectCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WatchEventDate { .. } => "watch_event_date",
        }
    }
}
