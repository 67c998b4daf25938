//! Events flowing from the effects worker to the UI thread.

use invite_core::EffectEvent;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Effect(EffectEvent),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Startup,
    Queue,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    WorkerStartup,
    EffectDispatch,
    SaveInvitee,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("startup")
            || lower.contains("runtime")
            || lower.contains("spawn")
        {
            UiErrorCategory::Startup
        } else if lower.contains("queue") || lower.contains("disconnected") {
            UiErrorCategory::Queue
        } else if lower.contains("invalid")
            || lower.contains("required")
            || lower.contains("must be")
        {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Countdown and confetti are unavailable once the worker is gone.
    pub fn disables_effects(&self) -> bool {
        matches!(
            self.category,
            UiErrorCategory::Startup | UiErrorCategory::Queue
        )
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn category_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Startup => "Startup",
        UiErrorCategory::Queue => "Background worker",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
