//! Record identity.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use shared::domain::InvitationId;

pub trait IdSource: Send + Sync {
    fn next_id(&self) -> InvitationId;
}

/// Millisecond wall-clock ids. Two records created within the same
/// millisecond receive the same id; nothing here guards against that.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockIdSource;

impl IdSource for ClockIdSource {
    fn next_id(&self) -> InvitationId {
        InvitationId(Utc::now().timestamp_millis())
    }
}

/// Deterministic ids for tests and demos.
#[derive(Debug)]
pub struct SequentialIdSource {
    next: AtomicI64,
}

impl SequentialIdSource {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> InvitationId {
        InvitationId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
