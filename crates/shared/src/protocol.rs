use serde::{Deserialize, Serialize};

use crate::domain::{InvitationId, InvitationRecord, RsvpStatus};

/// Intents raised by a rendered list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ListIntent {
    ChangeStatus { id: InvitationId, status: RsvpStatus },
    BeginEdit { id: InvitationId },
    Delete { id: InvitationId },
}

impl ListIntent {
    pub fn target(&self) -> InvitationId {
        match self {
            Self::ChangeStatus { id, .. } | Self::BeginEdit { id } | Self::Delete { id } => *id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ChangeStatus { .. } => "change_status",
            Self::BeginEdit { .. } => "begin_edit",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Aggregate RSVP counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpSummary {
    pub total: usize,
    pub accepted: usize,
    pub pending: usize,
    pub rejected: usize,
    /// Extras brought by accepted invitees only.
    pub total_extras: u32,
}

impl RsvpSummary {
    pub fn from_records(records: &[InvitationRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;
            match record.status {
                RsvpStatus::Accepted => {
                    summary.accepted += 1;
                    summary.total_extras += u32::from(record.extras);
                }
                RsvpStatus::Pending => summary.pending += 1,
                RsvpStatus::Rejected => summary.rejected += 1,
            }
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_intent_uses_tagged_wire_shape() {
        let intent = ListIntent::ChangeStatus {
            id: InvitationId(42),
            status: RsvpStatus::Accepted,
        };
        let json = serde_json::to_value(intent).expect("serialize");
        assert_eq!(json["type"], "change_status");
        assert_eq!(json["payload"]["id"], 42);
        assert_eq!(json["payload"]["status"], "ACCEPTED");
        assert_eq!(intent.target(), InvitationId(42));
    }
}
