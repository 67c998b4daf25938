//! The single in-memory collection of invitation records.
//!
//! Every mutation computes a new collection from the current one and submits
//! it through [`InvitationStore::replace`]; there is no partial update path.

use shared::domain::{InvitationId, InvitationRecord, InviteeDetails, RsvpStatus};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct InvitationStore {
    records: Vec<InvitationRecord>,
    revision: u64,
}

impl InvitationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[InvitationRecord] {
        &self.records
    }

    pub fn get(&self, id: InvitationId) -> Option<&InvitationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of replacements applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace(&mut self, records: Vec<InvitationRecord>) {
        self.records = records;
        self.revision += 1;
        debug!(
            revision = self.revision,
            count = self.records.len(),
            "invitation store replaced"
        );
    }

    pub fn add(&mut self, record: InvitationRecord) {
        let mut next = self.records.clone();
        next.push(record);
        self.replace(next);
    }

    pub fn update_details(&mut self, id: InvitationId, details: InviteeDetails) {
        let next = self
            .records
            .iter()
            .map(|record| {
                if record.id == id {
                    record.with_details(details.clone())
                } else {
                    record.clone()
                }
            })
            .collect();
        self.replace(next);
    }

    pub fn set_status(&mut self, id: InvitationId, status: RsvpStatus) {
        let next = self
            .records
            .iter()
            .map(|record| {
                if record.id == id {
                    record.with_status(status)
                } else {
                    record.clone()
                }
            })
            .collect();
        self.replace(next);
    }

    pub fn delete(&mut self, id: InvitationId) {
        let next = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        self.replace(next);
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
