// src/domain/stats.rs

use crate::domain::application::{ApplicationRecord, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    /// One entry per `Status::ALL`, in that order.
    pub counts: [(Status, usize); 4],
}

impl Statistics {
    /// Rows with a status outside the fixed set still count toward `total`.
    pub fn from_records(records: &[ApplicationRecord]) -> Self {
        let mut counts = Status::ALL.map(|s| (s, 0usize));

        for record in records {
            if let Some(status) = record.status() {
                if let Some(slot) = counts.iter_mut().find(|(s, _)| *s == status) {
                    slot.1 += 1;
                }
            }
        }

        Self {
            total: records.len(),
            counts,
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
