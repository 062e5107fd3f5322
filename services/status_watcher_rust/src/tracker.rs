//! Known-status table and status differ
//!
//! Keeps the last seen review status per homework for the lifetime of the
//! process and reports which records changed since the previous cycle.

use hwbot_rust_core::models::HomeworkStatus;
use std::collections::HashMap;

/// A homework whose status is new or moved since the last cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub homework: String,
    pub status: HomeworkStatus,
    /// `None` when the homework was not seen before.
    pub previous: Option<HomeworkStatus>,
}

#[derive(Debug, Default)]
pub struct StatusTracker {
    seen: HashMap<String, HomeworkStatus>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    /// Record the latest status for a homework. Returns the change when the
    /// homework is unseen or its status differs from the stored one; the
    /// table is updated either way.
    pub fn record(&mut self, homework: &str, status: HomeworkStatus) -> Option<StatusChange> {
        let previous = self.seen.insert(homework.to_string(), status);
        match previous {
            Some(p) if p == status => None,
            previous => Some(StatusChange {
                homework: homework.to_string(),
                status,
                previous,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
