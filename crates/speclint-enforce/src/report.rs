use std::sync::{Mutex, PoisonError};

use crate::types::Violation;

/// Append-only violation collector shared by every rule.
///
/// Appends take a mutex, so rules running on separate threads can write
/// concurrently. Read with [`Report::violations`] once all writers are done;
/// the order is append order and carries no meaning.
#[derive(Debug, Default)]
pub struct Report {
    violations: Mutex<Vec<Violation>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_violation(&self, violation: Violation) {
        self.violations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(violation);
    }

    /// Snapshot of everything appended so far.
    pub fn violations(&self) -> Vec<Violation> {
        self.violations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.violations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
