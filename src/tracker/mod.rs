//! Per-caller access history and the BOLA classification rule.
//!
//! A caller's first distinct resource id is innocent; every further distinct
//! id is suspicious at the moment it is first seen. Repeats are never flagged.

use std::collections::{HashMap, HashSet};

/// Outcome of observing one (caller, resource) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Identity or resource id was empty; history untouched
    Unclassifiable,
    /// First resource id ever seen for this caller
    FirstAccess,
    /// Caller already touched this resource id
    Repeat,
    /// New resource id for a caller that already has one
    Suspicious,
}

impl Classification {
    pub fn is_suspicious(self) -> bool {
        self == Classification::Suspicious
    }
}

/// Caller identity -> resource ids seen so far. One instance per run; only grows.
#[derive(Debug, Default)]
pub struct AccessHistory {
    callers: HashMap<String, HashSet<String>>,
}

impl AccessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, identity: &str, resource_id: &str) -> Classification {
        if identity.is_empty() || resource_id.is_empty() {
            return Classification::Unclassifiable;
        }
        let seen = self.callers.entry(identity.to_string()).or_default();
        if seen.contains(resource_id) {
            return Classification::Repeat;
        }
        let had_any = !seen.is_empty();
        seen.insert(resource_id.to_string());
        if had_any {
            Classification::Suspicious
        } else {
            Classification::FirstAccess
        }
    }

    /// `true` when the pair is a caller's second or later distinct resource id.
    pub fn classify(&mut self, identity: &str, resource_id: &str) -> bool {
        self.observe(identity, resource_id).is_suspicious()
    }

    pub fn resources_for(&self, identity: &str) -> Option<&HashSet<String>> {
        self.callers.get(identity)
    }

    pub fn caller_count(&self) -> usize {
        self.callers.len()
    }

    /// Distinct (caller, resource) pairs tracked.
    pub fn pair_count(&self) -> usize {
        self.callers.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.callers.is_empty()
    }
}
