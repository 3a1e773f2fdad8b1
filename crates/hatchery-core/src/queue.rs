//! The ordered spawn queue.
//!
//! Insertion order is priority order. Normal requests are appended, urgent
//! ones are prepended, and only the head is ever attempted. The queue itself
//! does not enforce the length bound; the admission controller does that
//! before inserting.

use crate::request::SpawnRequest;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// SpawnQueue
// ---------------------------------------------------------------------------

/// FIFO of spawn requests waiting for the facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnQueue {
    requests: VecDeque<SpawnRequest>,
}

impl SpawnQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self {
            requests: VecDeque::new(),
        }
    }

    /// Append a request behind everything already queued.
    pub fn push_back(&mut self, request: SpawnRequest) {
        self.requests.push_back(request);
    }

    /// Put a request in front of everything already queued.
    pub fn push_front(&mut self, request: SpawnRequest) {
        self.requests.push_front(request);
    }

    /// The request the next dispatch attempt will use.
    pub fn head(&self) -> Option<&SpawnRequest> {
        self.requests.front()
    }

    /// Remove and return the head request.
    pub fn pop_head(&mut self) -> Option<SpawnRequest> {
        self.requests.pop_front()
    }

    pub fn get(&self, index: usize) -> Option<&SpawnRequest> {
        self.requests.get(index)
    }

    /// Number of queued requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &SpawnRequest> {
        self.requests.iter()
    }

    /// Positions of requests whose memory carries `marker`. Requests without
    /// memory or without a marker never match.
    pub fn indices_with_marker(&self, marker: &str) -> Vec<usize> {
        self.requests
            .iter()
            .enumerate()
            .filter(|(_, r)| r.marker() == Some(marker))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether a request with this name is already queued.
    pub fn contains_name(&self, name: &str) -> bool {
        self.requests.iter().any(|r| r.name() == name)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
