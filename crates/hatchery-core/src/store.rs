//! Queue store: keeps the in-memory queue in step with the facility's
//! persisted slot.

use crate::facility::ProductionFacility;
use crate::persist::{DecodeError, EncodeError, decode_queue, encode_queue};
use crate::queue::SpawnQueue;

/// Errors moving the queue in or out of the persisted slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write queue slot: {0}")]
    Encode(#[from] EncodeError),
    #[error("failed to read queue slot: {0}")]
    Decode(#[from] DecodeError),
}

/// The scheduler's queue plus its load state for this process lifetime.
#[derive(Debug, Default)]
pub struct QueueStore {
    queue: Option<SpawnQueue>,
}

impl QueueStore {
    pub fn new() -> Self {
        Self { queue: None }
    }

    /// Whether the queue has been read from the slot yet.
    pub fn is_loaded(&self) -> bool {
        self.queue.is_some()
    }

    /// Load the queue from the facility on first use.
    ///
    /// An empty slot is initialized with an empty queue and written back
    /// immediately. Once loaded, the in-memory queue is authoritative and
    /// later calls leave it untouched.
    ///
    /// A slot that fails to decode is reported on every call and never
    /// overwritten. The caller must clear or rewrite the slot to recover.
    pub fn load(&mut self, facility: &mut dyn ProductionFacility) -> Result<&mut SpawnQueue, StoreError> {
        let queue = match self.queue.take() {
            Some(queue) => queue,
            None => Self::read_slot(facility)?,
        };
        Ok(self.queue.insert(queue))
    }

    fn read_slot(facility: &mut dyn ProductionFacility) -> Result<SpawnQueue, StoreError> {
        let existing = facility.queue_slot().map(decode_queue).transpose()?;
        match existing {
            Some(queue) => Ok(queue),
            None => {
                let queue = SpawnQueue::new();
                facility.write_queue_slot(encode_queue(&queue)?);
                Ok(queue)
            }
        }
    }

    /// Write the queue to the facility's slot. Does nothing before the first
    /// load, since there is nothing authoritative to write.
    pub fn save(&self, facility: &mut dyn ProductionFacility) -> Result<(), StoreError> {
        if let Some(queue) = &self.queue {
            facility.write_queue_slot(encode_queue(queue)?);
        }
        Ok(())
    }

    pub fn queue(&self) -> Option<&SpawnQueue> {
        self.queue.as_ref()
    }

    /// Queue length, zero before the first load.
    pub fn len(&self) -> usize {
        self.queue.as_ref().map_or(0, |q| q.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positions of queued requests tagged with `marker`.
    pub fn query_by_tag(&self, marker: &str) -> Vec<usize> {
        self.queue
            .as_ref()
            .map(|q| q.indices_with_marker(marker))
            .unwrap_or_default()
    }
}
