//! Encoding of the spawn queue into a facility's persisted slot.
//!
//! The slot holds a bitcode blob with a versioned header so foreign or stale
//! data is rejected with an error instead of being misread. The header carries
//! no tick: an unchanged queue always re-encodes to the same bytes.

use crate::queue::SpawnQueue;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic number identifying a persisted spawn queue.
pub const QUEUE_SLOT_MAGIC: u32 = 0x5350_4E51;

/// Current slot format version. Increment when breaking the format.
pub const FORMAT_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while encoding the queue.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("bitcode encoding failed: {0}")]
    Encode(String),
}

/// Errors that can occur while decoding the queue.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid magic number: expected 0x{:08X}, got 0x{:08X}", QUEUE_SLOT_MAGIC, .0)]
    InvalidMagic(u32),
    #[error("unsupported format version: expected {}, got {}", FORMAT_VERSION, .0)]
    UnsupportedVersion(u32),
    #[error("slot from future version {0} (this build supports up to {FORMAT_VERSION})")]
    FutureVersion(u32),
    #[error("bitcode decoding failed: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// Slot header
// ---------------------------------------------------------------------------

/// Header prepended to every persisted queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotHeader {
    pub magic: u32,
    pub version: u32,
}

impl SlotHeader {
    /// Header for the current format version.
    pub fn new() -> Self {
        Self {
            magic: QUEUE_SLOT_MAGIC,
            version: FORMAT_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), DecodeError> {
        if self.magic != QUEUE_SLOT_MAGIC {
            return Err(DecodeError::InvalidMagic(self.magic));
        }
        if self.version > FORMAT_VERSION {
            return Err(DecodeError::FutureVersion(self.version));
        }
        if self.version < FORMAT_VERSION {
            return Err(DecodeError::UnsupportedVersion(self.version));
        }
        Ok(())
    }
}

impl Default for SlotHeader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct QueueSnapshot {
    header: SlotHeader,
    queue: SpawnQueue,
}

// ---------------------------------------------------------------------------
// Encode / decode
// ---------------------------------------------------------------------------

/// Serialize the queue with the current header.
pub fn encode_queue(queue: &SpawnQueue) -> Result<Vec<u8>, EncodeError> {
    let snapshot = QueueSnapshot {
        header: SlotHeader::new(),
        queue: queue.clone(),
    };
    bitcode::serialize(&snapshot).map_err(|e| EncodeError::Encode(e.to_string()))
}

/// Deserialize a queue, validating the header first.
pub fn decode_queue(data: &[u8]) -> Result<SpawnQueue, DecodeError> {
    let snapshot: QueueSnapshot =
        bitcode::deserialize(data).map_err(|e| DecodeError::Decode(e.to_string()))?;
    snapshot.header.validate()?;
    Ok(snapshot.queue)
}
