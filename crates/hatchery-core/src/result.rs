//! Result codes returned by production attempts and admission checks.
//!
//! Every outcome the scheduler deals with is a member of one closed enum,
//! [`ResultCode`]. The dispatch loop never inspects individual codes directly;
//! it asks for the code's [`Disposition`] and acts on that.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Result codes
// ---------------------------------------------------------------------------

/// Outcome of a production attempt, a dry-run validation, or an admission
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    /// The action succeeded (or, for a dry run, would succeed).
    Ok,
    /// The caller does not own the facility.
    NotOwner,
    /// A unit with the requested name already exists.
    NameExists,
    /// The facility is already producing something.
    Busy,
    /// Energy currently stored is below the body cost.
    NotEnoughEnergy,
    /// The body or name is malformed.
    InvalidArgs,
    /// The room's controller level does not allow this facility to operate.
    RclNotEnough,
    /// The spawn queue is at its configured bound.
    QueueFull,
    /// The body costs more than the room could ever hold.
    InsufficientCapacity,
}

/// How the dispatch loop must treat a [`ResultCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Unit produced; pop the head.
    Success,
    /// Request can never succeed as specified; pop and discard.
    Fatal,
    /// Capacity exists but stored energy does not; keep and resupply.
    Starved,
    /// Anything else; keep and retry next tick.
    Transient,
}

/// Codes that cancel a queued request outright.
pub const FATAL_CODES: [ResultCode; 3] = [
    ResultCode::NameExists,
    ResultCode::InvalidArgs,
    ResultCode::RclNotEnough,
];

impl ResultCode {
    pub fn disposition(self) -> Disposition {
        match self {
            ResultCode::Ok => Disposition::Success,
            ResultCode::NameExists | ResultCode::InvalidArgs | ResultCode::RclNotEnough => {
                Disposition::Fatal
            }
            ResultCode::NotEnoughEnergy => Disposition::Starved,
            ResultCode::NotOwner
            | ResultCode::Busy
            | ResultCode::QueueFull
            | ResultCode::InsufficientCapacity => Disposition::Transient,
        }
    }

    pub fn is_ok(self) -> bool {
        self == ResultCode::Ok
    }

    pub fn is_fatal(self) -> bool {
        self.disposition() == Disposition::Fatal
    }

    /// Short lowercase label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            ResultCode::Ok => "ok",
            ResultCode::NotOwner => "not_owner",
            ResultCode::NameExists => "name_exists",
            ResultCode::Busy => "busy",
            ResultCode::NotEnoughEnergy => "not_enough_energy",
            ResultCode::InvalidArgs => "invalid_args",
            ResultCode::RclNotEnough => "rcl_not_enough",
            ResultCode::QueueFull => "queue_full",
            ResultCode::InsufficientCapacity => "insufficient_capacity",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
