//! Scheduler configuration.
//!
//! A [`SchedulerConfig`] is validated once when it is built and never changes
//! afterwards. Data files are turned into one by the `hatchery-data` crate.

use crate::body::{BodyPlan, PartType};
use crate::fixed::Fixed64;

/// Default bound on the spawn queue length.
pub const DEFAULT_MAX_QUEUE: usize = 100;

/// Default requester tag for resupply orders.
pub const DEFAULT_MARKER: &str = "spawn-scheduler";

/// Default prefix for generated unit names.
pub const DEFAULT_NAME_PREFIX: &str = "bot";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_queue must be at least 1")]
    ZeroQueueBound,
    #[error("fill factor {0} is outside [0, 1]")]
    FillFactorOutOfRange(Fixed64),
    #[error("part {0} appears more than once in the priority list")]
    DuplicatePart(PartType),
    #[error("requester marker must not be empty")]
    EmptyMarker,
}

// ---------------------------------------------------------------------------
// SchedulerConfig
// ---------------------------------------------------------------------------

/// Static options for one [`crate::scheduler::SpawnScheduler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    max_queue: usize,
    marker: String,
    name_prefix: String,
    body_plan: BodyPlan,
}

impl SchedulerConfig {
    pub fn new(
        max_queue: usize,
        marker: impl Into<String>,
        name_prefix: impl Into<String>,
        body_plan: BodyPlan,
    ) -> Result<Self, ConfigError> {
        let marker = marker.into();
        if max_queue == 0 {
            return Err(ConfigError::ZeroQueueBound);
        }
        if marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        Ok(Self {
            max_queue,
            marker,
            name_prefix: name_prefix.into(),
            body_plan,
        })
    }

    /// Defaults with a different queue bound.
    pub fn with_max_queue(max_queue: usize) -> Result<Self, ConfigError> {
        Self::new(
            max_queue,
            DEFAULT_MARKER,
            DEFAULT_NAME_PREFIX,
            BodyPlan::default(),
        )
    }

    /// Maximum number of queued requests.
    pub fn max_queue(&self) -> usize {
        self.max_queue
    }

    /// Requester tag this scheduler puts on its logistic orders.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    pub fn body_plan(&self) -> &BodyPlan {
        &self.body_plan
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_queue: DEFAULT_MAX_QUEUE,
            marker: DEFAULT_MARKER.to_string(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            body_plan: BodyPlan::default(),
        }
    }
}
