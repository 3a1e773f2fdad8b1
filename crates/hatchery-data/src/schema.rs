//! Serde data file structs for scheduler configuration.
//!
//! Every field is optional on disk; missing fields take the same defaults as
//! [`hatchery_core::config::SchedulerConfig::default`].

use hatchery_core::body::PartType;
use hatchery_core::config::{DEFAULT_MARKER, DEFAULT_MAX_QUEUE, DEFAULT_NAME_PREFIX};
use serde::Deserialize;

// ===========================================================================
// Scheduler
// ===========================================================================

/// Top-level scheduler configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfigData {
    #[serde(default = "default_max_queue")]
    pub max_queue: usize,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
    #[serde(default)]
    pub body: BodyPlanData,
}

impl Default for SchedulerConfigData {
    fn default() -> Self {
        Self {
            max_queue: default_max_queue(),
            marker: default_marker(),
            name_prefix: default_name_prefix(),
            body: BodyPlanData::default(),
        }
    }
}

fn default_max_queue() -> usize {
    DEFAULT_MAX_QUEUE
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

// ===========================================================================
// Body plan
// ===========================================================================

/// Body composition settings. `fill_factor` is a float on disk and becomes
/// fixed-point when resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct BodyPlanData {
    #[serde(default = "default_priority")]
    pub priority: Vec<PartWeightData>,
    #[serde(default = "default_fill_factor")]
    pub fill_factor: f64,
}

impl Default for BodyPlanData {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            fill_factor: default_fill_factor(),
        }
    }
}

/// One entry of the round-robin priority list: append `weight` of `part`
/// per round.
#[derive(Debug, Clone, Deserialize)]
pub struct PartWeightData {
    pub part: PartType,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_priority() -> Vec<PartWeightData> {
    [PartType::Work, PartType::Carry, PartType::Move]
        .into_iter()
        .map(|part| PartWeightData { part, weight: 1 })
        .collect()
}

fn default_fill_factor() -> f64 {
    0.5
}

fn default_weight() -> u32 {
    1
}
