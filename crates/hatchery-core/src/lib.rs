//! Hatchery Core -- the spawn scheduler for a single production facility.
//!
//! A [`scheduler::SpawnScheduler`] owns a bounded FIFO queue of requests to
//! produce worker units from one spawner. Producers enqueue through the
//! admission controller; once per tick the dispatch loop attempts the head of
//! the queue, classifies the result, and either pops, retries, or asks the
//! logistics collaborator to bring energy to the spawner.
//!
//! # Three-Phase Tick
//!
//! Each call to [`scheduler::SpawnScheduler::tick`] runs:
//!
//! 1. **Load** -- Read the queue from the facility's persisted slot on first
//!    use, creating an empty slot if none exists.
//! 2. **Dispatch** -- Exactly one production attempt against the head request.
//! 3. **Persist** -- Write the queue back to the slot, changed or not.
//!
//! # Collaborators
//!
//! The scheduler never touches global game state. Every call receives a
//! [`context::TickContext`] carrying the tick number, the bound
//! [`facility::ProductionFacility`] (if any), and the room's
//! [`logistics::LogisticsCollaborator`].
//!
//! ```rust,ignore
//! let mut ctx = TickContext::new(tick, &mut spawner, &mut logistics);
//! let code = scheduler.request(&mut ctx, body, "harvester1", None)?;
//! let report = scheduler.tick(&mut ctx)?;
//! ```
//!
//! # Key Types
//!
//! - [`scheduler::SpawnScheduler`] -- Queue owner and tick orchestrator.
//! - [`result::ResultCode`] -- Closed set of production outcomes, classified
//!   by [`result::Disposition`].
//! - [`body::Body`] / [`body::PartType`] -- Unit bodies and their energy cost.
//! - [`config::SchedulerConfig`] -- Immutable, validated configuration.
//! - [`persist`] -- Versioned bitcode encoding of the persisted queue slot.

pub mod admission;
pub mod body;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod facility;
pub mod fixed;
pub mod id;
pub mod logistics;
pub mod name;
pub mod persist;
pub mod queue;
pub mod request;
pub mod result;
pub mod scheduler;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
