//! The spawn scheduler and its per-tick pipeline.
//!
//! Admission lives in [`crate::admission`], the dispatch state machine in
//! [`crate::dispatch`]; this module ties them to the queue store and runs
//! the load, dispatch, persist sequence.

use crate::body::{Body, compose_body};
use crate::config::SchedulerConfig;
use crate::context::TickContext;
use crate::dispatch::DispatchOutcome;
use crate::fixed::Ticks;
use crate::name::generate_name;
use crate::queue::SpawnQueue;
use crate::store::{QueueStore, StoreError};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors from scheduler calls that are not production outcomes.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("no production facility bound to this scheduler")]
    NoFacility,
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Tick report
// ---------------------------------------------------------------------------

/// What happened during one call to [`SpawnScheduler::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick: Ticks,
    pub outcome: DispatchOutcome,
    /// Queue length after the tick.
    pub queue_len: usize,
}

// ---------------------------------------------------------------------------
// SpawnScheduler
// ---------------------------------------------------------------------------

/// Owns the spawn queue of one production facility.
#[derive(Debug, Default)]
pub struct SpawnScheduler {
    pub(crate) config: SchedulerConfig,
    pub(crate) store: QueueStore,
}

impl SpawnScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            store: QueueStore::new(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// The queue, or `None` before it has been loaded.
    pub fn queue(&self) -> Option<&SpawnQueue> {
        self.store.queue()
    }

    pub fn queue_len(&self) -> usize {
        self.store.len()
    }

    /// Positions of queued requests whose memory carries `marker`.
    pub fn query_by_tag(&self, marker: &str) -> Vec<usize> {
        self.store.query_by_tag(marker)
    }

    /// Load the queue from the bound facility if not already loaded.
    pub fn load(&mut self, ctx: &mut TickContext<'_>) -> Result<(), SchedulerError> {
        let facility = ctx.facility.as_deref_mut().ok_or(SchedulerError::NoFacility)?;
        self.store.load(facility)?;
        Ok(())
    }

    /// Write the queue to the bound facility's slot.
    pub fn save(&self, ctx: &mut TickContext<'_>) -> Result<(), SchedulerError> {
        let facility = ctx.facility.as_deref_mut().ok_or(SchedulerError::NoFacility)?;
        self.store.save(facility)?;
        Ok(())
    }

    /// Run one tick: load if needed, one dispatch attempt, persist.
    ///
    /// With no facility bound the scheduler is inert and nothing is read or
    /// written. Persist runs on every other tick, even when nothing changed.
    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> Result<TickReport, StoreError> {
        let Some(facility) = ctx.facility.as_deref_mut() else {
            return Ok(TickReport {
                tick: ctx.tick,
                outcome: DispatchOutcome::Inert,
                queue_len: self.store.len(),
            });
        };

        // Phase 1: Load.
        let queue = self.store.load(facility)?;

        // Phase 2: Dispatch.
        let outcome = crate::dispatch::dispatch_head(
            queue,
            self.config.marker(),
            facility,
            &mut *ctx.logistics,
        );

        // Phase 3: Persist.
        self.store.save(facility)?;

        Ok(TickReport {
            tick: ctx.tick,
            outcome,
            queue_len: self.store.len(),
        })
    }

    /// Largest body the configured plan allows for the bound facility's room.
    pub fn best_body(&self, ctx: &TickContext<'_>) -> Result<Body, SchedulerError> {
        let facility = ctx.facility.as_deref().ok_or(SchedulerError::NoFacility)?;
        Ok(compose_body(
            facility.available_capacity(),
            self.config.body_plan(),
        ))
    }

    /// Unit name from the configured prefix and the context's tick.
    pub fn generate_name(&self, ctx: &TickContext<'_>) -> String {
        generate_name(self.config.name_prefix(), ctx.tick)
    }
}
