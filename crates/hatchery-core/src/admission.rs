//! Admission controller: decides whether a request may enter the queue.

use crate::body::Body;
use crate::context::TickContext;
use crate::facility::ProductionFacility;
use crate::queue::SpawnQueue;
use crate::request::{SpawnRequest, UnitMemory};
use crate::result::ResultCode;
use crate::scheduler::{SchedulerError, SpawnScheduler};

/// Check a body and name against the facility and the queue bound.
///
/// Checks, in order: the body fits the room's capacity at all, the queue has
/// room, and a dry run on the facility does not report a fatal code.
/// Non-fatal dry-run codes (not enough energy right now, busy) are admissible.
pub fn can_admit(
    queue: &SpawnQueue,
    max_queue: usize,
    facility: &dyn ProductionFacility,
    body: &Body,
    name: &str,
) -> ResultCode {
    if body.cost() > facility.available_capacity() {
        return ResultCode::InsufficientCapacity;
    }
    if queue.len() >= max_queue {
        return ResultCode::QueueFull;
    }
    let dry_run = facility.validate(body, name);
    if dry_run.is_fatal() {
        return dry_run;
    }
    ResultCode::Ok
}

impl SpawnScheduler {
    /// Append a request to the back of the queue.
    ///
    /// Returns the admission code either way: `Ok` means the request is
    /// queued, anything else means it was rejected and never created.
    pub fn request(
        &mut self,
        ctx: &mut TickContext<'_>,
        body: Body,
        name: impl Into<String>,
        memory: Option<UnitMemory>,
    ) -> Result<ResultCode, SchedulerError> {
        self.enqueue(ctx, SpawnRequest::new(body, name, memory), false)
    }

    /// Put a request at the front of the queue, ahead of everything else.
    pub fn force(
        &mut self,
        ctx: &mut TickContext<'_>,
        body: Body,
        name: impl Into<String>,
        memory: Option<UnitMemory>,
    ) -> Result<ResultCode, SchedulerError> {
        self.enqueue(ctx, SpawnRequest::new(body, name, memory), true)
    }

    /// Run the admission checks without enqueueing anything.
    pub fn can_admit(
        &mut self,
        ctx: &mut TickContext<'_>,
        body: &Body,
        name: &str,
    ) -> Result<ResultCode, SchedulerError> {
        let facility = ctx.facility.as_deref_mut().ok_or(SchedulerError::NoFacility)?;
        let queue = self.store.load(facility)?;
        Ok(can_admit(
            queue,
            self.config.max_queue(),
            &*facility,
            body,
            name,
        ))
    }

    /// Admit and insert. An admitted request is written through to the slot
    /// right away so it survives a restart before the next tick.
    fn enqueue(
        &mut self,
        ctx: &mut TickContext<'_>,
        request: SpawnRequest,
        urgent: bool,
    ) -> Result<ResultCode, SchedulerError> {
        let facility = ctx.facility.as_deref_mut().ok_or(SchedulerError::NoFacility)?;
        let queue = self.store.load(facility)?;
        let code = can_admit(
            queue,
            self.config.max_queue(),
            &*facility,
            request.body(),
            request.name(),
        );
        if code.is_ok() {
            if urgent {
                queue.push_front(request);
            } else {
                queue.push_back(request);
            }
            self.store.save(facility)?;
        }
        Ok(code)
    }
}
