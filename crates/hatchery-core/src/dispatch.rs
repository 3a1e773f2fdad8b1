//! Dispatch loop: one production attempt per tick against the queue head.
//!
//! | Disposition | Head popped? | Side effect |
//! |---|---|---|
//! | Success | yes | none |
//! | Fatal | yes | cancellation logged |
//! | Starved | no | at most one resupply order per requester tag |
//! | Transient | no | none |

use crate::facility::ProductionFacility;
use crate::logistics::{EnergySink, LogisticOrder, LogisticsCollaborator};
use crate::queue::SpawnQueue;
use crate::request::SpawnRequest;
use crate::result::{Disposition, ResultCode};
use log::{debug, info, warn};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of the resupply step after a starved attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResupplyOutcome {
    /// A new order was handed to logistics.
    Submitted(LogisticOrder),
    /// An order from this requester is still outstanding.
    AlreadyPending,
    /// No energy source or no sink was found; nothing submitted.
    NoRoute,
}

/// What the dispatch attempt did this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No facility bound.
    Inert,
    /// Queue empty.
    Idle,
    /// Head produced and popped.
    Spawned { name: String },
    /// Head can never succeed; popped and discarded.
    Cancelled { request: SpawnRequest, code: ResultCode },
    /// Not enough stored energy; head kept.
    Starved {
        name: String,
        resupply: ResupplyOutcome,
    },
    /// Transient failure; head kept for next tick.
    Waiting { name: String, code: ResultCode },
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Attempt the head of `queue` and act on the result.
pub(crate) fn dispatch_head(
    queue: &mut SpawnQueue,
    marker: &str,
    facility: &mut dyn ProductionFacility,
    logistics: &mut dyn LogisticsCollaborator,
) -> DispatchOutcome {
    let Some(head) = queue.head() else {
        return DispatchOutcome::Idle;
    };
    let code = facility.produce(head.body(), head.name(), head.memory());
    let name = head.name().to_string();

    match code.disposition() {
        Disposition::Success => {
            queue.pop_head();
            debug!("spawned {name}");
            DispatchOutcome::Spawned { name }
        }
        Disposition::Fatal => match queue.pop_head() {
            Some(request) => {
                info!(
                    "spawn order cancelled: ({}, {}): {}",
                    request.body(),
                    request.name(),
                    code
                );
                DispatchOutcome::Cancelled { request, code }
            }
            None => DispatchOutcome::Idle,
        },
        Disposition::Starved => {
            if let Some(head) = queue.head() {
                debug!(
                    "spawning {}: {}/{}",
                    name,
                    facility.current_energy(),
                    head.body().cost()
                );
            }
            let resupply = request_resupply(marker, &*facility, logistics);
            DispatchOutcome::Starved { name, resupply }
        }
        Disposition::Transient => DispatchOutcome::Waiting { name, code },
    }
}

/// Ask logistics to move energy toward the facility.
///
/// Source: the first filled container, else the first active harvest source.
/// Sink: the facility while it is below its own capacity, else the first
/// fillable auxiliary sink. Nothing is submitted while an order tagged
/// `marker` is outstanding.
pub fn request_resupply(
    marker: &str,
    facility: &dyn ProductionFacility,
    logistics: &mut dyn LogisticsCollaborator,
) -> ResupplyOutcome {
    let source = logistics
        .filled_containers()
        .into_iter()
        .next()
        .or_else(|| logistics.active_sources().into_iter().next());

    let sink = if facility.current_energy() < facility.energy_capacity() {
        Some(EnergySink {
            id: facility.id(),
            energy_capacity: facility.energy_capacity(),
        })
    } else {
        logistics.fillable_sinks().into_iter().next()
    };

    let (Some(source), Some(sink)) = (source, sink) else {
        warn!("no resupply route for {}", facility.id());
        return ResupplyOutcome::NoRoute;
    };

    if logistics.outstanding_orders(marker) > 0 {
        return ResupplyOutcome::AlreadyPending;
    }

    let order = LogisticOrder::new(source, sink.id, sink.energy_capacity, marker);
    debug!(
        "resupply order {} -> {} ({}) for {}",
        order.source, order.dest, order.amount, marker
    );
    logistics.submit(order.clone());
    ResupplyOutcome::Submitted(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;
    use crate::id::ObjectId;
    use crate::logistics::RoomLogistics;
    use crate::test_utils::*;

    fn queue_of(names: &[&str]) -> SpawnQueue {
        let mut queue = SpawnQueue::new();
        for name in names {
            queue.push_back(SpawnRequest::new(Body::base(), *name, None));
        }
        queue
    }

    #[test]
    fn empty_queue_is_idle() {
        let mut spawner = MockSpawner::new("spawn1", 300, 300);
        let mut room = stocked_room();
        let outcome = dispatch_head(&mut SpawnQueue::new(), "t", &mut spawner, &mut room);
        assert_eq!(outcome, DispatchOutcome::Idle);
        assert_eq!(spawner.produce_calls, 0);
    }

    #[test]
    fn success_pops_head() {
        let mut spawner = MockSpawner::new("spawn1", 300, 300);
        let mut room = stocked_room();
        let mut queue = queue_of(&["a", "b"]);
        let outcome = dispatch_head(&mut queue, "t", &mut spawner, &mut room);
        assert_eq!(outcome, DispatchOutcome::Spawned { name: "a".into() });
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.head().unwrap().name(), "b");
        assert!(room.orders().is_empty());
    }

    #[test]
    fn fatal_discards_head() {
        let mut spawner = MockSpawner::new("spawn1", 300, 300);
        spawner.existing.insert("a".to_string());
        let mut room = stocked_room();
        let mut queue = queue_of(&["a", "b"]);
        let outcome = dispatch_head(&mut queue, "t", &mut spawner, &mut room);
        match outcome {
            DispatchOutcome::Cancelled { request, code } => {
                assert_eq!(request.name(), "a");
                assert_eq!(code, ResultCode::NameExists);
            }
            other => panic!("expected cancellation, got {other:?}"),
        }
        assert_eq!(queue.len(), 1);
        assert!(!queue.contains_name("a"));
    }

    #[test]
    fn inactive_spawner_cancels_head() {
        let mut spawner = MockSpawner::new("spawn1", 300, 300);
        spawner.active = false;
        let mut room = stocked_room();
        let mut queue = queue_of(&["a", "b"]);
        let outcome = dispatch_head(&mut queue, "t", &mut spawner, &mut room);
        match outcome {
            DispatchOutcome::Cancelled { request, code } => {
                assert_eq!(request.name(), "a");
                assert_eq!(code, ResultCode::RclNotEnough);
            }
            other => panic!("expected cancellation, got {other:?}"),
        }
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.head().unwrap().name(), "b");
        assert!(room.orders().is_empty());
    }

    #[test]
    fn empty_body_cancels_head() {
        let mut spawner = MockSpawner::new("spawn1", 300, 300);
        let mut room = stocked_room();
        let mut queue = SpawnQueue::new();
        queue.push_back(SpawnRequest::new(Body::default(), "blank", None));
        queue.push_back(SpawnRequest::new(Body::base(), "b", None));
        let outcome = dispatch_head(&mut queue, "t", &mut spawner, &mut room);
        assert!(matches!(
            outcome,
            DispatchOutcome::Cancelled {
                code: ResultCode::InvalidArgs,
                ..
            }
        ));
        assert_eq!(queue.len(), 1);
        assert!(!queue.contains_name("blank"));
        assert!(spawner.spawned.is_empty());
    }

    #[test]
    fn transient_keeps_head() {
        let mut spawner = MockSpawner::new("spawn1", 300, 300);
        spawner.busy = true;
        let mut room = stocked_room();
        let mut queue = queue_of(&["a"]);
        let outcome = dispatch_head(&mut queue, "t", &mut spawner, &mut room);
        assert_eq!(
            outcome,
            DispatchOutcome::Waiting {
                name: "a".into(),
                code: ResultCode::Busy
            }
        );
        assert_eq!(queue.len(), 1);
        assert!(room.orders().is_empty());
    }

    #[test]
    fn starved_keeps_head_and_orders_once() {
        let mut spawner = MockSpawner::new("spawn1", 40, 300);
        let mut room = stocked_room();
        let mut queue = queue_of(&["a"]);

        for _ in 0..5 {
            let outcome = dispatch_head(&mut queue, "spawner", &mut spawner, &mut room);
            assert!(matches!(outcome, DispatchOutcome::Starved { .. }));
            assert_eq!(queue.len(), 1);
            assert_eq!(room.outstanding_orders("spawner"), 1);
        }
    }

    #[test]
    fn resupply_prefers_container_and_facility() {
        let spawner = MockSpawner::new("spawn1", 40, 300);
        let mut room = stocked_room();
        let outcome = request_resupply("spawner", &spawner, &mut room);
        assert_eq!(
            outcome,
            ResupplyOutcome::Submitted(LogisticOrder::new(
                ObjectId::new("container1"),
                ObjectId::new("spawn1"),
                300,
                "spawner"
            ))
        );
    }

    #[test]
    fn resupply_falls_back_to_source_and_extension() {
        // Spawner itself is full, only extensions lack energy.
        let spawner = MockSpawner::new("spawn1", 300, 300).with_extensions(0, 100);
        let mut room = RoomLogistics::new()
            .with_source("source1")
            .with_sink(crate::logistics::EnergySink::new("ext1", 50));
        let outcome = request_resupply("spawner", &spawner, &mut room);
        assert_eq!(
            outcome,
            ResupplyOutcome::Submitted(LogisticOrder::new(
                ObjectId::new("source1"),
                ObjectId::new("ext1"),
                50,
                "spawner"
            ))
        );
    }

    #[test]
    fn resupply_without_route() {
        let spawner = MockSpawner::new("spawn1", 40, 300);
        let mut room = RoomLogistics::new();
        assert_eq!(
            request_resupply("spawner", &spawner, &mut room),
            ResupplyOutcome::NoRoute
        );
        assert!(room.orders().is_empty());
    }

    #[test]
    fn resupply_pending_for_other_tag_does_not_block() {
        let spawner = MockSpawner::new("spawn1", 40, 300);
        let mut room = stocked_room();
        room.submit(LogisticOrder::new(
            ObjectId::new("c9"),
            ObjectId::new("tower1"),
            500,
            "tower",
        ));
        assert!(matches!(
            request_resupply("spawner", &spawner, &mut room),
            ResupplyOutcome::Submitted(_)
        ));
        assert!(matches!(
            request_resupply("spawner", &spawner, &mut room),
            ResupplyOutcome::AlreadyPending
        ));
    }
}
