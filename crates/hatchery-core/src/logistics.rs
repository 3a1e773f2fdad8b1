//! The scheduler's view of the room's logistics subsystem.
//!
//! The scheduler only ever submits transfer orders and counts the ones it
//! already submitted. [`RoomLogistics`] is an in-memory implementation that
//! records orders on an [`OrderBoard`]; carrying energy around is somebody
//! else's job, and that owner calls [`OrderBoard::complete`] when an order is
//! done.

use crate::id::{ObjectId, OrderId};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

// ---------------------------------------------------------------------------
// Orders and sinks
// ---------------------------------------------------------------------------

/// A request to move energy from `source` to `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticOrder {
    pub source: ObjectId,
    pub dest: ObjectId,
    pub amount: u32,
    /// Tag of the subsystem that submitted the order.
    pub requester: String,
}

impl LogisticOrder {
    pub fn new(source: ObjectId, dest: ObjectId, amount: u32, requester: impl Into<String>) -> Self {
        Self {
            source,
            dest,
            amount,
            requester: requester.into(),
        }
    }
}

/// A structure that accepts energy, with its storage capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergySink {
    pub id: ObjectId,
    pub energy_capacity: u32,
}

impl EnergySink {
    pub fn new(id: impl Into<ObjectId>, energy_capacity: u32) -> Self {
        Self {
            id: id.into(),
            energy_capacity,
        }
    }
}

// ---------------------------------------------------------------------------
// Collaborator contract
// ---------------------------------------------------------------------------

/// What the scheduler needs from the room's logistics subsystem.
pub trait LogisticsCollaborator {
    /// Containers holding energy, preferred first.
    fn filled_containers(&self) -> Vec<ObjectId>;

    /// Auxiliary structures (extensions) that can take more energy.
    fn fillable_sinks(&self) -> Vec<EnergySink>;

    /// Harvestable sources that currently have energy.
    fn active_sources(&self) -> Vec<ObjectId>;

    /// Number of orders submitted under `requester` that are not yet done.
    fn outstanding_orders(&self, requester: &str) -> usize;

    fn submit(&mut self, order: LogisticOrder);
}

// ---------------------------------------------------------------------------
// OrderBoard
// ---------------------------------------------------------------------------

/// Outstanding logistic orders, keyed by [`OrderId`].
#[derive(Debug, Default)]
pub struct OrderBoard {
    orders: SlotMap<OrderId, LogisticOrder>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self {
            orders: SlotMap::with_key(),
        }
    }

    pub fn submit(&mut self, order: LogisticOrder) -> OrderId {
        self.orders.insert(order)
    }

    /// Orders from `requester` still on the board.
    pub fn outstanding(&self, requester: &str) -> usize {
        self.orders
            .values()
            .filter(|o| o.requester == requester)
            .count()
    }

    /// Mark an order done and take it off the board.
    pub fn complete(&mut self, id: OrderId) -> Option<LogisticOrder> {
        self.orders.remove(id)
    }

    /// Drop every order from `requester`. Returns how many were removed.
    pub fn cancel_requester(&mut self, requester: &str) -> usize {
        let before = self.orders.len();
        self.orders.retain(|_, o| o.requester != requester);
        before - self.orders.len()
    }

    pub fn get(&self, id: OrderId) -> Option<&LogisticOrder> {
        self.orders.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderId, &LogisticOrder)> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RoomLogistics
// ---------------------------------------------------------------------------

/// Plain in-memory logistics state for one room.
#[derive(Debug, Default)]
pub struct RoomLogistics {
    pub filled_containers: Vec<ObjectId>,
    pub fillable_sinks: Vec<EnergySink>,
    pub active_sources: Vec<ObjectId>,
    orders: OrderBoard,
}

impl RoomLogistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: impl Into<ObjectId>) -> Self {
        self.filled_containers.push(id.into());
        self
    }

    pub fn with_sink(mut self, sink: EnergySink) -> Self {
        self.fillable_sinks.push(sink);
        self
    }

    pub fn with_source(mut self, id: impl Into<ObjectId>) -> Self {
        self.active_sources.push(id.into());
        self
    }

    pub fn orders(&self) -> &OrderBoard {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut OrderBoard {
        &mut self.orders
    }
}

impl LogisticsCollaborator for RoomLogistics {
    fn filled_containers(&self) -> Vec<ObjectId> {
        self.filled_containers.clone()
    }

    fn fillable_sinks(&self) -> Vec<EnergySink> {
        self.fillable_sinks.clone()
    }

    fn active_sources(&self) -> Vec<ObjectId> {
        self.active_sources.clone()
    }

    fn outstanding_orders(&self, requester: &str) -> usize {
        self.orders.outstanding(requester)
    }

    fn submit(&mut self, order: LogisticOrder) {
        self.orders.submit(order);
    }
}
