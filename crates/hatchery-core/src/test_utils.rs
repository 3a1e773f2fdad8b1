//! Shared test helpers for unit tests, integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::body::{Body, MAX_BODY_PARTS, PartType};
use crate::facility::ProductionFacility;
use crate::id::ObjectId;
use crate::logistics::{EnergySink, RoomLogistics};
use crate::request::UnitMemory;
use crate::result::ResultCode;
use std::collections::BTreeSet;

// ===========================================================================
// MockSpawner
// ===========================================================================

/// A unit the mock spawner produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRecord {
    pub name: String,
    pub body: Body,
    pub memory: Option<UnitMemory>,
}

/// In-memory spawner. Production draws from the spawner's own store first,
/// then from its extensions.
#[derive(Debug, Clone)]
pub struct MockSpawner {
    pub id: ObjectId,
    pub energy: u32,
    pub energy_capacity: u32,
    pub extension_energy: u32,
    pub extension_capacity: u32,
    /// False models a controller level too low for this spawner.
    pub active: bool,
    pub busy: bool,
    /// Names of units that already exist in the world.
    pub existing: BTreeSet<String>,
    pub slot: Option<Vec<u8>>,
    pub spawned: Vec<SpawnRecord>,
    pub produce_calls: u32,
}

impl MockSpawner {
    pub fn new(id: &str, energy: u32, energy_capacity: u32) -> Self {
        Self {
            id: ObjectId::new(id),
            energy,
            energy_capacity,
            extension_energy: 0,
            extension_capacity: 0,
            active: true,
            busy: false,
            existing: BTreeSet::new(),
            slot: None,
            spawned: Vec::new(),
            produce_calls: 0,
        }
    }

    pub fn with_extensions(mut self, energy: u32, capacity: u32) -> Self {
        self.extension_energy = energy;
        self.extension_capacity = capacity;
        self
    }

    /// Energy available for production right now.
    pub fn spendable(&self) -> u32 {
        self.energy + self.extension_energy
    }

    /// Add energy, spawner first, capped at capacity.
    pub fn refill(&mut self, amount: u32) {
        let to_spawner = amount.min(self.energy_capacity - self.energy.min(self.energy_capacity));
        self.energy += to_spawner;
        let rest = amount - to_spawner;
        self.extension_energy = (self.extension_energy + rest).min(self.extension_capacity);
    }

    fn check(&self, body: &Body, name: &str) -> ResultCode {
        if body.is_empty() || body.len() > MAX_BODY_PARTS || name.is_empty() {
            return ResultCode::InvalidArgs;
        }
        if self.existing.contains(name) {
            return ResultCode::NameExists;
        }
        if !self.active {
            return ResultCode::RclNotEnough;
        }
        if self.busy {
            return ResultCode::Busy;
        }
        if self.spendable() < body.cost() {
            return ResultCode::NotEnoughEnergy;
        }
        ResultCode::Ok
    }
}

impl ProductionFacility for MockSpawner {
    fn id(&self) -> ObjectId {
        self.id.clone()
    }

    fn available_capacity(&self) -> u32 {
        self.energy_capacity + self.extension_capacity
    }

    fn current_energy(&self) -> u32 {
        self.energy
    }

    fn energy_capacity(&self) -> u32 {
        self.energy_capacity
    }

    fn validate(&self, body: &Body, name: &str) -> ResultCode {
        self.check(body, name)
    }

    fn produce(&mut self, body: &Body, name: &str, memory: Option<&UnitMemory>) -> ResultCode {
        self.produce_calls += 1;
        let code = self.check(body, name);
        if code.is_ok() {
            let cost = body.cost();
            let from_spawner = cost.min(self.energy);
            self.energy -= from_spawner;
            self.extension_energy -= cost - from_spawner;
            self.existing.insert(name.to_string());
            self.spawned.push(SpawnRecord {
                name: name.to_string(),
                body: body.clone(),
                memory: memory.cloned(),
            });
        }
        code
    }

    fn queue_slot(&self) -> Option<&[u8]> {
        self.slot.as_deref()
    }

    fn write_queue_slot(&mut self, data: Vec<u8>) {
        self.slot = Some(data);
    }
}

// ===========================================================================
// Room helpers
// ===========================================================================

/// A room with one filled container, one active source and one extension.
pub fn stocked_room() -> RoomLogistics {
    RoomLogistics::new()
        .with_container("container1")
        .with_source("source1")
        .with_sink(EnergySink::new("ext1", 50))
}

// ===========================================================================
// Body constructors
// ===========================================================================

/// A body made only of MOVE parts costing exactly `cost` (rounded down to
/// a multiple of 50, at least one part).
pub fn move_body(cost: u32) -> Body {
    let parts = (cost / PartType::Move.cost()).max(1) as usize;
    Body::new(vec![PartType::Move; parts])
}

pub fn harvester_body() -> Body {
    Body::new(vec![PartType::Work, PartType::Work, PartType::Carry, PartType::Move])
}
