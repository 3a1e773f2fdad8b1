use crate::body::Body;
use crate::id::ObjectId;
use crate::request::UnitMemory;
use crate::result::ResultCode;

/// A structure that turns stored energy into units (a spawner).
///
/// Implementations wrap the game's spawner object. All calls are in-memory
/// and must not block.
pub trait ProductionFacility {
    /// Game object id, used as the destination of resupply orders.
    fn id(&self) -> ObjectId;

    /// Most energy the room can ever hold for production (spawners plus
    /// extensions at full capacity).
    fn available_capacity(&self) -> u32;

    /// Energy stored in the facility itself right now.
    fn current_energy(&self) -> u32;

    /// Most energy the facility itself can store.
    fn energy_capacity(&self) -> u32;

    /// Dry run: what `produce` would return, without side effects.
    fn validate(&self, body: &Body, name: &str) -> ResultCode;

    /// Attempt to produce a unit.
    fn produce(&mut self, body: &Body, name: &str, memory: Option<&UnitMemory>) -> ResultCode;

    /// Raw bytes of the persisted queue slot, `None` if never written.
    fn queue_slot(&self) -> Option<&[u8]>;

    /// Replace the persisted queue slot.
    fn write_queue_slot(&mut self, data: Vec<u8>);
}
