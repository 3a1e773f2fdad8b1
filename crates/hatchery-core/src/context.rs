use crate::facility::ProductionFacility;
use crate::fixed::Ticks;
use crate::logistics::LogisticsCollaborator;

/// Everything a scheduler call may touch outside the scheduler itself.
///
/// Built fresh by the caller for each tick. The facility is optional because
/// the spawner object can disappear between ticks; a scheduler with no
/// facility is inert.
pub struct TickContext<'a> {
    pub tick: Ticks,
    pub facility: Option<&'a mut dyn ProductionFacility>,
    pub logistics: &'a mut dyn LogisticsCollaborator,
}

impl<'a> TickContext<'a> {
    pub fn new(
        tick: Ticks,
        facility: &'a mut dyn ProductionFacility,
        logistics: &'a mut dyn LogisticsCollaborator,
    ) -> Self {
        Self {
            tick,
            facility: Some(facility),
            logistics,
        }
    }

    /// A context with no facility bound.
    pub fn unbound(tick: Ticks, logistics: &'a mut dyn LogisticsCollaborator) -> Self {
        Self {
            tick,
            facility: None,
            logistics,
        }
    }
}
