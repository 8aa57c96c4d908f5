//! Quarantine routing adapter.

use epi_agent::{Destinations, Population};
use epi_core::{AgentId, EpiResult, RoutingConfig, SimRng};

use crate::motion::MotionEngine;

/// Route `agent` to the configured quarantine location.
///
/// Asks the motion collaborator for a center and wander envelope within
/// `routing.bounds`, writes the center into the agent's destination slot,
/// the wander extents into the agent, and activates the slot.  Pure adapter:
/// no decision logic — whether to route (capacity, odds) was decided by the
/// caller.
///
/// # Errors
///
/// Returns [`EpiError::DestinationSlot`][epi_core::EpiError::DestinationSlot]
/// if `routing.slot` exceeds the destination container's slot count.
pub fn send_to_quarantine<M: MotionEngine>(
    pop:     &mut Population,
    dests:   &mut Destinations,
    agent:   AgentId,
    routing: &RoutingConfig,
    motion:  &M,
    rng:     &mut SimRng,
) -> EpiResult<()> {
    let params = motion.motion_parameters(routing.bounds, rng);

    dests.set_center(agent, routing.slot, params.center)?;

    let i = agent.index();
    pop.wander_x[i] = params.wander_x;
    pop.wander_y[i] = params.wander_y;
    pop.destination_slot[i] = routing.slot;

    Ok(())
}
