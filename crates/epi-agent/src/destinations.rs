//! Per-agent destination slots, parallel to the population.
//!
//! # Data layout
//!
//! One row per agent, `slots` center points per row, flattened into two SoA
//! vectors.  An agent's active slot is recorded on the agent itself
//! (`Population::destination_slot`, 1-based, 0 = none); this container only
//! stores the slot centers, which the router overwrites when it sends an
//! agent somewhere.

use epi_core::{AgentId, EpiError, EpiResult, Point};

/// Destination centers for every agent, `slots` per agent.
pub struct Destinations {
    /// Number of agents (rows).  Must equal `Population::count`.
    pub count: usize,

    /// Destination slots per agent.  Slot numbers are 1-based; slot `s`
    /// of agent `a` lives at flat index `a * slots + (s - 1)`.
    pub slots: usize,

    center_x: Vec<f32>,
    center_y: Vec<f32>,
}

impl Destinations {
    /// Allocate `count × slots` destination centers, all at the origin.
    pub fn new(count: usize, slots: usize) -> Self {
        Self {
            count,
            slots,
            center_x: vec![0.0; count * slots],
            center_y: vec![0.0; count * slots],
        }
    }

    #[inline]
    fn flat_index(&self, agent: AgentId, slot: u16) -> EpiResult<usize> {
        if slot == 0 || slot as usize > self.slots {
            return Err(EpiError::DestinationSlot { slot, slots: self.slots });
        }
        Ok(agent.index() * self.slots + (slot as usize - 1))
    }

    /// Center of `slot` (1-based) for `agent`.
    pub fn center(&self, agent: AgentId, slot: u16) -> EpiResult<Point> {
        let i = self.flat_index(agent, slot)?;
        Ok(Point::new(self.center_x[i], self.center_y[i]))
    }

    /// Overwrite the center of `slot` (1-based) for `agent`.
    pub fn set_center(&mut self, agent: AgentId, slot: u16, center: Point) -> EpiResult<()> {
        let i = self.flat_index(agent, slot)?;
        self.center_x[i] = center.x;
        self.center_y[i] = center.y;
        Ok(())
    }

    /// Check this container is paired with a population of `expected` agents.
    pub fn check_count(&self, expected: usize) -> EpiResult<()> {
        if self.count == expected {
            Ok(())
        } else {
            Err(EpiError::CountMismatch {
                expected,
                got:  self.count,
                what: "destinations",
            })
        }
    }
}
