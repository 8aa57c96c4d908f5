//! Healthcare treatment-slot admission gate.

use epi_agent::Population;
use epi_core::AgentId;

/// Admission gate over the finite healthcare capacity.
///
/// Seeded from the population's treated count at the start of an infection
/// pass, then kept current as a running counter so each admission check is
/// O(1) instead of a rescan.
///
/// Admissions within one pass are sequential, not atomic: when the gate is
/// near saturation, processing order determines who gets the last slot.
/// Immediately after a pass `occupied ≤ capacity` always holds.
pub struct CapacityGate {
    capacity: usize,
    occupied: usize,
}

impl CapacityGate {
    /// Gate with `occupied` seeded from the current treated count.
    pub fn at_pass_start(pop: &Population, capacity: usize) -> Self {
        Self {
            capacity,
            occupied: pop.treated_count(),
        }
    }

    /// Admit `agent` to treatment if a slot is free.
    ///
    /// Returns `true` and marks the agent as in treatment when
    /// `occupied < capacity` at the moment of the check; returns `false`
    /// and leaves the agent untouched otherwise.
    pub fn try_admit(&mut self, pop: &mut Population, agent: AgentId) -> bool {
        if self.occupied < self.capacity {
            pop.admit_to_treatment(agent);
            self.occupied += 1;
            true
        } else {
            false
        }
    }

    /// Slots currently occupied, as seen by this gate.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.occupied
    }
}
