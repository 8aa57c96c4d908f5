//! Illness resolution: recover or die.
//!
//! # Write-back contract
//!
//! The infected ids are snapshotted at call entry; every outcome is computed
//! against that frozen list and then scattered back into the population *by
//! id*.  The population is never re-filtered by state mid-call — a second
//! filter pass over mutated state would silently drop agents whose state
//! changed while the same snapshot was being processed.

use epi_agent::Population;
use epi_core::{AgentId, Frame, HealthState, MortalityConfig, SimRng};

use crate::mortality::mortality_risk;
use crate::observer::FrameObserver;

/// Outcome of one [`resolve_frame`] call.
#[derive(Default, Debug)]
pub struct FrameResolution {
    /// Agents that recovered this frame, in id order of processing.
    pub recovered: Vec<AgentId>,
    /// Agents that died this frame.
    pub died: Vec<AgentId>,
}

impl FrameResolution {
    /// Total number of agents that resolved this frame.
    pub fn resolved(&self) -> usize {
        self.recovered.len() + self.died.len()
    }
}

/// Run one frame of illness resolution.
///
/// For every agent infected at call entry, illness progress is
///
/// ```text
/// progress = (frame − infection_frame − recovery.min) / recovery.span()
/// ```
///
/// floored at zero and deliberately not clamped above one.  The agent
/// resolves this frame iff `progress ≥ recovery_threshold`.  Resolution
/// draws one Bernoulli trial against the agent's mortality probability
/// (age curve or flat base rate, scaled by the treatment factors): success
/// is death, failure is recovery.  Either way the treatment slot is
/// released.
///
/// The caller must have validated `cfg` (a zero-width recovery window would
/// divide by zero here).
pub fn resolve_frame<O: FrameObserver>(
    pop:      &mut Population,
    frame:    Frame,
    cfg:      &MortalityConfig,
    rng:      &mut SimRng,
    observer: &mut O,
) -> FrameResolution {
    // Frozen snapshot of everyone infected at call entry.
    let snapshot = pop.infected_ids();
    let span = cfg.recovery.span() as f64;

    // Outcomes are decided against the snapshot only; no writes yet.
    let mut outcomes: Vec<(AgentId, HealthState)> = Vec::new();

    for &agent in &snapshot {
        let i = agent.index();

        let sick_for = frame.since(pop.infection_frame[i]) as f64;
        let progress = ((sick_for - cfg.recovery.min as f64) / span).max(0.0);
        if progress < pop.recovery_threshold[i] as f64 {
            continue;
        }

        let mut chance = if cfg.age_dependent_risk {
            mortality_risk(pop.age[i], cfg)
        } else {
            cfg.mortality_chance
        };
        if cfg.treatment_dependent_risk {
            chance *= if pop.in_treatment[i] {
                cfg.treatment_factor
            } else {
                cfg.no_treatment_factor
            };
        }

        let outcome = if rng.gen_bool(chance) {
            HealthState::Dead
        } else {
            HealthState::Recovered
        };
        outcomes.push((agent, outcome));
    }

    // Scatter back by id.
    let mut result = FrameResolution::default();
    for (agent, outcome) in outcomes {
        pop.resolve(agent, outcome);
        match outcome {
            HealthState::Dead => result.died.push(agent),
            _ => result.recovered.push(agent),
        }
    }

    if !result.died.is_empty() {
        observer.on_deaths(frame, &result.died);
    }
    if !result.recovered.is_empty() {
        observer.on_recoveries(frame, &result.recovered);
    }
    result
}
