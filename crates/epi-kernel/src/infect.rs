//! Spatial infection search.
//!
//! # Dual strategy
//!
//! One frame's search iterates whichever side of the population is smaller:
//!
//! - **Sparse-infected** (infected count < half the population): walk the
//!   infectious snapshot; for every susceptible agent strictly inside an
//!   infector's box, draw one Bernoulli(`infection_chance`) trial.
//! - **Dense-infected** (otherwise): walk the susceptibles; count infectious
//!   snapshot members `k` inside the susceptible's box and draw one
//!   Bernoulli(`infection_chance × k`) trial.
//!
//! The dense strategy's single scaled draw stands in for `k` independent
//! per-contact trials.  It saturates to a certain infection once
//! `infection_chance × k ≥ 1` and is *not* statistically identical to the
//! sparse per-pair draws — an intentional performance approximation, kept
//! as such.
//!
//! Both strategies funnel successful draws through one shared tail
//! (`apply_infection`): mark infected, attempt capacity-gate admission, and
//! — only when admitted — route to quarantine with the configured odds.
//!
//! # Snapshot semantics
//!
//! The infectious set is snapshotted at call entry; agents infected during
//! the pass do not transmit until the next frame.  Susceptibility is checked
//! live, so nobody is infected twice within a pass.

use epi_agent::{Destinations, Population};
use epi_core::{AgentId, EpiResult, Frame, InfectionConfig, RoutingConfig, SimRng};

use crate::capacity::CapacityGate;
use crate::motion::MotionEngine;
use crate::observer::FrameObserver;
use crate::router::send_to_quarantine;
use crate::spatial::FrameIndex;

/// Routing inputs for one infection pass: the parameters plus the
/// destination container they index into.  Pass `None` to `infect` to
/// disable quarantine routing entirely.
pub struct Routing<'a> {
    pub cfg:   &'a RoutingConfig,
    pub dests: &'a mut Destinations,
}

/// Run one frame of spatial infection propagation.
///
/// Mutates the population (state, `infection_frame`, `in_treatment`) and,
/// when routing fires, the agent's destination fields and the paired
/// destination center.  Returns the newly infected ids in processing order
/// and reports them through `observer`.
///
/// # Errors
///
/// Fails fast if the destination container is not paired with this
/// population or the configured slot does not exist in it.
pub fn infect<M: MotionEngine, O: FrameObserver>(
    pop:      &mut Population,
    frame:    Frame,
    cfg:      &InfectionConfig,
    mut routing: Option<Routing<'_>>,
    motion:   &M,
    rng:      &mut SimRng,
    observer: &mut O,
) -> EpiResult<Vec<AgentId>> {
    if let Some(r) = &routing {
        r.dests.check_count(pop.count)?;
    }

    let infectious = pop.infected_ids();
    let mut gate = CapacityGate::at_pass_start(pop, cfg.healthcare_capacity);
    let mut newly_infected = Vec::new();

    if infectious.len() < pop.count / 2 {
        // ── Sparse-infected strategy ──────────────────────────────────────
        //
        // Index the susceptibles once; query a box per infector.
        let index = FrameIndex::build(
            pop.susceptible_ids().into_iter().map(|id| (id, pop.position(id))),
        );

        for &patient in &infectious {
            // a routed infector does not transmit unless traveling_infects
            if !cfg.traveling_infects && pop.has_active_destination(patient) {
                continue;
            }
            let zone = pop.position(patient);
            let candidates: Vec<AgentId> = index.in_box(zone, cfg.infection_range).collect();
            for candidate in candidates {
                // may have been infected earlier in this pass
                if !pop.state[candidate.index()].is_susceptible() {
                    continue;
                }
                if rng.gen_bool(cfg.infection_chance) {
                    apply_infection(
                        pop, candidate, frame, &mut gate, routing.as_mut(), motion, rng,
                    )?;
                    newly_infected.push(candidate);
                }
            }
        }
    } else {
        // ── Dense-infected strategy ───────────────────────────────────────
        //
        // Index the infectious snapshot once (minus routed infectors unless
        // traveling_infects); query a box per susceptible.
        let index = FrameIndex::build(
            infectious
                .iter()
                .copied()
                .filter(|&id| cfg.traveling_infects || !pop.has_active_destination(id))
                .map(|id| (id, pop.position(id))),
        );

        for person in pop.susceptible_ids() {
            let exposures = index.in_box(pop.position(person), cfg.infection_range).count();
            if exposures == 0 {
                continue;
            }
            // single scaled draw approximating `exposures` independent trials
            if rng.gen_bool(cfg.infection_chance * exposures as f64) {
                apply_infection(pop, person, frame, &mut gate, routing.as_mut(), motion, rng)?;
                newly_infected.push(person);
            }
        }
    }

    if !newly_infected.is_empty() {
        observer.on_infections(frame, &newly_infected);
    }
    Ok(newly_infected)
}

/// Shared infection-event tail for both strategies: mark the agent infected,
/// attempt admission, and — only for admitted agents — route to quarantine
/// with probability `routing.cfg.odds`.
fn apply_infection<M: MotionEngine>(
    pop:     &mut Population,
    agent:   AgentId,
    frame:   Frame,
    gate:    &mut CapacityGate,
    routing: Option<&mut Routing<'_>>,
    motion:  &M,
    rng:     &mut SimRng,
) -> EpiResult<()> {
    pop.mark_infected(agent, frame);

    if gate.try_admit(pop, agent) {
        if let Some(r) = routing {
            if rng.gen_bool(r.cfg.odds) {
                send_to_quarantine(pop, r.dests, agent, r.cfg, motion, rng)?;
            }
        }
    }
    Ok(())
}
