//! Core population storage: `Population` (SoA data).
//!
//! # Data layout
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let state = pop.state[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! The kernel never creates or removes agents — the outer system builds the
//! population once (see [`PopulationBuilder`][crate::PopulationBuilder]) and
//! the kernel mutates state, infection bookkeeping, treatment occupancy, and
//! routing fields in place each frame.
//!
//! State-machine writes go through the helper methods below rather than raw
//! field assignment so the forward-only transition invariant is enforced in
//! one place (`debug_assert` in hot paths, matching how the store is used:
//! the kernel only ever requests legal transitions).

use epi_core::{AgentId, Frame, HealthState, Point};

/// Structure-of-Arrays storage for all agent epidemic state.
pub struct Population {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Position ──────────────────────────────────────────────────────────
    /// Planar x coordinate.  Written by the outer motion system between
    /// frames; read-only inside the kernel.
    pub x: Vec<f32>,
    /// Planar y coordinate.
    pub y: Vec<f32>,

    // ── Epidemic state ────────────────────────────────────────────────────
    /// Current health state.
    pub state: Vec<HealthState>,

    /// Agent age, input to the mortality-risk model.
    pub age: Vec<u32>,

    /// Frame at which the agent became infected.  `Frame::UNSET` while the
    /// agent has never been infected.
    pub infection_frame: Vec<Frame>,

    /// Per-agent draw in `[0, 1)` fixed at infection time; illness progress
    /// is compared against it to decide the resolution frame.
    pub recovery_threshold: Vec<f32>,

    /// `true` while the agent occupies one healthcare treatment slot.
    /// Only ever `true` while `state == Infected`.
    pub in_treatment: Vec<bool>,

    // ── Routing state ─────────────────────────────────────────────────────
    /// Active destination slot: 0 = none, otherwise the 1-based index into
    /// the paired [`Destinations`][crate::Destinations] container.
    pub destination_slot: Vec<u16>,

    /// Movement envelope half-extent along x while routed to a destination.
    pub wander_x: Vec<f32>,
    /// Movement envelope half-extent along y while routed to a destination.
    pub wander_y: Vec<f32>,
}

impl Population {
    /// Allocate a population of `count` agents, all healthy at the origin
    /// with age 0.  Use [`PopulationBuilder`][crate::PopulationBuilder] to
    /// fill in real initial values.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            x: vec![0.0; count],
            y: vec![0.0; count],
            state: vec![HealthState::Healthy; count],
            age: vec![0; count],
            infection_frame: vec![Frame::UNSET; count],
            recovery_threshold: vec![0.0; count],
            in_treatment: vec![false; count],
            destination_slot: vec![0; count],
            wander_x: vec![0.0; count],
            wander_y: vec![0.0; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Position of one agent.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Point {
        Point::new(self.x[agent.index()], self.y[agent.index()])
    }

    /// `true` if the agent is currently routed to a destination.
    #[inline]
    pub fn has_active_destination(&self, agent: AgentId) -> bool {
        self.destination_slot[agent.index()] != 0
    }

    // ── State queries ─────────────────────────────────────────────────────

    /// Ids of all currently infected agents, ascending.
    pub fn infected_ids(&self) -> Vec<AgentId> {
        self.ids_in_state(HealthState::Infected)
    }

    /// Ids of all currently susceptible (healthy) agents, ascending.
    pub fn susceptible_ids(&self) -> Vec<AgentId> {
        self.ids_in_state(HealthState::Healthy)
    }

    fn ids_in_state(&self, wanted: HealthState) -> Vec<AgentId> {
        self.state
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == wanted)
            .map(|(i, _)| AgentId(i as u32))
            .collect()
    }

    /// Number of agents currently occupying a treatment slot.
    pub fn treated_count(&self) -> usize {
        self.in_treatment.iter().filter(|&&t| t).count()
    }

    /// Per-state population tally.
    pub fn counts(&self) -> StateCounts {
        let mut c = StateCounts::default();
        for &s in &self.state {
            match s {
                HealthState::Healthy => c.healthy += 1,
                HealthState::Infected => c.infected += 1,
                HealthState::Recovered => c.recovered += 1,
                HealthState::Dead => c.dead += 1,
            }
        }
        c
    }

    // ── State-machine writes ──────────────────────────────────────────────

    /// Transition a susceptible agent to `Infected` at `frame`.
    #[inline]
    pub fn mark_infected(&mut self, agent: AgentId, frame: Frame) {
        let i = agent.index();
        debug_assert!(self.state[i].can_become(HealthState::Infected), "{agent} not susceptible");
        self.state[i] = HealthState::Infected;
        self.infection_frame[i] = frame;
    }

    /// Put an infected agent into a treatment slot.  The caller (the
    /// capacity gate) is responsible for checking occupancy first.
    #[inline]
    pub fn admit_to_treatment(&mut self, agent: AgentId) {
        let i = agent.index();
        debug_assert_eq!(self.state[i], HealthState::Infected);
        self.in_treatment[i] = true;
    }

    /// Resolve an infected agent to a terminal state, releasing its
    /// treatment slot.
    #[inline]
    pub fn resolve(&mut self, agent: AgentId, outcome: HealthState) {
        let i = agent.index();
        debug_assert!(outcome.is_terminal());
        debug_assert!(self.state[i].can_become(outcome), "{agent} cannot resolve to {outcome}");
        self.state[i] = outcome;
        self.in_treatment[i] = false;
    }

    /// Revert an infected agent to `Healthy`.
    ///
    /// This is the one sanctioned exception to the forward-only state
    /// machine: the healthcare-worker infection correction cures a fraction
    /// of infected workers.  Releases the treatment slot and deactivates any
    /// destination.
    #[inline]
    pub fn revert_to_healthy(&mut self, agent: AgentId) {
        let i = agent.index();
        debug_assert_eq!(self.state[i], HealthState::Infected);
        self.state[i] = HealthState::Healthy;
        self.infection_frame[i] = Frame::UNSET;
        self.in_treatment[i] = false;
        self.destination_slot[i] = 0;
    }
}

// ── StateCounts ───────────────────────────────────────────────────────────────

/// Population tally per health state, as returned by [`Population::counts`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StateCounts {
    pub healthy:   usize,
    pub infected:  usize,
    pub recovered: usize,
    pub dead:      usize,
}

impl std::fmt::Display for StateCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "healthy {} / infected {} / recovered {} / dead {}",
            self.healthy, self.infected, self.recovered, self.dead
        )
    }
}
