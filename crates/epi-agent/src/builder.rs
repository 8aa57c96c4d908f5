//! Fluent builder for constructing a [`Population`].
//!
//! # Usage
//!
//! ```ignore
//! use epi_agent::PopulationBuilder;
//! use epi_core::{Bounds, Frame, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let pop = PopulationBuilder::new(2_000)
//!     .scatter_positions(Bounds::new(0.0, 0.0, 1.0, 1.0), &mut rng)
//!     .uniform_ages(0..=85, &mut rng)
//!     .draw_recovery_thresholds(&mut rng)
//!     .seed_infected(&[AgentId(0)], Frame::ZERO)
//!     .build();
//! ```
//!
//! All arrays are pre-allocated at construction time so later writes are
//! indexed assignments, not pushes.  Anything not set by a builder method
//! stays at its sentinel/default value and can be written directly to the
//! `pub` fields of the returned [`Population`].

use std::ops::RangeInclusive;

use epi_core::{AgentId, Bounds, Frame, SimRng};

use crate::Population;

/// Fluent builder for [`Population`].
pub struct PopulationBuilder {
    pop: Population,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents, all healthy with sentinel fields.
    pub fn new(count: usize) -> Self {
        Self { pop: Population::new(count) }
    }

    /// Scatter all agents uniformly within `bounds`.
    pub fn scatter_positions(mut self, bounds: Bounds, rng: &mut SimRng) -> Self {
        for i in 0..self.pop.count {
            self.pop.x[i] = rng.gen_range(bounds.xmin..bounds.xmax);
            self.pop.y[i] = rng.gen_range(bounds.ymin..bounds.ymax);
        }
        self
    }

    /// Draw every agent's age uniformly from `range`.
    pub fn uniform_ages(mut self, range: RangeInclusive<u32>, rng: &mut SimRng) -> Self {
        for i in 0..self.pop.count {
            self.pop.age[i] = rng.gen_range(range.clone());
        }
        self
    }

    /// Draw every agent's recovery threshold uniformly in `[0, 1)`.
    ///
    /// The threshold is fixed here, once, and never changes while the agent
    /// is infected — resolution timing compares illness progress against it.
    pub fn draw_recovery_thresholds(mut self, rng: &mut SimRng) -> Self {
        for i in 0..self.pop.count {
            self.pop.recovery_threshold[i] = rng.gen_range(0.0f32..1.0);
        }
        self
    }

    /// Mark `ids` as infected at `frame` — the initial cases.
    pub fn seed_infected(mut self, ids: &[AgentId], frame: Frame) -> Self {
        for &id in ids {
            self.pop.mark_infected(id, frame);
        }
        self
    }

    /// Finish construction.
    pub fn build(self) -> Population {
        self.pop
    }
}
