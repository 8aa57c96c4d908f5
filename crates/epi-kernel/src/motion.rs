//! The motion collaborator seam.
//!
//! Agent kinematics belong to the outer system; the kernel only needs one
//! thing from it — given a rectangular area, a destination center and a
//! wander envelope within that area.  [`MotionEngine`] is that seam, a
//! compile-time strategy parameter on the routing path.

use epi_core::{Bounds, Point, SimRng};

/// A destination produced by the motion collaborator: where the routed agent
/// heads, and how far it may roam around that center once there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionParameters {
    pub center:   Point,
    pub wander_x: f32,
    pub wander_y: f32,
}

/// Source of destination centers and wander envelopes.
///
/// Implementations may be stochastic — they receive the simulation RNG so
/// seeded runs stay reproducible.
pub trait MotionEngine {
    /// Produce a destination center and wander extents within `bounds`.
    fn motion_parameters(&self, bounds: Bounds, rng: &mut SimRng) -> MotionParameters;
}

/// Deterministic default engine: the center of the bounds, with wander
/// extents covering the whole rectangle.
pub struct UniformMotion;

impl MotionEngine for UniformMotion {
    fn motion_parameters(&self, bounds: Bounds, _rng: &mut SimRng) -> MotionParameters {
        let (wander_x, wander_y) = bounds.half_extents();
        MotionParameters {
            center: bounds.center(),
            wander_x,
            wander_y,
        }
    }
}
