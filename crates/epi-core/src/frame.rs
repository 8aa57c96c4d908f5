//! Simulation frame counter.
//!
//! # Design
//!
//! Time is a monotonically increasing `Frame` counter owned by the outer
//! simulation loop; the kernel only ever reads the current frame and the
//! frame at which an agent became infected.  Using an integer frame as the
//! canonical time unit keeps illness-duration arithmetic exact.

use std::fmt;

/// An absolute simulation frame counter.
///
/// Stored as `u64` to avoid overflow for any conceivable run length.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Sentinel for "no frame recorded" — an agent's `infection_frame` holds
    /// this while the agent has never been infected.
    pub const UNSET: Frame = Frame(u64::MAX);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }

    /// Frames elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl std::ops::Sub for Frame {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Frame) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
