//! Deterministic, explicitly injected random source.
//!
//! # Determinism strategy
//!
//! Every probabilistic operation in the kernel — infection trials, the
//! death/recovery draw, routing odds, worker cures — receives a
//! `&mut SimRng` parameter instead of reaching for a process-wide source.
//! Seeding one `SimRng` at startup makes whole runs reproducible; tests pin
//! seeds to assert exact outcomes.
//!
//! Child generators are derived with a golden-ratio mixing constant so that
//! consecutive offsets land far apart in the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable simulation RNG.
///
/// Wraps a `SmallRng`; the type is `Send` but intentionally not `Sync` —
/// the kernel is single-threaded per frame and the RNG is threaded through
/// calls by `&mut`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// giving sub-systems (e.g. a stochastic motion engine) an independent
    /// but reproducible stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    ///
    /// The clamp matters: the dense infection strategy scales the per-contact
    /// chance by the neighbor count and the mortality factors can push a
    /// probability past 1; both saturate to a certain outcome.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
