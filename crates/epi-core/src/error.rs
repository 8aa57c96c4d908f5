//! Kernel error type.
//!
//! Randomized per-frame outcomes (infections, deaths, cures) are never
//! errors; everything here is either a configuration problem caught before
//! the first frame or a structural mismatch between containers.

use thiserror::Error;

/// The top-level error type for all `epi-*` crates.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("recovery window is empty: min {min} must be below max {max}")]
    EmptyRecoveryWindow { min: u64, max: u64 },

    #[error("quadratic risk curve requires mortality_chance > 0, got {0}")]
    NonPositiveBaseMortality(f64),

    #[error("risk_age {risk_age} must be below critical_age {critical_age}")]
    InvertedRiskAges { risk_age: u32, critical_age: u32 },

    #[error("{what} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { what: &'static str, value: f64 },

    #[error("{what} is degenerate: {detail}")]
    InvalidBounds { what: &'static str, detail: String },

    #[error("destination slot {slot} out of range (container has {slots} slots)")]
    DestinationSlot { slot: u16, slots: usize },

    #[error("{what} length {got} does not match population size {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("not yet supported: {0}")]
    Unsupported(&'static str),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
