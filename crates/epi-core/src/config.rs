//! Kernel configuration.
//!
//! Three parameter groups, one per concern: spread ([`InfectionConfig`]),
//! quarantine routing ([`RoutingConfig`]), and illness resolution
//! ([`MortalityConfig`]).  The outer loop loads these from whatever file
//! format it likes and calls `validate()` once before the first frame;
//! after that the kernel assumes the parameters are well-formed and never
//! re-checks them on the hot path.

use crate::error::{EpiError, EpiResult};
use crate::geo::Bounds;

fn check_probability(what: &'static str, value: f64) -> EpiResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EpiError::ProbabilityOutOfRange { what, value })
    }
}

// ── InfectionConfig ───────────────────────────────────────────────────────────

/// Parameters of the per-frame spatial infection search.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfectionConfig {
    /// Half-width of the square transmission neighborhood around an
    /// infectious agent.
    pub infection_range: f32,

    /// Per-contact transmission probability, 0–1.
    pub infection_chance: f64,

    /// Number of treatment slots in the healthcare system.
    pub healthcare_capacity: usize,

    /// Whether agents en route to a quarantine destination still transmit.
    pub traveling_infects: bool,
}

impl InfectionConfig {
    pub fn validate(&self) -> EpiResult<()> {
        check_probability("infection_chance", self.infection_chance)?;
        if !(self.infection_range > 0.0) {
            return Err(EpiError::InvalidBounds {
                what:   "infection_range",
                detail: format!("must be positive, got {}", self.infection_range),
            });
        }
        Ok(())
    }
}

impl Default for InfectionConfig {
    fn default() -> Self {
        Self {
            infection_range:     0.01,
            infection_chance:    0.03,
            healthcare_capacity: 300,
            traveling_infects:   false,
        }
    }
}

// ── RoutingConfig ─────────────────────────────────────────────────────────────

/// Parameters of quarantine routing.  Passing `None` where a
/// `Option<&RoutingConfig>` is expected disables routing entirely.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingConfig {
    /// Rectangle the routed agent will roam within.
    pub bounds: Bounds,

    /// 1-based destination slot to activate.
    pub slot: u16,

    /// Probability a newly admitted agent actually goes — models
    /// non-compliance with isolation.
    pub odds: f64,
}

impl RoutingConfig {
    pub fn validate(&self) -> EpiResult<()> {
        check_probability("location_odds", self.odds)?;
        if self.slot == 0 {
            return Err(EpiError::DestinationSlot { slot: 0, slots: 0 });
        }
        if !self.bounds.is_valid() {
            return Err(EpiError::InvalidBounds {
                what:   "location_bounds",
                detail: format!("{:?} has no area", self.bounds),
            });
        }
        Ok(())
    }
}

// ── MortalityConfig ───────────────────────────────────────────────────────────

/// Lower/upper bounds of illness duration, in frames.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoveryWindow {
    pub min: u64,
    pub max: u64,
}

impl RecoveryWindow {
    #[inline]
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Width of the window.  Division by this is safe once `validate()` has
    /// rejected the empty window.
    #[inline]
    pub fn span(self) -> u64 {
        self.max - self.min
    }
}

/// Shape of the mortality-risk curve between `risk_age` and `critical_age`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskCurve {
    /// Risk climbs by a fixed step per year of age.
    Linear,
    /// Risk stays near the base rate then rises steeply toward
    /// `critical_age` (monomial fit, see `epi-kernel::mortality`).
    Quadratic,
}

/// Parameters of illness resolution (recovery vs. death).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MortalityConfig {
    /// Illness duration window; resolution timing scales across it.
    pub recovery: RecoveryWindow,

    /// Base mortality probability, 0–1.  Must be strictly positive when
    /// `risk_curve` is `Quadratic` (the curve fit takes a logarithm of it).
    pub mortality_chance: f64,

    /// Age from which mortality risk starts increasing.
    pub risk_age: u32,

    /// Age at which mortality risk reaches `critical_mortality_chance`.
    pub critical_age: u32,

    /// Mortality probability at and beyond `critical_age`.
    pub critical_mortality_chance: f64,

    /// Interior interpolation shape.
    pub risk_curve: RiskCurve,

    /// Risk multiplier applied when the resolving agent is not in treatment.
    pub no_treatment_factor: f64,

    /// Risk multiplier applied when the resolving agent is in treatment.
    pub treatment_factor: f64,

    /// Use the age-dependent risk model instead of the flat base chance.
    pub age_dependent_risk: bool,

    /// Apply the treatment factors.
    pub treatment_dependent_risk: bool,
}

impl MortalityConfig {
    pub fn validate(&self) -> EpiResult<()> {
        if self.recovery.min >= self.recovery.max {
            return Err(EpiError::EmptyRecoveryWindow {
                min: self.recovery.min,
                max: self.recovery.max,
            });
        }
        check_probability("mortality_chance", self.mortality_chance)?;
        check_probability("critical_mortality_chance", self.critical_mortality_chance)?;
        if self.risk_curve == RiskCurve::Quadratic && self.mortality_chance <= 0.0 {
            return Err(EpiError::NonPositiveBaseMortality(self.mortality_chance));
        }
        if self.risk_age >= self.critical_age {
            return Err(EpiError::InvertedRiskAges {
                risk_age:     self.risk_age,
                critical_age: self.critical_age,
            });
        }
        Ok(())
    }
}

impl Default for MortalityConfig {
    fn default() -> Self {
        Self {
            recovery:                  RecoveryWindow::new(200, 500),
            mortality_chance:          0.02,
            risk_age:                  55,
            critical_age:              75,
            critical_mortality_chance: 0.1,
            risk_curve:                RiskCurve::Quadratic,
            no_treatment_factor:       3.0,
            treatment_factor:          0.5,
            age_dependent_risk:        true,
            treatment_dependent_risk:  true,
        }
    }
}
