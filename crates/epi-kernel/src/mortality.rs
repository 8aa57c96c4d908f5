//! Age-dependent mortality-risk curve.
//!
//! # Shape
//!
//! ```text
//! risk
//!   │                                    ┌──────  critical_mortality_chance
//!   │                             ╭──────╯
//!   │                      ╭──────╯  ← linear or monomial interior
//!   │──────────────────────╯
//!   │  mortality_chance
//!   └──────────────────────┬──────────────┬────── age
//!                       risk_age    critical_age
//! ```
//!
//! At or below `risk_age` the base rate applies; at or beyond `critical_age`
//! the critical rate applies.  In between, the configured [`RiskCurve`]
//! interpolates.  The quadratic variant stays near the base rate longer and
//! rises steeply toward `critical_age`; the linear variant climbs by a fixed
//! step per year.

use epi_core::{MortalityConfig, RiskCurve};

/// Exponent of the monomial fit used by [`RiskCurve::Quadratic`].
const CURVE_POWER: f64 = 15.0;

/// Mortality probability for an agent of `age`.
///
/// Pure function of `age` and the mortality parameters; callers that have
/// disabled age-dependent risk should use `cfg.mortality_chance` directly.
///
/// The quadratic branch assumes `cfg.mortality_chance > 0` — enforced by
/// [`MortalityConfig::validate`], which must run before the first frame.
pub fn mortality_risk(age: u32, cfg: &MortalityConfig) -> f64 {
    if age <= cfg.risk_age {
        return cfg.mortality_chance;
    }
    if age >= cfg.critical_age {
        return cfg.critical_mortality_chance;
    }

    match cfg.risk_curve {
        RiskCurve::Linear => {
            // fixed step per year of age between the two anchor rates
            let span = (cfg.critical_age - cfg.risk_age + 1) as f64;
            let step = cfg.critical_mortality_chance / span;
            cfg.critical_mortality_chance - (cfg.critical_age - age) as f64 * step
        }
        RiskCurve::Quadratic => {
            // Monomial b·(x + a)^15 through (risk_age − 1, mortality_chance)
            // and (critical_age, critical_mortality_chance), evaluated at
            // x = age − 1.  The constants solve the two boundary conditions
            // in closed form.
            let m = cfg.mortality_chance;
            let critical = cfg.critical_mortality_chance;
            let low = cfg.risk_age as f64 - 1.0;
            let high = cfg.critical_age as f64;

            let ratio = (m / critical).ln() / CURVE_POWER;
            let scale = ratio.exp(); // (m / critical)^(1/15)
            let a = (low - high * scale) / (scale - 1.0);
            let b = m / (low + a).powf(CURVE_POWER);

            b * (age as f64 - 1.0 + a).powf(CURVE_POWER)
        }
    }
}
