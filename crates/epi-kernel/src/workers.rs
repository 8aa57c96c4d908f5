//! Healthcare-worker infection correction.
//!
//! Independent utility over a caller-supplied worker sub-view of the
//! population.  A negative risk factor models extra protections: each
//! infected worker is independently cured with probability `|factor|`.
//! A positive factor would model elevated exposure by making extra
//! workers sick, but no rule pins down *which* workers or at what rate,
//! so that case returns an explicit unsupported error.

use epi_agent::Population;
use epi_core::{AgentId, EpiError, EpiResult, SimRng};

/// Adjust infection state of the `workers` sub-population by `risk_factor`.
///
/// - `risk_factor < 0`: cure each currently infected worker with independent
///   probability `|risk_factor|` (magnitudes above 1 saturate to a certain
///   cure).  Cured workers revert to healthy, releasing their treatment slot
///   and deactivating any destination.
/// - `risk_factor == 0`: no-op.
/// - `risk_factor > 0`: [`EpiError::Unsupported`].
///
/// Returns the ids of cured workers.
pub fn healthcare_infection_correction(
    pop:         &mut Population,
    workers:     &[AgentId],
    risk_factor: f64,
    rng:         &mut SimRng,
) -> EpiResult<Vec<AgentId>> {
    if risk_factor > 0.0 {
        return Err(EpiError::Unsupported(
            "healthcare_infection_correction with a positive risk factor",
        ));
    }

    let mut cured = Vec::new();
    if risk_factor < 0.0 {
        let cure_chance = risk_factor.abs();
        for &worker in workers {
            if pop.state[worker.index()].is_infectious() && rng.gen_bool(cure_chance) {
                pop.revert_to_healthy(worker);
                cured.push(worker);
            }
        }
    }
    Ok(cured)
}
