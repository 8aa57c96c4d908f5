//! outbreak — smallest runnable wiring of the epidemic-state kernel.
//!
//! Plays the role of the outer simulation loop for a 2,000-agent population
//! in a unit square: seeds three initial cases, then runs the two kernel
//! calls (infection search, illness resolution) once per frame.  Agent
//! motion is deliberately absent — positions stay fixed, so the epidemic
//! spreads as a growing spatial wave from the seeds.

use anyhow::Result;

use epi_agent::{Destinations, PopulationBuilder};
use epi_core::config::RecoveryWindow;
use epi_core::{
    AgentId, Bounds, Frame, InfectionConfig, MortalityConfig, RiskCurve, RoutingConfig, SimRng,
};
use epi_kernel::{ConsoleReporter, Routing, UniformMotion, infect, resolve_frame};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 2_000;
const SEED:        u64   = 42;
const FRAMES:      u64   = 500;

fn main() -> Result<()> {
    let infection = InfectionConfig {
        infection_range:     0.02,
        infection_chance:    0.25,
        healthcare_capacity: 60,
        traveling_infects:   false,
    };
    let routing = RoutingConfig {
        bounds: Bounds::new(1.1, 0.0, 1.4, 0.3), // quarantine ward off to the side
        slot:   1,
        odds:   0.9,
    };
    let mortality = MortalityConfig {
        recovery:   RecoveryWindow::new(60, 200),
        risk_curve: RiskCurve::Quadratic,
        ..MortalityConfig::default()
    };
    infection.validate()?;
    routing.validate()?;
    mortality.validate()?;

    let mut rng = SimRng::new(SEED);
    let mut pop = PopulationBuilder::new(AGENT_COUNT)
        .scatter_positions(Bounds::new(0.0, 0.0, 1.0, 1.0), &mut rng)
        .uniform_ages(0..=85, &mut rng)
        .draw_recovery_thresholds(&mut rng)
        .seed_infected(&[AgentId(0), AgentId(1), AgentId(2)], Frame::ZERO)
        .build();
    let mut dests = Destinations::new(AGENT_COUNT, 1);

    let mut reporter = ConsoleReporter;
    for f in 1..=FRAMES {
        let frame = Frame(f);
        infect(
            &mut pop,
            frame,
            &infection,
            Some(Routing { cfg: &routing, dests: &mut dests }),
            &UniformMotion,
            &mut rng,
            &mut reporter,
        )?;
        resolve_frame(&mut pop, frame, &mortality, &mut rng, &mut reporter);

        if pop.counts().infected == 0 {
            println!("epidemic died out at frame {f}");
            break;
        }
    }

    println!("final tally: {}", pop.counts());
    Ok(())
}
