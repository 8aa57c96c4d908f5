//! `epi-kernel` — the per-frame epidemic-state kernel.
//!
//! Once per simulation frame the outer loop calls, in order:
//!
//! 1. [`infect`] — spatial infection search: susceptible agents near
//!    infectious agents may become infected, be admitted to treatment if
//!    capacity allows, and be routed to quarantine.
//! 2. [`resolve_frame`] — illness resolution: each infected agent whose
//!    illness progress has crossed its personal threshold recovers or dies.
//!
//! Both calls mutate the population in place and draw all randomness from an
//! injected [`SimRng`][epi_core::SimRng], so seeded runs are reproducible.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`infect`]    | dual-strategy spatial infection search                 |
//! | [`resolve`]   | snapshot-then-scatter illness resolution               |
//! | [`mortality`] | age → mortality-probability curve                      |
//! | [`capacity`]  | healthcare treatment-slot admission gate               |
//! | [`router`]    | quarantine routing adapter                             |
//! | [`motion`]    | `MotionEngine` collaborator trait                      |
//! | [`spatial`]   | per-frame R-tree neighbor index                        |
//! | [`observer`]  | per-frame diagnostics hooks                            |
//! | [`workers`]   | healthcare-worker infection correction                 |

pub mod capacity;
pub mod infect;
pub mod mortality;
pub mod motion;
pub mod observer;
pub mod resolve;
pub mod router;
pub mod spatial;
pub mod workers;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capacity::CapacityGate;
pub use infect::{Routing, infect};
pub use motion::{MotionEngine, MotionParameters, UniformMotion};
pub use mortality::mortality_risk;
pub use observer::{ConsoleReporter, FrameObserver, NoopObserver};
pub use resolve::{FrameResolution, resolve_frame};
pub use router::send_to_quarantine;
pub use spatial::FrameIndex;
pub use workers::healthcare_infection_correction;
