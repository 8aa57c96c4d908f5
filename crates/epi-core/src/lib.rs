//! `epi-core` — foundational types for the epidemic-state kernel.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `AgentId`                                              |
//! | [`geo`]    | `Point`, `Bounds`, the strict Chebyshev-box test       |
//! | [`frame`]  | `Frame` counter                                        |
//! | [`rng`]    | `SimRng` (seedable, injected into every random draw)   |
//! | [`state`]  | `HealthState` enum                                     |
//! | [`config`] | `InfectionConfig`, `RoutingConfig`, `MortalityConfig`  |
//! | [`error`]  | `EpiError`, `EpiResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod config;
pub mod error;
pub mod frame;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{InfectionConfig, MortalityConfig, RecoveryWindow, RiskCurve, RoutingConfig};
pub use error::{EpiError, EpiResult};
pub use frame::Frame;
pub use geo::{Bounds, Point};
pub use ids::AgentId;
pub use rng::SimRng;
pub use state::HealthState;
