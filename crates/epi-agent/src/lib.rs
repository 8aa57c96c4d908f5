//! `epi-agent` — Structure-of-Arrays population storage for the
//! epidemic-state kernel.
//!
//! # Crate layout
//!
//! | Module           | Contents                                           |
//! |------------------|----------------------------------------------------|
//! | [`store`]        | `Population` (SoA arrays), `StateCounts`           |
//! | [`destinations`] | `Destinations` (per-agent quarantine slot centers) |
//! | [`builder`]      | `PopulationBuilder` (fluent construction)          |

pub mod builder;
pub mod destinations;
pub mod store;


pub use builder::PopulationBuilder;
pub use destinations::Destinations;
pub use store::{Population, StateCounts};
