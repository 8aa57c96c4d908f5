//! The four-state health model.

use std::fmt;

/// Epidemic state of one agent.
///
/// Transitions only run forward: `Healthy → Infected → {Recovered, Dead}`.
/// `Recovered` and `Dead` are terminal; `Infected` never reverts to
/// `Healthy` within the kernel proper (the healthcare-worker correction is
/// the one sanctioned exception and lives behind its own entry point).
///
/// Discriminants are pinned to the wire codes the outer system uses
/// (0 = healthy … 3 = dead).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HealthState {
    #[default]
    Healthy = 0,
    Infected = 1,
    Recovered = 2,
    Dead = 3,
}

impl HealthState {
    /// `true` for states no further transition can leave.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, HealthState::Recovered | HealthState::Dead)
    }

    /// `true` if this agent can still be infected.
    #[inline]
    pub fn is_susceptible(self) -> bool {
        self == HealthState::Healthy
    }

    /// `true` if this agent can transmit.
    #[inline]
    pub fn is_infectious(self) -> bool {
        self == HealthState::Infected
    }

    /// Whether the forward-only state machine permits `self → next`.
    ///
    /// Self-transitions are allowed (a no-op write); anything that would move
    /// backwards or skip infection is not.
    pub fn can_become(self, next: HealthState) -> bool {
        use HealthState::*;
        match (self, next) {
            (a, b) if a == b => true,
            (Healthy, Infected) => true,
            (Infected, Recovered) | (Infected, Dead) => true,
            _ => false,
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthState::Healthy => "healthy",
            HealthState::Infected => "infected",
            HealthState::Recovered => "recovered",
            HealthState::Dead => "dead",
        };
        f.write_str(s)
    }
}
