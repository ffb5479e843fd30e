//! Danger state evaluation.
//!
//! Runs after clamping on every pipeline pass, whatever triggered it.
//! The energy check always runs before the hunger check, and both may
//! fire in the same pass. When they do, the starvation reset happens
//! last and its message is the one left on screen.

use crate::stat::PetStat;
use crate::state::PetState;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A danger condition that fired during a pipeline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DangerEvent {
    /// Energy hit zero above level 1. Carries the level after the penalty.
    Exhausted { level: i64 },
    /// Energy hit zero at level 1 or below. No penalty.
    TooTired,
    /// Hunger hit zero. Level was reset to 0 from `previous_level`.
    Starved { previous_level: i64 },
}

impl DangerEvent {
    pub fn message(&self) -> &'static str {
        match self {
            DangerEvent::Exhausted { .. } => "Your pet is exhausted! Level decreased.",
            DangerEvent::TooTired => "Your pet is too tired to continue!",
            DangerEvent::Starved { .. } => "Your pet has starved... Level reset to 0.",
        }
    }
}

/// Check zero energy, then zero hunger, applying level penalties.
///
/// Returns the events in the order they fired. Only the engine pipeline
/// calls this, so a pet's level cannot be penalized outside an action.
pub(crate) fn evaluate(state: &mut PetState) -> Vec<DangerEvent> {
    let mut events = Vec::new();

    if state.energy() == 0 {
        let level = state.level();
        if level > 1 {
            state.set(PetStat::Level, level - 1);
            warn!(pet = state.name(), level = level - 1, "Pet exhausted, level decreased");
            events.push(DangerEvent::Exhausted { level: level - 1 });
        } else {
            warn!(pet = state.name(), level, "Pet too tired to continue");
            events.push(DangerEvent::TooTired);
        }
    }

    if state.hunger() == 0 {
        let previous_level = state.level();
        state.set(PetStat::Level, 0);
        warn!(pet = state.name(), previous_level, "Pet starved, level reset");
        events.push(DangerEvent::Starved { previous_level });
    }

    events
}
