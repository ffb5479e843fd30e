//! Pet events.
//!
//! Every user-visible thing that happens during a pipeline pass is a
//! `PetEvent`. Events are recorded in emission order; each carries the
//! message a view should show for it.

use crate::action::Action;
use crate::danger::DangerEvent;
use serde::{Deserialize, Serialize};

/// Something that happened during a pipeline pass.
///
/// # Examples
///
/// ```rust
/// use zzpet::{Action, PetEvent};
///
/// assert_eq!(PetEvent::Action(Action::Play).message(), "That was fun!");
/// assert_eq!(PetEvent::LevelUp { level: 3 }.message(), "LEVEL UP! New level: 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetEvent {
    /// An action's deltas were applied.
    Action(Action),
    /// A danger condition fired.
    Danger(DangerEvent),
    /// Experience reached the threshold. Carries the new level.
    LevelUp { level: i64 },
}

impl PetEvent {
    /// The message to display for this event.
    pub fn message(&self) -> String {
        match self {
            PetEvent::Action(action) => action.message().to_string(),
            PetEvent::Danger(danger) => danger.message().to_string(),
            PetEvent::LevelUp { level } => format!("LEVEL UP! New level: {}", level),
        }
    }

    pub fn is_danger(&self) -> bool {
        matches!(self, PetEvent::Danger(_))
    }
}

impl From<DangerEvent> for PetEvent {
    fn from(danger: DangerEvent) -> Self {
        PetEvent::Danger(danger)
    }
}
