//! Actions module.
//!
//! Each [`Action`] has a fixed [`ActionEffect`]: additive stat deltas,
//! an experience reward and the message shown when it runs. The deltas
//! are applied before clamping; everything after that is the shared
//! pipeline in [`ActionEngine`](crate::ActionEngine).

use crate::error::PetError;
use crate::stat::PetStat;
use crate::state::PetState;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user-triggered action.
///
/// # Examples
///
/// ```rust
/// use zzpet::Action;
///
/// let action: Action = "nap".parse().unwrap();
/// assert_eq!(action, Action::Nap);
/// assert_eq!(action.effect().energy, 20);
/// assert_eq!(action.message(), "Zzz... comfy nap!");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Treat,
    Play,
    Exercise,
    Nap,
}

/// The fixed effect of an action.
///
/// Deltas are added to the current stats before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionEffect {
    pub happiness: i64,
    pub weight: i64,
    pub hunger: i64,
    pub energy: i64,
    /// Experience granted once the danger checks have run.
    pub exp: i64,
    /// Message shown when the action runs.
    pub message: &'static str,
}

const TREAT: ActionEffect = ActionEffect {
    happiness: 1,
    weight: 1,
    hunger: 10,
    energy: -2,
    exp: 5,
    message: "Yum! That was tasty!",
};

const PLAY: ActionEffect = ActionEffect {
    happiness: 3,
    weight: -1,
    hunger: -5,
    energy: -10,
    exp: 8,
    message: "That was fun!",
};

const EXERCISE: ActionEffect = ActionEffect {
    happiness: -1,
    weight: -2,
    hunger: -10,
    energy: -15,
    exp: 10,
    message: "I'm getting stronger!",
};

const NAP: ActionEffect = ActionEffect {
    happiness: 0,
    weight: 0,
    hunger: -3,
    energy: 20,
    exp: 2,
    message: "Zzz... comfy nap!",
};

impl Action {
    /// Every action, in the order the UI presents them.
    pub const ALL: [Action; 4] = [Action::Treat, Action::Play, Action::Exercise, Action::Nap];

    /// The trigger name of this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Treat => "treat",
            Action::Play => "play",
            Action::Exercise => "exercise",
            Action::Nap => "nap",
        }
    }

    /// The fixed effect of this action.
    pub fn effect(self) -> &'static ActionEffect {
        match self {
            Action::Treat => &TREAT,
            Action::Play => &PLAY,
            Action::Exercise => &EXERCISE,
            Action::Nap => &NAP,
        }
    }

    pub fn message(self) -> &'static str {
        self.effect().message
    }
}

impl ActionEffect {
    /// The stat deltas of this effect, keyed by stat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzpet::{Action, PetStat};
    ///
    /// let deltas = Action::Play.effect().deltas();
    /// assert!(deltas.contains(&(PetStat::Happiness, 3)));
    /// assert!(deltas.contains(&(PetStat::Energy, -10)));
    /// ```
    pub fn deltas(&self) -> [(PetStat, i64); 4] {
        [
            (PetStat::Happiness, self.happiness),
            (PetStat::Weight, self.weight),
            (PetStat::Hunger, self.hunger),
            (PetStat::Energy, self.energy),
        ]
    }

    pub(crate) fn apply_deltas(&self, state: &mut PetState) {
        for (stat, delta) in self.deltas() {
            state.add(stat, delta);
        }
    }
}

impl FromStr for Action {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Action::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| PetError::UnknownAction(s.to_string()))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
