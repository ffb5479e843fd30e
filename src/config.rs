//! Starting configuration for a pet.
//!
//! `PetConfig` describes the pet an engine starts with. Every field
//! defaults to the standard starting values, so a host only has to name
//! what it wants to change. The core never reads files or the
//! environment; the host hands over a JSON string.

use crate::error::PetError;
use crate::state::{
    PetState, DEFAULT_ENERGY, DEFAULT_EXP, DEFAULT_HAPPINESS, DEFAULT_HUNGER, DEFAULT_LEVEL,
    DEFAULT_NAME, DEFAULT_WEIGHT,
};
use serde::{Deserialize, Serialize};

/// Typed starting configuration for a pet.
///
/// # Examples
///
/// ```rust
/// use zzpet::PetConfig;
///
/// let config = PetConfig::from_json(r#"{ "name": "Mochi", "energy": 15 }"#).unwrap();
/// let state = config.into_state().unwrap();
///
/// assert_eq!(state.name(), "Mochi");
/// assert_eq!(state.energy(), 15);
/// assert_eq!(state.hunger(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PetConfig {
    pub name: String,
    pub weight: i64,
    pub happiness: i64,
    pub hunger: i64,
    pub energy: i64,
    pub level: i64,
    pub exp: i64,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            weight: DEFAULT_WEIGHT,
            happiness: DEFAULT_HAPPINESS,
            hunger: DEFAULT_HUNGER,
            energy: DEFAULT_ENERGY,
            level: DEFAULT_LEVEL,
            exp: DEFAULT_EXP,
        }
    }
}

impl PetConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PetError::InvalidConfig`] for malformed JSON, wrong types
    /// or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, PetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the starting state, checking every invariant.
    ///
    /// Out-of-range values are rejected rather than clamped, so a typo in
    /// a configuration surfaces instead of being silently corrected.
    ///
    /// # Errors
    ///
    /// Returns [`PetError::InvariantViolation`] for the first stat out of
    /// range.
    pub fn into_state(self) -> Result<PetState, PetError> {
        let state = PetState::from_parts(
            self.name,
            [
                self.weight,
                self.happiness,
                self.hunger,
                self.energy,
                self.level,
                self.exp,
            ],
        );
        state.validate()?;
        Ok(state)
    }
}

impl TryFrom<PetConfig> for PetState {
    type Error = PetError;

    fn try_from(config: PetConfig) -> Result<Self, Self::Error> {
        config.into_state()
    }
}

impl From<&PetState> for PetConfig {
    fn from(state: &PetState) -> Self {
        Self {
            name: state.name().to_string(),
            weight: state.weight(),
            happiness: state.happiness(),
            hunger: state.hunger(),
            energy: state.energy(),
            level: state.level(),
            exp: state.exp(),
        }
    }
}
