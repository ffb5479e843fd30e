//! Pet state module.
//!
//! `PetState` is the record every action mutates. Its fields are private:
//! outside the crate it can be read and snapshotted, but only the
//! [`ActionEngine`](crate::ActionEngine) that owns it may change it.

use crate::config::PetConfig;
use crate::error::PetError;
use crate::stat::PetStat;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Name given to a pet created through `Default`.
pub const DEFAULT_NAME: &str = "Nailong";

/// Starting weight.
pub const DEFAULT_WEIGHT: i64 = 10;
/// Starting happiness.
pub const DEFAULT_HAPPINESS: i64 = 5;
/// Starting hunger.
pub const DEFAULT_HUNGER: i64 = 50;
/// Starting energy.
pub const DEFAULT_ENERGY: i64 = 70;
/// Starting level.
pub const DEFAULT_LEVEL: i64 = 1;
/// Starting experience.
pub const DEFAULT_EXP: i64 = 0;

/// The full set of attributes of one pet.
///
/// After every action the engine guarantees:
/// - `0 <= hunger <= 100` and `0 <= energy <= 100`
/// - `weight >= 0` and `happiness >= 0`
/// - `level >= 0`
/// - `0 <= exp < 50`
///
/// # Examples
///
/// ```rust
/// use zzpet::{PetState, PetStat};
///
/// let state = PetState::default();
/// assert_eq!(state.name(), "Nailong");
/// assert_eq!(state.hunger(), 50);
/// assert_eq!(state.get(PetStat::Energy), 70);
/// assert!(state.validate().is_ok());
/// ```
///
/// Deserializing goes through [`PetConfig`], so a snapshot with any stat
/// out of range is rejected instead of producing an invalid pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PetConfig")]
pub struct PetState {
    name: String,
    weight: i64,
    happiness: i64,
    hunger: i64,
    energy: i64,
    level: i64,
    exp: i64,
}

impl PetState {
    /// Create a pet with the given name and the default starting stats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzpet::PetState;
    ///
    /// let state = PetState::new("Mochi");
    /// assert_eq!(state.name(), "Mochi");
    /// assert_eq!(state.level(), 1);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: DEFAULT_WEIGHT,
            happiness: DEFAULT_HAPPINESS,
            hunger: DEFAULT_HUNGER,
            energy: DEFAULT_ENERGY,
            level: DEFAULT_LEVEL,
            exp: DEFAULT_EXP,
        }
    }

    /// Create a pet with explicit stats, without any validation.
    ///
    /// Used by [`PetConfig`](crate::PetConfig), which validates afterwards.
    pub(crate) fn from_parts(name: String, stats: [i64; 6]) -> Self {
        let [weight, happiness, hunger, energy, level, exp] = stats;
        Self {
            name,
            weight,
            happiness,
            hunger,
            energy,
            level,
            exp,
        }
    }

    /// The pet's name. Fixed at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn happiness(&self) -> i64 {
        self.happiness
    }

    pub fn hunger(&self) -> i64 {
        self.hunger
    }

    pub fn energy(&self) -> i64 {
        self.energy
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn exp(&self) -> i64 {
        self.exp
    }

    /// Read any stat by identifier.
    pub fn get(&self, stat: PetStat) -> i64 {
        match stat {
            PetStat::Weight => self.weight,
            PetStat::Happiness => self.happiness,
            PetStat::Hunger => self.hunger,
            PetStat::Energy => self.energy,
            PetStat::Level => self.level,
            PetStat::Exp => self.exp,
        }
    }

    fn slot(&mut self, stat: PetStat) -> &mut i64 {
        match stat {
            PetStat::Weight => &mut self.weight,
            PetStat::Happiness => &mut self.happiness,
            PetStat::Hunger => &mut self.hunger,
            PetStat::Energy => &mut self.energy,
            PetStat::Level => &mut self.level,
            PetStat::Exp => &mut self.exp,
        }
    }

    pub(crate) fn set(&mut self, stat: PetStat, value: i64) {
        *self.slot(stat) = value;
    }

    /// Add `delta` to a stat. Saturates instead of overflowing.
    pub(crate) fn add(&mut self, stat: PetStat, delta: i64) {
        let slot = self.slot(stat);
        *slot = slot.saturating_add(delta);
    }

    /// Clamp weight, happiness, hunger and energy into their bounds.
    ///
    /// Returns `true` if any value changed. Running it twice in a row
    /// never changes anything the second time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzpet::PetConfig;
    ///
    /// let mut state = PetConfig::default().into_state().unwrap();
    /// assert!(!state.clamp());
    /// ```
    pub fn clamp(&mut self) -> bool {
        let mut changed = false;
        for stat in PetStat::CLAMPED {
            let value = self.get(stat);
            let clamped = stat.bounds().apply(value);
            if clamped != value {
                trace!(%stat, from = value, to = clamped, "Clamped stat");
                self.set(stat, clamped);
                changed = true;
            }
        }
        changed
    }

    /// Check every invariant, reporting the first stat out of range.
    ///
    /// # Errors
    ///
    /// Returns [`PetError::InvariantViolation`] naming the stat, its value
    /// and the bounds it broke.
    pub fn validate(&self) -> Result<(), PetError> {
        for stat in PetStat::ALL {
            let value = self.get(stat);
            let bounds = stat.bounds();
            if !bounds.contains(value) {
                return Err(PetError::InvariantViolation {
                    stat,
                    value,
                    bounds,
                });
            }
        }
        Ok(())
    }
}

impl Default for PetState {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = PetState::default();
        assert_eq!(state.name(), "Nailong");
        assert_eq!(state.weight(), 10);
        assert_eq!(state.happiness(), 5);
        assert_eq!(state.hunger(), 50);
        assert_eq!(state.energy(), 70);
        assert_eq!(state.level(), 1);
        assert_eq!(state.exp(), 0);
    }

    #[test]
    fn test_add_saturates() {
        let mut state = PetState::default();
        state.set(PetStat::Weight, i64::MAX - 1);
        state.add(PetStat::Weight, 10);
        assert_eq!(state.weight(), i64::MAX);
    }

    #[test]
    fn test_clamp_all_stats() {
        let mut state = PetState::from_parts("Test".into(), [-4, -1, 130, -20, 3, 7]);
        assert!(state.clamp());
        assert_eq!(state.weight(), 0);
        assert_eq!(state.happiness(), 0);
        assert_eq!(state.hunger(), 100);
        assert_eq!(state.energy(), 0);
        // Level and exp are not the clamp step's business.
        assert_eq!(state.level(), 3);
        assert_eq!(state.exp(), 7);
    }

    #[test]
    fn test_clamp_idempotent() {
        let mut state = PetState::from_parts("Test".into(), [-4, 999, 101, 55, 1, 0]);
        state.clamp();
        let once = state.clone();
        assert!(!state.clamp());
        assert_eq!(state, once);
    }

    #[test]
    fn test_validate_reports_first_violation() {
        let state = PetState::from_parts("Test".into(), [10, 5, 50, 70, 1, 50]);
        assert_eq!(
            state.validate(),
            Err(PetError::InvariantViolation {
                stat: PetStat::Exp,
                value: 50,
                bounds: PetStat::Exp.bounds(),
            })
        );
    }

    #[test]
    fn test_state_serde() {
        let state = PetState::new("Mochi");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["name"], "Mochi");
        assert_eq!(json["hunger"], 50);
        let back: PetState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialize_rejects_invalid_state() {
        let json = serde_json::json!({
            "name": "Broken",
            "weight": 10,
            "happiness": 5,
            "hunger": 50,
            "energy": 70,
            "level": -3,
            "exp": -40,
        });
        let err = serde_json::from_value::<PetState>(json).unwrap_err();
        assert!(err.to_string().contains("level"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_exp_at_threshold() {
        let err = serde_json::from_str::<PetState>(r#"{ "exp": 50 }"#).unwrap_err();
        assert!(err.to_string().contains("exp"), "{}", err);
    }
}
