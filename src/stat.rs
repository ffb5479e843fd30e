//! Stat identifier module.
//!
//! Provides the `PetStat` type, which names each numeric attribute of a
//! pet. Every stat carries its own [`StatBounds`], so clamping and
//! validation are driven by the identifier rather than by hand-written
//! per-field code.

use crate::bounds::StatBounds;
use crate::error::PetError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier for a numeric pet stat.
///
/// # Examples
///
/// ```rust
/// use zzpet::PetStat;
///
/// let hunger: PetStat = "hunger".parse().unwrap();
/// assert_eq!(hunger, PetStat::Hunger);
/// assert_eq!(hunger.as_str(), "hunger");
/// assert_eq!(hunger.bounds().max, Some(100));
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStat {
    /// Body weight. Never negative, no upper limit.
    Weight,
    /// Happiness. Never negative, no upper limit.
    Happiness,
    /// Fullness gauge in `0..=100`. Zero means the pet is starving.
    Hunger,
    /// Stamina gauge in `0..=100`. Zero means the pet is exhausted.
    Energy,
    /// Current level. Never negative.
    Level,
    /// Experience towards the next level, in `0..50`.
    Exp,
}

impl PetStat {
    /// Every stat, in display order.
    pub const ALL: [PetStat; 6] = [
        PetStat::Weight,
        PetStat::Happiness,
        PetStat::Hunger,
        PetStat::Energy,
        PetStat::Level,
        PetStat::Exp,
    ];

    /// The stats touched by the clamp step of the action pipeline.
    ///
    /// `Level` and `Exp` are kept in range by the danger and leveling
    /// rules instead.
    pub const CLAMPED: [PetStat; 4] = [
        PetStat::Weight,
        PetStat::Happiness,
        PetStat::Hunger,
        PetStat::Energy,
    ];

    /// Get the string representation of this stat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzpet::PetStat;
    ///
    /// assert_eq!(PetStat::Energy.as_str(), "energy");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            PetStat::Weight => "weight",
            PetStat::Happiness => "happiness",
            PetStat::Hunger => "hunger",
            PetStat::Energy => "energy",
            PetStat::Level => "level",
            PetStat::Exp => "exp",
        }
    }

    /// Get the inclusive range this stat must stay within.
    pub fn bounds(self) -> StatBounds {
        match self {
            PetStat::Weight | PetStat::Happiness | PetStat::Level => StatBounds::with_min(0),
            PetStat::Hunger | PetStat::Energy => StatBounds::new(0, 100),
            PetStat::Exp => StatBounds::new(0, crate::leveling::EXP_PER_LEVEL - 1),
        }
    }
}

impl FromStr for PetStat {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        PetStat::ALL
            .into_iter()
            .find(|stat| stat.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| PetError::UnknownStat(s.to_string()))
    }
}

impl std::fmt::Display for PetStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
