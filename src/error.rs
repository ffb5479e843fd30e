//! Error types for the pet engine.
//!
//! Actions themselves are total and never fail. Errors only arise at the
//! edges: parsing names coming from a UI, and validating a starting
//! configuration supplied by the host.

use crate::bounds::StatBounds;
use crate::stat::PetStat;
use thiserror::Error;

/// Errors that can occur at the boundary of the pet engine.
///
/// # Examples
///
/// ```rust
/// use zzpet::PetError;
///
/// let err = PetError::UnknownAction("dance".to_string());
/// assert_eq!(err.to_string(), "Unknown action: dance");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PetError {
    /// A trigger name did not match any action.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A stat name did not match any stat.
    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    /// A stat lies outside the range it must stay within.
    #[error("Invariant violated for {stat}: {value} is outside {bounds}")]
    InvariantViolation {
        stat: PetStat,
        value: i64,
        bounds: StatBounds,
    },

    /// A configuration document could not be parsed.
    #[error("Invalid pet configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for PetError {
    fn from(err: serde_json::Error) -> Self {
        PetError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PetError::UnknownStat("mood".to_string());
        assert!(err.to_string().contains("mood"));
    }

    #[test]
    fn test_invariant_error_display() {
        let err = PetError::InvariantViolation {
            stat: PetStat::Hunger,
            value: 120,
            bounds: PetStat::Hunger.bounds(),
        };
        let display = err.to_string();
        assert!(display.contains("hunger"));
        assert!(display.contains("120"));
        assert!(display.contains("[0, 100]"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PetError = json_err.into();
        assert!(matches!(err, PetError::InvalidConfig(_)));
    }
}
