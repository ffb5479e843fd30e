//! Stat bounds module.
//!
//! `StatBounds` restricts a stat to an inclusive range. Either bound can
//! be `None` to indicate no limit in that direction. Applying bounds is
//! idempotent: a clamped value is already inside the range, so clamping
//! it again changes nothing.

use serde::{Deserialize, Serialize};

/// An inclusive range a stat must stay within.
///
/// # Examples
///
/// ```rust
/// use zzpet::StatBounds;
///
/// // Gauge with both bounds
/// let gauge = StatBounds::new(0, 100);
/// assert_eq!(gauge.apply(150), 100);
/// assert_eq!(gauge.apply(-10), 0);
/// assert_eq!(gauge.apply(50), 50);
///
/// // Floor only (weight, happiness)
/// let floor = StatBounds::with_min(0);
/// assert_eq!(floor.apply(-3), 0);
/// assert_eq!(floor.apply(10_000), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBounds {
    /// Minimum allowed value (inclusive). `None` means no lower bound.
    pub min: Option<i64>,
    /// Maximum allowed value (inclusive). `None` means no upper bound.
    pub max: Option<i64>,
}

impl StatBounds {
    /// Create bounds with both a minimum and a maximum.
    pub const fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Create bounds with only a minimum.
    pub const fn with_min(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Clamp `value` into this range.
    ///
    /// The minimum is applied first, then the maximum, so malformed bounds
    /// with `min > max` resolve to `max`.
    pub fn apply(&self, value: i64) -> i64 {
        let mut result = value;

        if let Some(min) = self.min {
            result = result.max(min);
        }

        if let Some(max) = self.max {
            result = result.min(max);
        }

        result
    }

    /// Check whether `value` lies inside this range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzpet::StatBounds;
    ///
    /// let exp = StatBounds::new(0, 49);
    /// assert!(exp.contains(49));
    /// assert!(!exp.contains(50));
    /// ```
    pub fn contains(&self, value: i64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

impl std::fmt::Display for StatBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "[{}, {}]", min, max),
            (Some(min), None) => write!(f, "[{}, +inf)", min),
            (None, Some(max)) => write!(f, "(-inf, {}]", max),
            (None, None) => f.write_str("(-inf, +inf)"),
        }
    }
}
