//! # Size Constraints
//!
//! Hosts describe the space they offer a control with a [`Constraint`], one
//! [`DimensionValue`] per axis. Controls answer with a concrete size through
//! [`DimensionValue::resolve`], which reconciles the control's preferred
//! extent with what the host allows.
//!
//! ```
//! use huebar_ui::{Constraint, DimensionValue, Dp};
//!
//! let offered = Constraint::new(
//!     DimensionValue::Fill { min: None, max: Some(Dp(320.0)) },
//!     DimensionValue::Wrap { min: None, max: Some(Dp(40.0)) },
//! );
//!
//! assert_eq!(offered.width.resolve(Dp(172.0)), Dp(320.0));
//! assert_eq!(offered.height.resolve(Dp(36.0)), Dp(36.0));
//! ```

use crate::Dp;

/// How a single dimension may be sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionValue {
    /// The host dictates this exact extent.
    Fixed(Dp),
    /// Size to content, optionally bounded.
    Wrap {
        /// Lower bound, if any.
        min: Option<Dp>,
        /// Upper bound, if any.
        max: Option<Dp>,
    },
    /// Take all available space, optionally bounded.
    Fill {
        /// Lower bound, if any.
        min: Option<Dp>,
        /// Upper bound, if any. `None` means the host has no finite space to
        /// offer, in which case fill behaves like wrap.
        max: Option<Dp>,
    },
}

impl DimensionValue {
    /// Unbounded wrap.
    pub const WRAP: Self = DimensionValue::Wrap {
        min: None,
        max: None,
    };

    /// Unbounded fill.
    pub const FILLED: Self = DimensionValue::Fill {
        min: None,
        max: None,
    };

    /// Returns the upper bound, if any. `Fixed` reports its own value.
    pub fn get_max(&self) -> Option<Dp> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { max, .. } | DimensionValue::Fill { max, .. } => *max,
        }
    }

    /// Returns the lower bound, if any. `Fixed` reports its own value.
    pub fn get_min(&self) -> Option<Dp> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { min, .. } | DimensionValue::Fill { min, .. } => *min,
        }
    }

    /// Returns `true` when the dimension has a finite upper bound.
    pub fn is_bounded(&self) -> bool {
        self.get_max().is_some()
    }

    /// Resolves a concrete extent given the control's `preferred` extent.
    ///
    /// - `Fixed` ignores the preference.
    /// - `Wrap` clamps the preference into its bounds.
    /// - `Fill` takes its upper bound, or the preference when unbounded, and
    ///   never goes below its lower bound.
    pub fn resolve(&self, preferred: Dp) -> Dp {
        match *self {
            DimensionValue::Fixed(value) => value,
            DimensionValue::Wrap { min, max } => {
                let mut resolved = preferred;
                if let Some(max) = max {
                    resolved = resolved.min(max);
                }
                if let Some(min) = min {
                    resolved = resolved.max(min);
                }
                resolved
            }
            DimensionValue::Fill { min, max } => {
                let resolved = max.unwrap_or(preferred);
                match min {
                    Some(min) => resolved.max(min),
                    None => resolved,
                }
            }
        }
    }
}

impl Default for DimensionValue {
    fn default() -> Self {
        DimensionValue::WRAP
    }
}

/// Width and height constraints offered by a host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Constraint {
    /// Horizontal constraint.
    pub width: DimensionValue,
    /// Vertical constraint.
    pub height: DimensionValue,
}

impl Constraint {
    /// No constraint in either axis.
    pub const NONE: Self = Self {
        width: DimensionValue::WRAP,
        height: DimensionValue::WRAP,
    };

    /// Creates a constraint from its two axes.
    pub fn new(width: DimensionValue, height: DimensionValue) -> Self {
        Self { width, height }
    }

    /// Creates a constraint that fixes both axes.
    pub fn tight(width: Dp, height: Dp) -> Self {
        Self::new(DimensionValue::Fixed(width), DimensionValue::Fixed(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ignores_preference() {
        assert_eq!(DimensionValue::Fixed(Dp(50.0)).resolve(Dp(200.0)), Dp(50.0));
    }

    #[test]
    fn test_wrap_clamps_preference() {
        let wrap = DimensionValue::Wrap {
            min: Some(Dp(20.0)),
            max: Some(Dp(80.0)),
        };
        assert_eq!(wrap.resolve(Dp(10.0)), Dp(20.0));
        assert_eq!(wrap.resolve(Dp(50.0)), Dp(50.0));
        assert_eq!(wrap.resolve(Dp(100.0)), Dp(80.0));
        assert_eq!(DimensionValue::WRAP.resolve(Dp(42.0)), Dp(42.0));
    }

    #[test]
    fn test_fill_takes_max_or_preference() {
        let bounded = DimensionValue::Fill {
            min: None,
            max: Some(Dp(300.0)),
        };
        assert_eq!(bounded.resolve(Dp(100.0)), Dp(300.0));
        assert_eq!(DimensionValue::FILLED.resolve(Dp(100.0)), Dp(100.0));

        let with_min = DimensionValue::Fill {
            min: Some(Dp(150.0)),
            max: None,
        };
        assert_eq!(with_min.resolve(Dp(100.0)), Dp(150.0));
    }

    #[test]
    fn test_bounds_accessors() {
        let fixed = DimensionValue::Fixed(Dp(12.0));
        assert_eq!(fixed.get_min(), Some(Dp(12.0)));
        assert_eq!(fixed.get_max(), Some(Dp(12.0)));
        assert!(fixed.is_bounded());
        assert!(!DimensionValue::FILLED.is_bounded());
        assert_eq!(Constraint::default(), Constraint::NONE);
    }
}
