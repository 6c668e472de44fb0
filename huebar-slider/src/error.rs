//! Configuration errors.
//!
//! ## Usage
//!
//! Returned by [`BarSlider::new`](crate::bar_slider::BarSlider::new) and
//! [`BarSlider::update`](crate::bar_slider::BarSlider::update) when the host
//! supplies a configuration the control cannot honor. These signal host
//! misuse; user input never produces them.

use thiserror::Error;

/// A rejected slider configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// `value` is NaN or outside `[0, 1]`.
    #[error("slider value {0} is outside [0, 1]")]
    ValueOutOfRange(f64),
    /// No gradient colors were supplied.
    #[error("gradient needs at least one color")]
    EmptyGradient,
    /// Explicit stops do not pair up with the colors.
    #[error("gradient has {colors} colors but {stops} stops")]
    StopCountMismatch {
        /// Number of colors.
        colors: usize,
        /// Number of stops.
        stops: usize,
    },
    /// A stop is NaN or outside `[0, 1]`.
    #[error("gradient stop {index} ({stop}) is outside [0, 1]")]
    StopOutOfRange {
        /// Position of the offending stop.
        index: usize,
        /// Its value.
        stop: f64,
    },
    /// A stop is smaller than the one before it.
    #[error("gradient stop {index} ({stop}) is smaller than the previous stop")]
    StopsNotSorted {
        /// Position of the offending stop.
        index: usize,
        /// Its value.
        stop: f64,
    },
    /// A length knob is negative or not finite.
    #[error("{name} must be a finite, non-negative length, got {value}")]
    InvalidLength {
        /// Name of the configuration field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Bar width plus bar space is below the minimum pitch.
    #[error("bar width plus bar space must be at least {min}, got {pitch}")]
    BarPitchTooSmall {
        /// The configured pitch.
        pitch: f64,
        /// The smallest accepted pitch.
        min: f64,
    },
    /// A fraction or scale knob is outside its allowed range.
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidFraction {
        /// Name of the configuration field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
