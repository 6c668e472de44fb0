//! # Density-Independent Lengths
//!
//! This module provides the [`Dp`] type and the small geometry types built on
//! it. Every length a huebar control computes (track size, bar widths, thumb
//! radius, pointer positions) is expressed in logical, density-independent
//! units; the host canvas is responsible for mapping them to device pixels.
//!
//! ## Usage
//!
//! ```
//! use huebar_ui::{Dp, DpPosition, DpRect, DpSize};
//!
//! let bar_width = Dp(4.0);
//! let gap = Dp(2.0);
//! assert_eq!(bar_width + gap, Dp(6.0));
//!
//! let size = DpSize::new(Dp(200.0), Dp(36.0));
//! let rect = DpRect::from_position_size(DpPosition::ZERO, size);
//! assert!(rect.contains(DpPosition::new(Dp(10.0), Dp(10.0))));
//! ```

use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// A density-independent length.
///
/// `Dp` wraps an `f64` so layout arithmetic keeps full precision; the bar
/// track relies on bars and gaps summing exactly to the usable width.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero length.
    pub const ZERO: Self = Dp(0.0);

    /// Creates a new `Dp`. Usable in `const` contexts.
    ///
    /// ```
    /// use huebar_ui::Dp;
    ///
    /// const BAR_WIDTH: Dp = Dp::new(4.0);
    /// assert_eq!(BAR_WIDTH.to_f64(), 4.0);
    /// ```
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Returns the raw value.
    pub fn to_f64(self) -> f64 {
        self.0
    }

    /// Returns the larger of two lengths.
    pub fn max(self, other: Self) -> Self {
        Dp(self.0.max(other.0))
    }

    /// Returns the smaller of two lengths.
    pub fn min(self, other: Self) -> Self {
        Dp(self.0.min(other.0))
    }

    /// Clamps the length into `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Dp(self.0.clamp(min.0, max.0))
    }

    /// Returns `true` when the value is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Linearly interpolates between `from` and `to`.
    ///
    /// ```
    /// use huebar_ui::Dp;
    ///
    /// assert_eq!(Dp::lerp(Dp(1.0), Dp(6.0), 0.5), Dp(3.5));
    /// ```
    pub fn lerp(from: Self, to: Self, fraction: f64) -> Self {
        Dp(from.0 + (to.0 - from.0) * fraction)
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Self) -> Self::Output {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Self) -> Self::Output {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Self::Output {
        Dp(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Dp;

    fn div(self, rhs: f64) -> Self::Output {
        Dp(self.0 / rhs)
    }
}

impl AddAssign for Dp {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Dp {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl From<Dp> for f64 {
    fn from(dp: Dp) -> Self {
        dp.0
    }
}

/// A 2D position in logical space.
///
/// Origin is the top-left corner, x grows to the right and y grows downward.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpPosition {
    /// Horizontal coordinate.
    pub x: Dp,
    /// Vertical coordinate.
    pub y: Dp,
}

impl DpPosition {
    /// The origin.
    pub const ZERO: Self = Self {
        x: Dp::ZERO,
        y: Dp::ZERO,
    };

    /// Creates a position from its coordinates.
    pub const fn new(x: Dp, y: Dp) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by `dx`, `dy`.
    pub fn offset(self, dx: Dp, dy: Dp) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for DpPosition {
    type Output = DpPosition;

    fn add(self, rhs: Self) -> Self::Output {
        DpPosition::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for DpPosition {
    type Output = DpPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        DpPosition::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size in logical space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpSize {
    /// Horizontal extent.
    pub width: Dp,
    /// Vertical extent.
    pub height: Dp,
}

impl DpSize {
    /// A size with no extent.
    pub const ZERO: Self = Self {
        width: Dp::ZERO,
        height: Dp::ZERO,
    };

    /// Creates a size from its dimensions.
    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width.0 <= 0.0 || self.height.0 <= 0.0
    }
}

/// An axis-aligned rectangle in logical space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpRect {
    /// Left edge.
    pub x: Dp,
    /// Top edge.
    pub y: Dp,
    /// Horizontal extent.
    pub width: Dp,
    /// Vertical extent.
    pub height: Dp,
}

impl DpRect {
    /// Creates a rectangle from its origin and dimensions.
    pub const fn new(x: Dp, y: Dp, width: Dp, height: Dp) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a top-left position and a size.
    pub fn from_position_size(position: DpPosition, size: DpSize) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Right edge.
    pub fn right(&self) -> Dp {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> Dp {
        self.y + self.height
    }

    /// Geometric center.
    pub fn center(&self) -> DpPosition {
        DpPosition::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns `true` if `point` lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges
    /// exclusive.
    pub fn contains(&self, point: DpPosition) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
