//! RGBA colors with straight (non-premultiplied) alpha.
//!
//! ## Usage
//!
//! Describe gradient stops, bar fills and thumb fills, and blend between them.

/// A color with an alpha component.
///
/// Channels are stored as `f32`s in `[0.0, 1.0]`. Blending is performed
/// per channel on the stored values, so two colors produced by the same blend
/// inputs compare equal bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque pure red.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque pure green.
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque pure blue.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a new `Color` from red, green, blue and alpha.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` channels.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` channels.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    ///
    /// ```
    /// use huebar_ui::Color;
    ///
    /// assert_eq!(Color::from_argb_u32(0xFFFF0000), Color::RED);
    /// ```
    pub fn from_argb_u32(argb: u32) -> Self {
        Self::from_rgba_u8(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            ((argb >> 24) & 0xFF) as u8,
        )
    }

    /// Componentwise linear interpolation from `self` to `other`.
    ///
    /// `fraction` is clamped to `[0.0, 1.0]`. A fraction of exactly `0.0` or
    /// `1.0` returns the corresponding endpoint unchanged.
    pub fn lerp(self, other: Color, fraction: f32) -> Color {
        let t = fraction.clamp(0.0, 1.0);
        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Draws `overlay` over `self` with the given overlay opacity.
    ///
    /// ```
    /// use huebar_ui::Color;
    ///
    /// let dimmed = Color::BLACK.blend_over(Color::WHITE, 0.5);
    /// assert_eq!(dimmed, Color::new(0.5, 0.5, 0.5, 1.0));
    /// ```
    pub fn blend_over(self, overlay: Color, overlay_alpha: f32) -> Color {
        let alpha = overlay_alpha.clamp(0.0, 1.0);
        Color::new(
            overlay.r * alpha + self.r * (1.0 - alpha),
            overlay.g * alpha + self.g * (1.0 - alpha),
            overlay.b * alpha + self.b * (1.0 - alpha),
            overlay.a * alpha + self.a * (1.0 - alpha),
        )
    }

    /// Converts the color to `[r, g, b, a]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let from = Color::from_rgb_u8(12, 34, 56);
        let to = Color::from_rgb_u8(200, 100, 50);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(from.lerp(to, 7.0), to);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color::RED.lerp(Color::GREEN, 0.5);
        assert_eq!(mid, Color::new(0.5, 0.5, 0.0, 1.0));
    }

    #[test]
    fn test_blend_over() {
        let base = Color::new(0.2, 0.2, 0.2, 1.0);
        assert_eq!(base.blend_over(Color::WHITE, 0.0), base);
        assert_eq!(base.blend_over(Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn test_argb_unpacking() {
        let color = Color::from_argb_u32(0x80FF8000);
        assert_eq!(color, Color::from_rgba_u8(0xFF, 0x80, 0x00, 0x80));
    }
}
