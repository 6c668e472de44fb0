use huebar_ui::{Canvas, Color, Dp, DpPosition};

use super::{BarSliderArgs, layout::TrackLayout};
use crate::gradient::Gradient;

/// Share of the gradient color kept when the thumb is disabled.
const DISABLED_BLEND: f32 = 0.5;

/// Everything needed to draw the thumb for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPaint {
    /// Disc center in track coordinates.
    pub center: DpPosition,
    /// Disc radius.
    pub radius: Dp,
    /// Disc fill.
    pub fill: Color,
    /// Radius of the ring's center line.
    pub ring_radius: Dp,
    /// Ring stroke width.
    pub ring_width: Dp,
    /// Ring color.
    pub ring_color: Color,
    /// Shadow elevation.
    pub elevation: f64,
    /// Shadow color.
    pub shadow_color: Color,
}

/// Dims `color` by drawing half of it over the near-black `base`.
pub(super) fn disabled_color(color: Color, base: Color) -> Color {
    base.blend_over(color, DISABLED_BLEND)
}

/// Resolves the thumb for `value` at the given animation progresses.
///
/// `enable` blends the dimmed color and disabled radius toward the full color
/// and enabled radius; `press` lifts the shadow and moves the ring outward.
pub(super) fn resolve_thumb(
    args: &BarSliderArgs,
    layout: &TrackLayout,
    gradient: &Gradient,
    enable: f64,
    press: f64,
) -> ThumbPaint {
    let enable = enable.clamp(0.0, 1.0);
    let press = press.clamp(0.0, 1.0);

    let full = gradient.sample(args.value);
    let dimmed = disabled_color(full, args.disabled_base_color);
    let fill = dimmed.lerp(full, enable as f32);

    let radius = layout.animated_thumb_radius(enable);
    let ring_width = layout.margin_ring_width;
    let ring_radius = (radius - ring_width * (1.0 - press)).max(Dp::ZERO);

    ThumbPaint {
        center: layout.thumb_center(args.value),
        radius,
        fill,
        ring_radius,
        ring_width,
        ring_color: args.ring_color,
        elevation: args.resting_elevation + (args.pressed_elevation - args.resting_elevation) * press,
        shadow_color: args.shadow_color,
    }
}

/// Shadow first, then the disc, then the ring on top.
pub(super) fn paint_thumb(canvas: &mut dyn Canvas, thumb: &ThumbPaint) {
    if thumb.radius <= Dp::ZERO {
        return;
    }
    canvas.draw_circle_shadow(thumb.center, thumb.radius, thumb.elevation, thumb.shadow_color);
    canvas.fill_circle(thumb.center, thumb.radius, thumb.fill);
    if thumb.ring_width > Dp::ZERO {
        canvas.stroke_circle(thumb.center, thumb.ring_radius, thumb.ring_width, thumb.ring_color);
    }
}
