use huebar_ui::{Constraint, DimensionValue, Dp, DpPosition, DpRect, DpSize};

use super::{BarSliderArgs, BarSliderDefaults};

/// How many bars fit on a track and how they are spaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// Number of bars drawn.
    pub bar_count: usize,
    /// Width of every bar.
    pub actual_bar_width: Dp,
    /// Gap between neighbouring bars after spreading the leftover width.
    /// Zero when there are fewer than two bars.
    pub adjusted_bar_space: Dp,
}

/// Fits bars of `bar_width`, separated by at least `bar_space`, into the
/// width left between the two thumb-radius margins of a track of `size`.
///
/// With two or more bars, the leftover width is spread over the gaps so that
/// `bar_count * actual_bar_width + (bar_count - 1) * adjusted_bar_space`
/// equals the usable width exactly.
pub fn compute_bar_layout(size: DpSize, bar_width: Dp, bar_space: Dp, thumb_radius: Dp) -> BarLayout {
    let usable = size.width - thumb_radius * 2.0;
    let pitch = bar_width + bar_space;

    let bar_count = if pitch.0 > 0.0 && usable.0 > 0.0 {
        // Bars are never packed denser than one per unit of usable width.
        let fitted = ((usable - bar_space).0 / pitch.0)
            .floor()
            .min(usable.0.floor());
        if fitted.is_finite() && fitted > 0.0 {
            fitted as usize
        } else {
            0
        }
    } else {
        0
    };

    let adjusted_bar_space = if bar_count > 1 {
        let total_bar_width = bar_width * bar_count as f64;
        (usable - total_bar_width) / (bar_count - 1) as f64
    } else {
        Dp::ZERO
    };

    BarLayout {
        bar_count,
        actual_bar_width: bar_width,
        adjusted_bar_space,
    }
}

/// Geometry of a sized bar track, recomputed whenever the size or the bar
/// configuration changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    /// Size of the whole track, which is the size of the control.
    pub track_size: DpSize,
    /// Thumb radius used for margins and thumb positioning.
    pub thumb_radius: Dp,
    /// Thumb radius while interactive.
    pub enabled_thumb_radius: Dp,
    /// Thumb radius while disabled.
    pub disabled_thumb_radius: Dp,
    /// Width of the white ring around the thumb.
    pub margin_ring_width: Dp,
    /// Bars that fit between the thumb margins.
    pub bars: BarLayout,
    /// Height of each bar.
    pub bar_height: Dp,
    /// Corner radius of each bar, half the configured bar width.
    pub line_edge_radius: Dp,
}

impl TrackLayout {
    /// Width of the track.
    pub fn track_width(&self) -> Dp {
        self.track_size.width
    }

    /// Width between the two thumb-radius margins.
    pub fn usable_width(&self) -> Dp {
        self.track_size.width - self.thumb_radius * 2.0
    }

    /// Rectangle of bar `index`, vertically centered on the track.
    pub fn bar_rect(&self, index: usize) -> DpRect {
        let pitch = self.bars.actual_bar_width + self.bars.adjusted_bar_space;
        DpRect::new(
            self.thumb_radius + pitch * index as f64,
            (self.track_size.height - self.bar_height) / 2.0,
            self.bars.actual_bar_width,
            self.bar_height,
        )
    }

    /// Thumb center for `value`, clamped to `[0, 1]`.
    pub fn thumb_center(&self, value: f64) -> DpPosition {
        let value = value.clamp(0.0, 1.0);
        DpPosition::new(
            self.thumb_radius + self.usable_width() * value,
            self.track_size.height / 2.0,
        )
    }

    /// Interpolated thumb radius for an enable progress in `[0, 1]`.
    pub fn animated_thumb_radius(&self, enable_progress: f64) -> Dp {
        Dp::lerp(
            self.disabled_thumb_radius,
            self.enabled_thumb_radius,
            enable_progress.clamp(0.0, 1.0),
        )
    }
}

/// Computes the full track layout for the current configuration and size.
pub(super) fn track_layout(args: &BarSliderArgs, size: DpSize) -> TrackLayout {
    let ring = args.margin_ring_width;
    let enabled_thumb_radius = (size.height / 2.0 - ring).max(Dp::ZERO);
    let disabled_thumb_radius = enabled_thumb_radius * args.disabled_thumb_scale;
    let thumb_radius = if args.is_interactive() {
        enabled_thumb_radius
    } else {
        disabled_thumb_radius
    };

    TrackLayout {
        track_size: size,
        thumb_radius,
        enabled_thumb_radius,
        disabled_thumb_radius,
        margin_ring_width: ring,
        bars: compute_bar_layout(size, args.bar_width, args.bar_space, thumb_radius),
        bar_height: size.height * args.bar_height_fraction,
        line_edge_radius: args.bar_width / 2.0,
    }
}

/// Narrowest width that still shows a useful track.
pub(super) fn min_intrinsic_width(args: &BarSliderArgs) -> Dp {
    BarSliderDefaults::MIN_TRACK_WIDTH + args.thumb_diameter
}

/// Preferred height for a given width: the larger of the minimum track height
/// and the thumb diameter, never taller than a fifth of the width.
pub(super) fn intrinsic_height(args: &BarSliderArgs, width: Option<Dp>) -> Dp {
    let preferred = BarSliderDefaults::MIN_TRACK_HEIGHT.max(args.thumb_diameter);
    match width {
        Some(width) if width.is_finite() => {
            preferred.min((width / BarSliderDefaults::MAX_ASPECT_RATIO).max(Dp::ZERO))
        }
        _ => preferred,
    }
}

/// Size the control takes under `constraint`, without laying it out.
pub(super) fn dry_layout(args: &BarSliderArgs, constraint: Constraint) -> DpSize {
    let width = constraint.width.resolve(min_intrinsic_width(args));
    let preferred_height = intrinsic_height(args, Some(width));
    let height = match constraint.height {
        DimensionValue::Fixed(height) => height,
        other => {
            let capped = other
                .resolve(preferred_height)
                .min(width / BarSliderDefaults::MAX_ASPECT_RATIO);
            capped.max(other.get_min().unwrap_or(Dp::ZERO))
        }
    };
    DpSize::new(width, height)
}
