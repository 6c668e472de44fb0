use huebar_ui::{Canvas, DpPosition};

use super::{
    layout::TrackLayout,
    thumb::{ThumbPaint, paint_thumb},
};
use crate::gradient::Gradient;

/// Bars left to right, each colored at `i / bar_count`, then the thumb on top.
pub(super) fn paint_slider(
    canvas: &mut dyn Canvas,
    offset: DpPosition,
    layout: &TrackLayout,
    gradient: &Gradient,
    thumb: &ThumbPaint,
) {
    canvas.save();
    canvas.translate(offset);

    let bar_count = layout.bars.bar_count;
    for index in 0..bar_count {
        let t = index as f64 / bar_count as f64;
        canvas.fill_rounded_rect(layout.bar_rect(index), layout.line_edge_radius, gradient.sample(t));
    }

    paint_thumb(canvas, thumb);
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use huebar_ui::{Dp, DpSize, DrawOp, RecordingCanvas};

    use super::*;
    use crate::bar_slider::{BarSliderArgs, layout::track_layout, thumb::resolve_thumb};

    fn paint(width: f64, args: &BarSliderArgs) -> (TrackLayout, RecordingCanvas) {
        let layout = track_layout(args, DpSize::new(Dp(width), Dp(36.0)));
        let gradient = args.gradient().expect("valid gradient");
        let thumb = resolve_thumb(args, &layout, &gradient, 1.0, 0.0);
        let mut canvas = RecordingCanvas::new();
        paint_slider(&mut canvas, DpPosition::ZERO, &layout, &gradient, &thumb);
        (layout, canvas)
    }

    #[test]
    fn test_bars_are_sampled_left_to_right() {
        let args = BarSliderArgs::default().on_change(|_| {});
        let (layout, canvas) = paint(200.0, &args);
        let gradient = args.gradient().expect("valid gradient");
        let rects = canvas.rounded_rects();

        assert_eq!(rects.len(), layout.bars.bar_count);
        assert_eq!(rects[0].2, args.gradient_colors[0]);
        for (index, (rect, corner, color)) in rects.iter().enumerate() {
            assert_eq!(*rect, layout.bar_rect(index));
            assert_eq!(*corner, Dp(2.0));
            assert_eq!(*color, gradient.sample(index as f64 / rects.len() as f64));
        }
        assert!(rects.windows(2).all(|w| w[0].0.x < w[1].0.x));
    }

    #[test]
    fn test_thumb_is_painted_after_bars() {
        let args = BarSliderArgs::default().on_change(|_| {});
        let (_, canvas) = paint(200.0, &args);
        let last_bar = canvas
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::RoundedRect { .. }));
        let shadow = canvas
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::CircleShadow { .. }));
        assert!(last_bar < shadow);
        assert_eq!(canvas.ops.first(), Some(&DrawOp::Save));
        assert_eq!(canvas.ops.last(), Some(&DrawOp::Restore));
    }

    #[test]
    fn test_narrow_track_draws_single_bar_at_margin() {
        let args = BarSliderArgs::default().on_change(|_| {});
        let (layout, canvas) = paint(40.0, &args);
        let rects = canvas.rounded_rects();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].0.x, layout.thumb_radius);
        assert_eq!(rects[0].2, args.gradient_colors[0]);

        let (_, empty) = paint(20.0, &args);
        assert!(empty.rounded_rects().is_empty());
    }
}
