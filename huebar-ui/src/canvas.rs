//! The drawing surface a host lends to a control while it paints.
//!
//! ## Usage
//!
//! Hosts implement [`Canvas`] on top of their renderer. Controls issue a small
//! vocabulary of primitives (rounded rectangles, circles, circle shadows) in
//! their own logical coordinates, using `save`/`translate`/`restore` to place
//! themselves.

use crate::{Color, Dp, DpPosition, DpRect};

/// Drawing operations a control may issue.
pub trait Canvas {
    /// Pushes the current transform.
    fn save(&mut self);

    /// Pops the transform pushed by the matching [`Canvas::save`].
    fn restore(&mut self);

    /// Moves the origin by `offset`.
    fn translate(&mut self, offset: DpPosition);

    /// Fills a rectangle whose four corners are rounded by `corner_radius`.
    fn fill_rounded_rect(&mut self, rect: DpRect, corner_radius: Dp, color: Color);

    /// Casts a shadow under a circle as if it were lifted by `elevation`.
    fn draw_circle_shadow(&mut self, center: DpPosition, radius: Dp, elevation: f64, color: Color);

    /// Fills a circle.
    fn fill_circle(&mut self, center: DpPosition, radius: Dp, color: Color);

    /// Strokes a circle outline centered on `radius`.
    fn stroke_circle(&mut self, center: DpPosition, radius: Dp, stroke_width: Dp, color: Color);
}

/// One recorded drawing operation.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// `save` was called.
    Save,
    /// `restore` was called.
    Restore,
    /// `translate` was called.
    Translate(DpPosition),
    /// A rounded rectangle was filled.
    RoundedRect {
        /// Rectangle in the coordinates current at the call.
        rect: DpRect,
        /// Corner radius.
        corner_radius: Dp,
        /// Fill color.
        color: Color,
    },
    /// A circle shadow was drawn.
    CircleShadow {
        /// Center of the shadowed circle.
        center: DpPosition,
        /// Radius of the shadowed circle.
        radius: Dp,
        /// Elevation the shadow represents.
        elevation: f64,
        /// Shadow color.
        color: Color,
    },
    /// A circle was filled.
    FillCircle {
        /// Center.
        center: DpPosition,
        /// Radius.
        radius: Dp,
        /// Fill color.
        color: Color,
    },
    /// A circle outline was stroked.
    StrokeCircle {
        /// Center.
        center: DpPosition,
        /// Radius of the stroke center line.
        radius: Dp,
        /// Stroke width.
        stroke_width: Dp,
        /// Stroke color.
        color: Color,
    },
}

/// A [`Canvas`] that records every operation, for tests.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    /// Operations in issue order.
    pub ops: Vec<DrawOp>,
}

#[cfg(any(test, feature = "testing"))]
impl RecordingCanvas {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded rounded rectangles in issue order.
    pub fn rounded_rects(&self) -> Vec<(DpRect, Dp, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::RoundedRect {
                    rect,
                    corner_radius,
                    color,
                } => Some((*rect, *corner_radius, *color)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, offset: DpPosition) {
        self.ops.push(DrawOp::Translate(offset));
    }

    fn fill_rounded_rect(&mut self, rect: DpRect, corner_radius: Dp, color: Color) {
        self.ops.push(DrawOp::RoundedRect {
            rect,
            corner_radius,
            color,
        });
    }

    fn draw_circle_shadow(&mut self, center: DpPosition, radius: Dp, elevation: f64, color: Color) {
        self.ops.push(DrawOp::CircleShadow {
            center,
            radius,
            elevation,
            color,
        });
    }

    fn fill_circle(&mut self, center: DpPosition, radius: Dp, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: DpPosition, radius: Dp, stroke_width: Dp, color: Color) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            stroke_width,
            color,
        });
    }
}
