//! Host-facing primitives shared by huebar controls.
//!
//! A huebar control is an embeddable engine: it does not own a window, a
//! renderer or an event loop. This crate defines the narrow surface it needs
//! from whoever embeds it:
//!
//! - logical lengths and geometry ([`Dp`], [`DpPosition`], [`DpSize`], [`DpRect`]),
//! - colors ([`Color`]),
//! - size negotiation ([`Constraint`], [`DimensionValue`]),
//! - comparable callbacks ([`CallbackWith`]),
//! - shared per-instance state with liveness ([`State`], [`WeakState`]),
//! - a drawing surface ([`Canvas`]),
//! - pointer input ([`PointerEvent`]).
//!
//! # Painting
//!
//! ```
//! use huebar_ui::{Canvas, Color, Dp, DpPosition, DpRect};
//!
//! fn paint_marker(canvas: &mut dyn Canvas) {
//!     canvas.save();
//!     canvas.translate(DpPosition::new(Dp(8.0), Dp(0.0)));
//!     canvas.fill_rounded_rect(
//!         DpRect::new(Dp(0.0), Dp(0.0), Dp(4.0), Dp(16.0)),
//!         Dp(2.0),
//!         Color::WHITE,
//!     );
//!     canvas.restore();
//! }
//! ```
//!
//! # Logging
//!
//! Controls log through `tracing`. Hosts without their own subscriber can call
//! [`init_tracing`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod canvas;
pub mod color;
pub mod constraint;
pub mod dp;
mod logging;
pub mod pointer;
pub mod prop;
pub mod state;

#[cfg(any(test, feature = "testing"))]
pub use crate::{
    canvas::{DrawOp, RecordingCanvas},
    logging::init_test_tracing,
};
pub use crate::{
    canvas::Canvas,
    color::Color,
    constraint::{Constraint, DimensionValue},
    dp::{Dp, DpPosition, DpRect, DpSize},
    logging::init_tracing,
    pointer::{PointerButton, PointerEvent, PointerEventContent},
    prop::CallbackWith,
    state::{State, WeakState},
};
