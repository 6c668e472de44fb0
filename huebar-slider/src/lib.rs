//! A gradient bar slider engine.
//!
//! The track is a row of discrete bars colored along a multi-stop gradient,
//! with a circular thumb filled from the same gradient at the current value.
//! The engine lays the bars out for any size, paints through a host
//! [`Canvas`](huebar_ui::Canvas), turns tap and drag input into values in
//! `[0, 1]`, and runs the thumb's enable and press transitions from an
//! external clock.
//!
//! The host owns the value. See [`bar_slider`] for the entry point.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod bar_slider;
pub mod error;
pub mod gradient;

pub use crate::{
    bar_slider::{BarSlider, BarSliderArgs, BarSliderDefaults, PointerHandle},
    error::SliderError,
    gradient::Gradient,
};
