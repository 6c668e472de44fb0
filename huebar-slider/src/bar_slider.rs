//! A horizontal slider drawn as a row of gradient-colored bars.
//!
//! ## Usage
//!
//! Use to pick a value in `[0, 1]` where the position along a color ramp
//! carries meaning, such as a rating, a level or an intensity.
//!
//! The host owns the value. [`BarSlider`] reports what the user asks for
//! through `on_change` and only moves once the host feeds the new value back
//! through [`BarSlider::update`].
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use huebar_slider::bar_slider::{BarSlider, BarSliderArgs};
//! use huebar_ui::{Dp, DpPosition, DpSize, PointerEvent};
//!
//! let requested = Arc::new(Mutex::new(None));
//! let sink = requested.clone();
//! let slider = BarSlider::new(
//!     BarSliderArgs::default()
//!         .value(0.25)
//!         .on_change(move |value| *sink.lock().unwrap() = Some(value)),
//! )
//! .expect("valid configuration");
//! slider.set_size(DpSize::new(Dp(200.0), Dp(36.0)));
//!
//! slider.handle_pointer(&PointerEvent::pressed(DpPosition::new(Dp(108.0), Dp(18.0))));
//! assert_eq!(*requested.lock().unwrap(), Some(0.5));
//! ```
use std::time::Duration;

use derive_setters::Setters;
use huebar_ui::{
    CallbackWith, Canvas, Color, Constraint, Dp, DpPosition, DpRect, DpSize, PointerEvent, State,
    WeakState,
};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    animation::{Easing, Transition},
    error::SliderError,
    gradient::Gradient,
};

use interaction::{GestureContext, InteractionState, SliderNotification, handle_pointer_event};

pub use interaction::GesturePhase;
pub use layout::{BarLayout, TrackLayout, compute_bar_layout};
pub use thumb::ThumbPaint;

mod interaction;
mod layout;
mod render;
mod thumb;

/// Defaults for [`BarSliderArgs`].
pub struct BarSliderDefaults;

impl BarSliderDefaults {
    /// Desired width of each bar.
    pub const BAR_WIDTH: Dp = Dp(4.0);
    /// Desired minimum gap between bars.
    pub const BAR_SPACE: Dp = Dp(2.0);
    /// Smallest accepted `bar_width + bar_space`.
    pub const MIN_BAR_PITCH: Dp = Dp(1.0);
    /// Bar height relative to the track height.
    pub const BAR_HEIGHT_FRACTION: f64 = 0.5;
    /// Width of the ring around the thumb, and the gap between the thumb and
    /// the track edges.
    pub const MARGIN_RING_WIDTH: Dp = Dp(2.0);
    /// Preferred thumb diameter.
    pub const THUMB_DIAMETER: Dp = Dp(28.0);
    /// Narrowest usable track, excluding the thumb margins.
    pub const MIN_TRACK_WIDTH: Dp = Dp(144.0);
    /// Shortest preferred track.
    pub const MIN_TRACK_HEIGHT: Dp = Dp(36.0);
    /// The track is never taller than `width / MAX_ASPECT_RATIO`.
    pub const MAX_ASPECT_RATIO: f64 = 5.0;
    /// Duration of the enable and press transitions.
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(75);
    /// Thumb shadow elevation at rest.
    pub const RESTING_ELEVATION: f64 = 1.0;
    /// Thumb shadow elevation while pressed.
    pub const PRESSED_ELEVATION: f64 = 6.0;
    /// Near-black base the thumb color is dimmed over when disabled.
    pub const DISABLED_BASE_COLOR: Color = Color::new(0.13, 0.13, 0.13, 1.0);
    /// Thumb ring color.
    pub const RING_COLOR: Color = Color::WHITE;
    /// Thumb shadow color.
    pub const SHADOW_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.3);

    /// Red, orange, yellow, green.
    pub fn gradient_colors() -> Vec<Color> {
        vec![
            Color::from_rgb_u8(0xF4, 0x43, 0x36),
            Color::from_rgb_u8(0xFF, 0x98, 0x00),
            Color::from_rgb_u8(0xFF, 0xEB, 0x3B),
            Color::from_rgb_u8(0x4C, 0xAF, 0x50),
        ]
    }
}

/// Arguments for [`BarSlider`].
///
/// The slider is interactive only while `on_change` is set. Without it the
/// thumb is drawn dimmed and pointer input is ignored.
#[derive(Clone, PartialEq, Debug, Setters)]
pub struct BarSliderArgs {
    /// Current value in `[0, 1]`.
    pub value: f64,
    /// Gradient colors, left to right.
    #[setters(skip)]
    pub gradient_colors: Vec<Color>,
    /// Explicit gradient stops. Evenly spaced (`i / len`) when unset.
    #[setters(strip_option)]
    pub gradient_stops: Option<Vec<f64>>,
    /// Desired width of each bar.
    pub bar_width: Dp,
    /// Desired minimum gap between bars.
    pub bar_space: Dp,
    /// Bar height relative to the track height, in `[0, 1]`.
    pub bar_height_fraction: f64,
    /// Width of the thumb ring.
    pub margin_ring_width: Dp,
    /// Preferred thumb diameter, used for intrinsic sizing.
    pub thumb_diameter: Dp,
    /// Disabled thumb radius relative to the enabled one, in `[0, 1]`.
    pub disabled_thumb_scale: f64,
    /// Thumb shadow elevation at rest.
    pub resting_elevation: f64,
    /// Thumb shadow elevation while pressed.
    pub pressed_elevation: f64,
    /// Thumb ring color.
    pub ring_color: Color,
    /// Base the thumb color is dimmed over when disabled.
    pub disabled_base_color: Color,
    /// Thumb shadow color.
    pub shadow_color: Color,
    /// Duration of the enable/disable transition.
    pub enable_duration: Duration,
    /// Duration of the press/release transition.
    pub press_duration: Duration,
    /// Called with every requested value.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<f64>>,
    /// Called with the value from before an interaction when it starts.
    #[setters(skip)]
    pub on_change_start: Option<CallbackWith<f64>>,
    /// Called with the final value when an interaction ends.
    #[setters(skip)]
    pub on_change_end: Option<CallbackWith<f64>>,
}

impl BarSliderArgs {
    /// Sets the gradient colors.
    pub fn gradient_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.gradient_colors = colors.into_iter().collect();
        self
    }

    /// Sets the on_change handler, making the slider interactive.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<f64>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Sets the on_change_start handler.
    pub fn on_change_start<F>(mut self, on_change_start: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change_start = Some(CallbackWith::new(on_change_start));
        self
    }

    /// Sets the on_change_start handler using a shared callback.
    pub fn on_change_start_shared(mut self, on_change_start: impl Into<CallbackWith<f64>>) -> Self {
        self.on_change_start = Some(on_change_start.into());
        self
    }

    /// Sets the on_change_end handler.
    pub fn on_change_end<F>(mut self, on_change_end: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change_end = Some(CallbackWith::new(on_change_end));
        self
    }

    /// Sets the on_change_end handler using a shared callback.
    pub fn on_change_end_shared(mut self, on_change_end: impl Into<CallbackWith<f64>>) -> Self {
        self.on_change_end = Some(on_change_end.into());
        self
    }

    /// Whether pointer input is handled.
    pub fn is_interactive(&self) -> bool {
        self.on_change.is_some()
    }

    /// Builds the configured gradient.
    pub fn gradient(&self) -> Result<Gradient, SliderError> {
        Gradient::new(self.gradient_colors.iter().copied(), self.gradient_stops.clone())
    }

    /// Checks every knob, returning the first problem found.
    pub fn validate(&self) -> Result<(), SliderError> {
        if !(0.0..=1.0).contains(&self.value) {
            return Err(SliderError::ValueOutOfRange(self.value));
        }
        for (name, value) in [
            ("bar_width", self.bar_width.0),
            ("bar_space", self.bar_space.0),
            ("margin_ring_width", self.margin_ring_width.0),
            ("thumb_diameter", self.thumb_diameter.0),
            ("resting_elevation", self.resting_elevation),
            ("pressed_elevation", self.pressed_elevation),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SliderError::InvalidLength { name, value });
            }
        }
        let pitch = self.bar_width + self.bar_space;
        if pitch < BarSliderDefaults::MIN_BAR_PITCH {
            return Err(SliderError::BarPitchTooSmall {
                pitch: pitch.0,
                min: BarSliderDefaults::MIN_BAR_PITCH.0,
            });
        }
        for (name, value) in [
            ("bar_height_fraction", self.bar_height_fraction),
            ("disabled_thumb_scale", self.disabled_thumb_scale),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SliderError::InvalidFraction { name, value });
            }
        }
        self.gradient().map(|_| ())
    }

    fn callbacks(&self) -> Callbacks {
        Callbacks {
            on_change: self.on_change.clone(),
            on_change_start: self.on_change_start.clone(),
            on_change_end: self.on_change_end.clone(),
        }
    }

    /// Whether switching from `self` to `other` invalidates the track layout.
    fn layout_differs(&self, other: &Self) -> bool {
        self.bar_width != other.bar_width
            || self.bar_space != other.bar_space
            || self.bar_height_fraction != other.bar_height_fraction
            || self.margin_ring_width != other.margin_ring_width
            || self.disabled_thumb_scale != other.disabled_thumb_scale
            || self.is_interactive() != other.is_interactive()
    }
}

impl Default for BarSliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            gradient_colors: BarSliderDefaults::gradient_colors(),
            gradient_stops: None,
            bar_width: BarSliderDefaults::BAR_WIDTH,
            bar_space: BarSliderDefaults::BAR_SPACE,
            bar_height_fraction: BarSliderDefaults::BAR_HEIGHT_FRACTION,
            margin_ring_width: BarSliderDefaults::MARGIN_RING_WIDTH,
            thumb_diameter: BarSliderDefaults::THUMB_DIAMETER,
            disabled_thumb_scale: 1.0,
            resting_elevation: BarSliderDefaults::RESTING_ELEVATION,
            pressed_elevation: BarSliderDefaults::PRESSED_ELEVATION,
            ring_color: BarSliderDefaults::RING_COLOR,
            disabled_base_color: BarSliderDefaults::DISABLED_BASE_COLOR,
            shadow_color: BarSliderDefaults::SHADOW_COLOR,
            enable_duration: BarSliderDefaults::ANIMATION_DURATION,
            press_duration: BarSliderDefaults::ANIMATION_DURATION,
            on_change: None,
            on_change_start: None,
            on_change_end: None,
        }
    }
}

#[derive(Clone)]
struct Callbacks {
    on_change: Option<CallbackWith<f64>>,
    on_change_start: Option<CallbackWith<f64>>,
    on_change_end: Option<CallbackWith<f64>>,
}

impl Callbacks {
    fn notify(&self, notification: SliderNotification) {
        let (callback, value) = match notification {
            SliderNotification::ChangeStart(value) => (&self.on_change_start, value),
            SliderNotification::Changed(value) => (&self.on_change, value),
            SliderNotification::ChangeEnd(value) => (&self.on_change_end, value),
        };
        if let Some(callback) = callback {
            callback.call(value);
        }
    }
}

struct SliderInner {
    args: BarSliderArgs,
    gradient: Gradient,
    size: DpSize,
    layout: Option<TrackLayout>,
    interaction: InteractionState,
    enable: Transition,
    press: Transition,
    attached: bool,
    needs_paint: bool,
}

impl SliderInner {
    fn layout(&mut self) -> TrackLayout {
        match self.layout {
            Some(layout) => layout,
            None => {
                let layout = layout::track_layout(&self.args, self.size);
                trace!(
                    width = layout.track_size.width.0,
                    height = layout.track_size.height.0,
                    bar_count = layout.bars.bar_count,
                    "bar slider layout recomputed"
                );
                self.layout = Some(layout);
                layout
            }
        }
    }

    fn reset_interaction(&mut self) {
        if self.interaction.phase == GesturePhase::Tracking {
            debug!("dropping active slider interaction without notifying");
        }
        self.interaction.reset();
        if self.press.set_target(0.0) {
            self.needs_paint = true;
        }
    }

    fn handle_pointer(
        &mut self,
        event: &PointerEvent,
    ) -> Option<(SmallVec<[SliderNotification; 2]>, Callbacks)> {
        if !self.attached {
            return None;
        }
        let layout = self.layout();
        let ctx = GestureContext {
            interactive: self.args.is_interactive(),
            value: self.args.value,
            track_left: Dp::ZERO,
            track_width: layout.track_width(),
            thumb_radius: layout.thumb_radius,
        };
        let outcome = handle_pointer_event(&mut self.interaction, &event.content, &ctx);
        if outcome.is_empty() {
            return None;
        }
        if let Some(target) = outcome.press_target
            && self.press.set_target(target)
        {
            self.needs_paint = true;
        }
        Some((outcome.notifications, self.args.callbacks()))
    }
}

fn is_alive(weak: &WeakState<SliderInner>) -> bool {
    weak.upgrade()
        .is_some_and(|state| state.with(|inner| inner.attached))
}

/// Runs the gesture machine under the lock, then notifies the host with the
/// lock released so callbacks may call back into the slider.
fn dispatch_pointer(weak: &WeakState<SliderInner>, event: &PointerEvent) -> bool {
    let Some(state) = weak.upgrade() else {
        trace!("pointer event for a dropped bar slider");
        return false;
    };
    let step = state.with_mut(|inner| inner.handle_pointer(event));
    drop(state);

    let Some((notifications, callbacks)) = step else {
        return false;
    };
    for notification in notifications {
        if !is_alive(weak) {
            debug!(?notification, "bar slider torn down, suppressing notification");
            break;
        }
        callbacks.notify(notification);
    }
    true
}

/// A gradient bar slider instance.
///
/// Holds the current configuration, size, cached layout, gesture state and
/// the two thumb transitions. Every method takes `&self`.
pub struct BarSlider {
    inner: State<SliderInner>,
}

impl BarSlider {
    /// Creates a slider.
    ///
    /// The enable transition starts settled, so a slider created disabled is
    /// dimmed from its first frame.
    pub fn new(args: BarSliderArgs) -> Result<Self, SliderError> {
        args.validate()?;
        let gradient = args.gradient()?;
        let enabled = if args.is_interactive() { 1.0 } else { 0.0 };
        debug!(
            value = args.value,
            interactive = args.is_interactive(),
            colors = args.gradient_colors.len(),
            "bar slider created"
        );
        let inner = SliderInner {
            enable: Transition::new(enabled, args.enable_duration, Easing::EaseInOut),
            press: Transition::new(0.0, args.press_duration, Easing::FastOutSlowIn),
            args,
            gradient,
            size: DpSize::ZERO,
            layout: None,
            interaction: InteractionState::default(),
            attached: true,
            needs_paint: true,
        };
        Ok(Self {
            inner: State::new(inner),
        })
    }

    /// Replaces the configuration.
    ///
    /// A rejected configuration leaves the previous one in place. Losing
    /// `on_change` mid-interaction drops the interaction without notifying.
    pub fn update(&self, args: BarSliderArgs) -> Result<(), SliderError> {
        let gradient = match args.validate().and_then(|()| args.gradient()) {
            Ok(gradient) => gradient,
            Err(err) => {
                warn!(%err, "rejecting bar slider configuration");
                return Err(err);
            }
        };

        self.inner.with_mut(|inner| {
            if inner.args == args {
                return;
            }
            if inner.args.layout_differs(&args) {
                inner.layout = None;
            }
            if !args.is_interactive() {
                inner.reset_interaction();
            }
            inner.enable.set_duration(args.enable_duration);
            inner.press.set_duration(args.press_duration);
            inner
                .enable
                .set_target(if args.is_interactive() { 1.0 } else { 0.0 });
            trace!(value = args.value, "bar slider configuration updated");
            inner.args = args;
            inner.gradient = gradient;
            inner.needs_paint = true;
        });
        Ok(())
    }

    /// Returns a copy of the current configuration.
    pub fn args(&self) -> BarSliderArgs {
        self.inner.with(|inner| inner.args.clone())
    }

    /// Sets the size assigned by the host's layout pass.
    pub fn set_size(&self, size: DpSize) {
        let size = DpSize::new(size.width.max(Dp::ZERO), size.height.max(Dp::ZERO));
        self.inner.with_mut(|inner| {
            if inner.size != size {
                inner.size = size;
                inner.layout = None;
                inner.needs_paint = true;
            }
        });
    }

    /// Current size.
    pub fn size(&self) -> DpSize {
        self.inner.with(|inner| inner.size)
    }

    /// Track layout for the current size and configuration.
    pub fn layout(&self) -> TrackLayout {
        self.inner.with_mut(|inner| inner.layout())
    }

    /// Paints bars then thumb with the track origin at `offset`.
    pub fn paint(&self, canvas: &mut dyn Canvas, offset: DpPosition) {
        self.inner.with_mut(|inner| {
            let layout = inner.layout();
            let thumb = thumb::resolve_thumb(
                &inner.args,
                &layout,
                &inner.gradient,
                inner.enable.value(),
                inner.press.value(),
            );
            render::paint_slider(canvas, offset, &layout, &inner.gradient, &thumb);
            inner.needs_paint = false;
        });
    }

    /// Advances both thumb transitions. Returns `true` if either moved.
    pub fn advance(&self, elapsed: Duration) -> bool {
        self.inner.with_mut(|inner| {
            let enable = inner.enable.advance(elapsed);
            let press = inner.press.advance(elapsed);
            let moved = enable || press;
            if moved {
                inner.needs_paint = true;
            }
            moved
        })
    }

    /// Feeds a pointer event in track-local coordinates.
    ///
    /// Returns `true` if the slider consumed it.
    pub fn handle_pointer(&self, event: &PointerEvent) -> bool {
        dispatch_pointer(&self.inner.downgrade(), event)
    }

    /// Returns a handle the host can route pointer events through without
    /// keeping the slider alive.
    pub fn pointer_handle(&self) -> PointerHandle {
        PointerHandle {
            inner: self.inner.downgrade(),
        }
    }

    /// Marks the slider as torn down.
    ///
    /// Any active interaction is reset without notifying, and later pointer
    /// events are ignored.
    pub fn detach(&self) {
        self.inner.with_mut(|inner| {
            if inner.attached {
                debug!("bar slider detached");
            }
            inner.attached = false;
            inner.reset_interaction();
        });
    }

    /// Whether the slider is still attached.
    pub fn is_attached(&self) -> bool {
        self.inner.with(|inner| inner.attached)
    }

    /// Whether `position`, in track-local coordinates, lands on the slider.
    pub fn hit_test(&self, position: DpPosition) -> bool {
        self.inner.with(|inner| {
            DpRect::from_position_size(DpPosition::ZERO, inner.size).contains(position)
        })
    }

    /// Narrowest width the slider can usefully take.
    pub fn min_intrinsic_width(&self, _height: Dp) -> Dp {
        self.inner.with(|inner| layout::min_intrinsic_width(&inner.args))
    }

    /// Width the slider prefers. Same as the minimum.
    pub fn max_intrinsic_width(&self, height: Dp) -> Dp {
        self.min_intrinsic_width(height)
    }

    /// Height the slider needs at `width`.
    pub fn min_intrinsic_height(&self, width: Dp) -> Dp {
        self.inner
            .with(|inner| layout::intrinsic_height(&inner.args, Some(width)))
    }

    /// Height the slider prefers at `width`. Same as the minimum.
    pub fn max_intrinsic_height(&self, width: Dp) -> Dp {
        self.min_intrinsic_height(width)
    }

    /// Size the slider would take under `constraint`, without changing it.
    pub fn dry_layout(&self, constraint: Constraint) -> DpSize {
        self.inner
            .with(|inner| layout::dry_layout(&inner.args, constraint))
    }

    /// Whether something changed since the last [`BarSlider::paint`].
    pub fn needs_paint(&self) -> bool {
        self.inner.with(|inner| inner.needs_paint)
    }

    /// Whether a thumb transition is still running.
    pub fn is_animating(&self) -> bool {
        self.inner
            .with(|inner| inner.enable.is_animating() || inner.press.is_animating())
    }

    /// Whether pointer input is handled.
    pub fn is_interactive(&self) -> bool {
        self.inner.with(|inner| inner.args.is_interactive())
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.inner.with(|inner| inner.interaction.phase)
    }

    /// Whether an interaction is in progress.
    pub fn is_tracking(&self) -> bool {
        self.phase() == GesturePhase::Tracking
    }

    /// Unclamped running value of the active interaction, zero when idle.
    pub fn current_drag_value(&self) -> f64 {
        self.inner.with(|inner| inner.interaction.current_drag_value)
    }

    /// Thumb center in track-local coordinates.
    pub fn thumb_center(&self) -> DpPosition {
        self.inner.with_mut(|inner| {
            let value = inner.args.value;
            inner.layout().thumb_center(value)
        })
    }

    /// Eased enable progress, 1 when fully interactive.
    pub fn enable_progress(&self) -> f64 {
        self.inner.with(|inner| inner.enable.value())
    }

    /// Eased press progress, 1 when fully pressed.
    pub fn press_progress(&self) -> f64 {
        self.inner.with(|inner| inner.press.value())
    }
}

impl Drop for BarSlider {
    fn drop(&mut self) {
        self.inner.with_mut(|inner| inner.attached = false);
    }
}

/// Weak route for pointer events into a [`BarSlider`].
///
/// Events sent after the slider is dropped or detached are ignored.
#[derive(Clone)]
pub struct PointerHandle {
    inner: WeakState<SliderInner>,
}

impl PointerHandle {
    /// Feeds a pointer event. Returns `true` if the slider consumed it.
    pub fn dispatch(&self, event: &PointerEvent) -> bool {
        dispatch_pointer(&self.inner, event)
    }

    /// Whether the slider is still alive and attached.
    pub fn is_alive(&self) -> bool {
        is_alive(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex, OnceLock};

    use huebar_ui::{DrawOp, RecordingCanvas};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Start(f64),
        Changed(f64),
        End(f64),
    }

    type Log = Arc<Mutex<Vec<Event>>>;

    fn recording_args(log: &Log) -> BarSliderArgs {
        let changed = log.clone();
        let start = log.clone();
        let end = log.clone();
        BarSliderArgs::default()
            .on_change(move |v| changed.lock().unwrap().push(Event::Changed(v)))
            .on_change_start(move |v| start.lock().unwrap().push(Event::Start(v)))
            .on_change_end(move |v| end.lock().unwrap().push(Event::End(v)))
    }

    fn sized(args: BarSliderArgs) -> BarSlider {
        huebar_ui::init_test_tracing();
        let slider = BarSlider::new(args).unwrap();
        slider.set_size(DpSize::new(Dp(200.0), Dp(36.0)));
        slider
    }

    fn at(x: f64) -> DpPosition {
        DpPosition::new(Dp(x), Dp(18.0))
    }

    fn events(log: &Log) -> Vec<Event> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn test_interaction_lifecycle() {
        let log = Log::default();
        let slider = sized(recording_args(&log).value(0.3));

        assert!(slider.handle_pointer(&PointerEvent::pressed(at(0.0))));
        assert!(slider.is_tracking());
        assert!(slider.handle_pointer(&PointerEvent::moved(at(200.0), Dp(200.0))));
        assert!(slider.handle_pointer(&PointerEvent::released(at(200.0))));

        let events = events(&log);
        let starts: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, Event::Start(_)))
            .collect();
        assert_eq!(starts, vec![&Event::Start(0.3)]);

        let changes: Vec<f64> = events
            .iter()
            .filter_map(|e| match e {
                Event::Changed(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(changes.len(), 2);
        // Press lands half a thumb radius left of the track: (0 - 8) / 200.
        assert_eq!(changes[0], 0.0);
        let last = changes[changes.len() - 1];
        assert!((last - 0.96).abs() < 1e-12);

        assert_eq!(events.last(), Some(&Event::End(last)));
        assert_eq!(events[0], Event::Start(0.3));
        assert!(!slider.is_tracking());
        assert_eq!(slider.current_drag_value(), 0.0);
    }

    #[test]
    fn test_values_are_clamped() {
        let log = Log::default();
        let slider = sized(recording_args(&log));

        slider.handle_pointer(&PointerEvent::pressed(at(108.0)));
        slider.handle_pointer(&PointerEvent::moved(at(400.0), Dp(450.0)));
        assert!(slider.current_drag_value() > 1.0);
        slider.handle_pointer(&PointerEvent::moved(at(-300.0), Dp(-900.0)));
        assert!(slider.current_drag_value() < 0.0);
        slider.handle_pointer(&PointerEvent::cancelled());

        for event in events(&log) {
            let value = match event {
                Event::Start(v) | Event::Changed(v) | Event::End(v) => v,
            };
            assert!((0.0..=1.0).contains(&value), "{event:?}");
        }
        assert_eq!(events(&log).last(), Some(&Event::End(0.0)));
    }

    #[test]
    fn test_disabled_slider_ignores_input() {
        let log = Log::default();
        let start = log.clone();
        let args = BarSliderArgs::default()
            .value(0.5)
            .on_change_start(move |v| start.lock().unwrap().push(Event::Start(v)));
        let slider = sized(args);
        assert!(!slider.is_interactive());
        assert_eq!(slider.enable_progress(), 0.0);

        assert!(!slider.handle_pointer(&PointerEvent::pressed(at(100.0))));
        assert!(!slider.handle_pointer(&PointerEvent::moved(at(150.0), Dp(50.0))));
        assert!(!slider.handle_pointer(&PointerEvent::released(at(150.0))));
        assert!(events(&log).is_empty());
        assert_eq!(slider.current_drag_value(), 0.0);
    }

    #[test]
    fn test_host_that_ignores_changes_keeps_its_value() {
        let log = Log::default();
        let slider = sized(recording_args(&log).value(0.0));
        let before = slider.thumb_center();

        slider.handle_pointer(&PointerEvent::pressed(at(150.0)));
        slider.handle_pointer(&PointerEvent::released(at(150.0)));
        assert!(!events(&log).is_empty());
        assert_eq!(slider.args().value, 0.0);
        assert_eq!(slider.thumb_center(), before);

        slider.update(recording_args(&log).value(0.5)).unwrap();
        assert_eq!(slider.thumb_center().x, Dp(100.0));
    }

    #[test]
    fn test_dropped_slider_suppresses_callbacks() {
        let log = Log::default();
        let slider = sized(recording_args(&log));
        let handle = slider.pointer_handle();

        assert!(handle.dispatch(&PointerEvent::pressed(at(108.0))));
        let fired = events(&log).len();
        drop(slider);

        assert!(!handle.is_alive());
        assert!(!handle.dispatch(&PointerEvent::released(at(108.0))));
        assert_eq!(events(&log).len(), fired);
    }

    #[test]
    fn test_detach_resets_without_notifying() {
        let log = Log::default();
        let slider = sized(recording_args(&log));

        slider.handle_pointer(&PointerEvent::pressed(at(108.0)));
        assert_eq!(slider.current_drag_value(), 0.5);
        let fired = events(&log).len();

        slider.detach();
        assert!(!slider.is_tracking());
        assert_eq!(slider.current_drag_value(), 0.0);
        assert!(!slider.handle_pointer(&PointerEvent::released(at(108.0))));
        assert_eq!(events(&log).len(), fired);
    }

    #[test]
    fn test_callbacks_stop_once_detached_mid_dispatch() {
        let log = Log::default();
        let slot: Arc<Mutex<Option<BarSlider>>> = Arc::default();
        let teardown = slot.clone();
        let changed = log.clone();
        let args = BarSliderArgs::default()
            .on_change_start(move |_| {
                if let Some(slider) = teardown.lock().unwrap().take() {
                    slider.detach();
                }
            })
            .on_change(move |v| changed.lock().unwrap().push(Event::Changed(v)));
        let slider = sized(args);
        let handle = slider.pointer_handle();
        *slot.lock().unwrap() = Some(slider);

        assert!(handle.dispatch(&PointerEvent::pressed(at(108.0))));
        assert!(events(&log).is_empty());
        assert!(!handle.is_alive());
    }

    #[test]
    fn test_losing_on_change_mid_drag_resets_silently() {
        let log = Log::default();
        let slider = sized(recording_args(&log));
        slider.handle_pointer(&PointerEvent::pressed(at(108.0)));
        let fired = events(&log).len();

        slider.update(BarSliderArgs::default()).unwrap();
        assert!(!slider.is_tracking());
        assert!(!slider.handle_pointer(&PointerEvent::released(at(108.0))));
        assert_eq!(events(&log).len(), fired);
    }

    #[test]
    fn test_second_press_is_ignored() {
        let log = Log::default();
        let slider = sized(recording_args(&log));
        slider.handle_pointer(&PointerEvent::pressed(at(108.0)));
        assert!(!slider.handle_pointer(&PointerEvent::pressed(at(8.0))));
        assert_eq!(slider.current_drag_value(), 0.5);
    }

    #[test]
    fn test_repaint_is_event_driven() {
        let slider = sized(BarSliderArgs::default().on_change(|_| {}));
        let mut canvas = RecordingCanvas::new();
        slider.paint(&mut canvas, DpPosition::ZERO);
        assert!(!slider.needs_paint());

        slider.set_size(DpSize::new(Dp(200.0), Dp(36.0)));
        assert!(!slider.needs_paint());
        assert!(!slider.advance(Duration::from_millis(16)));

        slider.handle_pointer(&PointerEvent::pressed(at(100.0)));
        assert!(slider.needs_paint());
        assert!(slider.is_animating());
        slider.paint(&mut canvas, DpPosition::ZERO);

        assert!(slider.advance(Duration::from_millis(40)));
        assert!(slider.needs_paint());
        assert!(slider.advance(Duration::from_millis(40)));
        assert_eq!(slider.press_progress(), 1.0);
        assert!(!slider.is_animating());

        slider.set_size(DpSize::new(Dp(300.0), Dp(36.0)));
        assert!(slider.needs_paint());
    }

    #[test]
    fn test_enable_transition_follows_interactivity() {
        let slider = sized(BarSliderArgs::default());
        assert_eq!(slider.enable_progress(), 0.0);

        slider
            .update(BarSliderArgs::default().on_change(|_| {}))
            .unwrap();
        assert!(slider.is_animating());
        slider.advance(BarSliderDefaults::ANIMATION_DURATION);
        assert_eq!(slider.enable_progress(), 1.0);
    }

    #[test]
    fn test_paint_sequence() {
        let slider = sized(BarSliderArgs::default().value(0.5).on_change(|_| {}));
        let layout = slider.layout();
        let mut canvas = RecordingCanvas::new();
        slider.paint(&mut canvas, DpPosition::new(Dp(10.0), Dp(20.0)));

        assert_eq!(canvas.ops[0], DrawOp::Save);
        assert_eq!(
            canvas.ops[1],
            DrawOp::Translate(DpPosition::new(Dp(10.0), Dp(20.0)))
        );
        assert_eq!(canvas.rounded_rects().len(), layout.bars.bar_count);
        let fill = canvas.ops.iter().find_map(|op| match op {
            DrawOp::FillCircle { color, center, .. } => Some((*color, *center)),
            _ => None,
        });
        assert_eq!(
            fill,
            Some((BarSliderDefaults::gradient_colors()[2], DpPosition::new(Dp(100.0), Dp(18.0))))
        );
        assert_eq!(canvas.ops.last(), Some(&DrawOp::Restore));
    }

    #[test]
    fn test_configuration_errors() {
        assert_eq!(
            BarSlider::new(BarSliderArgs::default().value(1.5)).err(),
            Some(SliderError::ValueOutOfRange(1.5))
        );
        assert_eq!(
            BarSlider::new(BarSliderArgs::default().gradient_stops(vec![0.0, 1.0])).err(),
            Some(SliderError::StopCountMismatch {
                colors: 4,
                stops: 2
            })
        );
        assert!(matches!(
            BarSlider::new(BarSliderArgs::default().gradient_colors([])).err(),
            Some(SliderError::EmptyGradient)
        ));
        assert!(matches!(
            BarSlider::new(BarSliderArgs::default().bar_width(Dp(-1.0))).err(),
            Some(SliderError::InvalidLength {
                name: "bar_width",
                ..
            })
        ));
        assert_eq!(
            BarSlider::new(
                BarSliderArgs::default()
                    .bar_width(Dp(0.0))
                    .bar_space(Dp(1e-9))
            )
            .err(),
            Some(SliderError::BarPitchTooSmall {
                pitch: 1e-9,
                min: 1.0
            })
        );

        let slider = sized(BarSliderArgs::default().value(0.25));
        assert!(slider.update(BarSliderArgs::default().value(f64::NAN)).is_err());
        assert_eq!(slider.args().value, 0.25);
    }

    #[test]
    fn test_host_feeds_value_back_from_callback() {
        let cell: Arc<OnceLock<BarSlider>> = Arc::default();
        let seen: Arc<Mutex<Vec<f64>>> = Arc::default();
        let host = cell.clone();
        let sink = seen.clone();
        let args = BarSliderArgs::default().on_change(move |value| {
            sink.lock().unwrap().push(value);
            if let Some(slider) = host.get() {
                slider.update(slider.args().value(value)).unwrap();
            }
        });
        assert!(cell.set(sized(args)).is_ok());
        let slider = cell.get().unwrap();

        assert!(slider.handle_pointer(&PointerEvent::pressed(at(108.0))));
        assert_eq!(slider.args().value, 0.5);
        assert!(slider.handle_pointer(&PointerEvent::moved(at(128.0), Dp(20.0))));

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], 0.5);
        assert!((seen[1] - 0.6).abs() < 1e-12);
        assert_eq!(slider.args().value, seen[1]);
        assert!((slider.current_drag_value() - 0.6).abs() < 1e-12);
        assert_eq!(slider.thumb_center().x, Dp(16.0) + Dp(168.0) * seen[1]);
    }

    #[test]
    fn test_layout_is_cached_until_invalidated() {
        let slider = sized(BarSliderArgs::default().on_change(|_| {}));
        let first = slider.layout();
        assert_eq!(slider.layout(), first);

        slider
            .update(BarSliderArgs::default().value(0.9).on_change(|_| {}))
            .unwrap();
        assert_eq!(slider.layout(), first);

        slider
            .update(BarSliderArgs::default().bar_width(Dp(6.0)).on_change(|_| {}))
            .unwrap();
        assert_ne!(slider.layout().bars, first.bars);
    }

    #[test]
    fn test_hit_test_and_intrinsics() {
        let slider = sized(BarSliderArgs::default());
        assert!(slider.hit_test(at(0.0)));
        assert!(slider.hit_test(at(199.0)));
        assert!(!slider.hit_test(at(201.0)));
        assert!(!slider.hit_test(DpPosition::new(Dp(10.0), Dp(-1.0))));

        assert_eq!(slider.min_intrinsic_width(Dp(36.0)), Dp(172.0));
        assert_eq!(slider.max_intrinsic_width(Dp(36.0)), Dp(172.0));
        assert_eq!(slider.min_intrinsic_height(Dp(100.0)), Dp(20.0));
        assert_eq!(slider.max_intrinsic_height(Dp(400.0)), Dp(36.0));
        assert_eq!(
            slider.dry_layout(Constraint::tight(Dp(300.0), Dp(40.0))),
            DpSize::new(Dp(300.0), Dp(40.0))
        );
        assert_eq!(slider.size(), DpSize::new(Dp(200.0), Dp(36.0)));
    }
}
