use huebar_ui::{Dp, PointerButton, PointerEventContent};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Where the gesture state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down on the control.
    #[default]
    Idle,
    /// A tap or drag owns the pointer.
    Tracking,
}

/// Per-instance gesture state. Lives as long as the control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub(super) phase: GesturePhase,
    /// Running, unclamped value of the active interaction. Zero when idle.
    pub(super) current_drag_value: f64,
}

impl InteractionState {
    /// Drops any active interaction without notifying anyone.
    pub(super) fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.current_drag_value = 0.0;
    }
}

/// A notification owed to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SliderNotification {
    /// An interaction began; carries the value before it.
    ChangeStart(f64),
    /// The value moved.
    Changed(f64),
    /// The interaction finished; carries the final value.
    ChangeEnd(f64),
}

/// What one pointer event asks of the control.
#[derive(Debug, Default, PartialEq)]
pub(super) struct GestureOutcome {
    pub notifications: SmallVec<[SliderNotification; 2]>,
    /// New press animation target, if it changed.
    pub press_target: Option<f64>,
}

impl GestureOutcome {
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty() && self.press_target.is_none()
    }
}

/// Track geometry and configuration a pointer event is interpreted against.
#[derive(Debug, Clone, Copy)]
pub(super) struct GestureContext {
    pub interactive: bool,
    /// The host's value before this event.
    pub value: f64,
    pub track_left: Dp,
    pub track_width: Dp,
    pub thumb_radius: Dp,
}

impl GestureContext {
    /// Value under a pointer at `x`, offset by half a thumb radius so the
    /// thumb does not jump when the press lands slightly off its center.
    fn value_at(&self, x: Dp) -> Option<f64> {
        if self.track_width.0 <= 0.0 {
            return None;
        }
        Some((x - self.track_left - self.thumb_radius / 2.0).0 / self.track_width.0)
    }

    fn delta_value(&self, delta_x: Dp) -> f64 {
        if self.track_width.0 <= 0.0 {
            return 0.0;
        }
        delta_x.0 / self.track_width.0
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Advances the gesture state machine by one pointer event.
///
/// Taps and drags share this entry point: whichever the host recognizes first
/// produces the `Pressed` that moves the machine to `Tracking`, and a second
/// press while tracking is ignored.
pub(super) fn handle_pointer_event(
    state: &mut InteractionState,
    event: &PointerEventContent,
    ctx: &GestureContext,
) -> GestureOutcome {
    let mut outcome = GestureOutcome::default();

    match event {
        PointerEventContent::Pressed { position, button } => {
            if !ctx.interactive || *button != PointerButton::Primary {
                return outcome;
            }
            if state.phase == GesturePhase::Tracking {
                debug!("ignoring press while an interaction is already tracking");
                return outcome;
            }

            let start = ctx.value_at(position.x).unwrap_or(ctx.value);
            state.phase = GesturePhase::Tracking;
            state.current_drag_value = start;
            trace!(start, prior = ctx.value, "slider interaction started");

            outcome
                .notifications
                .push(SliderNotification::ChangeStart(clamp_unit(ctx.value)));
            outcome
                .notifications
                .push(SliderNotification::Changed(clamp_unit(start)));
            outcome.press_target = Some(1.0);
        }
        PointerEventContent::Moved { delta_x, .. } => {
            if state.phase != GesturePhase::Tracking || !ctx.interactive {
                return outcome;
            }
            state.current_drag_value += ctx.delta_value(*delta_x);
            outcome.notifications.push(SliderNotification::Changed(clamp_unit(
                state.current_drag_value,
            )));
        }
        PointerEventContent::Released { button, .. } if *button != PointerButton::Primary => {}
        PointerEventContent::Released { .. } | PointerEventContent::Cancelled => {
            if state.phase != GesturePhase::Tracking {
                return outcome;
            }
            let end = clamp_unit(state.current_drag_value);
            trace!(end, "slider interaction finished");
            state.reset();

            if ctx.interactive {
                outcome.notifications.push(SliderNotification::ChangeEnd(end));
            }
            outcome.press_target = Some(0.0);
        }
    }

    outcome
}
