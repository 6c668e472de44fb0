//! Pointer input delivered by the host.
//!
//! ## Usage
//!
//! Hosts translate their mouse/touch events into [`PointerEvent`]s expressed in
//! the receiving control's local coordinates and route them to the control.
//! A single pointer stream is assumed: `Pressed`, zero or more `Moved`, then
//! `Released` or `Cancelled`.
//!
//! ```
//! use huebar_ui::{Dp, DpPosition, PointerEvent, PointerEventContent};
//!
//! let down = PointerEvent::pressed(DpPosition::new(Dp(10.0), Dp(18.0)));
//! assert!(matches!(down.content, PointerEventContent::Pressed { .. }));
//! ```

use std::time::Instant;

use crate::{Dp, DpPosition};

/// A pointer event with the time it was observed.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// When the host observed the event.
    pub timestamp: Instant,
    /// What happened.
    pub content: PointerEventContent,
}

impl PointerEvent {
    /// Wraps `content` with the current time.
    pub fn new(content: PointerEventContent) -> Self {
        Self {
            timestamp: Instant::now(),
            content,
        }
    }

    /// A primary-button press at `position`.
    pub fn pressed(position: DpPosition) -> Self {
        Self::new(PointerEventContent::Pressed {
            position,
            button: PointerButton::Primary,
        })
    }

    /// A move to `position`, `delta_x` along the primary (horizontal) axis
    /// since the previous event.
    pub fn moved(position: DpPosition, delta_x: Dp) -> Self {
        Self::new(PointerEventContent::Moved { position, delta_x })
    }

    /// A primary-button release at `position`.
    pub fn released(position: DpPosition) -> Self {
        Self::new(PointerEventContent::Released {
            position,
            button: PointerButton::Primary,
        })
    }

    /// The host abandoned the pointer stream.
    pub fn cancelled() -> Self {
        Self::new(PointerEventContent::Cancelled)
    }
}

/// The kinds of pointer events a control receives.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEventContent {
    /// A button or touch point went down (tap-down or drag-start).
    Pressed {
        /// Local position.
        position: DpPosition,
        /// Which button.
        button: PointerButton,
    },
    /// The pointer moved while down.
    Moved {
        /// Local position.
        position: DpPosition,
        /// Horizontal movement since the previous event.
        delta_x: Dp,
    },
    /// A button or touch point went up.
    Released {
        /// Local position.
        position: DpPosition,
        /// Which button.
        button: PointerButton,
    },
    /// The stream ended without a release (pointer lost, gesture stolen).
    Cancelled,
}

/// Which button or touch produced a press/release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button or the primary touch.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Middle,
}
