//! Timed 0 <-> 1 transitions driven by an external clock.
//!
//! ## Usage
//!
//! The control owns one [`Transition`] per animated aspect. The host's frame
//! clock calls [`Transition::advance`] with the elapsed time; the control reads
//! the eased [`Transition::value`] when painting.

use std::time::Duration;

/// Easing curves used by the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Symmetric acceleration and deceleration, cubic-bezier(0.42, 0, 0.58, 1).
    #[default]
    EaseInOut,
    /// Quick start, long settle, cubic-bezier(0.4, 0, 0.2, 1).
    FastOutSlowIn,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn transform(self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        match self {
            Easing::Linear => x,
            Easing::EaseInOut => cubic_bezier_easing(x, 0.42, 0.0, 0.58, 1.0),
            Easing::FastOutSlowIn => cubic_bezier_easing(x, 0.4, 0.0, 0.2, 1.0),
        }
    }
}

fn cubic_bezier(t: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

fn cubic_bezier_easing(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = x;

    for _ in 0..32 {
        let mid = (lo + hi) * 0.5;
        let mid_x = cubic_bezier(mid, 0.0, x1, x2, 1.0);
        if mid_x < x {
            lo = mid;
        } else {
            hi = mid;
        }
        t = mid;
    }

    cubic_bezier(t, 0.0, y1, y2, 1.0).clamp(0.0, 1.0)
}

/// A scalar that travels between 0 and 1 over a fixed duration.
///
/// `progress` is linear in time; [`Transition::value`] applies the curve.
/// Retargeting mid-flight continues from the current progress, so a quick
/// press-release never jumps.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    progress: f64,
    target: f64,
    duration: Duration,
    curve: Easing,
}

impl Transition {
    /// Creates a transition resting at `initial` (clamped to `[0, 1]`).
    pub fn new(initial: f64, duration: Duration, curve: Easing) -> Self {
        let initial = initial.clamp(0.0, 1.0);
        Self {
            progress: initial,
            target: initial,
            duration,
            curve,
        }
    }

    /// Starts moving toward `target` (clamped to `[0, 1]`).
    ///
    /// Returns `true` if this changed the target.
    pub fn set_target(&mut self, target: f64) -> bool {
        let target = target.clamp(0.0, 1.0);
        if self.target == target {
            return false;
        }
        self.target = target;
        true
    }

    /// Moves directly to `target` without animating.
    pub fn jump_to(&mut self, target: f64) {
        let target = target.clamp(0.0, 1.0);
        self.target = target;
        self.progress = target;
    }

    /// Changes the duration used by subsequent [`Transition::advance`] calls.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Advances progress by `elapsed`.
    ///
    /// Returns `true` if the progress changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.is_animating() {
            return false;
        }
        if self.duration.is_zero() {
            self.progress = self.target;
            return true;
        }

        let step = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        if step <= 0.0 {
            return false;
        }
        self.progress = if self.target > self.progress {
            (self.progress + step).min(self.target)
        } else {
            (self.progress - step).max(self.target)
        };
        true
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The value progress is heading toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Eased progress in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.curve.transform(self.progress)
    }

    /// Returns `true` while progress has not reached the target.
    pub fn is_animating(&self) -> bool {
        self.progress != self.target
    }
}
