// SPDX-License-Identifier: MPL-2.0
//! Timed rotation transitions for animated value changes.
//!
//! An animation only affects the rendered rotation; the stored value updates
//! immediately when an animated set is requested. Progress is computed from a
//! caller-supplied instant so the interpolation stays testable.

use crate::config::KNOB_ANIMATION_DURATION;
use std::time::{Duration, Instant};

/// An in-flight rotation transition between two dial angles.
#[derive(Debug, Clone, Copy)]
pub struct RotationAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl RotationAnimation {
    /// Starts a transition from `from` to `to` radians at `started`.
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: KNOB_ANIMATION_DURATION,
        }
    }

    /// Returns the angle to render at `now`.
    #[must_use]
    pub fn angle(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started).as_secs_f32();
        let progress = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    /// Returns the angle the transition settles on.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Returns whether the transition has run its full duration at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= self.duration
    }
}

/// Cubic ease-in-out over normalized progress.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
