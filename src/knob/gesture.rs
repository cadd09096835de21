// SPDX-License-Identifier: MPL-2.0
//! Gesture tracking state machine with double-tap detection.
//!
//! The tracker advances through two states, idle and tracking, driven by
//! discrete touch events. While tracking it records the most recent touch
//! angle so each move can report the shortest signed angular delta since the
//! previous sample. Timestamps are injected by the caller, which keeps every
//! transition a plain function of its inputs.

use crate::config::{DOUBLE_TAP_RADIUS, DOUBLE_TAP_WINDOW};
use crate::knob::angle;
use iced::Vector;
use std::time::Instant;

/// A discrete touch input for the knob.
///
/// Positions are offsets from the control's center, in logical pixels. The
/// widget layer produces these from raw mouse and touch events; hosts with
/// their own input plumbing can synthesize them directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// The primary touch landed on the control.
    Began {
        /// Touch position relative to the control center.
        offset: Vector,
    },
    /// The primary touch moved while held.
    Moved {
        /// Touch position relative to the control center.
        offset: Vector,
    },
    /// The primary touch lifted normally.
    Ended,
    /// The gesture was interrupted by the host (e.g. the window lost the
    /// touch). Equivalent to [`TouchEvent::Ended`] except that it can never
    /// complete a double-tap.
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Tracking {
        /// Most recently recorded touch angle; `None` until the touch has
        /// been far enough from the center to have one.
        angle: Option<f32>,
        /// Whether this gesture's press completed a double-tap.
        double_tap: bool,
    },
}

/// The {idle, tracking} gesture machine.
#[derive(Debug, Clone, Copy)]
pub struct GestureTracker {
    phase: Phase,
    last_press: Option<(Instant, Vector)>,
}

impl GestureTracker {
    /// Starts tracking a gesture that pressed at `offset`.
    ///
    /// The press counts as the second tap of a double-tap when the previous
    /// press happened within [`DOUBLE_TAP_WINDOW`] and [`DOUBLE_TAP_RADIUS`]
    /// of it. A detected double-tap consumes the press record, so a third
    /// quick tap starts a fresh count.
    pub fn begin(&mut self, offset: Vector, at: Instant) {
        let double_tap = self.last_press.is_some_and(|(pressed_at, pressed_offset)| {
            at.duration_since(pressed_at) < DOUBLE_TAP_WINDOW
                && distance(pressed_offset, offset) < DOUBLE_TAP_RADIUS
        });

        self.last_press = if double_tap { None } else { Some((at, offset)) };
        self.phase = Phase::Tracking {
            angle: angle::angle_to(offset),
            double_tap,
        };
    }

    /// Advances the tracking angle for a move and returns the angular delta
    /// since the previous sample, when one can be computed.
    ///
    /// Returns `None` while idle, for moves at the control center, and for
    /// the first sample after a gesture began at the center.
    pub fn movement(&mut self, offset: Vector) -> Option<f32> {
        let Phase::Tracking { angle, .. } = &mut self.phase else {
            return None;
        };

        let new_angle = angle::angle_to(offset)?;
        let delta = angle.map(|previous| angle::shortest_delta(previous, new_angle));
        *angle = Some(new_angle);
        delta
    }

    /// Ends the gesture, reporting whether it completed a double-tap.
    pub fn end(&mut self) -> bool {
        let double_tap = matches!(
            self.phase,
            Phase::Tracking {
                double_tap: true,
                ..
            }
        );
        self.phase = Phase::Idle;
        double_tap
    }

    /// Aborts the gesture without double-tap detection.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Returns whether a gesture is currently in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Tracking { .. })
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            last_press: None,
        }
    }
}

fn distance(a: Vector, b: Vector) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}
