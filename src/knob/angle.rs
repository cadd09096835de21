// SPDX-License-Identifier: MPL-2.0
//! Angle math for the rotary knob.
//!
//! Angles are measured in radians with `0` pointing straight up (the knob
//! image's indicator convention) and positive values going clockwise. All
//! functions here are pure; the gesture layer feeds them center-relative
//! touch offsets and works with the results.

use crate::config::{CENTER_DEAD_ZONE, MAX_ROTATION_ANGLE};
use iced::Vector;
use std::f32::consts::{PI, TAU};

/// Computes the angle of the vector from the control center to a touch point.
///
/// Returns `None` when the offset is too short to orient the knob (a touch
/// at or immediately around the center has no defined angle); callers treat
/// that as a zero angular delta rather than producing a `NaN`.
#[must_use]
pub fn angle_to(offset: Vector) -> Option<f32> {
    if offset.x.hypot(offset.y) < CENTER_DEAD_ZONE {
        return None;
    }

    // atan2 over (x, -y) puts 0 at twelve o'clock with clockwise positive.
    Some(offset.x.atan2(-offset.y))
}

/// Wraps an angle into the canonical `(-π, π]` interval.
#[must_use]
pub fn normalize(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Returns the shortest signed rotation that takes `from` to `to`.
///
/// The result is normalized to `(-π, π]`, so consecutive touch samples that
/// cross the ±π boundary produce a small delta instead of a near-2π jump.
#[must_use]
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    normalize(to - from)
}

/// Maps a normalized value position in `[0, 1]` onto the dial's sweep.
///
/// Position 0 points the indicator at `-MAX_ROTATION_ANGLE`, position 1 at
/// `+MAX_ROTATION_ANGLE`, and position 0.5 straight up.
#[must_use]
pub fn angle_for_position(position: f32) -> f32 {
    (position - 0.5) * 2.0 * MAX_ROTATION_ANGLE
}

/// Inverse of [`angle_for_position`].
#[must_use]
pub fn position_for_angle(angle: f32) -> f32 {
    angle / (2.0 * MAX_ROTATION_ANGLE) + 0.5
}
