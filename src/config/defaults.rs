// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the knob's tuning constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Value range**: default minimum, maximum, value, and reset target
//! - **Rotation**: the dial's angular sweep and the center dead zone
//! - **Gestures**: double-tap detection thresholds
//! - **Animation**: animated value-change timing
//! - **Layout**: default widget dimensions

use std::time::Duration;

// ==========================================================================
// Value Range Defaults
// ==========================================================================

/// Default minimum value of a freshly constructed knob.
pub const DEFAULT_MINIMUM_VALUE: f32 = 0.0;

/// Default maximum value of a freshly constructed knob.
pub const DEFAULT_MAXIMUM_VALUE: f32 = 1.0;

/// Default current value (center position).
pub const DEFAULT_VALUE: f32 = 0.5;

/// Default reset target for the double-tap gesture (center position).
pub const DEFAULT_RESET_VALUE: f32 = 0.5;

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Half of the dial's angular sweep, in radians.
///
/// The knob rotates between `-MAX_ROTATION_ANGLE` (minimum value) and
/// `+MAX_ROTATION_ANGLE` (maximum value), i.e. a 270° sweep in total.
pub const MAX_ROTATION_ANGLE: f32 = 3.0 * std::f32::consts::FRAC_PI_4;

/// Radius around the control center, in logical pixels, inside which a touch
/// has no usable angle.
///
/// The vector from the center to such a touch is too short to orient the
/// knob; those touches contribute a zero angular delta instead.
pub const CENTER_DEAD_ZONE: f32 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum delay between two presses for them to count as a double-tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(350);

/// Maximum distance between two presses, in logical pixels, for them to
/// count as a double-tap.
pub const DOUBLE_TAP_RADIUS: f32 = 24.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the rotation transition played by animated value changes.
pub const KNOB_ANIMATION_DURATION: Duration = Duration::from_millis(200);

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default width and height of the knob widget, in logical pixels.
pub const DEFAULT_KNOB_DIAMETER: f32 = 80.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Value range validation
    assert!(DEFAULT_MINIMUM_VALUE <= DEFAULT_MAXIMUM_VALUE);
    assert!(DEFAULT_VALUE >= DEFAULT_MINIMUM_VALUE);
    assert!(DEFAULT_VALUE <= DEFAULT_MAXIMUM_VALUE);
    assert!(DEFAULT_RESET_VALUE >= DEFAULT_MINIMUM_VALUE);
    assert!(DEFAULT_RESET_VALUE <= DEFAULT_MAXIMUM_VALUE);

    // Rotation validation
    assert!(MAX_ROTATION_ANGLE > 0.0);
    assert!(MAX_ROTATION_ANGLE <= std::f32::consts::PI);
    assert!(CENTER_DEAD_ZONE > 0.0);

    // Gesture validation
    assert!(DOUBLE_TAP_WINDOW.as_millis() > 0);
    assert!(DOUBLE_TAP_RADIUS > 0.0);

    // Animation/layout validation
    assert!(KNOB_ANIMATION_DURATION.as_millis() > 0);
    assert!(DEFAULT_KNOB_DIAMETER > 0.0);
    assert!(DEFAULT_KNOB_DIAMETER > DOUBLE_TAP_RADIUS);
};
