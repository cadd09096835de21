// SPDX-License-Identifier: MPL-2.0
//! The rotary knob control.
//!
//! [`RotaryKnob`] owns the knob's state (value range, per-state images,
//! behavior flags, and the gesture machine) and is the piece applications
//! keep in their model. Feed it the [`TouchEvent`]s produced by the widget
//! layer and it answers with an [`Effect`] telling you whether the value
//! changed in a way observers should hear about.

pub mod angle;
pub mod animation;
pub mod gesture;
pub mod image;
pub mod value;

pub use gesture::TouchEvent;
pub use image::ControlState;

use crate::config::MAX_ROTATION_ANGLE;
use animation::RotationAnimation;
use gesture::GestureTracker;
use iced::widget::image::Handle;
use image::KnobImages;
use std::time::Instant;
use value::ValueRange;

/// The observable outcome of handling a touch event.
///
/// A value-changed effect is the control's only notification; rendering-only
/// changes (highlight and enabled toggles) and programmatic setters never
/// produce one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Nothing to report.
    None,
    /// The value changed in a way observers should be told about, carrying
    /// the current value.
    ValueChanged(f32),
}

/// A rotary knob control.
///
/// Operation is similar to a slider: the control has a minimum, maximum, and
/// current value, and reports changes while the user turns the knob. Two
/// images drive its appearance: an optional background, and a knob image
/// with its position indicator pointing up, rotated as the value changes.
/// Double-tapping resets the control to its default value; the
/// `resets_to_default` flag disables that.
///
/// At least the normal-state knob image must be set for the control to be
/// visible; without one it renders nothing.
#[derive(Debug, Clone)]
pub struct RotaryKnob {
    range: ValueRange,
    images: KnobImages,
    background: Option<Handle>,
    continuous: bool,
    resets_to_default: bool,
    enabled: bool,
    tracker: GestureTracker,
    animation: Option<RotationAnimation>,
}

impl RotaryKnob {
    /// Creates a knob with the default `[0, 1]` range, centered at 0.5.
    #[must_use]
    pub fn new() -> Self {
        Self {
            range: ValueRange::default(),
            images: KnobImages::default(),
            background: None,
            continuous: true,
            resets_to_default: true,
            enabled: true,
            tracker: GestureTracker::default(),
            animation: None,
        }
    }

    // ----------------------------------------------------------------------
    // Value and range
    // ----------------------------------------------------------------------

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.range.value()
    }

    /// Sets the current value, clamped into range, snapping the dial.
    pub fn set_value(&mut self, value: f32) {
        self.set_value_animated(value, false);
    }

    /// Sets the current value, clamped into range.
    ///
    /// The stored value updates immediately either way; with `animated` the
    /// rendered rotation eases from its current angle to the new one instead
    /// of snapping.
    pub fn set_value_animated(&mut self, value: f32, animated: bool) {
        let from = self.rotation();
        self.range.set_value(value);
        self.animation = animated.then(|| {
            RotationAnimation::new(
                from,
                angle::angle_for_position(self.range.position()),
                Instant::now(),
            )
        });
    }

    /// Returns the minimum value.
    #[must_use]
    pub fn minimum_value(&self) -> f32 {
        self.range.minimum()
    }

    /// Sets the minimum value.
    ///
    /// The stored value and default value re-clamp against the new range
    /// immediately, and the dial snaps to the re-clamped value.
    pub fn set_minimum_value(&mut self, minimum: f32) {
        self.range.set_minimum(minimum);
        self.animation = None;
    }

    /// Returns the maximum value.
    #[must_use]
    pub fn maximum_value(&self) -> f32 {
        self.range.maximum()
    }

    /// Sets the maximum value.
    ///
    /// The stored value and default value re-clamp against the new range
    /// immediately, and the dial snaps to the re-clamped value.
    pub fn set_maximum_value(&mut self, maximum: f32) {
        self.range.set_maximum(maximum);
        self.animation = None;
    }

    /// Returns the value a double-tap resets to.
    #[must_use]
    pub fn default_value(&self) -> f32 {
        self.range.default_value()
    }

    /// Sets the double-tap reset target, clamped into range.
    pub fn set_default_value(&mut self, default_value: f32) {
        self.range.set_default_value(default_value);
    }

    // ----------------------------------------------------------------------
    // Behavior flags
    // ----------------------------------------------------------------------

    /// Returns whether every move during a gesture reports a change.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Sets whether changes are reported on every move (`true`) or once when
    /// the gesture ends (`false`).
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    /// Returns whether a double-tap resets the control.
    #[must_use]
    pub fn resets_to_default(&self) -> bool {
        self.resets_to_default
    }

    /// Sets whether a double-tap resets the control to its default value.
    pub fn set_resets_to_default(&mut self, resets_to_default: bool) {
        self.resets_to_default = resets_to_default;
    }

    /// Returns whether the control accepts input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the control.
    ///
    /// Disabling only changes which image renders and stops the widget from
    /// feeding input; disabling mid-gesture quietly abandons the gesture.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.tracker.cancel();
        }
    }

    /// Returns whether a touch is actively turning the knob.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.tracker.is_tracking()
    }

    // ----------------------------------------------------------------------
    // Imagery
    // ----------------------------------------------------------------------

    /// Returns the background image drawn behind the knob.
    #[must_use]
    pub fn background_image(&self) -> Option<&Handle> {
        self.background.as_ref()
    }

    /// Sets (or clears) the background image drawn behind the knob.
    pub fn set_background_image(&mut self, image: Option<Handle>) {
        self.background = image;
    }

    /// Assigns (or clears) the knob image for a control state.
    ///
    /// The image should have its position indicator at the top; it is
    /// rotated as the value changes, so a round image works best.
    pub fn set_knob_image(&mut self, state: ControlState, image: Option<Handle>) {
        self.images.set(state, image);
    }

    /// Returns the knob image assigned to a control state, if any.
    #[must_use]
    pub fn knob_image_for_state(&self, state: ControlState) -> Option<&Handle> {
        self.images.get(state)
    }

    /// Returns the image currently used to draw the knob, resolved from the
    /// per-state images and the enabled/highlighted flags.
    #[must_use]
    pub fn current_knob_image(&self) -> Option<&Handle> {
        self.images.resolve(self.enabled, self.is_highlighted())
    }

    // ----------------------------------------------------------------------
    // Rendering support
    // ----------------------------------------------------------------------

    /// Returns the rotation to render the knob image with, in radians.
    ///
    /// While an animated set is in flight this interpolates toward the
    /// value's angle; otherwise it is the value's angle directly.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        let now = Instant::now();
        match &self.animation {
            Some(animation) if !animation.is_finished(now) => animation.angle(now),
            _ => angle::angle_for_position(self.range.position()),
        }
    }

    /// Returns whether a rotation transition is still in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| !animation.is_finished(Instant::now()))
    }

    // ----------------------------------------------------------------------
    // Touch handling
    // ----------------------------------------------------------------------

    /// Advances the control's gesture machine with a touch event.
    ///
    /// Notification policy: while `continuous`, every move during a gesture
    /// yields [`Effect::ValueChanged`]; otherwise a single effect fires when
    /// the gesture ends (or is cancelled). A double-tap ending with
    /// `resets_to_default` set animates back to the default value and yields
    /// exactly one effect in place of the end-of-gesture one, overriding
    /// whatever the second tap's drag did.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Effect {
        match event {
            TouchEvent::Began { offset } => {
                self.tracker.begin(offset, Instant::now());
                Effect::None
            }
            TouchEvent::Moved { offset } => {
                if !self.tracker.is_tracking() {
                    return Effect::None;
                }

                if let Some(delta) = self.tracker.movement(offset) {
                    let delta_value = delta / (2.0 * MAX_ROTATION_ANGLE) * self.range.span();
                    self.range.set_value(self.range.value() + delta_value);
                    self.animation = None;
                }

                if self.continuous {
                    Effect::ValueChanged(self.range.value())
                } else {
                    Effect::None
                }
            }
            TouchEvent::Ended => {
                let double_tap = self.tracker.end();

                if double_tap && self.resets_to_default {
                    self.set_value_animated(self.range.default_value(), true);
                    Effect::ValueChanged(self.range.value())
                } else if !self.continuous {
                    Effect::ValueChanged(self.range.value())
                } else {
                    Effect::None
                }
            }
            TouchEvent::Cancelled => {
                self.tracker.cancel();

                if self.continuous {
                    Effect::None
                } else {
                    Effect::ValueChanged(self.range.value())
                }
            }
        }
    }
}

impl Default for RotaryKnob {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Vector;

    fn at_angle(radians: f32) -> Vector {
        Vector::new(40.0 * radians.sin(), -40.0 * radians.cos())
    }

    fn count_changes(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, Effect::ValueChanged(_)))
            .count()
    }

    #[test]
    fn new_knob_has_documented_defaults() {
        let knob = RotaryKnob::new();
        assert_abs_diff_eq!(knob.minimum_value(), 0.0);
        assert_abs_diff_eq!(knob.maximum_value(), 1.0);
        assert_abs_diff_eq!(knob.value(), 0.5);
        assert_abs_diff_eq!(knob.default_value(), 0.5);
        assert!(knob.is_continuous());
        assert!(knob.resets_to_default());
        assert!(knob.is_enabled());
        assert!(!knob.is_highlighted());
        assert!(knob.background_image().is_none());
        assert!(knob.current_knob_image().is_none());
    }

    #[test]
    fn programmatic_set_clamps_and_stays_silent() {
        let mut knob = RotaryKnob::new();
        knob.set_value(7.0);
        assert_abs_diff_eq!(knob.value(), 1.0);

        knob.set_value(-7.0);
        assert_abs_diff_eq!(knob.value(), 0.0);
    }

    #[test]
    fn dragging_turns_the_value() {
        let mut knob = RotaryKnob::new();
        knob.set_maximum_value(10.0);
        knob.set_value(5.0);

        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        let effect = knob.handle_touch(TouchEvent::Moved {
            offset: at_angle(0.2),
        });

        // +0.2 rad over the 1.5π sweep of a 10-wide range.
        let expected = 5.0 + 0.2 / (2.0 * MAX_ROTATION_ANGLE) * 10.0;
        assert_abs_diff_eq!(knob.value(), expected, epsilon = 1e-4);
        assert_eq!(effect, Effect::ValueChanged(knob.value()));
    }

    #[test]
    fn counter_clockwise_drag_decreases_the_value() {
        let mut knob = RotaryKnob::new();
        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.5),
        });
        knob.handle_touch(TouchEvent::Moved {
            offset: at_angle(0.1),
        });
        assert!(knob.value() < 0.5);
    }

    #[test]
    fn value_never_leaves_the_range_while_winding() {
        let mut knob = RotaryKnob::new();
        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });

        // Wind clockwise for two full revolutions in small steps.
        let mut current = 0.0;
        for _ in 0..80 {
            current += 0.157;
            knob.handle_touch(TouchEvent::Moved {
                offset: at_angle(current),
            });
            assert!(knob.value() >= 0.0 && knob.value() <= 1.0);
        }
        assert_abs_diff_eq!(knob.value(), 1.0);
    }

    #[test]
    fn continuous_mode_reports_every_move() {
        let mut knob = RotaryKnob::new();
        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });

        let effects: Vec<Effect> = (1..=5)
            .map(|step| {
                knob.handle_touch(TouchEvent::Moved {
                    offset: at_angle(step as f32 * 0.1),
                })
            })
            .collect();
        let end = knob.handle_touch(TouchEvent::Ended);

        assert_eq!(count_changes(&effects), 5);
        assert_eq!(end, Effect::None);
    }

    #[test]
    fn non_continuous_mode_reports_once_at_the_end() {
        let mut knob = RotaryKnob::new();
        knob.set_continuous(false);

        let mut effects = vec![knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        })];
        for step in 1..=5 {
            effects.push(knob.handle_touch(TouchEvent::Moved {
                offset: at_angle(step as f32 * 0.1),
            }));
        }
        assert_eq!(count_changes(&effects), 0);

        let end = knob.handle_touch(TouchEvent::Ended);
        assert_eq!(end, Effect::ValueChanged(knob.value()));
    }

    #[test]
    fn cancel_behaves_like_end_without_double_tap() {
        let mut knob = RotaryKnob::new();
        knob.set_continuous(false);

        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        knob.handle_touch(TouchEvent::Moved {
            offset: at_angle(0.3),
        });
        let effect = knob.handle_touch(TouchEvent::Cancelled);

        assert_eq!(effect, Effect::ValueChanged(knob.value()));
        assert!(!knob.is_highlighted());
    }

    #[test]
    fn cancel_in_continuous_mode_is_silent() {
        let mut knob = RotaryKnob::new();
        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        assert_eq!(knob.handle_touch(TouchEvent::Cancelled), Effect::None);
    }

    #[test]
    fn double_tap_resets_to_default_with_one_notification() {
        let mut knob = RotaryKnob::new();
        knob.set_continuous(false);
        knob.set_value(0.9);

        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        knob.handle_touch(TouchEvent::Ended);

        let mut effects = vec![knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        })];
        // The second tap drags before lifting; the reset overrides it.
        effects.push(knob.handle_touch(TouchEvent::Moved {
            offset: at_angle(0.6),
        }));
        effects.push(knob.handle_touch(TouchEvent::Ended));

        assert_eq!(count_changes(&effects), 1);
        assert_eq!(effects[2], Effect::ValueChanged(0.5));
        assert_abs_diff_eq!(knob.value(), 0.5);
        assert!(knob.is_animating());
    }

    #[test]
    fn double_tap_is_ignored_when_resets_are_disabled() {
        let mut knob = RotaryKnob::new();
        knob.set_resets_to_default(false);
        knob.set_value(0.9);

        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        knob.handle_touch(TouchEvent::Ended);
        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        let end = knob.handle_touch(TouchEvent::Ended);

        assert_eq!(end, Effect::None);
        assert_abs_diff_eq!(knob.value(), 0.9);
    }

    #[test]
    fn highlight_follows_the_gesture() {
        let mut knob = RotaryKnob::new();
        assert!(!knob.is_highlighted());

        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        assert!(knob.is_highlighted());

        knob.handle_touch(TouchEvent::Ended);
        assert!(!knob.is_highlighted());
    }

    #[test]
    fn moves_without_a_gesture_are_ignored() {
        let mut knob = RotaryKnob::new();
        let effect = knob.handle_touch(TouchEvent::Moved {
            offset: at_angle(1.0),
        });
        assert_eq!(effect, Effect::None);
        assert_abs_diff_eq!(knob.value(), 0.5);
    }

    #[test]
    fn center_touches_never_move_the_value() {
        let mut knob = RotaryKnob::new();
        knob.handle_touch(TouchEvent::Began {
            offset: Vector::new(0.0, 0.0),
        });
        knob.handle_touch(TouchEvent::Moved {
            offset: Vector::new(0.0, 0.0),
        });
        assert_abs_diff_eq!(knob.value(), 0.5);
        assert!(knob.value().is_finite());
    }

    #[test]
    fn rotation_tracks_the_value() {
        let mut knob = RotaryKnob::new();

        knob.set_value(0.0);
        assert_abs_diff_eq!(knob.rotation(), -MAX_ROTATION_ANGLE);

        knob.set_value(0.5);
        assert_abs_diff_eq!(knob.rotation(), 0.0);

        knob.set_value(1.0);
        assert_abs_diff_eq!(knob.rotation(), MAX_ROTATION_ANGLE);
    }

    #[test]
    fn animated_set_updates_the_value_immediately() {
        let mut knob = RotaryKnob::new();
        knob.set_value_animated(1.0, true);

        assert_abs_diff_eq!(knob.value(), 1.0);
        assert!(knob.is_animating());
        // The dial starts turning from the old angle.
        assert!(knob.rotation() < MAX_ROTATION_ANGLE);
    }

    #[test]
    fn plain_set_snaps_the_dial() {
        let mut knob = RotaryKnob::new();
        knob.set_value_animated(1.0, false);
        assert!(!knob.is_animating());
        assert_abs_diff_eq!(knob.rotation(), MAX_ROTATION_ANGLE);
    }

    #[test]
    fn dragging_cancels_an_animation() {
        let mut knob = RotaryKnob::new();
        knob.set_value_animated(1.0, true);
        assert!(knob.is_animating());

        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        knob.handle_touch(TouchEvent::Moved {
            offset: at_angle(0.1),
        });
        assert!(!knob.is_animating());
    }

    #[test]
    fn disabling_abandons_an_active_gesture() {
        let mut knob = RotaryKnob::new();
        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        assert!(knob.is_highlighted());

        knob.set_enabled(false);
        assert!(!knob.is_highlighted());
    }

    #[test]
    fn current_image_follows_the_highlight() {
        let mut knob = RotaryKnob::new();
        let normal = Handle::from_rgba(8, 8, vec![0u8; 8 * 8 * 4]);
        let highlighted = Handle::from_rgba(9, 9, vec![0u8; 9 * 9 * 4]);
        knob.set_knob_image(ControlState::Normal, Some(normal.clone()));
        knob.set_knob_image(ControlState::Highlighted, Some(highlighted.clone()));

        assert_eq!(knob.current_knob_image(), Some(&normal));

        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        assert_eq!(knob.current_knob_image(), Some(&highlighted));

        knob.handle_touch(TouchEvent::Ended);
        assert_eq!(knob.current_knob_image(), Some(&normal));
    }

    #[test]
    fn shrinking_the_range_reclamps_immediately() {
        let mut knob = RotaryKnob::new();
        knob.set_maximum_value(10.0);
        knob.set_value(8.0);

        knob.set_maximum_value(4.0);
        assert_abs_diff_eq!(knob.value(), 4.0);
        assert_abs_diff_eq!(knob.default_value(), 0.5);
    }

    #[test]
    fn degenerate_range_stays_finite_under_drags() {
        let mut knob = RotaryKnob::new();
        knob.set_maximum_value(0.0);

        knob.handle_touch(TouchEvent::Began {
            offset: at_angle(0.0),
        });
        knob.handle_touch(TouchEvent::Moved {
            offset: at_angle(1.0),
        });

        assert!(knob.value().is_finite());
        assert_abs_diff_eq!(knob.value(), 0.0);
        assert!(knob.rotation().is_finite());
    }
}
