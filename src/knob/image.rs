// SPDX-License-Identifier: MPL-2.0
//! Per-state knob imagery.
//!
//! The knob is drawn from caller-supplied images keyed by an explicit control
//! state. Handles are cheap to clone and reference-counted; the widget holds
//! non-exclusive references and never mutates the underlying pixels.

use iced::widget::image;

/// The control states a knob image can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// The resting state.
    Normal,
    /// The control is actively being touched.
    Highlighted,
    /// The control is disabled.
    Disabled,
}

/// Associative store of knob images by control state.
///
/// Assigning an image fully supersedes the previous one for that state.
/// Images for the highlighted and disabled states are optional refinements;
/// without a normal-state image the knob renders nothing, which is the
/// documented degraded appearance rather than an error.
#[derive(Debug, Clone, Default)]
pub struct KnobImages {
    normal: Option<image::Handle>,
    highlighted: Option<image::Handle>,
    disabled: Option<image::Handle>,
}

impl KnobImages {
    /// Assigns (or clears, with `None`) the image for a control state.
    pub fn set(&mut self, state: ControlState, image: Option<image::Handle>) {
        *self.slot_mut(state) = image;
    }

    /// Returns the image assigned to a control state, if any.
    #[must_use]
    pub fn get(&self, state: ControlState) -> Option<&image::Handle> {
        self.slot(state).as_ref()
    }

    /// Resolves the image to actually render.
    ///
    /// Priority chain: a disabled control with a disabled image uses it; a
    /// highlighted control with a highlighted image uses it; everything else
    /// falls back to the normal image.
    #[must_use]
    pub fn resolve(&self, enabled: bool, highlighted: bool) -> Option<&image::Handle> {
        if !enabled {
            if let Some(handle) = &self.disabled {
                return Some(handle);
            }
        }

        if highlighted {
            if let Some(handle) = &self.highlighted {
                return Some(handle);
            }
        }

        self.normal.as_ref()
    }

    fn slot(&self, state: ControlState) -> &Option<image::Handle> {
        match state {
            ControlState::Normal => &self.normal,
            ControlState::Highlighted => &self.highlighted,
            ControlState::Disabled => &self.disabled,
        }
    }

    fn slot_mut(&mut self, state: ControlState) -> &mut Option<image::Handle> {
        match state {
            ControlState::Normal => &mut self.normal,
            ControlState::Highlighted => &mut self.highlighted,
            ControlState::Disabled => &mut self.disabled,
        }
    }
}
