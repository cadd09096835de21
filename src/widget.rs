// SPDX-License-Identifier: MPL-2.0
//! The Iced widget for the rotary knob.
//!
//! [`Knob`] renders a [`RotaryKnob`]'s background and rotated knob images
//! and translates raw mouse/touch events into [`TouchEvent`] messages. The
//! application routes those messages back into
//! [`RotaryKnob::handle_touch`] from its update function; that round trip is
//! the control's notification channel.

use crate::config::DEFAULT_KNOB_DIAMETER;
use crate::knob::{RotaryKnob, TouchEvent};
use iced::advanced::image;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, window, Element, Event, Length, Point, Radians, Rectangle, Size, Vector};

/// A widget that displays a [`RotaryKnob`] and feeds it touch input.
///
/// The widget is a thin view over the control: build one per `view` call
/// from a reference to the control in your application state.
pub struct Knob<'a, Message> {
    knob: &'a RotaryKnob,
    on_touch: Box<dyn Fn(TouchEvent) -> Message + 'a>,
    width: Length,
    height: Length,
}

impl<'a, Message> Knob<'a, Message> {
    /// Creates a widget for `knob`, mapping its touch events with
    /// `on_touch`.
    pub fn new(knob: &'a RotaryKnob, on_touch: impl Fn(TouchEvent) -> Message + 'a) -> Self {
        Self {
            knob,
            on_touch: Box::new(on_touch),
            width: Length::Fixed(DEFAULT_KNOB_DIAMETER),
            height: Length::Fixed(DEFAULT_KNOB_DIAMETER),
        }
    }

    /// Sets the width of the widget.
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height of the widget.
    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// Which pointer currently drives the gesture.
///
/// Only the first pointer to land on the control tracks it; a second finger
/// is ignored until the first lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Pointer {
    #[default]
    Idle,
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Clone, Copy, Default)]
struct State {
    pointer: Pointer,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for Knob<'_, Message>
where
    Renderer: image::Renderer<Handle = image::Handle>,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            // Keep frames coming while a rotation transition is in flight.
            if self.knob.is_animating() {
                shell.request_redraw();
            }
            return;
        }

        if !self.knob.is_enabled() {
            return;
        }

        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if state.pointer == Pointer::Idle {
                    if let Some(position) = cursor.position_over(bounds) {
                        state.pointer = Pointer::Mouse;
                        shell.publish((self.on_touch)(TouchEvent::Began {
                            offset: offset_from_center(position, bounds),
                        }));
                        shell.capture_event();
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if state.pointer == Pointer::Mouse {
                    shell.publish((self.on_touch)(TouchEvent::Moved {
                        offset: offset_from_center(*position, bounds),
                    }));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.pointer == Pointer::Mouse {
                    state.pointer = Pointer::Idle;
                    shell.publish((self.on_touch)(TouchEvent::Ended));
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.pointer == Pointer::Idle && bounds.contains(*position) {
                    state.pointer = Pointer::Finger(*id);
                    shell.publish((self.on_touch)(TouchEvent::Began {
                        offset: offset_from_center(*position, bounds),
                    }));
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if state.pointer == Pointer::Finger(*id) {
                    shell.publish((self.on_touch)(TouchEvent::Moved {
                        offset: offset_from_center(*position, bounds),
                    }));
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                if state.pointer == Pointer::Finger(*id) {
                    state.pointer = Pointer::Idle;
                    shell.publish((self.on_touch)(TouchEvent::Ended));
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.pointer == Pointer::Finger(*id) {
                    state.pointer = Pointer::Idle;
                    shell.publish((self.on_touch)(TouchEvent::Cancelled));
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let square = centered_square(layout.bounds());

        if let Some(background) = self.knob.background_image() {
            renderer.draw_image(
                image::Image {
                    handle: background.clone(),
                    filter_method: image::FilterMethod::Linear,
                    rotation: Radians(0.0),
                    border_radius: Default::default(),
                    opacity: 1.0,
                    snap: false,
                },
                square,
                *viewport,
            );
        }

        // No resolved knob image means nothing to draw; the control is
        // documented to degrade to an empty appearance.
        if let Some(handle) = self.knob.current_knob_image() {
            renderer.draw_image(
                image::Image {
                    handle: handle.clone(),
                    filter_method: image::FilterMethod::Linear,
                    rotation: Radians(self.knob.rotation()),
                    border_radius: Default::default(),
                    opacity: 1.0,
                    snap: false,
                },
                square,
                *viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if !self.knob.is_enabled() {
            return mouse::Interaction::default();
        }

        let state = tree.state.downcast_ref::<State>();
        if state.pointer != Pointer::Idle {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Theme, Renderer> From<Knob<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: image::Renderer<Handle = image::Handle> + 'a,
{
    fn from(knob: Knob<'a, Message>) -> Self {
        Self::new(knob)
    }
}

/// Helper function to create a [`Knob`] widget.
pub fn knob<'a, Message>(
    control: &'a RotaryKnob,
    on_touch: impl Fn(TouchEvent) -> Message + 'a,
) -> Knob<'a, Message> {
    Knob::new(control, on_touch)
}

fn offset_from_center(position: Point, bounds: Rectangle) -> Vector {
    position - bounds.center()
}

/// The largest square centered inside `bounds`; both images draw into it so
/// the knob rotates about the control's center.
fn centered_square(bounds: Rectangle) -> Rectangle {
    let side = bounds.width.min(bounds.height);

    Rectangle {
        x: bounds.x + (bounds.width - side) / 2.0,
        y: bounds.y + (bounds.height - side) / 2.0,
        width: side,
        height: side,
    }
}
