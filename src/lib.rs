// SPDX-License-Identifier: MPL-2.0
//! `iced_rotary_knob` provides a rotary knob control for the Iced GUI
//! toolkit.
//!
//! Operation of the control is similar to a slider: it has a minimum,
//! maximum, and current value, and reports changes as the user turns the
//! knob with a mouse or finger. It renders from two images, an optional
//! background and a knob image whose position indicator points up, and
//! resets to its default value on a double-tap.
//!
//! The crate splits into a toolkit-independent control
//! ([`RotaryKnob`], kept in your application state) and a widget
//! ([`widget::Knob`], built per view) that feeds it input:
//!
//! ```no_run
//! use iced_rotary_knob::{knob, Effect, RotaryKnob, TouchEvent};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Volume(TouchEvent),
//! }
//!
//! struct App {
//!     volume: RotaryKnob,
//! }
//!
//! impl App {
//!     fn update(&mut self, message: Message) {
//!         match message {
//!             Message::Volume(event) => match self.volume.handle_touch(event) {
//!                 Effect::ValueChanged(value) => println!("volume: {value:.2}"),
//!                 Effect::None => {}
//!             },
//!         }
//!     }
//!
//!     fn view(&self) -> iced::Element<'_, Message> {
//!         knob(&self.volume, Message::Volume).into()
//!     }
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/iced_rotary_knob/0.1.0")]

pub mod config;
pub mod knob;
pub mod widget;

#[cfg(test)]
mod test_utils;

pub use knob::{ControlState, Effect, RotaryKnob, TouchEvent};
pub use widget::{knob, Knob};
