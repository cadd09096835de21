// SPDX-License-Identifier: MPL-2.0
//! Knob configuration constants.
//!
//! The control keeps no persistent settings; its configuration is the set of
//! compile-time defaults in [`defaults`], re-exported here for convenience.

pub mod defaults;

pub use defaults::*;
