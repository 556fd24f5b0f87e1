// SPDX-License-Identifier: GPL-3.0-only

//! On-screen keyboard for the kiosk.
//!
//! This module bundles everything keyboard-shaped:
//!
//! - **layout**: JSON layout definitions embedded in the binary, with
//!   parsing and validation.
//! - **widget**: the keyboard device — arrangement selection, text buffer,
//!   and the change/submit events it emits.
//! - **message**: the message type the rendered keys send back.
//! - **render**: libcosmic rendering of keys, rows, and the surface.
//!
//! The device is deliberately toolkit-free; only `render` touches widgets,
//! so the binding behavior is tested without a UI runtime.

pub mod layout;
pub mod message;
pub mod render;
pub mod widget;

// Re-export public API
pub use layout::{
    load_layout, validate_layout, Key, KeyAction, KeyRow, KeyboardLayout, LayoutKind, ParseError,
    ValidationIssue,
};
pub use message::KeyboardMessage;
pub use render::{calculate_base_unit, render_key, render_keyboard, render_label, render_row};
pub use widget::{KeyStroke, KeyboardEvent, OnscreenKeyboard};
