// SPDX-License-Identifier: GPL-3.0-only

//! Message types emitted by the rendered keyboard.

use crate::keyboard::widget::KeyStroke;

/// Messages emitted by the keyboard rendering functions.
///
/// These communicate user interactions back to the application, which
/// forwards them into the keyboard device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardMessage {
    /// A key was pressed. Carries the stroke the key emits.
    KeyPressed(KeyStroke),
}
