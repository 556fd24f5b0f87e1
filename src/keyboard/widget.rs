// SPDX-License-Identifier: GPL-3.0-only

//! The on-screen keyboard device.
//!
//! `OnscreenKeyboard` owns the current key arrangement and an internal text
//! buffer mirroring the screen's input field. The surrounding screen talks
//! to it through a minimal interface (`configure`, `text`, `set_text`) and
//! receives change/submit events from key strokes, which keeps the binding
//! logic independent of the rendering toolkit.

use crate::keyboard::layout::{self, Key, KeyAction, KeyboardLayout, LayoutKind, ParseError};

/// A key stroke delivered from the rendered keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStroke {
    /// Text to append to the buffer.
    Text(String),
    /// Remove the last character from the buffer.
    Backspace,
    /// Append a space to the buffer.
    Space,
    /// Submit the buffer.
    Enter,
}

impl KeyStroke {
    /// Builds the stroke a key emits when pressed.
    pub fn for_key(key: &Key) -> Self {
        match key.action {
            KeyAction::Text => KeyStroke::Text(key.label.clone()),
            KeyAction::Backspace => KeyStroke::Backspace,
            KeyAction::Space => KeyStroke::Space,
            KeyAction::Enter => KeyStroke::Enter,
        }
    }
}

/// Event emitted by the keyboard toward the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// The buffer changed; carries the full new text.
    Changed(String),
    /// The enter key was pressed; carries the buffer at that instant.
    Submitted(String),
}

/// On-screen keyboard state: the selected arrangement plus a text buffer.
///
/// Both arrangements are loaded up front so switching at toggle time is
/// infallible; the buffer survives a switch, so typed text is never lost.
#[derive(Debug, Clone)]
pub struct OnscreenKeyboard {
    arabic: KeyboardLayout,
    english: KeyboardLayout,
    kind: LayoutKind,
    buffer: String,
}

impl OnscreenKeyboard {
    /// Loads both embedded arrangements and starts on `initial`.
    pub fn new(initial: LayoutKind) -> Result<Self, ParseError> {
        Ok(Self {
            arabic: layout::load_layout(LayoutKind::Arabic)?,
            english: layout::load_layout(LayoutKind::English)?,
            kind: initial,
            buffer: String::new(),
        })
    }

    /// Currently selected arrangement.
    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// The layout to render for the current arrangement.
    pub fn layout(&self) -> &KeyboardLayout {
        match self.kind {
            LayoutKind::Arabic => &self.arabic,
            LayoutKind::English => &self.english,
        }
    }

    /// Switches the key arrangement in place, leaving the buffer untouched.
    pub fn configure(&mut self, kind: LayoutKind) {
        self.kind = kind;
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replaces the buffer, mirroring text typed into the physical field.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Applies a key stroke to the buffer.
    ///
    /// Returns the event the screen should react to, or `None` when the
    /// stroke had no observable effect (backspace on an empty buffer).
    pub fn apply(&mut self, stroke: KeyStroke) -> Option<KeyboardEvent> {
        match stroke {
            KeyStroke::Text(text) => {
                self.buffer.push_str(&text);
                Some(KeyboardEvent::Changed(self.buffer.clone()))
            }
            KeyStroke::Backspace => {
                if self.buffer.pop().is_some() {
                    Some(KeyboardEvent::Changed(self.buffer.clone()))
                } else {
                    None
                }
            }
            KeyStroke::Space => {
                self.buffer.push(' ');
                Some(KeyboardEvent::Changed(self.buffer.clone()))
            }
            KeyStroke::Enter => Some(KeyboardEvent::Submitted(self.buffer.clone())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
