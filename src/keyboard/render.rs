// SPDX-License-Identifier: GPL-3.0-only

//! Rendering of the on-screen keyboard with libcosmic widgets.
//!
//! Keys are rendered as buttons sized in multiples of a base unit derived
//! from the surface dimensions, arranged into rows and stacked into the
//! keyboard surface. Action keys (backspace, enter, space) render system
//! icons; everything else renders its label as text.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, icon};
use cosmic::Element;

use crate::keyboard::layout::{Key, KeyAction, KeyRow, KeyboardLayout};
use crate::keyboard::message::KeyboardMessage;
use crate::keyboard::widget::KeyStroke;

/// Spacing between keys and between rows in pixels.
const KEY_SPACING: f32 = 4.0;

/// Padding around the whole keyboard surface in pixels.
const PANEL_PADDING: f32 = 8.0;

/// Icon size for action-key glyphs.
const ACTION_ICON_SIZE: u16 = 16;

/// Calculates the base key size from the surface dimensions.
///
/// The base unit is the smaller of the width-based and height-based unit so
/// the whole arrangement fits the surface. Returns a minimum of 1.0 to
/// avoid degenerate sizes.
pub fn calculate_base_unit(
    surface_width: f32,
    surface_height: f32,
    max_row_width: f32,
    row_count: usize,
) -> f32 {
    if max_row_width <= 0.0 || row_count == 0 || surface_width <= 0.0 || surface_height <= 0.0 {
        return 1.0;
    }

    let width_based_unit = surface_width / max_row_width;
    let height_based_unit = surface_height / row_count as f32;

    width_based_unit.min(height_based_unit).max(1.0)
}

/// Renders a single key as a button element.
pub fn render_key<'a>(key: &Key, base_unit: f32) -> Element<'a, KeyboardMessage> {
    let width = base_unit * key.width;
    let height = base_unit;

    let stroke = KeyStroke::for_key(key);

    button::custom(
        container(render_label(key))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    )
    .on_press(KeyboardMessage::KeyPressed(stroke))
    .class(cosmic::style::Button::Standard)
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .into()
}

/// Renders a key label as text, or as a system icon for action keys.
pub fn render_label<'a>(key: &Key) -> Element<'a, KeyboardMessage> {
    let icon_name = match key.action {
        KeyAction::Backspace => Some("edit-delete-symbolic"),
        KeyAction::Enter => Some("go-next-symbolic"),
        KeyAction::Space => Some("keyboard-spacebar-symbolic"),
        KeyAction::Text => None,
    };

    match icon_name {
        Some(name) => icon::from_name(name)
            .size(ACTION_ICON_SIZE)
            .symbolic(true)
            .into(),
        None => widget::text::body(key.label.clone()).into(),
    }
}

/// Renders a row of keys as a horizontal layout, centered on the surface.
pub fn render_row<'a>(row: &KeyRow, base_unit: f32) -> Element<'a, KeyboardMessage> {
    let mut row_widget = widget::row::row().spacing(KEY_SPACING);

    for key in &row.keys {
        row_widget = row_widget.push(render_key(key, base_unit));
    }

    container(row_widget)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}

/// Renders a complete key arrangement for the given surface size.
pub fn render_keyboard<'a>(
    layout: &KeyboardLayout,
    surface_width: f32,
    surface_height: f32,
) -> Element<'a, KeyboardMessage> {
    let available_width = surface_width - PANEL_PADDING * 2.0;
    let spacing_height = KEY_SPACING * layout.rows.len().saturating_sub(1) as f32;
    let available_height = surface_height - PANEL_PADDING * 2.0 - spacing_height;

    let base_unit = calculate_base_unit(
        available_width,
        available_height,
        layout.max_row_width(),
        layout.rows.len(),
    );

    let mut column = widget::column::column().spacing(KEY_SPACING);
    for row in &layout.rows {
        column = column.push(render_row(row, base_unit));
    }

    container(column)
        .width(Length::Fill)
        .padding(PANEL_PADDING)
        .align_x(Alignment::Center)
        .into()
}

// ============================================================================
// Tests
// ============================================================================
