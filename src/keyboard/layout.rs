// SPDX-License-Identifier: GPL-3.0-only

//! Layout definitions for the on-screen keyboard.
//!
//! Layouts are JSON documents embedded in the binary, one per supported key
//! arrangement. Loading distinguishes asset lookup, JSON syntax, and
//! semantic validation failures.

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Embedded keyboard layout definitions.
#[derive(RustEmbed)]
#[folder = "resources/layouts/"]
struct LayoutAssets;

// ============================================================================
// Error Handling Types
// ============================================================================

/// A problem found while validating a layout definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Human-readable description of the issue.
    pub message: String,
    /// Path to the offending field (e.g. `rows[2].keys[0]`).
    pub field_path: String,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_path: field_path.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// Error type for loading embedded layout definitions.
#[derive(Debug)]
pub enum ParseError {
    /// The embedded asset for a layout is missing from the binary.
    MissingAsset {
        /// Asset file name that was looked up.
        asset: String,
    },

    /// JSON parsing failed.
    Json {
        /// The underlying JSON parsing error.
        source: serde_json::Error,
        /// Asset file name being parsed.
        asset: String,
    },

    /// The layout parsed but failed semantic validation.
    Validation {
        /// List of validation issues found.
        issues: Vec<ValidationIssue>,
        /// Asset file name being validated.
        asset: String,
    },
}

impl ParseError {
    /// Creates a missing-asset error.
    pub fn missing_asset(asset: impl Into<String>) -> Self {
        Self::MissingAsset {
            asset: asset.into(),
        }
    }

    /// Creates a JSON parsing error with asset context.
    pub fn json(source: serde_json::Error, asset: impl Into<String>) -> Self {
        Self::Json {
            source,
            asset: asset.into(),
        }
    }

    /// Creates a validation error from a list of issues.
    pub fn validation(issues: Vec<ValidationIssue>, asset: impl Into<String>) -> Self {
        Self::Validation {
            issues,
            asset: asset.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingAsset { asset } => {
                write!(f, "embedded layout asset '{}' not found", asset)
            }
            ParseError::Json { source, asset } => {
                write!(f, "JSON parsing error in layout '{}': {}", asset, source)
            }
            ParseError::Validation { issues, asset } => {
                write!(
                    f,
                    "layout '{}' failed validation with {} issue(s):",
                    asset,
                    issues.len()
                )?;
                for issue in issues {
                    write!(f, "\n  {}", issue)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Layout Data Structures
// ============================================================================

/// Key arrangements available on the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Arabic letters with Arabic-Indic digits.
    Arabic,
    /// QWERTY letters with Western digits.
    English,
}

impl LayoutKind {
    /// The arrangement the toggle switches to from this one.
    pub fn toggled(self) -> Self {
        match self {
            LayoutKind::Arabic => LayoutKind::English,
            LayoutKind::English => LayoutKind::Arabic,
        }
    }

    /// Embedded asset file name for this arrangement.
    fn asset(self) -> &'static str {
        match self {
            LayoutKind::Arabic => "arabic.json",
            LayoutKind::English => "english.json",
        }
    }
}

/// Behavior of a key when pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Append the key label to the buffer.
    #[default]
    Text,
    /// Remove the last character from the buffer.
    Backspace,
    /// Append a space to the buffer.
    Space,
    /// Submit the buffer.
    Enter,
}

/// Default value for the `width` field (one base unit).
fn default_key_width() -> f32 {
    1.0
}

/// A key definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    /// Display label shown on the key.
    pub label: String,

    /// Behavior when pressed.
    #[serde(default)]
    pub action: KeyAction,

    /// Width in base units (1.0 = standard key).
    #[serde(default = "default_key_width")]
    pub width: f32,
}

/// A horizontal row of keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRow {
    /// Keys in this row, left to right.
    pub keys: Vec<Key>,
}

/// A complete key arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    /// Layout name (e.g. "Arabic").
    pub name: String,

    /// Rows of keys, top to bottom.
    pub rows: Vec<KeyRow>,
}

impl KeyboardLayout {
    /// Width units of the widest row.
    pub fn max_row_width(&self) -> f32 {
        self.rows
            .iter()
            .map(|row| row.keys.iter().map(|key| key.width).sum::<f32>())
            .fold(0.0, f32::max)
    }
}

// ============================================================================
// Loading and Validation
// ============================================================================

/// Loads and validates the embedded layout for a key arrangement.
pub fn load_layout(kind: LayoutKind) -> Result<KeyboardLayout, ParseError> {
    let asset = kind.asset();

    let data = LayoutAssets::get(asset).ok_or_else(|| ParseError::missing_asset(asset))?;

    let layout: KeyboardLayout =
        serde_json::from_slice(data.data.as_ref()).map_err(|e| ParseError::json(e, asset))?;

    let issues = validate_layout(&layout);
    if issues.is_empty() {
        Ok(layout)
    } else {
        Err(ParseError::validation(issues, asset))
    }
}

/// Checks a parsed layout for semantic problems.
///
/// A usable layout has at least one non-empty row, a label and a positive
/// width on every key, and exactly one enter key.
pub fn validate_layout(layout: &KeyboardLayout) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if layout.rows.is_empty() {
        issues.push(ValidationIssue::new("layout has no rows", "rows"));
    }

    let mut enter_keys = 0usize;
    for (row_index, row) in layout.rows.iter().enumerate() {
        if row.keys.is_empty() {
            issues.push(ValidationIssue::new(
                "row has no keys",
                format!("rows[{}]", row_index),
            ));
        }

        for (key_index, key) in row.keys.iter().enumerate() {
            let field_path = format!("rows[{}].keys[{}]", row_index, key_index);

            if key.label.is_empty() {
                issues.push(ValidationIssue::new("key has an empty label", &field_path));
            }

            if key.width <= 0.0 {
                issues.push(ValidationIssue::new(
                    format!("key width {} is not positive", key.width),
                    &field_path,
                ));
            }

            if key.action == KeyAction::Enter {
                enter_keys += 1;
            }
        }
    }

    if enter_keys != 1 {
        issues.push(ValidationIssue::new(
            format!("layout has {} enter keys, expected exactly 1", enter_keys),
            "rows",
        ));
    }

    issues
}

// ============================================================================
// Tests
// ============================================================================
