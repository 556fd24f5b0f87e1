// SPDX-License-Identifier: GPL-3.0-only

//! Wizard navigation: inbound query parsing and outbound destinations.
//!
//! The onboarding wizard threads its state between screens as URL-style
//! query parameters. This screen reads an optional `first_text` value
//! captured by a previous step and, once a name passes validation, emits
//! the path of the next screen with the accumulated values attached.

use std::fmt;

/// Query parameter carrying the previous step's value.
const FIRST_TEXT_PARAM: &str = "first_text";

/// Query parameter carrying this screen's validated value.
const SECOND_TEXT_PARAM: &str = "second_text";

/// Wizard state handed to this screen by the previous step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardQuery {
    /// Value captured by a previous screen, if any.
    pub first_text: Option<String>,
}

impl WizardQuery {
    /// Parses a query string such as `first_text=Ali` or `?first_text=Ali`.
    ///
    /// Unknown parameters are ignored. Values are percent-decoded and `+`
    /// is treated as a space, matching the encoding the wizard produces.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut first_text = None;
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }

            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (pair, ""),
            };

            if key == FIRST_TEXT_PARAM {
                first_text = Some(decode_component(value));
            }
        }

        Self { first_text }
    }
}

/// Destination selected after a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Both wizard values are known; continue to the processing screen.
    Processing {
        /// Value captured by the previous step.
        first_text: String,
        /// Value validated by this screen.
        second_text: String,
    },

    /// Only this screen's value is known; continue collecting.
    ConfirmMore {
        /// Value validated by this screen.
        first_text: String,
    },
}

impl Route {
    /// Chooses the next destination from the prior step value and the
    /// freshly validated name.
    pub fn after_validation(prior: Option<&str>, name: &str) -> Self {
        match prior {
            Some(first_text) => Route::Processing {
                first_text: first_text.to_string(),
                second_text: name.to_string(),
            },
            None => Route::ConfirmMore {
                first_text: name.to_string(),
            },
        }
    }

    /// Renders the destination as a path with query parameters.
    ///
    /// Values are interpolated verbatim; the downstream screens expect the
    /// same raw form this screen received them in.
    pub fn to_path(&self) -> String {
        match self {
            Route::Processing {
                first_text,
                second_text,
            } => format!(
                "/processing?{FIRST_TEXT_PARAM}={first_text}&{SECOND_TEXT_PARAM}={second_text}"
            ),
            Route::ConfirmMore { first_text } => {
                format!("/confirmmore?{FIRST_TEXT_PARAM}={first_text}")
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Percent-decodes a query component, treating `+` as a space.
///
/// Malformed escapes and non-UTF-8 decodings are kept verbatim.
fn decode_component(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        decoded.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => {
                        decoded.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                decoded.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded).unwrap_or_else(|_| value.to_string())
}

// ============================================================================
// Tests
// ============================================================================
