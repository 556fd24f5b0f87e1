// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.nameboard.Nameboard";

/// Default window width in pixels.
pub const DEFAULT_WIDTH: f32 = 600.0;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: f32 = 1024.0;

/// Minimum window width in pixels.
pub const MIN_WIDTH: f32 = 360.0;

/// Minimum window height in pixels.
pub const MIN_HEIGHT: f32 = 640.0;

/// Width-to-height ratio of the kiosk surface (9:16 portrait panel).
///
/// The surface occupies `min(window_width, window_height * SURFACE_ASPECT)`
/// horizontally and the full window height, centered.
pub const SURFACE_ASPECT: f32 = 9.0 / 16.0;

/// Share of the window height occupied by the on-screen keyboard.
pub const KEYBOARD_HEIGHT_RATIO: f32 = 0.4;

/// Default base URL for the name-validation backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the configured backend base URL.
pub const API_BASE_URL_ENV: &str = "NAMEBOARD_API_BASE_URL";
