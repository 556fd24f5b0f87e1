// SPDX-License-Identifier: GPL-3.0-only

//! Nameboard - A kiosk onboarding name-entry screen
//!
//! This crate provides one screen of a kiosk onboarding wizard: the user
//! enters a name on an on-screen Arabic/English keyboard (or the physical
//! input field), the name is validated by a backend endpoint, and on
//! success the screen hands off to the next wizard step with the collected
//! values carried as URL-style query parameters.
//!
//! # Architecture
//!
//! The wizard state arrives as a query string (`first_text=…`) in the first
//! process argument and leaves as the path of the next screen. In between,
//! the input field and the on-screen keyboard mirror each other, and a
//! single asynchronous validation call decides between advancing and
//! warning.
//!
//! # Modules
//!
//! - `app`: Main application model and COSMIC Application trait implementation
//! - `app_settings`: Centralized application constants and configuration
//! - `config`: User configuration with cosmic_config persistence
//! - `i18n`: Localization support using fluent translations
//! - `keyboard`: On-screen keyboard layouts, device state, and rendering
//! - `route`: Wizard query parsing and outbound destinations
//! - `screen`: The page state machine (input, warning, submission, departure)
//! - `validator`: Client for the backend name-validation endpoint

pub mod app;
pub mod app_settings;
pub mod config;
pub mod i18n;
pub mod keyboard;
pub mod route;
pub mod screen;
pub mod validator;

// Re-export the fl! macro for localization
pub use crate::i18n::LANGUAGE_LOADER;

// ============================================================================
// Integration Tests
// ============================================================================
