// SPDX-License-Identifier: GPL-3.0-only

//! Nameboard kiosk entry point.
//!
//! Starts the onboarding name-entry screen. The previous wizard step hands
//! its state over as a query string in the first process argument, e.g.
//! `nameboard 'first_text=Ali'`.

use nameboard::route::WizardQuery;
use nameboard::screen::Personalization;
use nameboard::{app, app_settings, i18n};

fn main() -> cosmic::iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nameboard=info".parse().unwrap()),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Wizard state arrives as a query string from the previous step.
    let query = std::env::args()
        .nth(1)
        .map(|raw| WizardQuery::parse(&raw))
        .unwrap_or_default();

    tracing::info!(first_text = ?query.first_text, "starting name-entry screen");

    // The screen is built up front so a broken embedded layout fails loudly
    // instead of presenting a dead kiosk.
    let screen = match Personalization::new(query) {
        Ok(screen) => screen,
        Err(err) => {
            tracing::error!(%err, "failed to load embedded keyboard layouts");
            std::process::exit(1);
        }
    };

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default()
        // Set initial window size from app_settings
        .size(cosmic::iced::Size::new(
            app_settings::DEFAULT_WIDTH,
            app_settings::DEFAULT_HEIGHT,
        ))
        // Set minimum window size constraints
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(app_settings::MIN_WIDTH)
                .min_height(app_settings::MIN_HEIGHT),
        )
        // Use client-side decorations (no window manager decorations)
        .client_decorations(true);

    // Starts the application's event loop with the screen as its flags.
    cosmic::app::run::<app::AppModel>(settings, app::Flags { screen })
}
