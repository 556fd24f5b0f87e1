// SPDX-License-Identifier: GPL-3.0-only

use crate::app_settings;
use crate::config::Config;
use crate::fl;
use crate::keyboard::{render_keyboard, KeyboardMessage, LayoutKind};
use crate::route::Route;
use crate::screen::{Effect, Personalization, Warning};
use crate::validator::{NameValidator, Verdict};
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{window, Alignment, Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, container};

/// Vertical spacing between surface elements in pixels.
const SURFACE_SPACING: f32 = 12.0;

/// Horizontal padding of the entry column in pixels.
const SURFACE_PADDING: f32 = 24.0;

/// Padding inside the warning banner in pixels.
const WARNING_PADDING: f32 = 12.0;

/// Corner radius of the warning banner in pixels.
const WARNING_RADIUS: f32 = 8.0;

/// Flags handed to the application at startup.
#[derive(Debug)]
pub struct Flags {
    /// The fully constructed name-entry screen.
    pub screen: Personalization,
}

/// The application model stores app-specific state used to describe its
/// interface and drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Configuration data that persists between application runs.
    config: Config,
    /// The name-entry screen.
    screen: Personalization,
    /// Client for the validation endpoint.
    validator: NameValidator,
    /// Current window width, for the fixed-aspect surface.
    window_width: f32,
    /// Current window height, for the fixed-aspect surface.
    window_height: f32,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The physical input field changed.
    InputChanged(String),
    /// Enter was pressed in the physical input field.
    InputSubmitted,
    /// A key was pressed on the on-screen keyboard.
    Keyboard(KeyboardMessage),
    /// The layout toggle button was activated.
    ToggleLayout,
    /// A validation round finished.
    VerdictReceived {
        /// Round identifier echoed back from the submission.
        generation: u64,
        /// The name that was validated.
        name: String,
        /// The verdict, or a stringified transient failure.
        result: Result<Verdict, String>,
    },
    /// Configuration has been updated.
    UpdateConfig(Config),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = app_settings::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        mut core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Load configuration
        let config = cosmic_config::Config::new(Self::APP_ID, Config::VERSION)
            .map(|context| match Config::get_entry(&context) {
                Ok(config) => config,
                Err((_errors, config)) => config,
            })
            .unwrap_or_default();

        // Set chromeless appearance - hide the header bar
        core.window.show_headerbar = false;

        let validator = NameValidator::new(config.api_base_url());
        tracing::info!(endpoint = %validator.endpoint(), "validation endpoint configured");

        let app = AppModel {
            core,
            config,
            screen: flags.screen,
            validator,
            window_width: app_settings::DEFAULT_WIDTH,
            window_height: app_settings::DEFAULT_HEIGHT,
        };

        (app, Task::none())
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let surface: Element<'_, Message> = match self.screen.departed() {
            Some(route) => self.handoff_view(route),
            None => self.entry_view(),
        };

        // Fixed-aspect kiosk surface, centered in the window over a themed
        // backdrop.
        let framed = container(surface)
            .width(Length::Fixed(self.surface_width()))
            .height(Length::Fill)
            .class(cosmic::style::Container::custom(|theme| {
                let palette = theme.cosmic();
                container::Style {
                    background: Some(cosmic::iced::Background::Color(
                        cosmic::iced::Color::from(palette.bg_color()),
                    )),
                    border: cosmic::iced::Border::default(),
                    icon_color: None,
                    text_color: None,
                    shadow: cosmic::iced::Shadow::default(),
                }
            }));

        container(framed)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for configuration changes
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::InputChanged(value) => {
                self.screen.input_changed(value);
            }
            Message::InputSubmitted => {
                let effect = self.screen.input_submitted();
                return self.run_effect(effect);
            }
            Message::Keyboard(KeyboardMessage::KeyPressed(stroke)) => {
                let effect = self.screen.key_pressed(stroke);
                return self.run_effect(effect);
            }
            Message::ToggleLayout => {
                self.screen.toggle_layout();
            }
            Message::VerdictReceived {
                generation,
                name,
                result,
            } => {
                self.screen.verdict_received(generation, &name, result);
            }
            Message::UpdateConfig(config) => {
                if config != self.config {
                    self.config = config;
                    self.validator = NameValidator::new(self.config.api_base_url());
                    tracing::info!(
                        endpoint = %self.validator.endpoint(),
                        "validation endpoint reconfigured"
                    );
                }
            }
        }

        Task::none()
    }

    /// Called when a window is resized.
    fn on_window_resize(&mut self, _id: window::Id, width: f32, height: f32) {
        self.window_width = width;
        self.window_height = height;
    }
}

impl AppModel {
    /// Width of the kiosk surface: `min(window_width, height * aspect)`.
    fn surface_width(&self) -> f32 {
        (self.window_height * app_settings::SURFACE_ASPECT).min(self.window_width)
    }

    /// Turns a screen effect into runtime work.
    fn run_effect(&self, effect: Effect) -> Task<cosmic::Action<Message>> {
        match effect {
            Effect::None => Task::none(),
            Effect::Validate { generation, name } => {
                let validator = self.validator.clone();
                Task::perform(
                    async move {
                        let result = validator.check(&name).await.map_err(|e| e.to_string());
                        (generation, name, result)
                    },
                    |(generation, name, result)| {
                        cosmic::Action::App(Message::VerdictReceived {
                            generation,
                            name,
                            result,
                        })
                    },
                )
            }
        }
    }

    /// The interactive entry surface: input field, warning banner, layout
    /// toggle, and the on-screen keyboard.
    fn entry_view(&self) -> Element<'_, Message> {
        let input = widget::text_input(fl!("name-placeholder"), self.screen.input())
            .on_input(Message::InputChanged)
            .on_submit(|_| Message::InputSubmitted)
            .width(Length::Fill);

        let mut column = widget::column::column()
            .spacing(SURFACE_SPACING)
            .padding(SURFACE_PADDING)
            // Top region of the backdrop stays clear, as the kiosk artwork
            // dictates; the input sits at roughly the vertical midpoint.
            .push(widget::Space::new(Length::Fill, Length::FillPortion(2)))
            .push(input);

        if let Some(warning) = self.screen.warning() {
            column = column.push(warning_banner(warning));
        }

        let toggle_label = match self.screen.layout_kind() {
            LayoutKind::Arabic => fl!("switch-to-english"),
            LayoutKind::English => fl!("switch-to-arabic"),
        };
        let toggle = container(widget::button::text(toggle_label).on_press(Message::ToggleLayout))
            .width(Length::Fill)
            .align_x(Alignment::End);

        let keyboard_height = self.window_height * app_settings::KEYBOARD_HEIGHT_RATIO;
        let keyboard = render_keyboard(
            self.screen.keyboard().layout(),
            self.surface_width() - SURFACE_PADDING * 2.0,
            keyboard_height,
        )
        .map(Message::Keyboard);

        column
            .push(widget::Space::new(Length::Fill, Length::FillPortion(1)))
            .push(toggle)
            .push(keyboard)
            .into()
    }

    /// Terminal hand-off surface shown once the screen has departed.
    fn handoff_view(&self, route: &Route) -> Element<'_, Message> {
        let column = widget::column::column()
            .spacing(SURFACE_SPACING)
            .push(widget::text::title3(fl!("handoff-heading")))
            .push(widget::text::body(route.to_path()));

        container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .into()
    }
}

/// Renders the warning banner under the input field.
fn warning_banner<'a>(warning: Warning) -> Element<'a, Message> {
    let message = match warning {
        Warning::Rejected => fl!("warning-rejected"),
        Warning::Transient => fl!("warning-transient"),
    };

    container(widget::text::body(message))
        .width(Length::Fill)
        .padding(WARNING_PADDING)
        .align_x(Alignment::Center)
        .class(cosmic::style::Container::custom(|theme| {
            let palette = theme.cosmic();
            let destructive = cosmic::iced::Color::from(palette.destructive_color());
            container::Style {
                background: Some(cosmic::iced::Background::Color(
                    destructive.scale_alpha(0.15),
                )),
                border: cosmic::iced::Border {
                    color: destructive,
                    width: 1.0,
                    radius: WARNING_RADIUS.into(),
                },
                icon_color: None,
                text_color: Some(destructive),
                shadow: cosmic::iced::Shadow::default(),
            }
        }))
        .into()
}
