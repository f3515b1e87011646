// SPDX-License-Identifier: GPL-3.0-only

//! Main application module
//!
//! This module contains the application state, message handling and UI
//! rendering for the keepsake card.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, Stage, etc.)
//! - `effects`: Confetti and heart particle fields and their overlay widget
//! - `views`: One view module per stage, plus the settings drawer
//! - `view`: Stage routing and overlay layering
//! - `update`: Message dispatch
//! - `handlers`: Message handlers grouped by functional domain

pub mod effects;
mod handlers;
mod state;
mod update;
mod view;
mod views;

use crate::config::Config;
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ContextPage, Message, Mood, PromptState, Stage, StageFade};
use tracing::{error, info};

const REPOSITORY: &str = "https://github.com/keepsake-dev/cosmic-keepsake";
const APP_ICON: &[u8] = include_bytes!(
    "../../resources/icons/hicolor/scalable/apps/io.github.keepsake-dev.cosmic-keepsake.svg"
);

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.keepsake-dev.cosmic-keepsake";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        // Ensure the reaction directory exists
        if let Err(err) = crate::storage::ensure_reaction_directory() {
            error!(error = %err, "Failed to create reaction directory");
        }

        // Initialize GStreamer early (required before any GStreamer calls)
        let gst_ready = match gstreamer::init() {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "Failed to initialize GStreamer");
                false
            }
        };

        let recording_profile = if gst_ready {
            crate::capture::encoders::negotiate()
        } else {
            crate::capture::encoders::default_profile()
        };

        let theme_dropdown_options = vec![
            fl!("theme-system"),
            fl!("theme-dark"),
            fl!("theme-light"),
        ];

        // Construct the app model with the runtime's core.
        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            theme_dropdown_options,
            stage: Stage::default(),
            fade: StageFade::default(),
            permission_pending: true,
            camera_allowed: false,
            envelope_open: false,
            mood: Mood::default(),
            prompt: PromptState::default(),
            slideshow: crate::slideshow::Slideshow::default(),
            confetti: effects::confetti::ConfettiSystem::default(),
            hearts: effects::hearts::HeartField::default(),
            confetti_epoch: 0,
            effects_epoch: 0,
            indicator_epoch: 0,
            music_epoch: 0,
            capture: crate::capture::CaptureSession::default(),
            recording_profile,
            capture_error: None,
            music: None,
            music_playing: false,
            gst_ready,
        };

        info!(
            profile = app.recording_profile.label,
            gst_ready, "Application initialized"
        );

        (app, Task::none())
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![]
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        let music_icon = if self.music_playing {
            "audio-volume-high-symbolic"
        } else {
            "audio-volume-muted-symbolic"
        };

        vec![
            widget::button::icon(widget::icon::from_name(music_icon))
                .on_press(Message::ToggleMusic)
                .into(),
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::About))
                .into(),
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
