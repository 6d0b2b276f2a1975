//! Application bootstrap: configuration from the environment and the
//! iced application builder.

use iced::{Font, Size};

use crate::state::{State, INITIAL_WINDOW};
use crate::{subscriptions, theme, update, view};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the portfolio backend.
    pub server_url: String,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let server_url = std::env::var("SPIRA_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_owned());
        Self { server_url }
    }
}

/// Build and run the Spira application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Spira", update::update, view::view)
        .subscription(subscriptions::subscription)
        .theme(|_state: &State| theme::theme())
        .default_font(Font::MONOSPACE)
        .antialiasing(true)
        .window(iced::window::Settings {
            size: Size::new(INITIAL_WINDOW.0, INITIAL_WINDOW.1),
            ..Default::default()
        })
        .run_with(move || State::new(&config))
}
