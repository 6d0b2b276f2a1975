//! In-app animation settings overlay.
//!
//! A reduced port of the admin panel's animation section: cycle style
//! and speed, toggle hover effects, persist through the backend. Saves
//! are fire-and-forget; a failure keeps the local choice and logs.

pub mod view;

use iced::Task;

use crate::message::Message as AppMessage;
use crate::state::State;

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    CycleStyle,
    CycleSpeed,
    ToggleHoverEffects,
    Saved(Result<(), String>),
}

#[derive(Debug, Clone, Default)]
pub struct SettingsPanel {
    pub open: bool,
    pub saving: bool,
    pub last_error: Option<String>,
}

pub fn update(state: &mut State, message: Message) -> Task<AppMessage> {
    match message {
        Message::Toggle => {
            state.panel.open = !state.panel.open;
            state.panel.last_error = None;
            Task::none()
        }
        Message::CycleStyle => {
            state.settings.style = state.settings.style.cycled();
            persist(state)
        }
        Message::CycleSpeed => {
            state.settings.speed = state.settings.speed.cycled();
            persist(state)
        }
        Message::ToggleHoverEffects => {
            state.settings.hover_effects_enabled =
                !state.settings.hover_effects_enabled;
            if !state.settings.hover_effects_enabled {
                state.gallery.hovered = None;
            }
            persist(state)
        }
        Message::Saved(result) => {
            state.panel.saving = false;
            if let Err(error) = result {
                log::warn!("failed to persist animation settings: {error}");
                state.panel.last_error = Some(error);
            } else {
                state.panel.last_error = None;
            }
            Task::none()
        }
    }
}

fn persist(state: &mut State) -> Task<AppMessage> {
    state.panel.saving = true;
    let api = state.api.clone();
    let settings = state.settings;
    Task::perform(
        async move {
            api.save_animation_settings(settings)
                .await
                .map_err(|e| e.to_string())
        },
        |result| AppMessage::Settings(Message::Saved(result)),
    )
}
