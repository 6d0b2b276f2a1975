//! Root message composition across domains.

use std::time::Instant;

use iced::keyboard::{Key, Modifiers};
use iced::Size;
use spira_model::{AnimationSettings, ProjectWithImages};

use crate::infra::image_cache::LoadedImage;

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(crate::gallery::Message),
    Viewer(crate::viewer::Message),
    Settings(crate::settings::Message),

    /// Backend responses; errors are stringified at the task boundary.
    ProjectsLoaded(Result<Vec<ProjectWithImages>, String>),
    SettingsLoaded(Result<Option<AnimationSettings>, String>),
    ImageFetched {
        url: String,
        result: Result<LoadedImage, String>,
    },

    /// Frame-synchronized tick with timestamp from `window::frames()`.
    FrameTick(Instant),
    KeyPressed(Key, Modifiers),
    WindowResized(Size),
}
