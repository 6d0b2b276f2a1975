//! Root application state.

use iced::Task;
use spira_model::AnimationSettings;

use crate::app::AppConfig;
use crate::engine::{layout::Viewport, DeviceClass};
use crate::gallery::GalleryState;
use crate::infra::api::ApiService;
use crate::infra::image_cache::ImageCache;
use crate::message::Message;
use crate::settings::SettingsPanel;
use crate::viewer::DetailViewer;

/// Initial window dimensions; kept in sync with the window settings in
/// `app` until the first resize event arrives.
pub const INITIAL_WINDOW: (f32, f32) = (1280.0, 720.0);

#[derive(Debug)]
pub struct State {
    pub api: ApiService,
    pub settings: AnimationSettings,
    pub gallery: GalleryState,
    pub viewer: Option<DetailViewer>,
    pub panel: SettingsPanel,
    pub images: ImageCache,
    pub viewport: Viewport,
    pub device_class: DeviceClass,
    /// Monotonic guard for every scheduled viewer timer; bumped on each
    /// open/close so stale completions are dropped.
    pub timer_epoch: u64,
    /// Timestamp of the touch contact currently tracked by the viewer.
    pub viewer_touch: Option<ViewerTouch>,
}

/// Start of an in-flight viewer touch contact.
#[derive(Debug, Clone, Copy)]
pub struct ViewerTouch {
    pub x: f32,
    pub y: f32,
    pub started_at: std::time::Instant,
}

impl State {
    /// Build the boot state and the fire-and-forget startup requests.
    ///
    /// Both fetches degrade gracefully: the gallery opens on the
    /// placeholder fleet and default settings, and applies whatever the
    /// backend returns whenever it returns it.
    pub fn new(config: &AppConfig) -> (Self, Task<Message>) {
        let api = ApiService::new(config.server_url.clone());
        let viewport =
            Viewport::new(INITIAL_WINDOW.0, INITIAL_WINDOW.1);
        let device_class = DeviceClass::from_width(viewport.width);

        let state = Self {
            api: api.clone(),
            settings: AnimationSettings::default(),
            gallery: GalleryState::new(device_class),
            viewer: None,
            panel: SettingsPanel::default(),
            images: ImageCache::default(),
            viewport,
            device_class,
            timer_epoch: 0,
            viewer_touch: None,
        };

        let projects_api = api.clone();
        let settings_api = api;
        let boot = Task::batch([
            Task::perform(
                async move {
                    projects_api
                        .list_projects()
                        .await
                        .map_err(|e| e.to_string())
                },
                Message::ProjectsLoaded,
            ),
            Task::perform(
                async move {
                    settings_api
                        .animation_settings()
                        .await
                        .map_err(|e| e.to_string())
                },
                Message::SettingsLoaded,
            ),
        ]);

        (state, boot)
    }
}
