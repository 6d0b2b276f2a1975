//! Root update dispatch.

use std::time::Duration;

use iced::keyboard::{key::Named, Key, Modifiers};
use iced::{Size, Task};

use crate::engine::{layout::Viewport, DeviceClass};
use crate::infra::image_cache;
use crate::message::Message;
use crate::state::State;
use crate::viewer::ViewerKey;
use crate::{gallery, settings, viewer};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => gallery::update::update(state, message),
        Message::Viewer(message) => viewer::update::update(state, message),
        Message::Settings(message) => settings::update(state, message),

        Message::FrameTick(now) => {
            // The spiral keeps animating underneath an open viewer.
            state.gallery.tick(now, state.viewport);
            Task::none()
        }

        Message::KeyPressed(key, modifiers) => {
            handle_key(state, key, modifiers)
        }

        Message::WindowResized(size) => on_resize(state, size),

        Message::ProjectsLoaded(Ok(projects)) => {
            if projects.is_empty() {
                log::info!("backend returned no projects; keeping placeholders");
                return Task::none();
            }
            log::info!("loaded {} projects", projects.len());
            state.gallery.set_projects(&projects);
            let covers: Vec<String> = state
                .gallery
                .cover_urls()
                .map(str::to_owned)
                .collect();
            request_images(state, covers)
        }
        Message::ProjectsLoaded(Err(error)) => {
            log::warn!("project list unavailable: {error}; keeping placeholders");
            Task::none()
        }

        Message::SettingsLoaded(Ok(Some(settings))) => {
            state.settings = settings;
            Task::none()
        }
        Message::SettingsLoaded(Ok(None)) => Task::none(),
        Message::SettingsLoaded(Err(error)) => {
            log::warn!("animation settings unavailable: {error}; using defaults");
            Task::none()
        }

        Message::ImageFetched { url, result } => {
            match result {
                Ok(image) => {
                    if let Some(viewer) = state.viewer.as_mut() {
                        if viewer.current_url() == Some(url.as_str()) {
                            viewer.is_light_image = image.is_light;
                        }
                    }
                    state.images.insert(url, image);
                }
                Err(error) => {
                    log::debug!("image fetch failed for {url}: {error}");
                    state.images.mark_failed(url);
                }
            }
            Task::none()
        }
    }
}

fn on_resize(state: &mut State, size: Size) -> Task<Message> {
    state.viewport = Viewport::new(size.width, size.height);
    let class = DeviceClass::from_width(size.width);
    if class != state.device_class {
        state.device_class = class;
        state.gallery.set_device_class(class);
    }
    Task::none()
}

fn handle_key(
    state: &mut State,
    key: Key,
    _modifiers: Modifiers,
) -> Task<Message> {
    if state.panel.open {
        return match key {
            Key::Named(Named::Escape) => {
                settings::update(state, settings::Message::Toggle)
            }
            Key::Character(c) if c.as_str() == "s" => {
                settings::update(state, settings::Message::Toggle)
            }
            _ => Task::none(),
        };
    }

    if state.viewer.is_some() {
        let viewer_key = match key {
            Key::Named(Named::Escape) => Some(ViewerKey::Escape),
            Key::Named(Named::ArrowRight) => Some(ViewerKey::Next),
            Key::Named(Named::ArrowLeft) => Some(ViewerKey::Previous),
            _ => None,
        };
        return match viewer_key {
            Some(viewer_key) => viewer::update::handle_key(state, viewer_key),
            None => Task::none(),
        };
    }

    match key {
        Key::Named(Named::ArrowDown)
        | Key::Named(Named::ArrowRight)
        | Key::Named(Named::Space) => {
            gallery::update::update(state, gallery::Message::KeyStep(1))
        }
        Key::Named(Named::ArrowUp) | Key::Named(Named::ArrowLeft) => {
            gallery::update::update(state, gallery::Message::KeyStep(-1))
        }
        Key::Character(c) if c.as_str() == "s" => {
            settings::update(state, settings::Message::Toggle)
        }
        _ => Task::none(),
    }
}

/// Issue fetch tasks for every URL the cache has not seen yet.
pub(crate) fn request_images<I>(state: &mut State, urls: I) -> Task<Message>
where
    I: IntoIterator<Item = String>,
{
    let mut tasks = Vec::new();
    for url in urls {
        if !state.images.should_request(&url) {
            continue;
        }
        let api = state.api.clone();
        let fetch_url = url.clone();
        tasks.push(Task::perform(
            async move {
                image_cache::fetch_image(&api, &fetch_url)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::ImageFetched {
                url: url.clone(),
                result,
            },
        ));
    }
    Task::batch(tasks)
}

/// Deliver a message after a delay; the payload's own epoch/sequence
/// guard decides whether it still applies on arrival.
pub(crate) fn after(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(delay), move |_| message.clone())
}
