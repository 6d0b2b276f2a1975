//! In-memory texture cache for card and viewer images.
//!
//! All mutation happens on the update loop, so a plain HashMap is
//! enough; the async part is only the fetch+decode pipeline that runs
//! inside a Task. Failed URLs are remembered so the gallery renders
//! their placeholder without re-requesting every frame.

use std::collections::{HashMap, HashSet};

use iced::widget::image::Handle;

use super::api::{ApiError, ApiService};
use super::luma;

/// A decoded, upload-ready image plus its sampled brightness.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
    pub is_light: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    loaded: HashMap<String, LoadedImage>,
    pending: HashSet<String>,
    failed: HashSet<String>,
}

impl ImageCache {
    pub fn get(&self, url: &str) -> Option<&LoadedImage> {
        self.loaded.get(url)
    }

    /// Whether a fetch should be issued for this URL; marks it pending
    /// when it should so callers can't double-request.
    pub fn should_request(&mut self, url: &str) -> bool {
        if self.loaded.contains_key(url)
            || self.pending.contains(url)
            || self.failed.contains(url)
        {
            return false;
        }
        self.pending.insert(url.to_owned());
        true
    }

    pub fn insert(&mut self, url: String, image: LoadedImage) {
        self.pending.remove(&url);
        self.loaded.insert(url, image);
    }

    pub fn mark_failed(&mut self, url: String) {
        self.pending.remove(&url);
        self.failed.insert(url);
    }
}

/// Fetch and decode one image; runs inside a Task off the update loop.
pub async fn fetch_image(
    api: &ApiService,
    url: &str,
) -> Result<LoadedImage, ApiError> {
    let bytes = api.fetch_bytes(url).await?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let is_light = luma::is_light_image(&decoded);
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
        is_light,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy() -> LoadedImage {
        LoadedImage {
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
            is_light: false,
        }
    }

    #[test]
    fn requests_are_issued_once() {
        let mut cache = ImageCache::default();
        assert!(cache.should_request("a.jpg"));
        assert!(!cache.should_request("a.jpg"), "pending blocks re-request");

        cache.insert("a.jpg".to_owned(), dummy());
        assert!(!cache.should_request("a.jpg"), "loaded blocks re-request");
        assert!(cache.get("a.jpg").is_some());
    }

    #[test]
    fn failures_are_not_retried() {
        let mut cache = ImageCache::default();
        assert!(cache.should_request("b.jpg"));
        cache.mark_failed("b.jpg".to_owned());
        assert!(!cache.should_request("b.jpg"));
        assert!(cache.get("b.jpg").is_none());
    }
}
