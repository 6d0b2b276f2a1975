//! Portfolio project records as served by the backend.
//!
//! Field names mirror the wire format of the hosted backend so the
//! `serde` feature can deserialize API payloads directly.

use crate::ids::{ImageId, ProjectId};

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

/// A single portfolio entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub sort_order: i32,
    #[cfg(feature = "chrono")]
    pub created_at: DateTime<Utc>,
    #[cfg(feature = "chrono")]
    pub updated_at: DateTime<Utc>,
}

/// One image attached to a project, ordered by `sort_order`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectImage {
    pub id: ImageId,
    pub project_id: ProjectId,
    pub image_url: String,
    pub sort_order: i32,
    #[cfg(feature = "chrono")]
    pub created_at: DateTime<Utc>,
}

/// A project joined with its ordered image set, as returned by the
/// list endpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectWithImages {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub project: Project,
    pub images: Vec<ProjectImage>,
}

impl ProjectWithImages {
    /// The image shown on the spiral card: the explicit thumbnail when
    /// set, otherwise the first gallery image.
    pub fn cover_url(&self) -> Option<&str> {
        self.project
            .thumbnail_url
            .as_deref()
            .or_else(|| self.images.first().map(|img| img.image_url.as_str()))
    }

    /// All image URLs in display order.
    pub fn image_urls(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|img| img.image_url.clone())
            .collect()
    }
}
