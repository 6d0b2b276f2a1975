//! Gallery state: the owned simulation plus the card content it lays
//! out every frame.

use std::time::Instant;

use spira_model::ProjectWithImages;

use crate::engine::{
    layout::{self, CardRect, CardTransform, SpiralPreset, Viewport},
    DeviceClass, InputAdapter, SpiralMotion,
};
use crate::infra::constants::spiral;

/// Render-ready card content derived from a project (or a placeholder).
#[derive(Debug, Clone, PartialEq)]
pub struct CardSource {
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub image_urls: Vec<String>,
}

impl CardSource {
    pub fn from_project(project: &ProjectWithImages) -> Self {
        Self {
            title: project.project.title.clone(),
            description: project.project.description.clone(),
            cover_url: project.cover_url().map(str::to_owned),
            image_urls: project.image_urls(),
        }
    }
}

/// Deterministic card set shown when the backend has no projects yet;
/// the spiral must never render empty.
pub fn placeholder_cards() -> Vec<CardSource> {
    (0..spiral::PLACEHOLDER_CARD_COUNT)
        .map(|i| CardSource {
            title: format!("Project {}", i + 1),
            description: Some("Add projects from the admin panel".to_owned()),
            cover_url: None,
            image_urls: Vec::new(),
        })
        .collect()
}

/// One instance per mounted gallery view; dropped with the view.
#[derive(Debug, Clone)]
pub struct GalleryState {
    pub cards: Vec<CardSource>,
    /// Output buffer of the layout solver, rewritten every frame.
    pub transforms: Vec<CardTransform>,
    pub motion: SpiralMotion,
    pub input: InputAdapter,
    pub preset: SpiralPreset,
    pub hovered: Option<usize>,
    /// Compact-class tap preview: first tap previews, second opens.
    pub tapped: Option<usize>,
    pub cursor: Option<(f32, f32)>,
    pub using_placeholders: bool,
}

impl GalleryState {
    pub fn new(class: DeviceClass) -> Self {
        Self {
            cards: placeholder_cards(),
            transforms: Vec::new(),
            motion: SpiralMotion::default(),
            input: InputAdapter::for_class(class),
            preset: SpiralPreset::for_class(class),
            hovered: None,
            tapped: None,
            cursor: None,
            using_placeholders: true,
        }
    }

    /// Replace placeholder content with real projects. An empty list
    /// keeps the placeholder fleet.
    pub fn set_projects(&mut self, projects: &[ProjectWithImages]) {
        if projects.is_empty() {
            return;
        }
        self.cards = projects.iter().map(CardSource::from_project).collect();
        self.using_placeholders = false;
        self.hovered = None;
        self.tapped = None;
    }

    /// Swap sensitivity and geometry presets when the viewport crosses
    /// the compact breakpoint.
    pub fn set_device_class(&mut self, class: DeviceClass) {
        self.preset = SpiralPreset::for_class(class);
        self.input = InputAdapter::for_class(class);
        self.hovered = None;
        self.tapped = None;
    }

    /// One animation-driver step: advance motion, then re-solve every
    /// card transform from the fresh snapshot.
    pub fn tick(&mut self, now: Instant, viewport: Viewport) {
        let snapshot = self.motion.tick_at(now);
        layout::layout_into(
            &mut self.transforms,
            &snapshot,
            self.cards.len(),
            viewport,
            &self.preset,
        );
    }

    pub fn card_rect(&self, index: usize) -> Option<CardRect> {
        self.transforms
            .get(index)
            .map(|t| layout::card_rect(t, &self.preset))
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        layout::hit_test(&self.transforms, &self.preset, x, y)
    }

    /// Cover URLs worth prefetching for the spiral.
    pub fn cover_urls(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().filter_map(|c| c.cover_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_fill_the_spiral() {
        let cards = placeholder_cards();
        assert_eq!(cards.len(), spiral::PLACEHOLDER_CARD_COUNT);
        assert_eq!(cards[0].title, "Project 1");
        assert!(cards.iter().all(|c| c.cover_url.is_none()));
        // Deterministic: two invocations agree exactly.
        assert_eq!(cards, placeholder_cards());
    }

    #[test]
    fn empty_project_list_keeps_placeholders() {
        let mut gallery = GalleryState::new(DeviceClass::Desktop);
        gallery.set_projects(&[]);
        assert!(gallery.using_placeholders);
        assert_eq!(gallery.cards.len(), spiral::PLACEHOLDER_CARD_COUNT);
    }

    #[test]
    fn tick_lays_out_every_card() {
        let mut gallery = GalleryState::new(DeviceClass::Desktop);
        gallery.tick(Instant::now(), Viewport::new(1280.0, 720.0));
        assert_eq!(gallery.transforms.len(), gallery.cards.len());
    }
}
