//! Viewer phase machine and cross-fade bookkeeping.
//!
//! Phases only move forward: entering -> active -> scrollable ->
//! exiting. Scheduled transitions carry an epoch so a timer that
//! outlives its viewer instance (or an early close) mutates nothing.

use std::time::{Duration, Instant};

use crate::engine::layout::{CardRect, Viewport};
use crate::gallery::state::CardSource;
use crate::infra::constants::viewer as cfg;
use crate::infra::design_tokens::{CubicBezier, TransitionDurations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerPhase {
    /// Image pinned to the originating card rectangle, no transition.
    Entering,
    /// Animating from the card rectangle to full viewport.
    Active,
    /// Fully open; paging and detail gestures accepted.
    Scrollable,
    /// Animating back to the card rectangle; terminal.
    Exiting,
}

impl ViewerPhase {
    fn rank(self) -> u8 {
        match self {
            ViewerPhase::Entering => 0,
            ViewerPhase::Active => 1,
            ViewerPhase::Scrollable => 2,
            ViewerPhase::Exiting => 3,
        }
    }
}

/// State of one opened project viewer; created on card activation,
/// destroyed when the exit animation finishes.
#[derive(Debug, Clone)]
pub struct DetailViewer {
    pub card_index: usize,
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
    /// Screen rectangle of the originating card, the open/close anchor.
    pub origin: CardRect,

    pub phase: ViewerPhase,
    pub phase_changed_at: Instant,
    /// Guard shared by every timer scheduled for this viewer instance.
    pub epoch: u64,

    pub current_image: usize,
    pub previous_image: Option<usize>,
    transitioning: bool,
    transition_seq: u64,
    transition_started_at: Instant,

    pub details_visible: bool,
    pub(crate) scroll_accumulator: f32,
    pub(crate) cooldown_until: Option<Instant>,

    /// Mean luma of the current image says which chrome palette to use.
    pub is_light_image: bool,
}

impl DetailViewer {
    pub fn open(
        card_index: usize,
        card: &CardSource,
        origin: CardRect,
        epoch: u64,
        now: Instant,
    ) -> Self {
        let mut images = card.image_urls.clone();
        if images.is_empty() {
            if let Some(cover) = &card.cover_url {
                images.push(cover.clone());
            }
        }
        Self {
            card_index,
            title: card.title.clone(),
            description: card.description.clone(),
            images,
            origin,
            phase: ViewerPhase::Entering,
            phase_changed_at: now,
            epoch,
            current_image: 0,
            previous_image: None,
            transitioning: false,
            transition_seq: 0,
            transition_started_at: now,
            details_visible: false,
            scroll_accumulator: 0.0,
            cooldown_until: None,
            is_light_image: false,
        }
    }

    /// Number of pageable positions; a missing image list still renders
    /// one placeholder page.
    pub fn image_count(&self) -> usize {
        self.images.len().max(1)
    }

    pub fn current_url(&self) -> Option<&str> {
        self.images.get(self.current_image).map(String::as_str)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn transition_seq(&self) -> u64 {
        self.transition_seq
    }

    /// Apply a scheduled phase transition. Stale epochs and any
    /// non-forward move are rejected; `Exiting` is never entered here.
    pub fn apply_phase_deadline(
        &mut self,
        epoch: u64,
        target: ViewerPhase,
        now: Instant,
    ) -> bool {
        if epoch != self.epoch
            || self.phase == ViewerPhase::Exiting
            || target == ViewerPhase::Exiting
            || target.rank() <= self.phase.rank()
        {
            return false;
        }
        self.phase = target;
        self.phase_changed_at = now;
        true
    }

    /// Start the exit animation. The new epoch invalidates every timer
    /// scheduled so far; the caller schedules the close-finished timer
    /// against it. Returns false when already exiting.
    pub fn begin_close(&mut self, new_epoch: u64, now: Instant) -> bool {
        if self.phase == ViewerPhase::Exiting {
            return false;
        }
        self.phase = ViewerPhase::Exiting;
        self.phase_changed_at = now;
        self.epoch = new_epoch;
        true
    }

    /// Request a page change. Same-index requests, out-of-range
    /// indices, and requests during an in-flight cross-fade are no-ops.
    /// On success returns the sequence number the caller must echo back
    /// to clear the cross-fade.
    pub fn change_image(&mut self, index: usize, now: Instant) -> Option<u64> {
        if self.transitioning
            || index == self.current_image
            || index >= self.image_count()
        {
            return None;
        }
        self.previous_image = Some(self.current_image);
        self.current_image = index;
        self.transitioning = true;
        self.transition_seq += 1;
        self.transition_started_at = now;
        Some(self.transition_seq)
    }

    /// Clear the cross-fade marker. Superseded sequence numbers are
    /// ignored, which is what makes pending clears safe to abandon.
    pub fn clear_previous(&mut self, seq: u64) {
        if seq == self.transition_seq {
            self.previous_image = None;
            self.transitioning = false;
        }
    }

    /// Duration after which the previous-image marker is cleared.
    pub fn crossfade_clear_delay(durations: &TransitionDurations) -> Duration {
        durations.transition
            + Duration::from_millis(cfg::CROSSFADE_CLEAR_SLACK_MS)
    }

    /// How far the image has expanded from the card rectangle toward
    /// the full viewport, eased; may overshoot 1.0 for springy curves.
    pub fn expansion(
        &self,
        now: Instant,
        durations: &TransitionDurations,
        easing: &CubicBezier,
    ) -> f32 {
        match self.phase {
            ViewerPhase::Entering => 0.0,
            ViewerPhase::Active => {
                easing.eval(self.linear_progress(now, durations.enter))
            }
            ViewerPhase::Scrollable => 1.0,
            ViewerPhase::Exiting => {
                1.0 - easing.eval(self.linear_progress(now, durations.exit))
            }
        }
    }

    /// Opacity of the incoming image during a cross-fade, or None when
    /// no fade is running.
    pub fn crossfade_opacity(
        &self,
        now: Instant,
        durations: &TransitionDurations,
        fade_easing: &CubicBezier,
    ) -> Option<f32> {
        if !self.transitioning {
            return None;
        }
        let fade = durations.transition.mul_f32(cfg::CROSSFADE_FACTOR);
        let elapsed = now.saturating_duration_since(self.transition_started_at);
        let t = (elapsed.as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0);
        Some(fade_easing.eval(t))
    }

    fn linear_progress(&self, now: Instant, total: Duration) -> f32 {
        let elapsed = now.saturating_duration_since(self.phase_changed_at);
        (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Interpolate the image rectangle between the originating card and the
/// full viewport. `expansion` beyond [0, 1] overshoots deliberately.
pub fn image_rect(
    origin: CardRect,
    viewport: Viewport,
    expansion: f32,
) -> CardRect {
    let lerp = |from: f32, to: f32| from + (to - from) * expansion;
    CardRect {
        x: lerp(origin.x, 0.0),
        y: lerp(origin.y, 0.0),
        width: lerp(origin.width, viewport.width),
        height: lerp(origin.height, viewport.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardSource {
        CardSource {
            title: "Test".to_owned(),
            description: None,
            cover_url: Some("cover.jpg".to_owned()),
            image_urls: vec![
                "a.jpg".to_owned(),
                "b.jpg".to_owned(),
                "c.jpg".to_owned(),
            ],
        }
    }

    fn origin() -> CardRect {
        CardRect {
            x: 100.0,
            y: 80.0,
            width: 240.0,
            height: 200.0,
        }
    }

    fn viewer() -> DetailViewer {
        DetailViewer::open(0, &card(), origin(), 1, Instant::now())
    }

    #[test]
    fn phases_never_regress() {
        let mut v = viewer();
        let now = Instant::now();
        assert!(v.apply_phase_deadline(1, ViewerPhase::Active, now));
        assert!(v.apply_phase_deadline(1, ViewerPhase::Scrollable, now));
        // Backwards and repeat deadlines are rejected.
        assert!(!v.apply_phase_deadline(1, ViewerPhase::Active, now));
        assert!(!v.apply_phase_deadline(1, ViewerPhase::Scrollable, now));
        assert_eq!(v.phase, ViewerPhase::Scrollable);
    }

    #[test]
    fn stale_epoch_deadlines_are_dropped() {
        let mut v = viewer();
        let now = Instant::now();
        assert!(!v.apply_phase_deadline(0, ViewerPhase::Active, now));
        assert_eq!(v.phase, ViewerPhase::Entering);
    }

    #[test]
    fn closing_invalidates_pending_deadlines() {
        let mut v = viewer();
        let now = Instant::now();
        assert!(v.apply_phase_deadline(1, ViewerPhase::Active, now));
        assert!(v.begin_close(2, now));
        // The 700ms scrollable timer fires afterwards with the old epoch.
        assert!(!v.apply_phase_deadline(1, ViewerPhase::Scrollable, now));
        assert_eq!(v.phase, ViewerPhase::Exiting);
        // A second close request is a no-op.
        assert!(!v.begin_close(3, now));
    }

    #[test]
    fn change_image_respects_bounds_and_flight() {
        let mut v = viewer();
        let now = Instant::now();

        assert_eq!(v.change_image(0, now), None, "same index is a no-op");
        assert_eq!(v.change_image(3, now), None, "out of range is a no-op");

        let seq = v.change_image(1, now).expect("valid page turn");
        assert_eq!(v.current_image, 1);
        assert_eq!(v.previous_image, Some(0));
        assert_eq!(
            v.change_image(2, now),
            None,
            "in-flight transition blocks further paging"
        );

        v.clear_previous(seq);
        assert_eq!(v.previous_image, None);
        assert!(v.change_image(2, now).is_some());
    }

    #[test]
    fn superseded_clear_is_ignored() {
        let mut v = viewer();
        let now = Instant::now();
        let first = v.change_image(1, now).expect("page");
        v.clear_previous(first);
        let second = v.change_image(2, now).expect("page");
        v.clear_previous(first);
        assert_eq!(v.previous_image, Some(1), "stale clear must not apply");
        v.clear_previous(second);
        assert_eq!(v.previous_image, None);
    }

    #[test]
    fn empty_image_list_falls_back_to_cover() {
        let source = CardSource {
            title: "Bare".to_owned(),
            description: None,
            cover_url: Some("cover.jpg".to_owned()),
            image_urls: vec![],
        };
        let v = DetailViewer::open(0, &source, origin(), 1, Instant::now());
        assert_eq!(v.image_count(), 1);
        assert_eq!(v.current_url(), Some("cover.jpg"));
    }

    #[test]
    fn image_rect_spans_card_to_viewport() {
        let viewport = Viewport::new(1280.0, 720.0);
        let closed = image_rect(origin(), viewport, 0.0);
        assert_eq!(closed, origin());

        let open = image_rect(origin(), viewport, 1.0);
        assert_eq!(open.x, 0.0);
        assert_eq!(open.width, viewport.width);

        // Springy overshoot grows past the viewport instead of clamping.
        let overshot = image_rect(origin(), viewport, 1.1);
        assert!(overshot.width > viewport.width);
    }
}
