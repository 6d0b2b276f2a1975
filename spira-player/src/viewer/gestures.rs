//! Gesture interpreters for the open viewer.
//!
//! Wheel input accumulates until a threshold commits one step, then a
//! cooldown window suppresses over-triggering from continuous input.
//! Swipes classify by dominant axis. All interpreters are pure over
//! explicit timestamps so tests can drive them deterministically.

use std::time::{Duration, Instant};

use super::state::{DetailViewer, ViewerPhase};
use crate::infra::constants::viewer as cfg;

/// What the update layer must do after a gesture was interpreted.
///
/// Detail visibility changes are applied in place; page turns and
/// closes need scheduling, so they are surfaced to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureOutcome {
    /// A cross-fade started; schedule its clear with this sequence.
    pub image_change: Option<u64>,
    /// The viewer asked to close.
    pub close_requested: bool,
}

impl GestureOutcome {
    const NONE: Self = Self {
        image_change: None,
        close_requested: false,
    };
}

/// Keyboard gestures the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    Next,
    Previous,
}

impl DetailViewer {
    /// Wheel input while open. Only the scrollable phase interprets
    /// steps; earlier phases ignore the wheel entirely.
    pub fn on_wheel(&mut self, delta_y: f32, now: Instant) -> GestureOutcome {
        if self.phase != ViewerPhase::Scrollable {
            return GestureOutcome::NONE;
        }
        if self.cooldown_until.is_some_and(|until| now < until) {
            return GestureOutcome::NONE;
        }

        self.scroll_accumulator += delta_y;
        if self.scroll_accumulator.abs() <= cfg::WHEEL_THRESHOLD {
            return GestureOutcome::NONE;
        }

        let downward = self.scroll_accumulator > 0.0;
        self.scroll_accumulator = 0.0;
        self.cooldown_until =
            Some(now + Duration::from_millis(cfg::WHEEL_COOLDOWN_MS));

        if !self.details_visible {
            if downward {
                self.details_visible = true;
                GestureOutcome::NONE
            } else if self.current_image == 0 {
                // Scroll up on the first image with nothing revealed
                // hands control back to the spiral.
                GestureOutcome {
                    close_requested: true,
                    ..GestureOutcome::NONE
                }
            } else {
                GestureOutcome::NONE
            }
        } else if downward {
            let next = self.current_image + 1;
            GestureOutcome {
                image_change: if next < self.image_count() {
                    self.change_image(next, now)
                } else {
                    None
                },
                ..GestureOutcome::NONE
            }
        } else if self.current_image > 0 {
            GestureOutcome {
                image_change: self.change_image(self.current_image - 1, now),
                ..GestureOutcome::NONE
            }
        } else {
            self.details_visible = false;
            GestureOutcome::NONE
        }
    }

    /// A completed touch contact, classified by dominant axis.
    pub fn on_swipe(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        elapsed: Duration,
        now: Instant,
    ) -> GestureOutcome {
        if self.phase != ViewerPhase::Scrollable
            || elapsed >= Duration::from_millis(cfg::SWIPE_MAX_MS)
        {
            return GestureOutcome::NONE;
        }

        let horizontal =
            delta_x.abs() > cfg::SWIPE_MIN_TRAVEL && delta_x.abs() > delta_y.abs();
        let vertical =
            delta_y.abs() > cfg::SWIPE_MIN_TRAVEL && delta_y.abs() > delta_x.abs();

        if horizontal {
            if delta_x < 0.0 && self.current_image + 1 < self.image_count() {
                let change = self.change_image(self.current_image + 1, now);
                self.details_visible = true;
                return GestureOutcome {
                    image_change: change,
                    ..GestureOutcome::NONE
                };
            }
            if delta_x > 0.0 && self.current_image > 0 {
                return GestureOutcome {
                    image_change: self
                        .change_image(self.current_image - 1, now),
                    ..GestureOutcome::NONE
                };
            }
            return GestureOutcome::NONE;
        }

        if vertical {
            if delta_y < 0.0 {
                self.details_visible = true;
                return GestureOutcome::NONE;
            }
            // Swipe down mirrors wheel-up semantics.
            if self.details_visible {
                if self.current_image > 0 {
                    return GestureOutcome {
                        image_change: self
                            .change_image(self.current_image - 1, now),
                        ..GestureOutcome::NONE
                    };
                }
                self.details_visible = false;
                return GestureOutcome::NONE;
            }
            return GestureOutcome {
                close_requested: true,
                ..GestureOutcome::NONE
            };
        }

        GestureOutcome::NONE
    }

    /// Keyboard input. Escape closes from any phase; paging waits for
    /// the scrollable phase like every other gesture.
    pub fn on_key(&mut self, key: ViewerKey, now: Instant) -> GestureOutcome {
        match key {
            ViewerKey::Escape => GestureOutcome {
                close_requested: true,
                ..GestureOutcome::NONE
            },
            ViewerKey::Next => {
                if self.phase != ViewerPhase::Scrollable {
                    return GestureOutcome::NONE;
                }
                let next = self.current_image + 1;
                if next < self.image_count() {
                    let change = self.change_image(next, now);
                    self.details_visible = true;
                    GestureOutcome {
                        image_change: change,
                        ..GestureOutcome::NONE
                    }
                } else {
                    GestureOutcome::NONE
                }
            }
            ViewerKey::Previous => {
                if self.phase != ViewerPhase::Scrollable
                    || self.current_image == 0
                {
                    return GestureOutcome::NONE;
                }
                GestureOutcome {
                    image_change: self
                        .change_image(self.current_image - 1, now),
                    ..GestureOutcome::NONE
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::layout::CardRect;
    use crate::gallery::state::CardSource;

    fn scrollable_viewer(image_count: usize) -> DetailViewer {
        let source = CardSource {
            title: "Test".to_owned(),
            description: None,
            cover_url: Some("cover.jpg".to_owned()),
            image_urls: (0..image_count).map(|i| format!("{i}.jpg")).collect(),
        };
        let now = Instant::now();
        let mut v =
            DetailViewer::open(0, &source, CardRect::default(), 1, now);
        v.apply_phase_deadline(1, ViewerPhase::Active, now);
        v.apply_phase_deadline(1, ViewerPhase::Scrollable, now);
        v
    }

    #[test]
    fn accumulated_wheel_commits_exactly_one_step() {
        let mut v = scrollable_viewer(3);
        let t0 = Instant::now();

        // 150 total in three bursts: one committed step, accumulator reset.
        assert_eq!(v.on_wheel(50.0, t0), GestureOutcome::default());
        assert_eq!(v.on_wheel(50.0, t0), GestureOutcome::default());
        v.on_wheel(50.0, t0);
        assert!(v.details_visible, "first downward step reveals details");
        assert_eq!(v.scroll_accumulator, 0.0);

        // Identical input inside the cooldown window is ignored.
        let inside = t0 + Duration::from_millis(200);
        v.on_wheel(150.0, inside);
        assert_eq!(v.current_image, 0);

        // After the window, the same input pages forward.
        let after = t0 + Duration::from_millis(450);
        let outcome = v.on_wheel(150.0, after);
        assert!(outcome.image_change.is_some());
        assert_eq!(v.current_image, 1);
    }

    #[test]
    fn wheel_up_on_first_image_closes() {
        let mut v = scrollable_viewer(3);
        let outcome = v.on_wheel(-130.0, Instant::now());
        assert!(outcome.close_requested);
    }

    #[test]
    fn wheel_up_with_details_at_first_image_hides_them() {
        let mut v = scrollable_viewer(3);
        let t0 = Instant::now();
        v.on_wheel(130.0, t0); // reveal
        assert!(v.details_visible);
        let outcome = v.on_wheel(-130.0, t0 + Duration::from_millis(500));
        assert!(!v.details_visible);
        assert!(!outcome.close_requested);
        assert_eq!(outcome.image_change, None);
    }

    #[test]
    fn wheel_down_at_last_image_is_a_noop_step() {
        let mut v = scrollable_viewer(2);
        let mut t = Instant::now();
        v.on_wheel(130.0, t); // details
        t += Duration::from_millis(500);
        v.on_wheel(130.0, t); // -> image 1
        v.clear_previous(v.transition_seq());
        t += Duration::from_millis(500);
        let outcome = v.on_wheel(130.0, t);
        assert_eq!(outcome, GestureOutcome::default());
        assert_eq!(v.current_image, 1);
    }

    #[test]
    fn gestures_wait_for_the_scrollable_phase() {
        let source = CardSource {
            title: "Test".to_owned(),
            description: None,
            cover_url: None,
            image_urls: vec!["a.jpg".to_owned(), "b.jpg".to_owned()],
        };
        let now = Instant::now();
        let mut v =
            DetailViewer::open(0, &source, CardRect::default(), 1, now);

        assert_eq!(v.on_wheel(500.0, now), GestureOutcome::default());
        assert_eq!(
            v.on_swipe(-120.0, 0.0, Duration::from_millis(100), now),
            GestureOutcome::default()
        );
        // Escape still closes before the viewer is scrollable.
        assert!(v.on_key(ViewerKey::Escape, now).close_requested);
    }

    #[test]
    fn single_image_set_disables_paging_not_details() {
        let mut v = scrollable_viewer(1);
        let mut t = Instant::now();

        assert_eq!(v.on_key(ViewerKey::Next, t), GestureOutcome::default());
        assert_eq!(v.on_key(ViewerKey::Previous, t), GestureOutcome::default());
        assert_eq!(
            v.on_swipe(-200.0, 0.0, Duration::from_millis(100), t),
            GestureOutcome::default()
        );
        assert_eq!(v.current_image, 0);

        v.on_wheel(130.0, t);
        assert!(v.details_visible, "detail reveal still works");
        t += Duration::from_millis(500);
        v.on_wheel(-130.0, t);
        assert!(!v.details_visible, "detail hide still works");
        t += Duration::from_millis(500);
        assert!(v.on_wheel(-130.0, t).close_requested, "close still works");
    }

    #[test]
    fn horizontal_swipe_pages_and_reveals() {
        let mut v = scrollable_viewer(3);
        let now = Instant::now();
        let outcome = v.on_swipe(-80.0, 10.0, Duration::from_millis(200), now);
        assert!(outcome.image_change.is_some());
        assert_eq!(v.current_image, 1);
        assert!(v.details_visible);
    }

    #[test]
    fn slow_or_axis_ambiguous_contacts_are_ignored() {
        let mut v = scrollable_viewer(3);
        let now = Instant::now();
        assert_eq!(
            v.on_swipe(-80.0, 10.0, Duration::from_millis(900), now),
            GestureOutcome::default()
        );
        assert_eq!(
            v.on_swipe(60.0, 60.0, Duration::from_millis(100), now),
            GestureOutcome::default()
        );
    }

    #[test]
    fn swipe_down_without_details_closes() {
        let mut v = scrollable_viewer(3);
        let outcome =
            v.on_swipe(5.0, 90.0, Duration::from_millis(200), Instant::now());
        assert!(outcome.close_requested);
    }
}
