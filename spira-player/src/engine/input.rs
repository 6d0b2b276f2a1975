//! Normalizes wheel, drag, and keyboard input into target-rotation
//! deltas.
//!
//! Every gesture family funnels through `SpiralMotion::adjust_target_rotation`
//! so the smoothing step mediates all motion; nothing here writes the
//! actual rotation angle.

use std::time::{Duration, Instant};

use super::motion::SpiralMotion;
use super::DeviceClass;
use crate::infra::constants::input as cfg;

/// How a press-release pair classified on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRelease {
    /// Quick, nearly stationary contact; candidates for card activation.
    Tap,
    /// Anything else: the pointer was used to drag the spiral.
    Drag,
}

#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    start_y: f32,
    last_y: f32,
    started_at: Option<Instant>,
    dragging: bool,
}

/// Per-gallery input state and sensitivity set.
#[derive(Debug, Clone)]
pub struct InputAdapter {
    scroll_sensitivity: f32,
    touch_sensitivity: f32,
    drag: DragState,
}

impl InputAdapter {
    pub fn for_class(class: DeviceClass) -> Self {
        let touch_sensitivity = match class {
            DeviceClass::Compact => cfg::TOUCH_SENSITIVITY_COMPACT,
            DeviceClass::Desktop => cfg::TOUCH_SENSITIVITY_DESKTOP,
        };
        Self {
            scroll_sensitivity: cfg::SCROLL_SENSITIVITY,
            touch_sensitivity,
            drag: DragState::default(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Wheel input: sign-preserved, magnitude-clamped delta.
    pub fn wheel(&self, motion: &mut SpiralMotion, delta_y: f32) {
        let normalized = delta_y.signum() * delta_y.abs().min(cfg::WHEEL_CLAMP);
        motion.adjust_target_rotation(normalized * self.scroll_sensitivity);
    }

    /// Pointer (mouse button or finger) went down.
    pub fn press(&mut self, y: f32, at: Instant) {
        self.drag = DragState {
            start_y: y,
            last_y: y,
            started_at: Some(at),
            dragging: true,
        };
    }

    /// Pointer moved while held; applies the vertical delta and updates
    /// the anchor. Returns true when a delta was applied.
    pub fn drag_to(&mut self, motion: &mut SpiralMotion, y: f32) -> bool {
        if !self.drag.dragging {
            return false;
        }
        let delta = (self.drag.last_y - y) * self.touch_sensitivity;
        motion.adjust_target_rotation(delta);
        self.drag.last_y = y;
        true
    }

    /// Pointer released; classifies the whole contact as tap or drag.
    pub fn release(&mut self, y: f32, at: Instant) -> PointerRelease {
        let started_at = self.drag.started_at;
        let travel = (y - self.drag.start_y).abs();
        self.drag.dragging = false;
        self.drag.started_at = None;

        let quick = started_at
            .map(|t| {
                at.saturating_duration_since(t)
                    < Duration::from_millis(cfg::TAP_MAX_MS)
            })
            .unwrap_or(false);
        if quick && travel < cfg::TAP_MAX_TRAVEL {
            PointerRelease::Tap
        } else {
            PointerRelease::Drag
        }
    }

    /// Cancel a drag without classifying it (pointer left the window).
    pub fn cancel(&mut self) {
        self.drag.dragging = false;
        self.drag.started_at = None;
    }

    /// Keyboard step: +1 rotates forward, -1 backward.
    pub fn key_step(&self, motion: &mut SpiralMotion, direction: i32) {
        motion.adjust_target_rotation(
            direction.signum() as f32 * cfg::KEYBOARD_STEP,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_clamps_magnitude() {
        let input = InputAdapter::for_class(DeviceClass::Desktop);
        let mut a = SpiralMotion::default();
        let mut b = SpiralMotion::default();

        input.wheel(&mut a, 500.0);
        input.wheel(&mut b, 60.0);
        assert_eq!(a.target_rotation(), b.target_rotation());

        let mut c = SpiralMotion::default();
        input.wheel(&mut c, -500.0);
        assert_eq!(c.target_rotation(), -b.target_rotation());
    }

    #[test]
    fn drag_applies_anchor_relative_deltas() {
        let mut input = InputAdapter::for_class(DeviceClass::Compact);
        let mut motion = SpiralMotion::default();
        let t0 = Instant::now();

        input.press(100.0, t0);
        assert!(input.drag_to(&mut motion, 60.0));
        let after_first = motion.target_rotation();
        assert!(after_first > 0.0);

        // Anchor moved with the pointer: a repeat at the same position
        // adds nothing.
        assert!(input.drag_to(&mut motion, 60.0));
        assert_eq!(motion.target_rotation(), after_first);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut input = InputAdapter::for_class(DeviceClass::Desktop);
        let mut motion = SpiralMotion::default();
        assert!(!input.drag_to(&mut motion, 50.0));
        assert_eq!(motion.target_rotation(), 0.0);
    }

    #[test]
    fn quick_still_contact_is_a_tap() {
        let mut input = InputAdapter::for_class(DeviceClass::Compact);
        let t0 = Instant::now();
        input.press(100.0, t0);
        let release = input.release(104.0, t0 + Duration::from_millis(100));
        assert_eq!(release, PointerRelease::Tap);
    }

    #[test]
    fn long_or_travelled_contact_is_a_drag() {
        let mut input = InputAdapter::for_class(DeviceClass::Compact);
        let t0 = Instant::now();

        input.press(100.0, t0);
        let slow = input.release(100.0, t0 + Duration::from_millis(400));
        assert_eq!(slow, PointerRelease::Drag);

        input.press(100.0, t0);
        let travelled = input.release(140.0, t0 + Duration::from_millis(100));
        assert_eq!(travelled, PointerRelease::Drag);
    }

    #[test]
    fn keyboard_steps_quarter_radian() {
        let input = InputAdapter::for_class(DeviceClass::Desktop);
        let mut motion = SpiralMotion::default();
        input.key_step(&mut motion, 1);
        input.key_step(&mut motion, 1);
        input.key_step(&mut motion, -1);
        assert!((motion.target_rotation() - 0.25).abs() < f32::EPSILON);
    }
}
