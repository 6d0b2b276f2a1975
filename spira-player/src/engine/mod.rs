//! The spiral gallery engine: pure simulation state and layout math.
//!
//! Nothing in this module touches iced, the clock (beyond explicit
//! `Instant` parameters), or I/O; every frame-level decision is a
//! function of its inputs so the whole engine can be driven from tests.

pub mod input;
pub mod layout;
pub mod motion;

pub use input::{InputAdapter, PointerRelease};
pub use layout::{CardRect, CardTransform, SpiralPreset, Viewport};
pub use motion::{MotionConfig, MotionSnapshot, SpiralMotion};

use crate::infra::constants::COMPACT_BREAKPOINT;

/// Presentation class derived from the viewport width.
///
/// Compact viewports get the touch-tuned sensitivities and the tighter
/// spiral geometry; the breakpoint follows the shipped gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Compact,
}

impl DeviceClass {
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT {
            DeviceClass::Compact
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, DeviceClass::Compact)
    }
}
