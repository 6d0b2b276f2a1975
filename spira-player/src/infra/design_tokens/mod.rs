//! Design tokens: animation timing and easing curves.

pub mod animation;

pub use animation::{CubicBezier, TransitionDurations};
