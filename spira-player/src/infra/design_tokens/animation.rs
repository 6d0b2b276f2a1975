//! Animation duration and easing tokens for consistent timing
//!
//! Style and speed are persisted user preferences; together they select
//! exactly one easing curve and one duration triple. Keeping the mapping
//! here means the gallery and the viewer can never disagree on pacing.

use std::time::Duration;

use spira_model::{AnimationSpeed, AnimationStyle};

/// Duration triple for the detail viewer
///
/// | Speed    | Enter | Exit  | Transition |
/// |----------|-------|-------|------------|
/// | `slow`   | 800ms | 600ms | 600ms      |
/// | `normal` | 600ms | 450ms | 500ms      |
/// | `fast`   | 400ms | 300ms | 300ms      |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDurations {
    /// Card rectangle to full viewport
    pub enter: Duration,
    /// Full viewport back to the card rectangle
    pub exit: Duration,
    /// Image-to-image cross-fade commit window
    pub transition: Duration,
}

impl TransitionDurations {
    /// Resolve the duration triple for a persisted speed preference.
    pub fn for_speed(speed: AnimationSpeed) -> Self {
        let (enter, exit, transition) = match speed {
            AnimationSpeed::Slow => (800, 600, 600),
            AnimationSpeed::Normal => (600, 450, 500),
            AnimationSpeed::Fast => (400, 300, 300),
        };
        Self {
            enter: Duration::from_millis(enter),
            exit: Duration::from_millis(exit),
            transition: Duration::from_millis(transition),
        }
    }
}

impl Default for TransitionDurations {
    fn default() -> Self {
        Self::for_speed(AnimationSpeed::Normal)
    }
}

/// Single-value duration used by the gallery for hover/card styling.
pub fn gallery_duration(speed: AnimationSpeed) -> Duration {
    match speed {
        AnimationSpeed::Slow => Duration::from_millis(800),
        AnimationSpeed::Normal => Duration::from_millis(500),
        AnimationSpeed::Fast => Duration::from_millis(300),
    }
}

/// A CSS-style cubic bézier easing curve evaluated numerically.
///
/// Control points outside [0, 1] on the y axis are allowed and produce
/// overshoot (the `spring` style relies on this).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Resolve the easing curve for a persisted style preference.
    pub fn for_style(style: AnimationStyle) -> Self {
        match style {
            AnimationStyle::Spring => Self::new(0.34, 1.56, 0.64, 1.0),
            AnimationStyle::Smooth => Self::new(0.25, 0.8, 0.25, 1.0),
            AnimationStyle::Snappy => Self::new(0.2, 0.0, 0.0, 1.0),
            AnimationStyle::Gentle => Self::new(0.4, 0.0, 0.2, 1.0),
        }
    }

    /// Evaluate eased progress for linear progress `t` in [0, 1].
    pub fn eval(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let u = self.solve_curve_x(t);
        sample(self.y1, self.y2, u)
    }

    /// Find the curve parameter whose x coordinate equals `x`.
    ///
    /// Newton-Raphson with a bisection fallback when the derivative
    /// becomes too flat, mirroring the browser implementation this
    /// curve format comes from.
    fn solve_curve_x(&self, x: f32) -> f32 {
        let mut u = x;
        for _ in 0..8 {
            let x_err = sample(self.x1, self.x2, u) - x;
            if x_err.abs() < 1e-6 {
                return u;
            }
            let d = sample_derivative(self.x1, self.x2, u);
            if d.abs() < 1e-6 {
                break;
            }
            u -= x_err / d;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        u = x;
        while hi - lo > 1e-6 {
            let x_at = sample(self.x1, self.x2, u);
            if (x_at - x).abs() < 1e-6 {
                return u;
            }
            if x_at < x {
                lo = u;
            } else {
                hi = u;
            }
            u = (lo + hi) / 2.0;
        }
        u
    }
}

/// One-dimensional cubic bézier with endpoints pinned at 0 and 1.
fn sample(p1: f32, p2: f32, u: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn sample_derivative(p1: f32, p2: f32, u: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1
        + 6.0 * inv * u * (p2 - p1)
        + 3.0 * u * u * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_triples_match_speed() {
        let slow = TransitionDurations::for_speed(AnimationSpeed::Slow);
        assert_eq!(slow.enter, Duration::from_millis(800));
        assert_eq!(slow.exit, Duration::from_millis(600));
        assert_eq!(slow.transition, Duration::from_millis(600));

        let fast = TransitionDurations::for_speed(AnimationSpeed::Fast);
        assert_eq!(fast.enter, Duration::from_millis(400));
        assert_eq!(fast.transition, Duration::from_millis(300));
    }

    #[test]
    fn easing_endpoints_are_exact() {
        for style in AnimationStyle::ALL {
            let curve = CubicBezier::for_style(style);
            assert_eq!(curve.eval(0.0), 0.0);
            assert_eq!(curve.eval(1.0), 1.0);
        }
    }

    #[test]
    fn easing_is_monotonic_in_x() {
        // The solver must invert x(u) consistently: increasing progress
        // never decreases the solved parameter.
        let curve = CubicBezier::for_style(AnimationStyle::Smooth);
        let mut last = 0.0;
        for i in 0..=100 {
            let eased = curve.eval(i as f32 / 100.0);
            assert!(eased >= last - 1e-4);
            last = eased;
        }
    }

    #[test]
    fn spring_overshoots_past_one() {
        let spring = CubicBezier::for_style(AnimationStyle::Spring);
        let peak = (1..100)
            .map(|i| spring.eval(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn style_and_speed_select_one_pair() {
        // The invariant the settings record relies on: the mapping is
        // total and deterministic.
        for style in AnimationStyle::ALL {
            assert_eq!(
                CubicBezier::for_style(style),
                CubicBezier::for_style(style)
            );
        }
        for speed in AnimationSpeed::ALL {
            assert_eq!(
                TransitionDurations::for_speed(speed),
                TransitionDurations::for_speed(speed)
            );
        }
    }
}
