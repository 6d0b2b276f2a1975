//! The single mutable physical state driving the spiral.
//!
//! One scalar target rotation is written by the input adapter; each
//! display frame the actual rotation is exponentially smoothed toward
//! it, velocity is derived from the step, and the velocity feeds the
//! sine-wave subsystem that adds secondary motion in the layout pass.

use std::time::Instant;

use crate::infra::constants::physics;

/// Configuration for the motion integrator.
///
/// Defaults are the shipped gallery's tuning; the smoothing coefficient
/// trades responsiveness for the heavy, momentum-like feel.
#[derive(Debug, Clone, Copy)]
pub struct MotionConfig {
    /// Exponential smoothing coefficient per reference frame.
    pub smoothing: f32,
    /// Velocity clamp in units of `velocity_scale` rad/frame.
    pub max_velocity: f32,
    pub velocity_scale: f32,
    /// Wave intensity target per unit velocity.
    pub wave_velocity_multiplier: f32,
    /// Per-frame wave intensity decay.
    pub wave_decay: f32,
    /// Fraction of the intensity target blended in per decayed frame.
    pub wave_intensity_blend: f32,
    /// Wave phase advance per unit velocity per frame.
    pub wave_phase_rate: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smoothing: physics::SMOOTHING,
            max_velocity: physics::MAX_VELOCITY,
            velocity_scale: physics::VELOCITY_SCALE,
            wave_velocity_multiplier: physics::WAVE_VELOCITY_MULTIPLIER,
            wave_decay: physics::WAVE_DECAY,
            wave_intensity_blend: physics::WAVE_INTENSITY_BLEND,
            wave_phase_rate: physics::WAVE_PHASE_RATE,
        }
    }
}

/// Immutable per-frame view of the motion state consumed by the layout
/// solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionSnapshot {
    pub rotation_angle: f32,
    pub wave_intensity: f32,
    pub wave_phase: f32,
}

/// Owned simulation state, one instance per mounted gallery view.
#[derive(Debug, Clone)]
pub struct SpiralMotion {
    cfg: MotionConfig,
    rotation_angle: f32,
    target_rotation: f32,
    velocity: f32,
    wave_intensity: f32,
    wave_phase: f32,
    last_tick: Option<Instant>,
}

impl Default for SpiralMotion {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl SpiralMotion {
    pub fn new(cfg: MotionConfig) -> Self {
        Self {
            cfg,
            rotation_angle: 0.0,
            target_rotation: 0.0,
            velocity: 0.0,
            wave_intensity: 0.0,
            wave_phase: 0.0,
            last_tick: None,
        }
    }

    /// The single mutation point for all input families.
    pub fn adjust_target_rotation(&mut self, delta: f32) {
        self.target_rotation += delta;
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn target_rotation(&self) -> f32 {
        self.target_rotation
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn snapshot(&self) -> MotionSnapshot {
        MotionSnapshot {
            rotation_angle: self.rotation_angle,
            wave_intensity: self.wave_intensity,
            wave_phase: self.wave_phase,
        }
    }

    /// Advance using an external frame timestamp from `window::frames()`.
    ///
    /// The elapsed-frame factor is capped so a suspended window does not
    /// catch up with one violent jump; the first tick counts as exactly
    /// one reference frame.
    pub fn tick_at(&mut self, now: Instant) -> MotionSnapshot {
        let dt = match self.last_tick {
            Some(last) => {
                let elapsed_ms =
                    now.saturating_duration_since(last).as_secs_f32() * 1000.0;
                (elapsed_ms / physics::FRAME_MS).min(physics::MAX_FRAME_FACTOR)
            }
            None => 1.0,
        };
        self.last_tick = Some(now);
        self.advance(dt)
    }

    /// Advance by `dt` reference frames (1.0 = one 60 Hz frame).
    ///
    /// Exposed separately so tests can drive the integrator with a
    /// fixed timestep; `tick_at` is a thin wall-clock wrapper.
    pub fn advance(&mut self, dt: f32) -> MotionSnapshot {
        let dt = dt.clamp(0.0, physics::MAX_FRAME_FACTOR);

        let smoothing_power = (1.0 - self.cfg.smoothing).powf(dt);
        let diff = self.target_rotation - self.rotation_angle;
        let step = diff * (1.0 - smoothing_power);

        self.rotation_angle += step;
        self.velocity = if dt > 0.0 { step / dt } else { 0.0 };

        let cap = self.cfg.max_velocity * self.cfg.velocity_scale;
        self.velocity = self.velocity.clamp(-cap, cap);

        let target_intensity = (self.velocity.abs()
            * self.cfg.wave_velocity_multiplier)
            .min(1.0);
        let decay_power = self.cfg.wave_decay.powf(dt);
        self.wave_intensity = self.wave_intensity * decay_power
            + target_intensity
                * (1.0 - decay_power)
                * self.cfg.wave_intensity_blend;
        self.wave_phase += self.velocity * self.cfg.wave_phase_rate * dt;

        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_target() {
        let mut motion = SpiralMotion::default();
        motion.adjust_target_rotation(3.5);
        for _ in 0..2000 {
            motion.advance(1.0);
        }
        assert!((motion.rotation_angle() - 3.5).abs() < 1e-3);
        assert!(motion.velocity().abs() < 1e-4);
    }

    #[test]
    fn velocity_stays_bounded() {
        let mut motion = SpiralMotion::default();
        let cap = physics::MAX_VELOCITY * physics::VELOCITY_SCALE;
        // A wildly large jump must still respect the clamp every tick.
        motion.adjust_target_rotation(1000.0);
        for _ in 0..500 {
            motion.advance(2.0);
            assert!(motion.velocity().abs() <= cap + f32::EPSILON);
        }
    }

    #[test]
    fn wave_intensity_decays_at_rest() {
        let mut motion = SpiralMotion::default();
        motion.adjust_target_rotation(5.0);
        for _ in 0..30 {
            motion.advance(1.0);
        }
        let excited = motion.snapshot().wave_intensity;
        assert!(excited > 0.0);

        // Stop moving: intensity must relax toward zero.
        for _ in 0..2000 {
            motion.advance(1.0);
        }
        assert!(motion.snapshot().wave_intensity < 0.001);
    }

    #[test]
    fn zero_dt_is_inert() {
        let mut motion = SpiralMotion::default();
        motion.adjust_target_rotation(1.0);
        let before = motion.snapshot();
        let after = motion.advance(0.0);
        assert_eq!(before.rotation_angle, after.rotation_angle);
        assert_eq!(motion.velocity(), 0.0);
    }

    #[test]
    fn first_tick_counts_one_frame() {
        let mut a = SpiralMotion::default();
        let mut b = SpiralMotion::default();
        a.adjust_target_rotation(1.0);
        b.adjust_target_rotation(1.0);

        let snap = a.tick_at(Instant::now());
        let reference = b.advance(1.0);
        assert!((snap.rotation_angle - reference.rotation_angle).abs() < 1e-6);
    }
}
