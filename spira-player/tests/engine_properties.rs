//! End-to-end properties of the gallery engine: input -> motion ->
//! layout, driven with fixed timesteps.

use spira_player::engine::{
    layout::{self, SpiralPreset, Viewport},
    DeviceClass, InputAdapter, SpiralMotion,
};
use spira_player::infra::constants::{input as input_cfg, physics};

const VIEWPORT: Viewport = Viewport {
    width: 1440.0,
    height: 900.0,
};

#[test]
fn wheel_burst_converges_and_velocity_dies() {
    let input = InputAdapter::for_class(DeviceClass::Desktop);
    let mut motion = SpiralMotion::default();

    for _ in 0..30 {
        input.wheel(&mut motion, 120.0);
        motion.advance(1.0);
    }
    let target = motion.target_rotation();
    assert!(target > 0.0);

    // Thirty clamped wheel events at sensitivity 0.00018.
    let expected = 30.0 * input_cfg::WHEEL_CLAMP * input_cfg::SCROLL_SENSITIVITY;
    assert!((target - expected).abs() < 1e-5);

    for _ in 0..3000 {
        motion.advance(1.0);
    }
    assert!((motion.rotation_angle() - target).abs() < 1e-4);
    assert!(motion.velocity().abs() < 1e-5);
}

#[test]
fn velocity_is_bounded_for_adversarial_input() {
    let input = InputAdapter::for_class(DeviceClass::Compact);
    let mut motion = SpiralMotion::default();
    let cap = physics::MAX_VELOCITY * physics::VELOCITY_SCALE;

    // Alternate violent wheel bursts, drags, and stalls with varying
    // frame pacing; the clamp must hold on every single tick.
    let mut t = 0u32;
    for step in 0..600 {
        match step % 7 {
            0 | 1 => input.wheel(&mut motion, 10_000.0),
            2 => input.wheel(&mut motion, -10_000.0),
            3 => motion.adjust_target_rotation(50.0),
            4 => motion.adjust_target_rotation(-75.0),
            _ => {}
        }
        t = t.wrapping_add(step);
        let dt = 0.25 + (t % 8) as f32 * 0.25; // 0.25..2.0 frames
        motion.advance(dt);
        assert!(
            motion.velocity().abs() <= cap + f32::EPSILON,
            "velocity escaped the clamp at step {step}"
        );
    }
}

#[test]
fn full_pipeline_layout_is_deterministic() {
    let run = || {
        let input = InputAdapter::for_class(DeviceClass::Desktop);
        let mut motion = SpiralMotion::default();
        let mut transforms = Vec::new();
        for i in 0..120 {
            input.wheel(&mut motion, if i % 2 == 0 { 45.0 } else { -20.0 });
            let snapshot = motion.advance(1.0);
            layout::layout_into(
                &mut transforms,
                &snapshot,
                20,
                VIEWPORT,
                &SpiralPreset::DESKTOP,
            );
        }
        transforms
    };

    let a = run();
    let b = run();
    assert_eq!(a, b, "identical input streams must yield identical layouts");
}

#[test]
fn stacking_tracks_depth_across_a_full_revolution() {
    let mut motion = SpiralMotion::default();
    motion.adjust_target_rotation(std::f32::consts::TAU);

    let mut transforms = Vec::new();
    for _ in 0..4000 {
        let snapshot = motion.advance(1.0);
        layout::layout_into(
            &mut transforms,
            &snapshot,
            12,
            VIEWPORT,
            &SpiralPreset::COMPACT,
        );
        for a in &transforms {
            for b in &transforms {
                if (a.z - b.z).abs() > 1.0 {
                    assert_eq!(a.z < b.z, a.stack_order > b.stack_order);
                }
            }
        }
    }
}

#[test]
fn keyboard_steps_land_on_exact_targets() {
    let input = InputAdapter::for_class(DeviceClass::Desktop);
    let mut motion = SpiralMotion::default();

    input.key_step(&mut motion, 1);
    for _ in 0..3000 {
        motion.advance(1.0);
    }
    assert!((motion.rotation_angle() - input_cfg::KEYBOARD_STEP).abs() < 1e-4);

    input.key_step(&mut motion, -1);
    for _ in 0..3000 {
        motion.advance(1.0);
    }
    assert!(motion.rotation_angle().abs() < 1e-4);
}
