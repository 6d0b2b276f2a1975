//! Per-frame spiral layout solver.
//!
//! A pure function of (motion snapshot, card index, viewport, preset):
//! no clock, no RNG, no side effects. Given identical inputs it returns
//! bit-identical transforms, which the layout tests rely on.

use super::motion::MotionSnapshot;
use super::DeviceClass;
use crate::infra::constants::spiral;

/// Viewport dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Device-dependent spiral geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPreset {
    pub radius_x: f32,
    pub radius_y: f32,
    /// Offset of the ellipse center from the spiral anchor point.
    pub center_x: f32,
    pub center_y: f32,
    /// Horizontal anchor as a fraction of the viewport width.
    pub center_x_fraction: f32,
    pub depth_scale: f32,
    /// Depth-based scale interpolation bounds.
    pub scale_min: f32,
    pub scale_span: f32,
    /// Secondary wave displacement amplitudes.
    pub wave_amplitude_x: f32,
    pub wave_amplitude_y: f32,
    /// Unscaled card dimensions.
    pub card_width: f32,
    pub card_height: f32,
}

impl SpiralPreset {
    pub const DESKTOP: Self = Self {
        radius_x: 420.0,
        radius_y: 280.0,
        center_x: -160.0,
        center_y: 150.0,
        center_x_fraction: 0.375,
        depth_scale: 800.0,
        scale_min: 0.35,
        scale_span: 0.65,
        wave_amplitude_x: 50.0,
        wave_amplitude_y: 35.0,
        card_width: 360.0,
        card_height: 300.0,
    };

    pub const COMPACT: Self = Self {
        radius_x: 180.0,
        radius_y: 140.0,
        center_x: 0.0,
        center_y: 0.0,
        center_x_fraction: 0.5,
        depth_scale: 400.0,
        scale_min: 0.5,
        scale_span: 0.5,
        wave_amplitude_x: 25.0,
        wave_amplitude_y: 18.0,
        card_width: 200.0,
        card_height: 260.0,
    };

    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Desktop => Self::DESKTOP,
            DeviceClass::Compact => Self::COMPACT,
        }
    }
}

/// Solved per-card transform; recomputed every frame, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTransform {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
    pub stack_order: i32,
    /// Subtle Y-axis tilt correlated with ellipse position (degrees).
    pub rotate_y: f32,
}

/// Axis-aligned screen rectangle of a laid-out card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CardRect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x
            && px <= self.x + self.width
            && py >= self.y
            && py <= self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Solve the transform for the card at `index`.
pub fn card_transform(
    snapshot: &MotionSnapshot,
    index: usize,
    viewport: Viewport,
    preset: &SpiralPreset,
) -> CardTransform {
    let angle = index as f32 * spiral::ANGLE_STEP - snapshot.rotation_angle;
    let (sin, cos) = angle.sin_cos();

    let anchor_x = viewport.width * preset.center_x_fraction;
    let anchor_y = viewport.height / 2.0;

    let mut x = anchor_x + preset.center_x + preset.radius_x * cos;
    let mut y = anchor_y
        + preset.center_y
        + preset.radius_y * sin * spiral::VERTICAL_COMPRESSION;

    // Cards nearer the front of the spiral receive more of the wave.
    if snapshot.wave_intensity > spiral::WAVE_INTENSITY_FLOOR {
        let card_phase =
            index as f32 * spiral::WAVE_FREQUENCY + snapshot.wave_phase;
        let sine_x = card_phase.sin()
            * preset.wave_amplitude_x
            * snapshot.wave_intensity;
        let sine_y = (card_phase * spiral::WAVE_SECONDARY_PHASE).cos()
            * preset.wave_amplitude_y
            * snapshot.wave_intensity;
        let depth_influence = (1.0 - sin) / 2.0;
        x += sine_x * (0.5 + depth_influence * 0.5);
        y += sine_y * (0.5 + depth_influence * 0.5);
    }

    let z = preset.depth_scale * sin;
    let depth_factor = (1.0 - sin) / 2.0;
    let mut scale = preset.scale_min + depth_factor * preset.scale_span;

    let frontness = (-sin).max(0.0);
    scale += spiral::FOCAL_SCALE_BOOST * frontness * frontness;

    let opacity = spiral::OPACITY_FLOOR + depth_factor * spiral::OPACITY_SPAN;
    let stack_order = (spiral::STACK_BASE - z).round() as i32;
    let rotate_y = cos * spiral::TILT_DEGREES;

    CardTransform {
        x,
        y,
        z,
        scale,
        opacity,
        stack_order,
        rotate_y,
    }
}

/// Solve all `count` cards into `buf`, reusing its allocation.
pub fn layout_into(
    buf: &mut Vec<CardTransform>,
    snapshot: &MotionSnapshot,
    count: usize,
    viewport: Viewport,
    preset: &SpiralPreset,
) {
    buf.clear();
    buf.extend(
        (0..count).map(|i| card_transform(snapshot, i, viewport, preset)),
    );
}

/// Screen rectangle of a solved card (transform origin is the center).
pub fn card_rect(transform: &CardTransform, preset: &SpiralPreset) -> CardRect {
    let width = preset.card_width * transform.scale;
    let height = preset.card_height * transform.scale;
    CardRect {
        x: transform.x - width / 2.0,
        y: transform.y - height / 2.0,
        width,
        height,
    }
}

/// Topmost card under the point, honoring stacking order.
pub fn hit_test(
    transforms: &[CardTransform],
    preset: &SpiralPreset,
    px: f32,
    py: f32,
) -> Option<usize> {
    transforms
        .iter()
        .enumerate()
        .filter(|(_, t)| card_rect(t, preset).contains(px, py))
        .max_by_key(|(_, t)| t.stack_order)
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const VIEWPORT: Viewport = Viewport {
        width: 1600.0,
        height: 900.0,
    };

    fn snap(rotation: f32) -> MotionSnapshot {
        MotionSnapshot {
            rotation_angle: rotation,
            wave_intensity: 0.0,
            wave_phase: 0.0,
        }
    }

    #[test]
    fn identical_inputs_give_identical_transforms() {
        let snapshot = MotionSnapshot {
            rotation_angle: 1.234,
            wave_intensity: 0.4,
            wave_phase: 2.72,
        };
        for i in 0..24 {
            let a =
                card_transform(&snapshot, i, VIEWPORT, &SpiralPreset::DESKTOP);
            let b =
                card_transform(&snapshot, i, VIEWPORT, &SpiralPreset::DESKTOP);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn five_card_reference_positions() {
        // angle_step = 0.35, rotation 0: card 0 sits at angle 0 (z = 0,
        // stack base); card 4 (angle 1.4 ~ pi/2) is deepest and smallest.
        let transforms: Vec<_> = (0..5)
            .map(|i| {
                card_transform(&snap(0.0), i, VIEWPORT, &SpiralPreset::DESKTOP)
            })
            .collect();

        assert!(transforms[0].z.abs() < 1e-3);
        assert_eq!(transforms[0].stack_order, 1000);

        let deepest = transforms
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.z.total_cmp(&b.1.z))
            .map(|(i, _)| i);
        assert_eq!(deepest, Some(4));

        let smallest = transforms
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.scale.total_cmp(&b.1.scale))
            .map(|(i, _)| i);
        assert_eq!(smallest, Some(4));
    }

    #[test]
    fn focal_boost_peaks_at_the_front() {
        // Rotating card 0 to angle -pi/2 puts it closest to the viewer:
        // frontness 1 gives the full boost on top of the max depth scale.
        let t = card_transform(
            &snap(FRAC_PI_2),
            0,
            VIEWPORT,
            &SpiralPreset::DESKTOP,
        );
        let expected = 0.35 + 0.65 + spiral::FOCAL_SCALE_BOOST;
        assert!((t.scale - expected).abs() < 1e-3);
        assert!(t.z < 0.0);
        assert!(t.scale <= 1.2);
    }

    #[test]
    fn stack_order_is_a_strict_function_of_depth() {
        let snapshot = snap(0.8);
        let transforms: Vec<_> = (0..18)
            .map(|i| {
                card_transform(&snapshot, i, VIEWPORT, &SpiralPreset::DESKTOP)
            })
            .collect();

        for a in &transforms {
            for b in &transforms {
                if (a.z - b.z).abs() > 1.0 {
                    assert_ne!(
                        a.stack_order, b.stack_order,
                        "cards {}~{} apart in z collided in stacking",
                        a.z, b.z
                    );
                    assert_eq!(a.z < b.z, a.stack_order > b.stack_order);
                }
            }
        }
    }

    #[test]
    fn opacity_never_leaves_its_floor() {
        for i in 0..40 {
            let t = card_transform(
                &snap(0.47),
                i,
                VIEWPORT,
                &SpiralPreset::COMPACT,
            );
            assert!(t.opacity >= spiral::OPACITY_FLOOR);
            assert!(t.opacity <= 1.0);
        }
    }

    #[test]
    fn wave_below_floor_is_ignored() {
        let still = snap(0.3);
        let barely = MotionSnapshot {
            wave_intensity: spiral::WAVE_INTENSITY_FLOOR / 2.0,
            wave_phase: 1.0,
            ..still
        };
        for i in 0..10 {
            assert_eq!(
                card_transform(&still, i, VIEWPORT, &SpiralPreset::DESKTOP),
                card_transform(&barely, i, VIEWPORT, &SpiralPreset::DESKTOP),
            );
        }
    }

    #[test]
    fn hit_test_picks_the_topmost_card() {
        let snapshot = snap(0.0);
        let mut transforms = Vec::new();
        layout_into(
            &mut transforms,
            &snapshot,
            12,
            VIEWPORT,
            &SpiralPreset::DESKTOP,
        );

        for (i, t) in transforms.iter().enumerate() {
            let rect = card_rect(t, &SpiralPreset::DESKTOP);
            let (cx, cy) = rect.center();
            let hit = hit_test(&transforms, &SpiralPreset::DESKTOP, cx, cy)
                .expect("center of a card must hit something");
            let winner = &transforms[hit];
            assert!(
                winner.stack_order >= t.stack_order,
                "card {i} was occluded by a lower card"
            );
        }
    }
}
