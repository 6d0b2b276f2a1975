//! Tuned constants for the spiral engine and the detail viewer.
//!
//! These are product-tuned values carried over from the shipped gallery;
//! they are configuration, not behavior derived from first principles.

/// Spiral geometry shared by every device class.
pub mod spiral {
    /// Angular distance between neighboring cards along the ellipse (rad).
    pub const ANGLE_STEP: f32 = 0.35;
    /// Vertical compression of the ellipse for the flattened look.
    pub const VERTICAL_COMPRESSION: f32 = 0.6;
    /// Per-card phase offset factor of the secondary wave.
    pub const WAVE_FREQUENCY: f32 = 0.5;
    /// Frequency ratio of the vertical wave component.
    pub const WAVE_SECONDARY_PHASE: f32 = 1.3;
    /// Wave displacement is skipped entirely below this intensity.
    pub const WAVE_INTENSITY_FLOOR: f32 = 0.005;
    /// Depth-linear opacity: floor + span * depth_factor.
    pub const OPACITY_FLOOR: f32 = 0.85;
    pub const OPACITY_SPAN: f32 = 0.15;
    /// Maximum Y-axis tilt at the ellipse extremes (degrees).
    pub const TILT_DEGREES: f32 = 8.0;
    /// Stacking order is derived as round(STACK_BASE - z).
    pub const STACK_BASE: f32 = 1000.0;
    /// Extra scale for the frontmost cards, proportional to frontness².
    pub const FOCAL_SCALE_BOOST: f32 = 0.18;
    /// Cards rendered when the backend has no projects yet.
    pub const PLACEHOLDER_CARD_COUNT: usize = 20;
}

/// Motion integration constants.
pub mod physics {
    /// Exponential smoothing coefficient toward the target rotation.
    pub const SMOOTHING: f32 = 0.018;
    /// Velocity clamp is MAX_VELOCITY * VELOCITY_SCALE rad/frame.
    pub const MAX_VELOCITY: f32 = 12.0;
    pub const VELOCITY_SCALE: f32 = 0.01;
    /// Wave intensity target is |velocity| * WAVE_VELOCITY_MULTIPLIER.
    pub const WAVE_VELOCITY_MULTIPLIER: f32 = 10.0;
    /// Per-frame exponential decay of wave intensity.
    pub const WAVE_DECAY: f32 = 0.96;
    /// Fraction of the intensity target blended in per decayed frame.
    pub const WAVE_INTENSITY_BLEND: f32 = 0.3;
    /// Wave phase advances by velocity * WAVE_PHASE_RATE * dt.
    pub const WAVE_PHASE_RATE: f32 = 1.5;
    /// Reference frame duration for dt normalization (60 Hz).
    pub const FRAME_MS: f32 = 16.67;
    /// Cap on the per-tick frame factor after tab/window suspension.
    pub const MAX_FRAME_FACTOR: f32 = 2.0;
}

/// Input sensitivity constants.
///
/// Touch and mouse drag deliberately use different sensitivities; the
/// asymmetry compensates for gesture dynamics across device classes.
pub mod input {
    pub const SCROLL_SENSITIVITY: f32 = 0.00018;
    pub const TOUCH_SENSITIVITY_COMPACT: f32 = 0.002;
    pub const TOUCH_SENSITIVITY_DESKTOP: f32 = 0.0006;
    /// Wheel delta magnitude clamp before sensitivity scaling (px).
    pub const WHEEL_CLAMP: f32 = 60.0;
    /// Line-based wheel deltas are converted at this many px per line.
    pub const WHEEL_LINE_PX: f32 = 40.0;
    /// Arrow keys / space rotate by this step (rad).
    pub const KEYBOARD_STEP: f32 = 0.25;
    /// A press-release pair counts as a tap under both bounds.
    pub const TAP_MAX_MS: u64 = 300;
    pub const TAP_MAX_TRAVEL: f32 = 10.0;
}

/// Detail viewer timing and gesture constants.
pub mod viewer {
    /// Delay before the open animation starts (entering -> active).
    pub const ENTER_DELAY_MS: u64 = 50;
    /// Delay from entry until gestures are accepted (-> scrollable).
    pub const SCROLLABLE_DELAY_MS: u64 = 700;
    /// Accumulated wheel delta needed to commit one step.
    pub const WHEEL_THRESHOLD: f32 = 120.0;
    /// Committed steps suppress further wheel steps for this window.
    pub const WHEEL_COOLDOWN_MS: u64 = 400;
    /// Swipe classification: dominant-axis travel and duration bounds.
    pub const SWIPE_MIN_TRAVEL: f32 = 50.0;
    pub const SWIPE_MAX_MS: u64 = 500;
    /// Slack added to the cross-fade timer before clearing the previous
    /// image marker.
    pub const CROSSFADE_CLEAR_SLACK_MS: u64 = 50;
    /// The cross-fade runs at this fraction of the transition duration.
    pub const CROSSFADE_FACTOR: f32 = 0.6;
    /// Mean luma above this renders dark chrome on the light image.
    pub const LUMA_LIGHT_THRESHOLD: f32 = 0.5;
    /// Luma sampling target resolution and top-strip fraction.
    pub const LUMA_SAMPLE_SIZE: u32 = 100;
    pub const LUMA_STRIP_FRACTION: f32 = 0.2;
}

/// Viewports narrower than this use the compact presentation.
pub const COMPACT_BREAKPOINT: f32 = 768.0;
