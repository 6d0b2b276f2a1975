//! Color tokens and the application theme.
//!
//! The gallery is a dark, near-black stage with a faint blue accent.
//! The viewer flips to dark-on-light chrome when the sampled image is
//! bright; the `chrome_*` helpers pick the right side of that pair.

use iced::theme::Palette;
use iced::{Color, Theme};

pub const BACKGROUND: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const TEXT_PRIMARY: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.9,
};

pub const TEXT_MUTED: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.5,
};

/// Faint blue of the ambient glow and focus accents.
pub const ACCENT: Color = Color {
    r: 0.31,
    g: 0.39,
    b: 0.78,
    a: 1.0,
};

pub const DANGER: Color = Color {
    r: 0.86,
    g: 0.35,
    b: 0.35,
    a: 1.0,
};

pub fn theme() -> Theme {
    Theme::custom(
        "Spira".to_string(),
        Palette {
            background: BACKGROUND,
            text: TEXT_PRIMARY,
            primary: ACCENT,
            success: ACCENT,
            danger: DANGER,
        },
    )
}

/// Primary chrome text over the current viewer image.
pub fn chrome_text(is_light: bool) -> Color {
    if is_light {
        Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.9,
        }
    } else {
        TEXT_PRIMARY
    }
}

pub fn chrome_muted(is_light: bool) -> Color {
    if is_light {
        Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.6,
        }
    } else {
        Color {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 0.6,
        }
    }
}

/// Translucent pill background behind viewer buttons and hints.
pub fn chrome_pill(is_light: bool, hovered: bool) -> Color {
    let alpha = if hovered { 0.2 } else { 0.1 };
    if is_light {
        Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: alpha,
        }
    } else {
        Color {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: alpha,
        }
    }
}

/// Deterministic tonal fill for cards whose image is missing or still
/// loading; varies slightly by index so the spiral reads as depth.
pub fn placeholder_tone(index: usize) -> Color {
    let step = (index % 6) as f32;
    Color {
        r: 0.10 + step * 0.012,
        g: 0.11 + step * 0.010,
        b: 0.16 + step * 0.016,
        a: 1.0,
    }
}
