//! Animation preferences persisted by the backend settings store.
//!
//! Style and speed jointly select exactly one easing curve and one
//! duration triple; the mapping itself lives in the player's design
//! tokens, this module only carries the persisted selection.

/// Easing family for gallery and viewer transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnimationStyle {
    #[default]
    Spring,
    Smooth,
    Snappy,
    Gentle,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 4] = [
        AnimationStyle::Spring,
        AnimationStyle::Smooth,
        AnimationStyle::Snappy,
        AnimationStyle::Gentle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationStyle::Spring => "spring",
            AnimationStyle::Smooth => "smooth",
            AnimationStyle::Snappy => "snappy",
            AnimationStyle::Gentle => "gentle",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "spring" => Some(AnimationStyle::Spring),
            "smooth" => Some(AnimationStyle::Smooth),
            "snappy" => Some(AnimationStyle::Snappy),
            "gentle" => Some(AnimationStyle::Gentle),
            _ => None,
        }
    }

    /// The next style in presentation order, wrapping at the end.
    pub fn cycled(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Overall pacing for gallery and viewer transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    pub const ALL: [AnimationSpeed; 3] = [
        AnimationSpeed::Slow,
        AnimationSpeed::Normal,
        AnimationSpeed::Fast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "slow" => Some(AnimationSpeed::Slow),
            "normal" => Some(AnimationSpeed::Normal),
            "fast" => Some(AnimationSpeed::Fast),
            _ => None,
        }
    }

    pub fn cycled(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl std::str::FromStr for AnimationStyle {
    type Err = crate::error::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            crate::error::ModelError::InvalidSettings(format!(
                "unknown animation style: {s}"
            ))
        })
    }
}

impl std::str::FromStr for AnimationSpeed {
    type Err = crate::error::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            crate::error::ModelError::InvalidSettings(format!(
                "unknown animation speed: {s}"
            ))
        })
    }
}

/// The persisted animation preference record.
///
/// Wire field names match the backend settings row; absence of the row
/// means defaults apply (spring / normal / hover effects on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSettings {
    #[cfg_attr(feature = "serde", serde(rename = "animation_style"))]
    pub style: AnimationStyle,
    #[cfg_attr(feature = "serde", serde(rename = "animation_speed"))]
    pub speed: AnimationSpeed,
    #[cfg_attr(feature = "serde", serde(rename = "enable_hover_effects"))]
    pub hover_effects_enabled: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            style: AnimationStyle::Spring,
            speed: AnimationSpeed::Normal,
            hover_effects_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_spring_normal_hover() {
        let s = AnimationSettings::default();
        assert_eq!(s.style, AnimationStyle::Spring);
        assert_eq!(s.speed, AnimationSpeed::Normal);
        assert!(s.hover_effects_enabled);
    }

    #[test]
    fn style_parse_round_trips() {
        for style in AnimationStyle::ALL {
            assert_eq!(AnimationStyle::parse(style.as_str()), Some(style));
        }
        assert_eq!(AnimationStyle::parse("bouncy"), None);
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        assert!("bouncy".parse::<AnimationStyle>().is_err());
        assert_eq!(
            "fast".parse::<AnimationSpeed>().ok(),
            Some(AnimationSpeed::Fast)
        );
    }

    #[test]
    fn cycling_visits_every_variant() {
        let mut style = AnimationStyle::Spring;
        let mut seen = vec![style];
        for _ in 0..3 {
            style = style.cycled();
            seen.push(style);
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(style.cycled(), AnimationStyle::Spring);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_format_uses_backend_field_names() {
        let json = serde_json::to_value(AnimationSettings::default())
            .expect("serialize");
        assert_eq!(json["animation_style"], "spring");
        assert_eq!(json["animation_speed"], "normal");
        assert_eq!(json["enable_hover_effects"], true);
    }
}
