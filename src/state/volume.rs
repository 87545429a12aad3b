/// Read-aloud volume
///
/// A single 0–100 slider value drives both the speech volume factor and the
/// four-step volume icon.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    pub const MAX: u8 = 100;

    /// Values above 100 are clamped
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Normalized speech volume, 0.0 to 1.0
    pub fn speech_factor(self) -> f32 {
        self.0 as f32 / 100.0
    }

    pub fn tier(self) -> VolumeTier {
        // checked top-down, first match wins
        if self.0 >= 67 {
            VolumeTier::Level3
        } else if self.0 >= 34 {
            VolumeTier::Level2
        } else if self.0 >= 1 {
            VolumeTier::Level1
        } else {
            VolumeTier::Level0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

/// Discrete icon state for the volume indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    Level0,
    Level1,
    Level2,
    Level3,
}

impl VolumeTier {
    pub fn level(self) -> u8 {
        match self {
            VolumeTier::Level0 => 0,
            VolumeTier::Level1 => 1,
            VolumeTier::Level2 => 2,
            VolumeTier::Level3 => 3,
        }
    }

    /// Accessible description of the icon
    pub fn alt(self) -> String {
        format!("Volume Level {}", self.level())
    }

    /// Icon shown next to the slider
    pub fn glyph(self) -> &'static str {
        match self {
            VolumeTier::Level0 => "🔇",
            VolumeTier::Level1 => "🔈",
            VolumeTier::Level2 => "🔉",
            VolumeTier::Level3 => "🔊",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Volume::new(0).tier(), VolumeTier::Level0);
        assert_eq!(Volume::new(1).tier(), VolumeTier::Level1);
        assert_eq!(Volume::new(33).tier(), VolumeTier::Level1);
        assert_eq!(Volume::new(34).tier(), VolumeTier::Level2);
        assert_eq!(Volume::new(66).tier(), VolumeTier::Level2);
        assert_eq!(Volume::new(67).tier(), VolumeTier::Level3);
        assert_eq!(Volume::new(100).tier(), VolumeTier::Level3);
    }

    #[test]
    fn test_speech_factor() {
        assert_eq!(Volume::new(0).speech_factor(), 0.0);
        assert_eq!(Volume::new(50).speech_factor(), 0.5);
        assert_eq!(Volume::new(100).speech_factor(), 1.0);
    }

    #[test]
    fn test_clamped_and_defaults_to_full() {
        assert_eq!(Volume::new(250).value(), 100);
        assert_eq!(Volume::default().value(), 100);
    }

    #[test]
    fn test_alt_text() {
        assert_eq!(Volume::new(66).tier().alt(), "Volume Level 2");
        assert_eq!(Volume::new(0).tier().alt(), "Volume Level 0");
    }
}
