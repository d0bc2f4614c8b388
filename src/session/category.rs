//! Audio session categories and option flags

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Audio session category
///
/// Fixed enumeration mirroring the platform's category set; the backend
/// adapter translates each to its native value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Playback mixed with other audio, silenced by the ringer switch
    Ambient,
    /// Like `Ambient`, but silences other audio
    SoloAmbient,
    /// Primary playback, keeps playing with the ringer switched off
    Playback,
    /// Input only
    Record,
    /// Simultaneous input and output
    PlayAndRecord,
    /// Multiple independent input/output routes
    MultiRoute,
}

impl Category {
    /// Category label used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ambient => "ambient",
            Category::SoloAmbient => "solo-ambient",
            Category::Playback => "playback",
            Category::Record => "record",
            Category::PlayAndRecord => "play-and-record",
            Category::MultiRoute => "multi-route",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of behavioral option flags for a session category
///
/// Combine flags with `|`. Which combinations are honored is the backend's
/// business; this type only carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CategoryOptions(u32);

impl CategoryOptions {
    /// No options
    pub const NONE: Self = Self(0);
    /// Mix with audio from other processes instead of interrupting it
    pub const MIX_WITH_OTHERS: Self = Self(1 << 0);
    /// Lower other audio while this session plays
    pub const DUCK_OTHERS: Self = Self(1 << 1);
    /// Allow Bluetooth hands-free devices as routes
    pub const ALLOW_BLUETOOTH: Self = Self(1 << 2);
    /// Route output to the built-in speaker by default
    pub const DEFAULT_TO_SPEAKER: Self = Self(1 << 3);
    /// Pause spoken audio from other apps rather than mixing over it
    pub const INTERRUPT_SPOKEN_AUDIO_AND_MIX_WITH_OTHERS: Self = Self(1 << 4);
    /// Allow stereo Bluetooth (A2DP) devices as routes
    pub const ALLOW_BLUETOOTH_A2DP: Self = Self(1 << 5);
    /// Allow AirPlay devices as routes
    pub const ALLOW_AIR_PLAY: Self = Self(1 << 6);

    /// True when every flag in `other` is set in `self`
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when no flags are set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw flag bits
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for CategoryOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CategoryOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for CategoryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_combine_with_bitor() {
        let options = CategoryOptions::MIX_WITH_OTHERS | CategoryOptions::ALLOW_BLUETOOTH;

        assert!(options.contains(CategoryOptions::MIX_WITH_OTHERS));
        assert!(options.contains(CategoryOptions::ALLOW_BLUETOOTH));
        assert!(!options.contains(CategoryOptions::DUCK_OTHERS));
    }

    #[test]
    fn test_none_is_empty() {
        assert!(CategoryOptions::NONE.is_empty());
        assert!(CategoryOptions::default().is_empty());
        assert!(!CategoryOptions::DUCK_OTHERS.is_empty());
    }

    #[test]
    fn test_contains_requires_all_flags() {
        let options = CategoryOptions::MIX_WITH_OTHERS;
        let both = CategoryOptions::MIX_WITH_OTHERS | CategoryOptions::DUCK_OTHERS;

        assert!(!options.contains(both));
        assert!(both.contains(options));
    }
}
