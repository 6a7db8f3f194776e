//! Volume slider mapping to speech gain and icon level.

use crate::error::{MemeError, Result};

/// Maximum slider position.
pub const MAX_VOLUME: i32 = 100;

/// Icon level shown next to the volume slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum VolumeLevel {
    Muted = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl VolumeLevel {
    /// Map a slider position (0..=100) to an icon level.
    pub fn from_slider(value: u8) -> Self {
        match value {
            67.. => VolumeLevel::High,
            34..=66 => VolumeLevel::Medium,
            1..=33 => VolumeLevel::Low,
            0 => VolumeLevel::Muted,
        }
    }

    /// Path of the icon for this level, e.g. `icons/volume-level-3.svg`.
    pub fn icon_path(self, icon_dir: &str) -> String {
        let dir = icon_dir.trim_end_matches('/');
        format!("{}/volume-level-{}.svg", dir, self as u8)
    }
}

/// A validated volume slider position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Volume(u8);

impl Default for Volume {
    fn default() -> Self {
        Volume(MAX_VOLUME as u8)
    }
}

impl Volume {
    /// Validate a raw slider value.
    pub fn new(value: i32) -> Result<Self> {
        if (0..=MAX_VOLUME).contains(&value) {
            Ok(Volume(value as u8))
        } else {
            Err(MemeError::InvalidVolume(value))
        }
    }

    /// Parse the string value of a range input.
    ///
    /// Unparseable input is treated as out of range.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let parsed = trimmed
            .parse::<i32>()
            .ok()
            .or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(|v| v.round() as i32)
            })
            .unwrap_or(-1);
        Self::new(parsed)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Speech volume in 0.0..=1.0.
    #[inline]
    pub fn gain(self) -> f32 {
        self.0 as f32 / MAX_VOLUME as f32
    }

    #[inline]
    pub fn level(self) -> VolumeLevel {
        VolumeLevel::from_slider(self.0)
    }
}
