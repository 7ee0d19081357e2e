use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The six supported width:height presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AspectPreset {
    Square,
    Portrait3x4,
    Landscape4x3,
    Portrait9x16,
    Landscape16x9,
    Ultrawide21x9,
}

pub const ASPECT_PRESETS: [AspectPreset; 6] = [
    AspectPreset::Square,
    AspectPreset::Portrait3x4,
    AspectPreset::Landscape4x3,
    AspectPreset::Portrait9x16,
    AspectPreset::Landscape16x9,
    AspectPreset::Ultrawide21x9,
];

/// Fallback for labels the catalog does not know.
pub const DEFAULT_PRESET: AspectPreset = AspectPreset::Landscape4x3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn ratio(&self) -> f32 {
        self.width / self.height
    }
}

impl AspectPreset {
    pub fn label(self) -> &'static str {
        match self {
            AspectPreset::Square => "1:1",
            AspectPreset::Portrait3x4 => "3:4",
            AspectPreset::Landscape4x3 => "4:3",
            AspectPreset::Portrait9x16 => "9:16",
            AspectPreset::Landscape16x9 => "16:9",
            AspectPreset::Ultrawide21x9 => "21:9",
        }
    }

    /// `(width, height)` proportions.
    pub fn proportions(self) -> (u32, u32) {
        match self {
            AspectPreset::Square => (1, 1),
            AspectPreset::Portrait3x4 => (3, 4),
            AspectPreset::Landscape4x3 => (4, 3),
            AspectPreset::Portrait9x16 => (9, 16),
            AspectPreset::Landscape16x9 => (16, 9),
            AspectPreset::Ultrawide21x9 => (21, 9),
        }
    }

    pub fn ratio(self) -> f32 {
        let (w, h) = self.proportions();
        w as f32 / h as f32
    }

    pub fn from_label(label: &str) -> Result<Self> {
        let label = label.trim();
        ASPECT_PRESETS
            .into_iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| Error::UnknownAspectRatio {
                label: label.to_string(),
            })
    }

    /// Scale so the larger side equals `max_dimension`.
    pub fn dimensions(self, max_dimension: f32) -> Dimensions {
        let (w, h) = self.proportions();
        if w >= h {
            Dimensions {
                width: max_dimension,
                height: max_dimension * h as f32 / w as f32,
            }
        } else {
            Dimensions {
                width: max_dimension * w as f32 / h as f32,
                height: max_dimension,
            }
        }
    }
}

impl FromStr for AspectPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl fmt::Display for AspectPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn dimensions_for(label: &str, max_dimension: f32) -> Result<Dimensions> {
    AspectPreset::from_label(label).map(|p| p.dimensions(max_dimension))
}

/// Like [`dimensions_for`], but an unknown label falls back to [`DEFAULT_PRESET`].
pub fn dimensions_or_default(label: &str, max_dimension: f32) -> Dimensions {
    match dimensions_for(label, max_dimension) {
        Ok(dims) => dims,
        Err(e) => {
            log::warn!("{e}, using {DEFAULT_PRESET}");
            DEFAULT_PRESET.dimensions(max_dimension)
        }
    }
}
