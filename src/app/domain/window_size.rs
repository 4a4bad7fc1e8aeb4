use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One step of the three-valued size scale, applied independently to the
/// window's width and height.
///
/// `Unknown` absorbs unrecognized values from old or hand-edited config
/// files; it maps to no surface class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SizeBucket {
    Small,
    #[default]
    Medium,
    Large,
    #[serde(other)]
    Unknown,
}

impl FromStr for SizeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(SizeBucket::Small),
            "medium" => Ok(SizeBucket::Medium),
            "large" => Ok(SizeBucket::Large),
            _ => Err(format!("unknown size bucket: {}", s)),
        }
    }
}

/// Bucketed window dimensions as persisted in the config store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WindowSize {
    #[serde(default)]
    pub width: SizeBucket,
    #[serde(default)]
    pub height: SizeBucket,
}

impl WindowSize {
    pub fn new(width: SizeBucket, height: SizeBucket) -> Self {
        Self { width, height }
    }
}

/// Surface class markers derived from the window size, one per axis/bucket
/// combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    WindowWidthSmall,
    WindowWidthMedium,
    WindowWidthLarge,
    WindowHeightSmall,
    WindowHeightMedium,
    WindowHeightLarge,
}

impl SizeClass {
    pub const ALL: [SizeClass; 6] = [
        SizeClass::WindowWidthSmall,
        SizeClass::WindowWidthMedium,
        SizeClass::WindowWidthLarge,
        SizeClass::WindowHeightSmall,
        SizeClass::WindowHeightMedium,
        SizeClass::WindowHeightLarge,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            SizeClass::WindowWidthSmall => "windowWidthSmall",
            SizeClass::WindowWidthMedium => "windowWidthMedium",
            SizeClass::WindowWidthLarge => "windowWidthLarge",
            SizeClass::WindowHeightSmall => "windowHeightSmall",
            SizeClass::WindowHeightMedium => "windowHeightMedium",
            SizeClass::WindowHeightLarge => "windowHeightLarge",
        }
    }

    /// Class for the width axis, or `None` for an unrecognized bucket.
    pub fn for_width(bucket: SizeBucket) -> Option<SizeClass> {
        match bucket {
            SizeBucket::Small => Some(SizeClass::WindowWidthSmall),
            SizeBucket::Medium => Some(SizeClass::WindowWidthMedium),
            SizeBucket::Large => Some(SizeClass::WindowWidthLarge),
            SizeBucket::Unknown => None,
        }
    }

    /// Class for the height axis, or `None` for an unrecognized bucket.
    pub fn for_height(bucket: SizeBucket) -> Option<SizeClass> {
        match bucket {
            SizeBucket::Small => Some(SizeClass::WindowHeightSmall),
            SizeBucket::Medium => Some(SizeClass::WindowHeightMedium),
            SizeBucket::Large => Some(SizeClass::WindowHeightLarge),
            SizeBucket::Unknown => None,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// The desired class state for the root surface: at most one width class
/// and one height class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeClassSet {
    pub width: Option<SizeClass>,
    pub height: Option<SizeClass>,
}

impl SizeClassSet {
    pub fn iter(self) -> impl Iterator<Item = SizeClass> {
        self.width.into_iter().chain(self.height)
    }
}
