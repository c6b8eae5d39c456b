//! Named layout presets offered to the slot assignment UI.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutConfig, DEFAULT_FOOTER_SLOTS, DEFAULT_HERO_RATIO};
use crate::style::Axis;

/// A named, ready-made layout configuration.
///
/// # Examples
///
/// ```
/// use display_layout::preset::LayoutPreset;
///
/// let preset: LayoutPreset = "grid_2x3".parse().unwrap();
/// assert_eq!(preset.slot_count(), 6);
/// assert_eq!(preset.to_string(), "grid_2x3");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPreset {
    /// One edge-to-edge slot.
    Fullscreen,
    /// 2 rows × 2 columns.
    #[serde(rename = "grid_2x2")]
    Grid2x2,
    /// 2 rows × 3 columns.
    #[serde(rename = "grid_2x3")]
    Grid2x3,
    /// 3 rows × 2 columns.
    #[serde(rename = "grid_3x2")]
    Grid3x2,
    /// 3 rows × 3 columns.
    #[serde(rename = "grid_3x3")]
    Grid3x3,
    /// Hero slot over three footer slots.
    Hero,
    /// Left/right halves.
    SplitHorizontal,
    /// Top/bottom halves.
    SplitVertical,
    /// Narrow left third, wide right.
    #[serde(rename = "split_horizontal_1_2")]
    SplitHorizontal1To2,
    /// Wide left, narrow right third.
    #[serde(rename = "split_horizontal_2_1")]
    SplitHorizontal2To1,
    /// Three columns.
    ThreeColumn,
    /// Three rows.
    ThreeRow,
}

impl LayoutPreset {
    /// Every preset, in menu order.
    pub const ALL: [LayoutPreset; 12] = [
        LayoutPreset::Fullscreen,
        LayoutPreset::Grid2x2,
        LayoutPreset::Grid2x3,
        LayoutPreset::Grid3x2,
        LayoutPreset::Grid3x3,
        LayoutPreset::Hero,
        LayoutPreset::SplitHorizontal,
        LayoutPreset::SplitVertical,
        LayoutPreset::SplitHorizontal1To2,
        LayoutPreset::SplitHorizontal2To1,
        LayoutPreset::ThreeColumn,
        LayoutPreset::ThreeRow,
    ];

    /// Stable identifier used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            LayoutPreset::Fullscreen => "fullscreen",
            LayoutPreset::Grid2x2 => "grid_2x2",
            LayoutPreset::Grid2x3 => "grid_2x3",
            LayoutPreset::Grid3x2 => "grid_3x2",
            LayoutPreset::Grid3x3 => "grid_3x3",
            LayoutPreset::Hero => "hero",
            LayoutPreset::SplitHorizontal => "split_horizontal",
            LayoutPreset::SplitVertical => "split_vertical",
            LayoutPreset::SplitHorizontal1To2 => "split_horizontal_1_2",
            LayoutPreset::SplitHorizontal2To1 => "split_horizontal_2_1",
            LayoutPreset::ThreeColumn => "three_column",
            LayoutPreset::ThreeRow => "three_row",
        }
    }

    /// Configuration with default padding and gap.
    pub fn config(self) -> LayoutConfig {
        match self {
            LayoutPreset::Fullscreen => LayoutConfig::fullscreen(),
            LayoutPreset::Grid2x2 => LayoutConfig::grid(2, 2),
            LayoutPreset::Grid2x3 => LayoutConfig::grid(2, 3),
            LayoutPreset::Grid3x2 => LayoutConfig::grid(3, 2),
            LayoutPreset::Grid3x3 => LayoutConfig::grid(3, 3),
            LayoutPreset::Hero => LayoutConfig::hero(DEFAULT_FOOTER_SLOTS, DEFAULT_HERO_RATIO),
            LayoutPreset::SplitHorizontal => LayoutConfig::split(Axis::Horizontal, 0.5),
            LayoutPreset::SplitVertical => LayoutConfig::split(Axis::Vertical, 0.5),
            LayoutPreset::SplitHorizontal1To2 => LayoutConfig::split(Axis::Horizontal, 0.33),
            LayoutPreset::SplitHorizontal2To1 => LayoutConfig::split(Axis::Horizontal, 0.67),
            LayoutPreset::ThreeColumn => LayoutConfig::columns(vec![0.33, 0.34, 0.33]),
            LayoutPreset::ThreeRow => LayoutConfig::rows(vec![0.33, 0.34, 0.33]),
        }
    }

    /// Number of widget slots the preset exposes.
    pub fn slot_count(self) -> usize {
        self.config().slot_count()
    }
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout preset `{0}`")]
pub struct UnknownPreset(pub String);

impl FromStr for LayoutPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutPreset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}
