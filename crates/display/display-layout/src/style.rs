//! Spacing and alignment primitives shared by layouts and containers.
//!
//! # Core Types
//!
//! - [`Edges`] - Edge insets for padding (top, right, bottom, left)
//! - [`Axis`] - Main axis of a stack or split
//! - [`Justify`] - Main axis distribution
//! - [`Align`] - Cross axis alignment
//!
//! # Example
//!
//! ```
//! use display_layout::style::*;
//!
//! let padding = Edges::horizontal_vertical(12, 4);
//! assert_eq!(padding.horizontal(), 24);
//! assert_eq!(padding.vertical(), 8);
//!
//! assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
//! assert_eq!(Justify::default(), Justify::Start);
//! assert_eq!(Align::default(), Align::Center);
//! ```

use serde::{Deserialize, Serialize};

/// Edge insets for padding and frame margins.
///
/// Follows CSS box model convention: top, right, bottom, left.
///
/// # Examples
///
/// ```
/// use display_layout::style::Edges;
///
/// let uniform = Edges::all(8);
/// assert_eq!(uniform.top, 8);
/// assert_eq!(uniform.left, 8);
///
/// let custom = Edges::new(1, 2, 3, 4);
/// assert_eq!(custom.horizontal(), 6);
/// assert_eq!(custom.vertical(), 4);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edges {
    /// Top edge inset in pixels.
    pub top: u32,

    /// Right edge inset in pixels.
    pub right: u32,

    /// Bottom edge inset in pixels.
    pub bottom: u32,

    /// Left edge inset in pixels.
    pub left: u32,
}

impl Edges {
    /// No inset on any side.
    pub const ZERO: Self = Self::all(0);

    /// Creates edges with all sides set to the same value.
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates edges with individual values for each side.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates edges with one value for left/right and another for top/bottom.
    pub const fn horizontal_vertical(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal inset (left + right).
    pub const fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical inset (top + bottom).
    pub const fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Main axis of a stack, split or multi-slot strip.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Main axis distribution of children.
///
/// # Examples
///
/// ```
/// use display_layout::flex::main_axis_offsets;
/// use display_layout::style::Justify;
///
/// // Two 20px children in 100px, 10px gap
/// let offsets = main_axis_offsets(&[20, 20], 10, 100, Justify::SpaceBetween);
/// assert_eq!(offsets.as_slice(), &[0, 80]);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    /// Pack children at the start of the main axis.
    #[default]
    Start,
    /// Center the packed children.
    Center,
    /// Pack children at the end of the main axis.
    End,
    /// First child at the start, last at the end, leftover space between.
    SpaceBetween,
}

/// Cross axis alignment of children.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Align to the cross axis start (top or left).
    Start,
    /// Center on the cross axis.
    #[default]
    Center,
    /// Align to the cross axis end (bottom or right).
    End,
    /// Fill the whole cross axis.
    Stretch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_constructors() {
        assert_eq!(Edges::all(3), Edges::new(3, 3, 3, 3));
        let hv = Edges::horizontal_vertical(24, 12);
        assert_eq!(hv.left, 24);
        assert_eq!(hv.right, 24);
        assert_eq!(hv.top, 12);
        assert_eq!(hv.bottom, 12);
        assert_eq!(Edges::ZERO.horizontal(), 0);
    }

    #[test]
    fn test_edges_saturate() {
        let e = Edges::new(0, u32::MAX, 0, 5);
        assert_eq!(e.horizontal(), u32::MAX);
    }

    #[test]
    fn test_axis_cross() {
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.cross().cross(), Axis::Horizontal);
    }

    #[test]
    fn test_serde_names() {
        let j: Justify = serde_json::from_str("\"space_between\"").unwrap();
        assert_eq!(j, Justify::SpaceBetween);
        let a: Axis = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(a, Axis::Vertical);
    }
}
