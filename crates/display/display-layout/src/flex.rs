//! Main/cross axis distribution for stacks of children.
//!
//! These helpers are the positioning half of a flexbox pass: callers measure
//! their children first, then ask where each child goes along the main axis
//! (justification) and how it sits on the cross axis (alignment). All values
//! are offsets relative to the container's content origin.
//!
//! # Examples
//!
//! ```
//! use display_layout::flex::{cross_axis_placement, main_axis_offsets};
//! use display_layout::style::{Align, Justify};
//!
//! let offsets = main_axis_offsets(&[50, 50], 10, 200, Justify::Center);
//! assert_eq!(offsets.as_slice(), &[45, 105]);
//!
//! assert_eq!(cross_axis_placement(20, 100, Align::End), (80, 20));
//! assert_eq!(cross_axis_placement(20, 100, Align::Stretch), (0, 100));
//! ```

use heapless::Vec as HeaplessVec;

use crate::style::{Align, Justify};

/// Maximum number of children positioned in a single pass.
pub const MAX_FLEX_CHILDREN: usize = 32;

/// Offsets of each child along the main axis.
///
/// `extents` are the children's main-axis sizes in order. Children beyond
/// [`MAX_FLEX_CHILDREN`] are not positioned. When the children overflow
/// `available`, every justification degrades to `Start`.
pub fn main_axis_offsets(
    extents: &[u32],
    gap: u32,
    available: u32,
    justify: Justify,
) -> HeaplessVec<u32, MAX_FLEX_CHILDREN> {
    let mut positions = HeaplessVec::new();
    let count = extents.len().min(MAX_FLEX_CHILDREN);
    let Some(extents) = extents.get(..count) else {
        return positions;
    };
    if extents.is_empty() {
        return positions;
    }

    let total: u32 = extents.iter().fold(0u32, |acc, e| acc.saturating_add(*e));
    let gap_space = gap.saturating_mul(u32::try_from(count - 1).unwrap_or(u32::MAX));
    let remaining = available.saturating_sub(total.saturating_add(gap_space));

    let (start, spacing) = match justify {
        Justify::Start => (0, gap),
        Justify::End => (remaining, gap),
        Justify::Center => (remaining / 2, gap),
        Justify::SpaceBetween => {
            if count == 1 {
                (0, gap)
            } else {
                let slack = available.saturating_sub(total);
                let between = slack / u32::try_from(count - 1).unwrap_or(u32::MAX);
                (0, between.max(gap))
            }
        }
    };

    let mut pos = start;
    for extent in extents {
        positions.push(pos).ok();
        pos = pos.saturating_add(*extent).saturating_add(spacing);
    }
    positions
}

/// Cross axis `(offset, extent)` for a child of natural cross size `extent`.
///
/// `Stretch` expands the child to fill `available`; other alignments clamp the
/// child to `available` and position it.
pub fn cross_axis_placement(extent: u32, available: u32, align: Align) -> (u32, u32) {
    let size = extent.min(available);
    match align {
        Align::Start => (0, size),
        Align::Center => ((available - size) / 2, size),
        Align::End => (available - size, size),
        Align::Stretch => (0, available),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start() {
        let p = main_axis_offsets(&[50, 50, 50], 0, 300, Justify::Start);
        assert_eq!(p.as_slice(), &[0, 50, 100]);
    }

    #[test]
    fn test_start_with_gap() {
        let p = main_axis_offsets(&[50, 50, 50], 10, 300, Justify::Start);
        assert_eq!(p.as_slice(), &[0, 60, 120]);
    }

    #[test]
    fn test_end() {
        let p = main_axis_offsets(&[50, 50], 10, 200, Justify::End);
        assert_eq!(p.as_slice(), &[90, 150]);
    }

    #[test]
    fn test_center() {
        let p = main_axis_offsets(&[40], 0, 100, Justify::Center);
        assert_eq!(p.as_slice(), &[30]);
    }

    #[test]
    fn test_space_between() {
        let p = main_axis_offsets(&[50, 50, 50], 0, 300, Justify::SpaceBetween);
        assert_eq!(p.as_slice(), &[0, 125, 250]);
    }

    #[test]
    fn test_space_between_single_child() {
        let p = main_axis_offsets(&[50], 8, 300, Justify::SpaceBetween);
        assert_eq!(p.as_slice(), &[0]);
    }

    #[test]
    fn test_space_between_keeps_minimum_gap() {
        // Overflowing children still keep `gap` between them.
        let p = main_axis_offsets(&[60, 60], 10, 100, Justify::SpaceBetween);
        assert_eq!(p.as_slice(), &[0, 70]);
    }

    #[test]
    fn test_overflow_degrades_to_start() {
        let p = main_axis_offsets(&[80, 80], 0, 100, Justify::Center);
        assert_eq!(p.as_slice(), &[0, 80]);
    }

    #[test]
    fn test_empty_children() {
        assert!(main_axis_offsets(&[], 4, 100, Justify::Center).is_empty());
    }

    #[test]
    fn test_capacity() {
        let extents = [1u32; MAX_FLEX_CHILDREN + 5];
        let p = main_axis_offsets(&extents, 0, 1000, Justify::Start);
        assert_eq!(p.len(), MAX_FLEX_CHILDREN);
    }

    #[test]
    fn test_cross_axis() {
        assert_eq!(cross_axis_placement(20, 100, Align::Start), (0, 20));
        assert_eq!(cross_axis_placement(20, 100, Align::Center), (40, 20));
        assert_eq!(cross_axis_placement(20, 100, Align::End), (80, 20));
        assert_eq!(cross_axis_placement(20, 100, Align::Stretch), (0, 100));
        assert_eq!(cross_axis_placement(150, 100, Align::Center), (0, 100));
    }
}
