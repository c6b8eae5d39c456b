//! Layout strategies partitioning a canvas into slots.
//!
//! A [`LayoutConfig`] describes a strategy plus outer padding and inter-slot
//! gap. [`compute_slots`] turns it into an ordered list of non-overlapping
//! [`Slot`]s for a given canvas size; [`Layout`] caches that list alongside
//! its inputs.
//!
//! Every strategy works on the available area, i.e. the canvas minus
//! `padding` on each side:
//!
//! ```text
//! ┌──────────────────────────┐
//! │ padding                  │
//! │   ┌───────┐ gap ┌──────┐ │
//! │   │ slot0 │     │slot1 │ │
//! │   └───────┘     └──────┘ │
//! │                          │
//! └──────────────────────────┘
//! ```
//!
//! Fullscreen is the exception: it always spans the whole canvas edge to edge.
//!
//! # Examples
//!
//! ```
//! use display_layout::layout::{Layout, LayoutConfig};
//!
//! let layout = Layout::new(240, 240, LayoutConfig::grid(2, 2)).unwrap();
//! assert_eq!(layout.slot_count(), 4);
//! assert_eq!(layout.slots()[3].rect.x1, 124);
//! ```

use heapless::Vec as HeaplessVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Rect, Slot};
use crate::style::Axis;

/// Maximum number of slots a layout may expose.
pub const MAX_SLOTS: usize = 16;

/// Outer padding used when a configuration leaves it unset.
pub const DEFAULT_PADDING: u32 = 8;

/// Inter-slot gap used when a configuration leaves it unset.
pub const DEFAULT_GAP: u32 = 8;

/// Hero height as a share of the available height.
pub const DEFAULT_HERO_RATIO: f32 = 0.7;

/// Number of footer slots under the hero.
pub const DEFAULT_FOOTER_SLOTS: u32 = 3;

/// Smallest share a hero or split panel may take.
pub const MIN_RATIO: f32 = 0.2;

/// Largest share a hero or split panel may take.
pub const MAX_RATIO: f32 = 0.8;

/// Ordered slot list produced by one layout pass.
pub type Slots = HeaplessVec<Slot, MAX_SLOTS>;

/// Layout validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The strategy has no slots at all (e.g. a 0×N grid).
    #[error("layout has no slots")]
    NoSlots,

    /// More slots than [`MAX_SLOTS`].
    #[error("layout needs {requested} slots but at most {max} are supported")]
    TooManySlots {
        /// Slots the strategy asked for.
        requested: usize,
        /// Capacity limit.
        max: usize,
    },

    /// Canvas dimensions do not fit pixel coordinates.
    #[error("canvas {width}x{height} is too large")]
    CanvasTooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A slot ended up with zero or negative extent.
    #[error("slot {index} has no drawable area with padding {padding} and gap {gap}")]
    Degenerate {
        /// First offending slot.
        index: usize,
        /// Padding in effect.
        padding: u32,
        /// Gap in effect.
        gap: u32,
    },
}

/// Partitioning strategy.
///
/// Serialized with an internal `kind` tag:
///
/// ```
/// use display_layout::layout::LayoutKind;
///
/// let kind: LayoutKind = serde_json::from_str(r#"{"kind": "grid", "rows": 2, "cols": 3}"#).unwrap();
/// assert_eq!(kind, LayoutKind::Grid { rows: 2, cols: 3 });
/// assert_eq!(kind.slot_count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutKind {
    /// One slot covering the entire canvas; padding and gap are ignored.
    Fullscreen,

    /// `rows × cols` equal cells in row-major order.
    Grid {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
    },

    /// A large top slot above a row of equal footer slots.
    Hero {
        /// Number of footer slots under the hero.
        #[serde(default = "default_footer_slots")]
        footer_slots: u32,
        /// Hero height share, clamped to [`MIN_RATIO`]..=[`MAX_RATIO`].
        #[serde(default = "default_hero_ratio")]
        hero_ratio: f32,
    },

    /// Two panels side by side (`Horizontal`) or stacked (`Vertical`).
    Split {
        /// Direction in which the panels follow each other.
        #[serde(default)]
        orientation: Axis,
        /// First panel share, clamped to [`MIN_RATIO`]..=[`MAX_RATIO`].
        #[serde(default = "default_split_ratio")]
        ratio: f32,
    },

    /// Columns with widths proportional to `ratios`.
    Columns {
        /// Relative widths.
        #[serde(default = "default_strip_ratios")]
        ratios: Vec<f32>,
    },

    /// Rows with heights proportional to `ratios`.
    Rows {
        /// Relative heights.
        #[serde(default = "default_strip_ratios")]
        ratios: Vec<f32>,
    },
}

fn default_footer_slots() -> u32 {
    DEFAULT_FOOTER_SLOTS
}

fn default_hero_ratio() -> f32 {
    DEFAULT_HERO_RATIO
}

fn default_split_ratio() -> f32 {
    0.5
}

fn default_strip_ratios() -> Vec<f32> {
    vec![0.33, 0.34, 0.33]
}

fn default_padding() -> u32 {
    DEFAULT_PADDING
}

fn default_gap() -> u32 {
    DEFAULT_GAP
}

impl LayoutKind {
    /// Number of slots this strategy produces.
    pub fn slot_count(&self) -> usize {
        match self {
            LayoutKind::Fullscreen => 1,
            LayoutKind::Grid { rows, cols } => (*rows as usize).saturating_mul(*cols as usize),
            LayoutKind::Hero { footer_slots, .. } => 1usize.saturating_add(*footer_slots as usize),
            LayoutKind::Split { .. } => 2,
            LayoutKind::Columns { ratios } | LayoutKind::Rows { ratios } => ratios.len(),
        }
    }
}

/// Strategy plus outer padding and inter-slot gap.
///
/// # Examples
///
/// ```
/// use display_layout::layout::{LayoutConfig, LayoutKind};
/// use display_layout::style::Axis;
///
/// let config = LayoutConfig::split(Axis::Vertical, 0.4).padding(4).gap(2);
/// assert_eq!(config.padding, 4);
///
/// let parsed: LayoutConfig =
///     serde_json::from_str(r#"{"kind": "hero", "hero_ratio": 0.6}"#).unwrap();
/// assert_eq!(parsed.padding, 8);
/// assert!(matches!(parsed.kind, LayoutKind::Hero { footer_slots: 3, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Partitioning strategy.
    #[serde(flatten)]
    pub kind: LayoutKind,

    /// Inset from every canvas edge.
    #[serde(default = "default_padding")]
    pub padding: u32,

    /// Spacing between adjacent slots.
    #[serde(default = "default_gap")]
    pub gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::grid(2, 2)
    }
}

impl LayoutConfig {
    /// Wraps a strategy with the default padding and gap.
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        }
    }

    /// Single edge-to-edge slot.
    pub fn fullscreen() -> Self {
        Self::new(LayoutKind::Fullscreen)
    }

    /// Equal-cell grid.
    pub fn grid(rows: u32, cols: u32) -> Self {
        Self::new(LayoutKind::Grid { rows, cols })
    }

    /// Hero slot over `footer_slots` footer slots.
    pub fn hero(footer_slots: u32, hero_ratio: f32) -> Self {
        Self::new(LayoutKind::Hero {
            footer_slots,
            hero_ratio,
        })
    }

    /// Two-panel split.
    pub fn split(orientation: Axis, ratio: f32) -> Self {
        Self::new(LayoutKind::Split { orientation, ratio })
    }

    /// Proportional columns.
    pub fn columns(ratios: impl Into<Vec<f32>>) -> Self {
        Self::new(LayoutKind::Columns {
            ratios: ratios.into(),
        })
    }

    /// Proportional rows.
    pub fn rows(ratios: impl Into<Vec<f32>>) -> Self {
        Self::new(LayoutKind::Rows {
            ratios: ratios.into(),
        })
    }

    /// Sets outer padding.
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets inter-slot gap.
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Padding and gap actually applied; Fullscreen forces both to zero.
    pub fn effective_spacing(&self) -> (u32, u32) {
        match self.kind {
            LayoutKind::Fullscreen => (0, 0),
            _ => (self.padding, self.gap),
        }
    }

    /// Number of slots this configuration exposes.
    pub fn slot_count(&self) -> usize {
        self.kind.slot_count()
    }
}

/// Clamps a panel share into [`MIN_RATIO`]..=[`MAX_RATIO`]; non-finite values
/// use `fallback`.
pub fn clamp_ratio(ratio: f32, fallback: f32) -> f32 {
    let ratio = if ratio.is_finite() { ratio } else { fallback };
    ratio.clamp(MIN_RATIO, MAX_RATIO)
}

/// Computes the ordered slot list for a canvas.
///
/// Pure and deterministic. Returns [`LayoutError`] instead of producing
/// zero-area slots or exceeding [`MAX_SLOTS`].
pub fn compute_slots(width: u32, height: u32, config: &LayoutConfig) -> Result<Slots, LayoutError> {
    let too_large = LayoutError::CanvasTooLarge { width, height };
    let w = i64::from(i32::try_from(width).map_err(|_| too_large.clone())?);
    let h = i64::from(i32::try_from(height).map_err(|_| too_large)?);

    let count = config.slot_count();
    if count == 0 {
        return Err(LayoutError::NoSlots);
    }
    if count > MAX_SLOTS {
        return Err(LayoutError::TooManySlots {
            requested: count,
            max: MAX_SLOTS,
        });
    }

    let (padding, gap) = config.effective_spacing();
    let p = i64::from(padding);
    let g = i64::from(gap);
    let avail_w = w - 2 * p;
    let avail_h = h - 2 * p;

    let mut builder = SlotBuilder::default();
    match &config.kind {
        LayoutKind::Fullscreen => builder.push(0, 0, w, h),
        LayoutKind::Grid { rows, cols } => {
            let (rows, cols) = (i64::from(*rows), i64::from(*cols));
            let cell_w = (avail_w - (cols - 1) * g) / cols;
            let cell_h = (avail_h - (rows - 1) * g) / rows;
            for r in 0..rows {
                for c in 0..cols {
                    let x = p + c * (cell_w + g);
                    let y = p + r * (cell_h + g);
                    builder.push(x, y, x + cell_w, y + cell_h);
                }
            }
        }
        LayoutKind::Hero {
            footer_slots,
            hero_ratio,
        } => {
            let ratio = clamp_ratio(*hero_ratio, DEFAULT_HERO_RATIO);
            let hero_h = scale(avail_h, ratio);
            builder.push(p, p, w - p, p + hero_h);

            let n = i64::from(*footer_slots);
            if n > 0 {
                let footer_y = p + hero_h + g;
                let footer_h = avail_h - hero_h - g;
                let footer_w = (avail_w - (n - 1) * g) / n;
                for i in 0..n {
                    let x = p + i * (footer_w + g);
                    builder.push(x, footer_y, x + footer_w, footer_y + footer_h);
                }
            }
        }
        LayoutKind::Split { orientation, ratio } => {
            let ratio = clamp_ratio(*ratio, default_split_ratio());
            match orientation {
                Axis::Horizontal => {
                    let first = scale(avail_w - g, ratio);
                    builder.push(p, p, p + first, h - p);
                    builder.push(p + first + g, p, w - p, h - p);
                }
                Axis::Vertical => {
                    let first = scale(avail_h - g, ratio);
                    builder.push(p, p, w - p, p + first);
                    builder.push(p, p + first + g, w - p, h - p);
                }
            }
        }
        LayoutKind::Columns { ratios } => {
            let n = i64::try_from(ratios.len()).unwrap_or(i64::MAX);
            let avail = avail_w - (n - 1) * g;
            let mut x = p;
            for share in normalized(ratios) {
                let col_w = scale(avail, share);
                builder.push(x, p, x + col_w, h - p);
                x += col_w + g;
            }
        }
        LayoutKind::Rows { ratios } => {
            let n = i64::try_from(ratios.len()).unwrap_or(i64::MAX);
            let avail = avail_h - (n - 1) * g;
            let mut y = p;
            for share in normalized(ratios) {
                let row_h = scale(avail, share);
                builder.push(p, y, w - p, y + row_h);
                y += row_h + g;
            }
        }
    }

    builder.finish(padding, gap)
}

/// `⌊extent · ratio⌋`, truncated toward zero like an integer cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn scale(extent: i64, ratio: f32) -> i64 {
    // Canvas extents fit in i32, ratio <= 1, so the product fits i64.
    (extent as f64 * f64::from(ratio)) as i64
}

/// Shares summing to 1. Negative ratios count as zero; a non-positive total
/// degrades to equal shares.
fn normalized(ratios: &[f32]) -> impl Iterator<Item = f32> + '_ {
    let clean = |r: &f32| if r.is_finite() { r.max(0.0) } else { 0.0 };
    let total: f32 = ratios.iter().map(clean).sum();
    #[allow(clippy::cast_precision_loss)]
    let equal = 1.0 / ratios.len().max(1) as f32;
    ratios.iter().map(move |r| {
        if total > 0.0 {
            clean(r) / total
        } else {
            equal
        }
    })
}

/// Accumulates slot rects, remembering the first degenerate one.
#[derive(Default)]
struct SlotBuilder {
    slots: Slots,
    degenerate: Option<usize>,
    overflow: bool,
}

impl SlotBuilder {
    fn push(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        let index = self.slots.len();
        if x2 <= x1 || y2 <= y1 {
            self.degenerate.get_or_insert(index);
        }
        let rect = Rect::new(clamp_coord(x1), clamp_coord(y1), clamp_coord(x2), clamp_coord(y2));
        if self.slots.push(Slot::new(index, rect)).is_err() {
            self.overflow = true;
        }
    }

    fn finish(self, padding: u32, gap: u32) -> Result<Slots, LayoutError> {
        if self.overflow {
            return Err(LayoutError::TooManySlots {
                requested: self.slots.len() + 1,
                max: MAX_SLOTS,
            });
        }
        match self.degenerate {
            Some(index) => Err(LayoutError::Degenerate {
                index,
                padding,
                gap,
            }),
            None => Ok(self.slots),
        }
    }
}

fn clamp_coord(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// A validated layout: configuration, canvas size and the derived slots.
///
/// Immutable once built; owns no external state.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    config: LayoutConfig,
    width: u32,
    height: u32,
    slots: Slots,
}

impl Layout {
    /// Computes and validates the slots for a canvas.
    pub fn new(width: u32, height: u32, config: LayoutConfig) -> Result<Self, LayoutError> {
        let slots = compute_slots(width, height, &config)?;
        Ok(Self {
            config,
            width,
            height,
            slots,
        })
    }

    /// Edge-to-edge single slot layout. Never fails; an empty canvas yields
    /// one empty slot.
    pub fn fullscreen(width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        let mut slots = Slots::new();
        slots.push(Slot::new(0, Rect::new(0, 0, w, h))).ok();
        Self {
            config: LayoutConfig::fullscreen(),
            width,
            height,
            slots,
        }
    }

    /// Slots in index order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at `index`, if the layout has one.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Configuration the layout was built from.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }
}
