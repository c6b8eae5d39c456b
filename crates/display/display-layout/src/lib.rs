//! Display Layout System
//!
//! Geometry and slot partitioning for small fixed-size dashboard displays.
//!
//! # Architecture
//!
//! - Core types: Rect, Slot, Edges, SizeCategory
//! - Strategies: Grid, Hero, Split, Columns/Rows, Fullscreen
//! - Presets: named configurations exposed to the assignment UI
//! - Flex helpers: main/cross axis distribution used by component stacks
//!
//! # Example
//!
//! ```
//! use display_layout::prelude::*;
//!
//! let layout = Layout::new(240, 240, LayoutPreset::Hero.config()).unwrap();
//! let hero = layout.slots()[0].rect;
//! assert_eq!(hero.size_category(), SizeCategory::Large);
//! ```

pub mod flex;
pub mod geometry;
pub mod layout;
pub mod preset;
pub mod size;
pub mod style;

pub mod prelude {
    //! Common imports for layout consumers.

    pub use crate::flex::{cross_axis_placement, main_axis_offsets};
    pub use crate::geometry::{Rect, Slot};
    pub use crate::layout::{
        compute_slots, Layout, LayoutConfig, LayoutError, LayoutKind, Slots, MAX_SLOTS,
    };
    pub use crate::preset::LayoutPreset;
    pub use crate::size::SizeCategory;
    pub use crate::style::{Align, Axis, Edges, Justify};
}
