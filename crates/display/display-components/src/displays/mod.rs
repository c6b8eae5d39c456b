//! Composite displays that size their own text from the slot geometry.
//!
//! Unlike the primitives, these nodes always fill the rect they are given
//! and derive padding, font sizes and sub-areas from its width and height.

mod chart;
mod climate;
mod clock;
mod media;
mod status;
mod text;
mod value;

pub use chart::ChartDisplay;
pub use climate::{ClimateDisplay, ClimateTier};
pub use clock::ClockDisplay;
pub use media::{MediaDisplay, MediaProgress};
pub use status::{label_budget, truncate_label, StatusDisplay, StatusListDisplay, StatusRow, AVG_CHAR_WIDTH};
pub use text::TextDisplay;
pub use value::{CenteredValue, IconValue};

/// `percent`% of `v`, truncated.
fn pct(v: i32, percent: i32) -> i32 {
    v * percent / 100
}

/// Non-negative pixel extent.
fn px(v: i32) -> u32 {
    u32::try_from(v).unwrap_or(0)
}
