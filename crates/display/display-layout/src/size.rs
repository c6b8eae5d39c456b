//! Coarse size buckets used to pick an adaptive rendering strategy.

use serde::{Deserialize, Serialize};

/// Size bucket derived from a slot's height.
///
/// Ordered from smallest to largest; a taller slot never maps to a smaller
/// category.
///
/// | Height      | Category |
/// |-------------|----------|
/// | `< 40`      | `Micro`  |
/// | `40..60`    | `Tiny`   |
/// | `60..90`    | `Small`  |
/// | `90..130`   | `Medium` |
/// | `130..180`  | `Large`  |
/// | `>= 180`    | `Full`   |
///
/// # Examples
///
/// ```
/// use display_layout::size::SizeCategory;
///
/// assert_eq!(SizeCategory::from_height(108), SizeCategory::Medium);
/// assert!(SizeCategory::from_height(39) < SizeCategory::from_height(40));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    /// Single-line strips.
    Micro,
    /// Very short slots, one value at most.
    Tiny,
    /// Room for a value plus one secondary row.
    Small,
    /// A quarter of the canvas.
    Medium,
    /// Hero-sized slots.
    Large,
    /// Close to the whole canvas.
    Full,
}

impl SizeCategory {
    /// All categories in ascending order.
    pub const ALL: [SizeCategory; 6] = [
        SizeCategory::Micro,
        SizeCategory::Tiny,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::Full,
    ];

    /// Buckets a slot height. Negative heights map to `Micro`.
    pub const fn from_height(height: i32) -> Self {
        match height {
            i32::MIN..=39 => SizeCategory::Micro,
            40..=59 => SizeCategory::Tiny,
            60..=89 => SizeCategory::Small,
            90..=129 => SizeCategory::Medium,
            130..=179 => SizeCategory::Large,
            _ => SizeCategory::Full,
        }
    }

    /// Returns `true` for `Micro` and `Tiny`.
    pub fn is_compact(self) -> bool {
        self <= SizeCategory::Tiny
    }
}
