//! Font ladder, semantic font roles and text measurement.
//!
//! Text uses the ISO-8859-1 monospace faces shipped with `embedded-graphics`
//! (so `°` and other Latin-1 glyphs render). Above 20px the faces are
//! integer-upscaled. The result is a fixed ladder of 16 sizes whose glyph
//! width and height never decrease from one level to the next, which is what
//! makes [`fit_text`]'s binary search valid.
//!
//! | Level | Face       | Scale | Cell (w×h) |
//! |-------|------------|-------|------------|
//! | 0     | 4x6        | 1     | 4×6        |
//! | 1     | 5x8        | 1     | 5×8        |
//! | 2     | 6x10       | 1     | 6×10       |
//! | 3     | 6x13       | 1     | 6×13       |
//! | 4     | 9x15       | 1     | 9×15       |
//! | 5     | 9x18       | 1     | 9×18       |
//! | 6     | 10x20      | 1     | 10×20      |
//! | 7     | 8x13       | 2     | 16×26      |
//! | 8     | 9x15       | 2     | 18×30      |
//! | 9     | 9x18       | 2     | 18×36      |
//! | 10    | 10x20      | 2     | 20×40      |
//! | 11    | 9x15       | 3     | 27×45      |
//! | 12    | 9x18       | 3     | 27×54      |
//! | 13    | 10x20      | 3     | 30×60      |
//! | 14    | 10x20      | 4     | 40×80      |
//! | 15    | 10x20      | 5     | 50×100     |

use embedded_graphics::mono_font::iso_8859_1::{
    FONT_10X20, FONT_4X6, FONT_5X8, FONT_6X10, FONT_6X13, FONT_6X13_BOLD, FONT_8X13,
    FONT_8X13_BOLD, FONT_9X15, FONT_9X15_BOLD, FONT_9X18, FONT_9X18_BOLD,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use serde::{Deserialize, Serialize};

/// Number of sizes on the ladder.
pub const LEVELS: u8 = 16;

/// Highest ladder level.
pub const MAX_LEVEL: u8 = LEVELS - 1;

/// A size on the font ladder, regular or bold.
///
/// Ordered by level, so `a < b` means `a` is the smaller font.
///
/// # Examples
///
/// ```
/// use display_components::font::Font;
/// use embedded_graphics::geometry::Size;
///
/// let font = Font::new(6, false);
/// assert_eq!(font.text_size("12:30"), Size::new(50, 20));
/// assert_eq!(font.text_size(""), Size::new(0, 20));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Font {
    level: u8,
    bold: bool,
}

struct Face {
    font: &'static MonoFont<'static>,
    scale: u32,
}

fn face(level: u8, bold: bool) -> Face {
    let (font, scale): (&'static MonoFont<'static>, u32) = match (level, bold) {
        (0, _) => (&FONT_4X6, 1),
        (1, _) => (&FONT_5X8, 1),
        (2, _) => (&FONT_6X10, 1),
        (3, false) => (&FONT_6X13, 1),
        (3, true) => (&FONT_6X13_BOLD, 1),
        (4, false) => (&FONT_9X15, 1),
        (4, true) => (&FONT_9X15_BOLD, 1),
        (5, false) => (&FONT_9X18, 1),
        (5, true) => (&FONT_9X18_BOLD, 1),
        (6, _) => (&FONT_10X20, 1),
        (7, false) => (&FONT_8X13, 2),
        (7, true) => (&FONT_8X13_BOLD, 2),
        (8, false) => (&FONT_9X15, 2),
        (8, true) => (&FONT_9X15_BOLD, 2),
        (9, false) => (&FONT_9X18, 2),
        (9, true) => (&FONT_9X18_BOLD, 2),
        (10, _) => (&FONT_10X20, 2),
        (11, false) => (&FONT_9X15, 3),
        (11, true) => (&FONT_9X15_BOLD, 3),
        (12, false) => (&FONT_9X18, 3),
        (12, true) => (&FONT_9X18_BOLD, 3),
        (13, _) => (&FONT_10X20, 3),
        (14, _) => (&FONT_10X20, 4),
        _ => (&FONT_10X20, 5),
    };
    Face { font, scale }
}

impl Font {
    /// Smallest regular font; the fallback for degenerate fits.
    pub const SMALLEST: Font = Font {
        level: 0,
        bold: false,
    };

    /// Font at `level` (clamped to [`MAX_LEVEL`]).
    pub const fn new(level: u8, bold: bool) -> Self {
        let level = if level > MAX_LEVEL { MAX_LEVEL } else { level };
        Self { level, bold }
    }

    /// Largest font whose line height does not exceed `px`, or the smallest
    /// font when none does.
    pub fn for_height(px: u32, bold: bool) -> Self {
        let level = (0..LEVELS)
            .rev()
            .find(|&l| Font::new(l, bold).line_height() <= px)
            .unwrap_or(0);
        Font::new(level, bold)
    }

    /// Ladder level.
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Whether the bold ladder is used.
    pub const fn is_bold(self) -> bool {
        self.bold
    }

    /// Same size, bold face.
    pub const fn bold(self) -> Self {
        Font::new(self.level, true)
    }

    /// Scaled glyph cell size.
    pub fn cell_size(self) -> Size {
        let f = face(self.level, self.bold);
        f.font.character_size * f.scale
    }

    /// Scaled line height in pixels.
    pub fn line_height(self) -> u32 {
        self.cell_size().height
    }

    /// Rendered size of `text` on a single line.
    ///
    /// Width is `chars · (cell + spacing) - spacing`; an empty string is 0 wide
    /// but still one line tall.
    pub fn text_size(self, text: &str) -> Size {
        let f = face(self.level, self.bold);
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        let advance = f.font.character_size.width + f.font.character_spacing;
        let width = chars
            .saturating_mul(advance)
            .saturating_sub(if chars > 0 { f.font.character_spacing } else { 0 });
        Size::new(
            width.saturating_mul(f.scale),
            f.font.character_size.height * f.scale,
        )
    }

    /// Draws `text` with its top-left corner at `top_left`.
    pub fn draw<D>(self, display: &mut D, text: &str, top_left: Point, color: Rgb888) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let f = face(self.level, self.bold);
        let style = MonoTextStyle::new(f.font, color);
        if f.scale <= 1 {
            Text::with_baseline(text, top_left, style, Baseline::Top).draw(display)?;
        } else {
            let mut scaled = Scaled {
                target: display,
                origin: top_left,
                scale: f.scale,
            };
            Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut scaled)?;
        }
        Ok(())
    }
}

/// Largest font whose rendering of `text` fits `max_width × max_height`.
///
/// Binary search over the ladder; falls back to [`Font::SMALLEST`] (or its
/// bold twin) when nothing fits, including for zero-size boxes. Pure: the same
/// inputs always give the same font.
///
/// # Examples
///
/// ```
/// use display_components::font::{fit_text, Font};
///
/// let font = fit_text("21.5°C", 100, 40, false);
/// let size = font.text_size("21.5°C");
/// assert!(size.width <= 100 && size.height <= 40);
/// assert!(fit_text("21.5°C", 200, 80, false) >= font);
///
/// assert_eq!(fit_text("anything", 0, 0, false), Font::SMALLEST);
/// ```
pub fn fit_text(text: &str, max_width: u32, max_height: u32, bold: bool) -> Font {
    let fits = |level: u8| {
        let size = Font::new(level, bold).text_size(text);
        size.width <= max_width && size.height <= max_height
    };

    // Invariant: every level below `lo` fits, every level at or above `hi` does not.
    let (mut lo, mut hi) = (0u8, LEVELS);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if fits(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    Font::new(lo.saturating_sub(1), bold)
}

/// Semantic font size used by widgets.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// 8px captions.
    Tiny,
    /// 10px labels.
    Small,
    /// 13px body text.
    #[default]
    Regular,
    /// 18px emphasized values.
    Medium,
    /// 26px values.
    Large,
    /// 36px primary values.
    #[serde(rename = "xlarge")]
    XLarge,
    /// 54px hero values.
    Huge,
}

impl FontRole {
    /// Nominal line height in pixels.
    pub const fn pixel_height(self) -> u32 {
        match self {
            FontRole::Tiny => 8,
            FontRole::Small => 10,
            FontRole::Regular => 13,
            FontRole::Medium => 18,
            FontRole::Large => 26,
            FontRole::XLarge => 36,
            FontRole::Huge => 54,
        }
    }

    /// Ladder font for this role.
    pub fn font(self, bold: bool) -> Font {
        Font::for_height(self.pixel_height(), bold)
    }
}

/// Draw target adapter that paints every pixel as a `scale × scale` block.
struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<D: DrawTarget> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let size = self.target.bounding_box().size;
        Rectangle::new(Point::zero(), size / self.scale.max(1))
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // Scale is at most 5, so the cast cannot wrap.
        #[allow(clippy::cast_possible_wrap)]
        let step = self.scale as i32;
        let block = Size::new_equal(self.scale);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + point * step;
            self.target.fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_ladder_is_monotonic() {
        for level in 1..LEVELS {
            for bold in [false, true] {
                let prev = Font::new(level - 1, bold).cell_size();
                let cur = Font::new(level, bold).cell_size();
                assert!(cur.width >= prev.width, "width at {level}");
                assert!(cur.height >= prev.height, "height at {level}");
            }
        }
    }

    #[test]
    fn test_bold_matches_regular_cells() {
        for level in 0..LEVELS {
            assert_eq!(
                Font::new(level, true).cell_size(),
                Font::new(level, false).cell_size()
            );
        }
    }

    #[test]
    fn test_ladder_heights() {
        let heights: Vec<u32> = (0..LEVELS).map(|l| Font::new(l, false).line_height()).collect();
        assert_eq!(
            heights,
            vec![6, 8, 10, 13, 15, 18, 20, 26, 30, 36, 40, 45, 54, 60, 80, 100]
        );
    }

    #[test]
    fn test_roles() {
        assert_eq!(FontRole::Tiny.font(false).line_height(), 8);
        assert_eq!(FontRole::Small.font(false).line_height(), 10);
        assert_eq!(FontRole::Regular.font(false).line_height(), 13);
        assert_eq!(FontRole::Medium.font(false).line_height(), 18);
        assert_eq!(FontRole::Large.font(false).line_height(), 26);
        assert_eq!(FontRole::XLarge.font(false).line_height(), 36);
        assert_eq!(FontRole::Huge.font(false).line_height(), 54);
    }

    #[test]
    fn test_new_clamps_level() {
        assert_eq!(Font::new(200, false).level(), MAX_LEVEL);
    }

    #[test]
    fn test_for_height_below_ladder() {
        assert_eq!(Font::for_height(3, false), Font::SMALLEST);
    }

    #[test]
    fn test_text_size_counts_chars_not_bytes() {
        let font = Font::new(2, false);
        assert_eq!(font.text_size("°C").width, 12);
    }

    #[test]
    fn test_fit_text_exact_box() {
        // "09:05" at level 13 is 150×60.
        let font = fit_text("09:05", 150, 60, false);
        assert_eq!(font.level(), 13);
        let font = fit_text("09:05", 149, 60, false);
        assert_eq!(font.level(), 12);
    }

    #[test]
    fn test_fit_text_degenerate() {
        assert_eq!(fit_text("", 0, 0, false), Font::SMALLEST);
        assert_eq!(fit_text("abc", 1, 1000, false), Font::SMALLEST);
        assert_eq!(fit_text("", 1000, 1000, false).level(), MAX_LEVEL);
        assert!(fit_text("x", 0, 0, true).is_bold());
    }

    #[test]
    fn test_draw_unscaled() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        Font::new(0, false)
            .draw(&mut display, "I", Point::zero(), Rgb888::new(255, 255, 255))
            .unwrap();
        let bbox = display.affected_area();
        assert!(bbox.size.width <= 4 && bbox.size.height <= 6);
        assert!(bbox.size.width > 0);
    }

    #[test]
    fn test_draw_scaled_stays_in_cell() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let font = Font::new(7, false);
        font.draw(&mut display, "8", Point::new(2, 2), Rgb888::new(255, 0, 0))
            .unwrap();
        let area = display.affected_area();
        let cell = Rectangle::new(Point::new(2, 2), font.cell_size());
        assert!(area.top_left.x >= cell.top_left.x && area.top_left.y >= cell.top_left.y);
        assert!(area.size.width <= 16 && area.size.height <= 26);
    }
}
