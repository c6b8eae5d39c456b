//! Drawing façade passed through the render pipeline.
//!
//! A [`RenderContext`] bundles the active theme and canvas size with the text
//! helpers every widget needs: semantic font lookup, measurement, the
//! font-fitting search and anchored text drawing. It is an immutable value;
//! nothing it computes is cached between calls.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::font::{self, Font, FontRole};
use crate::theme::{Color, Theme, ThemeToken};

/// Horizontal text anchor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HAnchor {
    /// Point is the left edge.
    Left,
    /// Point is the horizontal center.
    Middle,
    /// Point is the right edge.
    Right,
}

/// Vertical text anchor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VAnchor {
    /// Point is the top edge.
    Top,
    /// Point is the vertical center.
    Middle,
    /// Point is the bottom edge.
    Bottom,
}

/// Where a text's reference point sits on its bounding box.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Horizontal part.
    pub h: HAnchor,
    /// Vertical part.
    pub v: VAnchor,
}

impl Anchor {
    /// Top-left corner.
    pub const LEFT_TOP: Anchor = Anchor::new(HAnchor::Left, VAnchor::Top);
    /// Left edge, vertically centered.
    pub const LEFT_MIDDLE: Anchor = Anchor::new(HAnchor::Left, VAnchor::Middle);
    /// Center of the box.
    pub const CENTER: Anchor = Anchor::new(HAnchor::Middle, VAnchor::Middle);
    /// Right edge, vertically centered.
    pub const RIGHT_MIDDLE: Anchor = Anchor::new(HAnchor::Right, VAnchor::Middle);
    /// Horizontally centered, top edge.
    pub const MIDDLE_TOP: Anchor = Anchor::new(HAnchor::Middle, VAnchor::Top);

    /// Combines horizontal and vertical anchors.
    pub const fn new(h: HAnchor, v: VAnchor) -> Self {
        Self { h, v }
    }

    /// Top-left corner of a box of `size` anchored at `point`.
    pub fn top_left(self, point: Point, size: Size) -> Point {
        let w = i32::try_from(size.width).unwrap_or(i32::MAX);
        let h = i32::try_from(size.height).unwrap_or(i32::MAX);
        let x = match self.h {
            HAnchor::Left => point.x,
            HAnchor::Middle => point.x - w / 2,
            HAnchor::Right => point.x - w,
        };
        let y = match self.v {
            VAnchor::Top => point.y,
            VAnchor::Middle => point.y - h / 2,
            VAnchor::Bottom => point.y - h,
        };
        Point::new(x, y)
    }
}

/// Theme, canvas size and text helpers for one render pass.
///
/// # Examples
///
/// ```
/// use display_components::context::RenderContext;
/// use display_components::font::FontRole;
/// use display_components::theme::{Theme, ThemeToken};
///
/// let ctx = RenderContext::new(Theme::CLASSIC, 240, 240);
/// let font = ctx.fit_text("12:45", 200, 80, false);
/// assert!(font >= ctx.get_font(FontRole::Large));
/// assert_eq!(ctx.resolve(ThemeToken::TextPrimary.into()), Theme::CLASSIC.text_primary);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderContext {
    theme: Theme,
    width: u32,
    height: u32,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(Theme::CLASSIC, 240, 240)
    }
}

impl RenderContext {
    /// Context for a canvas of `width × height` drawn with `theme`.
    pub fn new(theme: Theme, width: u32, height: u32) -> Self {
        Self {
            theme,
            width,
            height,
        }
    }

    /// Active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Canvas size.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Regular font for a semantic role.
    pub fn get_font(&self, role: FontRole) -> Font {
        role.font(false)
    }

    /// Bold font for a semantic role.
    pub fn get_bold_font(&self, role: FontRole) -> Font {
        role.font(true)
    }

    /// Rendered size of `text` in `font`.
    pub fn get_text_size(&self, text: &str, font: Font) -> Size {
        font.text_size(text)
    }

    /// Largest font whose rendering of `text` fits the box. See [`font::fit_text`].
    pub fn fit_text(&self, text: &str, max_width: u32, max_height: u32, bold: bool) -> Font {
        font::fit_text(text, max_width, max_height, bold)
    }

    /// `preferred` if the text fits the box, otherwise the largest fitting font
    /// below it.
    pub fn fit_text_within(&self, text: &str, max: Size, preferred: Font) -> Font {
        let size = preferred.text_size(text);
        if size.width <= max.width && size.height <= max.height {
            preferred
        } else {
            font::fit_text(text, max.width, max.height, preferred.is_bold()).min(preferred)
        }
    }

    /// Resolves a literal or symbolic color against the theme.
    pub fn resolve(&self, color: Color) -> Rgb888 {
        self.theme.resolve(color)
    }

    /// Theme color for `token`.
    pub fn token(&self, token: ThemeToken) -> Rgb888 {
        self.theme.token(token)
    }

    /// Draws a single line of text positioned by `anchor` relative to `point`.
    pub fn draw_text<D>(
        &self,
        display: &mut D,
        text: &str,
        point: Point,
        anchor: Anchor,
        font: Font,
        color: Rgb888,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if text.is_empty() {
            return Ok(());
        }
        let top_left = anchor.top_left(point, font.text_size(text));
        font.draw(display, text, top_left, color)
    }
}
