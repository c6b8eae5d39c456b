//! Single-line text node.

use std::borrow::Cow;

use display_layout::geometry::Rect;
use display_layout::style::Align;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::context::{Anchor, RenderContext};
use crate::font::{Font, FontRole};
use crate::surface::Surface;
use crate::theme::palette;

/// How a label picks its font.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontSpec {
    /// Semantic size; shrinks only when the text would not fit.
    Role {
        /// Preferred size.
        role: FontRole,
        /// Bold ladder.
        bold: bool,
    },
    /// Exact ladder font, never adjusted.
    Fixed(Font),
    /// Largest font that fits the rect.
    Fit {
        /// Bold ladder.
        bold: bool,
    },
}

/// Text label with a font spec, color and horizontal alignment.
///
/// Vertically the text is always centered in its rect.
///
/// # Examples
///
/// ```
/// use display_components::label::Label;
/// use display_components::font::FontRole;
/// use display_components::context::RenderContext;
/// use embedded_graphics::geometry::Size;
///
/// let ctx = RenderContext::default();
/// let label = Label::new("cpu").font(FontRole::Small).uppercase();
/// assert_eq!(label.display_text(), "CPU");
/// assert_eq!(label.measure(&ctx, Size::new(100, 100)), Size::new(18, 10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font: FontSpec,
    color: Rgb888,
    align: Align,
    uppercase: bool,
}

impl Label {
    /// Regular-sized white centered label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: FontSpec::Role {
                role: FontRole::Regular,
                bold: false,
            },
            color: palette::WHITE,
            align: Align::Center,
            uppercase: false,
        }
    }

    /// Uses a semantic font size.
    pub fn font(mut self, role: FontRole) -> Self {
        let bold = self.is_bold();
        self.font = FontSpec::Role { role, bold };
        self
    }

    /// Switches to the bold ladder.
    pub fn bold(mut self) -> Self {
        self.font = match self.font {
            FontSpec::Role { role, .. } => FontSpec::Role { role, bold: true },
            FontSpec::Fixed(f) => FontSpec::Fixed(f.bold()),
            FontSpec::Fit { .. } => FontSpec::Fit { bold: true },
        };
        self
    }

    /// Uses an exact font.
    pub fn fixed(mut self, font: Font) -> Self {
        self.font = FontSpec::Fixed(font);
        self
    }

    /// Fills the rect with the largest fitting font.
    pub fn fit(mut self) -> Self {
        let bold = self.is_bold();
        self.font = FontSpec::Fit { bold };
        self
    }

    /// Sets text color.
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Sets horizontal alignment; `Stretch` behaves like `Center`.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Renders the text in upper case.
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text as it will be drawn.
    pub fn display_text(&self) -> Cow<'_, str> {
        if self.uppercase {
            Cow::Owned(self.text.to_uppercase())
        } else {
            Cow::Borrowed(&self.text)
        }
    }

    fn is_bold(&self) -> bool {
        match self.font {
            FontSpec::Role { bold, .. } | FontSpec::Fit { bold } => bold,
            FontSpec::Fixed(f) => f.is_bold(),
        }
    }

    /// Font used when drawing into a box of `max`.
    pub fn resolve_font(&self, ctx: &RenderContext, max: Size) -> Font {
        let text = self.display_text();
        match self.font {
            FontSpec::Role { role, bold } => ctx.fit_text_within(&text, max, role.font(bold)),
            FontSpec::Fixed(font) => font,
            FontSpec::Fit { bold } => ctx.fit_text(&text, max.width, max.height, bold),
        }
    }

    /// Natural size, clamped to `max`.
    pub fn measure(&self, ctx: &RenderContext, max: Size) -> Size {
        let font = self.resolve_font(ctx, max);
        let size = font.text_size(&self.display_text());
        Size::new(size.width.min(max.width), size.height.min(max.height))
    }

    /// Draws the label inside `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let text = self.display_text();
        let font = self.resolve_font(ctx, rect.size());
        let cy = rect.center().y;
        let (point, anchor) = match self.align {
            Align::Start => (Point::new(rect.x1, cy), Anchor::LEFT_MIDDLE),
            Align::End => (Point::new(rect.x2, cy), Anchor::RIGHT_MIDDLE),
            Align::Center | Align::Stretch => (rect.center(), Anchor::CENTER),
        };
        ctx.draw_text(surface, &text, point, anchor, font, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn draw(label: &Label, rect: Rect) -> MockDisplay<Rgb888> {
        let ctx = RenderContext::default();
        let mut display = MockDisplay::new();
        let mut surface = Surface::new(&mut display);
        surface
            .with_clip(rect.to_rectangle(), |s| label.draw(&ctx, s, rect))
            .unwrap();
        display
    }

    #[test]
    fn test_defaults() {
        let label = Label::new("Hello");
        assert_eq!(label.text(), "Hello");
        assert_eq!(label.color, palette::WHITE);
        assert_eq!(label.align, Align::Center);
    }

    #[test]
    fn test_role_shrinks_when_too_wide() {
        let ctx = RenderContext::default();
        let label = Label::new("Temperature").font(FontRole::Huge);
        let font = label.resolve_font(&ctx, Size::new(60, 60));
        assert!(font < FontRole::Huge.font(false));
        assert!(font.text_size("Temperature").width <= 60);
    }

    #[test]
    fn test_fit_grows() {
        let ctx = RenderContext::default();
        let label = Label::new("42").fit();
        assert!(label.resolve_font(&ctx, Size::new(200, 100)) > FontRole::Huge.font(false));
    }

    #[test]
    fn test_bold_keeps_role() {
        let label = Label::new("x").font(FontRole::Medium).bold();
        assert_eq!(
            label.font,
            FontSpec::Role {
                role: FontRole::Medium,
                bold: true
            }
        );
    }

    #[test]
    fn test_left_aligned_starts_at_rect_edge() {
        let label = Label::new("II").font(FontRole::Small).align(Align::Start);
        let display = draw(&label, Rect::new(10, 10, 60, 30));
        let area = display.affected_area();
        assert!(area.top_left.x >= 10 && area.top_left.x < 16);
    }

    #[test]
    fn test_right_aligned_ends_at_rect_edge() {
        let label = Label::new("II").font(FontRole::Small).align(Align::End);
        let display = draw(&label, Rect::new(10, 10, 60, 30));
        let br = display.affected_area().bottom_right().unwrap();
        assert!(br.x < 60 && br.x >= 54);
    }

    #[test]
    fn test_never_draws_outside_rect() {
        let label = Label::new("WWWWWWWWWWWWWWWWWWWW").fixed(Font::new(6, false));
        let display = draw(&label, Rect::new(20, 20, 40, 30));
        let area = display.affected_area();
        assert!(area.top_left.x >= 20 && area.top_left.y >= 20);
        let br = area.bottom_right().unwrap();
        assert!(br.x < 40 && br.y < 30);
    }
}
