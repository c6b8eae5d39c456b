use display_layout::geometry::Rect;
use display_layout::style::Align;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use super::{pct, px};
use crate::context::{Anchor, RenderContext};
use crate::font::FontRole;
use crate::surface::Surface;
use crate::theme::palette;

/// Free text scaled to fill the slot, with an optional caption on top.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDisplay {
    text: String,
    label: Option<String>,
    align: Align,
    bold: bool,
    max_font: Option<FontRole>,
    text_color: Rgb888,
    label_color: Rgb888,
}

impl TextDisplay {
    /// Centered white text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
            align: Align::Center,
            bold: false,
            max_font: None,
            text_color: palette::WHITE,
            label_color: palette::GRAY,
        }
    }

    /// Caption above the text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Horizontal alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Bold ladder.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Caps the fitted text at `role` instead of filling the slot.
    pub fn max_font(mut self, role: FontRole) -> Self {
        self.max_font = Some(role);
        self
    }

    /// Text and caption colors.
    pub fn colors(mut self, text: Rgb888, label: Rgb888) -> Self {
        self.text_color = text;
        self.label_color = label;
        self
    }

    /// Draws caption and text inside `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let pad = pct(rect.width(), 5);
        let inner = Rect::new(rect.x1 + pad, rect.y1 + pad, rect.x2 - pad, rect.y2 - pad);
        let mut top = inner.y1;

        if let Some(label) = &self.label {
            let label_h = pct(inner.height(), 15);
            let font = ctx.fit_text_within(
                label,
                Size::new(px(inner.width()), px(label_h)),
                ctx.get_font(FontRole::Small),
            );
            let at = Point::new(inner.center().x, top + label_h / 2);
            ctx.draw_text(surface, label, at, Anchor::CENTER, font, self.label_color)?;
            top += label_h + 4;
        }

        let area = Rect::new(inner.x1, top.min(inner.y2), inner.x2, inner.y2);
        let font = ctx.fit_text(
            &self.text,
            px(pct(area.width(), 95)),
            px(pct(area.height(), 90)),
            self.bold,
        );
        let font = match self.max_font {
            Some(role) => font.min(ctx.get_font(role)),
            None => font,
        };
        let cy = area.center().y;
        let (at, anchor) = match self.align {
            Align::Start => (Point::new(area.x1, cy), Anchor::LEFT_MIDDLE),
            Align::End => (Point::new(area.x2, cy), Anchor::RIGHT_MIDDLE),
            Align::Center | Align::Stretch => (area.center(), Anchor::CENTER),
        };
        ctx.draw_text(surface, &self.text, at, anchor, font, self.text_color)
    }
}
