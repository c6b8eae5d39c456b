use display_layout::geometry::Rect;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use super::{pct, px};
use crate::context::{Anchor, RenderContext};
use crate::font::FontRole;
use crate::icon::IconKind;
use crate::surface::Surface;
use crate::theme::palette;

/// Large fitted value with an optional caption underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredValue {
    value: String,
    label: Option<String>,
    bold: bool,
    value_color: Rgb888,
    label_color: Rgb888,
}

impl CenteredValue {
    /// White value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            bold: false,
            value_color: palette::WHITE,
            label_color: palette::GRAY,
        }
    }

    /// Caption below the value.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Bold value.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Value and caption colors.
    pub fn colors(mut self, value: Rgb888, label: Rgb888) -> Self {
        self.value_color = value;
        self.label_color = label;
        self
    }

    /// Draws value and caption inside `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let pad = pct(rect.width(), 5);
        let inner = Rect::new(rect.x1 + pad, rect.y1 + pad, rect.x2 - pad, rect.y2 - pad);
        let small = ctx.get_font(FontRole::Small);
        let (label_h, gap) = match &self.label {
            Some(_) => (pct(inner.height(), 22).max(i32::try_from(small.line_height()).unwrap_or(0)), 2),
            None => (0, 0),
        };
        let value_h = (inner.height() - label_h - gap).max(0);
        let font = ctx.fit_text(
            &self.value,
            px(pct(inner.width(), 90)),
            px(pct(value_h, 85)),
            self.bold,
        );
        let cx = inner.center().x;
        ctx.draw_text(
            surface,
            &self.value,
            Point::new(cx, inner.y1 + value_h / 2),
            Anchor::CENTER,
            font,
            self.value_color,
        )?;
        if let Some(label) = &self.label {
            let font = ctx.fit_text_within(label, Size::new(px(inner.width()), px(label_h)), small);
            let at = Point::new(cx, inner.y2 - label_h / 2);
            ctx.draw_text(surface, label, at, Anchor::CENTER, font, self.label_color)?;
        }
        Ok(())
    }
}

/// Icon next to (wide slots) or above (everything else) a value and caption.
#[derive(Debug, Clone, PartialEq)]
pub struct IconValue {
    icon: IconKind,
    value: String,
    label: Option<String>,
    icon_color: Rgb888,
    value_color: Rgb888,
    label_color: Rgb888,
}

impl IconValue {
    /// Cyan icon, white value.
    pub fn new(icon: IconKind, value: impl Into<String>) -> Self {
        Self {
            icon,
            value: value.into(),
            label: None,
            icon_color: palette::CYAN,
            value_color: palette::WHITE,
            label_color: palette::GRAY,
        }
    }

    /// Caption below the value.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Icon, value and caption colors.
    pub fn colors(mut self, icon: Rgb888, value: Rgb888, label: Rgb888) -> Self {
        self.icon_color = icon;
        self.value_color = value;
        self.label_color = label;
        self
    }

    /// Returns `true` when the icon goes beside the text.
    pub fn is_wide(rect: Rect) -> bool {
        rect.width() * 10 > rect.height() * 16
    }

    /// Icon edge length for `rect`.
    ///
    /// ```
    /// use display_components::displays::IconValue;
    /// use display_layout::geometry::Rect;
    ///
    /// assert_eq!(IconValue::icon_size(Rect::new(0, 0, 108, 108)), 32);
    /// assert_eq!(IconValue::icon_size(Rect::new(0, 0, 30, 30)), 12);
    /// ```
    pub fn icon_size(rect: Rect) -> u32 {
        px(pct(rect.width().min(rect.height()), 30)).max(12)
    }

    /// Draws icon, value and caption inside `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let pad = pct(rect.width().min(rect.height()), 6);
        let inner = Rect::new(rect.x1 + pad, rect.y1 + pad, rect.x2 - pad, rect.y2 - pad);
        let icon = Self::icon_size(rect);
        let icon_i = i32::try_from(icon).unwrap_or(0);
        let small = ctx.get_font(FontRole::Small);
        let label_h = if self.label.is_some() {
            i32::try_from(small.line_height()).unwrap_or(0)
        } else {
            0
        };

        if Self::is_wide(rect) {
            let icon_center = Point::new(inner.x1 + icon_i / 2, inner.center().y);
            let half = icon_i / 2;
            self.icon
                .draw(surface, icon_center - Point::new(half, half), icon, self.icon_color)?;

            let text_x = inner.x1 + icon_i + 6;
            let text_w = (inner.x2 - text_x).max(0);
            let value_h = (inner.height() - label_h - 2).max(0);
            let font = ctx.fit_text(&self.value, px(text_w), px(pct(value_h, 85)), false);
            let value_size = font.text_size(&self.value);
            let group = i32::try_from(value_size.height).unwrap_or(0) + if label_h > 0 { label_h + 2 } else { 0 };
            let top = inner.center().y - group / 2;
            ctx.draw_text(
                surface,
                &self.value,
                Point::new(text_x, top),
                Anchor::LEFT_TOP,
                font,
                self.value_color,
            )?;
            if let Some(label) = &self.label {
                let font = ctx.fit_text_within(label, Size::new(px(text_w), px(label_h)), small);
                let at = Point::new(text_x, top + group - label_h);
                ctx.draw_text(surface, label, at, Anchor::LEFT_TOP, font, self.label_color)?;
            }
        } else {
            let value_h = (inner.height() - icon_i - 4 - if label_h > 0 { label_h + 2 } else { 0 }).max(0);
            let font = ctx.fit_text(&self.value, px(pct(inner.width(), 90)), px(pct(value_h, 90)), false);
            let value_size = font.text_size(&self.value);
            let value_i = i32::try_from(value_size.height).unwrap_or(0);
            let group = icon_i + 4 + value_i + if label_h > 0 { label_h + 2 } else { 0 };
            let cx = inner.center().x;
            let mut y = inner.center().y - group / 2;

            self.icon
                .draw(surface, Point::new(cx - icon_i / 2, y), icon, self.icon_color)?;
            y += icon_i + 4;
            ctx.draw_text(surface, &self.value, Point::new(cx, y), Anchor::MIDDLE_TOP, font, self.value_color)?;
            y += value_i + 2;
            if let Some(label) = &self.label {
                let font = ctx.fit_text_within(label, Size::new(px(inner.width()), px(label_h)), small);
                ctx.draw_text(surface, label, Point::new(cx, y), Anchor::MIDDLE_TOP, font, self.label_color)?;
            }
        }
        Ok(())
    }
}
