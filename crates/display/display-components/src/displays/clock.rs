use display_layout::geometry::Rect;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use super::{pct, px};
use crate::context::{Anchor, RenderContext};
use crate::font::FontRole;
use crate::surface::Surface;
use crate::theme::palette;

const GAP: i32 = 4;

/// Time with optional label above and date below.
///
/// The time takes whatever height the label (12%) and date (18%) leave and
/// is drawn in the largest font that fits 95% of that area. An AM/PM marker
/// sits to the right of the time in the small font, vertically centered on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockDisplay {
    time: String,
    date: Option<String>,
    ampm: Option<String>,
    label: Option<String>,
    time_color: Rgb888,
    secondary: Rgb888,
}

impl ClockDisplay {
    /// White time, gray extras.
    pub fn new(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            date: None,
            ampm: None,
            label: None,
            time_color: palette::WHITE,
            secondary: palette::GRAY,
        }
    }

    /// Date line.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// AM/PM marker.
    pub fn ampm(mut self, ampm: impl Into<String>) -> Self {
        self.ampm = Some(ampm.into());
        self
    }

    /// Caption above the time.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Time color and the color of everything else.
    pub fn colors(mut self, time: Rgb888, secondary: Rgb888) -> Self {
        self.time_color = time;
        self.secondary = secondary;
        self
    }

    /// Time string.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Draws the clock inside `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let pad = pct(rect.width(), 4);
        let inner = Rect::new(rect.x1 + pad, rect.y1 + pad, rect.x2 - pad, rect.y2 - pad);
        let (iw, ih) = (inner.width(), inner.height());
        let cx = inner.center().x;

        let label_h = if self.label.is_some() { pct(ih, 12) } else { 0 };
        let date_h = if self.date.is_some() { pct(ih, 18) } else { 0 };
        let gaps = GAP * (i32::from(self.label.is_some()) + i32::from(self.date.is_some()));
        let time_h = (ih - label_h - date_h - gaps).max(0);
        let mut y = inner.y1;

        if let Some(label) = &self.label {
            let font = ctx.fit_text_within(label, Size::new(px(iw), px(label_h)), ctx.get_font(FontRole::Small));
            ctx.draw_text(surface, label, Point::new(cx, y + label_h / 2), Anchor::CENTER, font, self.secondary)?;
            y += label_h + GAP;
        }

        let small = ctx.get_font(FontRole::Small);
        let ampm_w = self
            .ampm
            .as_deref()
            .map_or(0, |a| small.text_size(a).width + px(GAP));
        let font = ctx.fit_text(
            &self.time,
            px(pct(iw, 95)).saturating_sub(ampm_w),
            px(pct(time_h, 95)),
            false,
        );
        let time_size = font.text_size(&self.time);
        let total = i32::try_from(time_size.width + ampm_w).unwrap_or(iw);
        let left = cx - total / 2;
        let mid = y + time_h / 2;
        ctx.draw_text(surface, &self.time, Point::new(left, mid), Anchor::LEFT_MIDDLE, font, self.time_color)?;
        if let Some(ampm) = &self.ampm {
            let right = left + i32::try_from(time_size.width).unwrap_or(0) + GAP;
            ctx.draw_text(surface, ampm, Point::new(right, mid), Anchor::LEFT_MIDDLE, small, self.secondary)?;
        }
        y += time_h + GAP;

        if let Some(date) = &self.date {
            let font = ctx.fit_text(date, px(pct(iw, 90)), px(pct(date_h, 90)), false);
            ctx.draw_text(surface, date, Point::new(cx, y + date_h / 2), Anchor::CENTER, font, self.secondary)?;
        }
        Ok(())
    }
}
