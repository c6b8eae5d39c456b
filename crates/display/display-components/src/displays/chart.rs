use display_layout::geometry::Rect;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use super::pct;
use crate::chart::Sparkline;
use crate::context::{Anchor, HAnchor, RenderContext, VAnchor};
use crate::font::FontRole;
use crate::surface::Surface;
use crate::theme::palette;

/// Sparkline with a caption and current value above it and the series
/// range below.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDisplay {
    line: Sparkline,
    label: Option<String>,
    value: Option<String>,
    range: Option<(String, String)>,
    period: Option<String>,
    primary: Rgb888,
    secondary: Rgb888,
}

impl ChartDisplay {
    /// Chart of `line` without header or footer.
    pub fn new(line: Sparkline) -> Self {
        Self {
            line,
            label: None,
            value: None,
            range: None,
            period: None,
            primary: palette::WHITE,
            secondary: palette::GRAY,
        }
    }

    /// Uppercased caption, top left.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Current value, top right.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Minimum and maximum, bottom left and right.
    pub fn range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.range = Some((min.into(), max.into()));
        self
    }

    /// Time span caption, bottom center.
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Value and caption colors.
    pub fn colors(mut self, primary: Rgb888, secondary: Rgb888) -> Self {
        self.primary = primary;
        self.secondary = secondary;
        self
    }

    /// The plotted line.
    pub fn line(&self) -> &Sparkline {
        &self.line
    }

    /// Area left for the line inside `rect`.
    pub fn plot_area(&self, ctx: &RenderContext, rect: Rect) -> Rect {
        let pad = pct(rect.width().min(rect.height()), 5);
        let inner = Rect::new(rect.x1 + pad, rect.y1 + pad, rect.x2 - pad, rect.y2 - pad);
        let header = if self.label.is_some() || self.value.is_some() {
            line_height(ctx, FontRole::Small) + 4
        } else {
            0
        };
        let footer = if self.range.is_some() || self.period.is_some() {
            line_height(ctx, FontRole::Tiny) + 4
        } else {
            0
        };
        Rect::new(inner.x1, inner.y1 + header, inner.x2, (inner.y2 - footer).max(inner.y1 + header))
    }

    /// Draws header, line and footer inside `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let plot = self.plot_area(ctx, rect);
        let pad = pct(rect.width().min(rect.height()), 5);
        let (left, right) = (rect.x1 + pad, rect.x2 - pad);
        let top = rect.y1 + pad;
        let small = ctx.get_font(FontRole::Small);
        let tiny = ctx.get_font(FontRole::Tiny);
        let right_top = Anchor::new(HAnchor::Right, VAnchor::Top);

        if let Some(label) = &self.label {
            let text = label.to_uppercase();
            ctx.draw_text(surface, &text, Point::new(left, top), Anchor::LEFT_TOP, tiny, self.secondary)?;
        }
        if let Some(value) = &self.value {
            ctx.draw_text(surface, value, Point::new(right, top), right_top, small.bold(), self.primary)?;
        }

        surface.with_clip(plot.to_rectangle(), |s| self.line.draw(ctx, s, plot))?;

        let bottom = rect.y2 - pad;
        let bottom_anchor = |h| Anchor::new(h, VAnchor::Bottom);
        if let Some((min, max)) = &self.range {
            ctx.draw_text(surface, min, Point::new(left, bottom), bottom_anchor(HAnchor::Left), tiny, self.secondary)?;
            ctx.draw_text(surface, max, Point::new(right, bottom), bottom_anchor(HAnchor::Right), tiny, self.secondary)?;
        }
        if let Some(period) = &self.period {
            let at = Point::new(rect.center().x, bottom);
            ctx.draw_text(surface, period, at, bottom_anchor(HAnchor::Middle), tiny, self.secondary)?;
        }
        Ok(())
    }
}

fn line_height(ctx: &RenderContext, role: FontRole) -> i32 {
    i32::try_from(ctx.get_font(role).line_height()).unwrap_or(0)
}
