//! Value indicators: progress bars, ring and arc gauges, status dots.

use display_layout::geometry::Rect;
use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::context::{Anchor, RenderContext};
use crate::font::FontRole;
use crate::surface::Surface;
use crate::theme::palette;

/// Default bar thickness.
pub const DEFAULT_BAR_HEIGHT: u32 = 10;

/// Clamps to `0..=100`, mapping NaN to zero.
fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fraction_of(extent: u32, percent: f32) -> u32 {
    (f64::from(extent) * f64::from(clamp_percent(percent)) / 100.0).floor() as u32
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Horizontal progress bar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bar {
    percent: f32,
    color: Rgb888,
    track: Rgb888,
    height: u32,
}

impl Bar {
    /// Cyan bar on the classic track.
    pub fn new(percent: f32) -> Self {
        Self {
            percent,
            color: palette::CYAN,
            track: palette::DARK_GRAY,
            height: DEFAULT_BAR_HEIGHT,
        }
    }

    /// Fill and track colors.
    pub fn colors(mut self, color: Rgb888, track: Rgb888) -> Self {
        self.color = color;
        self.track = track;
        self
    }

    /// Bar thickness.
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Width of the filled part for a bar `width` pixels wide.
    ///
    /// ```
    /// use display_components::gauge::Bar;
    ///
    /// assert_eq!(Bar::new(50.0).fill_width(101), 50);
    /// assert_eq!(Bar::new(150.0).fill_width(80), 80);
    /// assert_eq!(Bar::new(-3.0).fill_width(80), 0);
    /// ```
    pub fn fill_width(&self, width: u32) -> u32 {
        fraction_of(width, self.percent)
    }

    /// Full available width, bar thickness.
    pub fn measure(&self, _ctx: &RenderContext, max: Size) -> Size {
        Size::new(max.width, self.height.min(max.height))
    }

    /// Draws the track and fill, vertically centered in `rect`.
    pub fn draw<D>(&self, _ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let size = rect.size();
        let height = self.height.min(size.height);
        let top = rect.center().y - to_i32(height / 2);
        let corner = Size::new_equal(height / 2);

        let track = Rectangle::new(Point::new(rect.x1, top), Size::new(size.width, height));
        RoundedRectangle::with_equal_corners(track, corner)
            .into_styled(PrimitiveStyle::with_fill(self.track))
            .draw(surface)?;

        let fill = self.fill_width(size.width);
        if fill > 0 {
            let filled = Rectangle::new(Point::new(rect.x1, top), Size::new(fill, height));
            RoundedRectangle::with_equal_corners(filled, corner)
                .into_styled(PrimitiveStyle::with_fill(self.color))
                .draw(surface)?;
        }
        Ok(())
    }
}

/// Text drawn inside a ring or arc gauge.
#[derive(Debug, Clone, PartialEq)]
struct GaugeText {
    value: Option<String>,
    caption: Option<String>,
    value_color: Rgb888,
    caption_color: Rgb888,
}

impl GaugeText {
    const fn new() -> Self {
        Self {
            value: None,
            caption: None,
            value_color: palette::WHITE,
            caption_color: palette::GRAY,
        }
    }
}

macro_rules! gauge_text_builders {
    ($ty:ty) => {
        impl $ty {
            /// Value text shown in the middle.
            pub fn value(mut self, value: impl Into<String>, color: Rgb888) -> Self {
                self.text.value = Some(value.into());
                self.text.value_color = color;
                self
            }

            /// Caption text.
            pub fn caption(mut self, caption: impl Into<String>, color: Rgb888) -> Self {
                self.text.caption = Some(caption.into());
                self.text.caption_color = color;
                self
            }

            /// Fill and track colors.
            pub fn colors(mut self, color: Rgb888, track: Rgb888) -> Self {
                self.color = color;
                self.track = track;
                self
            }

            /// Fills the whole slot.
            pub fn measure(&self, _ctx: &RenderContext, max: Size) -> Size {
                max
            }
        }
    };
}

/// Full-circle gauge filled clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    percent: f32,
    color: Rgb888,
    track: Rgb888,
    text: GaugeText,
}

gauge_text_builders!(Ring);

impl Ring {
    /// Cyan ring on the classic track.
    pub fn new(percent: f32) -> Self {
        Self {
            percent,
            color: palette::CYAN,
            track: palette::DARK_GRAY,
            text: GaugeText::new(),
        }
    }

    /// Outer radius and ring width inside a `size` box.
    ///
    /// ```
    /// use display_components::gauge::Ring;
    /// use embedded_graphics::geometry::Size;
    ///
    /// assert_eq!(Ring::geometry(Size::new(108, 108)), Some((39, 7)));
    /// assert_eq!(Ring::geometry(Size::new(20, 40)), Some((8, 5)));
    /// ```
    pub fn geometry(size: Size) -> Option<(i32, u32)> {
        let half = to_i32(size.width.min(size.height)) / 2;
        let radius = if half - 15 >= 8 { half - 15 } else { half - 2 };
        if radius <= 0 {
            return None;
        }
        let width = u32::try_from((radius / 5).max(5).min(radius)).unwrap_or(1);
        Some((radius, width))
    }

    /// Draws track, filled arc, value and caption.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let Some((radius, width)) = Self::geometry(rect.size()) else {
            return Ok(());
        };
        let center = rect.center() - Point::new(0, 5);
        let diameter = u32::try_from(2 * radius - to_i32(width)).unwrap_or(1).max(1);

        Circle::with_center(center, diameter)
            .into_styled(PrimitiveStyle::with_stroke(self.track, width))
            .draw(surface)?;
        let sweep = clamp_percent(self.percent) * 3.6;
        if sweep > 0.0 {
            Arc::with_center(center, diameter, Angle::from_degrees(-90.0), Angle::from_degrees(sweep))
                .into_styled(PrimitiveStyle::with_stroke(self.color, width))
                .draw(surface)?;
        }

        let inner = u32::try_from(2 * (radius - to_i32(width))).unwrap_or(0);
        if let Some(value) = &self.text.value {
            let font = ctx.fit_text_within(value, Size::new(inner * 4 / 5, inner / 2), ctx.get_font(FontRole::Large));
            ctx.draw_text(surface, value, center, Anchor::CENTER, font, self.text.value_color)?;
        }
        if let Some(caption) = &self.text.caption {
            let font = ctx.fit_text_within(caption, rect.size(), ctx.get_font(FontRole::Tiny));
            let at = Point::new(rect.center().x, rect.y2 - 10);
            ctx.draw_text(surface, caption, at, Anchor::CENTER, font, self.text.caption_color)?;
        }
        Ok(())
    }
}

/// Half-circle gauge filled clockwise from 9 o'clock to 3 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcGauge {
    percent: f32,
    color: Rgb888,
    track: Rgb888,
    text: GaugeText,
}

gauge_text_builders!(ArcGauge);

impl ArcGauge {
    /// Cyan arc on the classic track.
    pub fn new(percent: f32) -> Self {
        Self {
            percent,
            color: palette::CYAN,
            track: palette::DARK_GRAY,
            text: GaugeText::new(),
        }
    }

    /// Draws track, filled arc, value and caption.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let half = to_i32(rect.size().width.min(rect.size().height)) / 2;
        let radius = if half - 10 >= 8 { half - 10 } else { half - 1 };
        if radius <= 0 {
            return Ok(());
        }
        let width = u32::try_from((radius / 5).max(5).min(radius)).unwrap_or(1);
        let center = rect.center() + Point::new(0, 10);
        let diameter = u32::try_from(2 * radius - to_i32(width)).unwrap_or(1).max(1);
        let start = Angle::from_degrees(180.0);

        Arc::with_center(center, diameter, start, Angle::from_degrees(180.0))
            .into_styled(PrimitiveStyle::with_stroke(self.track, width))
            .draw(surface)?;
        let sweep = clamp_percent(self.percent) * 1.8;
        if sweep > 0.0 {
            Arc::with_center(center, diameter, start, Angle::from_degrees(sweep))
                .into_styled(PrimitiveStyle::with_stroke(self.color, width))
                .draw(surface)?;
        }

        if let Some(value) = &self.text.value {
            let inner = u32::try_from(2 * (radius - to_i32(width))).unwrap_or(0);
            let font = ctx.fit_text_within(value, Size::new(inner, inner / 2), ctx.get_font(FontRole::Large));
            let at = Point::new(center.x, rect.center().y - 5);
            ctx.draw_text(surface, value, at, Anchor::CENTER, font, self.text.value_color)?;
        }
        if let Some(caption) = &self.text.caption {
            let font = ctx.fit_text_within(caption, rect.size(), ctx.get_font(FontRole::Small));
            let at = Point::new(rect.center().x, rect.y1 + 12);
            ctx.draw_text(surface, caption, at, Anchor::CENTER, font, self.text.caption_color)?;
        }
        Ok(())
    }
}

/// Filled status dot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dot {
    radius: u32,
    color: Rgb888,
}

impl Dot {
    /// Dot of `radius` pixels.
    pub fn new(radius: u32, color: Rgb888) -> Self {
        Self { radius, color }
    }

    /// Square bounding the dot.
    pub fn measure(&self, _ctx: &RenderContext, max: Size) -> Size {
        let d = self.radius * 2;
        Size::new(d.min(max.width), d.min(max.height))
    }

    /// Draws the dot centered in `rect`.
    pub fn draw<D>(&self, _ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if self.radius == 0 {
            return Ok(());
        }
        Circle::with_center(rect.center(), self.radius * 2)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(surface)
    }
}
