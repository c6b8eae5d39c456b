//! History sparkline.

use display_layout::geometry::Rect;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Polyline, PrimitiveStyle, Triangle};

use crate::context::RenderContext;
use crate::surface::Surface;
use crate::theme::palette;

/// Line chart of a value series, scaled to its own min/max.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    values: Vec<f64>,
    color: Rgb888,
    fill: Option<Rgb888>,
    line_width: u32,
}

impl Sparkline {
    /// Cyan line over `values`. Non-finite samples are dropped.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().filter(|v| v.is_finite()).collect(),
            color: palette::CYAN,
            fill: None,
            line_width: 2,
        }
    }

    /// Line color.
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Fills the area under the line.
    pub fn fill(mut self, color: Rgb888) -> Self {
        self.fill = Some(color);
        self
    }

    /// Stroke width.
    pub fn line_width(mut self, width: u32) -> Self {
        self.line_width = width.max(1);
        self
    }

    /// Samples being plotted.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Fills the whole slot.
    pub fn measure(&self, _ctx: &RenderContext, max: Size) -> Size {
        max
    }

    /// Screen coordinates of each sample inside `rect`. A flat series sits
    /// on the bottom edge.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn points(&self, rect: Rect) -> Vec<Point> {
        let n = self.values.len();
        if n < 2 || rect.is_empty() {
            return Vec::new();
        }
        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        let range = if max > min { max - min } else { 1.0 };
        let w = f64::from(rect.width() - 1);
        let h = f64::from(rect.height() - 1);
        let last = (n - 1) as f64;

        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = rect.x1 + (i as f64 * w / last).round() as i32;
                let y = rect.y2 - 1 - ((v - min) / range * h).round() as i32;
                Point::new(x, y)
            })
            .collect()
    }

    /// Draws the optional fill and the line.
    pub fn draw<D>(&self, _ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let points = self.points(rect);
        if points.is_empty() {
            return Ok(());
        }
        if let Some(fill) = self.fill {
            let base = rect.y2 - 1;
            let style = PrimitiveStyle::with_fill(fill);
            for pair in points.windows(2) {
                if let [a, b] = pair {
                    Triangle::new(*a, *b, Point::new(b.x, base)).into_styled(style).draw(surface)?;
                    Triangle::new(*a, Point::new(b.x, base), Point::new(a.x, base))
                        .into_styled(style)
                        .draw(surface)?;
                }
            }
        }
        Polyline::new(&points)
            .into_styled(PrimitiveStyle::with_stroke(self.color, self.line_width))
            .draw(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_span_rect() {
        let line = Sparkline::new([0.0, 5.0, 10.0]);
        let points = line.points(Rect::new(0, 0, 101, 51));
        assert_eq!(points, vec![Point::new(0, 50), Point::new(50, 25), Point::new(100, 0)]);
    }

    #[test]
    fn test_flat_series_on_bottom() {
        let line = Sparkline::new([3.0, 3.0]);
        let points = line.points(Rect::new(0, 0, 10, 10));
        assert!(points.iter().all(|p| p.y == 9));
    }

    #[test]
    fn test_needs_two_finite_samples() {
        assert!(Sparkline::new([1.0]).points(Rect::new(0, 0, 10, 10)).is_empty());
        let line = Sparkline::new([1.0, f64::NAN, 2.0]);
        assert_eq!(line.values(), &[1.0, 2.0]);
    }
}
