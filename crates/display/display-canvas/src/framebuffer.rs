//! Owned RGB888 framebuffer the render pipeline draws into.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Device canvas width.
pub const DEFAULT_WIDTH: u32 = 240;

/// Device canvas height.
pub const DEFAULT_HEIGHT: u32 = 240;

/// CPU framebuffer of exactly `width × height` RGB pixels in row-major order.
///
/// Pixels drawn outside the canvas are silently dropped.
///
/// # Examples
///
/// ```
/// use display_canvas::Canvas;
/// use embedded_graphics::pixelcolor::Rgb888;
/// use embedded_graphics::prelude::*;
/// use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
///
/// let mut canvas = Canvas::new();
/// Rectangle::new(Point::new(10, 10), Size::new(4, 4))
///     .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
///     .draw(&mut canvas)
///     .unwrap();
///
/// assert_eq!(canvas.pixel(11, 11), Some(Rgb888::RED));
/// assert_eq!(canvas.pixel(0, 0), Some(Rgb888::BLACK));
/// assert_eq!(canvas.pixel(240, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<Rgb888>,
    width: u32,
    height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// 240×240 canvas filled with black.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Canvas of arbitrary size filled with black.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb888::BLACK)
    }

    /// Canvas of arbitrary size filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgb888) -> Self {
        let len = (width as usize).saturating_mul(height as usize);
        Self {
            pixels: vec![color; len],
            width,
            height,
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.index(x, y).and_then(|i| self.pixels.get(i).copied())
    }

    /// Sets the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb888) {
        if let Some(px) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *px = color;
        }
    }

    /// Fills the whole canvas.
    pub fn fill(&mut self, color: Rgb888) {
        self.pixels.fill(color);
    }

    /// Number of pixels that exactly match `color`.
    pub fn count_color(&self, color: Rgb888) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Interleaved `RGBRGB…` bytes, 8 bits per channel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len().saturating_mul(3));
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.r(), p.g(), p.b()]);
        }
        bytes
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        // Intersection with the bounding box keeps both corners non-negative.
        #[allow(clippy::cast_sign_loss)]
        let (x0, x1) = (area.top_left.x as usize, bottom_right.x as usize);
        #[allow(clippy::cast_sign_loss)]
        let (y0, y1) = (area.top_left.y as usize, bottom_right.y as usize);
        let stride = self.width as usize;
        for y in y0..=y1 {
            let row = y * stride;
            if let Some(span) = self.pixels.get_mut(row + x0..=row + x1) {
                span.fill(color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn test_new_is_device_sized_and_black() {
        let canvas = Canvas::new();
        assert_eq!(canvas.size(), Size::new(240, 240));
        assert_eq!(canvas.pixels().len(), 240 * 240);
        assert_eq!(canvas.count_color(Rgb888::BLACK), 240 * 240);
    }

    #[test]
    fn test_out_of_bounds_pixels_dropped() {
        let mut canvas = Canvas::with_size(4, 4);
        canvas
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb888::WHITE),
                Pixel(Point::new(4, 0), Rgb888::WHITE),
                Pixel(Point::new(0, 4), Rgb888::WHITE),
                Pixel(Point::new(3, 3), Rgb888::WHITE),
            ])
            .unwrap();
        assert_eq!(canvas.count_color(Rgb888::WHITE), 1);
        assert_eq!(canvas.pixel(3, 3), Some(Rgb888::WHITE));
    }

    #[test]
    fn test_fill_solid_clips_to_canvas() {
        let mut canvas = Canvas::with_size(10, 10);
        Rectangle::new(Point::new(-5, 8), Size::new(100, 100))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::GREEN))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.count_color(Rgb888::GREEN), 20);
        assert_eq!(canvas.pixel(0, 7), Some(Rgb888::BLACK));
        assert_eq!(canvas.pixel(9, 9), Some(Rgb888::GREEN));
    }

    #[test]
    fn test_fill_solid_empty_area() {
        let mut canvas = Canvas::with_size(10, 10);
        canvas
            .fill_solid(&Rectangle::new(Point::new(2, 2), Size::zero()), Rgb888::RED)
            .unwrap();
        assert_eq!(canvas.count_color(Rgb888::RED), 0);
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::with_size(3, 2);
        canvas.clear(Rgb888::BLUE).unwrap();
        assert_eq!(canvas.count_color(Rgb888::BLUE), 6);
    }

    #[test]
    fn test_rgb_bytes_layout() {
        let mut canvas = Canvas::with_size(2, 1);
        canvas.set_pixel(1, 0, Rgb888::new(1, 2, 3));
        assert_eq!(canvas.to_rgb_bytes(), vec![0, 0, 0, 1, 2, 3]);
    }
}
