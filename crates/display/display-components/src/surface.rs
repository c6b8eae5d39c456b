//! Clip-aware draw target used during component rendering.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Wraps the real display and drops every pixel outside the current clip.
///
/// Nested components narrow the clip with [`Surface::with_clip`]; the clip is
/// restored when the closure returns, so siblings never see each other's
/// clip.
///
/// # Examples
///
/// ```
/// use display_components::surface::Surface;
/// use embedded_graphics::mock_display::MockDisplay;
/// use embedded_graphics::pixelcolor::Rgb888;
/// use embedded_graphics::prelude::*;
/// use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
///
/// let mut display: MockDisplay<Rgb888> = MockDisplay::new();
/// let mut surface = Surface::new(&mut display);
/// surface
///     .with_clip(Rectangle::new(Point::new(0, 0), Size::new(2, 2)), |s| {
///         Rectangle::new(Point::zero(), Size::new(8, 8))
///             .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
///             .draw(s)
///     })
///     .unwrap();
/// assert_eq!(display.affected_area().size, Size::new(2, 2));
/// ```
pub struct Surface<'a, D> {
    target: &'a mut D,
    clip: Rectangle,
}

impl<'a, D> Surface<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    /// Surface clipped to the display's bounding box.
    pub fn new(target: &'a mut D) -> Self {
        let clip = target.bounding_box();
        Self { target, clip }
    }

    /// Current clip rectangle.
    pub fn clip(&self) -> Rectangle {
        self.clip
    }

    /// Runs `f` with the clip narrowed to `area ∩ clip`, then restores it.
    pub fn with_clip<R>(&mut self, area: Rectangle, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.clip;
        self.clip = saved.intersection(&area);
        let result = f(self);
        self.clip = saved;
        result
    }
}

impl<D> Dimensions for Surface<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn bounding_box(&self) -> Rectangle {
        self.clip
    }
}

impl<D> DrawTarget for Surface<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    type Color = Rgb888;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let clip = self.clip;
        self.target
            .draw_iter(pixels.into_iter().filter(|Pixel(p, _)| clip.contains(*p)))
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.clip);
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        self.target.fill_solid(&area, color)
    }
}
