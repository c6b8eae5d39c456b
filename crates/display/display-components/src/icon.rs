//! Vector icons drawn from primitives.
//!
//! Icons are addressed by Material Design Icons names (`"fire"`,
//! `"water-percent"`, …) and scale to any pixel size. Each glyph is laid out
//! on a 100×100 design grid and mapped onto the requested square.

use display_layout::geometry::Rect;
use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc, Circle, Line, Polyline, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle,
};

use crate::context::RenderContext;
use crate::surface::Surface;
use crate::theme::palette;

/// Smallest size an icon is ever drawn at.
pub const MIN_ICON_SIZE: u32 = 8;

/// Known glyphs. Unknown names map to [`IconKind::Generic`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum IconKind {
    Thermostat,
    ThermostatAuto,
    Fire,
    Snowflake,
    SunSnowflake,
    PowerStandby,
    WaterPercent,
    Fan,
    Target,
    Clock,
    Thermometer,
    Lightbulb,
    Play,
    Pause,
    Stop,
    Music,
    ChartLine,
    Gauge,
    CheckCircle,
    CloseCircle,
    Alert,
    Information,
    Home,
    Flash,
    Generic,
}

const NAMES: &[(&str, IconKind)] = &[
    ("thermostat", IconKind::Thermostat),
    ("thermostat-auto", IconKind::ThermostatAuto),
    ("fire", IconKind::Fire),
    ("snowflake", IconKind::Snowflake),
    ("sun-snowflake-variant", IconKind::SunSnowflake),
    ("power-standby", IconKind::PowerStandby),
    ("water-percent", IconKind::WaterPercent),
    ("fan", IconKind::Fan),
    ("target", IconKind::Target),
    ("clock", IconKind::Clock),
    ("thermometer", IconKind::Thermometer),
    ("lightbulb", IconKind::Lightbulb),
    ("play", IconKind::Play),
    ("pause", IconKind::Pause),
    ("stop", IconKind::Stop),
    ("music", IconKind::Music),
    ("chart-line", IconKind::ChartLine),
    ("gauge", IconKind::Gauge),
    ("check-circle", IconKind::CheckCircle),
    ("close-circle", IconKind::CloseCircle),
    ("alert", IconKind::Alert),
    ("information", IconKind::Information),
    ("home", IconKind::Home),
    ("flash", IconKind::Flash),
];

impl IconKind {
    /// Looks up an icon by name. An `mdi:` prefix is ignored.
    pub fn from_name(name: &str) -> Self {
        let name = name.strip_prefix("mdi:").unwrap_or(name);
        NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(IconKind::Generic, |(_, kind)| *kind)
    }

    /// Canonical name; `"generic"` for the fallback glyph.
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("generic", |(n, _)| *n)
    }

    /// Draws the glyph into the `size × size` square at `top_left`.
    pub fn draw<D>(self, display: &mut D, top_left: Point, size: u32, color: Rgb888) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let g = Grid {
            origin: top_left,
            size: i32::try_from(size).unwrap_or(i32::MAX),
        };
        let fill = PrimitiveStyle::with_fill(color);
        let stroke = PrimitiveStyle::with_stroke(color, (size / 10).max(1));

        match self {
            IconKind::Thermostat | IconKind::Thermometer => g.thermometer(display, 40, color)?,
            IconKind::ThermostatAuto => {
                g.thermometer(display, 25, color)?;
                g.circle(72, 30, 36).into_styled(stroke).draw(display)?;
                g.line((72, 30), (72, 20)).into_styled(stroke).draw(display)?;
            }
            IconKind::Fire => {
                g.triangle((50, 5), (18, 70), (82, 70)).into_styled(fill).draw(display)?;
                g.circle(50, 68, 64).into_styled(fill).draw(display)?;
            }
            IconKind::Snowflake => g.snowflake(display, (50, 50), 45, stroke)?,
            IconKind::SunSnowflake => {
                g.circle(30, 30, 36).into_styled(fill).draw(display)?;
                g.snowflake(display, (68, 68), 28, stroke)?;
            }
            IconKind::PowerStandby => {
                Arc::with_center(g.at(50, 55), g.len(80), Angle::from_degrees(-60.0), Angle::from_degrees(300.0))
                    .into_styled(stroke)
                    .draw(display)?;
                g.line((50, 5), (50, 50)).into_styled(stroke).draw(display)?;
            }
            IconKind::WaterPercent => {
                g.triangle((50, 5), (22, 60), (78, 60)).into_styled(fill).draw(display)?;
                g.circle(50, 66, 58).into_styled(fill).draw(display)?;
            }
            IconKind::Fan => {
                for (x, y) in [(50, 25), (28, 68), (72, 68)] {
                    g.circle(x, y, 38).into_styled(fill).draw(display)?;
                }
                g.circle(50, 54, 20).into_styled(fill).draw(display)?;
            }
            IconKind::Target => {
                g.circle(50, 50, 90).into_styled(stroke).draw(display)?;
                g.circle(50, 50, 52).into_styled(stroke).draw(display)?;
                g.circle(50, 50, 18).into_styled(fill).draw(display)?;
            }
            IconKind::Clock => {
                g.circle(50, 50, 90).into_styled(stroke).draw(display)?;
                g.line((50, 50), (50, 22)).into_styled(stroke).draw(display)?;
                g.line((50, 50), (72, 50)).into_styled(stroke).draw(display)?;
            }
            IconKind::Lightbulb => {
                g.circle(50, 40, 66).into_styled(stroke).draw(display)?;
                g.rect((36, 76), (64, 94)).into_styled(fill).draw(display)?;
            }
            IconKind::Play => {
                g.triangle((22, 10), (86, 50), (22, 90)).into_styled(fill).draw(display)?;
            }
            IconKind::Pause => {
                g.rect((20, 10), (42, 90)).into_styled(fill).draw(display)?;
                g.rect((58, 10), (80, 90)).into_styled(fill).draw(display)?;
            }
            IconKind::Stop => {
                g.rect((15, 15), (85, 85)).into_styled(fill).draw(display)?;
            }
            IconKind::Music => {
                g.circle(34, 76, 32).into_styled(fill).draw(display)?;
                g.line((48, 76), (48, 10)).into_styled(stroke).draw(display)?;
                g.line((48, 10), (80, 26)).into_styled(stroke).draw(display)?;
            }
            IconKind::ChartLine => {
                Polyline::new(&[g.at(8, 8), g.at(8, 92), g.at(92, 92)])
                    .into_styled(stroke)
                    .draw(display)?;
                Polyline::new(&[g.at(18, 72), g.at(38, 46), g.at(58, 62), g.at(86, 20)])
                    .into_styled(stroke)
                    .draw(display)?;
            }
            IconKind::Gauge => {
                Arc::with_center(g.at(50, 64), g.len(90), Angle::from_degrees(180.0), Angle::from_degrees(180.0))
                    .into_styled(stroke)
                    .draw(display)?;
                g.line((50, 64), (74, 36)).into_styled(stroke).draw(display)?;
                g.circle(50, 64, 14).into_styled(fill).draw(display)?;
            }
            IconKind::CheckCircle => {
                g.circle(50, 50, 90).into_styled(stroke).draw(display)?;
                Polyline::new(&[g.at(28, 52), g.at(44, 68), g.at(74, 36)])
                    .into_styled(stroke)
                    .draw(display)?;
            }
            IconKind::CloseCircle => {
                g.circle(50, 50, 90).into_styled(stroke).draw(display)?;
                g.line((32, 32), (68, 68)).into_styled(stroke).draw(display)?;
                g.line((68, 32), (32, 68)).into_styled(stroke).draw(display)?;
            }
            IconKind::Alert => {
                g.triangle((50, 6), (6, 92), (94, 92)).into_styled(stroke).draw(display)?;
                g.line((50, 36), (50, 64)).into_styled(stroke).draw(display)?;
                g.circle(50, 78, 10).into_styled(fill).draw(display)?;
            }
            IconKind::Information => {
                g.circle(50, 50, 90).into_styled(stroke).draw(display)?;
                g.line((50, 46), (50, 74)).into_styled(stroke).draw(display)?;
                g.circle(50, 30, 10).into_styled(fill).draw(display)?;
            }
            IconKind::Home => {
                g.triangle((50, 8), (8, 48), (92, 48)).into_styled(fill).draw(display)?;
                g.rect((20, 48), (80, 92)).into_styled(fill).draw(display)?;
            }
            IconKind::Flash => {
                g.triangle((62, 4), (20, 56), (52, 56)).into_styled(fill).draw(display)?;
                g.triangle((48, 44), (80, 44), (38, 96)).into_styled(fill).draw(display)?;
            }
            IconKind::Generic => {
                g.circle(50, 50, 90).into_styled(stroke).draw(display)?;
                g.circle(50, 50, 26).into_styled(fill).draw(display)?;
            }
        }
        Ok(())
    }
}

/// Maps 0..=100 design coordinates onto a square.
struct Grid {
    origin: Point,
    size: i32,
}

impl Grid {
    fn at(&self, x: i32, y: i32) -> Point {
        self.origin + Point::new(self.size * x / 100, self.size * y / 100)
    }

    fn len(&self, percent: i32) -> u32 {
        u32::try_from(self.size * percent / 100).unwrap_or(0).max(1)
    }

    fn circle(&self, x: i32, y: i32, diameter: i32) -> Circle {
        Circle::with_center(self.at(x, y), self.len(diameter))
    }

    fn line(&self, a: (i32, i32), b: (i32, i32)) -> Line {
        Line::new(self.at(a.0, a.1), self.at(b.0, b.1))
    }

    fn triangle(&self, a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Triangle {
        Triangle::new(self.at(a.0, a.1), self.at(b.0, b.1), self.at(c.0, c.1))
    }

    fn rect(&self, a: (i32, i32), b: (i32, i32)) -> Rectangle {
        Rectangle::with_corners(self.at(a.0, a.1), self.at(b.0, b.1))
    }

    fn thermometer<D>(&self, display: &mut D, left: i32, color: Rgb888) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let stroke = PrimitiveStyle::with_stroke(color, self.len(8));
        let stem = self.rect((left, 6), (left + 20, 66));
        RoundedRectangle::with_equal_corners(stem, Size::new_equal(self.len(10)))
            .into_styled(stroke)
            .draw(display)?;
        self.circle(left + 10, 76, 36)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)?;
        self.line((left + 10, 30), (left + 10, 70)).into_styled(stroke).draw(display)
    }

    fn snowflake<D>(&self, display: &mut D, c: (i32, i32), r: i32, style: PrimitiveStyle<Rgb888>) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        // three spokes at 0°, 60° and 120°; sin 60° ≈ 0.866
        let dx = r * 866 / 1000;
        let dy = r / 2;
        self.line((c.0, c.1 - r), (c.0, c.1 + r)).into_styled(style).draw(display)?;
        self.line((c.0 - dx, c.1 - dy), (c.0 + dx, c.1 + dy)).into_styled(style).draw(display)?;
        self.line((c.0 - dx, c.1 + dy), (c.0 + dx, c.1 - dy)).into_styled(style).draw(display)
    }
}

/// How large an icon node is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IconSize {
    /// Exact pixel size.
    Fixed(u32),
    /// As large as the rect allows, capped at `max`.
    Fit {
        /// Upper bound in pixels.
        max: u32,
    },
}

/// Square icon node, centered in its rect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Icon {
    kind: IconKind,
    size: IconSize,
    color: Rgb888,
}

impl Icon {
    /// White icon of a fixed size.
    pub fn new(kind: IconKind, size: u32) -> Self {
        Self {
            kind,
            size: IconSize::Fixed(size),
            color: palette::WHITE,
        }
    }

    /// Icon looked up by name.
    pub fn named(name: &str, size: u32) -> Self {
        Self::new(IconKind::from_name(name), size)
    }

    /// Icon that fills its rect up to `max` pixels.
    pub fn fit(kind: IconKind, max: u32) -> Self {
        Self {
            kind,
            size: IconSize::Fit { max },
            color: palette::WHITE,
        }
    }

    /// Sets the glyph color.
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Glyph.
    pub fn kind(&self) -> IconKind {
        self.kind
    }

    /// Pixel size inside a box of `max`, never below [`MIN_ICON_SIZE`].
    pub fn pixel_size(&self, max: Size) -> u32 {
        match self.size {
            IconSize::Fixed(s) => s.max(MIN_ICON_SIZE),
            IconSize::Fit { max: cap } => cap.min(max.width).min(max.height).max(MIN_ICON_SIZE),
        }
    }

    /// Square of [`Icon::pixel_size`].
    pub fn measure(&self, _ctx: &RenderContext, max: Size) -> Size {
        Size::new_equal(self.pixel_size(max))
    }

    /// Draws the icon centered in `rect`.
    pub fn draw<D>(&self, _ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let size = self.pixel_size(rect.size());
        let half = i32::try_from(size / 2).unwrap_or(0);
        let top_left = rect.center() - Point::new(half, half);
        self.kind.draw(surface, top_left, size, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    const ALL: [IconKind; 25] = [
        IconKind::Thermostat,
        IconKind::ThermostatAuto,
        IconKind::Fire,
        IconKind::Snowflake,
        IconKind::SunSnowflake,
        IconKind::PowerStandby,
        IconKind::WaterPercent,
        IconKind::Fan,
        IconKind::Target,
        IconKind::Clock,
        IconKind::Thermometer,
        IconKind::Lightbulb,
        IconKind::Play,
        IconKind::Pause,
        IconKind::Stop,
        IconKind::Music,
        IconKind::ChartLine,
        IconKind::Gauge,
        IconKind::CheckCircle,
        IconKind::CloseCircle,
        IconKind::Alert,
        IconKind::Information,
        IconKind::Home,
        IconKind::Flash,
        IconKind::Generic,
    ];

    #[test]
    fn test_from_name() {
        assert_eq!(IconKind::from_name("fire"), IconKind::Fire);
        assert_eq!(IconKind::from_name("mdi:water-percent"), IconKind::WaterPercent);
        assert_eq!(IconKind::from_name("no-such-icon"), IconKind::Generic);
        assert_eq!(IconKind::Generic.name(), "generic");
    }

    #[test]
    fn test_names_roundtrip() {
        for (name, kind) in NAMES {
            assert_eq!(IconKind::from_name(name), *kind);
            assert_eq!(kind.name(), *name);
        }
    }

    #[test]
    fn test_every_glyph_draws_inside_its_square() {
        for kind in ALL {
            for size in [8u32, 24, 48] {
                let mut display: MockDisplay<Rgb888> = MockDisplay::new();
                display.set_allow_overdraw(true);
                kind.draw(&mut display, Point::new(4, 4), size, Rgb888::WHITE).unwrap();
                let area = display.affected_area();
                assert!(area.size.width > 0, "{kind:?} at {size} drew nothing");
                // strokes may straddle the outline by half their width
                let slack = i32::try_from(size / 10).unwrap() + 1;
                let max = 4 + i32::try_from(size).unwrap() + slack;
                let br = area.bottom_right().unwrap();
                assert!(area.top_left.x >= 4 - slack && area.top_left.y >= 4 - slack, "{kind:?}");
                assert!(br.x <= max && br.y <= max, "{kind:?} at {size}: {br:?}");
            }
        }
    }

    #[test]
    fn test_pixel_size_floor_and_fit() {
        assert_eq!(Icon::new(IconKind::Fire, 3).pixel_size(Size::new(100, 100)), MIN_ICON_SIZE);
        let fit = Icon::fit(IconKind::Fire, 40);
        assert_eq!(fit.pixel_size(Size::new(100, 30)), 30);
        assert_eq!(fit.pixel_size(Size::new(100, 100)), 40);
        assert_eq!(fit.pixel_size(Size::new(2, 2)), MIN_ICON_SIZE);
    }

    #[test]
    fn test_icon_centered_in_rect() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        let mut surface = Surface::new(&mut display);
        Icon::new(IconKind::Stop, 20)
            .draw(&RenderContext::default(), &mut surface, Rect::new(0, 0, 60, 40))
            .unwrap();
        // stop square spans 15%..85% of a 20px box at (20, 10)
        assert_eq!(display.affected_area(), Rectangle::with_corners(Point::new(23, 13), Point::new(37, 27)));
    }
}
