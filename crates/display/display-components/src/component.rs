//! The component tree.
//!
//! Widgets build a [`Component`] per frame and hand it to the renderer,
//! which lays it out inside the widget's slot. Every node is drawn with the
//! surface clipped to its own rect, so no node can paint outside the area
//! it was given.

use display_layout::geometry::Rect;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::chart::Sparkline;
use crate::containers::{Panel, Spacer, Stack};
use crate::context::RenderContext;
use crate::displays::{
    CenteredValue, ChartDisplay, ClimateDisplay, ClockDisplay, IconValue, MediaDisplay, StatusDisplay, StatusListDisplay,
    TextDisplay,
};
use crate::gauge::{ArcGauge, Bar, Dot, Ring};
use crate::icon::Icon;
use crate::label::Label;
use crate::surface::Surface;

/// Any drawable node.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Component {
    Label(Label),
    Icon(Icon),
    Spacer(Spacer),
    Stack(Stack),
    Panel(Panel),
    Bar(Bar),
    Ring(Ring),
    Arc(ArcGauge),
    Sparkline(Sparkline),
    Dot(Dot),
    Clock(ClockDisplay),
    Text(TextDisplay),
    Climate(ClimateDisplay),
    CenteredValue(CenteredValue),
    IconValue(IconValue),
    Status(StatusDisplay),
    StatusList(StatusListDisplay),
    Media(MediaDisplay),
    Chart(ChartDisplay),
}

impl Component {
    /// Preferred size within `max`.
    pub fn measure(&self, ctx: &RenderContext, max: Size) -> Size {
        match self {
            Component::Label(c) => c.measure(ctx, max),
            Component::Icon(c) => c.measure(ctx, max),
            Component::Spacer(c) => c.measure(ctx, max),
            Component::Stack(c) => c.measure(ctx, max),
            Component::Panel(c) => c.measure(ctx, max),
            Component::Bar(c) => c.measure(ctx, max),
            Component::Ring(c) => c.measure(ctx, max),
            Component::Arc(c) => c.measure(ctx, max),
            Component::Sparkline(c) => c.measure(ctx, max),
            Component::Dot(c) => c.measure(ctx, max),
            Component::Clock(_)
            | Component::Text(_)
            | Component::Climate(_)
            | Component::CenteredValue(_)
            | Component::IconValue(_)
            | Component::Status(_)
            | Component::StatusList(_)
            | Component::Media(_)
            | Component::Chart(_) => max,
        }
    }

    /// Renders into `display` within `rect`.
    pub fn render<D>(&self, ctx: &RenderContext, display: &mut D, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        tracing::trace!(?rect, "rendering component");
        let mut surface = Surface::new(display);
        self.draw(ctx, &mut surface, rect)
    }

    /// Draws this node clipped to `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if rect.is_empty() {
            return Ok(());
        }
        surface.with_clip(rect.to_rectangle(), |s| match self {
            Component::Label(c) => c.draw(ctx, s, rect),
            Component::Icon(c) => c.draw(ctx, s, rect),
            Component::Spacer(_) => Ok(()),
            Component::Stack(c) => c.draw(ctx, s, rect),
            Component::Panel(c) => c.draw(ctx, s, rect),
            Component::Bar(c) => c.draw(ctx, s, rect),
            Component::Ring(c) => c.draw(ctx, s, rect),
            Component::Arc(c) => c.draw(ctx, s, rect),
            Component::Sparkline(c) => c.draw(ctx, s, rect),
            Component::Dot(c) => c.draw(ctx, s, rect),
            Component::Clock(c) => c.draw(ctx, s, rect),
            Component::Text(c) => c.draw(ctx, s, rect),
            Component::Climate(c) => c.draw(ctx, s, rect),
            Component::CenteredValue(c) => c.draw(ctx, s, rect),
            Component::IconValue(c) => c.draw(ctx, s, rect),
            Component::Status(c) => c.draw(ctx, s, rect),
            Component::StatusList(c) => c.draw(ctx, s, rect),
            Component::Media(c) => c.draw(ctx, s, rect),
            Component::Chart(c) => c.draw(ctx, s, rect),
        })
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(c: $ty) -> Self {
                    Component::$variant(c)
                }
            }
        )*
    };
}

impl_from!(
    Label(Label),
    Icon(Icon),
    Spacer(Spacer),
    Stack(Stack),
    Panel(Panel),
    Bar(Bar),
    Ring(Ring),
    Arc(ArcGauge),
    Sparkline(Sparkline),
    Dot(Dot),
    Clock(ClockDisplay),
    Text(TextDisplay),
    Climate(ClimateDisplay),
    CenteredValue(CenteredValue),
    IconValue(IconValue),
    Status(StatusDisplay),
    StatusList(StatusListDisplay),
    Media(MediaDisplay),
    Chart(ChartDisplay),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontRole;
    use crate::icon::IconKind;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_empty_rect_draws_nothing() {
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        Component::from(Label::new("hello"))
            .render(&RenderContext::default(), &mut display, Rect::new(5, 5, 5, 40))
            .unwrap();
        assert_eq!(display.affected_area().size, Size::zero());
    }

    #[test]
    fn test_nested_stack_clipped_to_outer_rect() {
        let tree: Component = Stack::column()
            .child(Label::new("WWWWWWWWWWWW").font(FontRole::Large))
            .child(Icon::new(IconKind::Stop, 40))
            .into();
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        display.set_allow_overdraw(true);
        tree.render(&RenderContext::default(), &mut display, Rect::new(8, 8, 40, 40))
            .unwrap();
        let area = display.affected_area();
        assert!(area.top_left.x >= 8 && area.top_left.y >= 8);
        let br = area.bottom_right().unwrap();
        assert!(br.x < 40 && br.y < 40);
    }

    #[test]
    fn test_composites_fill_slot() {
        let ctx = RenderContext::default();
        let max = Size::new(108, 50);
        let clock: Component = ClockDisplay::new("09:05").into();
        assert_eq!(clock.measure(&ctx, max), max);
    }
}
