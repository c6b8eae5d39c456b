use display_layout::geometry::Rect;
use display_layout::size::SizeCategory;
use display_layout::style::{Align, Edges, Justify};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use super::{pct, px};
use crate::component::Component;
use crate::containers::Stack;
use crate::context::RenderContext;
use crate::font::FontRole;
use crate::icon::{Icon, IconKind};
use crate::label::Label;
use crate::surface::Surface;
use crate::theme::palette;

/// How much detail a climate readout shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClimateTier {
    /// Icon and temperature, plus a details row when there is height.
    Compact,
    /// Temperature with target and humidity in small print.
    Medium,
    /// Big icon, huge temperature, target row and a status footer.
    Full,
}

impl ClimateTier {
    /// Tier for a slot.
    ///
    /// ```
    /// use display_components::displays::ClimateTier;
    /// use display_layout::geometry::Rect;
    ///
    /// assert_eq!(ClimateTier::for_rect(Rect::new(0, 0, 224, 224)), ClimateTier::Full);
    /// assert_eq!(ClimateTier::for_rect(Rect::new(0, 0, 108, 108)), ClimateTier::Medium);
    /// assert_eq!(ClimateTier::for_rect(Rect::new(0, 0, 69, 60)), ClimateTier::Compact);
    /// ```
    pub fn for_rect(rect: Rect) -> Self {
        let w = rect.width();
        let category = rect.size_category();
        if w < 90 || category <= SizeCategory::Tiny {
            ClimateTier::Compact
        } else if w < 130 || category == SizeCategory::Small {
            ClimateTier::Medium
        } else {
            ClimateTier::Full
        }
    }
}

/// Thermostat readout that adapts to its slot size.
///
/// All strings arrive preformatted; hidden parts are simply `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateDisplay {
    current: String,
    target: Option<String>,
    humidity: Option<String>,
    status: Option<String>,
    icon: IconKind,
    accent: Rgb888,
    primary: Rgb888,
    secondary: Rgb888,
    humidity_color: Rgb888,
}

impl ClimateDisplay {
    /// Readout of `current` with an accent-colored `icon`.
    pub fn new(current: impl Into<String>, icon: IconKind, accent: Rgb888) -> Self {
        Self {
            current: current.into(),
            target: None,
            humidity: None,
            status: None,
            icon,
            accent,
            primary: palette::WHITE,
            secondary: palette::GRAY,
            humidity_color: palette::CYAN,
        }
    }

    /// Target temperature.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Humidity reading.
    pub fn humidity(mut self, humidity: impl Into<String>) -> Self {
        self.humidity = Some(humidity.into());
        self
    }

    /// HVAC status or mode.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Primary and secondary text colors.
    pub fn colors(mut self, primary: Rgb888, secondary: Rgb888) -> Self {
        self.primary = primary;
        self.secondary = secondary;
        self
    }

    fn reading(icon: IconKind, size: u32, text: &str, role: FontRole, color: Rgb888, gap: u32) -> Stack {
        Stack::row()
            .gap(gap)
            .child(Icon::new(icon, size).color(color))
            .child(Label::new(text).font(role).color(color))
    }

    fn target_reading(&self, size: u32, role: FontRole, gap: u32) -> Option<Stack> {
        self.target
            .as_deref()
            .map(|t| Self::reading(IconKind::Target, size, t, role, self.secondary, gap))
    }

    fn humidity_reading(&self, size: u32, role: FontRole, gap: u32) -> Option<Stack> {
        self.humidity
            .as_deref()
            .map(|h| Self::reading(IconKind::WaterPercent, size, h, role, self.humidity_color, gap))
    }

    fn status_label(&self, role: FontRole) -> Option<Label> {
        self.status
            .as_deref()
            .map(|s| Label::new(s).font(role).color(self.accent))
    }

    /// Component tree for `rect`.
    pub fn layout(&self, rect: Rect) -> Stack {
        let (w, h) = (rect.width(), rect.height());
        match ClimateTier::for_rect(rect) {
            ClimateTier::Compact => self.compact(w, h),
            ClimateTier::Medium => self.medium(w, h),
            ClimateTier::Full => self.full(w, h),
        }
    }

    fn compact(&self, w: i32, h: i32) -> Stack {
        let padding = Edges::all(4);
        if h >= 65 {
            let icon = px(pct(h, 25).clamp(14, 22));
            let mut column = Stack::column().gap(2).padding(padding).child(
                Stack::row()
                    .gap(4)
                    .child(Icon::new(self.icon, icon).color(self.accent))
                    .child(Label::new(&self.current).font(FontRole::Medium).color(self.primary)),
            );
            let mut details = Stack::row().gap(6);
            details.extend(self.target_reading(8, FontRole::Tiny, 2));
            details.extend(self.humidity_reading(8, FontRole::Tiny, 2));
            if !details.is_empty() {
                column.push(details);
            }
            column.justify(Justify::Center)
        } else {
            let icon = px(pct(h, 35).clamp(14, 24));
            let gap = px(pct(w, 4)).max(2);
            Stack::row()
                .gap(gap)
                .padding(padding)
                .justify(Justify::Center)
                .child(Icon::new(self.icon, icon).color(self.accent))
                .child(Label::new(&self.current).font(FontRole::Small).color(self.primary))
        }
    }

    fn medium(&self, w: i32, h: i32) -> Stack {
        let padding = Edges::all(px(pct(w, 4)));
        let gap = px(pct(h, 4));
        let column = Stack::column()
            .gap(gap)
            .padding(padding)
            .align(Align::Center)
            .justify(Justify::Center);

        if h * 2 > w * 3 {
            let mut column = column
                .child(Icon::new(self.icon, px(pct(h, 18).max(24))).color(self.accent))
                .child(Label::new(&self.current).font(FontRole::XLarge).color(self.primary));
            column.extend(self.target_reading(12, FontRole::Small, 4));
            column.extend(self.humidity_reading(12, FontRole::Small, 4));
            column.extend(self.status_label(FontRole::Small));
            return column;
        }

        let top = Stack::row()
            .gap(px(pct(w, 4)))
            .child(Icon::new(self.icon, px(pct(h, 22).max(20))).color(self.accent))
            .child(Label::new(&self.current).font(FontRole::Large).color(self.primary));
        let mut column = column.child(top);
        if w < 115 {
            let mut details = Stack::row().gap(8);
            details.extend(self.target_reading(10, FontRole::Tiny, 2));
            details.extend(self.humidity_reading(10, FontRole::Tiny, 2));
            if !details.is_empty() {
                column.push(details);
            }
            column.extend(self.status_label(FontRole::Tiny));
        } else {
            let mut details = Stack::row().gap(12);
            details.extend(self.target_reading(10, FontRole::Tiny, 2));
            details.extend(self.humidity_reading(10, FontRole::Tiny, 2));
            details.extend(self.status_label(FontRole::Tiny));
            if !details.is_empty() {
                column.push(details);
            }
        }
        column
    }

    fn full(&self, w: i32, h: i32) -> Stack {
        let padding = Edges::all(px(pct(w, 4)));
        let mut main = Stack::column()
            .gap(px(pct(h, 3)))
            .align(Align::Center)
            .justify(Justify::Center)
            .child(Icon::new(self.icon, px(pct(h, 28).max(32))).color(self.accent))
            .child(Label::new(&self.current).font(FontRole::Huge).color(self.primary));
        main.extend(self.target_reading(px(pct(h, 8).max(14)), FontRole::Regular, 6));

        let mut bottom = Stack::row().gap(px(pct(w, 10))).justify(Justify::Center);
        bottom.extend(self.humidity_reading(px(pct(h, 8).max(14)), FontRole::Small, 6));
        bottom.extend(self.status_label(FontRole::Small));

        if bottom.is_empty() {
            return main.padding(padding);
        }
        Stack::column()
            .gap(px(pct(h, 2)))
            .padding(padding)
            .align(Align::Center)
            .justify(Justify::SpaceBetween)
            .child(main)
            .child(bottom)
    }

    /// Draws the tier-appropriate layout inside `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        Component::from(self.layout(rect)).draw(ctx, surface, rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClimateDisplay {
        ClimateDisplay::new("21.5°", IconKind::Fire, palette::ORANGE)
            .target("22°")
            .humidity("45%")
            .status("Heating")
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ClimateTier::for_rect(Rect::new(0, 0, 89, 200)), ClimateTier::Compact);
        assert_eq!(ClimateTier::for_rect(Rect::new(0, 0, 200, 59)), ClimateTier::Compact);
        assert_eq!(ClimateTier::for_rect(Rect::new(0, 0, 129, 200)), ClimateTier::Medium);
        assert_eq!(ClimateTier::for_rect(Rect::new(0, 0, 200, 89)), ClimateTier::Medium);
        assert_eq!(ClimateTier::for_rect(Rect::new(0, 0, 130, 90)), ClimateTier::Full);
    }

    #[test]
    fn test_full_has_footer() {
        let stack = sample().layout(Rect::new(0, 0, 224, 224));
        assert_eq!(stack.children().len(), 2);
    }

    #[test]
    fn test_full_without_footer_is_single_column() {
        let climate = ClimateDisplay::new("19°", IconKind::Snowflake, palette::BLUE).target("20°");
        let stack = climate.layout(Rect::new(0, 0, 224, 224));
        // icon, temperature, target row
        assert_eq!(stack.children().len(), 3);
    }

    #[test]
    fn test_medium_narrow_splits_details() {
        // 108 wide: top row, details row, status line
        let stack = sample().layout(Rect::new(0, 0, 108, 108));
        assert_eq!(stack.children().len(), 3);
    }

    #[test]
    fn test_medium_wide_single_details_row() {
        let stack = sample().layout(Rect::new(0, 0, 120, 100));
        assert_eq!(stack.children().len(), 2);
    }

    #[test]
    fn test_medium_tall_stacks_everything() {
        let stack = sample().layout(Rect::new(0, 0, 100, 200));
        assert_eq!(stack.children().len(), 5);
    }

    #[test]
    fn test_compact_short_is_single_row() {
        let stack = sample().layout(Rect::new(0, 0, 69, 60));
        assert_eq!(stack.children().len(), 2);
    }

    #[test]
    fn test_compact_tall_adds_details() {
        let stack = sample().layout(Rect::new(0, 0, 69, 80));
        assert_eq!(stack.children().len(), 2);
        assert!(matches!(stack.children().get(1), Some(Component::Stack(_))));
    }
}
