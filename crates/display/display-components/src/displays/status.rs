use std::borrow::Cow;

use display_layout::geometry::Rect;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};

use crate::context::{Anchor, RenderContext};
use crate::font::FontRole;
use crate::icon::IconKind;
use crate::surface::Surface;
use crate::theme::palette;

const PADDING: i32 = 8;

/// Average glyph advance used to budget label lengths.
pub const AVG_CHAR_WIDTH: i32 = 7;

/// Shortens `text` to at most `max_chars` characters, marking the cut with
/// `".."`.
///
/// ```
/// use display_components::displays::truncate_label;
///
/// assert_eq!(truncate_label("Front Door", 20), "Front Door");
/// assert_eq!(truncate_label("Front Door", 6), "Fron..");
/// assert_eq!(truncate_label("Front Door", 1), "..");
/// ```
pub fn truncate_label(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(2)).collect();
    Cow::Owned(kept + "..")
}

/// Characters that fit `width` after `reserved` pixels of chrome.
pub fn label_budget(width: i32, reserved: i32) -> usize {
    usize::try_from((width - reserved) / AVG_CHAR_WIDTH).unwrap_or(0)
}

/// Single binary sensor: dot, optional icon, name on the left and the
/// state text on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDisplay {
    name: String,
    status: Option<String>,
    icon: Option<IconKind>,
    color: Rgb888,
    name_color: Rgb888,
    icon_color: Rgb888,
}

impl StatusDisplay {
    /// Status row whose dot and state text use `color`.
    pub fn new(name: impl Into<String>, color: Rgb888) -> Self {
        Self {
            name: name.into(),
            status: None,
            icon: None,
            color,
            name_color: palette::WHITE,
            icon_color: palette::GRAY,
        }
    }

    /// State text at the right edge.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Icon between dot and name.
    pub fn icon(mut self, icon: IconKind) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Name and icon colors.
    pub fn colors(mut self, name: Rgb888, icon: Rgb888) -> Self {
        self.name_color = name;
        self.icon_color = icon;
        self
    }

    /// Draws the row vertically centered in `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        const DOT_RADIUS: i32 = 5;

        let cy = rect.center().y;
        let dot_x = rect.x1 + PADDING + DOT_RADIUS;
        Circle::with_center(Point::new(dot_x, cy), 2 * DOT_RADIUS.unsigned_abs())
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(surface)?;

        let mut text_x = dot_x + DOT_RADIUS + 8;
        if let Some(icon) = self.icon {
            icon.draw(surface, Point::new(text_x, cy - 7), 14, self.icon_color)?;
            text_x += 18;
        }

        let small = ctx.get_font(FontRole::Small);
        let name = truncate_label(&self.name, label_budget(rect.width(), 40));
        ctx.draw_text(surface, &name, Point::new(text_x, cy), Anchor::LEFT_MIDDLE, small, self.name_color)?;

        if let Some(status) = &self.status {
            let at = Point::new(rect.x2 - PADDING, cy);
            ctx.draw_text(surface, status, at, Anchor::RIGHT_MIDDLE, small, self.color)?;
        }
        Ok(())
    }
}

/// One line of a [`StatusListDisplay`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    /// Entity name.
    pub label: String,
    /// State text, if any.
    pub status: Option<String>,
    /// Dot and state text color.
    pub color: Rgb888,
}

impl StatusRow {
    /// Row without state text.
    pub fn new(label: impl Into<String>, color: Rgb888) -> Self {
        Self {
            label: label.into(),
            status: None,
            color,
        }
    }

    /// State text at the right edge.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Titled list of status rows, each at most 20px tall.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusListDisplay {
    title: Option<String>,
    rows: Vec<StatusRow>,
    title_color: Rgb888,
    label_color: Rgb888,
}

impl StatusListDisplay {
    /// List of `rows`.
    pub fn new(rows: Vec<StatusRow>) -> Self {
        Self {
            title: None,
            rows,
            title_color: palette::GRAY,
            label_color: palette::WHITE,
        }
    }

    /// Uppercased heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title and label colors.
    pub fn colors(mut self, title: Rgb888, label: Rgb888) -> Self {
        self.title_color = title;
        self.label_color = label;
        self
    }

    /// Rows in order.
    pub fn rows(&self) -> &[StatusRow] {
        &self.rows
    }

    /// Height of each row when the list sits in a `height` tall area that
    /// starts at `top`.
    ///
    /// ```
    /// use display_components::displays::StatusListDisplay;
    ///
    /// let list = StatusListDisplay::new(Vec::new());
    /// assert_eq!(list.row_height(0, 240, 4), 20);
    /// assert_eq!(list.row_height(0, 60, 4), 11);
    /// ```
    pub fn row_height(&self, top: i32, bottom: i32, rows: usize) -> i32 {
        let available = bottom - top - 2 * PADDING;
        let count = i32::try_from(rows.max(1)).unwrap_or(i32::MAX);
        (available / count).clamp(0, 20)
    }

    /// Draws the title and rows from the top of `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let mut top = rect.y1;
        if let Some(title) = &self.title {
            let font = ctx.get_font(FontRole::Small);
            let at = Point::new(rect.x1 + PADDING, rect.y1 + PADDING);
            ctx.draw_text(surface, &title.to_uppercase(), at, Anchor::LEFT_TOP, font, self.title_color)?;
            top += 18;
        }

        let row_h = self.row_height(top, rect.y2, self.rows.len());
        let tiny = ctx.get_font(FontRole::Tiny);
        let budget = label_budget(rect.width(), 60);
        let mut y = top + PADDING;
        for row in &self.rows {
            let mid = y + row_h / 2;
            Circle::new(Point::new(rect.x1 + PADDING, mid - 3), 6)
                .into_styled(PrimitiveStyle::with_fill(row.color))
                .draw(surface)?;
            let label = truncate_label(&row.label, budget);
            let at = Point::new(rect.x1 + PADDING + 12, mid);
            ctx.draw_text(surface, &label, at, Anchor::LEFT_MIDDLE, tiny, self.label_color)?;
            if let Some(status) = &row.status {
                let at = Point::new(rect.x2 - PADDING, mid);
                ctx.draw_text(surface, status, at, Anchor::RIGHT_MIDDLE, tiny, row.color)?;
            }
            y += row_h;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use embedded_graphics::mock_display::MockDisplay;

    fn render(component: impl Into<Component>, rect: Rect) -> MockDisplay<Rgb888> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        component
            .into()
            .render(&RenderContext::default(), &mut display, rect)
            .unwrap();
        display
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_label("Küche Licht", 7), "Küche..");
        assert_eq!(truncate_label("", 0), "");
    }

    #[test]
    fn test_label_budget() {
        assert_eq!(label_budget(108, 40), 9);
        assert_eq!(label_budget(30, 40), 0);
    }

    #[test]
    fn test_status_dot_on_the_left_text_on_the_right() {
        let status = StatusDisplay::new("Door", Rgb888::GREEN)
            .status("ON")
            .colors(Rgb888::WHITE, Rgb888::WHITE);
        let display = render(status, Rect::new(0, 0, 64, 30));
        // dot centered at (13, 15)
        assert_eq!(display.get_pixel(Point::new(13, 15)), Some(Rgb888::GREEN));
        let rightmost_green = (0..64)
            .rev()
            .find(|x| (0..30).any(|y| display.get_pixel(Point::new(*x, y)) == Some(Rgb888::GREEN)))
            .unwrap();
        assert!(rightmost_green > 40);
    }

    #[test]
    fn test_status_list_rows_stack_downwards() {
        let list = StatusListDisplay::new(vec![
            StatusRow::new("A", Rgb888::GREEN),
            StatusRow::new("B", Rgb888::RED),
        ]);
        let display = render(list, Rect::new(0, 0, 64, 64));
        // row height min(20, 48 / 2) = 20: dots at y 18 and 38
        assert_eq!(display.get_pixel(Point::new(10, 18)), Some(Rgb888::GREEN));
        assert_eq!(display.get_pixel(Point::new(10, 38)), Some(Rgb888::RED));
    }
}
