//! Layout containers: flex stacks, bordered panels and fixed spacers.

use display_layout::flex::{cross_axis_placement, main_axis_offsets};
use display_layout::geometry::Rect;
use display_layout::style::{Align, Axis, Edges, Justify};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, RoundedRectangle};

use crate::component::Component;
use crate::context::RenderContext;
use crate::surface::Surface;
use crate::theme::palette;

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Row or column of children.
///
/// Children are measured in order, each against whatever main-axis space
/// its predecessors left, then positioned with the stack's justification
/// and aligned on the cross axis. A child that measures to the full
/// remaining space therefore starves the children after it.
///
/// ```
/// use display_components::prelude::*;
/// use embedded_graphics::geometry::Size;
///
/// let ctx = RenderContext::default();
/// let row = Stack::row()
///     .gap(4)
///     .child(Spacer::new(Size::new(10, 10)))
///     .child(Spacer::new(Size::new(20, 6)));
/// assert_eq!(row.measure(&ctx, Size::new(100, 100)), Size::new(34, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stack {
    axis: Axis,
    gap: u32,
    padding: Edges,
    align: Align,
    justify: Justify,
    children: Vec<Component>,
}

impl Stack {
    /// Empty stack along `axis`, centered on the cross axis.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Horizontal stack.
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Vertical stack.
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Space between consecutive children.
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Inner padding.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Cross-axis alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Main-axis distribution.
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Appends a child.
    pub fn child(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a child in place.
    pub fn push(&mut self, child: impl Into<Component>) {
        self.children.push(child.into());
    }

    /// Children in order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Returns `true` when the stack has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn split(&self, size: Size) -> (u32, u32) {
        match self.axis {
            Axis::Horizontal => (size.width, size.height),
            Axis::Vertical => (size.height, size.width),
        }
    }

    fn join(&self, main: u32, cross: u32) -> Size {
        match self.axis {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// `(main, cross)` extents of each child inside `content`.
    fn measure_children(&self, ctx: &RenderContext, content: Size) -> Vec<(u32, u32)> {
        let (main_avail, cross_avail) = self.split(content);
        let mut used = 0u32;
        let mut extents = Vec::with_capacity(self.children.len());
        for (i, child) in self.children.iter().enumerate() {
            let gap = if i > 0 { self.gap } else { 0 };
            let remaining = main_avail.saturating_sub(used.saturating_add(gap));
            let (main, cross) = self.split(child.measure(ctx, self.join(remaining, cross_avail)));
            let main = main.min(remaining);
            used = used.saturating_add(gap).saturating_add(main);
            extents.push((main, cross.min(cross_avail)));
        }
        extents
    }

    fn content_size(&self, size: Size) -> Size {
        Size::new(
            size.width.saturating_sub(self.padding.horizontal()),
            size.height.saturating_sub(self.padding.vertical()),
        )
    }

    /// Sum of children along the main axis, widest child across it, plus
    /// padding. Clamped to `max`.
    pub fn measure(&self, ctx: &RenderContext, max: Size) -> Size {
        let extents = self.measure_children(ctx, self.content_size(max));
        let gaps = self
            .gap
            .saturating_mul(u32::try_from(extents.len().saturating_sub(1)).unwrap_or(u32::MAX));
        let main = extents.iter().fold(gaps, |acc, (m, _)| acc.saturating_add(*m));
        let cross = extents.iter().map(|(_, c)| *c).max().unwrap_or(0);
        let size = self.join(main, cross);
        Size::new(
            size.width.saturating_add(self.padding.horizontal()).min(max.width),
            size.height.saturating_add(self.padding.vertical()).min(max.height),
        )
    }

    /// Lays out and draws every child.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let content = rect.inset(self.padding);
        let extents = self.measure_children(ctx, content.size());
        let mains: Vec<u32> = extents.iter().map(|(m, _)| *m).collect();
        let (main_avail, cross_avail) = self.split(content.size());
        let offsets = main_axis_offsets(&mains, self.gap, main_avail, self.justify);

        for ((child, offset), (main, cross)) in self.children.iter().zip(offsets.iter()).zip(extents) {
            let (cross_offset, cross) = cross_axis_placement(cross, cross_avail, self.align);
            let child_rect = match self.axis {
                Axis::Horizontal => Rect::from_origin_size(
                    content.x1 + to_i32(*offset),
                    content.y1 + to_i32(cross_offset),
                    to_i32(main),
                    to_i32(cross),
                ),
                Axis::Vertical => Rect::from_origin_size(
                    content.x1 + to_i32(cross_offset),
                    content.y1 + to_i32(*offset),
                    to_i32(cross),
                    to_i32(main),
                ),
            };
            child.draw(ctx, surface, child_rect)?;
        }
        Ok(())
    }
}

impl<C: Into<Component>> Extend<C> for Stack {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.children.extend(iter.into_iter().map(Into::into));
    }
}

/// Inner margin between a panel's border and its child.
pub const PANEL_MARGIN: u32 = 6;

/// Rounded, bordered background around a single child.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    child: Box<Component>,
    background: Rgb888,
    border: Rgb888,
    radius: u32,
}

impl Panel {
    /// Panel with the classic panel colors.
    pub fn new(child: impl Into<Component>) -> Self {
        Self {
            child: Box::new(child.into()),
            background: palette::PANEL,
            border: palette::PANEL_BORDER,
            radius: 8,
        }
    }

    /// Fill and outline colors.
    pub fn colors(mut self, background: Rgb888, border: Rgb888) -> Self {
        self.background = background;
        self.border = border;
        self
    }

    /// Corner radius.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Child measured inside the margin, plus the margin.
    pub fn measure(&self, ctx: &RenderContext, max: Size) -> Size {
        let m = PANEL_MARGIN * 2;
        let inner = self.child.measure(
            ctx,
            Size::new(max.width.saturating_sub(m), max.height.saturating_sub(m)),
        );
        Size::new(
            inner.width.saturating_add(m).min(max.width),
            inner.height.saturating_add(m).min(max.height),
        )
    }

    /// Draws the background, outline and child.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let style = PrimitiveStyleBuilder::new()
            .fill_color(self.background)
            .stroke_color(self.border)
            .stroke_width(1)
            .build();
        RoundedRectangle::with_equal_corners(rect.to_rectangle(), Size::new_equal(self.radius))
            .into_styled(style)
            .draw(surface)?;
        self.child.draw(ctx, surface, rect.inset(Edges::all(PANEL_MARGIN)))
    }
}

/// Empty box of a fixed size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Spacer {
    size: Size,
}

impl Spacer {
    /// Spacer of `size`.
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// `size`, clamped to `max`.
    pub fn measure(&self, _ctx: &RenderContext, max: Size) -> Size {
        Size::new(self.size.width.min(max.width), self.size.height.min(max.height))
    }
}
