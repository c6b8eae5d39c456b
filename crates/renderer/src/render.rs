//! One render pass: screen plus state snapshot to pixels.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use display_canvas::{encode_jpeg, encode_png, Canvas};
use display_components::prelude::*;
use display_layout::geometry::Rect;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use widgets::placeholder::config_error;
use widgets::state::WidgetState;
use widgets::widget::Widget;

use crate::error::RenderError;
use crate::screen::{Screen, SlotContent};
use crate::source::StateSource;

/// Collects the snapshot a widget needs from `states`.
///
/// The widget's first entity becomes the primary one and also supplies the
/// history series; every further id lands in `related`.
pub fn widget_state(widget: &Widget, states: &dyn StateSource, now: NaiveDateTime) -> WidgetState {
    let primary = widget.config().entity_id.as_deref();
    let mut related = BTreeMap::new();
    for id in widget.entities() {
        if Some(id.as_str()) == primary {
            continue;
        }
        if let Some(entity) = states.entity(&id) {
            related.insert(id, entity);
        }
    }
    WidgetState {
        now,
        entity: primary.and_then(|id| states.entity(id)),
        related,
        history: primary.and_then(|id| states.history(id)),
    }
}

/// Draws screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    /// Renderer with default settings.
    pub fn new() -> Self {
        Self
    }

    /// Renders `screen` onto any RGB draw target.
    ///
    /// The target is cleared to the theme background first. `on_slot` is
    /// called with the slot index, widget tag and slot bounds after each
    /// occupied slot is drawn; empty slots stay background and are not
    /// reported.
    pub fn render_to<D, F>(
        &self,
        display: &mut D,
        screen: &Screen,
        states: &dyn StateSource,
        now: NaiveDateTime,
        mut on_slot: F,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
        F: FnMut(usize, &str, Rect),
    {
        let ctx = RenderContext::new(screen.theme().theme(), screen.width(), screen.height());
        display.clear(ctx.token(ThemeToken::Background))?;

        for slot in screen.layout().slots() {
            let Some(content) = screen.content(slot.index) else {
                continue;
            };
            let tree = match content {
                SlotContent::Widget(widget) => widget.render(&ctx, &widget_state(widget, states, now)),
                SlotContent::Invalid { .. } => config_error(&ctx),
            };
            tracing::debug!(slot = slot.index, widget = content.type_tag(), rect = ?slot.rect, "rendering slot");
            tree.render(&ctx, display, slot.rect)?;
            on_slot(slot.index, content.type_tag(), slot.rect);
        }
        Ok(())
    }

    /// Renders `screen` into a new canvas of the screen's size.
    pub fn render(&self, screen: &Screen, states: &dyn StateSource, now: NaiveDateTime) -> Canvas {
        let mut canvas = Canvas::with_size(screen.width(), screen.height());
        match self.render_to(&mut canvas, screen, states, now, |_, _, _| {}) {
            Ok(()) => canvas,
            Err(never) => match never {},
        }
    }

    /// Renders and encodes as PNG.
    pub fn render_png(&self, screen: &Screen, states: &dyn StateSource, now: NaiveDateTime) -> Result<Vec<u8>, RenderError> {
        Ok(encode_png(&self.render(screen, states, now))?)
    }

    /// Renders and encodes as JPEG.
    pub fn render_jpeg(
        &self,
        screen: &Screen,
        states: &dyn StateSource,
        now: NaiveDateTime,
        quality: u8,
    ) -> Result<Vec<u8>, RenderError> {
        Ok(encode_jpeg(&self.render(screen, states, now), quality)?)
    }
}
