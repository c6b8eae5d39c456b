//! Screen definitions: one layout and the widgets placed in its slots.

use display_components::theme::ThemeName;
use display_layout::layout::{Layout, LayoutConfig};
use serde::{Deserialize, Serialize};
use widgets::config::WidgetConfig;
use widgets::registry::WidgetRegistry;
use widgets::widget::Widget;

use crate::error::RenderError;

/// Persisted screen definition.
///
/// ```
/// use renderer::ScreenConfig;
///
/// let config = ScreenConfig::from_json(r#"{
///     "layout": {"kind": "grid", "rows": 1, "cols": 2},
///     "widgets": [
///         {"widget_type": "clock", "slot": 0},
///         {"widget_type": "entity", "slot": 1, "entity_id": "sensor.t"}
///     ]
/// }"#).unwrap();
/// assert_eq!(config.widgets.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Slot partitioning.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Widget assignments.
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,
}

impl ScreenConfig {
    /// Parses a JSON screen definition.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Layout with no widgets.
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Adds a widget.
    pub fn widget(mut self, widget: WidgetConfig) -> Self {
        self.widgets.push(widget);
        self
    }
}

/// What occupies a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotContent {
    /// A validated widget.
    Widget(Widget),
    /// The configuration was rejected; the slot shows an error placeholder.
    Invalid {
        /// Requested widget type.
        widget_type: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl SlotContent {
    /// Widget tag, valid or not.
    pub fn type_tag(&self) -> &str {
        match self {
            SlotContent::Widget(w) => w.type_tag(),
            SlotContent::Invalid { widget_type, .. } => widget_type,
        }
    }
}

/// A screen built once from its configuration and rendered many times.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    layout: Layout,
    slots: Vec<Option<SlotContent>>,
    theme: ThemeName,
}

impl Screen {
    /// Builds the layout and every widget with the built-in registry.
    pub fn from_config(config: &ScreenConfig, width: u32, height: u32) -> Self {
        Self::with_registry(config, width, height, &WidgetRegistry::default())
    }

    /// Builds the layout and every widget.
    ///
    /// A layout that cannot be computed falls back to a single full-screen
    /// slot. Widgets whose slot index is out of range are dropped; a widget
    /// whose options are rejected keeps its slot as an error placeholder.
    /// When two widgets claim the same slot the later one wins.
    pub fn with_registry(config: &ScreenConfig, width: u32, height: u32, registry: &WidgetRegistry) -> Self {
        let layout = Layout::new(width, height, config.layout.clone()).unwrap_or_else(|err| {
            tracing::warn!(%err, layout = ?config.layout, "layout rejected, using fullscreen");
            Layout::fullscreen(width, height)
        });

        let mut slots = vec![None; layout.slot_count()];
        for widget in &config.widgets {
            let Some(slot) = slots.get_mut(widget.slot) else {
                tracing::warn!(
                    widget = %widget.widget_type,
                    slot = widget.slot,
                    capacity = layout.slot_count(),
                    "slot out of range, widget ignored"
                );
                continue;
            };
            if slot.is_some() {
                tracing::warn!(slot = widget.slot, "slot assigned twice, keeping the later widget");
            }
            *slot = Some(match registry.build(widget) {
                Ok(w) => SlotContent::Widget(w),
                Err(err) => {
                    tracing::warn!(widget = %widget.widget_type, slot = widget.slot, %err, "widget rejected");
                    SlotContent::Invalid {
                        widget_type: widget.widget_type.clone(),
                        reason: err.to_string(),
                    }
                }
            });
        }

        Self {
            layout,
            slots,
            theme: config.theme,
        }
    }

    /// Slot geometry.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Content of slot `index`, if assigned.
    pub fn content(&self, index: usize) -> Option<&SlotContent> {
        self.slots.get(index)?.as_ref()
    }

    /// Color theme.
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Canvas width.
    pub fn width(&self) -> u32 {
        self.layout.width()
    }

    /// Canvas height.
    pub fn height(&self) -> u32 {
        self.layout.height()
    }

    /// Every entity id any widget on the screen reads, deduplicated.
    pub fn entities(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .slots
            .iter()
            .flatten()
            .filter_map(|c| match c {
                SlotContent::Widget(w) => Some(w.entities()),
                SlotContent::Invalid { .. } => None,
            })
            .flatten()
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use display_layout::layout::LayoutKind;

    #[test]
    fn test_bad_layout_falls_back_to_fullscreen() {
        let config = ScreenConfig::new(LayoutConfig::grid(0, 3)).widget(WidgetConfig::new("clock", 0));
        let screen = Screen::from_config(&config, 240, 240);
        assert_eq!(screen.layout().slot_count(), 1);
        assert!(matches!(screen.layout().config().kind, LayoutKind::Fullscreen));
        assert!(matches!(screen.content(0), Some(SlotContent::Widget(_))));
    }

    #[test]
    fn test_out_of_range_widget_ignored() {
        let config = ScreenConfig::new(LayoutConfig::grid(1, 2))
            .widget(WidgetConfig::new("clock", 1))
            .widget(WidgetConfig::new("clock", 7));
        let screen = Screen::from_config(&config, 240, 240);
        assert!(screen.content(0).is_none());
        assert!(screen.content(1).is_some());
        assert!(screen.content(7).is_none());
    }

    #[test]
    fn test_invalid_widget_keeps_slot() {
        let config = ScreenConfig::new(LayoutConfig::fullscreen())
            .widget(WidgetConfig::new("gauge", 0).option("min", "low"));
        let screen = Screen::from_config(&config, 240, 240);
        let Some(SlotContent::Invalid { widget_type, reason }) = screen.content(0) else {
            panic!("expected an invalid slot");
        };
        assert_eq!(widget_type, "gauge");
        assert!(reason.contains("gauge"), "{reason}");
    }

    #[test]
    fn test_later_widget_wins_slot() {
        let config = ScreenConfig::new(LayoutConfig::fullscreen())
            .widget(WidgetConfig::new("clock", 0))
            .widget(WidgetConfig::new("text", 0));
        let screen = Screen::from_config(&config, 240, 240);
        assert_eq!(screen.content(0).map(SlotContent::type_tag), Some("text"));
    }

    #[test]
    fn test_entities_collected_and_deduplicated() {
        let config = ScreenConfig::new(LayoutConfig::grid(2, 2))
            .widget(WidgetConfig::new("entity", 0).entity("sensor.b"))
            .widget(WidgetConfig::new("gauge", 1).entity("sensor.a"))
            .widget(WidgetConfig::new("status", 2).entity("sensor.b"))
            .widget(WidgetConfig::new("bogus", 3).entity("sensor.c"));
        let screen = Screen::from_config(&config, 240, 240);
        assert_eq!(screen.entities(), ["sensor.a", "sensor.b"]);
    }

    #[test]
    fn test_config_json_errors() {
        assert!(matches!(ScreenConfig::from_json("{"), Err(RenderError::Config(_))));
        let empty = ScreenConfig::from_json("{}").unwrap();
        assert_eq!(empty.layout, LayoutConfig::default());
        assert_eq!(empty.theme, ThemeName::Classic);
    }
}
