//! Binary sensor widgets: a single status row and a titled list.

use display_components::prelude::*;
use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

use crate::config::{color_array, ConfigError, WidgetConfig};
use crate::format::{is_truthy, strip_icon_prefix, PLACEHOLDER_VALUE};
use crate::placeholder::placeholder;
use crate::state::{EntityView, WidgetState};

fn lime() -> Rgb888 {
    palette::LIME
}

fn red() -> Rgb888 {
    palette::RED
}

fn is_on(entity: &EntityView) -> bool {
    is_truthy(&entity.state)
}

/// Options for the `status` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusOptions {
    /// Dot and text color when on.
    #[serde(with = "color_array")]
    pub on_color: Rgb888,
    /// Dot and text color when off.
    #[serde(with = "color_array")]
    pub off_color: Rgb888,
    /// Text when on.
    pub on_text: String,
    /// Text when off.
    pub off_text: String,
    /// Icon between the dot and the name.
    pub icon: Option<String>,
    /// Right-aligned state text.
    pub show_status_text: bool,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            on_color: lime(),
            off_color: red(),
            on_text: "ON".to_owned(),
            off_text: "OFF".to_owned(),
            icon: None,
            show_status_text: true,
        }
    }
}

/// On/off indicator for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusWidget {
    config: WidgetConfig,
    options: StatusOptions,
}

impl StatusWidget {
    /// Placeholder message when the entity is missing.
    pub const NO_DATA: &'static str = "No Data";

    /// Validates the options.
    pub fn new(config: &WidgetConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            options: config.parse_options()?,
            config: config.clone(),
        })
    }

    /// Configuration this widget was built from.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Decoded options.
    pub fn options(&self) -> &StatusOptions {
        &self.options
    }

    /// Builds the status row, or the "No Data" placeholder without an entity.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        let Some(entity) = state.entity.as_ref() else {
            let icon = self
                .options
                .icon
                .as_deref()
                .map_or(IconKind::Information, |i| IconKind::from_name(strip_icon_prefix(i)));
            return placeholder(ctx, icon, Self::NO_DATA);
        };
        let (color, text) = if is_on(entity) {
            (self.options.on_color, &self.options.on_text)
        } else {
            (self.options.off_color, &self.options.off_text)
        };

        let name = self
            .config
            .label
            .clone()
            .unwrap_or_else(|| entity.display_name().to_owned());

        let mut display = StatusDisplay::new(name, color)
            .colors(ctx.token(ThemeToken::TextPrimary), ctx.token(ThemeToken::TextSecondary));
        if let Some(icon) = &self.options.icon {
            display = display.icon(IconKind::from_name(strip_icon_prefix(icon)));
        }
        if self.options.show_status_text {
            display = display.status(text.clone());
        }
        display.into()
    }
}

/// Entry of a status list: a bare id or an `[id, label]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEntry {
    /// Entity id; the label comes from the entity.
    Id(String),
    /// Entity id with a fixed label.
    Labeled(String, String),
}

impl ListEntry {
    /// Entity id.
    pub fn entity_id(&self) -> &str {
        match self {
            ListEntry::Id(id) | ListEntry::Labeled(id, _) => id,
        }
    }

    /// Fixed label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            ListEntry::Id(_) => None,
            ListEntry::Labeled(_, label) => Some(label),
        }
    }
}

/// Options for the `status_list` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusListOptions {
    /// Entities in display order.
    pub entities: Vec<ListEntry>,
    /// Heading above the rows.
    pub title: Option<String>,
    /// Dot color when on.
    #[serde(with = "color_array")]
    pub on_color: Rgb888,
    /// Dot color when off.
    #[serde(with = "color_array")]
    pub off_color: Rgb888,
    /// State text when on.
    pub on_text: Option<String>,
    /// State text when off.
    pub off_text: Option<String>,
}

impl Default for StatusListOptions {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            title: None,
            on_color: lime(),
            off_color: red(),
            on_text: None,
            off_text: None,
        }
    }
}

/// Several binary sensors, one row each.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusListWidget {
    config: WidgetConfig,
    options: StatusListOptions,
}

impl StatusListWidget {
    /// Validates the options.
    pub fn new(config: &WidgetConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            options: config.parse_options()?,
            config: config.clone(),
        })
    }

    /// Configuration this widget was built from.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Decoded options.
    pub fn options(&self) -> &StatusListOptions {
        &self.options
    }

    /// Ids of every listed entity.
    pub fn entities(&self) -> Vec<String> {
        self.options.entities.iter().map(|e| e.entity_id().to_owned()).collect()
    }

    /// One row per configured entity, looked up in `state`.
    ///
    /// Entities missing from `state` get a gray dot and `"--"`.
    pub fn rows(&self, state: &WidgetState) -> Vec<StatusRow> {
        self.options
            .entities
            .iter()
            .map(|entry| {
                let entity = state.get_entity(entry.entity_id());
                let label = entry
                    .label()
                    .filter(|l| !l.is_empty())
                    .or_else(|| entity.map(EntityView::display_name))
                    .unwrap_or(entry.entity_id());
                let Some(entity) = entity else {
                    return StatusRow::new(label, palette::GRAY).status(PLACEHOLDER_VALUE);
                };
                let (color, text) = if is_on(entity) {
                    (self.options.on_color, self.options.on_text.as_deref())
                } else {
                    (self.options.off_color, self.options.off_text.as_deref())
                };
                let row = StatusRow::new(label, color);
                match text.filter(|t| !t.is_empty()) {
                    Some(text) => row.status(text),
                    None => row,
                }
            })
            .collect()
    }

    /// Builds the list.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        let mut list = StatusListDisplay::new(self.rows(state))
            .colors(ctx.token(ThemeToken::TextSecondary), ctx.token(ThemeToken::TextPrimary));
        if let Some(title) = self.options.title.as_ref().or(self.config.label.as_ref()) {
            list = list.title(title.clone());
        }
        list.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now_state() -> WidgetState {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        WidgetState::new(now)
    }

    #[test]
    fn test_status_on_and_off() {
        let ctx = RenderContext::default();
        let widget = StatusWidget::new(&WidgetConfig::new("status", 0)).unwrap();

        let on = now_state().with_entity(EntityView::new("lock.front", "Unlocked").friendly_name("Front Door"));
        let expected = StatusDisplay::new("Front Door", palette::LIME)
            .colors(palette::WHITE, palette::GRAY)
            .status("ON");
        assert_eq!(widget.render(&ctx, &on), Component::Status(expected));

        let off = now_state().with_entity(EntityView::new("lock.front", "locked"));
        let expected = StatusDisplay::new("lock.front", palette::RED)
            .colors(palette::WHITE, palette::GRAY)
            .status("OFF");
        assert_eq!(widget.render(&ctx, &off), Component::Status(expected));
    }

    #[test]
    fn test_status_without_entity_is_a_placeholder() {
        let ctx = RenderContext::default();
        let config = WidgetConfig::new("status", 0)
            .label("Door")
            .option("off_color", serde_json::json!([1, 2, 3]));
        let widget = StatusWidget::new(&config).unwrap();
        let tree = widget.render(&ctx, &now_state());
        assert_eq!(tree, placeholder(&ctx, IconKind::Information, StatusWidget::NO_DATA));

        let off = now_state().with_entity(EntityView::new("binary_sensor.door", "off"));
        assert_ne!(widget.render(&ctx, &off), tree);
    }

    #[test]
    fn test_status_placeholder_keeps_configured_icon() {
        let ctx = RenderContext::default();
        let config = WidgetConfig::new("status", 0).option("icon", "mdi:lightbulb");
        let widget = StatusWidget::new(&config).unwrap();
        assert_eq!(
            widget.render(&ctx, &now_state()),
            placeholder(&ctx, IconKind::Lightbulb, StatusWidget::NO_DATA)
        );
    }

    #[test]
    fn test_list_entries_parse_both_shapes() {
        let config = WidgetConfig::new("status_list", 0).option(
            "entities",
            serde_json::json!(["binary_sensor.door", ["light.desk", "Desk"]]),
        );
        let widget = StatusListWidget::new(&config).unwrap();
        assert_eq!(widget.entities(), ["binary_sensor.door", "light.desk"]);
    }

    #[test]
    fn test_list_rows_from_state() {
        let config = WidgetConfig::new("status_list", 0)
            .option("entities", serde_json::json!(["a.one", ["a.two", "Two"], "a.gone"]))
            .option("on_text", "open");
        let widget = StatusListWidget::new(&config).unwrap();
        let state = now_state()
            .with_related(EntityView::new("a.one", "on").friendly_name("One"))
            .with_related(EntityView::new("a.two", "off"));

        let rows = widget.rows(&state);
        assert_eq!(
            rows,
            vec![
                StatusRow::new("One", palette::LIME).status("open"),
                StatusRow::new("Two", palette::RED),
                StatusRow::new("a.gone", palette::GRAY).status("--"),
            ]
        );
    }

    #[test]
    fn test_list_rejects_malformed_entry() {
        let config = WidgetConfig::new("status_list", 0).option("entities", serde_json::json!([42]));
        assert!(StatusListWidget::new(&config).is_err());
    }
}
