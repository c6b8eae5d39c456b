//! Static or entity-bound text.

use display_components::prelude::*;
use display_layout::style::Align;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WidgetConfig};
use crate::state::WidgetState;

/// Horizontal placement of the text. Unknown names center it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TextAlign {
    /// Left edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Right edge.
    Right,
}

impl From<String> for TextAlign {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "left" => TextAlign::Left,
            "center" => TextAlign::Center,
            "right" => TextAlign::Right,
            other => {
                tracing::warn!(align = other, "unknown text alignment, centering");
                TextAlign::Center
            }
        }
    }
}

impl From<TextAlign> for Align {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Left => Align::Start,
            TextAlign::Center => Align::Center,
            TextAlign::Right => Align::End,
        }
    }
}

/// Options for the `text` widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    /// Static text.
    pub text: String,
    /// Largest font to use; the text fills the slot when unset.
    pub size: Option<FontRole>,
    /// Horizontal placement.
    pub align: TextAlign,
    /// Entity whose state replaces the static text.
    pub entity_id: Option<String>,
}

/// Free text, optionally bound to an entity's state.
#[derive(Debug, Clone, PartialEq)]
pub struct TextWidget {
    config: WidgetConfig,
    options: TextOptions,
}

impl TextWidget {
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
    pub fn options(&self) -> &TextOptions {
        &self.options
    }

    /// The widget's own entity plus the options-provided one.
    pub fn entities(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.config.entity_id.iter().cloned().collect();
        if let Some(id) = &self.options.entity_id {
            if self.config.entity_id.as_ref() != Some(id) {
                ids.push(id.clone());
            }
        }
        ids
    }

    /// Own entity state, then the options entity's state, then the static text.
    pub fn text<'a>(&'a self, state: &'a WidgetState) -> &'a str {
        if let Some(entity) = &state.entity {
            return &entity.state;
        }
        self.options
            .entity_id
            .as_deref()
            .and_then(|id| state.get_entity(id))
            .map_or(&self.options.text, |e| &e.state)
    }

    /// Builds the text display.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        let mut display = TextDisplay::new(self.text(state))
            .align(self.options.align.into())
            .colors(
                self.config.color_or(ctx.token(ThemeToken::TextPrimary)),
                ctx.token(ThemeToken::TextSecondary),
            );
        if let Some(label) = &self.config.label {
            display = display.label(label.to_uppercase());
        }
        if let Some(size) = self.options.size {
            display = display.max_font(size);
        }
        display.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityView;
    use chrono::NaiveDate;

    fn state() -> WidgetState {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        WidgetState::new(now)
    }

    #[test]
    fn test_text_precedence() {
        let config = WidgetConfig::new("text", 0)
            .option("text", "static")
            .option("entity_id", "sensor.b");
        let widget = TextWidget::new(&config).unwrap();

        assert_eq!(widget.text(&state()), "static");

        let with_b = state().with_related(EntityView::new("sensor.b", "from options"));
        assert_eq!(widget.text(&with_b), "from options");

        let with_own = with_b.with_entity(EntityView::new("sensor.a", "own"));
        assert_eq!(widget.text(&with_own), "own");
    }

    #[test]
    fn test_entities_deduplicated() {
        let config = WidgetConfig::new("text", 0).entity("sensor.a").option("entity_id", "sensor.a");
        assert_eq!(TextWidget::new(&config).unwrap().entities(), ["sensor.a"]);

        let config = WidgetConfig::new("text", 0).entity("sensor.a").option("entity_id", "sensor.b");
        assert_eq!(TextWidget::new(&config).unwrap().entities(), ["sensor.a", "sensor.b"]);

        assert!(TextWidget::new(&WidgetConfig::new("text", 0)).unwrap().entities().is_empty());
    }

    #[test]
    fn test_render_alignment_and_size() {
        let config = WidgetConfig::new("text", 0)
            .option("text", "Hi")
            .option("align", "right")
            .option("size", "small")
            .label("Note");
        let tree = TextWidget::new(&config).unwrap().render(&RenderContext::default(), &state());
        let expected = TextDisplay::new("Hi")
            .align(Align::End)
            .colors(palette::WHITE, palette::GRAY)
            .label("NOTE")
            .max_font(FontRole::Small);
        assert_eq!(tree, Component::Text(expected));
    }

    #[test]
    fn test_unknown_align_centers() {
        let config = WidgetConfig::new("text", 0).option("text", "Hi").option("align", "justify");
        let widget = TextWidget::new(&config).unwrap();
        assert_eq!(widget.options().align, TextAlign::Center);
        let expected = TextDisplay::new("Hi").align(Align::Center).colors(palette::WHITE, palette::GRAY);
        assert_eq!(widget.render(&RenderContext::default(), &state()), Component::Text(expected));
    }
}
