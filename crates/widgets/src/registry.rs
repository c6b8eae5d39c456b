//! Type tag to constructor table.

use std::collections::BTreeMap;

use crate::chart::ChartWidget;
use crate::climate::ClimateWidget;
use crate::clock::ClockWidget;
use crate::config::{ConfigError, WidgetConfig};
use crate::entity::EntityWidget;
use crate::gauge::GaugeWidget;
use crate::media::MediaWidget;
use crate::status::{StatusListWidget, StatusWidget};
use crate::text::TextWidget;
use crate::widget::Widget;

/// Validates a configuration and builds the widget.
pub type Constructor = fn(&WidgetConfig) -> Result<Widget, ConfigError>;

/// Maps `widget_type` tags to constructors.
///
/// ```
/// use widgets::config::WidgetConfig;
/// use widgets::registry::WidgetRegistry;
///
/// let registry = WidgetRegistry::default();
/// let widget = registry.build(&WidgetConfig::new("clock", 0)).unwrap();
/// assert_eq!(widget.type_tag(), "clock");
/// assert!(registry.build(&WidgetConfig::new("weather", 0)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    constructors: BTreeMap<&'static str, Constructor>,
}

impl WidgetRegistry {
    /// Registry with no tags.
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Adds or replaces the constructor for `tag`.
    pub fn register(&mut self, tag: &'static str, constructor: Constructor) -> &mut Self {
        self.constructors.insert(tag, constructor);
        self
    }

    /// Whether `tag` has a constructor.
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }

    /// Builds the widget named by `config.widget_type`.
    pub fn build(&self, config: &WidgetConfig) -> Result<Widget, ConfigError> {
        let constructor = self
            .constructors
            .get(config.widget_type.as_str())
            .ok_or_else(|| ConfigError::UnknownType(config.widget_type.clone()))?;
        let widget = constructor(config)?;
        tracing::debug!(widget = %config.widget_type, slot = config.slot, "built widget");
        Ok(widget)
    }
}

impl Default for WidgetRegistry {
    /// All built-in widgets.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("clock", |c| ClockWidget::new(c).map(Widget::from))
            .register("entity", |c| EntityWidget::new(c).map(Widget::from))
            .register("climate", |c| ClimateWidget::new(c).map(Widget::from))
            .register("gauge", |c| GaugeWidget::new(c).map(Widget::from))
            .register("status", |c| StatusWidget::new(c).map(Widget::from))
            .register("status_list", |c| StatusListWidget::new(c).map(Widget::from))
            .register("text", |c| TextWidget::new(c).map(Widget::from))
            .register("media", |c| MediaWidget::new(c).map(Widget::from))
            .register("chart", |c| ChartWidget::new(c).map(Widget::from));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registers_nine_tags() {
        let registry = WidgetRegistry::default();
        let tags: Vec<_> = registry.tags().collect();
        assert_eq!(
            tags,
            ["chart", "climate", "clock", "entity", "gauge", "media", "status", "status_list", "text"]
        );
    }

    #[test]
    fn test_built_widget_matches_tag() {
        let registry = WidgetRegistry::default();
        for tag in registry.tags() {
            let widget = registry.build(&WidgetConfig::new(tag, 0)).unwrap();
            assert_eq!(widget.type_tag(), tag);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = WidgetRegistry::default()
            .build(&WidgetConfig::new("weather", 0))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownType(ref t) if t == "weather"));
        assert_eq!(err.to_string(), "unknown widget type `weather`");
    }

    #[test]
    fn test_custom_registration_replaces() {
        let mut registry = WidgetRegistry::empty();
        assert!(!registry.contains("clock"));
        registry.register("clock", |c| TextWidget::new(c).map(Widget::from));
        let widget = registry.build(&WidgetConfig::new("clock", 0)).unwrap();
        assert_eq!(widget.type_tag(), "text");
    }

    #[test]
    fn test_invalid_options_surface() {
        let config = WidgetConfig::new("gauge", 0).option("style", 7);
        assert!(matches!(
            WidgetRegistry::default().build(&config),
            Err(ConfigError::InvalidOptions { .. })
        ));
    }
}
