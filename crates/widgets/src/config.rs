//! Persisted widget configuration and option validation.

use display_components::theme::rgb_array;
use embedded_graphics::pixelcolor::Rgb888;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Widget configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No constructor is registered for the tag.
    #[error("unknown widget type `{0}`")]
    UnknownType(String),

    /// The options object does not match the widget's option schema.
    #[error("invalid options for `{widget}` widget: {source}")]
    InvalidOptions {
        /// Widget type tag.
        widget: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A value decoded but is out of its allowed range.
    #[error("invalid `{option}` for `{widget}` widget: {reason}")]
    InvalidValue {
        /// Widget type tag.
        widget: String,
        /// Offending option.
        option: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// One widget assignment on a screen.
///
/// ```
/// use widgets::config::WidgetConfig;
///
/// let config: WidgetConfig = serde_json::from_str(r#"{
///     "widget_type": "entity",
///     "slot": 1,
///     "entity_id": "sensor.temperature",
///     "color": [231, 76, 60],
///     "options": {"precision": 1}
/// }"#).unwrap();
/// assert_eq!(config.slot, 1);
/// assert_eq!(config.options["precision"], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Registry tag, e.g. `"clock"`.
    pub widget_type: String,
    /// Layout slot index.
    #[serde(default)]
    pub slot: usize,
    /// Primary entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Caption override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Accent color override as `[r, g, b]`.
    #[serde(default, with = "rgb_array", skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb888>,
    /// Widget specific options.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl WidgetConfig {
    /// Configuration for `widget_type` in `slot`.
    pub fn new(widget_type: impl Into<String>, slot: usize) -> Self {
        Self {
            widget_type: widget_type.into(),
            slot,
            ..Self::default()
        }
    }

    /// Sets the entity.
    pub fn entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Sets the caption.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the accent color.
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets one option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Decodes the options into `T`, filling gaps from `T::default()`.
    pub fn parse_options<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        serde_json::from_value(Value::Object(self.options.clone())).map_err(|source| ConfigError::InvalidOptions {
            widget: self.widget_type.clone(),
            source,
        })
    }

    /// Accent color, or `fallback` when unset.
    pub fn color_or(&self, fallback: Rgb888) -> Rgb888 {
        self.color.unwrap_or(fallback)
    }

    pub(crate) fn invalid(&self, option: &'static str, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidValue {
            widget: self.widget_type.clone(),
            option,
            reason: reason.into(),
        }
    }
}

/// `serde` helpers for option colors given as `[r, g, b]`.
pub(crate) mod color_array {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(color: &Rgb888, s: S) -> Result<S::Ok, S::Error> {
        [color.r(), color.g(), color.b()].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Rgb888, D::Error> {
        let [r, g, b] = <[u8; 3]>::deserialize(d)?;
        Ok(Rgb888::new(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use display_components::theme::palette;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Opts {
        show: bool,
        count: u32,
    }

    #[test]
    fn test_parse_options_fills_defaults() {
        let config = WidgetConfig::new("x", 0).option("count", 3);
        assert_eq!(config.parse_options::<Opts>().unwrap(), Opts { show: false, count: 3 });
    }

    #[test]
    fn test_parse_options_reports_widget() {
        let config = WidgetConfig::new("gauge", 0).option("count", "many");
        let err = config.parse_options::<Opts>().unwrap_err();
        assert!(err.to_string().starts_with("invalid options for `gauge` widget"), "{err}");
    }

    #[test]
    fn test_color_roundtrips_as_array() {
        let config = WidgetConfig::new("clock", 2).color(palette::RED);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["color"], serde_json::json!([231, 76, 60]));
        let back: WidgetConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_color_or() {
        assert_eq!(WidgetConfig::new("clock", 0).color_or(palette::WHITE), palette::WHITE);
    }
}
