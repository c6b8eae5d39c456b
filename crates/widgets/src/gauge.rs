//! Gauge widget: one value against a `[min, max]` range.

use display_components::prelude::*;
use display_layout::style::{Align, Edges, Justify};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WidgetConfig};
use crate::format::{percent_of, rounded, strip_icon_prefix, PLACEHOLDER_VALUE};
use crate::state::WidgetState;

/// How the percentage is drawn. Unknown names fall back to [`GaugeStyle::Bar`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum GaugeStyle {
    /// Horizontal bar under a name/value row.
    #[default]
    Bar,
    /// Full circle.
    Ring,
    /// Half circle.
    Arc,
}

impl From<String> for GaugeStyle {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "bar" => GaugeStyle::Bar,
            "ring" => GaugeStyle::Ring,
            "arc" => GaugeStyle::Arc,
            other => {
                tracing::warn!(style = other, "unknown gauge style, drawing a bar");
                GaugeStyle::Bar
            }
        }
    }
}

/// Options for the `gauge` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeOptions {
    /// Render style.
    pub style: GaugeStyle,
    /// Value at 0%.
    pub min: f64,
    /// Value at 100%.
    pub max: f64,
    /// Icon next to the name (bar style).
    pub icon: Option<String>,
    /// Numeric readout.
    pub show_value: bool,
    /// Unit suffix; the entity's unit when unset.
    pub unit: Option<String>,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            style: GaugeStyle::Bar,
            min: 0.0,
            max: 100.0,
            icon: None,
            show_value: true,
            unit: None,
        }
    }
}

/// Resolved gauge values.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeReading {
    /// Fill, `0..=100`.
    pub percent: f64,
    /// Rounded value with unit, or `"--"`.
    pub value: String,
    /// Caption, possibly empty.
    pub name: String,
}

/// Bar, ring or arc gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeWidget {
    config: WidgetConfig,
    options: GaugeOptions,
}

impl GaugeWidget {
    /// Validates the options. Non-finite bounds are rejected; an empty or
    /// inverted range is allowed and reads as 0%.
    pub fn new(config: &WidgetConfig) -> Result<Self, ConfigError> {
        let options: GaugeOptions = config.parse_options()?;
        if !options.min.is_finite() || !options.max.is_finite() {
            return Err(config.invalid("min", "range bounds must be finite"));
        }
        Ok(Self {
            config: config.clone(),
            options,
        })
    }

    /// Configuration this widget was built from.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Decoded options.
    pub fn options(&self) -> &GaugeOptions {
        &self.options
    }

    /// Percentage, value text and name for `state`.
    pub fn reading(&self, state: &WidgetState) -> GaugeReading {
        let entity = state.entity.as_ref();
        let value = entity.and_then(|e| e.numeric_state());
        let percent = value.map_or(0.0, |v| percent_of(v, self.options.min, self.options.max));

        let unit = self
            .options
            .unit
            .as_deref()
            .or_else(|| entity.and_then(|e| e.unit.as_deref()))
            .unwrap_or_default();
        let value = match value {
            Some(v) => format!("{}{unit}", rounded(v)),
            None => PLACEHOLDER_VALUE.to_owned(),
        };

        let name = self
            .config
            .label
            .clone()
            .or_else(|| entity.and_then(|e| e.friendly_name.clone()))
            .unwrap_or_default();

        GaugeReading { percent, value, name }
    }

    /// Builds the gauge in the configured style.
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        let reading = self.reading(state);
        let color = self.config.color_or(palette::CYAN);
        let primary = ctx.token(ThemeToken::TextPrimary);
        let secondary = ctx.token(ThemeToken::TextSecondary);
        let track = ctx.token(ThemeToken::Track);
        let percent = reading.percent as f32;

        match self.options.style {
            GaugeStyle::Bar => {
                let mut head = Stack::row().gap(4).align(Align::Center);
                if let Some(icon) = &self.options.icon {
                    head.push(Icon::new(IconKind::from_name(strip_icon_prefix(icon)), 14).color(color));
                }
                if !reading.name.is_empty() {
                    head.push(Label::new(reading.name).font(FontRole::Tiny).uppercase().color(secondary));
                }
                let mut row = Stack::row()
                    .justify(Justify::SpaceBetween)
                    .align(Align::Center)
                    .child(head);
                if self.options.show_value {
                    row.push(Label::new(reading.value).font(FontRole::Medium).bold().color(primary));
                }
                Stack::column()
                    .gap(6)
                    .padding(Edges::all(8))
                    .justify(Justify::Center)
                    .align(Align::Stretch)
                    .child(row)
                    .child(Bar::new(percent).height(10).colors(color, track))
                    .into()
            }
            GaugeStyle::Ring => {
                let mut ring = Ring::new(percent).colors(color, track);
                if self.options.show_value {
                    ring = ring.value(reading.value, primary);
                }
                if !reading.name.is_empty() {
                    ring = ring.caption(reading.name.to_uppercase(), secondary);
                }
                ring.into()
            }
            GaugeStyle::Arc => {
                let mut arc = ArcGauge::new(percent).colors(color, track);
                if self.options.show_value {
                    arc = arc.value(reading.value, primary);
                }
                if !reading.name.is_empty() {
                    arc = arc.caption(reading.name.to_uppercase(), secondary);
                }
                arc.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityView;
    use chrono::NaiveDate;

    fn state(entity: Option<EntityView>) -> WidgetState {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        WidgetState::new(now).with_entity(entity)
    }

    fn gauge(config: WidgetConfig) -> GaugeWidget {
        GaugeWidget::new(&config).unwrap()
    }

    #[test]
    fn test_reading_with_entity_unit() {
        let w = gauge(WidgetConfig::new("gauge", 0).option("max", 200));
        let entity = EntityView::new("sensor.power", "49.6").unit("W").friendly_name("Desk");
        let reading = w.reading(&state(Some(entity)));
        assert_eq!(reading.value, "50W");
        assert_eq!(reading.name, "Desk");
        assert!((reading.percent - 24.8).abs() < 1e-9);
    }

    #[test]
    fn test_unit_option_overrides_entity() {
        let w = gauge(WidgetConfig::new("gauge", 0).option("unit", "%").label("CPU"));
        let reading = w.reading(&state(Some(EntityView::new("sensor.cpu", "12").unit("pct"))));
        assert_eq!(reading.value, "12%");
        assert_eq!(reading.name, "CPU");
    }

    #[test]
    fn test_missing_or_bad_value() {
        let w = gauge(WidgetConfig::new("gauge", 0));
        let reading = w.reading(&state(None));
        assert_eq!((reading.value.as_str(), reading.percent), ("--", 0.0));
        let reading = w.reading(&state(Some(EntityView::new("sensor.x", "unknown"))));
        assert_eq!(reading.value, "--");
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let w = gauge(WidgetConfig::new("gauge", 0).option("min", 100).option("max", 0));
        assert_eq!(w.reading(&state(Some(EntityView::new("s", "50")))).percent, 0.0);
    }

    #[test]
    fn test_styles_produce_distinct_shapes() {
        let ctx = RenderContext::default();
        let s = state(Some(EntityView::new("s", "50")));
        let shape = |style: &str| gauge(WidgetConfig::new("gauge", 0).option("style", style)).render(&ctx, &s);
        assert!(matches!(shape("bar"), Component::Stack(_)));
        assert!(matches!(shape("ring"), Component::Ring(_)));
        assert!(matches!(shape("arc"), Component::Arc(_)));
    }

    #[test]
    fn test_unknown_style_draws_a_bar() {
        let ctx = RenderContext::default();
        let s = state(Some(EntityView::new("s", "50")));
        let needle = gauge(WidgetConfig::new("gauge", 0).option("style", "needle"));
        assert_eq!(needle.options().style, GaugeStyle::Bar);
        let bar = gauge(WidgetConfig::new("gauge", 0).option("style", "bar"));
        assert_eq!(needle.render(&ctx, &s), bar.render(&ctx, &s));
    }

    #[test]
    fn test_non_string_style_rejected() {
        let config = WidgetConfig::new("gauge", 0).option("style", 3);
        assert!(GaugeWidget::new(&config).is_err());
    }
}
