//! History chart widget.

use display_components::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WidgetConfig};
use crate::placeholder::placeholder;
use crate::state::WidgetState;

/// Options for the `chart` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Current value in the header.
    pub show_value: bool,
    /// Series minimum and maximum in the footer.
    pub show_range: bool,
    /// Time span caption, e.g. `"24h"`.
    pub period: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_value: true,
            show_range: true,
            period: None,
        }
    }
}

/// Sparkline of an entity's recent history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartWidget {
    config: WidgetConfig,
    options: ChartOptions,
}

fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

impl ChartWidget {
    /// Shown with fewer than two samples.
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
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Header value: the entity's state with unit, else the newest sample.
    fn current_value(state: &WidgetState, samples: &[f64]) -> Option<String> {
        let entity = state.entity.as_ref();
        let unit = entity.and_then(|e| e.unit.as_deref()).unwrap_or_default();
        entity
            .and_then(|e| e.numeric_state())
            .or_else(|| samples.last().copied())
            .map(|v| format!("{}{unit}", one_decimal(v)))
    }

    /// Builds the chart, or the "No Data" placeholder.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        let line = Sparkline::new(state.history.iter().flatten().copied()).color(self.config.color_or(palette::CYAN));
        let samples = line.values().to_vec();
        if samples.len() < 2 {
            return placeholder(ctx, IconKind::ChartLine, Self::NO_DATA);
        }

        let mut chart = ChartDisplay::new(line)
            .colors(ctx.token(ThemeToken::TextPrimary), ctx.token(ThemeToken::TextSecondary));

        let label = self
            .config
            .label
            .clone()
            .or_else(|| state.entity.as_ref().and_then(|e| e.friendly_name.clone()));
        if let Some(label) = label {
            chart = chart.label(label);
        }
        if self.options.show_value {
            if let Some(value) = Self::current_value(state, &samples) {
                chart = chart.value(value);
            }
        }
        if self.options.show_range {
            let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
            let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            chart = chart.range(one_decimal(min), one_decimal(max));
        }
        if let Some(period) = &self.options.period {
            chart = chart.period(period.clone());
        }
        chart.into()
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
    fn test_too_little_history() {
        let ctx = RenderContext::default();
        let widget = ChartWidget::new(&WidgetConfig::new("chart", 0)).unwrap();
        let no_data = placeholder(&ctx, IconKind::ChartLine, "No Data");
        assert_eq!(widget.render(&ctx, &state()), no_data);
        assert_eq!(widget.render(&ctx, &state().with_history(vec![1.0])), no_data);
        assert_eq!(widget.render(&ctx, &state().with_history(vec![1.0, f64::NAN])), no_data);
    }

    #[test]
    fn test_header_and_footer() {
        let ctx = RenderContext::default();
        let config = WidgetConfig::new("chart", 0).label("Temperature").option("period", "24h");
        let widget = ChartWidget::new(&config).unwrap();
        let s = state()
            .with_entity(EntityView::new("sensor.t", "19.04").unit("°C"))
            .with_history(vec![18.5, 17.0, 22.8, 19.0]);

        let expected = ChartDisplay::new(Sparkline::new([18.5, 17.0, 22.8, 19.0]))
            .colors(palette::WHITE, palette::GRAY)
            .label("Temperature")
            .value("19.0°C")
            .range("17.0", "22.8")
            .period("24h");
        assert_eq!(widget.render(&ctx, &s), Component::Chart(expected));
    }

    #[test]
    fn test_value_falls_back_to_last_sample() {
        let ctx = RenderContext::default();
        let config = WidgetConfig::new("chart", 0).option("show_range", false);
        let widget = ChartWidget::new(&config).unwrap();
        let Component::Chart(chart) = widget.render(&ctx, &state().with_history(vec![1.0, 2.5])) else {
            panic!("expected a chart");
        };
        let expected = ChartDisplay::new(Sparkline::new([1.0, 2.5]))
            .colors(palette::WHITE, palette::GRAY)
            .value("2.5");
        assert_eq!(chart, expected);
    }
}
