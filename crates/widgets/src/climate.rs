//! Thermostat widget.

use display_components::prelude::*;
use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WidgetConfig};
use crate::format::{temperature, title_case};
use crate::placeholder::placeholder;
use crate::state::{EntityView, WidgetState};

/// Icon and color for what the HVAC unit is doing right now.
const HVAC_ACTIONS: &[(&str, IconKind, Rgb888)] = &[
    ("heating", IconKind::Fire, palette::ORANGE),
    ("preheating", IconKind::Fire, palette::ORANGE),
    ("cooling", IconKind::Snowflake, palette::BLUE),
    ("idle", IconKind::Thermostat, palette::GRAY),
    ("off", IconKind::PowerStandby, palette::GRAY),
    ("drying", IconKind::WaterPercent, palette::CYAN),
    ("fan", IconKind::Fan, palette::CYAN),
];

/// Icon and color for the configured HVAC mode.
const HVAC_MODES: &[(&str, IconKind, Rgb888)] = &[
    ("heat", IconKind::Fire, palette::ORANGE),
    ("cool", IconKind::Snowflake, palette::BLUE),
    ("heat_cool", IconKind::SunSnowflake, palette::CYAN),
    ("auto", IconKind::ThermostatAuto, palette::CYAN),
    ("dry", IconKind::WaterPercent, palette::CYAN),
    ("fan_only", IconKind::Fan, palette::CYAN),
    ("off", IconKind::PowerStandby, palette::GRAY),
];

fn lookup(table: &[(&str, IconKind, Rgb888)], key: &str) -> (IconKind, Rgb888) {
    table
        .iter()
        .find(|(k, _, _)| *k == key)
        .map_or((IconKind::Thermostat, palette::CYAN), |(_, icon, color)| (*icon, *color))
}

/// Icon and accent for an HVAC action and mode. An active action wins over
/// the mode; `idle` defers to the mode.
///
/// ```
/// use display_components::prelude::*;
/// use widgets::climate::hvac_style;
///
/// assert_eq!(hvac_style(Some("heating"), "auto"), (IconKind::Fire, palette::ORANGE));
/// assert_eq!(hvac_style(Some("idle"), "cool"), (IconKind::Snowflake, palette::BLUE));
/// assert_eq!(hvac_style(None, "whatever"), (IconKind::Thermostat, palette::CYAN));
/// ```
pub fn hvac_style(action: Option<&str>, mode: &str) -> (IconKind, Rgb888) {
    match action {
        Some(action) if !action.is_empty() && action != "idle" => lookup(HVAC_ACTIONS, action),
        _ => lookup(HVAC_MODES, mode),
    }
}

/// Options for the `climate` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateOptions {
    /// Target temperature.
    pub show_target: bool,
    /// Current humidity.
    pub show_humidity: bool,
    /// HVAC action or mode text.
    pub show_mode: bool,
}

impl Default for ClimateOptions {
    fn default() -> Self {
        Self {
            show_target: true,
            show_humidity: true,
            show_mode: true,
        }
    }
}

/// Current and target temperature, humidity and HVAC state.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateWidget {
    config: WidgetConfig,
    options: ClimateOptions,
}

impl ClimateWidget {
    /// Message shown without thermostat data.
    pub const PLACEHOLDER: &'static str = "No Climate Data";

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
    pub fn options(&self) -> &ClimateOptions {
        &self.options
    }

    /// Display for a thermostat entity.
    pub fn display(&self, ctx: &RenderContext, entity: &EntityView) -> ClimateDisplay {
        let action = entity.text("hvac_action");
        let (icon, accent) = hvac_style(action, &entity.state);
        let mut display = ClimateDisplay::new(temperature(entity.number("current_temperature")), icon, accent)
            .colors(ctx.token(ThemeToken::TextPrimary), ctx.token(ThemeToken::TextSecondary));

        // A present but unreadable target still shows, as "--".
        if self.options.show_target && entity.get("temperature").is_some() {
            display = display.target(temperature(entity.number("temperature")));
        }
        if self.options.show_humidity {
            if let Some(humidity) = entity.number("humidity") {
                display = display.humidity(format!("{}%", humidity.trunc()));
            }
        }
        if self.options.show_mode {
            let text = action.filter(|a| !a.is_empty()).unwrap_or(&entity.state);
            if !text.is_empty() {
                display = display.status(title_case(text));
            }
        }
        display
    }

    /// Builds the thermostat readout or the placeholder.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        match &state.entity {
            Some(entity) => self.display(ctx, entity).into(),
            None => placeholder(ctx, IconKind::Thermostat, Self::PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn widget(config: WidgetConfig) -> ClimateWidget {
        ClimateWidget::new(&config).unwrap()
    }

    fn thermostat() -> EntityView {
        EntityView::new("climate.living_room", "heat")
            .attribute("current_temperature", 21.5)
            .attribute("temperature", 22)
            .attribute("hvac_action", "heating")
            .attribute("humidity", "45.7")
    }

    #[test]
    fn test_full_readout() {
        let ctx = RenderContext::default();
        let display = widget(WidgetConfig::new("climate", 0)).display(&ctx, &thermostat());
        let expected = ClimateDisplay::new("21.5°", IconKind::Fire, palette::ORANGE)
            .colors(palette::WHITE, palette::GRAY)
            .target("22°")
            .humidity("45%")
            .status("Heating");
        assert_eq!(display, expected);
    }

    #[test]
    fn test_hidden_parts_and_mode_fallback() {
        let ctx = RenderContext::default();
        let config = WidgetConfig::new("climate", 0)
            .option("show_target", false)
            .option("show_humidity", false);
        let entity = EntityView::new("climate.x", "heat_cool").attribute("current_temperature", "bogus");
        let display = widget(config).display(&ctx, &entity);
        let expected = ClimateDisplay::new("--", IconKind::SunSnowflake, palette::CYAN)
            .colors(palette::WHITE, palette::GRAY)
            .status("Heat Cool");
        assert_eq!(display, expected);
    }

    #[test]
    fn test_unreadable_target_shows_placeholder_value() {
        let ctx = RenderContext::default();
        let climate = widget(WidgetConfig::new("climate", 0).option("show_humidity", false).option("show_mode", false));

        let entity = EntityView::new("climate.x", "heat")
            .attribute("current_temperature", 20)
            .attribute("temperature", "unknown");
        let expected = ClimateDisplay::new("20°", IconKind::Fire, palette::ORANGE)
            .colors(palette::WHITE, palette::GRAY)
            .target("--");
        assert_eq!(climate.display(&ctx, &entity), expected);

        let without = EntityView::new("climate.x", "heat").attribute("current_temperature", 20);
        let expected = ClimateDisplay::new("20°", IconKind::Fire, palette::ORANGE).colors(palette::WHITE, palette::GRAY);
        assert_eq!(climate.display(&ctx, &without), expected);
    }

    #[test]
    fn test_no_entity_renders_placeholder() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let ctx = RenderContext::default();
        let tree = widget(WidgetConfig::new("climate", 0)).render(&ctx, &WidgetState::new(now));
        assert_eq!(tree, placeholder(&ctx, IconKind::Thermostat, "No Climate Data"));
    }
}
