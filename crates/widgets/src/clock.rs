//! Clock widget.

use chrono::NaiveDateTime;
use display_components::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WidgetConfig};
use crate::state::WidgetState;

/// 12 or 24 hour display.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `13:05`.
    #[default]
    #[serde(rename = "24h")]
    TwentyFour,
    /// `01:05 PM`.
    #[serde(rename = "12h")]
    Twelve,
}

/// Options for the `clock` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockOptions {
    /// Date line under the time.
    pub show_date: bool,
    /// Include seconds.
    pub show_seconds: bool,
    /// 12 or 24 hour clock.
    pub time_format: TimeFormat,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            show_date: true,
            show_seconds: false,
            time_format: TimeFormat::TwentyFour,
        }
    }
}

/// Current time, date and an optional caption.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockWidget {
    config: WidgetConfig,
    options: ClockOptions,
}

impl ClockWidget {
    /// Date line format, e.g. `Mon, Jan 15`.
    pub const DATE_FORMAT: &'static str = "%a, %b %d";

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
    pub fn options(&self) -> &ClockOptions {
        &self.options
    }

    /// Time string and, for the 12 hour clock, the AM/PM marker.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use widgets::clock::ClockWidget;
    /// use widgets::config::WidgetConfig;
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(21, 5, 9).unwrap();
    /// let clock = ClockWidget::new(&WidgetConfig::new("clock", 0).option("time_format", "12h")).unwrap();
    /// assert_eq!(clock.time_text(now), ("09:05".to_string(), Some("PM".to_string())));
    /// ```
    pub fn time_text(&self, now: NaiveDateTime) -> (String, Option<String>) {
        let pattern = match (self.options.time_format, self.options.show_seconds) {
            (TimeFormat::TwentyFour, false) => "%H:%M",
            (TimeFormat::TwentyFour, true) => "%H:%M:%S",
            (TimeFormat::Twelve, false) => "%I:%M",
            (TimeFormat::Twelve, true) => "%I:%M:%S",
        };
        let ampm = (self.options.time_format == TimeFormat::Twelve).then(|| now.format("%p").to_string());
        (now.format(pattern).to_string(), ampm)
    }

    /// Builds the clock for `state.now`.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        let (time, ampm) = self.time_text(state.now);
        let mut clock = ClockDisplay::new(time).colors(
            self.config.color_or(palette::WHITE),
            ctx.token(ThemeToken::TextSecondary),
        );
        if let Some(ampm) = ampm {
            clock = clock.ampm(ampm);
        }
        if self.options.show_date {
            clock = clock.date(state.now.format(Self::DATE_FORMAT).to_string());
        }
        if let Some(label) = &self.config.label {
            clock = clock.label(label.to_uppercase());
        }
        clock.into()
    }
}
