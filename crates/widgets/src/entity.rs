//! Single entity value widget.

use display_components::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WidgetConfig};
use crate::format::{strip_icon_prefix, with_precision, PLACEHOLDER_NAME, PLACEHOLDER_VALUE};
use crate::state::WidgetState;

/// Options for the `entity` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityOptions {
    /// Caption under the value.
    pub show_name: bool,
    /// Append the unit of measurement.
    pub show_unit: bool,
    /// Use the entity's own icon when no override is set.
    pub show_icon: bool,
    /// Icon override.
    pub icon: Option<String>,
    /// Wrap in a bordered panel.
    pub show_panel: bool,
    /// Decimal places for numeric states.
    pub precision: Option<usize>,
}

impl Default for EntityOptions {
    fn default() -> Self {
        Self {
            show_name: true,
            show_unit: true,
            show_icon: true,
            icon: None,
            show_panel: false,
            precision: None,
        }
    }
}

/// Value, unit, name and icon of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityWidget {
    config: WidgetConfig,
    options: EntityOptions,
}

/// What an entity widget shows, before it becomes a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReadout {
    /// Value with unit.
    pub value: String,
    /// Caption, if shown.
    pub name: Option<String>,
    /// Icon name without namespace.
    pub icon: Option<String>,
}

impl EntityWidget {
    /// Validates the options.
    pub fn new(config: &WidgetConfig) -> Result<Self, ConfigError> {
        let options: EntityOptions = config.parse_options()?;
        if options.precision.is_some_and(|p| p > 10) {
            return Err(config.invalid("precision", "at most 10 decimal places"));
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
    pub fn options(&self) -> &EntityOptions {
        &self.options
    }

    /// Resolves the texts and icon for `state`.
    pub fn readout(&self, state: &WidgetState) -> EntityReadout {
        let (value, name) = match &state.entity {
            None => (
                PLACEHOLDER_VALUE.to_owned(),
                self.config
                    .label
                    .clone()
                    .or_else(|| self.config.entity_id.clone())
                    .unwrap_or_else(|| PLACEHOLDER_NAME.to_owned()),
            ),
            Some(entity) => {
                let mut value = with_precision(&entity.state, self.options.precision);
                if self.options.show_unit {
                    if let Some(unit) = entity.unit.as_deref() {
                        value.push_str(unit);
                    }
                }
                let name = self
                    .config
                    .label
                    .clone()
                    .unwrap_or_else(|| entity.display_name().to_owned());
                (value, name)
            }
        };

        let icon = self.options.icon.clone().or_else(|| {
            self.options
                .show_icon
                .then(|| state.entity.as_ref()?.icon.as_deref())
                .flatten()
                .filter(|i| i.starts_with("mdi:"))
                .map(|i| strip_icon_prefix(i).to_owned())
        });

        EntityReadout {
            value,
            name: self.options.show_name.then_some(name),
            icon: icon.map(|i| strip_icon_prefix(&i).to_owned()),
        }
    }

    /// Builds the readout, with an icon when one is known.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        let readout = self.readout(state);
        let primary = ctx.token(ThemeToken::TextPrimary);
        let secondary = ctx.token(ThemeToken::TextSecondary);
        let content: Component = match readout.icon {
            Some(icon) => {
                let mut value = IconValue::new(IconKind::from_name(&icon), readout.value).colors(
                    self.config.color_or(palette::CYAN),
                    primary,
                    secondary,
                );
                if let Some(name) = readout.name {
                    value = value.label(name);
                }
                value.into()
            }
            None => {
                let mut value = CenteredValue::new(readout.value).colors(primary, secondary);
                if let Some(name) = readout.name {
                    value = value.label(name);
                }
                value.into()
            }
        };
        if self.options.show_panel {
            let theme = ctx.theme();
            Panel::new(content).colors(theme.panel, theme.panel_border).into()
        } else {
            content
        }
    }
}
