//! Per-render snapshots of external state.
//!
//! The host collects these before a render pass; widgets only read them.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity as seen by a widget.
///
/// ```
/// use widgets::state::EntityView;
///
/// let thermostat = EntityView::new("climate.living_room", "heat")
///     .attribute("current_temperature", 21.5)
///     .attribute("hvac_action", "heating");
/// assert_eq!(thermostat.number("current_temperature"), Some(21.5));
/// assert_eq!(thermostat.text("hvac_action"), Some("heating"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityView {
    /// Entity identifier, e.g. `sensor.outdoor_temperature`.
    pub entity_id: String,
    /// Raw state string.
    pub state: String,
    /// Unit of measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Icon name, usually `mdi:`-prefixed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Human readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Remaining attributes.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl EntityView {
    /// Entity with only an id and a state.
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            ..Self::default()
        }
    }

    /// Sets the unit.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sets the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the friendly name.
    pub fn friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    /// Adds an attribute.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Raw attribute value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    /// Attribute as a finite number. Numeric strings are parsed.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .filter(|v: &f64| v.is_finite())
    }

    /// Attribute as a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// The state parsed as a finite number.
    pub fn numeric_state(&self) -> Option<f64> {
        self.state.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Friendly name, falling back to the entity id.
    pub fn display_name(&self) -> &str {
        self.friendly_name.as_deref().unwrap_or(&self.entity_id)
    }
}

/// Everything a widget may read during one render.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    /// Wall-clock time in the display's timezone.
    pub now: NaiveDateTime,
    /// The widget's own entity, if it has one and it exists.
    pub entity: Option<EntityView>,
    /// Additional entities the widget asked for, keyed by id.
    pub related: BTreeMap<String, EntityView>,
    /// Ordered numeric history of the widget's entity.
    pub history: Option<Vec<f64>>,
}

impl WidgetState {
    /// Snapshot with no entity data.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            entity: None,
            related: BTreeMap::new(),
            history: None,
        }
    }

    /// Sets the primary entity.
    pub fn with_entity(mut self, entity: impl Into<Option<EntityView>>) -> Self {
        self.entity = entity.into();
        self
    }

    /// Adds an auxiliary entity.
    pub fn with_related(mut self, entity: EntityView) -> Self {
        self.related.insert(entity.entity_id.clone(), entity);
        self
    }

    /// Sets the history series.
    pub fn with_history(mut self, history: Vec<f64>) -> Self {
        self.history = Some(history);
        self
    }

    /// Looks up any entity by id, including the primary one.
    pub fn get_entity(&self, entity_id: &str) -> Option<&EntityView> {
        self.related
            .get(entity_id)
            .or_else(|| self.entity.as_ref().filter(|e| e.entity_id == entity_id))
    }
}
