//! Where widgets get their entity data from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use widgets::state::EntityView;

/// Read-only view of external entity state for one render pass.
pub trait StateSource {
    /// Current state of `entity_id`, if it exists.
    fn entity(&self, entity_id: &str) -> Option<EntityView>;

    /// Ordered numeric history of `entity_id`.
    fn history(&self, _entity_id: &str) -> Option<Vec<f64>> {
        None
    }
}

/// In-memory entity states, e.g. loaded from a JSON fixture.
///
/// ```
/// use renderer::{StateSource, StaticStates};
///
/// let states: StaticStates = serde_json::from_str(r#"{
///     "entities": {
///         "sensor.t": {"entity_id": "sensor.t", "state": "21.5", "unit": "°C"}
///     },
///     "history": {"sensor.t": [20.0, 21.0, 21.5]}
/// }"#).unwrap();
/// assert_eq!(states.entity("sensor.t").unwrap().state, "21.5");
/// assert_eq!(states.history("sensor.t").unwrap().len(), 3);
/// assert!(states.entity("sensor.missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticStates {
    /// Entities by id.
    pub entities: BTreeMap<String, EntityView>,
    /// History series by entity id.
    pub history: BTreeMap<String, Vec<f64>>,
}

impl StaticStates {
    /// No entities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entity.
    pub fn insert(&mut self, entity: EntityView) -> &mut Self {
        self.entities.insert(entity.entity_id.clone(), entity);
        self
    }

    /// Builder form of [`StaticStates::insert`].
    pub fn with(mut self, entity: EntityView) -> Self {
        self.insert(entity);
        self
    }

    /// Sets the history of `entity_id`.
    pub fn with_history(mut self, entity_id: impl Into<String>, values: Vec<f64>) -> Self {
        self.history.insert(entity_id.into(), values);
        self
    }
}

impl StateSource for StaticStates {
    fn entity(&self, entity_id: &str) -> Option<EntityView> {
        self.entities.get(entity_id).cloned()
    }

    fn history(&self, entity_id: &str) -> Option<Vec<f64>> {
        self.history.get(entity_id).cloned()
    }
}
