//! Dashboard widgets.
//!
//! A widget is configured once from a [`config::WidgetConfig`] and then turned
//! into a [`display_components::component::Component`] tree on every render
//! from a [`state::WidgetState`] snapshot. Widgets never draw directly and
//! never fail at render time: missing or unusable data gives a placeholder.
//!
//! ```
//! use chrono::NaiveDate;
//! use display_components::prelude::*;
//! use widgets::prelude::*;
//!
//! let registry = WidgetRegistry::default();
//! let config = WidgetConfig::new("entity", 0).entity("sensor.temperature").option("precision", 1);
//! let widget = registry.build(&config).unwrap();
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let state = WidgetState::new(now).with_entity(EntityView::new("sensor.temperature", "21.46").unit("°C"));
//! let tree = widget.render(&RenderContext::default(), &state);
//! assert!(matches!(tree, Component::CenteredValue(_)));
//! ```

pub mod chart;
pub mod climate;
pub mod clock;
pub mod config;
pub mod entity;
pub mod format;
pub mod gauge;
pub mod media;
pub mod placeholder;
pub mod registry;
pub mod state;
pub mod status;
pub mod text;
pub mod widget;

pub mod prelude {
    //! Types needed to configure and render widgets.

    pub use crate::config::{ConfigError, WidgetConfig};
    pub use crate::placeholder::{config_error, placeholder};
    pub use crate::registry::WidgetRegistry;
    pub use crate::state::{EntityView, WidgetState};
    pub use crate::widget::Widget;
}
