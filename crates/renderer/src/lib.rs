//! Screen renderer.
//!
//! Ties the pieces together: a [`ScreenConfig`] names a layout and the
//! widgets in its slots, [`Screen`] validates it once, and [`Renderer`]
//! draws it for a given [`StateSource`] snapshot and time.
//!
//! ```
//! use chrono::NaiveDate;
//! use renderer::{Renderer, Screen, ScreenConfig, StaticStates};
//! use widgets::state::EntityView;
//!
//! let config = ScreenConfig::from_json(r#"{
//!     "layout": {"kind": "split", "orientation": "horizontal"},
//!     "widgets": [
//!         {"widget_type": "clock", "slot": 0},
//!         {"widget_type": "entity", "slot": 1, "entity_id": "sensor.t"}
//!     ]
//! }"#).unwrap();
//! let screen = Screen::from_config(&config, 240, 240);
//! let states = StaticStates::new().with(EntityView::new("sensor.t", "21.5").unit("°C"));
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 30, 0).unwrap();
//!
//! let png = Renderer::new().render_png(&screen, &states, now).unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```

mod error;
mod render;
mod screen;
mod source;

pub use error::RenderError;
pub use render::{widget_state, Renderer};
pub use screen::{Screen, ScreenConfig, SlotContent};
pub use source::{StateSource, StaticStates};
