//! Display Components
//!
//! Themed, measurable UI nodes for small RGB dashboard displays.
//!
//! # Architecture
//!
//! - Rendering context: theme, font ladder and text fitting ([`context`], [`font`])
//! - Primitives: labels, icons, bars, gauges, sparklines, dots
//! - Containers: flex [`containers::Stack`], [`containers::Panel`]
//! - Composite displays: clock, text, climate, value readouts ([`displays`])
//!
//! Every node implements `measure` and `draw`. [`component::Component`]
//! ties them together and clips each node to the rect it is given through a
//! [`surface::Surface`].
//!
//! # Example
//!
//! ```
//! use display_components::prelude::*;
//! use display_layout::geometry::Rect;
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::Rgb888;
//!
//! let tree: Component = Stack::column()
//!     .gap(2)
//!     .child(Label::new("CPU").font(FontRole::Small))
//!     .child(Bar::new(42.0))
//!     .into();
//!
//! let mut display: MockDisplay<Rgb888> = MockDisplay::new();
//! display.set_allow_overdraw(true);
//! tree.render(&RenderContext::default(), &mut display, Rect::new(0, 0, 64, 32)).unwrap();
//! ```

pub mod chart;
pub mod component;
pub mod containers;
pub mod context;
pub mod displays;
pub mod font;
pub mod gauge;
pub mod icon;
pub mod label;
pub mod surface;
pub mod theme;

pub mod prelude {
    //! Common imports for widget authors.

    pub use crate::chart::Sparkline;
    pub use crate::component::Component;
    pub use crate::containers::{Panel, Spacer, Stack};
    pub use crate::context::{Anchor, RenderContext};
    pub use crate::displays::{
        CenteredValue, ChartDisplay, ClimateDisplay, ClimateTier, ClockDisplay, IconValue, MediaDisplay, MediaProgress,
        StatusDisplay, StatusListDisplay, StatusRow, TextDisplay,
    };
    pub use crate::font::{fit_text, Font, FontRole};
    pub use crate::gauge::{ArcGauge, Bar, Dot, Ring};
    pub use crate::icon::{Icon, IconKind};
    pub use crate::label::Label;
    pub use crate::surface::Surface;
    pub use crate::theme::{palette, Color, Theme, ThemeName, ThemeToken};
}
