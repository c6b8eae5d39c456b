//! The closed set of widget kinds.

use display_components::prelude::*;

use crate::chart::ChartWidget;
use crate::climate::ClimateWidget;
use crate::clock::ClockWidget;
use crate::config::WidgetConfig;
use crate::entity::EntityWidget;
use crate::gauge::GaugeWidget;
use crate::media::MediaWidget;
use crate::state::WidgetState;
use crate::status::{StatusListWidget, StatusWidget};
use crate::text::TextWidget;

/// A validated widget, ready to render.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Widget {
    Clock(ClockWidget),
    Entity(EntityWidget),
    Climate(ClimateWidget),
    Gauge(GaugeWidget),
    Status(StatusWidget),
    StatusList(StatusListWidget),
    Text(TextWidget),
    Media(MediaWidget),
    Chart(ChartWidget),
}

macro_rules! dispatch {
    ($self:ident, $w:ident => $body:expr) => {
        match $self {
            Widget::Clock($w) => $body,
            Widget::Entity($w) => $body,
            Widget::Climate($w) => $body,
            Widget::Gauge($w) => $body,
            Widget::Status($w) => $body,
            Widget::StatusList($w) => $body,
            Widget::Text($w) => $body,
            Widget::Media($w) => $body,
            Widget::Chart($w) => $body,
        }
    };
}

impl Widget {
    /// Component tree for the current state. Never fails; missing data
    /// yields a placeholder.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        dispatch!(self, w => w.render(ctx, state))
    }

    /// Configuration the widget was built from.
    pub fn config(&self) -> &WidgetConfig {
        dispatch!(self, w => w.config())
    }

    /// Registry tag of this widget kind.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Widget::Clock(_) => "clock",
            Widget::Entity(_) => "entity",
            Widget::Climate(_) => "climate",
            Widget::Gauge(_) => "gauge",
            Widget::Status(_) => "status",
            Widget::StatusList(_) => "status_list",
            Widget::Text(_) => "text",
            Widget::Media(_) => "media",
            Widget::Chart(_) => "chart",
        }
    }

    /// Entity ids this widget reads. The first, if any, is its primary
    /// entity.
    pub fn entities(&self) -> Vec<String> {
        match self {
            Widget::StatusList(w) => w.entities(),
            Widget::Text(w) => w.entities(),
            _ => self.config().entity_id.iter().cloned().collect(),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Widget {
                fn from(w: $ty) -> Self {
                    Widget::$variant(w)
                }
            }
        )*
    };
}

impl_from!(
    Clock(ClockWidget),
    Entity(EntityWidget),
    Climate(ClimateWidget),
    Gauge(GaugeWidget),
    Status(StatusWidget),
    StatusList(StatusListWidget),
    Text(TextWidget),
    Media(MediaWidget),
    Chart(ChartWidget),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_per_kind() {
        let gauge = Widget::from(GaugeWidget::new(&WidgetConfig::new("gauge", 0).entity("sensor.cpu")).unwrap());
        assert_eq!(gauge.entities(), ["sensor.cpu"]);

        let clock = Widget::from(ClockWidget::new(&WidgetConfig::new("clock", 0)).unwrap());
        assert!(clock.entities().is_empty());

        let list = WidgetConfig::new("status_list", 0)
            .entity("ignored.primary")
            .option("entities", serde_json::json!(["a.one", ["a.two", "Two"]]));
        let list = Widget::from(StatusListWidget::new(&list).unwrap());
        assert_eq!(list.entities(), ["a.one", "a.two"]);
    }

    #[test]
    fn test_type_tag_and_config() {
        let config = WidgetConfig::new("media", 3).entity("media_player.tv");
        let widget = Widget::from(MediaWidget::new(&config).unwrap());
        assert_eq!(widget.type_tag(), "media");
        assert_eq!(widget.config(), &config);
    }
}
