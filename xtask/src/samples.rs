//! xtask samples — render a gallery of widgets and layouts to PNG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use colored::Colorize;
use display_components::theme::{palette, ThemeName};
use display_layout::preset::LayoutPreset;
use renderer::{Renderer, Screen, ScreenConfig, StaticStates};
use serde_json::json;
use widgets::config::WidgetConfig;
use widgets::state::EntityView;

const SIZE: u32 = 240;

/// Fixed render time so the gallery is reproducible.
fn sample_time() -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(14, 32, 0))
        .context("invalid sample time")
}

/// Entity states every sample screen draws from.
pub(crate) fn sample_states() -> StaticStates {
    StaticStates::new()
        .with(
            EntityView::new("sensor.living_room_temperature", "21.5")
                .unit("°C")
                .friendly_name("Living Room")
                .icon("mdi:thermometer"),
        )
        .with(EntityView::new("sensor.humidity", "45.2").unit("%").friendly_name("Humidity"))
        .with(EntityView::new("sensor.cpu_usage", "37").unit("%").friendly_name("CPU"))
        .with(EntityView::new("sensor.power", "1240").unit("W").friendly_name("Power"))
        .with(
            EntityView::new("climate.living_room", "heat")
                .friendly_name("Thermostat")
                .attribute("current_temperature", 20.5)
                .attribute("temperature", 22)
                .attribute("hvac_action", "heating")
                .attribute("humidity", 45),
        )
        .with(EntityView::new("binary_sensor.front_door", "off").friendly_name("Front Door"))
        .with(EntityView::new("light.kitchen", "on").friendly_name("Kitchen"))
        .with(EntityView::new("light.bedroom", "off").friendly_name("Bedroom"))
        .with(EntityView::new("lock.garage", "on").friendly_name("Garage"))
        .with(
            EntityView::new("media_player.spotify", "playing")
                .friendly_name("Spotify")
                .attribute("media_title", "Bohemian Rhapsody")
                .attribute("media_artist", "Queen")
                .attribute("media_album_name", "A Night at the Opera")
                .attribute("media_position", 125)
                .attribute("media_duration", 354),
        )
        .with(EntityView::new("sensor.outdoor_temperature", "18.5").unit("°C").friendly_name("Outdoor"))
        .with_history(
            "sensor.outdoor_temperature",
            vec![
                18.5, 18.2, 17.8, 17.5, 17.2, 17.0, 16.8, 17.0, 17.5, 18.2, 19.0, 19.8, 20.5, 21.0, 21.2, 21.0,
                20.5, 20.0, 19.5, 19.2, 19.0, 18.8, 18.6, 18.5,
            ],
        )
}

/// Named sample screens, in output order.
pub(crate) fn sample_screens() -> Vec<(&'static str, ScreenConfig)> {
    let single = |widget: WidgetConfig| ScreenConfig::new(LayoutPreset::Fullscreen.config()).widget(widget);

    vec![
        ("clock", single(WidgetConfig::new("clock", 0).option("show_seconds", true))),
        (
            "entity",
            single(WidgetConfig::new("entity", 0).entity("sensor.living_room_temperature").option("precision", 1)),
        ),
        ("climate", single(WidgetConfig::new("climate", 0).entity("climate.living_room"))),
        (
            "gauge_bar",
            single(WidgetConfig::new("gauge", 0).entity("sensor.cpu_usage").option("icon", "mdi:chip")),
        ),
        (
            "gauge_ring",
            single(WidgetConfig::new("gauge", 0).entity("sensor.humidity").option("style", "ring")),
        ),
        (
            "gauge_arc",
            single(
                WidgetConfig::new("gauge", 0)
                    .entity("sensor.power")
                    .option("style", "arc")
                    .option("max", 3000)
                    .color(palette::ORANGE),
            ),
        ),
        (
            "status",
            single(
                WidgetConfig::new("status", 0)
                    .entity("binary_sensor.front_door")
                    .option("icon", "mdi:door")
                    .option("on_text", "Open")
                    .option("off_text", "Closed"),
            ),
        ),
        (
            "status_list",
            single(
                WidgetConfig::new("status_list", 0)
                    .option("entities", json!(["light.kitchen", ["light.bedroom", "Bedroom Lamp"], "lock.garage"]))
                    .option("title", "House"),
            ),
        ),
        (
            "text",
            single(WidgetConfig::new("text", 0).label("Note").option("text", "Bins out tonight")),
        ),
        ("media", single(WidgetConfig::new("media", 0).entity("media_player.spotify").option("show_album", true))),
        (
            "chart",
            single(
                WidgetConfig::new("chart", 0)
                    .entity("sensor.outdoor_temperature")
                    .option("period", "24h"),
            ),
        ),
        (
            "grid_dashboard",
            ScreenConfig::new(LayoutPreset::Grid2x2.config())
                .widget(WidgetConfig::new("clock", 0))
                .widget(WidgetConfig::new("entity", 1).entity("sensor.living_room_temperature"))
                .widget(WidgetConfig::new("gauge", 2).entity("sensor.cpu_usage").option("style", "arc"))
                .widget(WidgetConfig::new("status", 3).entity("light.kitchen")),
        ),
        (
            "hero",
            ScreenConfig::new(LayoutPreset::Hero.config())
                .widget(WidgetConfig::new("media", 0).entity("media_player.spotify"))
                .widget(WidgetConfig::new("entity", 1).entity("sensor.living_room_temperature"))
                .widget(WidgetConfig::new("entity", 2).entity("sensor.humidity"))
                .widget(WidgetConfig::new("status", 3).entity("lock.garage")),
        ),
    ]
}

/// Output file for the `index`th sample.
fn sample_path(out: &Path, index: usize, name: &str) -> PathBuf {
    out.join(format!("{:02}_{name}.png", index + 1))
}

pub fn run(out: &Path, light: bool) -> Result<()> {
    println!();
    println!("{}", "🖼  Rendering samples...".cyan().bold());
    println!();

    std::fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    let theme = if light { ThemeName::Light } else { ThemeName::Classic };
    let states = sample_states();
    let now = sample_time()?;
    let renderer = Renderer::new();

    let screens = sample_screens();
    for (index, (name, mut config)) in screens.into_iter().enumerate() {
        config.theme = theme;
        let screen = Screen::from_config(&config, SIZE, SIZE);
        let png = renderer
            .render_png(&screen, &states, now)
            .with_context(|| format!("rendering sample `{name}`"))?;
        let path = sample_path(out, index, name);
        std::fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
        println!("{}", format!("  ✓ {}", path.display()).green());
    }

    println!();
    Ok(())
}
