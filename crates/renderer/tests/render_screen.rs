//! Full screen renders onto a headless canvas.
//!
//! Run: cargo test -p renderer --test render_screen

use chrono::{NaiveDate, NaiveDateTime};
use display_components::theme::palette;
use display_layout::geometry::Rect;
use display_layout::layout::LayoutConfig;
use display_testing::TestCanvas;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use renderer::{Renderer, Screen, ScreenConfig, StaticStates};
use widgets::config::WidgetConfig;
use widgets::state::EntityView;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap()
}

fn dashboard() -> ScreenConfig {
    ScreenConfig::new(LayoutConfig::grid(2, 2))
        .widget(WidgetConfig::new("clock", 0))
        .widget(WidgetConfig::new("entity", 1).entity("sensor.t").option("precision", 1))
        .widget(WidgetConfig::new("gauge", 2).entity("sensor.cpu").option("style", "arc"))
        .widget(WidgetConfig::new("status", 3).entity("binary_sensor.door"))
}

fn states() -> StaticStates {
    StaticStates::new()
        .with(EntityView::new("sensor.t", "21.46").unit("°C").friendly_name("Living Room"))
        .with(EntityView::new("sensor.cpu", "37").unit("%"))
        .with(EntityView::new("binary_sensor.door", "open").friendly_name("Door"))
}

/// Renders with slot registration, collected first and applied after drawing
/// because drawing borrows the canvas mutably.
fn render(t: &mut TestCanvas, screen: &Screen, states: &StaticStates) {
    let mut regs: Vec<(usize, String, Rect)> = Vec::new();
    Renderer::new()
        .render_to(&mut **t, screen, states, now(), |index, tag, rect| {
            regs.push((index, tag.to_owned(), rect));
        })
        .unwrap();
    for (index, tag, rect) in regs {
        t.register_rect(&format!("slot-{index}"), &tag, rect);
    }
}

#[test]
fn every_slot_is_reported_with_its_widget() {
    let screen = Screen::from_config(&dashboard(), 240, 240);
    let mut t = TestCanvas::new(240, 240);
    render(&mut t, &screen, &states());

    assert_eq!(t.region_count(), 4);
    for (index, tag) in ["clock", "entity", "gauge", "status"].into_iter().enumerate() {
        let region = t.query_by_test_id(&format!("slot-{index}")).unwrap();
        assert_eq!(region.kind, tag);
        let slot = screen.layout().slot(index).unwrap();
        assert_eq!(region.bounds(), slot.rect.to_rectangle());
    }
}

#[test]
fn every_slot_draws_only_inside_itself() {
    let screen = Screen::from_config(&dashboard(), 240, 240);
    for index in 0..4 {
        let mut config = dashboard();
        config.widgets.retain(|w| w.slot == index);
        let single = Screen::from_config(&config, 240, 240);
        let mut t = TestCanvas::new(240, 240);
        render(&mut t, &single, &states());

        let rect = screen.layout().slot(index).unwrap().rect;
        t.assert_untouched_outside(rect, palette::BLACK)
            .unwrap_or_else(|e| panic!("slot {index}: {e}"));
        t.assert_region_drawn(rect.to_rectangle(), palette::BLACK)
            .unwrap_or_else(|e| panic!("slot {index}: {e}"));
    }
}

#[test]
fn padding_and_gaps_stay_background() {
    let screen = Screen::from_config(&dashboard(), 240, 240);
    let mut t = TestCanvas::new(240, 240);
    render(&mut t, &screen, &states());

    let slots = screen.layout().slots();
    let first = slots.first().unwrap().rect;
    // Outer padding strip above the first row.
    t.assert_region_uniform(Rectangle::new(Point::zero(), Size::new(240, 1)), palette::BLACK)
        .unwrap();
    // Vertical gap between the two columns of the first row.
    let gap = Rectangle::new(Point::new(first.x2, first.y1), Size::new(1, 20));
    t.assert_region_uniform(gap, palette::BLACK).unwrap();
}

#[test]
fn rendering_is_deterministic() {
    let screen = Screen::from_config(&dashboard(), 240, 240);
    let renderer = Renderer::new();
    let a = renderer.render(&screen, &states(), now());
    let b = renderer.render(&screen, &states(), now());
    assert_eq!(a, b);
}

#[test]
fn missing_entities_still_render_every_slot() {
    let screen = Screen::from_config(&dashboard(), 240, 240);
    let mut t = TestCanvas::new(240, 240);
    render(&mut t, &screen, &StaticStates::new());
    for slot in screen.layout().slots() {
        t.assert_region_drawn(slot.rect.to_rectangle(), palette::BLACK).unwrap();
    }
}

#[test]
fn invalid_widget_shows_config_error() {
    let config = ScreenConfig::new(LayoutConfig::fullscreen())
        .widget(WidgetConfig::new("gauge", 0).option("min", "low"));
    let screen = Screen::from_config(&config, 240, 240);
    let mut t = TestCanvas::new(240, 240);
    render(&mut t, &screen, &states());

    assert_eq!(t.query_all_by_kind("gauge").len(), 1);
    let whole = Rectangle::new(Point::zero(), Size::new(240, 240));
    assert!(t.pixel_count_of_color(whole, palette::RED) > 0);
}

#[test]
fn unknown_layout_json_falls_back_to_fullscreen() {
    let config = ScreenConfig::from_json(
        r#"{"layout": {"kind": "grid", "rows": 0, "cols": 0}, "widgets": [{"widget_type": "text", "slot": 0, "options": {"text": "Hi"}}]}"#,
    )
    .unwrap();
    let screen = Screen::from_config(&config, 240, 240);
    assert_eq!(screen.layout().slot_count(), 1);
    let mut t = TestCanvas::new(240, 240);
    render(&mut t, &screen, &states());
    assert_eq!(t.region_count(), 1);
}

#[test]
fn light_theme_clears_to_its_background() {
    let mut config = ScreenConfig::new(LayoutConfig::fullscreen());
    config.theme = display_components::theme::ThemeName::Light;
    let screen = Screen::from_config(&config, 64, 64);
    let canvas = Renderer::new().render(&screen, &states(), now());
    let background = display_components::theme::Theme::LIGHT.background;
    assert_eq!(canvas.count_color(background), 64 * 64);
}

#[test]
fn encoded_frames() {
    let screen = Screen::from_config(&dashboard(), 240, 240);
    let renderer = Renderer::new();

    let png = renderer.render_png(&screen, &states(), now()).unwrap();
    assert_eq!(png.get(1..4), Some(&b"PNG"[..]));

    let jpeg = renderer.render_jpeg(&screen, &states(), now(), 80).unwrap();
    assert_eq!(jpeg.get(..2), Some(&[0xFF, 0xD8][..]));
}

#[test]
fn golden_roundtrip_in_tempdir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.png");
    let screen = Screen::from_config(&dashboard(), 240, 240);

    let mut first = TestCanvas::new(240, 240);
    render(&mut first, &screen, &states());
    first.save_golden(&path).unwrap();

    let mut second = TestCanvas::new(240, 240);
    render(&mut second, &screen, &states());
    second.assert_matches_golden(&path, 0).unwrap();
}
