//! Every component stays inside the rect it is rendered into.

use display_canvas::Canvas;
use display_components::prelude::*;
use display_layout::geometry::Rect;
use display_layout::style::{Align, Edges, Justify};
use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;
use proptest::prelude::*;

fn samples() -> Vec<Component> {
    vec![
        Label::new("Living Room Temperature").font(FontRole::Large).into(),
        Icon::named("fire", 64).color(palette::ORANGE).into(),
        Bar::new(75.0).into(),
        Ring::new(62.0).value("62%", palette::WHITE).caption("CPU", palette::GRAY).into(),
        ArcGauge::new(40.0).value("40", palette::WHITE).caption("Load", palette::GRAY).into(),
        Sparkline::new([1.0, 4.0, 2.0, 8.0, 5.0]).fill(palette::DARK_GRAY).into(),
        Dot::new(20, palette::LIME).into(),
        ClockDisplay::new("09:05").date("Mon, Jan 01").ampm("AM").label("Home").into(),
        TextDisplay::new("Hello world").label("Greeting").into(),
        ClimateDisplay::new("21.5°", IconKind::Fire, palette::ORANGE)
            .target("22°")
            .humidity("45%")
            .status("Heating")
            .into(),
        CenteredValue::new("1,234").label("steps").into(),
        IconValue::new(IconKind::WaterPercent, "45%").label("Humidity").into(),
        StatusDisplay::new("Front Door", palette::LIME)
            .status("ON")
            .icon(IconKind::Lightbulb)
            .into(),
        StatusListDisplay::new(vec![
            StatusRow::new("Garage", palette::RED).status("OFF"),
            StatusRow::new("Back Door", palette::LIME).status("ON"),
        ])
        .title("Doors")
        .into(),
        MediaDisplay::new("Bohemian Rhapsody", true)
            .artist("Queen")
            .album("A Night at the Opera")
            .progress(MediaProgress {
                percent: 35.0,
                elapsed: "2:05".into(),
                total: "5:55".into(),
            })
            .into(),
        ChartDisplay::new(Sparkline::new([3.0, 1.0, 4.0, 1.0, 5.0]))
            .label("Power")
            .value("5kW")
            .range("1", "5")
            .period("24h")
            .into(),
        Panel::new(
            Stack::column()
                .padding(Edges::all(2))
                .justify(Justify::SpaceBetween)
                .align(Align::Stretch)
                .child(Label::new("CPU").font(FontRole::Small))
                .child(Bar::new(30.0)),
        )
        .into(),
    ]
}

fn outside_is_black(canvas: &Canvas, rect: Rect) -> bool {
    (0..canvas.height()).all(|y| {
        (0..canvas.width()).all(|x| {
            let inside = rect.contains(embedded_graphics::prelude::Point::new(
                i32::try_from(x).unwrap(),
                i32::try_from(y).unwrap(),
            ));
            inside || canvas.pixel(x, y) == Some(Rgb888::BLACK)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn components_never_paint_outside_their_rect(
        x in 0i32..200,
        y in 0i32..200,
        w in 0i32..240,
        h in 0i32..240,
    ) {
        let rect = Rect::from_origin_size(x, y, w.min(240 - x), h.min(240 - y));
        let ctx = RenderContext::default();
        for component in samples() {
            let mut canvas = Canvas::new();
            component.render(&ctx, &mut canvas, rect).unwrap();
            prop_assert!(outside_is_black(&canvas, rect), "{component:?} escaped {rect:?}");
        }
    }
}

#[test]
fn components_draw_something_in_a_grid_slot() {
    let rect = Rect::new(8, 8, 116, 116);
    let ctx = RenderContext::default();
    for component in samples() {
        let mut canvas = Canvas::new();
        component.render(&ctx, &mut canvas, rect).unwrap();
        let total = usize::try_from(canvas.width() * canvas.height()).unwrap();
        assert!(canvas.count_color(Rgb888::BLACK) < total, "{component:?} drew nothing");
    }
}

#[test]
fn measure_respects_max() {
    let ctx = RenderContext::default();
    let max = Size::new(50, 20);
    for component in samples() {
        let size = component.measure(&ctx, max);
        assert!(size.width <= max.width && size.height <= max.height, "{component:?}");
    }
}
