//! Property tests: every strategy yields disjoint slots inside the padded canvas.

use display_layout::prelude::*;
use proptest::prelude::*;

fn any_config() -> impl Strategy<Value = LayoutConfig> {
    let kind = prop_oneof![
        Just(LayoutKind::Fullscreen),
        (1u32..=4, 1u32..=4).prop_map(|(rows, cols)| LayoutKind::Grid { rows, cols }),
        (0u32..=5, -1.0f32..2.0).prop_map(|(footer_slots, hero_ratio)| LayoutKind::Hero {
            footer_slots,
            hero_ratio
        }),
        (any::<bool>(), -1.0f32..2.0).prop_map(|(vertical, ratio)| LayoutKind::Split {
            orientation: if vertical { Axis::Vertical } else { Axis::Horizontal },
            ratio,
        }),
        proptest::collection::vec(-0.5f32..3.0, 1..=5)
            .prop_map(|ratios| LayoutKind::Columns { ratios }),
        proptest::collection::vec(-0.5f32..3.0, 1..=5).prop_map(|ratios| LayoutKind::Rows { ratios }),
    ];
    (kind, 0u32..=24, 0u32..=16).prop_map(|(kind, padding, gap)| LayoutConfig {
        kind,
        padding,
        gap,
    })
}

proptest! {
    #[test]
    fn slots_are_disjoint_and_contained(
        config in any_config(),
        width in 120u32..=480,
        height in 120u32..=480,
    ) {
        // Degenerate combinations are rejected, never turned into bad slots.
        let Ok(slots) = compute_slots(width, height, &config) else {
            return Ok(());
        };

        prop_assert_eq!(slots.len(), config.slot_count());

        let (padding, _) = config.effective_spacing();
        let p = padding as i32;
        let bounds = Rect::new(p, p, width as i32 - p, height as i32 - p);

        for (i, a) in slots.iter().enumerate() {
            prop_assert_eq!(a.index, i);
            prop_assert!(!a.rect.is_empty());
            prop_assert!(bounds.contains_rect(&a.rect), "{:?} outside {:?}", a.rect, bounds);
            for b in slots.iter().skip(i + 1) {
                prop_assert!(!a.rect.overlaps(&b.rect), "{:?} overlaps {:?}", a.rect, b.rect);
            }
        }
    }

    #[test]
    fn device_canvas_presets_always_succeed(index in 0usize..LayoutPreset::ALL.len()) {
        let preset = LayoutPreset::ALL[index];
        prop_assert!(Layout::new(240, 240, preset.config()).is_ok());
    }

    #[test]
    fn size_category_is_monotonic(a in -10i32..400, b in -10i32..400) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(SizeCategory::from_height(lo) <= SizeCategory::from_height(hi));
    }

    #[test]
    fn computation_is_deterministic(config in any_config()) {
        prop_assert_eq!(
            compute_slots(240, 240, &config),
            compute_slots(240, 240, &config)
        );
    }
}

#[test]
fn grid_2x2_slots_are_108_square() {
    let layout = Layout::new(240, 240, LayoutConfig::grid(2, 2).padding(8).gap(8)).unwrap();
    for slot in layout.slots() {
        assert_eq!(slot.rect.width(), 108);
        assert_eq!(slot.rect.height(), 108);
    }
}

#[test]
fn hero_ratio_point_six_edge_to_edge() {
    let config = LayoutConfig::hero(3, 0.6).padding(0).gap(0);
    let layout = Layout::new(240, 240, config).unwrap();
    let slots = layout.slots();
    assert_eq!(slots[0].rect.height(), 144);
    for footer in &slots[1..] {
        assert_eq!(footer.rect.height(), 96);
        assert_eq!(footer.rect.width(), 80);
        assert_eq!(footer.rect.y1, 144);
    }
}

#[test]
fn hero_ratio_point_six_with_default_spacing() {
    let layout = Layout::new(240, 240, LayoutConfig::hero(3, 0.6)).unwrap();
    let slots = layout.slots();
    assert_eq!(slots.len(), 4);

    // avail = 240 - 2 * 8 = 224; hero = floor(224 * 0.6) = 134; footer = 224 - 134 - 8 = 82.
    let hero = slots[0].rect;
    assert_eq!((hero.x1, hero.y1, hero.width(), hero.height()), (8, 8, 224, 134));
    for footer in &slots[1..] {
        assert_eq!(footer.rect.height(), 82);
        assert_eq!(footer.rect.y1, 8 + 134 + 8);
    }
}

#[test]
fn hero_footer_slots_split_the_row_evenly() {
    for count in 1u32..=5 {
        let layout = Layout::new(240, 240, LayoutConfig::hero(count, 0.6)).unwrap();
        let footers = &layout.slots()[1..];
        assert_eq!(footers.len(), count as usize);

        let n = count as i32;
        let expected = (224 - (n - 1) * 8) / n;
        for (i, footer) in footers.iter().enumerate() {
            assert_eq!(footer.rect.width(), expected, "{count} footers");
            assert_eq!(footer.rect.x1, 8 + i as i32 * (expected + 8), "{count} footers");
        }
        // Truncation leaves less than one pixel per slot unused at the right edge.
        let last = footers.last().unwrap().rect;
        assert!(232 - last.x2 < n, "{count} footers end at {}", last.x2);
    }
}
