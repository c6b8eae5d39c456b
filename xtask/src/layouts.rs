//! xtask layouts — print the slots every preset produces.

use anyhow::{Context, Result};
use colored::Colorize;
use display_layout::layout::Layout;
use display_layout::preset::LayoutPreset;

pub fn run(width: u32, height: u32) -> Result<()> {
    println!();
    println!("{}", format!("Layout presets at {width}x{height}").cyan().bold());
    println!();

    for preset in LayoutPreset::ALL {
        let layout = Layout::new(width, height, preset.config())
            .with_context(|| format!("preset {} does not fit {width}x{height}", preset.name()))?;
        println!("{}", format!("  {} ({} slots)", preset.name(), layout.slot_count()).green());
        for line in describe(&layout) {
            println!("    {}", line.dimmed());
        }
    }
    println!();
    Ok(())
}

/// One line per slot: index, origin and size.
pub(crate) fn describe(layout: &Layout) -> Vec<String> {
    layout
        .slots()
        .iter()
        .map(|slot| {
            let r = slot.rect;
            format!("#{} at ({}, {}) {}x{}", slot.index, r.x1, r.y1, r.width(), r.height())
        })
        .collect()
}
