//! Display UI Testing Utilities
//!
//! Headless testing API for rendered dashboard screens.
//!
//! # Quick start
//!
//! ```
//! use display_testing::TestCanvas;
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut t = TestCanvas::new(100, 100);
//!
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
//!     .draw(&mut *t)
//!     .unwrap();
//!
//! // Register the area so it can be queried by test ID
//! t.register_region("header", "Label", (10, 10), (40, 20));
//!
//! t.assert_pixel(20, 15, Rgb888::RED).unwrap();
//! t.assert_has_region("header").unwrap();
//! ```
//!
//! # Golden screenshot testing
//!
//! ```no_run
//! # use display_testing::TestCanvas;
//! # let t = TestCanvas::new(240, 240);
//! // First run: set UPDATE_GOLDEN=1 to create/update the reference file.
//! t.assert_matches_golden("tests/golden/dashboard.png", 0).unwrap();
//! ```

#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use std::path::Path;

use display_canvas::Canvas;
use display_layout::geometry::Rect;
use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

// ─────────────────────────────────────────────────────────────────────────────
// RegionRef
// ─────────────────────────────────────────────────────────────────────────────

/// A named screen area, typically one widget slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRef {
    /// The test identifier (analogous to `data-testid` in web testing).
    pub test_id: String,
    /// What was drawn there, e.g. a widget type such as `"clock"`.
    pub kind: String,
    /// Top-left corner in display coordinates.
    pub position: (i32, i32),
    /// Width × height in pixels.
    pub size: (u32, u32),
}

impl RegionRef {
    /// The bounding rectangle as an `embedded-graphics` [`Rectangle`].
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.position.0, self.position.1),
            Size::new(self.size.0, self.size.1),
        )
    }

    /// Centre of the region's bounding box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TestCanvas
// ─────────────────────────────────────────────────────────────────────────────

/// Headless canvas for UI testing.
///
/// Wraps [`Canvas`] and adds:
/// - A region registry queryable by test ID
/// - Pixel and region assertions
/// - PNG capture and golden-file comparison
///
/// Derefs to [`Canvas`], which implements [`DrawTarget`].
pub struct TestCanvas {
    inner: Canvas,
    regions: Vec<RegionRef>,
}

impl TestCanvas {
    /// Black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_canvas(Canvas::with_size(width, height))
    }

    /// Wraps an already rendered canvas.
    pub fn from_canvas(canvas: Canvas) -> Self {
        Self {
            inner: canvas,
            regions: Vec::new(),
        }
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.inner.pixel(x, y)
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected color.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Rgb888) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual == expected {
            Ok(())
        } else {
            Err(format!("assert_pixel({x}, {y}): expected {expected:?}, got {actual:?}"))
        }
    }

    /// Assert that every pixel inside `rect` has the given color.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        for point in rect.points() {
            let (x, y) = coords(point).ok_or_else(|| format!("{rect:?} leaves the canvas"))?;
            self.assert_pixel(x, y, color)
                .map_err(|e| format!("assert_region_uniform failed in {rect:?}: {e}"))?;
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel with the given color.
    pub fn assert_region_contains(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!("assert_region_contains: no {color:?} pixel found in {rect:?}"))
        }
    }

    /// Assert that `rect` has at least one pixel different from `background`.
    pub fn assert_region_drawn(&self, rect: Rectangle, background: Rgb888) -> Result<(), String> {
        let total = rect.points().count();
        if self.pixel_count_of_color(rect, background) < total {
            Ok(())
        } else {
            Err(format!("assert_region_drawn: {rect:?} is blank"))
        }
    }

    /// Assert that every pixel outside `rect` is still `background`.
    pub fn assert_untouched_outside(&self, rect: Rect, background: Rgb888) -> Result<(), String> {
        for y in 0..self.inner.height() {
            for x in 0..self.inner.width() {
                let inside = coords_to_point(x, y).is_some_and(|p| rect.contains(p));
                if !inside && self.pixel_at(x, y) != Some(background) {
                    return Err(format!("assert_untouched_outside: ({x}, {y}) painted outside {rect:?}"));
                }
            }
        }
        Ok(())
    }

    /// Count how many pixels in `rect` match `color`.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Rgb888) -> usize {
        rect.points()
            .filter_map(coords)
            .filter(|&(x, y)| self.pixel_at(x, y) == Some(color))
            .count()
    }

    // ── Region registry ──────────────────────────────────────────────────────

    /// Register (or update) a region by test ID.
    pub fn register_region(&mut self, test_id: &str, kind: &str, position: (i32, i32), size: (u32, u32)) {
        if let Some(existing) = self.regions.iter_mut().find(|r| r.test_id == test_id) {
            existing.kind = kind.to_string();
            existing.position = position;
            existing.size = size;
        } else {
            self.regions.push(RegionRef {
                test_id: test_id.to_string(),
                kind: kind.to_string(),
                position,
                size,
            });
        }
    }

    /// Register a region from a layout rect.
    pub fn register_rect(&mut self, test_id: &str, kind: &str, rect: Rect) {
        let size = rect.size();
        self.register_region(test_id, kind, (rect.x1, rect.y1), (size.width, size.height));
    }

    /// Remove all registered regions.
    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    /// Find a region by test ID.
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&RegionRef> {
        self.regions.iter().find(|r| r.test_id == test_id)
    }

    /// All regions of a given kind, in registration order.
    pub fn query_all_by_kind(&self, kind: &str) -> Vec<&RegionRef> {
        self.regions.iter().filter(|r| r.kind == kind).collect()
    }

    /// Return all registered regions.
    pub fn regions(&self) -> &[RegionRef] {
        &self.regions
    }

    /// Total number of registered regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Assert that a region with `test_id` exists in the registry.
    pub fn assert_has_region(&self, test_id: &str) -> Result<(), String> {
        self.query_by_test_id(test_id)
            .ok_or_else(|| format!("Region '{test_id}' not found"))
            .map(|_| ())
    }

    // ── Screenshot utilities ─────────────────────────────────────────────────

    /// Save the current framebuffer as a PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        display_canvas::save_png(&self.inner, path)?;
        Ok(())
    }

    /// Save the current framebuffer as the golden reference PNG.
    ///
    /// Parent directories are created automatically.
    pub fn save_golden(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let p = path.as_ref();
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.screenshot(p)
    }

    /// Assert the current framebuffer matches a golden reference PNG.
    ///
    /// `threshold` is the maximum per-channel absolute difference that is still
    /// considered equal (0 = exact match).
    ///
    /// Set the `UPDATE_GOLDEN=1` environment variable to **update** the golden
    /// file instead of asserting:
    ///
    /// ```bash
    /// UPDATE_GOLDEN=1 cargo test
    /// ```
    pub fn assert_matches_golden(&self, golden_path: impl AsRef<Path>, threshold: u8) -> Result<(), String> {
        let golden_path = golden_path.as_ref();

        if std::env::var("UPDATE_GOLDEN").is_ok() {
            return self
                .save_golden(golden_path)
                .map_err(|e| format!("Failed to save golden '{p}': {e}", p = golden_path.display()));
        }

        let golden = image::open(golden_path)
            .map_err(|e| {
                format!(
                    "Failed to open golden '{}': {e}\nRun with UPDATE_GOLDEN=1 to create it.",
                    golden_path.display()
                )
            })?
            .to_rgb8();
        let current = display_canvas::to_image(&self.inner);

        if current.dimensions() != golden.dimensions() {
            let (cw, ch) = current.dimensions();
            let (gw, gh) = golden.dimensions();
            return Err(format!("Dimension mismatch: canvas is {cw}×{ch}, golden is {gw}×{gh}"));
        }

        let diff_pixels = current
            .pixels()
            .zip(golden.pixels())
            .filter(|(cp, gp)| cp.0.iter().zip(gp.0.iter()).any(|(&a, &b)| a.abs_diff(b) > threshold))
            .count();

        if diff_pixels > 0 {
            Err(format!(
                "{diff_pixels} pixels differ from golden '{}' (threshold={threshold})",
                golden_path.display()
            ))
        } else {
            Ok(())
        }
    }

    // ── Canvas access ────────────────────────────────────────────────────────

    /// The wrapped canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.inner
    }

    /// Unwraps into the canvas.
    pub fn into_canvas(self) -> Canvas {
        self.inner
    }
}

fn coords(point: Point) -> Option<(u32, u32)> {
    Some((u32::try_from(point.x).ok()?, u32::try_from(point.y).ok()?))
}

fn coords_to_point(x: u32, y: u32) -> Option<Point> {
    Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

impl std::ops::Deref for TestCanvas {
    type Target = Canvas;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for TestCanvas {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
