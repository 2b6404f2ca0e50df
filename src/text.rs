//! Text extents - the seam to the rendering collaborator's font metrics.
//!
//! The engine never rasterizes text, but hit-testing and marquee selection
//! need the screen-space box a label occupies. [`TextMeasurer`] abstracts
//! that over whatever text stack the host embeds; the heuristic default
//! keeps the engine usable headless and makes tests deterministic.

use crate::constants::{MIN_TEXT_RENDER_SIZE, TEXT_PAD_RATIO};
use crate::geometry::Rect;
use crate::types::TextData;
use crate::viewport::Viewport;

/// Unrotated extents of a rendered string at a given pixel font size.
pub trait TextMeasurer {
    /// Returns `(width, height)` in pixels, excluding padding.
    fn measure(&self, text: &str, size_px: f32) -> (f32, f32);
}

/// Fixed-advance approximation of proportional text extents.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicTextMeasurer {
    /// Horizontal advance per character as a fraction of the font size
    pub advance: f32,
    /// Line height as a fraction of the font size
    pub line_height: f32,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, size_px: f32) -> (f32, f32) {
        let chars = text.chars().count().max(1) as f32;
        (chars * self.advance * size_px, self.line_height * size_px)
    }
}

/// Screen-space bounding box of a text label: measured extents plus padding,
/// expanded for rotation, centered on the anchor.
pub fn text_screen_bbox(text: &TextData, viewport: &Viewport, measurer: &dyn TextMeasurer) -> Rect {
    let eff_size = (text.size as f32 * viewport.zoom).max(MIN_TEXT_RENDER_SIZE);
    let (w, h) = measurer.measure(&text.text, eff_size);
    let pad = TEXT_PAD_RATIO * eff_size;
    let (w, h) = (w + 2.0 * pad, h + 2.0 * pad);

    // Rotation expands the box to the rotated extents
    let theta = text.angle.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let (rw, rh) = (w * cos + h * sin, w * sin + h * cos);

    let center = viewport.world_to_screen(text.anchor);
    Rect::from_corners(
        center.x - rw / 2.0,
        center.y - rh / 2.0,
        center.x + rw / 2.0,
        center.y + rh / 2.0,
    )
}
