//! Glyph metrics capability consumed by the text layout engine.

use std::sync::Arc;

use crate::Rect;

/// Metrics and atlas placement for a single glyph at a fixed
/// character size.
#[derive(Copy, Clone, Debug, Default)]
pub struct Glyph {
    /// Bounding box of the glyph, relative to the pen position.
    pub bounds: Rect,
    /// Region of the glyph atlas holding the rasterized glyph.
    pub texture_rect: Rect,
    /// Horizontal pen movement after this glyph. Independent
    /// of the visual glyph width.
    pub advance: f32,
}

/// Source of glyph metrics for one font face.
///
/// Implementations must be deterministic for a fixed character size;
/// layout results are cached between calls on that assumption.
pub trait Font {
    fn glyph(&self, c: char, character_size: u32) -> Glyph;

    /// Vertical distance between the baselines of two consecutive lines.
    fn line_spacing(&self, character_size: u32) -> f32;
}

/// Shared handle to a font face.
///
/// Fonts are owned by the application and only read by the toolkit,
/// so a shared immutable handle is all the layout engine keeps.
pub type FontHandle = Arc<dyn Font>;
