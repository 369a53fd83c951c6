//! Rendering capability consumed by widgets.

use glam::Vec2;
use palette::Srgba;

use crate::{quad::CharacterQuad, Rect};

/// Opaque handle to a texture registered with the application's
/// rendering backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Receives geometry batches produced by widgets.
///
/// The toolkit submits everything in draw order; the sink decides
/// how to rasterize it.
pub trait RenderSink {
    fn fill_rect(&mut self, rect: Rect, color: Srgba<u8>);

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Srgba<u8>);

    /// Submits one positioned, texture-mapped character quad.
    fn glyph_quad(&mut self, quad: &CharacterQuad);

    /// Draws the `src` region of `texture` into `dest`.
    fn image(&mut self, texture: TextureId, dest: Rect, src: Rect);
}
