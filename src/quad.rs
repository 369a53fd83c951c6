//! Positioned, texture-mapped quads for single characters.

use glam::{vec2, Vec2};
use palette::Srgba;

use crate::{font::Glyph, render::RenderSink};

const TOP_LEFT: usize = 0;
const TOP_RIGHT: usize = 1;
const BOTTOM_RIGHT: usize = 2;
const BOTTOM_LEFT: usize = 3;

/// One corner of a [`CharacterQuad`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Srgba<u8>,
    pub tex_coord: Vec2,
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            color: Srgba::new(0, 0, 0, 0),
            tex_coord: Vec2::ZERO,
        }
    }
}

/// A colored quad for one character, mapped into the glyph atlas.
///
/// Quads are created in glyph-relative coordinates (the glyph's
/// bounding box offsets from the pen position) and translated into
/// place during the layout pass. The `advance` records the pen
/// movement the character consumes, which is independent of the
/// quad's visual width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CharacterQuad {
    vertices: [Vertex; 4],
    advance: f32,
}

impl Default for CharacterQuad {
    fn default() -> Self {
        Self {
            vertices: [Vertex::default(); 4],
            advance: 0.,
        }
    }
}

impl CharacterQuad {
    pub fn new(glyph: &Glyph, color: Srgba<u8>) -> Self {
        let left = glyph.bounds.pos.x;
        let top = glyph.bounds.pos.y;
        let right = glyph.bounds.right();
        let bottom = glyph.bounds.bottom();

        let tex_left = glyph.texture_rect.pos.x;
        let tex_top = glyph.texture_rect.pos.y;
        let tex_right = glyph.texture_rect.right();
        let tex_bottom = glyph.texture_rect.bottom();

        let vertex = |x, y, u, v| Vertex {
            position: vec2(x, y),
            color,
            tex_coord: vec2(u, v),
        };

        Self {
            vertices: [
                vertex(left, top, tex_left, tex_top),
                vertex(right, top, tex_right, tex_top),
                vertex(right, bottom, tex_right, tex_bottom),
                vertex(left, bottom, tex_left, tex_bottom),
            ],
            advance: glyph.advance,
        }
    }

    pub fn vertices(&self) -> &[Vertex; 4] {
        &self.vertices
    }

    pub fn location(&self) -> Vec2 {
        self.vertices[TOP_LEFT].position
    }

    pub fn width(&self) -> f32 {
        self.vertices[TOP_RIGHT].position.x - self.vertices[TOP_LEFT].position.x
    }

    pub fn height(&self) -> f32 {
        self.vertices[BOTTOM_LEFT].position.y - self.vertices[TOP_RIGHT].position.y
    }

    pub fn advance(&self) -> f32 {
        self.advance
    }

    pub fn color(&self) -> Srgba<u8> {
        self.vertices[TOP_LEFT].color
    }

    pub fn set_color(&mut self, color: Srgba<u8>) {
        for vertex in &mut self.vertices {
            vertex.color = color;
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.vertices {
            vertex.position += delta;
        }
    }

    /// Truncates the quad at the vertical line `cut_line`, rescaling
    /// the trailing texture coordinates so that only the visible
    /// fraction of the glyph is sampled. A cut line left of the quad
    /// collapses it to zero width. Cutting never increases the size.
    pub fn cut_on_right(&mut self, cut_line: f32) {
        let left = self.vertices[TOP_LEFT];

        if cut_line < left.position.x {
            self.vertices[TOP_RIGHT].position.x = left.position.x;
            self.vertices[BOTTOM_RIGHT].position.x = left.position.x;
            return;
        }
        if cut_line >= self.vertices[BOTTOM_RIGHT].position.x {
            return;
        }

        let cut_ratio =
            (cut_line - left.position.x) / (self.vertices[BOTTOM_RIGHT].position.x - left.position.x);
        let tex_width = self.vertices[TOP_RIGHT].tex_coord.x - left.tex_coord.x;
        let tex_cut = left.tex_coord.x + tex_width * cut_ratio;
        for i in [TOP_RIGHT, BOTTOM_RIGHT] {
            self.vertices[i].position.x = cut_line;
            self.vertices[i].tex_coord.x = tex_cut;
        }
    }

    /// Truncates the quad at the horizontal line `cut_line`; the
    /// bottom-edge counterpart of [`cut_on_right`](Self::cut_on_right).
    pub fn cut_on_bottom(&mut self, cut_line: f32) {
        let top = self.vertices[TOP_LEFT];

        if cut_line < top.position.y {
            self.vertices[BOTTOM_LEFT].position.y = top.position.y;
            self.vertices[BOTTOM_RIGHT].position.y = top.position.y;
            return;
        }
        if cut_line >= self.vertices[BOTTOM_RIGHT].position.y {
            return;
        }

        let cut_ratio =
            (cut_line - top.position.y) / (self.vertices[BOTTOM_RIGHT].position.y - top.position.y);
        let tex_height = self.vertices[BOTTOM_LEFT].tex_coord.y - top.tex_coord.y;
        let tex_cut = top.tex_coord.y + tex_height * cut_ratio;
        for i in [BOTTOM_LEFT, BOTTOM_RIGHT] {
            self.vertices[i].position.y = cut_line;
            self.vertices[i].tex_coord.y = tex_cut;
        }
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        // sub-half-pixel quads are invisible anyway
        if self.width() < 0.5 || self.height() < 0.5 {
            return;
        }
        sink.glyph_quad(self);
    }
}
