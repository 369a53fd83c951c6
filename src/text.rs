//! Text layout: glyph quad generation, greedy word wrap and clipping
//! against a size limit.

use std::fmt;

use glam::{vec2, Vec2};
use palette::Srgba;

use crate::{font::FontHandle, quad::CharacterQuad, render::RenderSink, Error, Rect};

use self::wrap::LineBreakList;

pub mod wrap;

pub fn default_color() -> Srgba<u8> {
    Srgba::new(0, 0, 0, u8::MAX)
}

fn hidden_color() -> Srgba<u8> {
    Srgba::new(0, 0, 0, 0)
}

/// A block of plain text, shaped into one [`CharacterQuad`] per code
/// point and wrapped inside an optional width/height limit.
///
/// Geometry is recomputed whenever the string, font, character size or
/// size limit changes. Nothing is computed until all three of font,
/// character size and string are set.
#[derive(Clone)]
pub struct Text {
    chars: Vec<char>,
    quads: Vec<CharacterQuad>,
    /// Quads `[0, end_visible)` are rendered; everything past the
    /// index fell outside the height limit.
    end_visible: usize,
    font: Option<FontHandle>,
    character_size: u32,
    color: Srgba<u8>,
    width_limit: f32,
    height_limit: f32,
    /// Tight bounding rectangle of the visible content. `bounds.pos`
    /// is the text location; the size never exceeds the limits.
    bounds: Rect,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            chars: Vec::new(),
            quads: Vec::new(),
            end_visible: 0,
            font: None,
            character_size: 0,
            color: default_color(),
            width_limit: f32::INFINITY,
            height_limit: f32::INFINITY,
            bounds: Rect::default(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the string, allocating one quad per code point.
    pub fn set_string(&mut self, s: &str) {
        self.chars = s.chars().collect();
        self.quads = vec![CharacterQuad::default(); self.chars.len()];
        self.end_visible = 0;
        self.update_geometry();
        self.check_invariants();
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Sets the maximum width and height the rendered text may
    /// occupy. Both values must be positive and finite; use
    /// [`remove_size_limit`](Self::remove_size_limit) for no limit.
    pub fn set_limiting_dimensions(&mut self, w: f32, h: f32) -> Result<(), Error> {
        let valid = |x: f32| x > 0. && x.is_finite();
        if !valid(w) || !valid(h) {
            return Err(Error::InvalidDimensions);
        }
        self.width_limit = w;
        self.height_limit = h;
        self.update_geometry();
        self.check_invariants();
        Ok(())
    }

    pub fn remove_size_limit(&mut self) {
        self.width_limit = f32::INFINITY;
        self.height_limit = f32::INFINITY;
        self.update_geometry();
        self.check_invariants();
    }

    pub fn relieve_width_limit(&mut self) {
        if self.width_limit.is_finite() {
            self.width_limit = f32::INFINITY;
            self.update_geometry();
        }
    }

    pub fn relieve_height_limit(&mut self) {
        if self.height_limit.is_finite() {
            self.height_limit = f32::INFINITY;
            self.update_geometry();
        }
    }

    pub fn relieve_size_limit(&mut self) {
        if self.width_limit.is_finite() || self.height_limit.is_finite() {
            self.width_limit = f32::INFINITY;
            self.height_limit = f32::INFINITY;
            self.update_geometry();
        }
    }

    pub fn assign_font(&mut self, font: FontHandle) {
        self.font = Some(font);
        self.update_geometry();
        self.check_invariants();
    }

    pub fn assigned_font(&self) -> Result<&FontHandle, Error> {
        self.font.as_ref().ok_or(Error::NoFont)
    }

    pub fn set_character_size(&mut self, size: u32) {
        self.character_size = size;
        self.update_geometry();
        self.check_invariants();
    }

    pub fn character_size(&self) -> u32 {
        self.character_size
    }

    /// Sets the fill color of every character. Does not trigger a
    /// geometry recompute.
    pub fn set_color(&mut self, color: Srgba<u8>) {
        self.color = color;
        for (quad, &c) in self.quads.iter_mut().zip(&self.chars) {
            if c != '\n' {
                quad.set_color(color);
            }
        }
        self.check_invariants();
    }

    pub fn set_color_for_character(&mut self, index: usize, color: Srgba<u8>) -> Result<(), Error> {
        let len = self.chars.len();
        let quad = self
            .quads
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        quad.set_color(color);
        Ok(())
    }

    /// Moves the text. Already-shaped quads are translated by the
    /// delta; neither wrapping nor clipping is reevaluated.
    pub fn set_location(&mut self, x: f32, y: f32) {
        let delta = vec2(x, y) - self.bounds.pos;
        for quad in &mut self.quads {
            quad.translate(delta);
        }
        self.bounds.pos = vec2(x, y);
        self.check_invariants();
    }

    pub fn location(&self) -> Vec2 {
        self.bounds.pos
    }

    pub fn width(&self) -> f32 {
        self.bounds.size.x
    }

    pub fn height(&self) -> f32 {
        self.bounds.size.y
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn end_visible_index(&self) -> usize {
        self.end_visible
    }

    pub fn character_location(&self, index: usize) -> Result<Vec2, Error> {
        self.quad(index).map(CharacterQuad::location)
    }

    pub fn character_width(&self, index: usize) -> Result<f32, Error> {
        self.quad(index).map(CharacterQuad::width)
    }

    pub fn character_height(&self, index: usize) -> Result<f32, Error> {
        self.quad(index).map(CharacterQuad::height)
    }

    /// Measures the unbounded size a candidate string would occupy
    /// with the current font and character size. Zero until both are
    /// set.
    pub fn measure(&self, s: &str) -> Vec2 {
        let font = match &self.font {
            Some(font) if self.character_size > 0 => font,
            _ => return Vec2::ZERO,
        };
        let mut size = Vec2::ZERO;
        for c in s.chars() {
            let glyph = font.glyph(c, self.character_size);
            size.x += glyph.advance;
            size.y = size.y.max(glyph.bounds.size.y);
        }
        size
    }

    /// Submits the visible quads, in string order, skipping line
    /// breaks.
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        if self.font.is_none() || self.chars.is_empty() {
            return;
        }
        for (quad, &c) in self.quads[..self.end_visible].iter().zip(&self.chars) {
            if c != '\n' {
                quad.draw(sink);
            }
        }
    }

    fn quad(&self, index: usize) -> Result<&CharacterQuad, Error> {
        self.quads.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.chars.len(),
        })
    }

    fn is_ready(&self) -> bool {
        self.font.is_some() && self.character_size > 0 && !self.chars.is_empty()
    }

    /// Full geometry recompute: refresh quads from glyph metrics, run
    /// the wrap pass, then position and clip every quad.
    fn update_geometry(&mut self) {
        let font = match &self.font {
            Some(font) if self.is_ready() => font.clone(),
            _ => return,
        };

        self.bounds.size = Vec2::ZERO;
        for (quad, &c) in self.quads.iter_mut().zip(&self.chars) {
            let glyph = font.glyph(c, self.character_size);
            *quad = CharacterQuad::new(&glyph, self.color);
        }

        let advances: Vec<f32> = self.quads.iter().map(CharacterQuad::advance).collect();
        let breaks = wrap::break_lines(&self.chars, &advances, self.width_limit);
        log::trace!(
            "laying out {} chars across {} lines",
            self.chars.len(),
            breaks.len()
        );
        self.position_quads(&font, breaks);
        self.check_invariants();
    }

    fn position_quads(&mut self, font: &FontHandle, breaks: LineBreakList) {
        let origin = self.bounds.pos;
        let boundary = origin + vec2(self.width_limit, self.height_limit);
        let line_spacing = font.line_spacing(self.character_size);

        // the pen starts one line height below the top edge
        let first_line_len = breaks.first().copied().unwrap_or(self.chars.len());
        let first_line_height = self.quads[..first_line_len]
            .iter()
            .map(CharacterQuad::height)
            .fold(0.0f32, f32::max);
        let mut write = vec2(origin.x, origin.y + first_line_height);

        let mut breaks = breaks.into_iter().peekable();
        self.end_visible = self.chars.len();

        for i in 0..self.chars.len() {
            if breaks.peek() == Some(&i) {
                breaks.next();
                write = vec2(origin.x, write.y + line_spacing);
                if write.y > boundary.y {
                    // out of vertical space: everything from here on
                    // stays invisible
                    self.end_visible = i;
                    return;
                }
            }
            if self.chars[i] == '\n' {
                self.quads[i].set_color(hidden_color());
                continue;
            }

            self.quads[i].translate(write);
            trim_and_grow_bounds(
                &mut self.quads[i],
                &mut self.bounds,
                boundary,
                vec2(self.width_limit, self.height_limit),
            );
            write.x += self.quads[i].advance();
        }
    }

    fn check_invariants(&self) {
        debug_assert_eq!(self.chars.len(), self.quads.len());
        debug_assert!(self.end_visible <= self.chars.len());
        debug_assert!(self.bounds.size.x <= self.width_limit);
        debug_assert!(self.bounds.size.y <= self.height_limit);
        debug_assert!(!self.bounds.size.x.is_nan() && !self.bounds.size.y.is_nan());
    }
}

/// Clips one placed quad against the limit edges and grows the tight
/// bounding box to its (possibly clipped) extent.
fn trim_and_grow_bounds(quad: &mut CharacterQuad, bounds: &mut Rect, boundary: Vec2, limits: Vec2) {
    let right = quad.location().x + quad.width();
    if right > boundary.x {
        bounds.size.x = limits.x;
        quad.cut_on_right(boundary.x);
    } else if right - bounds.pos.x > bounds.size.x {
        bounds.size.x = right - bounds.pos.x;
    }

    let bottom = quad.location().y + quad.height();
    if bottom > boundary.y {
        bounds.size.y = limits.y;
        quad.cut_on_bottom(boundary.y);
    } else if bottom - bounds.pos.y > bounds.size.y {
        bounds.size.y = bottom - bounds.pos.y;
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("string", &self.string())
            .field("character_size", &self.character_size)
            .field("bounds", &self.bounds)
            .field("end_visible", &self.end_visible)
            .finish_non_exhaustive()
    }
}
