//! Non-interactive block of wrapped text.

use glam::Vec2;

use crate::{
    render::RenderSink,
    style::{self, StyleMap},
    text::Text,
    Error,
};

pub const TEXT_COLOR: &str = "text-area-text-color";
pub const TEXT_SIZE: &str = "text-area-text-size";

/// Displays a wrapped string. An explicit width or height becomes the
/// text's size limit; without one the widget reports the text's tight
/// bounds.
#[derive(Debug, Default)]
pub struct TextArea {
    text: Text,
    /// Explicit per-axis size, zero meaning "whatever the text needs".
    size: Vec2,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, s: &str) {
        self.text.set_string(s);
    }

    pub fn string(&self) -> String {
        self.text.string()
    }

    pub fn set_character_size(&mut self, size: u32) {
        self.text.set_character_size(size);
    }

    pub fn set_width(&mut self, w: f32) -> Result<(), Error> {
        if !(w > 0.) || !w.is_finite() {
            return Err(Error::InvalidSize);
        }
        self.size.x = w;
        self.update_size_limit()
    }

    pub fn set_height(&mut self, h: f32) -> Result<(), Error> {
        if !(h > 0.) || !h.is_finite() {
            return Err(Error::InvalidSize);
        }
        self.size.y = h;
        self.update_size_limit()
    }

    pub fn location(&self) -> Vec2 {
        self.text.location()
    }

    pub fn width(&self) -> f32 {
        if self.size.x == 0. {
            self.text.width()
        } else {
            self.size.x
        }
    }

    pub fn height(&self) -> f32 {
        if self.size.y == 0. {
            self.text.height()
        } else {
            self.size.y
        }
    }

    pub fn set_location(&mut self, x: f32, y: f32) {
        self.text.set_location(x, y);
    }

    pub fn apply_style(&mut self, styles: &StyleMap) {
        style::style_text(&mut self.text, styles, TEXT_COLOR, TEXT_SIZE);
    }

    /// Auto-resize lifts the size limit so the widget reports the
    /// string's natural extent.
    pub fn issue_auto_resize(&mut self) {
        if self.size == Vec2::ZERO {
            self.text.relieve_size_limit();
        }
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        self.text.draw(sink);
    }

    fn update_size_limit(&mut self) -> Result<(), Error> {
        let limit = |v: f32| if v == 0. { f32::INFINITY } else { v };
        let (w, h) = (limit(self.size.x), limit(self.size.y));
        if w.is_infinite() && h.is_infinite() {
            self.text.remove_size_limit();
            Ok(())
        } else if w.is_infinite() {
            // wrap height only: leave width unbounded
            self.text.relieve_width_limit();
            self.text.set_limiting_dimensions(f32::MAX, h)
        } else if h.is_infinite() {
            self.text.set_limiting_dimensions(w, f32::MAX)
        } else {
            self.text.set_limiting_dimensions(w, h)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::vec2;

    use super::*;
    use crate::font::{Font, Glyph};
    use crate::Rect;

    struct TestFont;

    impl Font for TestFont {
        fn glyph(&self, c: char, _size: u32) -> Glyph {
            match c {
                ' ' => Glyph {
                    advance: 5.,
                    ..Glyph::default()
                },
                _ => Glyph {
                    bounds: Rect::new(vec2(0., -8.), vec2(8., 8.)),
                    texture_rect: Rect::new(Vec2::ZERO, vec2(8., 8.)),
                    advance: 10.,
                },
            }
        }

        fn line_spacing(&self, _size: u32) -> f32 {
            12.
        }
    }

    fn styled() -> StyleMap {
        let mut styles = StyleMap::new();
        styles.insert(style::GLOBAL_FONT, Arc::new(TestFont) as crate::FontHandle);
        styles.insert(TEXT_SIZE, 18.);
        styles
    }

    #[test]
    fn reports_tight_bounds_without_explicit_size() {
        let mut area = TextArea::new();
        area.apply_style(&styled());
        area.set_text("abc");
        assert_eq!(area.width(), 28.);
        assert_eq!(area.height(), 8.);
    }

    #[test]
    fn explicit_width_wraps_the_text() {
        let mut area = TextArea::new();
        area.apply_style(&styled());
        area.set_text("aaaa aaaa");
        area.set_width(35.).unwrap();
        assert_eq!(area.width(), 35.);
        // two lines now
        assert!(area.text.character_location(5).unwrap().y > 0.);
    }

    #[test]
    fn auto_resize_lifts_the_limit() {
        let mut area = TextArea::new();
        area.apply_style(&styled());
        area.set_text("aaaa aaaa");
        area.set_width(35.).unwrap();
        area.size = Vec2::ZERO;
        area.issue_auto_resize();
        // nine glyphs back on one line: last letter at x = 75, box 8 wide
        assert_eq!(area.width(), 83.);
        assert_eq!(area.height(), 8.);
    }

    #[test]
    fn rejects_bad_sizes() {
        let mut area = TextArea::new();
        assert_eq!(area.set_width(0.), Err(Error::InvalidSize));
        assert_eq!(area.set_height(f32::NAN), Err(Error::InvalidSize));
    }
}
