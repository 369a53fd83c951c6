//! Button with a centered text label.

use glam::{vec2, Vec2};

use crate::{
    event::Event,
    render::RenderSink,
    style::{self, StyleMap},
    text::Text,
    widget::button::Button,
    Error,
};

pub const TEXT_COLOR: &str = "text-button-text-color";
pub const TEXT_SIZE: &str = "text-button-text-size";

#[derive(Debug, Default)]
pub struct TextButton {
    button: Button,
    text: Text,
}

impl TextButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_string(&mut self, s: &str) {
        self.text.set_string(s);
        self.update_string_position();
    }

    pub fn string(&self) -> String {
        self.text.string()
    }

    pub fn location(&self) -> Vec2 {
        self.button.location()
    }

    pub fn width(&self) -> f32 {
        self.button.width()
    }

    pub fn height(&self) -> f32 {
        self.button.height()
    }

    pub fn set_location(&mut self, x: f32, y: f32) {
        self.button.set_location(x, y);
        self.update_string_position();
    }

    pub fn set_size(&mut self, w: f32, h: f32) -> Result<(), Error> {
        self.button.set_size(w, h)?;
        let padding = self.button.padding();
        let limit = |v: f32| (v - 2. * padding).max(f32::MIN_POSITIVE);
        self.text.set_limiting_dimensions(limit(w), limit(h))?;
        self.update_string_position();
        Ok(())
    }

    pub fn set_press_event(&mut self, func: Box<dyn FnMut()>) {
        self.button.set_press_event(func);
    }

    pub fn process_event(&mut self, event: &Event) -> bool {
        self.button.process_event(event)
    }

    pub fn apply_style(&mut self, styles: &StyleMap) {
        style::style_text(&mut self.text, styles, TEXT_COLOR, TEXT_SIZE);
        self.button.apply_style(styles);
        self.update_string_position();
    }

    /// Takes the label's unbounded size plus four paddings on each
    /// axis, unless an explicit size has been set.
    pub fn issue_auto_resize(&mut self) {
        if self.width() != 0. || self.height() != 0. {
            return;
        }
        self.text.remove_size_limit();
        let padding = self.button.padding();
        self.button.set_frame_size(
            self.text.width() + padding * 4.,
            self.text.height() + padding * 4.,
        );
        self.update_string_position();
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        self.button.draw(sink);
        self.text.draw(sink);
    }

    fn update_string_position(&mut self) {
        if self.text.width() == 0. || self.text.height() == 0. {
            return;
        }
        let padding = self.button.padding();
        let width_diff = self.width() - padding * 2. - self.text.width();
        let height_diff = self.height() - padding * 2. - self.text.height();
        let offset = vec2(
            (width_diff / 2.).max(0.),
            (height_diff / 2.).max(0.),
        );
        self.text.set_location(
            self.location().x + padding + offset.x,
            self.location().y + padding + offset.y,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec2;

    use super::*;
    use crate::font::{Font, Glyph};
    use crate::Rect;

    struct TestFont;

    impl Font for TestFont {
        fn glyph(&self, _c: char, _size: u32) -> Glyph {
            Glyph {
                bounds: Rect::new(vec2(0., -8.), vec2(8., 8.)),
                texture_rect: Rect::new(Vec2::ZERO, vec2(8., 8.)),
                advance: 10.,
            }
        }

        fn line_spacing(&self, _size: u32) -> f32 {
            12.
        }
    }

    fn styled_button(label: &str) -> TextButton {
        let mut styles = StyleMap::new();
        styles.insert(style::GLOBAL_FONT, Arc::new(TestFont) as crate::FontHandle);
        styles.insert(TEXT_SIZE, 20.);
        styles.insert(style::GLOBAL_PADDING, 5.);

        let mut button = TextButton::new();
        button.apply_style(&styles);
        button.set_string(label);
        button
    }

    #[test]
    fn auto_resize_takes_label_plus_four_paddings() {
        let mut button = styled_button("abcd");
        // label is 38x8: three advances of 10 plus an 8px glyph box
        button.issue_auto_resize();
        assert_eq!(button.width(), 38. + 20.);
        assert_eq!(button.height(), 8. + 20.);
    }

    #[test]
    fn auto_resize_keeps_an_explicit_size() {
        let mut button = styled_button("ab");
        button.set_size(100., 40.).unwrap();
        button.issue_auto_resize();
        assert_eq!(button.width(), 100.);
        assert_eq!(button.height(), 40.);
    }

    #[test]
    fn label_stays_centered() {
        let mut button = styled_button("abcd");
        button.issue_auto_resize();
        button.set_location(10., 20.);
        // the auto-sized button leaves two paddings around the label
        assert_eq!(button.text.location(), vec2(20., 30.));

        button.set_size(98., 48.).unwrap();
        // half of 98 - 38 horizontally, half of 48 - 8 vertically
        assert_eq!(button.text.location(), vec2(40., 40.));
    }
}
