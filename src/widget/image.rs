//! Scaled texture region.

use glam::{vec2, Vec2};

use crate::{
    render::{RenderSink, TextureId},
    Rect,
};

/// Displays a region of an application-managed texture. The widget's
/// size is the texture region scaled per axis; `set_size` adjusts the
/// scale rather than cropping.
#[derive(Debug)]
pub struct ImageWidget {
    texture: TextureId,
    texture_rect: Rect,
    pos: Vec2,
    scale: Vec2,
}

impl ImageWidget {
    pub fn new(texture: TextureId, texture_rect: Rect) -> Self {
        Self {
            texture,
            texture_rect,
            pos: Vec2::ZERO,
            scale: Vec2::ONE,
        }
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    pub fn assign_texture(&mut self, texture: TextureId, texture_rect: Rect) {
        self.texture = texture;
        self.texture_rect = texture_rect;
    }

    pub fn reset_texture_rect(&mut self, texture_rect: Rect) {
        self.texture_rect = texture_rect;
    }

    pub fn location(&self) -> Vec2 {
        self.pos
    }

    pub fn set_location(&mut self, x: f32, y: f32) {
        self.pos = vec2(x, y);
    }

    pub fn width(&self) -> f32 {
        self.texture_rect.size.x * self.scale.x
    }

    pub fn height(&self) -> f32 {
        self.texture_rect.size.y * self.scale.y
    }

    pub fn set_size(&mut self, w: f32, h: f32) {
        if self.texture_rect.size.x > 0. && self.texture_rect.size.y > 0. {
            self.scale = vec2(w / self.texture_rect.size.x, h / self.texture_rect.size.y);
        }
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        let dest = Rect::new(self.pos, vec2(self.width(), self.height()));
        sink.image(self.texture, dest, self.texture_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_texture_rect_times_scale() {
        let mut image = ImageWidget::new(TextureId(1), Rect::new(Vec2::ZERO, vec2(32., 16.)));
        assert_eq!(image.width(), 32.);
        image.set_size(64., 64.);
        assert_eq!(image.width(), 64.);
        assert_eq!(image.height(), 64.);
        assert_eq!(image.scale, vec2(2., 4.));
    }
}
