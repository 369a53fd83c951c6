//! Horizontal fill-fraction bar.

use glam::{vec2, Vec2};
use palette::Srgba;

use crate::{
    render::RenderSink,
    style::{self, StyleMap},
    Error, Rect,
};

pub const OUTER_COLOR: &str = "progress-bar-outer-color";
pub const INNER_FRONT_COLOR: &str = "progress-bar-inner-front-color";
pub const INNER_BACK_COLOR: &str = "progress-bar-inner-back-color";
pub const PADDING: &str = "progress-bar-padding";

/// Outer frame with an inset back rect, a front rect over it scaled
/// horizontally by the fill fraction.
#[derive(Debug)]
pub struct ProgressBar {
    outer: Rect,
    inner_back: Rect,
    inner_front: Rect,
    outer_color: Srgba<u8>,
    inner_back_color: Srgba<u8>,
    inner_front_color: Srgba<u8>,
    fill_amount: f32,
    padding: f32,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            outer: Rect::default(),
            inner_back: Rect::default(),
            inner_front: Rect::default(),
            outer_color: style::white(),
            inner_back_color: style::white(),
            inner_front_color: style::white(),
            fill_amount: 0.,
            padding: 0.,
        }
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Vec2 {
        self.outer.pos
    }

    pub fn width(&self) -> f32 {
        self.outer.size.x
    }

    pub fn height(&self) -> f32 {
        self.outer.size.y
    }

    pub fn set_location(&mut self, x: f32, y: f32) {
        self.outer.pos = vec2(x, y);
        self.update_inner_positions();
    }

    pub fn set_size(&mut self, w: f32, h: f32) {
        self.outer.size = vec2(w, h);
        self.update_inner_sizes();
    }

    pub fn fill_amount(&self) -> f32 {
        self.fill_amount
    }

    /// The fill must lie in `[0, 1]`; anything else is rejected with
    /// the bar unchanged.
    pub fn set_fill_amount(&mut self, fill: f32) -> Result<(), Error> {
        if !(0. ..=1.).contains(&fill) {
            return Err(Error::FillOutOfRange(fill));
        }
        self.fill_amount = fill;
        self.update_inner_sizes();
        Ok(())
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
        self.update_inner_sizes();
    }

    pub fn apply_style(&mut self, styles: &StyleMap) {
        if let Some(padding) = styles.number(PADDING) {
            self.padding = padding;
        }
        if let Some(c) = styles.color(OUTER_COLOR) {
            self.outer_color = c;
        }
        if let Some(c) = styles.color(INNER_FRONT_COLOR) {
            self.inner_front_color = c;
        }
        if let Some(c) = styles.color(INNER_BACK_COLOR) {
            self.inner_back_color = c;
        }
        self.update_inner_positions();
        self.update_inner_sizes();
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.fill_rect(self.outer, self.outer_color);
        sink.fill_rect(self.inner_back, self.inner_back_color);
        sink.fill_rect(self.inner_front, self.inner_front_color);
    }

    /// The padding deactivates when the bar is too small to hold it.
    fn active_padding(&self) -> f32 {
        if self.width() < self.padding || self.height() < self.padding {
            0.
        } else {
            self.padding
        }
    }

    fn update_inner_positions(&mut self) {
        let inset = self.outer.pos + Vec2::splat(self.active_padding());
        self.inner_back.pos = inset;
        self.inner_front.pos = inset;
    }

    fn update_inner_sizes(&mut self) {
        let pad = self.active_padding();
        let inner = self.outer.size - Vec2::splat(pad * 2.);
        self.inner_back.size = inner;
        self.inner_front.size = vec2(inner.x * self.fill_amount, inner.y);
        self.update_inner_positions();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_scales_the_front_rect() {
        let mut bar = ProgressBar::new();
        bar.set_padding(2.);
        bar.set_size(104., 20.);
        bar.set_fill_amount(0.5).unwrap();
        assert_eq!(bar.inner_back.size, vec2(100., 16.));
        assert_eq!(bar.inner_front.size, vec2(50., 16.));
        assert_eq!(bar.inner_front.pos, vec2(2., 2.));
    }

    #[test]
    fn out_of_range_fill_is_rejected_without_change() {
        let mut bar = ProgressBar::new();
        bar.set_size(100., 10.);
        bar.set_fill_amount(0.25).unwrap();
        let front_before = bar.inner_front;

        assert_eq!(bar.set_fill_amount(1.5), Err(Error::FillOutOfRange(1.5)));
        assert_eq!(bar.set_fill_amount(-0.1), Err(Error::FillOutOfRange(-0.1)));
        assert!(bar.set_fill_amount(f32::NAN).is_err());
        assert_eq!(bar.fill_amount(), 0.25);
        assert_eq!(bar.inner_front, front_before);
    }

    #[test]
    fn padding_deactivates_on_tiny_bars() {
        let mut bar = ProgressBar::new();
        bar.set_padding(8.);
        bar.set_size(6., 6.);
        assert_eq!(bar.inner_back.size, vec2(6., 6.));
    }
}
