//! Press/hover plumbing shared by every button-like widget.

use std::fmt;

use glam::{vec2, Vec2};
use palette::Srgba;

use crate::{
    event::Event,
    render::RenderSink,
    style::{self, StyleMap},
    Error, Rect,
};

pub const REGULAR_BACK_COLOR: &str = "button-back";
pub const REGULAR_FRONT_COLOR: &str = "button-front";
pub const HOVER_BACK_COLOR: &str = "button-hover-back";
pub const HOVER_FRONT_COLOR: &str = "button-hover-front";

#[derive(Copy, Clone, Debug)]
struct ColorPair {
    back: Srgba<u8>,
    front: Srgba<u8>,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            back: style::white(),
            front: style::white(),
        }
    }
}

pub type PressCallback = Box<dyn FnMut()>;

/// A rectangular button: an outer rect framing an inner rect inset by
/// the padding, with a regular and a hover color pair. A press fires
/// when the pointer button is released while the button is
/// highlighted.
pub struct Button {
    outer: Rect,
    inner: Rect,
    outer_color: Srgba<u8>,
    inner_color: Srgba<u8>,
    regular: ColorPair,
    hover: ColorPair,
    padding: f32,
    highlighted: bool,
    on_press: Option<PressCallback>,
}

impl Default for Button {
    fn default() -> Self {
        let regular = ColorPair::default();
        Self {
            outer: Rect::default(),
            inner: Rect::default(),
            outer_color: regular.back,
            inner_color: regular.front,
            regular,
            hover: ColorPair::default(),
            padding: 0.,
            highlighted: false,
            on_press: None,
        }
    }
}

impl Button {
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

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_location(&mut self, x: f32, y: f32) {
        self.outer.pos = vec2(x, y);
        self.inner.pos = vec2(x + self.padding, y + self.padding);
    }

    /// Width and height must be positive real numbers.
    pub fn set_size(&mut self, w: f32, h: f32) -> Result<(), Error> {
        if !(w > 0.) || !(h > 0.) || !w.is_finite() || !h.is_finite() {
            return Err(Error::InvalidSize);
        }
        self.set_frame_size(w, h);
        Ok(())
    }

    /// Sets the outer rect and keeps the inner rect inset by the
    /// padding, clamped at zero.
    pub(crate) fn set_frame_size(&mut self, w: f32, h: f32) {
        self.outer.size = vec2(w, h);
        self.inner.size = vec2(
            (w - self.padding * 2.).max(0.),
            (h - self.padding * 2.).max(0.),
        );
        self.inner.pos = self.outer.pos + Vec2::splat(self.padding);
    }

    pub fn set_press_event(&mut self, func: PressCallback) {
        self.on_press = Some(func);
    }

    pub fn press(&mut self) {
        if let Some(func) = &mut self.on_press {
            func();
        }
    }

    /// Returns whether this event pressed the button, so composite
    /// widgets can react without installing a callback.
    pub fn process_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::PointerButtonReleased { x, y, .. } => {
                if self.highlighted && self.outer.contains_pixel(x, y) {
                    self.press();
                    return true;
                }
            }
            Event::PointerMoved { x, y } => {
                if self.outer.contains_pixel(x, y) {
                    self.highlight();
                } else {
                    self.deselect();
                }
            }
            Event::PointerLeft | Event::Resized { .. } => self.deselect(),
            _ => {}
        }
        false
    }

    pub fn apply_style(&mut self, styles: &StyleMap) {
        if let Some(c) = styles.color(HOVER_BACK_COLOR) {
            self.hover.back = c;
        }
        if let Some(c) = styles.color(HOVER_FRONT_COLOR) {
            self.hover.front = c;
        }
        if let Some(c) = styles.color(REGULAR_BACK_COLOR) {
            self.regular.back = c;
        }
        if let Some(c) = styles.color(REGULAR_FRONT_COLOR) {
            self.regular.front = c;
        }
        if let Some(padding) = styles.number(style::GLOBAL_PADDING) {
            self.padding = padding;
        }
        self.outer_color = self.regular.back;
        self.inner_color = self.regular.front;
        self.set_frame_size(self.outer.size.x, self.outer.size.y);
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.fill_rect(self.outer, self.outer_color);
        sink.fill_rect(self.inner, self.inner_color);
    }

    fn highlight(&mut self) {
        self.highlighted = true;
        self.outer_color = self.hover.back;
        self.inner_color = self.hover.front;
    }

    fn deselect(&mut self) {
        self.highlighted = false;
        self.outer_color = self.regular.back;
        self.inner_color = self.regular.front;
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("outer", &self.outer)
            .field("highlighted", &self.highlighted)
            .finish_non_exhaustive()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Right
    }
}

/// A [`Button`] with a directional triangle kept centered over it.
#[derive(Debug)]
pub struct ArrowButton {
    button: Button,
    direction: Direction,
    points: [Vec2; 3],
    arrow_color: Srgba<u8>,
}

impl Default for ArrowButton {
    fn default() -> Self {
        Self {
            button: Button::default(),
            direction: Direction::default(),
            points: [Vec2::ZERO; 3],
            arrow_color: style::white(),
        }
    }
}

impl ArrowButton {
    pub fn new(direction: Direction) -> Self {
        let mut this = Self {
            direction,
            ..Self::default()
        };
        this.update_points();
        this
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.update_points();
    }

    pub fn set_arrow_color(&mut self, color: Srgba<u8>) {
        self.arrow_color = color;
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
        self.update_points();
    }

    pub fn set_size(&mut self, w: f32, h: f32) -> Result<(), Error> {
        self.button.set_size(w, h)?;
        self.update_points();
        Ok(())
    }

    pub(crate) fn set_frame_size(&mut self, w: f32, h: f32) {
        self.button.set_frame_size(w, h);
        self.update_points();
    }

    pub fn set_press_event(&mut self, func: PressCallback) {
        self.button.set_press_event(func);
    }

    pub fn process_event(&mut self, event: &Event) -> bool {
        self.button.process_event(event)
    }

    pub fn apply_style(&mut self, styles: &StyleMap) {
        self.button.apply_style(styles);
        self.update_points();
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        self.button.draw(sink);
        sink.fill_triangle(self.points, self.arrow_color);
    }

    fn update_points(&mut self) {
        let anchor = self.location() + vec2(self.width() / 2., self.height() / 2.);
        let offset = (self.width() / 2. - self.button.padding() * 2.)
            .min(self.height() / 2. - self.button.padding() * 2.)
            .max(0.);
        self.points = match self.direction {
            Direction::Down => [
                anchor + vec2(0., offset),
                anchor + vec2(-offset, -offset),
                anchor + vec2(offset, -offset),
            ],
            Direction::Left => [
                anchor + vec2(-offset, 0.),
                anchor + vec2(offset, -offset),
                anchor + vec2(offset, offset),
            ],
            Direction::Right => [
                anchor + vec2(offset, 0.),
                anchor + vec2(-offset, -offset),
                anchor + vec2(-offset, offset),
            ],
            Direction::Up => [
                anchor + vec2(0., -offset),
                anchor + vec2(-offset, offset),
                anchor + vec2(offset, offset),
            ],
        };
    }
}
