//! Arrow-stepped selector over a fixed list of options.

use std::fmt;

use glam::{vec2, Vec2};
use palette::Srgba;

use crate::{
    event::Event,
    render::RenderSink,
    style::{self, StyleMap},
    text::Text,
    widget::{
        button::{self, ArrowButton, Direction},
        text_button,
    },
    Error, Rect, SmartString,
};

/// Two arrow buttons flanking the currently selected option's label.
/// Lays out horizontally or vertically depending on which dimension
/// is longer.
pub struct OptionsSlider {
    left_arrow: ArrowButton,
    right_arrow: ArrowButton,
    back: Rect,
    front: Rect,
    back_color: Srgba<u8>,
    front_color: Srgba<u8>,
    text: Text,
    options: Vec<SmartString>,
    selected: usize,
    padding: f32,
    size: Vec2,
    on_change: Option<Box<dyn FnMut()>>,
}

impl Default for OptionsSlider {
    fn default() -> Self {
        Self {
            left_arrow: ArrowButton::new(Direction::Left),
            right_arrow: ArrowButton::new(Direction::Right),
            back: Rect::default(),
            front: Rect::default(),
            back_color: style::white(),
            front_color: style::white(),
            text: Text::new(),
            options: Vec::new(),
            selected: 0,
            padding: 0.,
            size: Vec2::ZERO,
            on_change: None,
        }
    }
}

impl OptionsSlider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_options(&mut self, options: Vec<SmartString>) {
        self.options = options;
        self.selected = 0;
        if let Some(first) = self.options.first() {
            self.text.set_string(first);
            self.recenter_text();
        } else {
            self.text.set_string("");
        }
    }

    pub fn options(&self) -> &[SmartString] {
        &self.options
    }

    pub fn select_option(&mut self, index: usize) -> Result<(), Error> {
        let option = self.options.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.options.len(),
        })?;
        self.selected = index;
        self.text.set_string(option);
        self.recenter_text();
        Ok(())
    }

    pub fn selected_option_index(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected).map(|s| s.as_str())
    }

    pub fn set_option_change_event(&mut self, func: Box<dyn FnMut()>) {
        self.on_change = Some(func);
    }

    pub fn location(&self) -> Vec2 {
        self.left_arrow.location()
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    fn is_horizontal(&self) -> bool {
        self.size.x >= self.size.y
    }

    pub fn set_location(&mut self, x: f32, y: f32) {
        self.left_arrow.set_location(x, y);
        if self.is_horizontal() {
            self.back.pos = vec2(x + self.left_arrow.width(), y);
            self.front.pos = vec2(x + self.left_arrow.width(), y + self.padding);
            self.right_arrow
                .set_location(x + self.left_arrow.width() + self.back.size.x, y);
        } else {
            self.back.pos = vec2(x, y + self.left_arrow.height());
            self.front.pos = vec2(x + self.padding, y + self.left_arrow.height());
            self.right_arrow
                .set_location(x, y + self.left_arrow.height() + self.back.size.y);
        }
        self.recenter_text();
    }

    /// Zero dimensions are ignored; the arrows take the short
    /// dimension squared and the track gets the remainder.
    pub fn set_size(&mut self, w: f32, h: f32) {
        if w <= 0. || h <= 0. {
            return;
        }
        self.size = vec2(w, h);
        let min_dim = w.min(h);
        self.left_arrow.set_frame_size(min_dim, min_dim);
        self.right_arrow.set_frame_size(min_dim, min_dim);

        if self.is_horizontal() {
            let long_dim = (w - h * 2.).max(0.);
            self.back.size = vec2(long_dim, h);
            self.front.size = vec2(long_dim, (h - self.padding * 2.).max(0.));
        } else {
            let long_dim = (h - w * 2.).max(0.);
            self.back.size = vec2(w, long_dim);
            self.front.size = vec2((w - self.padding * 2.).max(0.), long_dim);
        }
        let loc = self.location();
        self.set_location(loc.x, loc.y);
        if self.front.size.x > 0. && self.front.size.y > 0. {
            // guarded positive, cannot fail
            let _ = self
                .text
                .set_limiting_dimensions(self.front.size.x, self.front.size.y);
        }
        self.recenter_text();
    }

    pub fn process_event(&mut self, event: &Event) {
        if self.left_arrow.process_event(event) && self.selected > 0 {
            // selected is in range by construction
            let _ = self.select_option(self.selected - 1);
            self.fire_change();
        }
        if self.right_arrow.process_event(event) && self.selected + 1 < self.options.len() {
            let _ = self.select_option(self.selected + 1);
            self.fire_change();
        }
    }

    pub fn apply_style(&mut self, styles: &StyleMap) {
        self.left_arrow.apply_style(styles);
        self.right_arrow.apply_style(styles);
        style::style_text(
            &mut self.text,
            styles,
            text_button::TEXT_COLOR,
            text_button::TEXT_SIZE,
        );
        if let Some(padding) = styles.number(style::GLOBAL_PADDING) {
            self.padding = padding;
        }
        if let Some(c) = styles.color(button::REGULAR_FRONT_COLOR) {
            self.front_color = c;
        }
        if let Some(c) = styles.color(button::REGULAR_BACK_COLOR) {
            self.back_color = c;
        }
    }

    /// Sizes the slider to hold its widest option.
    pub fn issue_auto_resize(&mut self) {
        if self.size != Vec2::ZERO {
            return;
        }
        let mut extent = Vec2::ZERO;
        for option in &self.options {
            let measured = self.text.measure(option);
            extent = extent.max(measured);
        }
        self.text.remove_size_limit();
        self.set_size(
            extent.x + 6. * self.padding,
            extent.y + 2. * self.padding,
        );
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        sink.fill_rect(self.back, self.back_color);
        sink.fill_rect(self.front, self.front_color);
        self.text.draw(sink);
        self.left_arrow.draw(sink);
        self.right_arrow.draw(sink);
    }

    fn fire_change(&mut self) {
        if let Some(func) = &mut self.on_change {
            func();
        }
    }

    fn recenter_text(&mut self) {
        let width_diff = self.front.size.x - self.text.width();
        let height_diff = self.front.size.y - self.text.height();
        self.text.set_location(
            self.front.pos.x + (width_diff / 2.).max(0.),
            self.front.pos.y + (height_diff / 2.).max(0.),
        );
    }
}

impl fmt::Debug for OptionsSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionsSlider")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
