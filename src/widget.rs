//! The widget kinds and their common dispatch surface.

use glam::Vec2;

use crate::{event::Event, render::RenderSink, style::StyleMap};

pub mod button;
pub mod frame;
pub mod image;
pub mod options_slider;
pub mod progress_bar;
pub mod text_area;
pub mod text_button;

pub use button::{ArrowButton, Button, Direction};
pub use frame::{Child, ClickResponse, Frame, Spacer};
pub use image::ImageWidget;
pub use options_slider::OptionsSlider;
pub use progress_bar::ProgressBar;
pub use text_area::TextArea;
pub use text_button::TextButton;

/// A widget stored in the [`Gui`](crate::Gui) arena.
///
/// Frames observe their children through ids, so tree-walking
/// operations (layout, event dispatch over subtrees, drawing) live on
/// [`Frame`] and [`Gui`](crate::Gui); this enum dispatches the
/// per-widget pieces.
#[derive(Debug)]
pub enum Widget {
    Frame(Frame),
    Button(Button),
    TextButton(TextButton),
    TextArea(TextArea),
    OptionsSlider(OptionsSlider),
    ProgressBar(ProgressBar),
    Image(ImageWidget),
}

impl Widget {
    pub fn location(&self) -> Vec2 {
        match self {
            Widget::Frame(w) => w.location(),
            Widget::Button(w) => w.location(),
            Widget::TextButton(w) => w.location(),
            Widget::TextArea(w) => w.location(),
            Widget::OptionsSlider(w) => w.location(),
            Widget::ProgressBar(w) => w.location(),
            Widget::Image(w) => w.location(),
        }
    }

    pub fn width(&self) -> f32 {
        match self {
            Widget::Frame(w) => w.width(),
            Widget::Button(w) => w.width(),
            Widget::TextButton(w) => w.width(),
            Widget::TextArea(w) => w.width(),
            Widget::OptionsSlider(w) => w.width(),
            Widget::ProgressBar(w) => w.width(),
            Widget::Image(w) => w.width(),
        }
    }

    pub fn height(&self) -> f32 {
        match self {
            Widget::Frame(w) => w.height(),
            Widget::Button(w) => w.height(),
            Widget::TextButton(w) => w.height(),
            Widget::TextArea(w) => w.height(),
            Widget::OptionsSlider(w) => w.height(),
            Widget::ProgressBar(w) => w.height(),
            Widget::Image(w) => w.height(),
        }
    }

    pub fn set_location(&mut self, x: f32, y: f32) {
        match self {
            Widget::Frame(w) => w.set_location(x, y),
            Widget::Button(w) => w.set_location(x, y),
            Widget::TextButton(w) => w.set_location(x, y),
            Widget::TextArea(w) => w.set_location(x, y),
            Widget::OptionsSlider(w) => w.set_location(x, y),
            Widget::ProgressBar(w) => w.set_location(x, y),
            Widget::Image(w) => w.set_location(x, y),
        }
    }

    pub fn apply_style(&mut self, styles: &StyleMap) {
        match self {
            Widget::Frame(w) => w.apply_style(styles),
            Widget::Button(w) => w.apply_style(styles),
            Widget::TextButton(w) => w.apply_style(styles),
            Widget::TextArea(w) => w.apply_style(styles),
            Widget::OptionsSlider(w) => w.apply_style(styles),
            Widget::ProgressBar(w) => w.apply_style(styles),
            Widget::Image(_) => {}
        }
    }

    /// Event entry point for leaf widgets; frames dispatch through
    /// [`Gui::process_event`](crate::Gui::process_event) since their
    /// children live in the arena.
    pub(crate) fn process_event(&mut self, event: &Event) {
        match self {
            Widget::Frame(_) => {}
            Widget::Button(w) => {
                w.process_event(event);
            }
            Widget::TextButton(w) => {
                w.process_event(event);
            }
            Widget::OptionsSlider(w) => w.process_event(event),
            Widget::TextArea(_) | Widget::ProgressBar(_) | Widget::Image(_) => {}
        }
    }

    pub(crate) fn issue_auto_resize(&mut self) {
        match self {
            // frames recurse through the arena instead
            Widget::Frame(_) => {}
            Widget::TextButton(w) => w.issue_auto_resize(),
            Widget::TextArea(w) => w.issue_auto_resize(),
            Widget::OptionsSlider(w) => w.issue_auto_resize(),
            Widget::Button(_) | Widget::ProgressBar(_) | Widget::Image(_) => {}
        }
    }

    pub(crate) fn draw(&self, sink: &mut dyn RenderSink) {
        match self {
            // frames draw through the arena
            Widget::Frame(_) => {}
            Widget::Button(w) => w.draw(sink),
            Widget::TextButton(w) => w.draw(sink),
            Widget::TextArea(w) => w.draw(sink),
            Widget::OptionsSlider(w) => w.draw(sink),
            Widget::ProgressBar(w) => w.draw(sink),
            Widget::Image(w) => w.draw(sink),
        }
    }

    pub fn as_frame(&self) -> Option<&Frame> {
        match self {
            Widget::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn as_frame_mut(&mut self) -> Option<&mut Frame> {
        match self {
            Widget::Frame(frame) => Some(frame),
            _ => None,
        }
    }
}

macro_rules! impl_from_widget {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(impl From<$ty> for Widget {
            fn from(w: $ty) -> Self {
                Widget::$variant(w)
            }
        })*
    };
}

impl_from_widget! {
    Frame(Frame),
    Button(Button),
    TextButton(TextButton),
    TextArea(TextArea),
    OptionsSlider(OptionsSlider),
    ProgressBar(ProgressBar),
    Image(ImageWidget),
}
