//! Retained-mode widget toolkit core.
//!
//! The crate covers the layout half of a GUI: shaping strings into
//! positioned glyph quads with greedy word wrap ([`Text`]), and
//! flowing widgets into lines inside resizable frames ([`Gui`],
//! [`widget::Frame`]). Rasterization and font loading stay on the
//! application side behind the [`RenderSink`] and [`Font`] traits.
//!
//! Widgets live in a [`Gui`] arena keyed by [`WidgetId`]; frames
//! reference their children by id. A typical frame is assembled with
//! [`Gui::add`] and [`Gui::add_child`], styled via [`StyleMap`], and
//! laid out with [`Gui::update_geometry`].

mod error;
mod event;
mod font;
mod gui;
mod quad;
mod rect;
mod render;
pub mod style;
pub mod text;
pub mod widget;

pub use palette::Srgba;

pub type SmartString = smartstring::SmartString<smartstring::LazyCompact>;

pub use error::Error;
pub use event::{Event, Key, MouseButton};
pub use font::{Font, FontHandle, Glyph};
pub use gui::{Gui, WidgetId};
pub use quad::{CharacterQuad, Vertex};
pub use rect::Rect;
pub use render::{RenderSink, TextureId};
pub use style::{system_styles, StyleMap, StyleValue};
pub use text::Text;
pub use widget::{
    ArrowButton, Button, Child, ClickResponse, Direction, Frame, ImageWidget, OptionsSlider,
    ProgressBar, Spacer, TextArea, TextButton, Widget,
};
