//! String-keyed style table shared by every widget in a [`Gui`].
//!
//! Widgets pull their colors, sizes and font out of the table by
//! well-known keys and silently keep their current value when a key
//! is absent, so a partial table restyles only what it names.
//!
//! [`Gui`]: crate::Gui

use std::fmt;

use ahash::AHashMap;
use palette::Srgba;

use crate::{font::FontHandle, SmartString};

/// Key for the font applied to every text-bearing widget.
pub const GLOBAL_FONT: &str = "global-font";
/// Key for the padding used between frame children.
pub const GLOBAL_PADDING: &str = "global-padding";

pub const DEFAULT_PADDING: f32 = 5.;

/// One style table entry. The union is closed: widgets only consume
/// colors, numbers and fonts.
#[derive(Clone)]
pub enum StyleValue {
    Color(Srgba<u8>),
    Number(f32),
    Font(FontHandle),
}

impl fmt::Debug for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Color(c) => f.debug_tuple("Color").field(c).finish(),
            StyleValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            StyleValue::Font(_) => f.debug_tuple("Font").finish(),
        }
    }
}

impl From<Srgba<u8>> for StyleValue {
    fn from(color: Srgba<u8>) -> Self {
        StyleValue::Color(color)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<FontHandle> for StyleValue {
    fn from(font: FontHandle) -> Self {
        StyleValue::Font(font)
    }
}

#[derive(Clone, Debug, Default)]
pub struct StyleMap {
    values: AHashMap<SmartString, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<StyleValue>) {
        self.values.insert(SmartString::from(key), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Typed lookup; `None` when the key is absent or holds another
    /// type.
    pub fn color(&self, key: &str) -> Option<Srgba<u8>> {
        match self.values.get(key) {
            Some(StyleValue::Color(c)) => Some(*c),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<f32> {
        match self.values.get(key) {
            Some(StyleValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn font(&self, key: &str) -> Option<FontHandle> {
        match self.values.get(key) {
            Some(StyleValue::Font(f)) => Some(f.clone()),
            _ => None,
        }
    }

    pub fn padding(&self) -> f32 {
        self.number(GLOBAL_PADDING).unwrap_or(DEFAULT_PADDING)
    }
}

fn rgb(hex: u32) -> Srgba<u8> {
    Srgba::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, u8::MAX)
}

pub fn white() -> Srgba<u8> {
    Srgba::new(u8::MAX, u8::MAX, u8::MAX, u8::MAX)
}

/// The stock dark-blue theme. A font still has to be added under
/// [`GLOBAL_FONT`] before text-bearing widgets can lay themselves out.
pub fn system_styles() -> StyleMap {
    use crate::widget::{button, frame, progress_bar, text_area, text_button};

    let mut styles = StyleMap::new();
    styles.insert(GLOBAL_PADDING, DEFAULT_PADDING);

    styles.insert(frame::BACKGROUND_COLOR, rgb(0x51_51_76));
    styles.insert(frame::BODY_COLOR, rgb(0x18_18_40));
    styles.insert(frame::TITLE_BAR_COLOR, rgb(0x08_08_22));
    styles.insert(frame::TITLE_COLOR, white());
    styles.insert(frame::TITLE_SIZE, 20.);

    styles.insert(button::REGULAR_BACK_COLOR, rgb(0x4B_46_15));
    styles.insert(button::REGULAR_FRONT_COLOR, rgb(0x30_2C_05));
    styles.insert(button::HOVER_BACK_COLOR, rgb(0x4B_46_15));
    styles.insert(button::HOVER_FRONT_COLOR, rgb(0x77_6A_45));

    styles.insert(text_button::TEXT_COLOR, white());
    styles.insert(text_button::TEXT_SIZE, 20.);

    styles.insert(text_area::TEXT_COLOR, white());
    styles.insert(text_area::TEXT_SIZE, 18.);

    styles.insert(progress_bar::OUTER_COLOR, rgb(0x10_10_10));
    styles.insert(progress_bar::INNER_BACK_COLOR, rgb(0x40_00_00));
    styles.insert(progress_bar::INNER_FRONT_COLOR, rgb(0xA0_A0_00));
    styles.insert(progress_bar::PADDING, 2.);

    styles
}

/// Applies font, character size and color style entries to a text
/// object, keeping whatever is already set for absent keys.
pub(crate) fn style_text(
    text: &mut crate::text::Text,
    styles: &StyleMap,
    color_key: &str,
    size_key: &str,
) {
    if let Some(font) = styles.font(GLOBAL_FONT) {
        text.assign_font(font);
    }
    if let Some(size) = styles.number(size_key) {
        text.set_character_size(size as u32);
    }
    if let Some(color) = styles.color(color_key) {
        text.set_color(color);
    }
}
