//! Input events delivered by the application shell.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard key carried by [`Event::KeyReleased`].
///
/// Only keys the built-in widgets react to get named variants;
/// everything else passes through as a raw code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Return,
    Escape,
    Space,
    Other(u32),
}

/// An input event, forwarded verbatim from the windowing layer.
///
/// Coordinates are integer physical pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    PointerMoved { x: i32, y: i32 },
    PointerButtonPressed { button: MouseButton, x: i32, y: i32 },
    PointerButtonReleased { button: MouseButton, x: i32, y: i32 },
    PointerLeft,
    Resized { width: u32, height: u32 },
    KeyReleased { key: Key },
    Closed,
}
