use glam::{vec2, Vec2};

/// A rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rect {
    /// The position of the top-left corner
    /// of this rectangle.
    pub pos: Vec2,
    /// The side lengths of this rectangle.
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn offset(self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    pub fn right(self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn contains(self, pos: Vec2) -> bool {
        pos.x >= self.pos.x
            && pos.y >= self.pos.y
            && pos.x <= (self.pos.x + self.size.x)
            && pos.y <= (self.pos.y + self.size.y)
    }

    /// Whether an integer pixel coordinate (as carried by input
    /// events) falls inside the rectangle.
    pub fn contains_pixel(self, x: i32, y: i32) -> bool {
        self.contains(vec2(x as f32, y as f32))
    }
}
