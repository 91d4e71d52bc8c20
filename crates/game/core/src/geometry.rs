//! Screen-space geometry shared by fighters and projectiles.
//!
//! Coordinates are pixels with the origin at the top-left of the arena and
//! `y` growing downwards.
use std::fmt;

/// Pixel position of a sprite's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle used for hitboxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square sprite anchored at `origin`.
    pub const fn sprite(origin: Point, size: i32) -> Self {
        Self::new(origin.x, origin.y, size, size)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub const fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Moves every edge inwards by `dx` horizontally and `dy` vertically.
    #[must_use]
    pub const fn shrink(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            self.width - 2 * dx,
            self.height - 2 * dy,
        )
    }

    /// Moves every edge outwards by `dx` horizontally and `dy` vertically.
    #[must_use]
    pub const fn grow(self, dx: i32, dy: i32) -> Self {
        self.shrink(-dx, -dy)
    }
}

/// Horizontal direction a fighter faces and its projectiles travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    /// `+1` when facing right, `-1` when facing left.
    pub const fn sign(self) -> i32 {
        match self {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn shrink_and_grow_are_symmetric() {
        let sprite = Rect::sprite(Point::new(100, 200), 100);
        let body = sprite.shrink(20, 20);
        assert_eq!(body, Rect::new(120, 220, 60, 60));
        assert_eq!(body.grow(20, 20), sprite);
    }

    #[test]
    fn degenerate_rectangles_never_intersect() {
        let collapsed = Rect::sprite(Point::new(0, 0), 100).shrink(50, 50);
        assert!(collapsed.is_empty());
        assert!(!collapsed.intersects(&Rect::new(-10, -10, 200, 200)));
    }
}
