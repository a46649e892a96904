/// A rectangle representing a window's position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A point in screen or client coordinates, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point expressed relative to `origin`.
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from Win32-style left/top/right/bottom edges.
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns whether the point lies inside the rectangle.
    ///
    /// Left and top edges are inclusive, right and bottom exclusive,
    /// the same convention `PtInRect` uses.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Moves each edge inward by the given amounts.
    ///
    /// Negative values grow the rectangle on that side.
    pub fn inset(&self, left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        Rect::from_ltrb(
            self.left() + left,
            self.top() + top,
            self.right() - right,
            self.bottom() - bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltrb_roundtrip() {
        // Arrange / Act
        let rect = Rect::from_ltrb(10, 20, 110, 70);

        // Assert
        assert_eq!(rect, Rect::new(10, 20, 100, 50));
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
    }

    #[test]
    fn contains_is_half_open() {
        // Arrange
        let rect = Rect::from_ltrb(700, 0, 732, 32);

        // Assert
        assert!(rect.contains(Point::new(700, 0)));
        assert!(rect.contains(Point::new(731, 31)));
        assert!(!rect.contains(Point::new(732, 16)));
        assert!(!rect.contains(Point::new(716, 32)));
    }

    #[test]
    fn inset_moves_edges_inward() {
        // Arrange
        let rect = Rect::from_ltrb(0, 0, 800, 600);

        // Act
        let inner = rect.inset(8, -1, 8, 8);

        // Assert
        assert_eq!(inner, Rect::from_ltrb(8, -1, 792, 592));
    }
}
