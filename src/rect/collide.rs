use super::Rect;

impl Rect {
    /// Whether the point `(x, y)` falls inside the rect.
    ///
    /// The left and top edges are inclusive; the right and bottom edges
    /// are not. A rect with zero or negative size contains no points.
    pub fn collide_point(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x + self.w && self.y <= y && y < self.y + self.h
    }

    /// Whether the two rects overlap.
    ///
    /// Shared edges are not considered colliding: the half-open spans
    /// `[x, right)` and `[y, bottom)` must overlap on both axes.
    pub fn collide_rect(&self, other: &Rect) -> bool {
        !(other.x >= self.right()
            || other.right() <= self.x
            || other.y >= self.bottom()
            || other.bottom() <= self.y)
    }
}
