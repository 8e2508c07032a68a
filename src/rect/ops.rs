use log::trace;

use super::Rect;

impl Rect {
    /// Returns a copy translated by `(dx, dy)`; size is unchanged.
    pub fn moved(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Translates the rect in place.
    pub fn move_in_place(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Returns a copy grown by `(dx, dy)`, re-centered on the original
    /// center. Negative amounts shrink.
    pub fn inflated(&self, dx: i32, dy: i32) -> Rect {
        let mut rect = *self;
        rect.inflate_in_place(dx, dy);
        rect
    }

    /// Grows the rect by `(dx, dy)` in place, keeping its center.
    pub fn inflate_in_place(&mut self, dx: i32, dy: i32) {
        // The center must be read before the size changes.
        let center = self.center();
        self.w += dx;
        self.h += dy;
        self.set_center(center);
    }

    /// Whether `other` lies entirely inside this rect. Shared edges count
    /// as contained. Degenerate sizes follow the edge inequalities
    /// literally.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }

    /// Moves the rect so it lies within `other`, never resizing it.
    ///
    /// The four edges are clamped one after another through the derived
    /// setters, so the `right` and `bottom` steps reposition `x` and `y`
    /// rather than shrink the rect. A rect larger than `other` on either
    /// axis cannot satisfy all four clamps; it ends up re-centered on
    /// `other` instead, size unchanged.
    pub fn clamp_in_place(&mut self, other: &Rect) {
        self.set_left(self.x.max(other.x));
        self.set_top(self.y.max(other.y));
        self.set_right(self.right().min(other.right()));
        self.set_bottom(self.bottom().min(other.bottom()));

        if !other.contains_rect(self) {
            trace!(
                "{}x{} rect larger than {}x{} bound, re-centering",
                self.w, self.h, other.w, other.h
            );
            self.set_center(other.center());
        }
    }

    /// Returns a copy clamped into `other`.
    pub fn clamped(&self, other: &Rect) -> Rect {
        let mut rect = *self;
        rect.clamp_in_place(other);
        rect
    }

    /// Shrinks the rect to its intersection with `other`, in place.
    ///
    /// When the rects do not overlap the size collapses to `(0, 0)`; the
    /// position of an empty result is a leftover of the computation and
    /// not meaningful.
    pub fn clip_in_place(&mut self, other: &Rect) {
        let x = self.x.max(other.x);
        let w = self.right().min(other.right()) - x;
        let y = self.y.max(other.y);
        let h = self.bottom().min(other.bottom()) - y;

        self.x = x;
        self.y = y;
        if w <= 0 || h <= 0 {
            trace!("empty intersection, collapsing to zero size");
            self.w = 0;
            self.h = 0;
        } else {
            self.w = w;
            self.h = h;
        }
    }

    /// Returns the intersection of the two rects.
    pub fn clipped(&self, other: &Rect) -> Rect {
        let mut rect = *self;
        rect.clip_in_place(other);
        rect
    }

    /// Returns the smallest rect covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let mut rect = *self;
        rect.union_in_place(other);
        rect
    }

    /// Grows the rect to cover `other` as well, in place.
    pub fn union_in_place(&mut self, other: &Rect) {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        self.w = self.right().max(other.right()) - x;
        self.h = self.bottom().max(other.bottom()) - y;
        self.x = x;
        self.y = y;
    }
}
