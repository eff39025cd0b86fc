//! Axis-aligned integer rectangles
//!
//! Edges are half-open: a rect covers `x..x + w` by `y..y + h`, so two rects
//! that merely share an edge do not overlap.

use glam::IVec2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Shift by a velocity
    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// True when the interiors intersect. Empty rects never overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
        assert!(a.overlaps(&Rect::new(2, 2, 2, 2)));
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(!a.overlaps(&Rect::new(3, 3, 0, 4)));
    }

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(10, 20, 5, 5);
        assert!(r.contains_point(IVec2::new(10, 20)));
        assert!(r.contains_point(IVec2::new(14, 24)));
        assert!(!r.contains_point(IVec2::new(15, 24)));
        assert!(!r.contains_point(IVec2::new(14, 25)));
    }

    #[test]
    fn test_edges_and_translate() {
        let mut r = Rect::new(1, 2, 3, 4);
        r.translate(IVec2::new(-1, 8));
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (0, 3, 10, 14));
        assert_eq!(r.center(), IVec2::new(1, 12));
    }
}
