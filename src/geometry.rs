//! Integer rectangle algebra used to find the visible part of a window.

/// Axis-aligned rectangle in integer pixel coordinates.
///
/// `right` and `bottom` are exclusive. A rectangle whose width or height is
/// not positive is empty and never survives into a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin, e.g. the bounds of a frame.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturate(width), saturate(height))
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Area in pixels, zero for empty rectangles.
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            i64::from(self.width()) * i64::from(self.height())
        }
    }

    pub fn contains(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }

    /// Overlap of two rectangles. Rectangles that only share an edge do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let overlap = Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        (!overlap.is_empty()).then_some(overlap)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersect(other).is_some()
    }
}

fn saturate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Remove every rectangle in `covers` from `base`.
///
/// Covers are applied in the order given. Each rectangle of the running
/// result that a cover overlaps is replaced by the pieces above, below, left
/// and right of the overlap, in that order; the left and right pieces span only
/// the overlap's rows. The returned rectangles are pairwise disjoint and their
/// union is exactly `base` minus the union of `covers`.
pub fn subtract(base: Rect, covers: &[Rect]) -> Vec<Rect> {
    let mut result = if base.is_empty() { Vec::new() } else { vec![base] };

    for cover in covers {
        let mut next = Vec::with_capacity(result.len() + 3);
        for piece in result {
            match piece.intersect(cover) {
                None => next.push(piece),
                Some(hole) => split_around(piece, hole, &mut next),
            }
        }
        result = next;
    }

    result.retain(|r| !r.is_empty());
    result
}

fn split_around(piece: Rect, hole: Rect, out: &mut Vec<Rect>) {
    if piece.top < hole.top {
        out.push(Rect::new(piece.left, piece.top, piece.right, hole.top));
    }
    if hole.bottom < piece.bottom {
        out.push(Rect::new(piece.left, hole.bottom, piece.right, piece.bottom));
    }
    if piece.left < hole.left {
        out.push(Rect::new(piece.left, hole.top, hole.left, hole.bottom));
    }
    if hole.right < piece.right {
        out.push(Rect::new(hole.right, hole.top, piece.right, hole.bottom));
    }
}
