use super::Vec2;

/// Axis-aligned rectangle in device pixels (top-left origin).
///
/// `size` may be negative on either axis; such rects are degenerate/flipped
/// and are legal values in a draw stream. Renderers that need a non-negative
/// drawing rect call [`normalized`](Rect::normalized) first.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rect spanning `center ± half`. A negative half extent flips the rect.
    #[inline]
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            origin: center - half,
            size: half * 2,
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0 {
            x += w;
            w = -w;
        }
        if h < 0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── from_center_half_extents ──────────────────────────────────────────

    #[test]
    fn center_half_extents_positive() {
        let rect = Rect::from_center_half_extents(Vec2::new(50, 40), Vec2::new(10, 5));
        assert_eq!(rect, r(40, 35, 20, 10));
    }

    #[test]
    fn center_half_extents_negative_flips() {
        // A negative half extent must survive into the rect unchanged.
        let rect = Rect::from_center_half_extents(Vec2::new(0, 0), Vec2::new(-3, 4));
        assert_eq!(rect, r(3, -4, -6, 8));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1, 2, 10, 20);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10, 0, -4, 5).normalized();
        assert_eq!(n.origin.x, 6);
        assert_eq!(n.size.x, 4);
    }

    #[test]
    fn normalized_negative_height() {
        let n = r(0, 10, 5, -3).normalized();
        assert_eq!(n.origin.y, 7);
        assert_eq!(n.size.y, 3);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(Vec2::new(5, 5)));
    }

    #[test]
    fn contains_max_edge_exclusive() {
        // Half-open [min, max) — the max edge is not contained.
        assert!(!r(0, 0, 10, 10).contains(Vec2::new(10, 10)));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_and_negative_size() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(r(0, 0, 5, -1).is_empty());
        assert!(!r(0, 0, 1, 1).is_empty());
    }
}
