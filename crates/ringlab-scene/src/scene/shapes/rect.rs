use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Solid rectangle draw payload.
///
/// `half_extents` may be negative: deep rings of the inset progression
/// produce degenerate/flipped rectangles, and those are carried through
/// unclamped. [`bounds`](RectCmd::bounds) reflects the raw extents;
/// renderers normalize if their fill primitive needs a non-negative size.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(center: Vec2, half_extents: Vec2, color: Color) -> Self {
        Self { center, half_extents, color }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extents(self.center, self.half_extents)
    }
}

impl DrawList {
    /// Records a solid rectangle.
    #[inline]
    pub fn push_rect(&mut self, center: Vec2, half_extents: Vec2, color: Color) {
        self.push(DrawCmd::Rect(RectCmd::new(center, half_extents, color)));
    }
}
