use crate::coords::{ArcRadii, Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Solid rounded rectangle draw payload.
///
/// Same degenerate-extent rules as [`RectCmd`](super::RectCmd); `arc` is the
/// per-axis corner arc radius pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub arc: ArcRadii,
    pub color: Color,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(center: Vec2, half_extents: Vec2, arc: ArcRadii, color: Color) -> Self {
        Self { center, half_extents, arc, color }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extents(self.center, self.half_extents)
    }
}

impl DrawList {
    /// Records a solid rounded rectangle.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        center: Vec2,
        half_extents: Vec2,
        arc: ArcRadii,
        color: Color,
    ) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd::new(center, half_extents, arc, color)));
    }
}
