use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Solid disc draw payload.
///
/// `radius` is always positive in generated streams: the ring generator
/// skips non-positive discs instead of emitting them.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: i32,
    pub color: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: i32, color: Color) -> Self {
        Self { center, radius, color }
    }

    /// Bounding square, for hosts that fill ovals by bounds.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extents(self.center, Vec2::splat(self.radius))
    }
}

impl DrawList {
    /// Records a solid disc.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: i32, color: Color) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, color)));
    }
}
