//! Retained panel state and the per-redraw scene pull.
//!
//! The only state the panel keeps is the current [`ShapeKind`] selection.
//! Viewport size is NOT retained: the host supplies it fresh on every
//! [`scene`](ShapePanel::scene) call, so a resize is just the next pull with
//! a different size.

use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::rings::{self, ShapeKind};
use crate::scene::DrawList;

/// The ring panel: a shape selection plus a pull-based scene builder.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ShapePanel {
    shape: ShapeKind,
}

impl ShapePanel {
    /// New panel with the default selection (circle).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Replaces the current selection. Any kind is reachable from any other;
    /// the host triggers a redraw by pulling a new scene.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        if self.shape != shape {
            log::debug!("shape selection: {} -> {}", self.shape, shape);
        }
        self.shape = shape;
    }

    /// Builds a fresh scene for the current selection: a black background
    /// covering the viewport, then the rings on top.
    pub fn scene(&self, viewport: Viewport) -> DrawList {
        let mut list = DrawList::new();

        // Half extents round up so the fill reaches the last row/column on
        // odd dimensions; hosts clip to the viewport anyway.
        let half = Vec2::new(
            viewport.width.div_ceil(2) as i32,
            viewport.height.div_ceil(2) as i32,
        );
        list.push_rect(half, half, Color::BLACK);

        rings::push_rings(&mut list, self.shape, viewport);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn default_selection_is_circle() {
        assert_eq!(ShapePanel::new().shape(), ShapeKind::Circle);
    }

    #[test]
    fn set_shape_replaces_selection() {
        let mut panel = ShapePanel::new();
        panel.set_shape(ShapeKind::RoundRectangle);
        assert_eq!(panel.shape(), ShapeKind::RoundRectangle);
        panel.set_shape(ShapeKind::Circle);
        assert_eq!(panel.shape(), ShapeKind::Circle);
    }

    #[test]
    fn scene_starts_with_background_rect() {
        let panel = ShapePanel::new();
        let list = panel.scene(Viewport::new(600, 325));

        let DrawCmd::Rect(bg) = &list.items()[0] else {
            panic!("expected background rect");
        };
        assert_eq!(bg.color, Color::BLACK);

        // Origin pinned to the top-left corner; the odd height rounds up so
        // the whole panel is covered.
        let bounds = bg.bounds();
        assert_eq!(bounds.origin, Vec2::zero());
        assert_eq!(bounds.size, Vec2::new(600, 326));
    }

    #[test]
    fn scene_holds_background_plus_rings() {
        let mut panel = ShapePanel::new();
        panel.set_shape(ShapeKind::Rectangle);
        assert_eq!(panel.scene(Viewport::new(400, 200)).len(), 1 + 10);

        panel.set_shape(ShapeKind::RoundRectangle);
        assert_eq!(panel.scene(Viewport::new(600, 300)).len(), 1 + 12);
    }

    #[test]
    fn scene_is_rebuilt_from_scratch_each_pull() {
        let panel = ShapePanel::new();
        let a = panel.scene(Viewport::new(300, 300));
        let b = panel.scene(Viewport::new(300, 300));
        assert_eq!(a, b);
    }
}
