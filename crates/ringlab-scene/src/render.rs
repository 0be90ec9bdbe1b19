//! Host-surface dispatch.
//!
//! Geometry is computed first as an inert [`DrawList`]; pixel output happens
//! here, by walking the list in paint order and dispatching each command to
//! a [`Surface`]. The surface is whatever the host has: a GPU pipeline, a
//! software rasterizer, or a logger in tests and headless runs.

use crate::scene::shapes::{CircleCmd, RectCmd, RoundedRectCmd};
use crate::scene::{DrawCmd, DrawList};

/// A host rendering surface: one fill primitive per command kind.
///
/// Implementations must tolerate degenerate rectangle commands (negative
/// half extents); circles arrive with positive radii only.
pub trait Surface {
    fn fill_rect(&mut self, cmd: &RectCmd);
    fn fill_rounded_rect(&mut self, cmd: &RoundedRectCmd);
    fn fill_circle(&mut self, cmd: &CircleCmd);
}

/// Dispatches every command in `list` to `surface`, back-to-front.
pub fn render_list<S: Surface>(list: &DrawList, surface: &mut S) {
    for cmd in list {
        match cmd {
            DrawCmd::Rect(c) => surface.fill_rect(c),
            DrawCmd::RoundedRect(c) => surface.fill_rounded_rect(c),
            DrawCmd::Circle(c) => surface.fill_circle(c),
        }
    }
}
