//! Ringlab scene crate.
//!
//! A renderer-agnostic geometry core for the ring-panel demo: it turns a
//! shape selection and a viewport size into an ordered stream of solid-color
//! draw commands (concentric circles, rectangles, or rounded rectangles).
//!
//! Responsibilities:
//! - integer-pixel coordinate types (`coords`)
//! - solid color palette (`paint`)
//! - draw-command stream (`scene`)
//! - the concentric-ring generator (`rings`)
//! - retained panel selection + per-redraw scene pull (`panel`)
//! - the host-surface dispatch seam (`render`)
//!
//! Actual pixel output belongs to the host: implement [`render::Surface`]
//! and feed it a [`scene::DrawList`] via [`render::render_list`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod panel;
pub mod render;
pub mod rings;
pub mod scene;
