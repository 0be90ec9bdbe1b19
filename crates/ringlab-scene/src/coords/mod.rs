//! Coordinate and geometry types shared across the generator and renderers.
//!
//! Canonical space:
//! - Device pixels, integer-valued
//! - Origin top-left
//! - +X right, +Y down
//!
//! Sizes are signed: the ring generator emits degenerate (negative-extent)
//! rectangles on purpose, so `Rect` must be able to represent them.

mod arc_radii;
mod rect;
mod vec2;
mod viewport;

pub use arc_radii::ArcRadii;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
