//! Paint model shared between the generator and renderers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA)
//! - the fixed ring palette
//!
//! Every command in the draw stream is a solid fill, so commands carry a
//! [`Color`] directly rather than a paint-source enum. Geometry types remain
//! in `coords`.

mod color;

pub use color::Color;
