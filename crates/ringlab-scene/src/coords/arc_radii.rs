/// Per-axis corner arc radii for a rounded rectangle (device pixels).
///
/// One radius per axis, applied to all four corners; this matches the
/// arc-width/arc-height model of the draw stream rather than per-corner CSS
/// radii. Negative values are treated as zero by renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArcRadii {
    pub width: i32,
    pub height: i32,
}

impl ArcRadii {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Same radius on both axes.
    #[inline]
    pub const fn uniform(r: i32) -> Self {
        Self { width: r, height: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::uniform(0)
    }
}
