use super::Vec2;

/// Viewport size in device pixels.
///
/// Supplied fresh on every redraw; the generator never retains one. A
/// zero-size viewport is a legal input (it yields empty or degenerate
/// commands, never an error).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Center point, rounded down on odd dimensions.
    #[inline]
    pub const fn center(self) -> Vec2 {
        Vec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// The smaller of the two dimensions.
    #[inline]
    pub const fn min_extent(self) -> u32 {
        if self.width < self.height {
            self.width
        } else {
            self.height
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}
