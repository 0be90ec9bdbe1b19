pub(crate) mod circle;
pub(crate) mod rect;
pub(crate) mod rounded_rect;

pub use circle::CircleCmd;
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
