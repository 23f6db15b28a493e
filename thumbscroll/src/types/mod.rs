mod color;
mod enums;
mod style;

pub use color::{Color, ColorParseError, Rgb};
pub use enums::{Direction, Overflow, PointerEvents, Position};
pub use style::LayerStyle;
