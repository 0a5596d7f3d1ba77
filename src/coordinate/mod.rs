//! Coordinate handling for drag selection
//!
//! Plain value types shared by the calculator, the readers and the CLI.

mod point;
mod rect;
mod scroll;

// Re-export key types
pub use self::point::Point;
pub use self::rect::Rect;
pub use self::scroll::ScrollOffset;
