//! Drag-selection box computation
//!
//! This module turns a drag's start state and the live cursor/scroll state
//! into the rectangle that should be drawn as the selection box.

mod calculator;
mod origin;
mod readers;
mod viewport;
#[cfg(test)]
mod tests;

pub use calculator::{get_selector_position, selector_rect, SelectorBoxCalculator};
pub use origin::DragOrigin;
pub use readers::{PositionSource, ReaderFns};
pub use viewport::{DragArea, PointerEvent, ViewportReader};
