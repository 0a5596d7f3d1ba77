//! Drag start state

use log::debug;

use crate::coordinate::{Point, ScrollOffset};
use crate::errors::SelectorResult;
use super::readers::PositionSource;

/// Cursor position and scroll offset captured when a drag starts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragOrigin {
    /// Cursor position at drag start
    pub initial_cursor_pos: Point,
    /// Scroll offset at drag start
    pub initial_scroll: ScrollOffset,
}

impl DragOrigin {
    /// Create an origin from known values
    pub fn new(initial_cursor_pos: Point, initial_scroll: ScrollOffset) -> Self {
        DragOrigin {
            initial_cursor_pos,
            initial_scroll,
        }
    }

    /// Capture the origin through the same readers the calculator uses later
    pub fn capture<S: PositionSource>(source: &S,
                                      area: &S::Area,
                                      zoom: f64,
                                      event: Option<&S::Event>) -> SelectorResult<Self> {
        let initial_cursor_pos = source.read_cursor_position(area, zoom, event)?;
        let initial_scroll = source.read_scroll_offset(area)?;
        debug!("Drag started at {} (scroll {})", initial_cursor_pos, initial_scroll);

        Ok(DragOrigin::new(initial_cursor_pos, initial_scroll))
    }
}
