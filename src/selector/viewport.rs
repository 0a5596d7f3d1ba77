//! Data-only model of a browser viewport
//!
//! Lets the calculator run against plain values: an area is either the
//! document itself or a scrollable element with a bounding client rect,
//! and a pointer event carries only its client position.

use crate::coordinate::{Point, Rect, ScrollOffset};
use crate::errors::{SelectorError, SelectorResult};
use super::readers::PositionSource;

/// Pointer event reduced to what the cursor reader needs
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Pointer position relative to the viewport
    pub client: Point,
}

impl PointerEvent {
    /// Create an event at the given client position
    pub fn new(client_x: f64, client_y: f64) -> Self {
        PointerEvent {
            client: Point::new(client_x, client_y),
        }
    }
}

/// The region a drag happens in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragArea {
    /// The whole document, its origin at the viewport origin
    Document {
        /// Document scroll
        scroll: ScrollOffset,
    },
    /// A scrollable element inside the document
    Element {
        /// Bounding client rect of the element
        bounds: Rect,
        /// The element's own scroll
        scroll: ScrollOffset,
        /// Scroll of the document around the element
        document_scroll: ScrollOffset,
    },
}

impl DragArea {
    /// Document area with the given scroll
    pub fn document(scroll: ScrollOffset) -> Self {
        DragArea::Document { scroll }
    }

    /// Element area with an unscrolled document around it
    pub fn element(bounds: Rect, scroll: ScrollOffset) -> Self {
        DragArea::Element {
            bounds,
            scroll,
            document_scroll: ScrollOffset::zero(),
        }
    }

    /// Viewport position of the area's top-left corner
    pub fn client_origin(&self) -> Point {
        match self {
            DragArea::Document { .. } => Point::origin(),
            DragArea::Element { bounds, .. } => bounds.origin(),
        }
    }

    /// Scroll of the area combined with the scroll of its ancestors
    pub fn combined_scroll(&self) -> ScrollOffset {
        match self {
            DragArea::Document { scroll } => *scroll,
            DragArea::Element { scroll, document_scroll, .. } => *scroll + *document_scroll,
        }
    }

    /// Same area with different scroll offsets; bounds stay as they are
    pub fn scrolled_to(&self, scroll: ScrollOffset, document_scroll: ScrollOffset) -> Self {
        match self {
            DragArea::Document { .. } => DragArea::Document { scroll },
            DragArea::Element { bounds, .. } => DragArea::Element {
                bounds: *bounds,
                scroll,
                document_scroll,
            },
        }
    }
}

/// [`PositionSource`] for [`DragArea`] and [`PointerEvent`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportReader;

impl ViewportReader {
    /// Create a new reader
    pub fn new() -> Self {
        ViewportReader
    }
}

impl PositionSource for ViewportReader {
    type Area = DragArea;
    type Event = PointerEvent;

    /// Without an event the cursor reads as `(0, 0)`, whatever the zoom.
    fn read_cursor_position(&self, area: &DragArea, zoom: f64, event: Option<&PointerEvent>) -> SelectorResult<Point> {
        let event = match event {
            Some(e) => e,
            None => return Ok(Point::origin()),
        };

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(SelectorError::InvalidZoom(zoom));
        }

        Ok((event.client - area.client_origin()).unscaled(zoom))
    }

    fn read_scroll_offset(&self, area: &DragArea) -> SelectorResult<ScrollOffset> {
        Ok(area.combined_scroll())
    }
}
