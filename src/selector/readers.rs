//! Collaborator interfaces for reading live pointer and scroll state
//!
//! The calculator never looks at the host environment itself. Whatever owns
//! the area (a browser binding, a GUI toolkit, a recorded trace) implements
//! [`PositionSource`] and hands it in.

use std::marker::PhantomData;

use crate::coordinate::{Point, ScrollOffset};
use crate::errors::SelectorResult;

/// Source of the current cursor position and scroll offset of an area
pub trait PositionSource {
    /// The UI region being dragged within, passed through untouched
    type Area: ?Sized;
    /// The originating pointer/input event
    type Event: ?Sized;

    /// Read the current pointer position in area-local, zoom-adjusted coordinates
    ///
    /// # Arguments
    /// * `area` - Area the drag happens in
    /// * `zoom` - Scale factor applied to raw pointer coordinates
    /// * `event` - Originating event, if there is one
    fn read_cursor_position(&self, area: &Self::Area, zoom: f64, event: Option<&Self::Event>) -> SelectorResult<Point>;

    /// Read the current scroll offset of the area, ancestors combined
    fn read_scroll_offset(&self, area: &Self::Area) -> SelectorResult<ScrollOffset>;
}

/// [`PositionSource`] built from two plain functions
pub struct ReaderFns<A: ?Sized, E: ?Sized, C, S> {
    cursor: C,
    scroll: S,
    _marker: PhantomData<fn(&A, Option<&E>)>,
}

impl<A: ?Sized, E: ?Sized, C, S> ReaderFns<A, E, C, S>
where
    C: Fn(&A, f64, Option<&E>) -> SelectorResult<Point>,
    S: Fn(&A) -> SelectorResult<ScrollOffset>,
{
    /// Wrap a cursor reader and a scroll reader
    pub fn new(cursor: C, scroll: S) -> Self {
        ReaderFns {
            cursor,
            scroll,
            _marker: PhantomData,
        }
    }
}

impl<A: ?Sized, E: ?Sized, C, S> PositionSource for ReaderFns<A, E, C, S>
where
    C: Fn(&A, f64, Option<&E>) -> SelectorResult<Point>,
    S: Fn(&A) -> SelectorResult<ScrollOffset>,
{
    type Area = A;
    type Event = E;

    fn read_cursor_position(&self, area: &A, zoom: f64, event: Option<&E>) -> SelectorResult<Point> {
        (self.cursor)(area, zoom, event)
    }

    fn read_scroll_offset(&self, area: &A) -> SelectorResult<ScrollOffset> {
        (self.scroll)(area)
    }
}
