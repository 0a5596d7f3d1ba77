//! Scroll offsets of a scrollable area

use std::fmt;
use std::ops::Add;

use super::point::Point;

/// Scroll position of an area (and/or the document) at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    /// Horizontal scroll (`scrollLeft`)
    pub x: f64,
    /// Vertical scroll (`scrollTop`)
    pub y: f64,
}

impl ScrollOffset {
    /// Create a new scroll offset
    pub fn new(x: f64, y: f64) -> Self {
        ScrollOffset { x, y }
    }

    /// No scrolling at all
    pub fn zero() -> Self {
        ScrollOffset { x: 0.0, y: 0.0 }
    }

    /// Net scroll between `initial` and this offset
    ///
    /// Positive values mean the content moved left/up relative to the
    /// viewport since `initial` was captured.
    pub fn amount_since(&self, initial: &ScrollOffset) -> Point {
        Point::new(self.x - initial.x, self.y - initial.y)
    }

    /// Check that both offsets are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for ScrollOffset {
    type Output = ScrollOffset;

    fn add(self, rhs: ScrollOffset) -> ScrollOffset {
        ScrollOffset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(f64, f64)> for ScrollOffset {
    fn from((x, y): (f64, f64)) -> Self {
        ScrollOffset::new(x, y)
    }
}

impl fmt::Display for ScrollOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
