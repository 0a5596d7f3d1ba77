//! Rectangle structure for the selector box

use std::fmt;

use super::point::Point;

/// A rectangle given by its top-left corner and its size
///
/// Width and height are whatever the computation produced; nothing here
/// forces them to be non-negative. Use [`Rect::clamped`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge (`x + w`)
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`)
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Check if this rectangle contains a point, edges included
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x && point.x <= self.right() &&
            point.y >= self.y && point.y <= self.bottom()
    }

    /// Check that all four components are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Copy of this rectangle with negative width/height set to zero
    ///
    /// NaN sizes are left untouched.
    pub fn clamped(&self) -> Self {
        Rect {
            x: self.x,
            y: self.y,
            w: if self.w < 0.0 { 0.0 } else { self.w },
            h: if self.h < 0.0 { 0.0 } else { self.h },
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_contains() {
        let rect = Rect::new(-10.0, 5.0, 20.0, 10.0);
        assert_eq!(rect.right(), 10.0);
        assert_eq!(rect.bottom(), 15.0);
        assert_eq!(rect.origin(), Point::new(-10.0, 5.0));
        assert!(rect.contains(&Point::new(0.0, 10.0)));
        assert!(rect.contains(&Point::new(10.0, 15.0)));
        assert!(!rect.contains(&Point::new(10.5, 10.0)));
    }

    #[test]
    fn test_clamped_and_display() {
        let rect = Rect::new(1.0, 2.0, -3.0, f64::NAN);
        let clamped = rect.clamped();
        assert_eq!(clamped.w, 0.0);
        assert!(clamped.h.is_nan());
        assert!(!rect.is_finite());
        assert_eq!(Rect::new(-10.0, 0.0, 15.0, 0.5).to_string(), "-10,0,15,0.5");
    }
}
