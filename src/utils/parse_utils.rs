//! Parsing helpers for command line values
//!
//! Pairs are written `x,y`, the same way the CLI prints points.

use log::debug;
use crate::coordinate::{Point, ScrollOffset};
use crate::errors::{SelectorError, SelectorResult};

/// Parse an `x,y` pair into its two numbers
///
/// # Arguments
/// * `value` - The text to parse, e.g. `"-20, 10.5"`
/// * `name` - Name of the option, used in error messages
pub fn parse_pair(value: &str, name: &str) -> SelectorResult<(f64, f64)> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 2 {
        return Err(SelectorError::ParseError(
            format!("{} must be in format 'x,y', got '{}'", name, value)));
    }

    let x = parts[0].trim().parse::<f64>()
        .map_err(|_| SelectorError::ParseError(format!("Invalid x value for {}: '{}'", name, parts[0].trim())))?;
    let y = parts[1].trim().parse::<f64>()
        .map_err(|_| SelectorError::ParseError(format!("Invalid y value for {}: '{}'", name, parts[1].trim())))?;

    debug!("Parsed {}: x={}, y={}", name, x, y);
    Ok((x, y))
}

/// Parse an `x,y` pair as a [`Point`]
pub fn parse_point(value: &str, name: &str) -> SelectorResult<Point> {
    parse_pair(value, name).map(Point::from)
}

/// Parse an `x,y` pair as a [`ScrollOffset`]
pub fn parse_scroll(value: &str, name: &str) -> SelectorResult<ScrollOffset> {
    parse_pair(value, name).map(ScrollOffset::from)
}

/// Parse a zoom factor; it must be finite and positive
pub fn parse_zoom(value: &str) -> SelectorResult<f64> {
    let zoom = value.trim().parse::<f64>()
        .map_err(|_| SelectorError::ParseError(format!("Invalid zoom: '{}'", value)))?;
    if !zoom.is_finite() || zoom <= 0.0 {
        return Err(SelectorError::InvalidZoom(zoom));
    }
    Ok(zoom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("50,30", "cursor").unwrap(), (50.0, 30.0));
        assert_eq!(parse_pair(" -20 , 10.5 ", "cursor").unwrap(), (-20.0, 10.5));
        assert_eq!(parse_point("1,2", "start").unwrap(), Point::new(1.0, 2.0));
        assert_eq!(parse_scroll("0,-4", "scroll").unwrap(), ScrollOffset::new(0.0, -4.0));
    }

    #[test]
    fn test_parse_pair_errors() {
        assert!(matches!(parse_pair("1,2,3", "cursor"), Err(SelectorError::ParseError(_))));
        assert!(matches!(parse_pair("1", "cursor"), Err(SelectorError::ParseError(_))));
        assert!(matches!(parse_pair("a,2", "cursor"), Err(SelectorError::ParseError(_))));
    }

    #[test]
    fn test_parse_zoom() {
        assert_eq!(parse_zoom("1.5").unwrap(), 1.5);
        assert!(matches!(parse_zoom("0"), Err(SelectorError::InvalidZoom(_))));
        assert!(matches!(parse_zoom("-2"), Err(SelectorError::InvalidZoom(_))));
        assert!(matches!(parse_zoom("inf"), Err(SelectorError::InvalidZoom(_))));
        assert!(matches!(parse_zoom("abc"), Err(SelectorError::ParseError(_))));
    }
}
