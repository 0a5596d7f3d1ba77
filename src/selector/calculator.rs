//! Selector box geometry
//!
//! Browsers cannot draw a box with a negative width or height. When the
//! pointer moves left of (or above) the drag start, the box is instead
//! anchored at the pointer and sized back to the start point.
//!
//! Scrolling the area mid-drag moves the frame the start point was captured
//! in, so the start point is shifted by the net scroll before comparing.
//! Scrolling right by 10px and moving the pointer right by 5px gives a
//! threshold of `0 - 10 = -10`; `5 > -10`, so the box is anchored at `-10`
//! and is `5 - 0 + 10 = 15` wide.

use log::trace;

use crate::config::SelectorConfig;
use crate::coordinate::{Point, Rect, ScrollOffset};
use crate::errors::{SelectorError, SelectorResult};
use super::origin::DragOrigin;
use super::readers::PositionSource;

/// Compute the selector box from already-read positions
///
/// No validation happens here: non-finite inputs give a non-finite box.
///
/// # Arguments
/// * `initial_scroll` - Scroll offset captured at drag start
/// * `initial_cursor_pos` - Cursor position captured at drag start
/// * `scroll_new` - Current scroll offset
/// * `cursor_new` - Current cursor position
pub fn selector_rect(initial_scroll: &ScrollOffset,
                     initial_cursor_pos: &Point,
                     scroll_new: &ScrollOffset,
                     cursor_new: &Point) -> Rect {
    let scroll_amount = scroll_new.amount_since(initial_scroll);

    let (x, w) = span_axis(initial_cursor_pos.x, cursor_new.x, scroll_amount.x);
    let (y, h) = span_axis(initial_cursor_pos.y, cursor_new.y, scroll_amount.y);

    Rect::new(x, y, w, h)
}

/// Position and length along one axis
///
/// Equality with the shifted start goes to the second branch.
fn span_axis(initial: f64, current: f64, scroll_amount: f64) -> (f64, f64) {
    if current > initial - scroll_amount {
        // right / bottom
        (initial - scroll_amount, current - initial + scroll_amount)
    } else {
        // left / top
        (current, initial - current - scroll_amount)
    }
}

/// Read the current cursor and scroll, then compute the selector box
///
/// Reader errors are returned as-is. Nothing else is checked.
///
/// # Arguments
/// * `source` - Reader for the live cursor position and scroll offset
/// * `area` - Area the drag happens in, passed to both readers
/// * `zoom` - Zoom factor, passed to the cursor reader
/// * `initial_scroll` - Scroll offset captured at drag start
/// * `initial_cursor_pos` - Cursor position captured at drag start
/// * `event` - Originating pointer event, passed to the cursor reader
///
/// # Returns
/// The selector rectangle or the first reader error
pub fn get_selector_position<S: PositionSource>(source: &S,
                                                area: &S::Area,
                                                zoom: f64,
                                                initial_scroll: &ScrollOffset,
                                                initial_cursor_pos: &Point,
                                                event: Option<&S::Event>) -> SelectorResult<Rect> {
    let cursor_new = source.read_cursor_position(area, zoom, event)?;
    let scroll_new = source.read_scroll_offset(area)?;

    Ok(selector_rect(initial_scroll, initial_cursor_pos, &scroll_new, &cursor_new))
}

/// Selector box calculator with optional hardening
///
/// The default instance behaves exactly like [`get_selector_position`]:
/// no input checks and no clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectorBoxCalculator {
    /// Clamp negative width/height to zero
    clamp_negative: bool,
    /// Reject NaN/infinite inputs with [`SelectorError::NonFiniteInput`]
    validate_inputs: bool,
}

impl SelectorBoxCalculator {
    /// Create a calculator with legacy behaviour
    pub fn new() -> Self {
        SelectorBoxCalculator::default()
    }

    /// Create a calculator from the `[selector]` config section
    pub fn from_config(config: &SelectorConfig) -> Self {
        SelectorBoxCalculator {
            clamp_negative: config.clamp_negative,
            validate_inputs: config.validate_inputs,
        }
    }

    /// Enable or disable clamping of negative sizes
    pub fn with_clamp(mut self, clamp_negative: bool) -> Self {
        self.clamp_negative = clamp_negative;
        self
    }

    /// Enable or disable the non-finite input check
    pub fn with_validation(mut self, validate_inputs: bool) -> Self {
        self.validate_inputs = validate_inputs;
        self
    }

    /// Whether negative sizes are clamped
    pub fn clamps_negative(&self) -> bool {
        self.clamp_negative
    }

    /// Whether inputs are checked for NaN/infinity
    pub fn validates_inputs(&self) -> bool {
        self.validate_inputs
    }

    /// Read the current state through `source` and compute the selector box
    pub fn calculate<S: PositionSource>(&self,
                                        source: &S,
                                        area: &S::Area,
                                        zoom: f64,
                                        initial_scroll: &ScrollOffset,
                                        initial_cursor_pos: &Point,
                                        event: Option<&S::Event>) -> SelectorResult<Rect> {
        let cursor_new = source.read_cursor_position(area, zoom, event)?;
        let scroll_new = source.read_scroll_offset(area)?;

        self.compute(initial_scroll, initial_cursor_pos, &scroll_new, &cursor_new)
    }

    /// Same as [`SelectorBoxCalculator::calculate`], taking the start state from a [`DragOrigin`]
    pub fn calculate_from<S: PositionSource>(&self,
                                             source: &S,
                                             area: &S::Area,
                                             zoom: f64,
                                             origin: &DragOrigin,
                                             event: Option<&S::Event>) -> SelectorResult<Rect> {
        self.calculate(source, area, zoom, &origin.initial_scroll, &origin.initial_cursor_pos, event)
    }

    /// Compute the selector box from already-read positions
    pub fn compute(&self,
                   initial_scroll: &ScrollOffset,
                   initial_cursor_pos: &Point,
                   scroll_new: &ScrollOffset,
                   cursor_new: &Point) -> SelectorResult<Rect> {
        if self.validate_inputs {
            ensure_finite(initial_scroll.x, "initial_scroll.x")?;
            ensure_finite(initial_scroll.y, "initial_scroll.y")?;
            ensure_finite(initial_cursor_pos.x, "initial_cursor_pos.x")?;
            ensure_finite(initial_cursor_pos.y, "initial_cursor_pos.y")?;
            ensure_finite(scroll_new.x, "scroll_new.x")?;
            ensure_finite(scroll_new.y, "scroll_new.y")?;
            ensure_finite(cursor_new.x, "cursor_new.x")?;
            ensure_finite(cursor_new.y, "cursor_new.y")?;
        }

        let rect = selector_rect(initial_scroll, initial_cursor_pos, scroll_new, cursor_new);
        trace!("Selector box: cursor={} scroll={} -> {}", cursor_new, scroll_new, rect);

        if self.clamp_negative {
            Ok(rect.clamped())
        } else {
            Ok(rect)
        }
    }
}

fn ensure_finite(value: f64, field: &'static str) -> SelectorResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SelectorError::NonFiniteInput { field })
    }
}
