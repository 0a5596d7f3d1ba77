//! Tests for the selector box calculator

extern crate std;

use std::cell::Cell;

use crate::coordinate::{Point, Rect, ScrollOffset};
use crate::errors::SelectorError;
use crate::selector::{get_selector_position, selector_rect, DragOrigin, PositionSource, ReaderFns,
                      SelectorBoxCalculator};

/// Reader returning fixed values and counting reads
struct FixedSource {
    cursor: Point,
    scroll: ScrollOffset,
    cursor_reads: Cell<u32>,
    scroll_reads: Cell<u32>,
}

impl FixedSource {
    fn new(cursor: Point, scroll: ScrollOffset) -> Self {
        FixedSource {
            cursor,
            scroll,
            cursor_reads: Cell::new(0),
            scroll_reads: Cell::new(0),
        }
    }
}

impl PositionSource for FixedSource {
    type Area = str;
    type Event = f64;

    fn read_cursor_position(&self, area: &str, zoom: f64, event: Option<&f64>) -> crate::errors::SelectorResult<Point> {
        std::assert_eq!(area, "area");
        std::assert_eq!(zoom, 2.0);
        std::assert_eq!(event, Some(&7.0));
        self.cursor_reads.set(self.cursor_reads.get() + 1);
        Ok(self.cursor)
    }

    fn read_scroll_offset(&self, area: &str) -> crate::errors::SelectorResult<ScrollOffset> {
        std::assert_eq!(area, "area");
        self.scroll_reads.set(self.scroll_reads.get() + 1);
        Ok(self.scroll)
    }
}

fn no_scroll() -> ScrollOffset {
    ScrollOffset::zero()
}

#[test]
fn test_drag_right_down_without_scroll() {
    let rect = selector_rect(&no_scroll(), &Point::new(0.0, 0.0), &no_scroll(), &Point::new(50.0, 30.0));
    std::assert_eq!(rect, Rect::new(0.0, 0.0, 50.0, 30.0));
}

#[test]
fn test_drag_left_up_without_scroll() {
    let rect = selector_rect(&no_scroll(), &Point::new(0.0, 0.0), &no_scroll(), &Point::new(-20.0, -10.0));
    std::assert_eq!(rect, Rect::new(-20.0, -10.0, 20.0, 10.0));
}

#[test]
fn test_scrolled_right_mid_drag() {
    let rect = selector_rect(&no_scroll(),
                             &Point::new(0.0, 0.0),
                             &ScrollOffset::new(10.0, 0.0),
                             &Point::new(5.0, 0.0));
    std::assert_eq!(rect, Rect::new(-10.0, 0.0, 15.0, 0.0));
}

#[test]
fn test_scrolled_left_mid_drag() {
    // -30 > 0 - (-20) is false: anchored at the cursor, 0 + 30 + 20 wide
    let rect = selector_rect(&no_scroll(),
                             &Point::new(0.0, 0.0),
                             &ScrollOffset::new(-20.0, 0.0),
                             &Point::new(-30.0, 0.0));
    std::assert_eq!(rect, Rect::new(-30.0, 0.0, 50.0, 0.0));
}

#[test]
fn test_vertical_scroll_mirrors_horizontal() {
    let rect = selector_rect(&ScrollOffset::new(0.0, 100.0),
                             &Point::new(0.0, 40.0),
                             &ScrollOffset::new(0.0, 130.0),
                             &Point::new(0.0, 20.0));
    // threshold 40 - 30 = 10, cursor 20 is below it
    std::assert_eq!(rect, Rect::new(0.0, 10.0, 0.0, 10.0));
}

#[test]
fn test_no_scroll_follows_cursor() {
    let initial = Point::new(3.0, -4.0);
    for cx in -10..=10 {
        for cy in -10..=10 {
            let cursor = Point::new(cx as f64, cy as f64);
            let rect = selector_rect(&no_scroll(), &initial, &no_scroll(), &cursor);

            if cursor.x > initial.x {
                std::assert_eq!(rect.x, initial.x);
                std::assert_eq!(rect.w, cursor.x - initial.x);
            } else {
                std::assert_eq!(rect.x, cursor.x);
                std::assert_eq!(rect.w, initial.x - cursor.x);
            }

            if cursor.y > initial.y {
                std::assert_eq!(rect.y, initial.y);
                std::assert_eq!(rect.h, cursor.y - initial.y);
            } else {
                std::assert_eq!(rect.y, cursor.y);
                std::assert_eq!(rect.h, initial.y - cursor.y);
            }
        }
    }
}

#[test]
fn test_size_is_distance_to_shifted_start() {
    let initial_scroll = ScrollOffset::new(5.0, -3.0);
    let initial = Point::new(-2.0, 6.0);

    for scroll_step in [-12.0, -1.0, 0.0, 4.0, 25.0] {
        let scroll_new = ScrollOffset::new(initial_scroll.x + scroll_step, initial_scroll.y - scroll_step);
        let amount = scroll_new.amount_since(&initial_scroll);

        for c in -20..=20 {
            let cursor = Point::new(c as f64, (c * 3) as f64);
            let rect = selector_rect(&initial_scroll, &initial, &scroll_new, &cursor);

            std::assert_eq!(rect.w, (cursor.x - (initial.x - amount.x)).abs());
            std::assert_eq!(rect.h, (cursor.y - (initial.y - amount.y)).abs());
            std::assert!(rect.w >= 0.0 && rect.h >= 0.0);

            // the box always spans from the cursor to the shifted start
            std::assert_eq!(rect.x.min(rect.right()), cursor.x.min(initial.x - amount.x));
            std::assert_eq!(rect.x.max(rect.right()), cursor.x.max(initial.x - amount.x));
        }
    }
}

#[test]
fn test_equal_to_shifted_start_anchors_at_cursor() {
    // Both branches give a zero-sized box; the sign of zero tells them apart.
    let rect = selector_rect(&no_scroll(), &Point::new(0.0, 0.0), &no_scroll(), &Point::new(-0.0, -0.0));
    std::assert!(rect.x.is_sign_negative());
    std::assert!(rect.y.is_sign_negative());
    std::assert_eq!(rect.w, 0.0);
    std::assert_eq!(rect.h, 0.0);

    let rect = selector_rect(&no_scroll(), &Point::new(0.0, 0.0), &ScrollOffset::new(10.0, 0.0), &Point::new(-10.0, 0.0));
    std::assert_eq!(rect, Rect::new(-10.0, 0.0, 0.0, 0.0));
}

#[test]
fn test_get_selector_position_reads_once() {
    let source = FixedSource::new(Point::new(5.0, 0.0), ScrollOffset::new(10.0, 0.0));

    let rect = get_selector_position(&source, "area", 2.0, &no_scroll(), &Point::new(0.0, 0.0), Some(&7.0)).unwrap();

    std::assert_eq!(rect, Rect::new(-10.0, 0.0, 15.0, 0.0));
    std::assert_eq!(source.cursor_reads.get(), 1);
    std::assert_eq!(source.scroll_reads.get(), 1);
}

#[test]
fn test_reader_errors_propagate() {
    let failing_cursor = ReaderFns::new(
        |_: &(), _zoom: f64, _: Option<&()>| Err(SelectorError::GenericError("pointer gone".to_string())),
        |_: &()| Ok(ScrollOffset::zero()),
    );
    match get_selector_position(&failing_cursor, &(), 1.0, &no_scroll(), &Point::origin(), None) {
        Err(SelectorError::GenericError(msg)) => std::assert_eq!(msg, "pointer gone"),
        other => panic!("unexpected result: {:?}", other),
    }

    let failing_scroll = ReaderFns::new(
        |_: &(), _zoom: f64, _: Option<&()>| Ok(Point::origin()),
        |_: &()| Err(SelectorError::GenericError("detached".to_string())),
    );
    let result = SelectorBoxCalculator::new()
        .calculate(&failing_scroll, &(), 1.0, &no_scroll(), &Point::origin(), None);
    std::assert!(matches!(result, Err(SelectorError::GenericError(_))));
}

#[test]
fn test_legacy_calculator_passes_nan_through() {
    let calculator = SelectorBoxCalculator::new();
    std::assert!(!calculator.validates_inputs());
    std::assert!(!calculator.clamps_negative());

    let rect = calculator
        .compute(&no_scroll(), &Point::origin(), &no_scroll(), &Point::new(f64::NAN, 1.0))
        .unwrap();
    std::assert!(rect.x.is_nan());
    std::assert!(rect.w.is_nan());
    std::assert_eq!(rect.h, 1.0);
}

#[test]
fn test_strict_calculator_names_bad_input() {
    let calculator = SelectorBoxCalculator::new().with_validation(true);

    match calculator.compute(&no_scroll(), &Point::origin(), &no_scroll(), &Point::new(1.0, f64::NAN)) {
        Err(SelectorError::NonFiniteInput { field }) => std::assert_eq!(field, "cursor_new.y"),
        other => panic!("unexpected result: {:?}", other),
    }

    match calculator.compute(&ScrollOffset::new(f64::INFINITY, 0.0), &Point::origin(), &no_scroll(), &Point::origin()) {
        Err(SelectorError::NonFiniteInput { field }) => std::assert_eq!(field, "initial_scroll.x"),
        other => panic!("unexpected result: {:?}", other),
    }

    let rect = calculator.compute(&no_scroll(), &Point::origin(), &no_scroll(), &Point::new(50.0, 30.0)).unwrap();
    std::assert_eq!(rect, Rect::new(0.0, 0.0, 50.0, 30.0));
}

#[test]
fn test_clamp_negative_size() {
    // 0.2 - 1e-17 rounds back to 0.2, so the cursor is not past the shifted
    // start, and the leftward width comes out as -1e-17.
    let initial_scroll = no_scroll();
    let scroll_new = ScrollOffset::new(1e-17, 0.0);
    let initial = Point::new(0.2, 0.0);
    let cursor = Point::new(0.2, 5.0);

    let legacy = SelectorBoxCalculator::new().compute(&initial_scroll, &initial, &scroll_new, &cursor).unwrap();
    std::assert!(legacy.w < 0.0);

    let clamped = SelectorBoxCalculator::new()
        .with_clamp(true)
        .compute(&initial_scroll, &initial, &scroll_new, &cursor)
        .unwrap();
    std::assert_eq!(clamped, Rect::new(0.2, 0.0, 0.0, 5.0));
}

#[test]
fn test_calculate_from_origin() {
    let origin = DragOrigin::new(Point::new(0.0, 0.0), no_scroll());
    let source = ReaderFns::new(
        |_: &(), _zoom: f64, _: Option<&()>| Ok(Point::new(-30.0, 0.0)),
        |_: &()| Ok(ScrollOffset::new(-20.0, 0.0)),
    );

    let rect = SelectorBoxCalculator::new().calculate_from(&source, &(), 1.0, &origin, None).unwrap();
    std::assert_eq!(rect, Rect::new(-30.0, 0.0, 50.0, 0.0));
}

#[test]
fn test_calculator_from_config() {
    let config = crate::config::SelectorConfig::from_str("[selector]\nclamp_negative = true\nvalidate_inputs = true\n").unwrap();
    let calculator = SelectorBoxCalculator::from_config(&config);
    std::assert!(calculator.clamps_negative());
    std::assert!(calculator.validates_inputs());
}
