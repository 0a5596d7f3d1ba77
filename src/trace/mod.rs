//! Recorded drags
//!
//! A trace is a TOML file holding the state at drag start and a list of
//! pointer moves. Replaying it runs every move through the calculator, the
//! same way a host would on each pointer-move event.

use std::fs;
use log::{debug, info};

use crate::coordinate::{Point, Rect, ScrollOffset};
use crate::errors::{SelectorError, SelectorResult};
use crate::selector::{DragArea, DragOrigin, PointerEvent, SelectorBoxCalculator, ViewportReader};


/// One pointer move in a trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceMove {
    /// Pointer event, `None` if the move carried no event
    pub event: Option<PointerEvent>,
    /// Area scroll at the time of the move
    pub scroll: ScrollOffset,
    /// Document scroll at the time of the move (element areas only)
    pub document_scroll: ScrollOffset,
}

/// A recorded drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragTrace {
    /// Zoom for the whole drag, `None` to use the configured default
    pub zoom: Option<f64>,
    /// Area as it was at drag start
    pub area: DragArea,
    /// Pointer event that started the drag
    pub start_event: Option<PointerEvent>,
    /// Pointer moves, in order
    pub moves: Vec<TraceMove>,
}

impl DragTrace {
    /// Parse a trace from a TOML string
    pub fn from_str(content: &str) -> SelectorResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| SelectorError::TraceError(format!("Failed to parse TOML: {}", e)))?;

        let zoom = match toml_value.get("zoom") {
            Some(v) => Some(read_number(v, "zoom")?),
            None => None,
        };

        let start = toml_value.get("start")
            .ok_or_else(|| SelectorError::TraceError("Missing [start] table".to_string()))?;
        let start_event = read_event(start)?;
        let start_scroll = read_scroll(start, "scroll", ScrollOffset::zero())?;
        let start_document_scroll = read_scroll(start, "document_scroll", ScrollOffset::zero())?;

        let area = match toml_value.get("area") {
            Some(area) => {
                let bounds = area.get("bounds")
                    .ok_or_else(|| SelectorError::TraceError("area.bounds missing".to_string()))?;
                let values = read_numbers(bounds, "area.bounds", 4)?;
                DragArea::Element {
                    bounds: Rect::new(values[0], values[1], values[2], values[3]),
                    scroll: start_scroll,
                    document_scroll: start_document_scroll,
                }
            },
            None => DragArea::document(start_scroll),
        };

        let moves = match toml_value.get("moves") {
            Some(v) => {
                let entries = v.as_array()
                    .ok_or_else(|| SelectorError::TraceError("moves must be an array of tables".to_string()))?;
                let mut moves = Vec::with_capacity(entries.len());
                // a move without scroll keys keeps the previous scroll
                let mut scroll = start_scroll;
                let mut document_scroll = start_document_scroll;
                for entry in entries {
                    scroll = read_scroll(entry, "scroll", scroll)?;
                    document_scroll = read_scroll(entry, "document_scroll", document_scroll)?;
                    moves.push(TraceMove {
                        event: read_event(entry)?,
                        scroll,
                        document_scroll,
                    });
                }
                moves
            },
            None => Vec::new(),
        };

        debug!("Parsed trace with {} moves", moves.len());

        Ok(DragTrace {
            zoom,
            area,
            start_event,
            moves,
        })
    }

    /// Load a trace from a TOML file
    pub fn from_file(path: &str) -> SelectorResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Replay the trace and return one selector box per move
    ///
    /// # Arguments
    /// * `calculator` - Calculator to run each move through
    /// * `default_zoom` - Zoom used if the trace does not set one
    ///
    /// # Returns
    /// The boxes in move order, or the first error
    pub fn replay(&self, calculator: &SelectorBoxCalculator, default_zoom: f64) -> SelectorResult<Vec<Rect>> {
        let reader = ViewportReader::new();
        let zoom = self.zoom.unwrap_or(default_zoom);

        let origin = DragOrigin::capture(&reader, &self.area, zoom, self.start_event.as_ref())?;
        info!("Replaying {} moves from {} at zoom {}", self.moves.len(), origin.initial_cursor_pos, zoom);

        self.moves.iter()
            .map(|m| {
                let area = self.area.scrolled_to(m.scroll, m.document_scroll);
                calculator.calculate_from(&reader, &area, zoom, &origin, m.event.as_ref())
            })
            .collect()
    }
}

fn read_event(table: &toml::Value) -> SelectorResult<Option<PointerEvent>> {
    match table.get("client") {
        Some(v) => {
            let values = read_numbers(v, "client", 2)?;
            Ok(Some(PointerEvent { client: Point::new(values[0], values[1]) }))
        },
        None => Ok(None),
    }
}

fn read_scroll(table: &toml::Value, key: &str, fallback: ScrollOffset) -> SelectorResult<ScrollOffset> {
    match table.get(key) {
        Some(v) => {
            let values = read_numbers(v, key, 2)?;
            Ok(ScrollOffset::new(values[0], values[1]))
        },
        None => Ok(fallback),
    }
}

fn read_numbers(value: &toml::Value, key: &str, len: usize) -> SelectorResult<Vec<f64>> {
    let items = value.as_array()
        .ok_or_else(|| SelectorError::TraceError(format!("{} must be an array", key)))?;
    if items.len() != len {
        return Err(SelectorError::TraceError(format!("{} must have {} values, got {}", key, len, items.len())));
    }

    items.iter().map(|v| read_number(v, key)).collect()
}

fn read_number(value: &toml::Value, key: &str) -> SelectorResult<f64> {
    match value {
        toml::Value::Float(f) => Ok(*f),
        toml::Value::Integer(i) => Ok(*i as f64),
        _ => Err(SelectorError::TraceError(format!("{} must be numeric", key))),
    }
}
