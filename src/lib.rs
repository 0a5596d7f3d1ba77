pub mod errors;
pub mod coordinate;
pub mod selector;
pub mod config;
pub mod trace;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::SelectorBox;

pub use errors::{SelectorError, SelectorResult};
pub use config::SelectorConfig;
pub use coordinate::{Point, Rect, ScrollOffset};
pub use selector::{get_selector_position, selector_rect, DragArea, DragOrigin, PointerEvent,
                   PositionSource, ReaderFns, SelectorBoxCalculator, ViewportReader};
pub use trace::DragTrace;
