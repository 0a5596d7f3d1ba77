use log::info;
use crate::config::SelectorConfig;
use crate::coordinate::{Point, Rect, ScrollOffset};
use crate::errors::SelectorResult;
use crate::selector::{DragArea, DragOrigin, PointerEvent, SelectorBoxCalculator, ViewportReader};
use crate::trace::DragTrace;

/// Main interface to the selectorbox library
///
/// Works on a document-sized area: positions are viewport (client)
/// coordinates and go through [`ViewportReader`] with the given zoom.
pub struct SelectorBox {
    config: SelectorConfig,
    calculator: SelectorBoxCalculator,
}

impl SelectorBox {
    /// Create a new SelectorBox instance
    ///
    /// # Arguments
    /// * `config` - Selector settings; use `SelectorConfig::default()` for legacy behaviour
    pub fn new(config: SelectorConfig) -> Self {
        SelectorBox {
            config,
            calculator: SelectorBoxCalculator::from_config(&config),
        }
    }

    /// Create a SelectorBox from a TOML config file
    pub fn from_config_file(path: &str) -> SelectorResult<Self> {
        let config = SelectorConfig::from_file(path)?;
        Ok(SelectorBox::new(config))
    }

    /// Settings in use
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Calculator in use
    pub fn calculator(&self) -> &SelectorBoxCalculator {
        &self.calculator
    }

    /// Compute the selector box of a document drag
    ///
    /// # Arguments
    /// * `start` - Pointer client position when the drag started
    /// * `cursor` - Current pointer client position
    /// * `initial_scroll` - Document scroll when the drag started
    /// * `scroll` - Current document scroll
    /// * `zoom` - Zoom factor, the configured default if `None`
    ///
    /// # Returns
    /// The selector rectangle or an error
    pub fn compute(&self,
                   start: Point,
                   cursor: Point,
                   initial_scroll: ScrollOffset,
                   scroll: ScrollOffset,
                   zoom: Option<f64>) -> SelectorResult<Rect> {
        let zoom = zoom.unwrap_or(self.config.default_zoom);
        let reader = ViewportReader::new();

        let start_event = PointerEvent { client: start };
        let origin = DragOrigin::capture(&reader, &DragArea::document(initial_scroll), zoom, Some(&start_event))?;

        let event = PointerEvent { client: cursor };
        self.calculator.calculate_from(&reader, &DragArea::document(scroll), zoom, &origin, Some(&event))
    }

    /// Replay a trace file and return one selector box per move
    pub fn replay_file(&self, path: &str) -> SelectorResult<Vec<Rect>> {
        info!("Loading trace {}", path);
        let trace = DragTrace::from_file(path)?;
        trace.replay(&self.calculator, self.config.default_zoom)
    }
}
