//! Single selector box computation

use clap::ArgMatches;
use log::{debug, info};

use crate::api::SelectorBox;
use crate::commands::command_traits::Command;
use crate::config::SelectorConfig;
use crate::coordinate::{Point, Rect, ScrollOffset};
use crate::errors::{SelectorError, SelectorResult};
use crate::utils::parse_utils::{parse_point, parse_scroll, parse_zoom};

/// Command computing one selector box from positions given on the command line
pub struct ComputeCommand {
    start: Point,
    cursor: Point,
    initial_scroll: ScrollOffset,
    scroll: ScrollOffset,
    zoom: Option<f64>,
    selector: SelectorBox,
}

impl ComputeCommand {
    /// Create a new compute command
    ///
    /// `--clamp` and `--strict` switch the options on; they never switch off
    /// what the config file enabled.
    pub fn new(args: &ArgMatches, config: SelectorConfig) -> SelectorResult<Self> {
        let start = args.get_one::<String>("start")
            .ok_or_else(|| SelectorError::GenericError("Missing --start position".to_string()))?;
        let start = parse_point(start, "start")?;

        let cursor = args.get_one::<String>("cursor")
            .ok_or_else(|| SelectorError::GenericError("Missing --cursor position".to_string()))?;
        let cursor = parse_point(cursor, "cursor")?;

        let initial_scroll = match args.get_one::<String>("initial-scroll") {
            Some(s) => parse_scroll(s, "initial-scroll")?,
            None => ScrollOffset::zero(),
        };
        let scroll = match args.get_one::<String>("scroll") {
            Some(s) => parse_scroll(s, "scroll")?,
            None => ScrollOffset::zero(),
        };
        let zoom = match args.get_one::<String>("zoom") {
            Some(z) => Some(parse_zoom(z)?),
            None => None,
        };

        let config = SelectorConfig {
            clamp_negative: config.clamp_negative || args.get_flag("clamp"),
            validate_inputs: config.validate_inputs || args.get_flag("strict"),
            ..config
        };
        debug!("Compute options: {:?}", config);

        Ok(ComputeCommand {
            start,
            cursor,
            initial_scroll,
            scroll,
            zoom,
            selector: SelectorBox::new(config),
        })
    }
}

impl Command for ComputeCommand {
    fn run(&self) -> SelectorResult<Vec<Rect>> {
        info!("Computing selector box: start={} cursor={} scroll {} -> {}",
              self.start, self.cursor, self.initial_scroll, self.scroll);

        let rect = self.selector.compute(self.start, self.cursor, self.initial_scroll, self.scroll, self.zoom)?;
        Ok(vec![rect])
    }
}
