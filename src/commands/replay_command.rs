//! Trace replay command

use clap::ArgMatches;
use log::info;

use crate::api::SelectorBox;
use crate::commands::command_traits::Command;
use crate::config::SelectorConfig;
use crate::coordinate::Rect;
use crate::errors::{SelectorError, SelectorResult};

/// Command replaying a recorded drag
pub struct ReplayCommand {
    trace_file: String,
    selector: SelectorBox,
}

impl ReplayCommand {
    /// Create a new replay command
    pub fn new(args: &ArgMatches, config: SelectorConfig) -> SelectorResult<Self> {
        let trace_file = args.get_one::<String>("replay")
            .ok_or_else(|| SelectorError::GenericError("Missing trace file".to_string()))?
            .clone();

        let config = SelectorConfig {
            clamp_negative: config.clamp_negative || args.get_flag("clamp"),
            validate_inputs: config.validate_inputs || args.get_flag("strict"),
            ..config
        };

        Ok(ReplayCommand {
            trace_file,
            selector: SelectorBox::new(config),
        })
    }
}

impl Command for ReplayCommand {
    fn run(&self) -> SelectorResult<Vec<Rect>> {
        let boxes = self.selector.replay_file(&self.trace_file)?;
        info!("Replayed {} moves from {}", boxes.len(), self.trace_file);
        Ok(boxes)
    }
}
