//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod compute_command;
pub mod replay_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use compute_command::ComputeCommand;
pub use replay_command::ReplayCommand;

use clap::ArgMatches;
use crate::config::SelectorConfig;
use crate::errors::SelectorResult;


/// Factory for creating command instances based on CLI arguments
pub struct SelectorCommandFactory;

impl SelectorCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SelectorCommandFactory
    }
}

impl CommandFactory for SelectorCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: SelectorConfig) -> SelectorResult<Box<dyn Command>> {
        if args.get_one::<String>("replay").is_some() {
            Ok(Box::new(ReplayCommand::new(args, config)?))
        } else {
            // Default to a single computation
            Ok(Box::new(ComputeCommand::new(args, config)?))
        }
    }
}
