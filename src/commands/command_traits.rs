//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::config::SelectorConfig;
use crate::coordinate::Rect;
use crate::errors::SelectorResult;

/// Represents an executable command in the application
pub trait Command {
    /// Compute the selector boxes this command produces
    fn run(&self) -> SelectorResult<Vec<Rect>>;

    /// Execute the command, printing one `x,y,w,h` line per box
    fn execute(&self) -> SelectorResult<()> {
        for rect in self.run()? {
            println!("{}", rect);
        }
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Settings loaded from the config file, or the defaults
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, config: SelectorConfig) -> SelectorResult<Box<dyn Command>>;
}
