//! Command line definition
//!
//! Positions are viewport client coordinates (`x,y`); the reader subtracts
//! the area origin and divides by `--zoom`.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the `selectorbox` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("selectorbox")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Compute the drag-selection box for a pointer drag, compensating for scrolling")
        .arg(
            Arg::new("start")
                .long("start")
                .help("Pointer client position when the drag started ('x,y')")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required_unless_present("replay"),
        )
        .arg(
            Arg::new("cursor")
                .long("cursor")
                .help("Current pointer client position ('x,y')")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required_unless_present("replay"),
        )
        .arg(
            Arg::new("initial-scroll")
                .long("initial-scroll")
                .help("Document scroll when the drag started ('x,y', default 0,0)")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("scroll")
                .long("scroll")
                .help("Current document scroll ('x,y', default 0,0)")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("zoom")
                .long("zoom")
                .help("Zoom factor; client positions are divided by it")
                .value_name("FACTOR")
                .required(false),
        )
        .arg(
            Arg::new("replay")
                .long("replay")
                .help("Replay a recorded drag trace (TOML) and print one box per move")
                .value_name("FILE")
                .conflicts_with_all(["start", "cursor", "initial-scroll", "scroll", "zoom"])
                .required(false),
        )
        .arg(
            Arg::new("clamp")
                .long("clamp")
                .help("Clamp negative widths/heights to zero")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject NaN or infinite positions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Selector config file (TOML)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
