use std::process;
use log::{error, LevelFilter};

use selectorbox::config::SelectorConfig;
use selectorbox::utils::logger::Logger;
use selectorbox::commands::{build_cli, CommandFactory, SelectorCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let (level, filter) = if matches.get_flag("verbose") {
        (LevelFilter::Debug, "debug")
    } else {
        (LevelFilter::Warn, "warn")
    };

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
        },
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match SelectorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to load config {}: {}", path, e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => SelectorConfig::default(),
    };

    let factory = SelectorCommandFactory::new();

    let command_result = factory.create_command(&matches, config);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
