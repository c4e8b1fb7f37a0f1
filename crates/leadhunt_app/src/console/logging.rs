//! Logging initialization for the console app.
//!
//! Writes logs to `./leadhunt.log` in the current working directory so they do
//! not interleave with the dashboard on stdout.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILE: &str = "./leadhunt.log";

/// Initialize the file logger; falls back to stderr when the file cannot be created.
pub fn initialize(log_path: &Path) {
    let level = LevelFilter::Info;
    let config = build_config();

    let logger: Box<dyn SharedLogger> = match File::create(log_path) {
        Ok(file) => WriteLogger::new(level, config, file),
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
            TermLogger::new(
                LevelFilter::Warn,
                config,
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )
        }
    };

    let _ = CombinedLogger::init(vec![logger]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
