//! Logger setup
//!
//! `RUST_LOG` wins when set; otherwise `-v` flags raise the level from
//! `warn`. The TUI owns the terminal, so it logs to a file instead.

use env_logger::{Builder, Env, Target};
use log::{LevelFilter, debug};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// Level for the number of `-v` flags
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// With `log_file` set, records are appended to that file instead of stderr.
/// Calling this twice keeps the first logger.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> io::Result<()> {
    let level = level_for(verbosity);
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
        builder.write_style(env_logger::WriteStyle::Never);
    }

    if let Err(e) = builder.try_init() {
        debug!("Keeping existing logger: {e}");
    }
    Ok(())
}
