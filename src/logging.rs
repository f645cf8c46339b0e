//! File-backed sink for the [`log`] facade.
//!
//! The terminal belongs to the game display while it runs, so log records can only go to a file.
//! Without a log file every record is discarded.

use std::{
    fs::{File, OpenOptions},
    io::Write as _,
    path::Path,
    sync::Mutex,
};

use color_eyre::eyre::Result;
use log::{LevelFilter, Log, Metadata, Record};

/// Logger appending one line per record to a file.
struct FileLogger {
    /// Most detailed level written out.
    level: LevelFilter,
    /// Destination file, shared by every thread that logs.
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(mut file) = self.file.lock() {
            // The sink has nowhere to report its own failures.
            writeln!(
                file,
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
            .unwrap_or_default();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            file.flush().unwrap_or_default();
        }
    }
}

/// Maps the number of `-v` flags to a level filter.
pub(crate) const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger.
///
/// Records are appended to `path` when one is given. Otherwise nothing is installed and the
/// [`log`] macros stay no-ops.
///
/// # Errors
///
/// This function fails when the log file cannot be opened or a logger is already installed.
pub fn init(path: Option<&Path>, verbosity: u8) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let level = level_for(verbosity);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    log::set_boxed_logger(Box::new(FileLogger {
        level,
        file: Mutex::new(file),
    }))?;
    log::set_max_level(level);

    Ok(())
}
