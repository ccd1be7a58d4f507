//! Logging backend for the `log` crate.
//!
//! The library itself only emits through the `log` macros. [`CellLogger`] is
//! an optional backend that formats records with a timestamp and a padded,
//! colored level column, using this crate's own padding and style tokens.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::pad::{Alignment, pad};
use crate::style::apply_styles;

/// Width of the level column.
const LEVEL_WIDTH: usize = 5;

/// Line-oriented logger for the `log` crate.
///
/// # Thread Safety
///
/// `CellLogger` implements `Log`, which requires `Sync`. The output sink is
/// behind a mutex with poison recovery, so a panic while logging on one
/// thread does not silence the others.
pub struct CellLogger {
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    colored: bool,
    time_format: OwnedFormatItem,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl CellLogger {
    /// Create a logger writing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));

        Self {
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            colored: true,
            time_format,
            sink: Mutex::new(Box::new(writer)),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable colored level names.
    #[must_use]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Override the time format. Invalid descriptions are ignored.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Returns `SetLoggerError` if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn level_styles(level: Level) -> &'static [&'static str] {
        match level {
            Level::Trace => &["dim"],
            Level::Debug => &["blue"],
            Level::Info => &["green"],
            Level::Warn => &["yellow"],
            Level::Error => &["bold", "red"],
        }
    }

    /// Format a record as one output line, without the trailing newline.
    #[must_use]
    pub fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&self.format_time());
            line.push(' ');
        }

        if self.show_level {
            let padded = pad(record.level().as_str(), LEVEL_WIDTH, ' ', Alignment::Left);
            if self.colored {
                let styles = Self::level_styles(record.level());
                line.push_str(&apply_styles(&padded, styles).unwrap_or(padded));
            } else {
                line.push_str(&padded);
            }
            line.push(' ');
        }

        line.push_str(&record.args().to_string());
        line
    }
}

impl Default for CellLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for CellLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        // Nowhere to report a failed log write.
        let _ = writeln!(sink, "{line}");
    }

    fn flush(&self) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.flush();
    }
}
