// src/utils/logger.rs

use log::{Level, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Route `log` records to stderr. Fails if another logger is already set.
pub fn init() -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Debug))
}

fn icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= Level::Debug
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // Format: "🔴  [polraman::io] File not found"
      let mut err = std::io::stderr().lock();
      let _ = writeln!(err, "{}  [{}] {}", icon(record.level()), record.target(), record.args());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
