//! Rolling Logger
//!
//! A `log` backend that keeps the most recent formatted lines in a ring
//! buffer (so the app can show them as diagnostics) and forwards every line
//! to the browser console, or to stderr when not running under wasm.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// Number of lines kept in memory
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: 200,
        }
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            level: config.level,
            capacity: config.capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(config.capacity.max(1))),
        }
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|l| l.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// The last `n` buffered lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        let lines = self.lines();
        let skip = lines.len().saturating_sub(n);
        lines.into_iter().skip(skip).collect()
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Only the first call takes effect.
pub fn init(config: LoggerConfig) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(logger)
}

/// Recent lines of the installed logger (empty before `init`)
pub fn recent_lines(n: usize) -> Vec<String> {
    LOGGER.get().map(|l| l.tail(n)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target("deck").args(args).build()
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Trace, capacity: 3 });
        for i in 0..5 {
            logger.log(&record(Level::Info, format_args!("line {}", i)));
        }
        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("deck: line 2"));
        assert!(lines[2].ends_with("deck: line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Warn, capacity: 10 });
        logger.log(&record(Level::Info, format_args!("quiet")));
        logger.log(&record(Level::Error, format_args!("loud")));
        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }

    #[test]
    fn test_tail() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Info, capacity: 10 });
        for i in 0..4 {
            logger.log(&record(Level::Info, format_args!("{}", i)));
        }
        let tail = logger.tail(2);
        assert_eq!(tail.len(), 2);
        assert!(tail[1].ends_with(": 3"));
        assert_eq!(logger.tail(50).len(), 4);
    }
}
