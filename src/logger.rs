//! Structured console logging with visual formatting.
//!
//! Output is grouped into blocks drawn with Unicode box characters:
//!
//! ```text
//! ┏ sunclock v0.1.0 ━━╸
//! ┃
//! ┣ Sun times for 2015-06-21 (39.9611°N, 82.9989°W, UTC-5, DST)
//! ┃   Sunrise: 06:08
//! ╹
//! ```
//!
//! Logging can be switched off entirely for quiet output, and debug lines are
//! only printed once debug mode is enabled.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug, // Model diagnostics, shown with --debug
    Warn,  // Non-fatal issues (e.g. polar latitude)
    Err,   // Failed operations
}

impl LogLevel {
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Err => "[ERR] ",
        }
    }
}

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable all log output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Enable or disable debug lines.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_debug() -> bool {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }

    /// Format a message with its level prefix.
    pub fn format(level: LogLevel, message: &str) -> String {
        format!("{}{}", level.prefix(), message)
    }

    /// Main log function with level-based prefixes.
    ///
    /// Errors go to stderr so that quiet output on stdout stays parseable.
    pub fn log(level: LogLevel, message: &str) {
        if !Self::is_enabled() {
            return;
        }
        if level == LogLevel::Debug && !Self::is_debug() {
            return;
        }

        match level {
            LogLevel::Err => eprintln!("{}", Self::format(level, message)),
            _ => println!("{}", Self::format(level, message)),
        }
    }

    // ═══ Convenience Methods for Common Log Levels ═══

    pub fn log_error(message: &str) {
        Self::log(LogLevel::Err, message);
    }

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    pub fn log_debug(message: &str) {
        Self::log(LogLevel::Debug, message);
    }

    // ═══ Visual Formatting Functions ═══

    /// Log a decorated message with visual branching indicator.
    pub fn log_decorated(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┣ {}", message);
    }

    /// Log an indented message for sub-items or details.
    pub fn log_indented(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃   {}", message);
    }

    /// Log a visual pipe separator.
    pub fn log_pipe() {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
    }

    /// Log a block start message with visual separation.
    pub fn log_block_start(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
        println!("┣ {}", message);
    }

    /// Log the application version header.
    pub fn log_version() {
        if !Self::is_enabled() {
            return;
        }
        println!("┏ sunclock v{} ━━╸", env!("CARGO_PKG_VERSION"));
        println!("┃");
    }

    /// Log the final termination marker.
    pub fn log_end() {
        if !Self::is_enabled() {
            return;
        }
        println!("╹");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_level_prefixes() {
        assert_eq!(Log::format(LogLevel::Warn, "polar"), "[WARN] polar");
        assert_eq!(Log::format(LogLevel::Err, "bad"), "[ERR] bad");
        assert_eq!(Log::format(LogLevel::Debug, "eot"), "[DEBUG] eot");
    }

    #[test]
    #[serial]
    fn test_enable_flag_roundtrip() {
        let original = Log::is_enabled();
        Log::set_enabled(false);
        assert!(!Log::is_enabled());
        Log::set_enabled(true);
        assert!(Log::is_enabled());
        Log::set_enabled(original);
    }

    #[test]
    #[serial]
    fn test_debug_flag_roundtrip() {
        let original = Log::is_debug();
        Log::set_debug(true);
        assert!(Log::is_debug());
        Log::set_debug(false);
        assert!(!Log::is_debug());
        Log::set_debug(original);
    }
}
