use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// Every message logged during this run, oldest first
static LOGS: Lazy<Arc<Mutex<Vec<String>>>> = Lazy::new(|| Arc::new(Mutex::new(Vec::new())));

// Minimum level echoed to the console
static LOG_LEVEL: Lazy<Arc<Mutex<LogLevel>>> = Lazy::new(|| Arc::new(Mutex::new(LogLevel::Info)));

// Off while the TUI owns the terminal
static CONSOLE_ECHO: AtomicBool = AtomicBool::new(true);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        LogLevel::Info
    }
}

/// Turn printing to stdout/stderr on or off. Messages are still buffered.
pub fn set_console_echo(enabled: bool) {
    CONSOLE_ECHO.store(enabled, Ordering::SeqCst);
}

// Log a message with timestamp and level
pub fn log(level: LogLevel, message: &str) {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);

    if let Ok(mut logs) = LOGS.lock() {
        logs.push(formatted.clone());
    }

    if !CONSOLE_ECHO.load(Ordering::SeqCst) {
        return;
    }

    if level >= get_log_level() {
        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", formatted),
            _ => println!("{}", formatted),
        }
    }
}

pub fn get_logs() -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        logs.clone()
    } else {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        vec![format!("[{}] ❌ Error accessing logs", timestamp)]
    }
}

/// The last `count` buffered messages, oldest first
pub fn recent_logs(count: usize) -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        let start = logs.len().saturating_sub(count);
        logs[start..].to_vec()
    } else {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        vec![format!("[{}] ❌ Error accessing logs", timestamp)]
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_buffered_with_prefix() {
        set_console_echo(false);
        warning("Streetlight report rejected");

        let entry = get_logs()
            .into_iter()
            .find(|line| line.contains("Streetlight report rejected"))
            .expect("message should be buffered");
        assert!(entry.starts_with('['));
        assert!(entry.contains("⚠️ Streetlight report rejected"));
    }

    #[test]
    fn test_recent_logs_returns_at_most_count() {
        set_console_echo(false);
        for i in 0..5 {
            debug(&format!("activity line {}", i));
        }
        assert_eq!(recent_logs(3).len(), 3);
        assert!(recent_logs(0).is_empty());
    }

    #[test]
    fn test_recent_logs_never_exceeds_buffer() {
        set_console_echo(false);
        info("one entry");
        assert!(recent_logs(10_000).len() <= get_logs().len());
    }
}
