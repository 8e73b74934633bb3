//! Log callback hook.
//!
//! The library never prints. Hosts that want diagnostics register a callback.

use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log record to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}
