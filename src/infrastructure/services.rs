use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Browser console sink for the domain logger.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self { min_level: LogLevel::Info }
    }

    /// Debug builds log everything.
    pub fn new_development() -> Self {
        Self { min_level: LogLevel::Debug }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let line = format!(
            "[{}] {} {}: {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );
        let js_line = line.into();
        match entry.level {
            LogLevel::Error => web_sys::console::error_1(&js_line),
            LogLevel::Warn => web_sys::console::warn_1(&js_line),
            _ => web_sys::console::log_1(&js_line),
        }
    }
}

/// Wall-clock timestamps from the browser.
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64));
        date.to_iso_string().as_string().unwrap_or_else(|| timestamp.to_string())
    }
}
