use crate::ports::LoggerPort;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Browser console logger; entries show up in devtools under their severity.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        console::log_1(&JsValue::from_str(message));
    }

    fn error(&self, message: &str) {
        console::error_1(&JsValue::from_str(message));
    }

    fn warn(&self, message: &str) {
        console::warn_1(&JsValue::from_str(message));
    }

    fn time(&self, label: &str) {
        console::time_with_label(label);
    }

    fn time_end(&self, label: &str) {
        console::time_end_with_label(label);
    }
}
