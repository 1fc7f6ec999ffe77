use crate::ports::LoggerPort;
use log::{error, info, warn};

/// Native logger forwarding to the `log` facade under the `start_trigger` target.
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
        info!(target: "start_trigger", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "start_trigger", "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(target: "start_trigger", "{message}");
    }

    fn time(&self, label: &str) {
        log::debug!(target: "start_trigger", "[TIME:START] {label}");
    }

    fn time_end(&self, label: &str) {
        log::debug!(target: "start_trigger", "[TIME:END] {label}");
    }
}
