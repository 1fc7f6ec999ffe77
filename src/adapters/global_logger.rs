/// Global logger instance - automatically selects implementation based on build target.
///
/// WASM writes to the browser console, native goes through the `log` facade.
use crate::adapters::ConsoleLogger;
use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

pub static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
