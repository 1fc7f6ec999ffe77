/// Adapters module - platform-specific implementations of ports.

pub mod global_clock;
pub mod global_logger;
pub mod shared;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::{Clock, ConsoleLogger, FetchTransport as Transport};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{Clock, ConsoleLogger, UnavailableTransport as Transport};

pub use global_clock::clock;
pub use global_logger::logger;

use crate::ports::TransportPort;
use std::sync::Arc;

/// Default transport for the current target.
pub fn transport() -> Arc<dyn TransportPort> {
    Arc::new(Transport::new())
}
