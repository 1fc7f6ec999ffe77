/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod dom_controls;
pub mod error_conversions;
pub mod fetch_transport;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use dom_controls::{when_document_ready, DomBinding, DomControls};
pub use fetch_transport::FetchTransport;
