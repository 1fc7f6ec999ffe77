/// Ports module - the interfaces the trigger domain needs from its host.
///
/// Logging, time, HTTP and page controls are reached only through these traits, so
/// the activation logic runs unchanged in the browser and under native tests.

pub mod clock;
pub mod control;
pub mod logger;
pub mod transport;

pub use clock::ClockPort;
pub use control::{ActivationHandler, ControlBinding, ControlPort};
pub use logger::LoggerPort;
pub use transport::TransportPort;
