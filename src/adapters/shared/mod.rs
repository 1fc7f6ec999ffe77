/// Target-independent adapters: deterministic stand-ins for the browser so the
/// trigger can be driven without a page or a server.

pub mod recording_logger;
pub mod scripted_transport;
pub mod simulated_controls;

pub use recording_logger::{LogEntry, LogLevel, RecordingLogger};
pub use scripted_transport::{ScriptedReply, ScriptedTransport};
pub use simulated_controls::SimulatedControls;
