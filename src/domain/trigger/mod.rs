pub mod error;
pub mod operations;
pub mod types;
pub mod validation;

pub use error::{TransportError, TriggerError};
pub use operations::{activate, install, report, REJECTED_MESSAGE, STARTED_MESSAGE};
pub use types::{ActivationOutcome, HttpStatus, TriggerConfig};
pub use validation::validate_config;
