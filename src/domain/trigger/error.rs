use std::fmt;

/// Failures that prevent the trigger from being installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerError {
    InvalidConfig(String),
    ControlNotFound(String),
    Environment(String),
    Registration(String),
    JsError(String),
}

impl fmt::Display for TriggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerError::InvalidConfig(msg) => write!(f, "Invalid trigger configuration: {msg}"),
            TriggerError::ControlNotFound(id) => {
                write!(f, "Configuration error: no control with id '{id}' on the page")
            }
            TriggerError::Environment(msg) => write!(f, "Environment error: {msg}"),
            TriggerError::Registration(msg) => write!(f, "Failed to register handler: {msg}"),
            TriggerError::JsError(msg) => write!(f, "JavaScript Error: {msg}"),
        }
    }
}

impl std::error::Error for TriggerError {}

impl TriggerError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        TriggerError::InvalidConfig(message.into())
    }

    pub fn control_not_found(control_id: impl Into<String>) -> Self {
        TriggerError::ControlNotFound(control_id.into())
    }

    pub fn environment(message: impl Into<String>) -> Self {
        TriggerError::Environment(message.into())
    }

    pub fn registration(message: impl Into<String>) -> Self {
        TriggerError::Registration(message.into())
    }

    pub fn js_error(message: impl Into<String>) -> Self {
        TriggerError::JsError(message.into())
    }
}

/// A request that never produced a response (network down, DNS, CORS, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(String);

impl TransportError {
    pub fn new(cause: impl Into<String>) -> Self {
        TransportError(cause.into())
    }

    pub fn cause(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for TransportError {}
