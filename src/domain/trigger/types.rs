use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTROL_ID: &str = "startButton";
pub const DEFAULT_ENDPOINT: &str = "/start";
pub const DEFAULT_EVENT: &str = "click";

/// Which control to watch and where to send the start request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    pub control_id: String,
    pub endpoint: String,
    pub event: String,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            event: DEFAULT_EVENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatus(pub u16);

impl HttpStatus {
    /// Same range the Fetch API reports as `Response.ok`.
    pub fn is_success(self) -> bool {
        (200..=299).contains(&self.0)
    }

    pub fn code(self) -> u16 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivationOutcome {
    Success { status: u16 },
    RemoteRejected { status: u16 },
    TransportFailure { cause: String },
}

impl ActivationOutcome {
    pub fn from_status(status: HttpStatus) -> Self {
        if status.is_success() {
            ActivationOutcome::Success {
                status: status.code(),
            }
        } else {
            ActivationOutcome::RemoteRejected {
                status: status.code(),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActivationOutcome::Success { .. })
    }
}
