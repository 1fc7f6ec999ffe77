use crate::domain::trigger::{HttpStatus, TransportError};
use async_trait::async_trait;

/// Outbound HTTP used to ask the server to start its process.
///
/// Implementations send a bodyless `POST` with no custom headers and only report
/// the status code; response bodies are never read.
#[async_trait(?Send)]
pub trait TransportPort: Send + Sync {
    async fn post(&self, endpoint: &str) -> Result<HttpStatus, TransportError>;
}
