use crate::domain::trigger::{HttpStatus, TransportError};
use crate::ports::TransportPort;
use async_trait::async_trait;

/// Native transport (no-op).
///
/// The trigger talks to its server through the browser's `fetch`; outside the
/// browser every request ends as a transport failure unless a transport is
/// injected through `Platform::with_transport`.
#[derive(Clone, Copy)]
pub struct UnavailableTransport;

impl Default for UnavailableTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UnavailableTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl TransportPort for UnavailableTransport {
    async fn post(&self, endpoint: &str) -> Result<HttpStatus, TransportError> {
        Err(TransportError::new(format!(
            "no HTTP transport available on this target for POST {endpoint}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_post_always_fails_with_endpoint_in_cause() {
        let transport = UnavailableTransport::new();
        let err = block_on(transport.post("/start")).unwrap_err();
        assert!(err.cause().contains("/start"));
    }
}
