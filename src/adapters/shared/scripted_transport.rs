use crate::domain::trigger::{HttpStatus, TransportError};
use crate::ports::TransportPort;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    Status(u16),
    Failure(String),
}

/// Transport that answers from a script and remembers every endpoint it was asked for.
///
/// Queued replies are consumed first, then `fallback` answers every later request.
#[derive(Debug)]
pub struct ScriptedTransport {
    queued: Mutex<VecDeque<ScriptedReply>>,
    fallback: ScriptedReply,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn always(reply: ScriptedReply) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(status: u16) -> Self {
        Self::always(ScriptedReply::Status(status))
    }

    pub fn failing(cause: impl Into<String>) -> Self {
        Self::always(ScriptedReply::Failure(cause.into()))
    }

    pub fn then(self, reply: ScriptedReply) -> Self {
        self.queued.lock().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait(?Send)]
impl TransportPort for ScriptedTransport {
    async fn post(&self, endpoint: &str) -> Result<HttpStatus, TransportError> {
        self.requests.lock().push(endpoint.to_string());
        let reply = self
            .queued
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        match reply {
            ScriptedReply::Status(code) => Ok(HttpStatus(code)),
            ScriptedReply::Failure(cause) => Err(TransportError::new(cause)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_queued_replies_then_fallback() {
        let transport = ScriptedTransport::responding(200)
            .then(ScriptedReply::Status(500))
            .then(ScriptedReply::Failure("offline".to_string()));

        assert_eq!(block_on(transport.post("/start")), Ok(HttpStatus(500)));
        assert_eq!(
            block_on(transport.post("/start")),
            Err(TransportError::new("offline"))
        );
        assert_eq!(block_on(transport.post("/start")), Ok(HttpStatus(200)));
        assert_eq!(block_on(transport.post("/start")), Ok(HttpStatus(200)));
    }

    #[test]
    fn test_records_each_request() {
        let transport = ScriptedTransport::failing("refused");
        let _ = block_on(transport.post("/start"));
        let _ = block_on(transport.post("/other"));
        assert_eq!(
            transport.requests(),
            vec!["/start".to_string(), "/other".to_string()]
        );
        assert_eq!(transport.request_count(), 2);
    }
}
