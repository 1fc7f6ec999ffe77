use super::error_conversions::describe_js_value;
use crate::domain::trigger::{HttpStatus, TransportError};
use crate::global::get_global_scope;
use crate::ports::TransportPort;
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestInit, Response, WorkerGlobalScope};

/// `fetch` based transport: bodyless POST, no custom headers, status only.
#[derive(Clone, Copy)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }

    fn request_init() -> RequestInit {
        let init = RequestInit::new();
        init.set_method("POST");
        init
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl TransportPort for FetchTransport {
    async fn post(&self, endpoint: &str) -> Result<HttpStatus, TransportError> {
        let init = Self::request_init();
        let scope = get_global_scope().map_err(|e| TransportError::new(e.to_string()))?;

        let promise = if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
            worker.fetch_with_str_and_init(endpoint, &init)
        } else if let Ok(window) = scope.dyn_into::<web_sys::Window>() {
            window.fetch_with_str_and_init(endpoint, &init)
        } else {
            return Err(TransportError::new("Could not access fetch"));
        };

        // fetch only rejects when no response arrived at all
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| TransportError::new(describe_js_value(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| TransportError::new("fetch did not resolve to a Response"))?;

        Ok(HttpStatus(response.status()))
    }
}
