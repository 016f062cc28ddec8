//! HTTP Transport
//!
//! The stores talk to the backend through the `Transport` trait so tests
//! can substitute a scripted implementation. The real one wraps the
//! browser fetch API and races every request against a timeout, so a hung
//! request cannot pin the loading hint forever.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// A fetch-like JSON client: `request(method, path, body) -> JSON | error`.
#[async_trait(?Send)]
pub trait Transport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}

pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;

/// Browser fetch transport. Paths are resolved against `base`.
pub struct FetchTransport {
    base: String,
    timeout_ms: u32,
}

impl FetchTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        use futures::future::{select, Either};
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        let opts = web_sys::RequestInit::new();
        opts.set_method(method.as_str());
        if let Some(body) = &body {
            let payload =
                serde_json::to_string(body).map_err(|e| TransportError::Decode(e.to_string()))?;
            opts.set_body(&JsValue::from_str(&payload));
        }

        let url = format!("{}{}", self.base, path);
        let request =
            web_sys::Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_err)?;
        }

        let window =
            web_sys::window().ok_or_else(|| TransportError::Network("no window".into()))?;
        let fetch = JsFuture::from(window.fetch_with_request(&request));
        let timeout = gloo_timers::future::TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(fetch);

        let response = match select(fetch, timeout).await {
            Either::Left((result, _)) => result.map_err(js_err)?,
            Either::Right(_) => return Err(TransportError::Network("request timed out".into())),
        };

        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| TransportError::Decode("not a Response".into()))?;
        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        let text = text.as_string().unwrap_or_default();
        if text.is_empty() {
            // DELETE returns 204 with no body
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

fn js_err(err: wasm_bindgen::JsValue) -> TransportError {
    TransportError::Network(format!("{err:?}"))
}
