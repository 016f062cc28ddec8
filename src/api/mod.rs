//! REST API Bindings
//!
//! Typed wrappers over the Listified JSON endpoints, organized by entity.

mod items;
mod lists;
mod transport;

pub use transport::{FetchTransport, Method, Transport, TransportError, DEFAULT_TIMEOUT_MS};

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

/// Client for the Listified REST API.
///
/// Mutation responses are ignored: the stores re-fetch after writes
/// instead of merging server echoes.
///
/// The transport handle is arena-stored so the client stays `Copy` and
/// `Send` and can be captured by view closures.
#[derive(Clone, Copy)]
pub struct ApiClient {
    transport: StoredValue<Rc<dyn Transport>, LocalStorage>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self {
            transport: StoredValue::new_local(transport),
        }
    }

    fn transport(&self) -> Rc<dyn Transport> {
        self.transport.get_value()
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let transport = self.transport();
        let value = transport.request(Method::Get, path, None).await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    pub(crate) async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Decode(e.to_string()))?;
        let transport = self.transport();
        transport.request(method, path, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), TransportError> {
        let transport = self.transport();
        transport.request(Method::Delete, path, None).await?;
        Ok(())
    }
}
