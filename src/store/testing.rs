//! Test Support
//!
//! A scripted transport that records every call and serves canned
//! replies, plus fixture builders for lists and items.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use futures::channel::oneshot;
use leptos::prelude::Owner;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::{Method, Transport, TransportError};
use crate::models::{Item, List};
use crate::store::AppStore;

/// One request as the transport saw it
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

enum Reply {
    Ok(Value),
    Status(u16),
    /// Held until the paired sender fires
    Gated(oneshot::Receiver<Result<Value, TransportError>>),
}

/// Transport serving scripted replies in request order. An exhausted
/// script answers `null` with a 2xx, which is what most mutations need.
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn push_ok(&self, value: Value) {
        self.script.borrow_mut().push_back(Reply::Ok(value));
    }

    pub fn push_status(&self, status: u16) {
        self.script.borrow_mut().push_back(Reply::Status(status));
    }

    /// Queue a reply that parks the request until the returned sender is
    /// fired. Used to interleave operations in race tests.
    pub fn push_gated(&self) -> oneshot::Sender<Result<Value, TransportError>> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Reply::Gated(rx));
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        let reply = self.script.borrow_mut().pop_front();
        match reply {
            None | Some(Reply::Ok(Value::Null)) => Ok(Value::Null),
            Some(Reply::Ok(value)) => Ok(value),
            Some(Reply::Status(status)) => Err(TransportError::Status(status)),
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".into()))),
        }
    }
}

/// Fresh store over a scripted transport. The returned `Owner` keeps the
/// signal arena alive for the duration of the test.
pub fn setup() -> (Owner, Rc<ScriptedTransport>, AppStore) {
    let owner = Owner::new();
    owner.set();
    let transport = ScriptedTransport::new();
    let store = AppStore::new(transport.clone());
    (owner, transport, store)
}

pub fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn list(n: u128, name: &str) -> List {
    List {
        id: uid(n),
        name: name.to_string(),
        description: None,
        completed_at: None,
        order: None,
    }
}

pub fn item(n: u128, name: &str, order: i32) -> Item {
    Item {
        id: uid(n),
        name: name.to_string(),
        description: None,
        completed_at: None,
        order,
    }
}

pub fn list_json(n: u128, name: &str) -> Value {
    json!({ "id": uid(n), "name": name })
}

pub fn item_json(n: u128, name: &str, order: i32) -> Value {
    json!({ "id": uid(n), "name": name, "order": order })
}

pub fn completed_list_json(n: u128, name: &str) -> Value {
    let completed = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    json!({ "id": uid(n), "name": name, "completed_at": completed })
}
