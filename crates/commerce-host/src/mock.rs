//! # Mock Records
//!
//! Test doubles for code that sits on top of a [`RecordClient`]. Two styles are offered:
//!
//! - [`create_mock_client`] plus the `expect_*` helpers: you receive each raw request,
//!   inspect its payload, and answer it yourself.
//! - [`MockClient`]: a fluent expectation queue answered by a background task; call
//!   [`MockClient::verify`] at the end to assert every expectation was consumed.
//!
//! A request that does not match the next queued expectation panics the background
//! task, which drops the reply channel; the caller then sees
//! [`HostError::ActorDropped`].
//!
//! ```rust
//! use async_trait::async_trait;
//! use commerce_host::mock::MockClient;
//! use commerce_host::{HostError, HostRecord, RecordId};
//!
//! #[derive(Clone, Debug)] struct Channel { id: RecordId, name: String }
//! #[derive(Debug, thiserror::Error)] #[error("channel error")] struct ChannelError;
//!
//! #[async_trait]
//! impl HostRecord for Channel {
//!     const PREFIX: &'static str = "sc";
//!     type Create = String; type Update = std::convert::Infallible;
//!     type Filter = (); type Context = (); type Error = ChannelError;
//!     fn from_create_params(id: RecordId, name: String) -> Result<Self, ChannelError> { Ok(Self { id, name }) }
//!     fn id(&self) -> &RecordId { &self.id }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_update(&mut self, u: std::convert::Infallible, _: &()) -> Result<(), ChannelError> { match u {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Channel>::new();
//!     mock.expect_list().return_ok(vec![]);
//!     mock.expect_create().return_err(HostError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.list(()).await.unwrap().is_empty());
//!     assert!(matches!(client.create("Web".into()).await, Err(HostError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::RecordClient;
use crate::error::HostError;
use crate::id::RecordId;
use crate::message::RecordRequest;
use crate::record::HostRecord;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// An expected request and the reply to give it.
enum Expectation<T: HostRecord> {
    Create { response: Result<T, HostError> },
    Get { response: Result<Option<T>, HostError> },
    List { response: Result<Vec<T>, HostError> },
    Update { response: Result<T, HostError> },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock record client driven by a queue of expectations.
pub struct MockClient<T: HostRecord> {
    client: RecordClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: HostRecord> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (RecordRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::Update { respond_to, .. }, Some(Expectation::Update { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get {
            response,
        })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Update {
            response,
        })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: HostRecord> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by the `expect_*` methods; pick the reply.
pub struct ExpectationBuilder<T: HostRecord, R> {
    expectations: Queue<T>,
    wrap: fn(Result<R, HostError>) -> Expectation<T>,
}

impl<T: HostRecord, R> ExpectationBuilder<T, R> {
    fn new(expectations: Queue<T>, wrap: fn(Result<R, HostError>) -> Expectation<T>) -> Self {
        Self { expectations, wrap }
    }

    pub fn return_ok(self, value: R) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Ok(value)));
    }

    pub fn return_err(self, error: HostError) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Err(error)));
    }
}

/// Creates a client whose requests arrive on the returned receiver.
pub fn create_mock_client<T: HostRecord>(
    buffer_size: usize,
) -> (RecordClient<T>, mpsc::Receiver<RecordRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordClient::new(sender), receiver)
}

/// Next request must be a Create; returns its payload and reply channel.
pub async fn expect_create<T: HostRecord>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, HostError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request must be a Get.
pub async fn expect_get<T: HostRecord>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(RecordId, oneshot::Sender<Result<Option<T>, HostError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request must be a List.
pub async fn expect_list<T: HostRecord>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Filter, oneshot::Sender<Result<Vec<T>, HostError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Next request must be an Update.
pub async fn expect_update<T: HostRecord>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(RecordId, T::Update, oneshot::Sender<Result<T, HostError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}
