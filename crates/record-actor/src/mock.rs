//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>`, but no `ResourceActor` sits behind it.
//! A background task answers each request from a queue of scripted expectations instead, so
//! code that talks to a store can be tested without any table state.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies, in order | Real table semantics |
//! | **State** | None (expectations only) | Real rows, ids, conflicts |
//! | **Use Case** | Pinning exactly which calls a service makes | Testing the store or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 1: Scripted store</b></summary>
//!
//! ```rust
//! use record_actor::mock::MockClient;
//! use record_actor::{FrameworkError, Record};
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: Option<u64>, text: String }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! impl Record for Note {
//!     type Id = u64; type Query = Infallible; type Error = NoteError;
//!     fn id(&self) -> Option<u64> { self.id }
//!     fn with_id(self, id: u64) -> Self { Self { id: Some(id), ..self } }
//!     fn matches(&self, query: &Infallible) -> bool { match *query {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_get(1).return_ok(Some(Note { id: Some(1), text: "hi".into() }));
//!     mock.expect_insert().echo_with_id(2);
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().text, "hi");
//!     let saved = client.insert(Note { id: None, text: "new".into() }).await.unwrap();
//!     assert_eq!(saved.id, Some(2));
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//!     assert_eq!(mock.written().len(), 1);
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Service with mocked stores</b></summary>
//!
//! ```text
//! Wrap mock.client() in the domain client and hand it to the service under test.
//! See tests/order_service_test.rs in the order-placement crate.
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 3: Full system</b></summary>
//!
//! Spawn real actors for every table. See `tests/integration_test.rs` in the order-placement crate.
//! </details>
//!
//! ## Low-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw request receiver; the `expect_*`
//! functions pull the next request off it so a test can assert on the payload and answer
//! by hand.

use crate::client::ResourceClient;
use crate::entity::Record;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// How a scripted write answers.
enum WriteReply<T: Record> {
    Fixed(Result<T, FrameworkError>),
    /// Send the incoming record straight back.
    Echo,
    /// Send the incoming record back carrying this id.
    EchoWithId(T::Id),
}

impl<T: Record> WriteReply<T> {
    fn resolve(self, record: T) -> Result<T, FrameworkError> {
        match self {
            WriteReply::Fixed(result) => result,
            WriteReply::Echo => Ok(record),
            WriteReply::EchoWithId(id) => Ok(record.with_id(id)),
        }
    }
}

/// An expected request to the mock client and the reply to give it.
enum Expectation<T: Record> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Find {
        response: Result<Option<T>, FrameworkError>,
    },
    Insert {
        reply: WriteReply<T>,
    },
    Save {
        reply: WriteReply<T>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking for fluent testing.
///
/// Expectations are consumed strictly in order. A request that does not match the next
/// expectation panics the background task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: Record> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    written: Arc<Mutex<Vec<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let written = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let written_clone = written.clone();

        // Background task answering requests from the script
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get for an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Find {
                            query: _,
                            respond_to,
                        },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Insert { record, respond_to },
                        Some(Expectation::Insert { reply }),
                    ) => {
                        written_clone.lock().unwrap().push(record.clone());
                        let _ = respond_to.send(reply.resolve(record));
                    }
                    (
                        ResourceRequest::Save { record, respond_to },
                        Some(Expectation::Save { reply }),
                    ) => {
                        written_clone.lock().unwrap().push(record.clone());
                        let _ = respond_to.send(reply.resolve(record));
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            written,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for the given id.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find` with any query.
    pub fn expect_find(&mut self) -> FindExpectationBuilder<T> {
        FindExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `insert`.
    pub fn expect_insert(&mut self) -> WriteExpectationBuilder<T> {
        WriteExpectationBuilder {
            insert: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `save`.
    pub fn expect_save(&mut self) -> WriteExpectationBuilder<T> {
        WriteExpectationBuilder {
            insert: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every record received by `insert` or `save`, in arrival order.
    pub fn written(&self) -> Vec<T> {
        self.written.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Record> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: Record> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `find` expectations.
pub struct FindExpectationBuilder<T: Record> {
    expectations: Queue<T>,
}

impl<T: Record> FindExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find { response: Ok(value) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find {
                response: Err(error),
            });
    }
}

/// Builder for `insert` and `save` expectations.
pub struct WriteExpectationBuilder<T: Record> {
    insert: bool,
    expectations: Queue<T>,
}

impl<T: Record> WriteExpectationBuilder<T> {
    fn push(self, reply: WriteReply<T>) {
        let expectation = if self.insert {
            Expectation::Insert { reply }
        } else {
            Expectation::Save { reply }
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Replies with a fixed record.
    pub fn return_ok(self, value: T) {
        self.push(WriteReply::Fixed(Ok(value)));
    }

    /// Replies with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(WriteReply::Fixed(Err(error)));
    }

    /// Replies with the record that was sent.
    pub fn echo(self) {
        self.push(WriteReply::Echo);
    }

    /// Replies with the record that was sent, carrying `id`.
    pub fn echo_with_id(self, id: T::Id) {
        self.push(WriteReply::EchoWithId(id));
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Record> {
    expectations: Queue<T>,
}

impl<T: Record> ListExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, values: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Ok(values),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Err(error),
            });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls. Pull requests off `receiver` with the
/// `expect_*` helpers, assert on them, and answer through the returned responder.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<T: Record>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}
