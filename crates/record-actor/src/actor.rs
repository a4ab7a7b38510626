//! # Generic Store Actor
//!
//! This module defines the `ResourceActor`, the task that owns one table of records.
//! It is the "Server" side of the Actor Model: requests arrive over a channel and are
//! processed one at a time, so every single request is atomic with respect to the table.

use crate::client::ResourceClient;
use crate::entity::Record;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a table of records.
///
/// # Concurrency Model
/// Each `ResourceActor` processes its messages *sequentially* in a loop, so the `store`
/// needs no `Mutex` or `RwLock`: the task has exclusive ownership of it.
///
/// Note that this only makes *one request* atomic. A read followed by a write from the
/// same caller is two requests, and another caller may be served in between. Callers that
/// need read-modify-write atomicity must serialize themselves.
///
/// # Usage Pattern
///
/// ```rust
/// use record_actor::{Record, ResourceActor};
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<u64>, text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("empty note")]
/// struct NoteError;
///
/// impl Record for Note {
///     type Id = u64;
///     type Query = Infallible;
///     type Error = NoteError;
///     fn id(&self) -> Option<u64> { self.id }
///     fn with_id(self, id: u64) -> Self { Self { id: Some(id), ..self } }
///     fn matches(&self, query: &Infallible) -> bool { match *query {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let saved = client.insert(Note { id: None, text: "hi".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(1));
/// }
/// ```
///
/// # Operations
///
/// * **Insert**: validate, reject on unique-key conflict, assign the next id, store.
/// * **Save**: without an id, same as Insert. With an id, the row must exist; validate,
///   conflict-check against the *other* rows, replace.
/// * **Get** / **Find** / **List**: clones out of the table, in ascending id order.
pub struct ResourceActor<T: Record> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u64,
}

impl<T: Record> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Just the type name (e.g. "Product" instead of "order_placement::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Insert { record, respond_to } => {
                    debug!(entity_type, ?record, "Insert");
                    let result = self.insert(record);
                    match &result {
                        Ok(saved) => {
                            info!(entity_type, id = ?saved.id(), size = self.store.len(), "Inserted")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Insert failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Save { record, respond_to } => {
                    debug!(entity_type, ?record, "Save");
                    let result = match record.id() {
                        None => self.insert(record),
                        Some(id) => self.replace(id, record),
                    };
                    match &result {
                        Ok(saved) => info!(entity_type, id = ?saved.id(), "Saved"),
                        Err(e) => warn!(entity_type, error = %e, "Save failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find { query, respond_to } => {
                    let item = self.store.values().find(|r| r.matches(&query)).cloned();
                    let found = item.is_some();
                    debug!(entity_type, ?query, found, "Find");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn insert(&mut self, record: T) -> Result<T, FrameworkError> {
        record
            .validate()
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        if let Some(existing) = self.store.values().find(|r| record.conflicts_with(r)) {
            return Err(FrameworkError::Conflict(existing_label(existing)));
        }

        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        let record = record.with_id(id.clone());
        self.store.insert(id, record.clone());
        Ok(record)
    }

    fn replace(&mut self, id: T::Id, record: T) -> Result<T, FrameworkError> {
        if !self.store.contains_key(&id) {
            return Err(FrameworkError::NotFound(id.to_string()));
        }
        record
            .validate()
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        if let Some(existing) = self
            .store
            .iter()
            .find(|(other_id, r)| **other_id != id && record.conflicts_with(r))
            .map(|(_, r)| r)
        {
            return Err(FrameworkError::Conflict(existing_label(existing)));
        }

        self.store.insert(id, record.clone());
        Ok(record)
    }
}

fn existing_label<T: Record>(record: &T) -> String {
    record
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "an unsaved record".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: Option<u64>,
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("label must not be empty")]
    struct TagError;

    impl Record for Tag {
        type Id = u64;
        type Query = Infallible;
        type Error = TagError;

        fn id(&self) -> Option<u64> {
            self.id
        }

        fn with_id(self, id: u64) -> Self {
            Self { id: Some(id), ..self }
        }

        fn matches(&self, query: &Infallible) -> bool {
            match *query {}
        }

        fn validate(&self) -> Result<(), TagError> {
            if self.label.is_empty() {
                Err(TagError)
            } else {
                Ok(())
            }
        }

        fn conflicts_with(&self, other: &Self) -> bool {
            self.label == other.label
        }
    }

    fn tag(label: &str) -> Tag {
        Tag {
            id: None,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        let first = client.insert(tag("a")).await.unwrap();
        let second = client.insert(tag("b")).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_and_conflicting_records() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        client.insert(tag("a")).await.unwrap();

        let invalid = client.insert(tag("")).await;
        assert!(matches!(invalid, Err(FrameworkError::EntityError(_))));

        let duplicate = client.insert(tag("a")).await;
        assert!(matches!(duplicate, Err(FrameworkError::Conflict(ref id)) if id == "1"));

        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_row_and_rejects_unknown_id() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        let saved = client.insert(tag("a")).await.unwrap();
        let renamed = Tag {
            label: "renamed".to_string(),
            ..saved
        };
        // Saving a row under its own label is not a conflict with itself.
        let stored = client.save(renamed.clone()).await.unwrap();
        assert_eq!(stored, renamed);
        assert_eq!(client.get(1).await.unwrap(), Some(renamed));

        let ghost = Tag {
            id: Some(42),
            label: "ghost".to_string(),
        };
        assert!(matches!(
            client.save(ghost).await,
            Err(FrameworkError::NotFound(ref id)) if id == "42"
        ));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        for label in ["c", "a", "b"] {
            client.insert(tag(label)).await.unwrap();
        }

        let labels: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }
}
