//! # RecordClient Trait
//!
//! Common interface for table-specific clients: provides `get`, `list` and `save` on top of a
//! generic `ResourceClient`, with errors mapped into the table's own error type.
use crate::{FrameworkError, Record, ResourceClient};
use async_trait::async_trait;

/// Trait for table-specific clients to inherit the standard repository operations.
///
/// # Example
///
/// ```rust
/// use record_actor::{FrameworkError, Record, RecordClient, ResourceClient};
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<u64> }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note store: {0}")]
/// struct NoteError(String);
///
/// impl Record for Note {
///     type Id = u64;
///     type Query = Infallible;
///     type Error = NoteError;
///     fn id(&self) -> Option<u64> { self.id }
///     fn with_id(self, id: u64) -> Self { Self { id: Some(id) } }
///     fn matches(&self, query: &Infallible) -> bool { match *query {} }
/// }
///
/// struct NoteClient {
///     inner: ResourceClient<Note>,
/// }
///
/// impl RecordClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         NoteError(e.to_string())
///     }
/// }
///
/// // get(), list() and save() are provided automatically.
/// async fn usage(client: NoteClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait RecordClient<T: Record>: Send + Sync {
    /// The table-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the table-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record in id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Upsert a record and return its persisted form.
    #[tracing::instrument(skip(self))]
    async fn save(&self, record: T) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().save(record).await.map_err(Self::map_error)
    }
}
