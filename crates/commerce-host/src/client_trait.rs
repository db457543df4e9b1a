//! # HostClient Trait
//!
//! Domain-specific clients (a sales-channel client, a region client, …) wrap a
//! [`RecordClient`] and implement this trait to inherit instrumented `get`/`list`
//! without repeating them.
use crate::{HostError, HostRecord, RecordClient, RecordId};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the read operations.
///
/// ```rust
/// use async_trait::async_trait;
/// use commerce_host::{HostClient, HostRecord, RecordClient, RecordId};
///
/// #[derive(Clone, Debug)] struct Note { id: RecordId }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl HostRecord for Note {
///     const PREFIX: &'static str = "note";
///     type Create = (); type Update = std::convert::Infallible;
///     type Filter = (); type Context = (); type Error = NoteError;
///     fn from_create_params(id: RecordId, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
///     fn id(&self) -> &RecordId { &self.id }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, u: std::convert::Infallible, _: &()) -> Result<(), NoteError> { match u {} }
/// }
///
/// struct NoteClient { inner: RecordClient<Note> }
///
/// impl HostClient<Note> for NoteClient {
///     fn inner(&self) -> &RecordClient<Note> { &self.inner }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get() and list() are provided
///     let _ = client.get(RecordId::from("note_1")).await;
///     let _ = client.list(()).await;
/// }
/// ```
#[async_trait]
pub trait HostClient<T: HostRecord>: Send + Sync {
    /// Access the inner generic RecordClient.
    fn inner(&self) -> &RecordClient<T>;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: RecordId) -> Result<Option<T>, HostError> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// List the records matching `filter`, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: T::Filter) -> Result<Vec<T>, HostError> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await
    }
}
