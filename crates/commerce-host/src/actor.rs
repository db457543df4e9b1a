//! # Record Actor
//!
//! `RecordActor<T>` is the server half of a record table. It owns every record of one
//! type, generates ids, and processes requests one at a time in its own Tokio task, so
//! the table needs no locking.

use crate::client::RecordClient;
use crate::error::HostError;
use crate::id::RecordId;
use crate::message::RecordRequest;
use crate::record::HostRecord;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that holds all records of type `T`.
///
/// Records are kept in insertion order; list requests return them in the order they
/// were created, which is what "read the single existing store" relies on.
///
/// ```rust
/// use async_trait::async_trait;
/// use commerce_host::{HostRecord, RecordActor, RecordId};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: RecordId, label: String }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl HostRecord for Tag {
///     const PREFIX: &'static str = "tag";
///     type Create = String;
///     type Update = String;
///     type Filter = ();
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(id: RecordId, label: String) -> Result<Self, TagError> {
///         Ok(Self { id, label })
///     }
///     fn id(&self) -> &RecordId { &self.id }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, label: String, _: &()) -> Result<(), TagError> {
///         self.label = label;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RecordActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let tag = client.create("sale".to_string()).await.unwrap();
///     assert_eq!(tag.id.as_str(), "tag_1");
///     assert_eq!(client.list(()).await.unwrap().len(), 1);
/// }
/// ```
pub struct RecordActor<T: HostRecord> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    records: Vec<T>,
    index: HashMap<RecordId, usize>,
    next_seq: u32,
}

impl<T: HostRecord> RecordActor<T> {
    /// Creates a new `RecordActor` and its associated `RecordClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
            index: HashMap::new(),
            next_seq: 1,
        };
        (actor, RecordClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to each `on_create`/`on_update` hook.
    pub async fn run(mut self, context: T::Context) {
        // "Region" instead of "medusa_seed::model::region::Region"
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Create { params, respond_to } => {
                    debug!(record_type, ?params, "Create");
                    let id = RecordId::new(T::PREFIX, self.next_seq);

                    let mut record = match T::from_create_params(id.clone(), params) {
                        Ok(record) => record,
                        Err(e) => {
                            warn!(record_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(HostError::Record(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = record.on_create(&context).await {
                        warn!(record_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(HostError::Record(Box::new(e))));
                        continue;
                    }

                    self.next_seq += 1;
                    self.index.insert(id.clone(), self.records.len());
                    self.records.push(record.clone());
                    info!(record_type, %id, size = self.records.len(), "Created");
                    let _ = respond_to.send(Ok(record));
                }
                RecordRequest::Get { id, respond_to } => {
                    let record = self.index.get(&id).map(|&i| self.records[i].clone());
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                RecordRequest::List { filter, respond_to } => {
                    let matched: Vec<T> = self
                        .records
                        .iter()
                        .filter(|r| r.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(record_type, ?filter, matched = matched.len(), "List");
                    let _ = respond_to.send(Ok(matched));
                }
                RecordRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(record_type, %id, ?update, "Update");
                    let Some(&i) = self.index.get(&id) else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(HostError::NotFound(id.to_string())));
                        continue;
                    };
                    // Hooks mutate a copy so a rejected update leaves the record untouched.
                    let mut record = self.records[i].clone();
                    if let Err(e) = record.on_update(update, &context).await {
                        warn!(record_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(HostError::Record(Box::new(e))));
                        continue;
                    }
                    self.records[i] = record.clone();
                    info!(record_type, %id, "Updated");
                    let _ = respond_to.send(Ok(record));
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Warehouse {
        id: RecordId,
        name: String,
        open: bool,
    }

    #[derive(Debug)]
    struct WarehouseUpdate {
        open: bool,
    }

    #[derive(Debug, thiserror::Error)]
    enum WarehouseError {
        #[error("warehouse name must not be empty")]
        EmptyName,
        #[error("warehouse is already in that state")]
        Unchanged,
    }

    #[async_trait]
    impl HostRecord for Warehouse {
        const PREFIX: &'static str = "wh";
        type Create = String;
        type Update = WarehouseUpdate;
        type Filter = Option<bool>;
        type Context = ();
        type Error = WarehouseError;

        fn from_create_params(id: RecordId, name: String) -> Result<Self, WarehouseError> {
            if name.is_empty() {
                return Err(WarehouseError::EmptyName);
            }
            Ok(Self { id, name, open: false })
        }

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn matches(&self, filter: &Option<bool>) -> bool {
            filter.map_or(true, |open| self.open == open)
        }

        async fn on_update(&mut self, update: WarehouseUpdate, _: &()) -> Result<(), WarehouseError> {
            if self.open == update.open {
                return Err(WarehouseError::Unchanged);
            }
            self.open = update.open;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_list_get_update() {
        let (actor, client) = RecordActor::<Warehouse>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let first = client.create("Copenhagen".into()).await.unwrap();
        let second = client.create("Berlin".into()).await.unwrap();
        assert_eq!(first.id.as_str(), "wh_1");
        assert_eq!(second.id.as_str(), "wh_2");

        let opened = client
            .update(second.id.clone(), WarehouseUpdate { open: true })
            .await
            .unwrap();
        assert!(opened.open);

        let all = client.list(None).await.unwrap();
        assert_eq!(all.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(), ["Copenhagen", "Berlin"]);
        let open_only = client.list(Some(true)).await.unwrap();
        assert_eq!(open_only, vec![opened]);

        let fetched = client.get(first.id.clone()).await.unwrap();
        assert_eq!(fetched, Some(first));
        assert!(client.get(RecordId::from("wh_9")).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_requests_leave_state_untouched() {
        let (actor, client) = RecordActor::<Warehouse>::new(10);
        tokio::spawn(actor.run(()));

        let err = client.create(String::new()).await.unwrap_err();
        assert!(matches!(err, HostError::Record(_)));

        // A failed create does not consume a sequence number.
        let created = client.create("Malmo".into()).await.unwrap();
        assert_eq!(created.id.as_str(), "wh_1");

        let err = client
            .update(created.id.clone(), WarehouseUpdate { open: false })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already in that state"));

        let missing = client
            .update(RecordId::from("wh_7"), WarehouseUpdate { open: true })
            .await
            .unwrap_err();
        assert!(matches!(missing, HostError::NotFound(id) if id == "wh_7"));
    }
}
