//! # Store Client
//!
//! Wraps a `RecordClient<Store>`; serves as the [`StoreService`] handed to the seed.
use crate::model::{Store, StoreCreate, StoreUpdate};
use crate::services::StoreService;
use async_trait::async_trait;
use commerce_host::{HostClient, HostError, RecordClient, RecordId};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct StoreClient {
    inner: RecordClient<Store>,
}

impl StoreClient {
    pub fn new(inner: RecordClient<Store>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_store(&self, name: &str) -> Result<Store, HostError> {
        debug!("Sending request");
        self.inner
            .create(StoreCreate {
                name: name.to_string(),
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_store(&self, id: RecordId, update: StoreUpdate) -> Result<Store, HostError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }
}

impl HostClient<Store> for StoreClient {
    fn inner(&self) -> &RecordClient<Store> {
        &self.inner
    }
}

#[async_trait]
impl StoreService for StoreClient {
    async fn list_stores(&self) -> Result<Vec<Store>, HostError> {
        self.list(()).await
    }
}
