//! # Fulfillment Client
//!
//! Serves as the [`FulfillmentService`]: fulfillment sets are created directly on the
//! module, without a workflow.
use crate::model::{FulfillmentSet, FulfillmentSetCreate};
use crate::services::FulfillmentService;
use async_trait::async_trait;
use commerce_host::{HostClient, HostError, RecordClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct FulfillmentClient {
    inner: RecordClient<FulfillmentSet>,
}

impl FulfillmentClient {
    pub fn new(inner: RecordClient<FulfillmentSet>) -> Self {
        Self { inner }
    }
}

impl HostClient<FulfillmentSet> for FulfillmentClient {
    fn inner(&self) -> &RecordClient<FulfillmentSet> {
        &self.inner
    }
}

#[async_trait]
impl FulfillmentService for FulfillmentClient {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create_fulfillment_sets(&self, data: FulfillmentSetCreate) -> Result<FulfillmentSet, HostError> {
        debug!(?data, "Sending request");
        self.inner.create(data).await
    }
}
