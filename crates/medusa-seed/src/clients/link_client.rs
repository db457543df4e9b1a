//! # Link Client
//!
//! Serves as the [`RemoteLink`] service.
use crate::model::{Link, LinkDefinition};
use crate::services::RemoteLink;
use async_trait::async_trait;
use commerce_host::{HostClient, HostError, RecordClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct LinkClient {
    inner: RecordClient<Link>,
}

impl LinkClient {
    pub fn new(inner: RecordClient<Link>) -> Self {
        Self { inner }
    }
}

impl HostClient<Link> for LinkClient {
    fn inner(&self) -> &RecordClient<Link> {
        &self.inner
    }
}

#[async_trait]
impl RemoteLink for LinkClient {
    #[instrument(skip(self))]
    async fn create(&self, definition: LinkDefinition) -> Result<Link, HostError> {
        debug!("Sending request");
        self.inner.create(definition).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Module;
    use commerce_host::mock::{create_mock_client, expect_create};
    use commerce_host::RecordId;

    #[tokio::test]
    async fn test_create_sends_definition_verbatim() {
        let (client, mut receiver) = create_mock_client::<Link>(10);
        let links = LinkClient::new(client);
        let definition = LinkDefinition::new()
            .with(Module::StockLocation, "stock_location_id", "sloc_1")
            .with(Module::Fulfillment, "fulfillment_provider_id", "manual_manual");

        let sent = definition.clone();
        let task = tokio::spawn(async move { links.create(sent).await });

        let (received, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(received, definition);
        responder
            .send(Ok(Link {
                id: RecordId::from("link_1"),
                definition: received,
            }))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap().id.as_str(), "link_1");
    }
}
