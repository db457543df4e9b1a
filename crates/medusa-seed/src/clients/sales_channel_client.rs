//! # Sales Channel Client
//!
//! Wraps a `RecordClient<SalesChannel>`; serves as the [`SalesChannelService`].
use crate::model::{SalesChannel, SalesChannelCreate, SalesChannelFilter};
use crate::services::SalesChannelService;
use async_trait::async_trait;
use commerce_host::{HostClient, HostError, RecordClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct SalesChannelClient {
    inner: RecordClient<SalesChannel>,
}

impl SalesChannelClient {
    pub fn new(inner: RecordClient<SalesChannel>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_sales_channel(&self, params: SalesChannelCreate) -> Result<SalesChannel, HostError> {
        debug!("Sending request");
        self.inner.create(params).await
    }
}

impl HostClient<SalesChannel> for SalesChannelClient {
    fn inner(&self) -> &RecordClient<SalesChannel> {
        &self.inner
    }
}

#[async_trait]
impl SalesChannelService for SalesChannelClient {
    async fn list_sales_channels(&self, filter: SalesChannelFilter) -> Result<Vec<SalesChannel>, HostError> {
        self.list(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commerce_host::mock::{create_mock_client, expect_list, MockClient};
    use commerce_host::RecordId;

    #[tokio::test]
    async fn test_list_forwards_name_filter() {
        let (client, mut receiver) = create_mock_client::<SalesChannel>(10);
        let channels = SalesChannelClient::new(client);

        let task = tokio::spawn(async move {
            channels
                .list_sales_channels(SalesChannelFilter::by_name("Default Sales Channel"))
                .await
        });

        let (filter, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(filter.name.as_deref(), Some("Default Sales Channel"));
        responder.send(Ok(vec![])).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_errors_pass_through() {
        let mut mock = MockClient::<SalesChannel>::new();
        mock.expect_create().return_err(HostError::NotFound("sc".into()));
        mock.expect_list().return_ok(vec![SalesChannel {
            id: RecordId::from("sc_1"),
            name: "Default Sales Channel".into(),
            description: None,
            is_disabled: false,
        }]);

        let channels = SalesChannelClient::new(mock.client());
        let err = channels
            .create_sales_channel(SalesChannelCreate::named("Default Sales Channel"))
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::NotFound(_)));

        let listed = channels.list_sales_channels(SalesChannelFilter::default()).await.unwrap();
        assert_eq!(listed[0].id.as_str(), "sc_1");
        mock.verify();
    }
}
