//! API keys. Publishable keys are what a storefront sends to scope requests to its
//! sales channels.

use super::error::{check_non_empty, ValidationError};
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordId};
use serde::Serialize;
use std::convert::Infallible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyType {
    Publishable,
    Secret,
}

impl ApiKeyType {
    fn token_prefix(self) -> &'static str {
        match self {
            ApiKeyType::Publishable => "pk",
            ApiKeyType::Secret => "sk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiKey {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub key_type: ApiKeyType,
    pub created_by: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiKeyCreate {
    pub title: String,
    #[serde(rename = "type")]
    pub key_type: ApiKeyType,
    pub created_by: String,
}

#[async_trait]
impl HostRecord for ApiKey {
    const PREFIX: &'static str = "apk";
    type Create = ApiKeyCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: ApiKeyCreate) -> Result<Self, Self::Error> {
        check_non_empty("api key title", &params.title)?;
        // created_by is blank when a script, not a user, creates the key
        let token = format!("{}_{}", params.key_type.token_prefix(), id.suffix());
        Ok(Self {
            id,
            title: params.title,
            key_type: params.key_type,
            created_by: params.created_by,
            token,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, _: &()) -> bool {
        true
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_prefix_follows_key_type() {
        let key = ApiKey::from_create_params(
            RecordId::new("apk", 4),
            ApiKeyCreate {
                title: "Webshop".into(),
                key_type: ApiKeyType::Publishable,
                created_by: String::new(),
            },
        )
        .unwrap();
        assert_eq!(key.token, "pk_4");
    }
}
