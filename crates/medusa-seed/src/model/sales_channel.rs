//! Sales channels. Listing by name is what makes the default channel find-or-create.

use super::error::{check_non_empty, ValidationError};
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordId};
use serde::Serialize;
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesChannel {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub is_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesChannelCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_disabled: bool,
}

impl SalesChannelCreate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_disabled: false,
        }
    }
}

/// Exact-match filter; an empty filter selects every channel.
#[derive(Debug, Clone, Default)]
pub struct SalesChannelFilter {
    pub name: Option<String>,
}

impl SalesChannelFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[async_trait]
impl HostRecord for SalesChannel {
    const PREFIX: &'static str = "sc";
    type Create = SalesChannelCreate;
    type Update = Infallible;
    type Filter = SalesChannelFilter;
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: SalesChannelCreate) -> Result<Self, Self::Error> {
        check_non_empty("sales channel name", &params.name)?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            is_disabled: params.is_disabled,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, filter: &SalesChannelFilter) -> bool {
        filter.name.as_ref().map_or(true, |name| &self.name == name)
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}
