//! Stock locations (warehouses).

use super::error::{check_country_code, check_non_empty, ValidationError};
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordId};
use serde::Serialize;
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLocationAddress {
    pub city: String,
    pub country_code: String,
    pub address_1: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLocation {
    pub id: RecordId,
    pub name: String,
    pub address: StockLocationAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLocationCreate {
    pub name: String,
    pub address: StockLocationAddress,
}

#[async_trait]
impl HostRecord for StockLocation {
    const PREFIX: &'static str = "sloc";
    type Create = StockLocationCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: StockLocationCreate) -> Result<Self, Self::Error> {
        check_non_empty("stock location name", &params.name)?;
        // address_1 may legitimately be blank
        check_country_code(&params.address.country_code)?;
        Ok(Self {
            id,
            name: params.name,
            address: params.address,
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
