//! The store record. The host bootstraps exactly one; seeding updates it.

use super::error::{check_currency_code, check_non_empty, ValidationError};
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreCurrency {
    pub currency_code: String,
    #[serde(default)]
    pub is_default: bool,
}

impl StoreCurrency {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            is_default: false,
        }
    }

    pub fn default_currency(currency_code: impl Into<String>) -> Self {
        Self {
            is_default: true,
            ..Self::new(currency_code)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    pub id: RecordId,
    pub name: String,
    pub supported_currencies: Vec<StoreCurrency>,
    pub default_sales_channel_id: Option<RecordId>,
}

impl Store {
    pub fn default_currency(&self) -> Option<&str> {
        self.supported_currencies
            .iter()
            .find(|c| c.is_default)
            .map(|c| c.currency_code.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreCreate {
    pub name: String,
}

/// Fields left `None` are not touched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_currencies: Option<Vec<StoreCurrency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sales_channel_id: Option<RecordId>,
}

fn check_currencies(currencies: &[StoreCurrency]) -> Result<(), ValidationError> {
    for c in currencies {
        check_currency_code(&c.currency_code)?;
    }
    let defaults = currencies.iter().filter(|c| c.is_default).count();
    if defaults > 1 {
        return Err(ValidationError::MultipleDefaultCurrencies(defaults));
    }
    Ok(())
}

#[async_trait]
impl HostRecord for Store {
    const PREFIX: &'static str = "store";
    type Create = StoreCreate;
    type Update = StoreUpdate;
    type Filter = ();
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, params: StoreCreate) -> Result<Self, Self::Error> {
        check_non_empty("store name", &params.name)?;
        Ok(Self {
            id,
            name: params.name,
            supported_currencies: Vec::new(),
            default_sales_channel_id: None,
        })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, _: &()) -> bool {
        true
    }

    async fn on_update(&mut self, update: StoreUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(currencies) = update.supported_currencies {
            check_currencies(&currencies)?;
            self.supported_currencies = currencies;
        }
        if let Some(channel) = update.default_sales_channel_id {
            self.default_sales_channel_id = Some(channel);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store::from_create_params(
            RecordId::new("store", 1),
            StoreCreate {
                name: "Medusa Store".into(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_update_sets_currencies_and_channel() {
        let mut store = store();
        let update = StoreUpdate {
            supported_currencies: Some(vec![
                StoreCurrency::default_currency("eur"),
                StoreCurrency::new("usd"),
            ]),
            default_sales_channel_id: Some(RecordId::from("sc_1")),
        };
        store.on_update(update, &()).await.unwrap();
        assert_eq!(store.default_currency(), Some("eur"));
        assert_eq!(store.default_sales_channel_id, Some(RecordId::from("sc_1")));
    }

    #[tokio::test]
    async fn test_two_default_currencies_are_rejected() {
        let mut store = store();
        let update = StoreUpdate {
            supported_currencies: Some(vec![
                StoreCurrency::default_currency("eur"),
                StoreCurrency::default_currency("usd"),
            ]),
            ..Default::default()
        };
        let err = store.on_update(update, &()).await.unwrap_err();
        assert_eq!(err, ValidationError::MultipleDefaultCurrencies(2));
        assert!(store.supported_currencies.is_empty());
    }

    #[test]
    fn test_currency_serialises_default_flag() {
        let json = serde_json::to_value(StoreCurrency::new("usd")).unwrap();
        assert_eq!(json, serde_json::json!({ "currency_code": "usd", "is_default": false }));
    }
}
