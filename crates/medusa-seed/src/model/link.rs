//! Cross-module links.
//!
//! A link joins two records owned by different modules. It is described as a map from
//! module to the foreign-key fields identifying the record on that side:
//!
//! ```rust
//! use medusa_seed::model::{LinkDefinition, Module};
//!
//! let link = LinkDefinition::new()
//!     .with(Module::StockLocation, "stock_location_id", "sloc_1")
//!     .with(Module::Fulfillment, "fulfillment_provider_id", "manual_manual");
//! assert_eq!(link.modules().count(), 2);
//! ```

use super::error::ValidationError;
use async_trait::async_trait;
use commerce_host::{HostRecord, RecordId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt::Display;

/// Modules of the host that own linkable records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    ApiKey,
    Fulfillment,
    SalesChannel,
    StockLocation,
}

impl Module {
    pub fn as_str(self) -> &'static str {
        match self {
            Module::ApiKey => "api_key",
            Module::Fulfillment => "fulfillment",
            Module::SalesChannel => "sales_channel",
            Module::StockLocation => "stock_location",
        }
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Module -> { foreign key field -> value }.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LinkDefinition(BTreeMap<Module, BTreeMap<String, String>>);

impl LinkDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, module: Module, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.entry(module).or_default().insert(field.into(), value.into());
        self
    }

    pub fn modules(&self) -> impl Iterator<Item = Module> + '_ {
        self.0.keys().copied()
    }

    pub fn field(&self, module: Module, field: &str) -> Option<&str> {
        self.0.get(&module)?.get(field).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub id: RecordId,
    pub definition: LinkDefinition,
}

/// Selects links where any side has `field == value`. An empty filter selects all.
#[derive(Debug, Clone, Default)]
pub struct LinkFilter {
    pub field: Option<(String, String)>,
}

impl LinkFilter {
    pub fn involving(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: Some((field.into(), value.into())),
        }
    }
}

#[async_trait]
impl HostRecord for Link {
    const PREFIX: &'static str = "link";
    type Create = LinkDefinition;
    type Update = Infallible;
    type Filter = LinkFilter;
    type Context = ();
    type Error = ValidationError;

    fn from_create_params(id: RecordId, definition: LinkDefinition) -> Result<Self, Self::Error> {
        let arity = definition.0.len();
        if arity != 2 {
            return Err(ValidationError::LinkArity(arity));
        }
        if definition.0.values().any(BTreeMap::is_empty) {
            return Err(ValidationError::Empty("link fields"));
        }
        Ok(Self { id, definition })
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn matches(&self, filter: &LinkFilter) -> bool {
        let Some((field, value)) = &filter.field else {
            return true;
        };
        self.definition
            .0
            .values()
            .any(|fields| fields.get(field) == Some(value))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_needs_two_modules() {
        let one_sided = LinkDefinition::new().with(Module::StockLocation, "stock_location_id", "sloc_1");
        let err = Link::from_create_params(RecordId::new("link", 1), one_sided).unwrap_err();
        assert_eq!(err, ValidationError::LinkArity(1));
    }

    #[test]
    fn test_filter_matches_either_side() {
        let link = Link::from_create_params(
            RecordId::new("link", 1),
            LinkDefinition::new()
                .with(Module::SalesChannel, "sales_channel_id", "sc_1")
                .with(Module::ApiKey, "publishable_key_id", "apk_1"),
        )
        .unwrap();
        assert!(link.matches(&LinkFilter::involving("sales_channel_id", "sc_1")));
        assert!(link.matches(&LinkFilter::involving("publishable_key_id", "apk_1")));
        assert!(!link.matches(&LinkFilter::involving("sales_channel_id", "sc_2")));
        assert_eq!(link.definition.field(Module::ApiKey, "publishable_key_id"), Some("apk_1"));
    }

    #[test]
    fn test_definition_serialises_by_module_name() {
        let def = LinkDefinition::new()
            .with(Module::StockLocation, "stock_location_id", "sloc_1")
            .with(Module::Fulfillment, "fulfillment_set_id", "fuset_1");
        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            serde_json::json!({
                "fulfillment": { "fulfillment_set_id": "fuset_1" },
                "stock_location": { "stock_location_id": "sloc_1" },
            })
        );
    }
}
