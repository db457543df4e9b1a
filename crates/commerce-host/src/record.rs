//! # HostRecord Trait
//!
//! The `HostRecord` trait is the contract every record type (Region, SalesChannel,
//! Product, …) implements to be held by the generic [`RecordActor`](crate::RecordActor).
//! It names the create/update payloads, the list filter, the context injected into
//! hooks, and the per-record error type.
//!
//! # Provided Methods (Hooks)
//! - [`HostRecord::on_create`] runs after construction and before the record is stored.
//!   Records that reference other records (a product referencing its categories) use it
//!   to validate those references through the injected context.
//!
//! Records that cannot be updated use [`std::convert::Infallible`] as their `Update`
//! type and implement `on_update` with an empty match.

use crate::id::RecordId;
use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait HostRecord: Clone + Send + Sync + 'static {
    /// Id prefix for this record type (`reg` yields `reg_1`, `reg_2`, ...).
    const PREFIX: &'static str;

    /// The creation payload.
    type Create: Send + Sync + Debug;

    /// The update payload.
    type Update: Send + Sync + Debug;

    /// Filter accepted by list requests.
    type Filter: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()`.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the record from the generated id and its payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: RecordId, params: Self::Create) -> Result<Self, Self::Error>;

    fn id(&self) -> &RecordId;

    /// Whether this record is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Called after construction, before the record becomes visible.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
