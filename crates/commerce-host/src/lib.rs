//! # Commerce Host
//!
//! A small, actor-backed, in-memory record host. It stands in for the persistence layer
//! of a commerce platform so that code which *drives* the platform (seeders, fixtures,
//! maintenance commands) can run and be tested end-to-end without one.
//!
//! It deliberately does very little: records are created, listed, fetched and updated.
//! There is no query language, no transactions and no compensation; each request is its
//! own unit of work.
//!
//! ## Layers
//!
//! 1. **Record** ([`HostRecord`]) - a record type, its payloads, filter and validation hooks.
//! 2. **Actor** ([`RecordActor`]) - one Tokio task per record type, owning the table and
//!    processing requests sequentially.
//! 3. **Client** ([`RecordClient`], [`HostClient`]) - the cloneable handle callers use.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run()`, not `new()`. A record that must check references
//! to another table (products checking their categories) receives that table's client as
//! its `Context`, so every actor can be constructed first and wired afterwards.
//!
//! ## Testing
//!
//! See [`mock`] for an expectation-driven stand-in for `RecordClient`.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod record;
pub mod tracing;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use client_trait::HostClient;
pub use error::HostError;
pub use id::RecordId;
pub use message::{RecordRequest, Response};
pub use record::HostRecord;
