//! # Host Lifecycle
//!
//! Starting, wiring and stopping the in-memory host.
//!
//! [`CommerceSystem::new`] creates one [`RecordActor`](commerce_host::RecordActor) per
//! record type, then spawns each with its context. Only products have a dependency
//! (the category table), and nothing depends on products, so the graph is acyclic and
//! the system shuts down by dropping clients:
//!
//! 1. every client clone is dropped, closing the request channels;
//! 2. each actor's `recv()` returns `None` and it logs `Shutdown`;
//! 3. [`CommerceSystem::shutdown`] joins the tasks.
//!
//! A [`SeedContext`](crate::seed::SeedContext) holds clones of the clients, so drop it
//! before calling `shutdown`, or the join will wait on actors that can still be reached.

pub mod commerce_system;

pub use commerce_system::*;
