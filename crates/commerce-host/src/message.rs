//! # Record Messages
//!
//! Requests sent from a [`RecordClient`](crate::RecordClient) to its
//! [`RecordActor`](crate::RecordActor). Each carries a one-shot channel for the reply.

use crate::error::HostError;
use crate::id::RecordId;
use crate::record::HostRecord;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by record actors.
pub type Response<T> = oneshot::Sender<Result<T, HostError>>;

/// The operations a record actor understands.
///
/// Creation replies with the full stored record (not just the id) because
/// workflow results hand created records back to their caller.
#[derive(Debug)]
pub enum RecordRequest<T: HostRecord> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: RecordId,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: RecordId,
        update: T::Update,
        respond_to: Response<T>,
    },
}
