//! # Record Client
//!
//! The handle callers use to talk to a [`RecordActor`](crate::RecordActor).

use crate::error::HostError;
use crate::id::RecordId;
use crate::message::RecordRequest;
use crate::record::HostRecord;
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cheaply cloneable client for a `RecordActor<T>`.
///
/// Each call sends one request over the actor's channel and awaits the reply on a
/// one-shot channel. Dropping every clone closes the channel and stops the actor.
#[derive(Clone)]
pub struct RecordClient<T: HostRecord> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

impl<T: HostRecord> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T, HostError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Create { params, respond_to })
            .await
            .map_err(|_| HostError::ActorClosed)?;
        response.await.map_err(|_| HostError::ActorDropped)?
    }

    pub async fn get(&self, id: RecordId) -> Result<Option<T>, HostError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Get { id, respond_to })
            .await
            .map_err(|_| HostError::ActorClosed)?;
        response.await.map_err(|_| HostError::ActorDropped)?
    }

    pub async fn list(&self, filter: T::Filter) -> Result<Vec<T>, HostError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::List { filter, respond_to })
            .await
            .map_err(|_| HostError::ActorClosed)?;
        response.await.map_err(|_| HostError::ActorDropped)?
    }

    pub async fn update(&self, id: RecordId, update: T::Update) -> Result<T, HostError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RecordRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| HostError::ActorClosed)?;
        response.await.map_err(|_| HostError::ActorDropped)?
    }

    /// Creates each payload in order, stopping at the first rejection.
    ///
    /// Records created before the failing one stay stored.
    pub async fn create_many(&self, params: Vec<T::Create>) -> Result<Vec<T>, HostError> {
        let mut created = Vec::with_capacity(params.len());
        for p in params {
            created.push(self.create(p).await?);
        }
        Ok(created)
    }
}
