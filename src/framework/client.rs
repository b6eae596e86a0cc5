//! # Generic Client
//!
//! `ResourceClient<T>` is the caller half of an actor pair. It holds only an
//! mpsc sender, so cloning is cheap and clones can be handed to any task.
//!
//! Every request is a bounded wait: if the actor does not answer within
//! [`REQUEST_TIMEOUT`], the call fails with [`FrameworkError::Timeout`]
//! instead of blocking its caller forever. The timeout is deliberately a
//! distinct error from any business failure — a timed-out operation may or
//! may not have been performed.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Upper bound on how long a client waits for an actor's response.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        msg: ResourceRequest<T>,
        response: oneshot::Receiver<Result<R, FrameworkError>>,
    ) -> Result<R, FrameworkError> {
        self.sender
            .send(msg)
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        match tokio::time::timeout(REQUEST_TIMEOUT, response).await {
            Err(_) => Err(FrameworkError::Timeout(REQUEST_TIMEOUT)),
            Ok(Err(_)) => Err(FrameworkError::ActorDropped),
            Ok(Ok(result)) => result,
        }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Create { params, respond_to }, response)
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Get { id, respond_to }, response)
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::List { respond_to }, response)
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            },
            response,
        )
        .await
    }

    #[allow(dead_code)]
    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Delete { id, respond_to }, response)
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.request(
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            },
            response,
        )
        .await
    }
}
