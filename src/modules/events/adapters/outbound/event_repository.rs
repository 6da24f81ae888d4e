// Port for the event collection.
//
// Purpose
// - Keep the use cases independent of where events are held.
//
// Responsibilities
// - List the whole collection in insertion order.
// - Append a single event at the end.

use crate::modules::events::core::event::Event;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, RepositoryError>;
    async fn append(&self, event: Event) -> Result<(), RepositoryError>;
}
