use crate::modules::events::adapters::outbound::event_repository::{
    EventRepository, RepositoryError,
};
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::decide::decide_create;
use crate::modules::events::use_cases::create_event::decision::{Decision, ValidationError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("validation failed: {} rule(s) broken", .0.len())]
    Rejected(Vec<ValidationError>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct CreateEventHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateEventHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Validates the command and appends the event. Rejected commands never
    /// reach the repository.
    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        match decide_create(command) {
            Decision::Accepted { event } => {
                self.repository.append(event.clone()).await?;
                tracing::info!(event_id = %event.id, name = %event.name, "event created");
                Ok(event)
            }
            Decision::Rejected { reasons } => {
                tracing::debug!(count = reasons.len(), "event rejected");
                Err(ApplicationError::Rejected(reasons))
            }
        }
    }
}
