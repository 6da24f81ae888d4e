use crate::modules::events::adapters::outbound::event_repository::{
    EventRepository, RepositoryError,
};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::seed::{SeedMode, sample_events};
use std::sync::Arc;

pub struct ListEventsHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    repository: Arc<TRepository>,
    seed_mode: SeedMode,
}

impl<TRepository> ListEventsHandler<TRepository>
where
    TRepository: EventRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, seed_mode: SeedMode) -> Self {
        Self {
            repository,
            seed_mode,
        }
    }

    pub async fn handle(&self) -> Result<Vec<Event>, RepositoryError> {
        if self.seed_mode == SeedMode::EveryList {
            seed(&*self.repository).await?;
        }
        self.repository.list().await
    }
}

/// Appends the two sample events to `repository`.
pub async fn seed(repository: &impl EventRepository) -> Result<(), RepositoryError> {
    for event in sample_events() {
        repository.append(event).await?;
    }
    Ok(())
}
