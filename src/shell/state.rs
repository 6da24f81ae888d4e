use crate::modules::events::adapters::outbound::event_repository::RepositoryError;
use crate::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use crate::modules::events::core::seed::SeedMode;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::list_events::handler::{ListEventsHandler, seed};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<InMemoryEventRepository>,
    pub list_handler: Arc<ListEventsHandler<InMemoryEventRepository>>,
    pub create_handler: Arc<CreateEventHandler<InMemoryEventRepository>>,
}

impl AppState {
    /// Wires both handlers to `repository` without touching its contents.
    pub fn new(repository: Arc<InMemoryEventRepository>, seed_mode: SeedMode) -> Self {
        Self {
            list_handler: Arc::new(ListEventsHandler::new(repository.clone(), seed_mode)),
            create_handler: Arc::new(CreateEventHandler::new(repository.clone())),
            repository,
        }
    }

    /// Builds the state over a fresh repository, seeding it once for `SeedMode::Startup`.
    pub async fn build(seed_mode: SeedMode) -> Result<Self, RepositoryError> {
        let repository = Arc::new(InMemoryEventRepository::new());
        if seed_mode == SeedMode::Startup {
            seed(&*repository).await?;
            tracing::info!("seeded sample events");
        }
        Ok(Self::new(repository, seed_mode))
    }
}
