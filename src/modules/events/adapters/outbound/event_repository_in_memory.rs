// In memory implementation of the EventRepository port.
//
// Purpose
// - Hold the process-lifetime event collection. Nothing is persisted.
//
// Responsibilities
// - Keep events in insertion order behind a read/write lock.
// - Allow tests to simulate an unavailable backend.

use crate::modules::events::adapters::outbound::event_repository::{
    EventRepository, RepositoryError,
};
use crate::modules::events::core::event::Event;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
    is_offline: bool,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Event repository offline".into()));
        }

        Ok(self.events.read().await.clone())
    }

    async fn append(&self, event: Event) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Event repository offline".into()));
        }

        self.events.write().await.push(event);
        Ok(())
    }
}
