// Command data type for creating an event.
//
// Carries the submitted fields plus the identifier chosen by the caller of the
// use case. Independent of the transport layer.

use crate::modules::events::core::event::{Event, Venue};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub event_id: Uuid,
    pub name: String,
    pub venue: Venue,
    pub description: String,
    pub date: String,
}

impl From<CreateEvent> for Event {
    fn from(command: CreateEvent) -> Self {
        Self {
            id: command.event_id,
            name: command.name,
            venue: command.venue,
            description: command.description,
            date: command.date,
        }
    }
}
