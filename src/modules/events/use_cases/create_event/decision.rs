use crate::modules::events::core::event::Event;

/// A single failed field rule. The `Display` text is what callers receive.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is too short, min. 10 characters!")]
    NameTooShort,

    #[error("Description is too short, min. 30 characters!")]
    DescriptionTooShort,

    #[error("Venue name is empty")]
    VenueNameEmpty,

    #[error("Venue location name is empty")]
    VenueLocationEmpty,

    #[error("Date is invalid")]
    InvalidDate,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { event: Event },
    Rejected { reasons: Vec<ValidationError> },
}
