// Pure decision function for event creation.
//
// Every rule is evaluated, failures are collected in rule order.
// Never performs input or output.

use std::sync::LazyLock;

use regex::Regex;

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::decision::{Decision, ValidationError};

pub const MIN_NAME_CHARS: usize = 10;
pub const MIN_DESCRIPTION_CHARS: usize = 30;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$")
        .expect("date pattern compiles")
});

pub fn validate(command: &CreateEvent) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if command.name.chars().count() < MIN_NAME_CHARS {
        errors.push(ValidationError::NameTooShort);
    }
    if command.description.chars().count() < MIN_DESCRIPTION_CHARS {
        errors.push(ValidationError::DescriptionTooShort);
    }
    if command.venue.name.is_empty() {
        errors.push(ValidationError::VenueNameEmpty);
    }
    if command.venue.location.is_empty() {
        errors.push(ValidationError::VenueLocationEmpty);
    }
    if !DATE_PATTERN.is_match(&command.date) {
        errors.push(ValidationError::InvalidDate);
    }
    errors
}

pub fn decide_create(command: CreateEvent) -> Decision {
    let reasons = validate(&command);
    if reasons.is_empty() {
        Decision::Accepted {
            event: command.into(),
        }
    } else {
        Decision::Rejected { reasons }
    }
}
