// Raw request and response bodies shared by the inbound and e2e tests.

pub const EVENT_OK: &str = include_str!("json/event_ok.json");
pub const EVENT_BAD_NAME_LENGTH: &str = include_str!("json/event_bad_name_len.json");
pub const EVENT_BAD_DATE: &str = include_str!("json/event_bad_date.json");
pub const EVENT_NO_VENUE: &str = include_str!("json/event_no_venue.json");
pub const EVENT_LIST: &str = include_str!("json/event_list.json");
