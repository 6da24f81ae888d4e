// Sample events and the policy for injecting them into the collection.

use std::str::FromStr;

use thiserror::Error;
use uuid::{Uuid, uuid};

use crate::modules::events::core::event::{Event, Venue};

const BOCELLI_ID: Uuid = uuid!("b44ac834-be8c-4457-bd71-72bc98ebfa4d");
const BLUNT_ID: Uuid = uuid!("38896b7c-e221-43a1-977a-f01f7239f66b");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Append the samples once, when the application state is built.
    #[default]
    Startup,
    /// Append the samples on every list call. Repeated calls duplicate them.
    EveryList,
    Off,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown seed mode `{0}`, expected one of: startup, every-list, off")]
pub struct UnknownSeedMode(pub String);

impl FromStr for SeedMode {
    type Err = UnknownSeedMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "startup" => Ok(Self::Startup),
            "every-list" => Ok(Self::EveryList),
            "off" => Ok(Self::Off),
            _ => Err(UnknownSeedMode(value.to_string())),
        }
    }
}

pub fn sample_events() -> [Event; 2] {
    [
        Event {
            id: BOCELLI_ID,
            name: "ANDREA BOCELLI 2022".to_string(),
            venue: Venue {
                name: "Papp László Budapest Sportaréna".to_string(),
                location: "1143 Budapest, Stefánia út 2.".to_string(),
            },
            description: "Napjaink egyik legnépszerűbb tenorja, Andrea Bocelli 2022. október 15-én a Papp László Budapest Sportarénában ad koncertet!".to_string(),
            date: "2022-10-15T18:00:00Z".to_string(),
        },
        Event {
            id: BLUNT_ID,
            name: "JAMES BLUNT THE STARS BENEATH MY FEET TOUR".to_string(),
            venue: Venue {
                name: "VeszprémFest, Veszprém Aréna".to_string(),
                location: "8200 Veszprém, Külső-kádártai u. 5.".to_string(),
            },
            description: "A VeszprémFest zárónapján a brit szupersztár, JAMES BLUNT ad koncertet. Az énekes 2022 februárjában induló, The Stars Beneath My Feet című Európa turnéjának keretében lép fel Veszprémben.".to_string(),
            date: "2022-07-16T20:00:00Z".to_string(),
        },
    ]
}
