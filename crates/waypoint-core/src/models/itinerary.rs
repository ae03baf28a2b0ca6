//! Itinerary model definition and summary type.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Destination;

/// A trip: a titled, ordered set of destinations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Unique identifier for the itinerary
    pub id: u64,

    /// Title of the trip
    pub title: String,

    /// Timestamp when the itinerary was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the itinerary or any of its destinations last changed (UTC)
    pub updated_at: Timestamp,

    /// Destinations in visit order (loaded on show, empty otherwise)
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

/// Itinerary metadata plus destination count, for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItinerarySummary {
    pub id: u64,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub destination_count: u32,
}

impl From<&Itinerary> for ItinerarySummary {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id,
            title: itinerary.title.clone(),
            created_at: itinerary.created_at,
            updated_at: itinerary.updated_at,
            destination_count: itinerary.destinations.len() as u32,
        }
    }
}
