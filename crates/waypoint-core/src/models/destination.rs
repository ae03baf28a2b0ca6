//! Destination model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A single stop within an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// ID of the owning itinerary
    pub itinerary_id: u64,

    /// Human-readable place name, e.g. "Lyon, Auvergne-Rhône-Alpes, France"
    pub name: String,

    /// Resolved location of the place
    pub coordinates: Coordinates,

    /// Rank within the itinerary (1-based, contiguous)
    pub position: u32,

    /// Free-text notes, not interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image reference, not interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Timestamp when the destination was added (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last edit or re-sequencing (UTC)
    pub updated_at: Timestamp,
}

impl Destination {
    /// First comma-separated component of the name ("Lyon" for
    /// "Lyon, Auvergne-Rhône-Alpes, France").
    pub fn short_name(&self) -> &str {
        short_place_name(&self.name)
    }
}

/// First comma-separated component of a place name, trimmed.
pub fn short_place_name(name: &str) -> &str {
    name.split(',').next().unwrap_or(name).trim()
}
