//! Request types passed to the destination store.

use super::Coordinates;

/// A destination that has not been persisted yet. The store assigns the id
/// and timestamps.
#[derive(Debug, Clone)]
pub struct NewDestination {
    pub itinerary_id: u64,
    pub name: String,
    pub coordinates: Coordinates,
    pub position: u32,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Partial record for `update_fields`. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationFields {
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub position: Option<u32>,
}

impl DestinationFields {
    /// Fields that only move a destination.
    pub fn position(position: u32) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.coordinates.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.position.is_none()
    }
}
