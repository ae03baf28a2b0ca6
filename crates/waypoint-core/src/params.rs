//! Parameter structures for Waypoint operations
//!
//! Shared request structures used by every interface (CLI, MCP). They carry no
//! framework-specific derives beyond serde; JSON schema generation is gated
//! behind the `schema` feature so the core stays lightweight.
//!
//! Interface layers wrap or convert into these types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ItineraryError, Result},
    models::Coordinates,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_itinerary, remove_destination, compute_route and friends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateItinerary {
    /// Title of the trip (required)
    pub title: String,
}

/// Parameters for permanently deleting an itinerary and its destinations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteItinerary {
    /// ID of the itinerary to delete
    pub id: u64,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for appending a destination to an itinerary.
///
/// The destination always lands at the end of the itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddDestination {
    /// ID of the itinerary to add the destination to
    pub itinerary_id: u64,
    /// Display name of the place, e.g. "Porto, Portugal"
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl AddDestination {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Parameters for editing a destination. Position and id cannot be changed
/// here; use reorder or move for that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateDestination {
    /// Destination ID to update (required)
    pub id: u64,
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New latitude in decimal degrees
    #[serde(default)]
    pub latitude: Option<f64>,
    /// New longitude in decimal degrees
    #[serde(default)]
    pub longitude: Option<f64>,
    /// New free-text notes
    #[serde(default)]
    pub description: Option<String>,
    /// New image reference
    #[serde(default)]
    pub image_url: Option<String>,
}

impl UpdateDestination {
    /// True when no editable field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
    }
}

/// Parameters for rewriting the whole visit order of an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReorderDestinations {
    /// ID of the itinerary being reordered
    pub itinerary_id: u64,
    /// Every destination ID of the itinerary, in the new visit order
    pub ordered_ids: Vec<u64>,
}

/// Parameters for moving one destination to a new position, shifting the
/// destinations in between.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveDestination {
    /// ID of the destination to move
    pub id: u64,
    /// Target position (1-based)
    pub position: u32,
}

impl CreateItinerary {
    /// Returns the trimmed title, rejecting blank titles.
    pub fn validated_title(&self) -> Result<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ItineraryError::invalid_input(
                "title",
                "Itinerary title cannot be empty",
            ));
        }
        Ok(title.to_string())
    }
}

impl DeleteItinerary {
    /// Deletion needs explicit confirmation.
    pub fn ensure_confirmed(&self) -> Result<()> {
        if self.confirmed {
            Ok(())
        } else {
            Err(ItineraryError::invalid_input(
                "confirmed",
                "Itinerary deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ))
        }
    }
}
