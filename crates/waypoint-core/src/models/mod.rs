//! Data models for itineraries, destinations and computed routes.
//!
//! Persisted models ([`Itinerary`], [`Destination`]) are read from and written
//! to the store. Route models ([`RouteLeg`], [`RouteSummary`]) are derived on
//! demand by the route aggregator and never persisted. Display
//! implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{Coordinates, Destination};
//! use jiff::Timestamp;
//!
//! let paris = Destination {
//!     id: 1,
//!     itinerary_id: 1,
//!     name: "Paris, Île-de-France, France".to_string(),
//!     coordinates: Coordinates::new(48.8566, 2.3522),
//!     position: 1,
//! #   description: None,
//! #   image_url: None,
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//! };
//! assert_eq!(paris.short_name(), "Paris");
//! ```

pub mod coordinates;
pub mod destination;
pub mod itinerary;
pub mod requests;
pub mod route;

pub use coordinates::Coordinates;
pub use destination::{short_place_name, Destination};
pub use itinerary::{Itinerary, ItinerarySummary};
pub use requests::{DestinationFields, NewDestination};
pub use route::{LegKind, LegMetrics, RouteLeg, RouteSummary};
