//! Core library for the Waypoint trip planner.
//!
//! Waypoint keeps an itinerary's destinations in a strict 1..=N visit order
//! under add, delete, reorder and move, and computes a multi-leg driving route
//! through them via an external directions service.
//!
//! - [`itinerary`]: the ordering rules, independent of storage
//! - [`db`]: SQLite persistence, one transaction per mutation
//! - [`routing`]: provider trait, Google Directions client, route aggregation
//! - [`planner`]: the async [`TripPlanner`] facade used by every interface
//! - [`display`]: markdown formatting shared by the CLI and MCP server
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waypoint_core::{
//!     params::{AddDestination, CreateItinerary, Id},
//!     routing::{GoogleDirections, RoutingConfig},
//!     TripPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directions = GoogleDirections::new(RoutingConfig {
//!     api_key: std::env::var("WAYPOINT_MAPS_API_KEY").ok(),
//!     ..Default::default()
//! })?;
//!
//! let planner = TripPlannerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .with_routing_provider(directions)
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_itinerary(&CreateItinerary {
//!         title: "Côte d'Azur".to_string(),
//!     })
//!     .await?;
//!
//! for (name, latitude, longitude) in [("Nice", 43.7102, 7.2620), ("Cannes", 43.5528, 7.0174)] {
//!     planner
//!         .add_destination(&AddDestination {
//!             itinerary_id: trip.id,
//!             name: name.to_string(),
//!             latitude,
//!             longitude,
//!             ..Default::default()
//!         })
//!         .await?;
//! }
//!
//! let route = planner.compute_route(&Id { id: trip.id }).await?;
//! println!("{route}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod planner;
pub mod routing;
pub mod sequence;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Destinations, ItinerarySummaries, UpdateResult};
pub use error::{ItineraryError, Result};
pub use itinerary::{ItineraryManager, MAX_DESTINATIONS};
pub use models::{
    Coordinates, Destination, Itinerary, ItinerarySummary, LegKind, RouteLeg, RouteSummary,
};
pub use params::{
    AddDestination, CreateItinerary, DeleteItinerary, Id, MoveDestination, ReorderDestinations,
    UpdateDestination,
};
pub use planner::{TripPlanner, TripPlannerBuilder};
pub use routing::{RouteOptions, RoutingProvider};
