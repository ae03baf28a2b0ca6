//! High-level trip planner API for itineraries, destinations and routes.
//!
//! [`TripPlanner`] is the single entry point used by the CLI and the MCP
//! server. It owns the database path and the routing provider; every
//! operation opens its own connection on a blocking thread, so a planner can
//! be shared freely between tasks.
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   TripPlanner    │    │ ItineraryManager│    │    Database     │
//! │ (itinerary_ops,  │───▶│  (ordering and  │───▶│  (SQLite store, │
//! │  destination_ops)│    │   validation)   │    │  transactions)  │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//!          │
//!          │ route_ops     ┌─────────────────┐
//!          └──────────────▶│ RoutingProvider │
//!                          └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use waypoint_core::{
//!     params::{AddDestination, CreateItinerary, Id},
//!     TripPlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new()
//!     .with_database_path(Some("/tmp/waypoint.db"))
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_itinerary(&CreateItinerary {
//!         title: "Portugal".to_string(),
//!     })
//!     .await?;
//!
//! planner
//!     .add_destination(&AddDestination {
//!         itinerary_id: trip.id,
//!         name: "Lisbon, Portugal".to_string(),
//!         latitude: 38.7223,
//!         longitude: -9.1393,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let route = planner.compute_route(&Id { id: trip.id }).await?;
//! println!("{route}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    db::Database,
    error::{ItineraryError, Result},
    routing::{RouteOptions, RoutingProvider},
};

pub mod builder;
pub mod destination_ops;
pub mod itinerary_ops;
pub mod route_ops;

#[cfg(test)]
mod tests;

pub use builder::TripPlannerBuilder;

/// Main planner interface for itineraries and their routes.
pub struct TripPlanner {
    pub(crate) db_path: PathBuf,
    pub(crate) router: Arc<dyn RoutingProvider>,
    pub(crate) route_options: RouteOptions,
}

impl TripPlanner {
    pub(crate) fn new(
        db_path: PathBuf,
        router: Arc<dyn RoutingProvider>,
        route_options: RouteOptions,
    ) -> Self {
        Self {
            db_path,
            router,
            route_options,
        }
    }

    /// Runs `f` on a fresh database connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| ItineraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
