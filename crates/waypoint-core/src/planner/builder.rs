//! Builder for creating and configuring TripPlanner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::TripPlanner;
use crate::{
    db::Database,
    error::{ItineraryError, Result},
    routing::{GoogleDirections, RouteOptions, RoutingConfig, RoutingProvider},
};

/// Builder for creating and configuring TripPlanner instances.
#[derive(Default)]
pub struct TripPlannerBuilder {
    database_path: Option<PathBuf>,
    router: Option<Arc<dyn RoutingProvider>>,
    route_options: RouteOptions,
}

impl TripPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the routing provider used by `compute_route`.
    ///
    /// Defaults to [`GoogleDirections`] without an API key, which makes every
    /// route computation fail with a configuration error.
    pub fn with_routing_provider<R: RoutingProvider + 'static>(mut self, provider: R) -> Self {
        self.router = Some(Arc::new(provider));
        self
    }

    /// Sets per-leg timeout and request concurrency.
    pub fn with_route_options(mut self, options: RouteOptions) -> Self {
        self.route_options = options;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::FileSystem` if the database directory cannot be
    /// created.
    /// Returns `ItineraryError::Database` if database initialization fails.
    /// Returns `ItineraryError::Configuration` if the default routing client
    /// cannot be constructed.
    pub async fn build(self) -> Result<TripPlanner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ItineraryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ItineraryError>(())
        })
        .await
        .map_err(|e| ItineraryError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let router: Arc<dyn RoutingProvider> = match self.router {
            Some(router) => router,
            None => Arc::new(GoogleDirections::new(RoutingConfig::default()).map_err(|e| {
                ItineraryError::Configuration {
                    message: format!("Failed to create routing client: {e}"),
                }
            })?),
        };

        Ok(TripPlanner::new(db_path, router, self.route_options))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
    }
}
