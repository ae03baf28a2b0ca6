use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use tempfile::TempDir;
use waypoint_core::{
    models::{Coordinates, LegMetrics},
    routing::{LegResponse, RoutingError, RoutingProvider},
    TripPlanner, TripPlannerBuilder,
};

/// Deterministic provider: distance is 1000 m per whole degree of latitude
/// travelled, and any leg touching a point west of -30° longitude has no
/// road route.
#[derive(Clone, Default)]
pub struct FlatEarthProvider {
    pub calls: Arc<AtomicUsize>,
}

impl FlatEarthProvider {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoutingProvider for FlatEarthProvider {
    fn check_configuration(&self) -> Result<(), RoutingError> {
        Ok(())
    }

    async fn compute_leg(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<LegResponse, RoutingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if origin.longitude < -30.0 || destination.longitude < -30.0 {
            return Ok(LegResponse::not_found());
        }

        let degrees = (destination.latitude - origin.latitude).abs().round() as u64;
        Ok(LegResponse::ok(LegMetrics {
            distance_meters: degrees * 1000,
            duration_seconds: degrees * 60,
            distance_text: format!("{degrees} km"),
            duration_text: format!("{degrees} mins"),
        }))
    }
}

/// Helper function to create a test planner
#[allow(dead_code)]
pub async fn create_test_planner() -> (TempDir, TripPlanner) {
    create_test_planner_with(FlatEarthProvider::default()).await
}

/// Helper function to create a test planner routed by `provider`
pub async fn create_test_planner_with(provider: FlatEarthProvider) -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_routing_provider(provider)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
