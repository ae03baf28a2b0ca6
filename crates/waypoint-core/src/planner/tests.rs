//! Tests for the planner module.

use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use super::*;
use crate::{
    models::{Coordinates, LegKind, LegMetrics},
    params::{
        AddDestination, CreateItinerary, DeleteItinerary, Id, MoveDestination,
        ReorderDestinations, UpdateDestination,
    },
    routing::{LegResponse, RoutingError},
};

/// Drives everything except legs that start west of Lisbon (the Atlantic).
struct AtlanticProvider;

#[async_trait]
impl RoutingProvider for AtlanticProvider {
    fn check_configuration(&self) -> std::result::Result<(), RoutingError> {
        Ok(())
    }

    async fn compute_leg(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> std::result::Result<LegResponse, RoutingError> {
        if origin.longitude < -10.0 || destination.longitude < -10.0 {
            return Ok(LegResponse::not_found());
        }
        Ok(LegResponse::ok(LegMetrics {
            distance_meters: 100_000,
            duration_seconds: 3_600,
            distance_text: "100 km".into(),
            duration_text: "1 hour".into(),
        }))
    }
}

async fn create_test_planner() -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_routing_provider(AtlanticProvider)
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

async fn add(planner: &TripPlanner, itinerary_id: u64, name: &str, lat: f64, lng: f64) -> u64 {
    planner
        .add_destination(&AddDestination {
            itinerary_id,
            name: name.to_string(),
            latitude: lat,
            longitude: lng,
            ..Default::default()
        })
        .await
        .expect("Failed to add destination")
        .id
}

async fn order(planner: &TripPlanner, itinerary_id: u64) -> Vec<(u64, u32)> {
    planner
        .list_destinations(&Id { id: itinerary_id })
        .await
        .expect("Failed to list destinations")
        .0
        .iter()
        .map(|d| (d.id, d.position))
        .collect()
}

#[tokio::test]
async fn test_create_itinerary_rejects_blank_title() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .create_itinerary(&CreateItinerary {
            title: "  ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(planner.list_itineraries().await.unwrap().0.is_empty());
}

#[tokio::test]
async fn test_destination_lifecycle() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner
        .create_itinerary(&CreateItinerary {
            title: "Iberia".to_string(),
        })
        .await
        .unwrap()
        .id;

    let lisbon = add(&planner, trip, "Lisbon", 38.72, -9.14).await;
    let porto = add(&planner, trip, "Porto", 41.15, -8.61).await;
    let madrid = add(&planner, trip, "Madrid", 40.42, -3.70).await;
    let seville = add(&planner, trip, "Seville", 37.39, -5.98).await;

    planner.delete_destination(&Id { id: porto }).await.unwrap();
    assert_eq!(
        order(&planner, trip).await,
        vec![(lisbon, 1), (madrid, 2), (seville, 3)]
    );

    planner
        .reorder_destinations(&ReorderDestinations {
            itinerary_id: trip,
            ordered_ids: vec![seville, lisbon, madrid],
        })
        .await
        .unwrap();
    assert_eq!(
        order(&planner, trip).await,
        vec![(seville, 1), (lisbon, 2), (madrid, 3)]
    );

    planner
        .move_destination(&MoveDestination {
            id: madrid,
            position: 1,
        })
        .await
        .unwrap();
    assert_eq!(
        order(&planner, trip).await,
        vec![(madrid, 1), (seville, 2), (lisbon, 3)]
    );

    let updated = planner
        .update_destination(&UpdateDestination {
            id: lisbon,
            name: Some("Lisboa".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.position, 3);

    let summaries = planner.list_itineraries().await.unwrap();
    assert_eq!(summaries.0[0].destination_count, 3);
}

#[tokio::test]
async fn test_compute_route_marks_ocean_leg_unroutable() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner
        .create_itinerary(&CreateItinerary {
            title: "Transatlantic".to_string(),
        })
        .await
        .unwrap()
        .id;

    add(&planner, trip, "Madrid", 40.42, -3.70).await;
    add(&planner, trip, "Lisbon", 38.72, -9.14).await;
    add(&planner, trip, "New York", 40.71, -74.01).await;

    let summary = planner.compute_route(&Id { id: trip }).await.unwrap();

    assert_eq!(summary.legs.len(), 2);
    assert_eq!(summary.legs[0].kind, LegKind::Drivable);
    assert_eq!(summary.legs[1].kind, LegKind::Unroutable);
    assert_eq!(summary.legs[1].origin, "Lisbon");
    assert_eq!(summary.total_distance_meters, 100_000);
    assert_eq!(summary.total_duration_seconds, 3_600);
}

#[tokio::test]
async fn test_compute_route_for_single_destination_is_empty() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner
        .create_itinerary(&CreateItinerary {
            title: "Solo".to_string(),
        })
        .await
        .unwrap()
        .id;
    add(&planner, trip, "Oslo", 59.91, 10.75).await;

    let summary = planner.compute_route(&Id { id: trip }).await.unwrap();
    assert!(summary.is_empty());

    let err = planner.compute_route(&Id { id: trip + 1 }).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_default_provider_without_key_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .unwrap();
    let trip = planner
        .create_itinerary(&CreateItinerary {
            title: "No key".to_string(),
        })
        .await
        .unwrap()
        .id;
    add(&planner, trip, "Lyon", 45.76, 4.84).await;
    add(&planner, trip, "Nice", 43.70, 7.27).await;

    let err = planner.compute_route(&Id { id: trip }).await.unwrap_err();
    assert!(matches!(err, ItineraryError::RoutingConfiguration { .. }));
}

#[tokio::test]
async fn test_delete_itinerary_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner
        .create_itinerary(&CreateItinerary {
            title: "Keep me".to_string(),
        })
        .await
        .unwrap()
        .id;

    let err = planner
        .delete_itinerary(&DeleteItinerary {
            id: trip,
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(planner.show_itinerary(&Id { id: trip }).await.unwrap().is_some());

    planner
        .delete_itinerary(&DeleteItinerary {
            id: trip,
            confirmed: true,
        })
        .await
        .unwrap();
    assert!(planner.show_itinerary(&Id { id: trip }).await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_keep_sequence_contiguous() {
    let (_temp_dir, planner) = create_test_planner().await;
    let planner = Arc::new(planner);
    let trip = planner
        .create_itinerary(&CreateItinerary {
            title: "Busy".to_string(),
        })
        .await
        .unwrap()
        .id;

    let mut ids = Vec::new();
    for i in 0..10 {
        ids.push(add(&planner, trip, &format!("Stop {i}"), 45.0, f64::from(i)).await);
    }

    let handles: Vec<_> = ids
        .iter()
        .step_by(2)
        .map(|&id| {
            let planner = Arc::clone(&planner);
            tokio::spawn(async move { planner.delete_destination(&Id { id }).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().expect("Concurrent delete failed");
    }

    let remaining = order(&planner, trip).await;
    let expected: Vec<(u64, u32)> = ids
        .iter()
        .skip(1)
        .step_by(2)
        .zip(1..)
        .map(|(&id, position)| (id, position))
        .collect();
    assert_eq!(remaining, expected);
}
