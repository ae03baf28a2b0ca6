//! Integration tests checking that CLI output is the core `Display` output
//!
//! The CLI and the MCP server render through the same display types, so a
//! database written by one front end reads the same through the other.

use std::{path::Path, process::Command};

use tempfile::TempDir;
use waypoint_core::{
    display::CreateResult,
    params::{AddDestination, CreateItinerary, Id},
    TripPlanner, TripPlannerBuilder,
};

/// Helper function to create a test planner with temporary database
async fn create_test_planner() -> (TripPlanner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &Path, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_wp"))
        .env_remove("WAYPOINT_MAPS_API_KEY")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_create_itinerary_display_consistency() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");

    let cli_output = run_cli_command(&db_path, &["itinerary", "create", "Via CLI"]);

    let itinerary = planner
        .create_itinerary(&CreateItinerary {
            title: "Direct".to_string(),
        })
        .await
        .expect("Failed to create itinerary");
    let direct_output = CreateResult::new(itinerary).to_string();

    assert!(cli_output.starts_with("Created itinerary with ID: 1"));
    assert!(direct_output.starts_with("Created itinerary with ID: 2"));
    assert!(cli_output.contains("No destinations in this itinerary."));
    assert!(direct_output.contains("No destinations in this itinerary."));
}

#[tokio::test]
async fn test_destination_list_matches_direct_display() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");

    let trip = planner
        .create_itinerary(&CreateItinerary {
            title: "Shared".to_string(),
        })
        .await
        .unwrap()
        .id;
    for (name, latitude, longitude) in [("Bergen", 60.39, 5.32), ("Oslo", 59.91, 10.75)] {
        planner
            .add_destination(&AddDestination {
                itinerary_id: trip,
                name: name.to_string(),
                latitude,
                longitude,
                description: Some(format!("Stop in {name}")),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let direct = planner.list_destinations(&Id { id: trip }).await.unwrap();
    let cli_output = run_cli_command(&db_path, &["destination", "list", &trip.to_string()]);

    assert_eq!(cli_output, direct.to_string());
}

#[tokio::test]
async fn test_cli_writes_are_visible_to_planner() {
    let (planner, temp_dir) = create_test_planner().await;
    let db_path = temp_dir.path().join("test.db");

    run_cli_command(&db_path, &["itinerary", "create", "From CLI"]);
    run_cli_command(&db_path, &["destination", "add", "1", "Tromsø", "69.65", "18.96"]);
    run_cli_command(&db_path, &["destination", "add", "1", "Narvik", "68.44", "17.43"]);
    run_cli_command(&db_path, &["destination", "move", "2", "1"]);

    let itinerary = planner
        .require_itinerary(&Id { id: 1 })
        .await
        .expect("Itinerary created by the CLI should exist");
    let names: Vec<&str> = itinerary
        .destinations
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(itinerary.title, "From CLI");
    assert_eq!(names, vec!["Narvik", "Tromsø"]);

    let cli_show = run_cli_command(&db_path, &["itinerary", "show", "1"]);
    assert_eq!(cli_show, itinerary.to_string());
}
