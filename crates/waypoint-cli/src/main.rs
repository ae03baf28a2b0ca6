//! Waypoint CLI application
//!
//! Command-line and MCP front end for the Waypoint trip planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WaypointMcpServer};
use renderer::TerminalRenderer;
use waypoint_core::{
    routing::{GoogleDirections, RoutingConfig},
    RouteOptions, TripPlannerBuilder,
};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        maps_api_key,
        maps_base_url,
        route_language,
        leg_timeout_secs,
        command,
    } = Args::parse();

    let directions = GoogleDirections::new(RoutingConfig {
        api_key: maps_api_key,
        base_url: maps_base_url,
        language: route_language,
        ..Default::default()
    })
    .context("Failed to initialize directions client")?;

    let planner = TripPlannerBuilder::new()
        .with_database_path(database_file)
        .with_routing_provider(directions)
        .with_route_options(RouteOptions {
            leg_timeout: Duration::from_secs(leg_timeout_secs),
            ..Default::default()
        })
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    match command {
        Some(Itinerary { command }) => {
            Cli::new(planner, renderer)
                .handle_itinerary_command(command)
                .await
        }
        Some(Destination { command }) => {
            Cli::new(planner, renderer)
                .handle_destination_command(command)
                .await
        }
        Some(Route(args)) => Cli::new(planner, renderer).route(args).await,
        Some(Serve) => {
            info!("Starting Waypoint MCP server");
            run_stdio_server(WaypointMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).list_itineraries().await,
    }
}
