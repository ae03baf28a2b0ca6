//! MCP server implementation for Waypoint
//!
//! Exposes itinerary management and route computation as Model Context
//! Protocol tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use waypoint_core::TripPlanner;

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddDestination, CreateItinerary, DeleteItinerary, Id, McpResult, MoveDestination,
    ReorderDestinations, UpdateDestination,
};

const INSTRUCTIONS: &str = r#"Waypoint plans road trips as ordered itineraries of destinations and computes the driving route through them.

## Core Concepts
- **Itinerary**: a titled trip holding destinations in visit order
- **Destination**: a named stop with coordinates. Its position is 1-based and positions are always 1..N with no gaps
- **Leg**: the segment between two consecutive destinations. A leg is either drivable (with distance and duration) or unroutable (no road route, e.g. an ocean crossing)

## Workflow
1. Create a trip with `create_itinerary`
2. Append stops with `add_destination` (latitude -90..90, longitude -180..180)
3. Change the order with `move_destination` (one stop) or `reorder_destinations` (the full order; every destination ID exactly once)
4. Call `compute_route` to get per-leg distances and totals. Unroutable legs are listed but excluded from totals

## Rules
- The same place name cannot appear at two adjacent positions. Add, move and reorder are rejected if the resulting order would contain such a pair, including one left behind by a removal
- An itinerary holds at most 25 destinations
- Removing a destination shifts later stops up by one
- `delete_itinerary` requires `confirmed: true` and removes all destinations"#;

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    planner: Arc<Mutex<TripPlanner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    /// Create a new Waypoint MCP server
    pub fn new(planner: TripPlanner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "create_itinerary",
        description = "Create a new, empty itinerary. Requires a non-empty title. Returns the itinerary ID used by the destination tools."
    )]
    async fn create_itinerary(&self, params: Parameters<CreateItinerary>) -> McpResult {
        self.handlers().create_itinerary(params).await
    }

    #[tool(
        name = "list_itineraries",
        description = "List all itineraries, newest first, with their IDs and destination counts."
    )]
    async fn list_itineraries(&self) -> McpResult {
        self.handlers().list_itineraries().await
    }

    #[tool(
        name = "show_itinerary",
        description = "Show an itinerary with all destinations in visit order, including each destination's ID, position and coordinates."
    )]
    async fn show_itinerary(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_itinerary(params).await
    }

    #[tool(
        name = "delete_itinerary",
        description = "Permanently delete an itinerary and all of its destinations. Set confirmed=true; the call is rejected otherwise. This cannot be undone."
    )]
    async fn delete_itinerary(&self, params: Parameters<DeleteItinerary>) -> McpResult {
        self.handlers().delete_itinerary(params).await
    }

    #[tool(
        name = "add_destination",
        description = "Append a destination to the end of an itinerary. Requires itinerary_id, name, latitude (-90..90) and longitude (-180..180); description and image_url are optional. Rejected if the last destination has the same name or the itinerary already has 25 destinations."
    )]
    async fn add_destination(&self, params: Parameters<AddDestination>) -> McpResult {
        self.handlers().add_destination(params).await
    }

    #[tool(
        name = "update_destination",
        description = "Change a destination's name, coordinates, description or image_url. Only the fields provided are changed. The position never changes; use move_destination for that."
    )]
    async fn update_destination(&self, params: Parameters<UpdateDestination>) -> McpResult {
        self.handlers().update_destination(params).await
    }

    #[tool(
        name = "remove_destination",
        description = "Remove a destination by ID. Destinations after it move up one position so the order stays 1..N."
    )]
    async fn remove_destination(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().remove_destination(params).await
    }

    #[tool(
        name = "reorder_destinations",
        description = "Replace the visit order of an itinerary. ordered_ids must list every destination ID of the itinerary exactly once, first stop first. Rejected without changes if the new order would put two same-named destinations next to each other."
    )]
    async fn reorder_destinations(&self, params: Parameters<ReorderDestinations>) -> McpResult {
        self.handlers().reorder_destinations(params).await
    }

    #[tool(
        name = "move_destination",
        description = "Move one destination to a 1-based position. The destinations in between shift by one. Rejected if the result would put two same-named destinations next to each other."
    )]
    async fn move_destination(&self, params: Parameters<MoveDestination>) -> McpResult {
        self.handlers().move_destination(params).await
    }

    #[tool(
        name = "compute_route",
        description = "Compute the driving route through an itinerary in its current order: one leg per consecutive pair with distance and duration, plus totals over drivable legs. Legs with no road route are reported as unroutable with their straight-line distance. Needs at least two destinations."
    )]
    async fn compute_route(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().compute_route(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "waypoint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Waypoint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use waypoint_core::TripPlannerBuilder;

    use super::*;

    #[tokio::test]
    async fn test_server_exposes_itinerary_tools() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let planner = TripPlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .expect("Failed to create planner");
        let server = WaypointMcpServer::new(planner);
        assert_eq!(server.get_info().server_info.name, "waypoint");

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "add_destination",
                "compute_route",
                "create_itinerary",
                "delete_itinerary",
                "list_itineraries",
                "move_destination",
                "remove_destination",
                "reorder_destinations",
                "show_itinerary",
                "update_destination",
            ]
        );
    }
}
