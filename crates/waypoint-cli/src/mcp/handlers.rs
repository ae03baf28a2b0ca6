//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use waypoint_core::{
    display::{CreateResult, DeleteResult, Destinations, UpdateResult},
    params as core, TripPlanner,
};

use super::errors::to_mcp_error;
use crate::cli::NOT_ENOUGH_DESTINATIONS;

/// Generic MCP wrapper for core parameter types
///
/// `#[serde(transparent)]` passes JSON straight through to the wrapped core
/// type; the schema is the core type's own.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateItinerary = McpParams<core::CreateItinerary>;
pub type DeleteItinerary = McpParams<core::DeleteItinerary>;
pub type AddDestination = McpParams<core::AddDestination>;
pub type UpdateDestination = McpParams<core::UpdateDestination>;
pub type ReorderDestinations = McpParams<core::ReorderDestinations>;
pub type MoveDestination = McpParams<core::MoveDestination>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Mutex<TripPlanner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<TripPlanner>>) -> Self {
        Self { planner }
    }

    pub async fn create_itinerary(
        &self,
        Parameters(params): Parameters<CreateItinerary>,
    ) -> McpResult {
        debug!("create_itinerary: {:?}", params);

        let itinerary = self
            .planner
            .lock()
            .await
            .create_itinerary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create itinerary", &e))?;

        text_result(CreateResult::new(itinerary).to_string())
    }

    pub async fn list_itineraries(&self) -> McpResult {
        debug!("list_itineraries");

        let summaries = self
            .planner
            .lock()
            .await
            .list_itineraries()
            .await
            .map_err(|e| to_mcp_error("Failed to list itineraries", &e))?;

        text_result(format!("# Itineraries\n\n{summaries}"))
    }

    pub async fn show_itinerary(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_itinerary: {:?}", params);

        let itinerary = self
            .planner
            .lock()
            .await
            .require_itinerary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show itinerary", &e))?;

        text_result(itinerary.to_string())
    }

    pub async fn delete_itinerary(
        &self,
        Parameters(params): Parameters<DeleteItinerary>,
    ) -> McpResult {
        debug!("delete_itinerary: {:?}", params);

        let itinerary = self
            .planner
            .lock()
            .await
            .delete_itinerary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete itinerary", &e))?;

        text_result(DeleteResult::new(itinerary).to_string())
    }

    pub async fn add_destination(
        &self,
        Parameters(params): Parameters<AddDestination>,
    ) -> McpResult {
        debug!("add_destination: {:?}", params);

        let destination = self
            .planner
            .lock()
            .await
            .add_destination(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add destination", &e))?;

        text_result(CreateResult::new(destination).to_string())
    }

    pub async fn update_destination(
        &self,
        Parameters(params): Parameters<UpdateDestination>,
    ) -> McpResult {
        debug!("update_destination: {:?}", params);

        let destination = self
            .planner
            .lock()
            .await
            .update_destination(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update destination", &e))?;

        text_result(UpdateResult::new(destination).to_string())
    }

    pub async fn remove_destination(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("remove_destination: {:?}", params);

        let destination = self
            .planner
            .lock()
            .await
            .delete_destination(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to remove destination", &e))?;

        text_result(DeleteResult::new(destination).to_string())
    }

    pub async fn reorder_destinations(
        &self,
        Parameters(params): Parameters<ReorderDestinations>,
    ) -> McpResult {
        debug!("reorder_destinations: {:?}", params);

        let destinations = self
            .planner
            .lock()
            .await
            .reorder_destinations(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to reorder destinations", &e))?;

        text_result(UpdateResult::new(Destinations(destinations)).to_string())
    }

    pub async fn move_destination(
        &self,
        Parameters(params): Parameters<MoveDestination>,
    ) -> McpResult {
        debug!("move_destination: {:?}", params);

        let destinations = self
            .planner
            .lock()
            .await
            .move_destination(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to move destination", &e))?;

        text_result(UpdateResult::new(Destinations(destinations)).to_string())
    }

    pub async fn compute_route(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("compute_route: {:?}", params);

        let planner = self.planner.lock().await;
        let itinerary = planner
            .require_itinerary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load itinerary", &e))?;

        if itinerary.destinations.len() < 2 {
            return text_result(format!("# Route\n\n{NOT_ENOUGH_DESTINATIONS}\n"));
        }

        let summary = planner
            .compute_route_for(&itinerary.destinations)
            .await
            .map_err(|e| to_mcp_error("Failed to compute route", &e))?;

        text_result(summary.to_string())
    }
}
