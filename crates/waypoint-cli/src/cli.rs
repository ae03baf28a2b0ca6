//! Command-line argument wrappers and the command handler.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so those stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use waypoint_core::{
    display::{CreateResult, DeleteResult, Destinations, UpdateResult},
    params::{
        AddDestination, CreateItinerary, DeleteItinerary, Id, MoveDestination,
        ReorderDestinations, UpdateDestination,
    },
    TripPlanner,
};

use crate::renderer::TerminalRenderer;

/// Shown instead of a route when an itinerary has fewer than two stops.
pub const NOT_ENOUGH_DESTINATIONS: &str = "Add at least two destinations to compute a route.";

// ============================================================================
// Itinerary arguments
// ============================================================================

/// Create a new itinerary
#[derive(Args)]
pub struct CreateItineraryArgs {
    /// Title of the itinerary
    pub title: String,
}

impl From<CreateItineraryArgs> for CreateItinerary {
    fn from(val: CreateItineraryArgs) -> Self {
        CreateItinerary { title: val.title }
    }
}

/// Show an itinerary with its destinations in visit order
#[derive(Args)]
pub struct ShowItineraryArgs {
    #[arg(help = "Unique identifier of the itinerary to show")]
    pub id: u64,
}

impl From<ShowItineraryArgs> for Id {
    fn from(val: ShowItineraryArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete an itinerary and all of its destinations
#[derive(Args)]
pub struct DeleteItineraryArgs {
    #[arg(help = "Unique identifier of the itinerary to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteItineraryArgs> for DeleteItinerary {
    fn from(val: DeleteItineraryArgs) -> Self {
        DeleteItinerary {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// Create a new itinerary
    #[command(alias = "c")]
    Create(CreateItineraryArgs),
    /// List all itineraries
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show an itinerary with its destinations
    #[command(alias = "s")]
    Show(ShowItineraryArgs),
    /// Delete an itinerary permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItineraryArgs),
}

// ============================================================================
// Destination arguments
// ============================================================================

/// Append a destination to the end of an itinerary
///
/// Coordinates are decimal degrees; negative values are accepted as-is
/// (e.g. `-9.1393`).
#[derive(Args)]
pub struct AddDestinationArgs {
    #[arg(help = "Unique identifier of the itinerary to add the destination to")]
    pub itinerary_id: u64,
    /// Place name, e.g. "Lisbon, Portugal"
    pub name: String,
    #[arg(allow_negative_numbers = true, help = "Latitude in degrees, -90 to 90")]
    pub latitude: f64,
    #[arg(allow_negative_numbers = true, help = "Longitude in degrees, -180 to 180")]
    pub longitude: f64,
    #[arg(short, long, help = "Optional notes about the stop")]
    pub description: Option<String>,
    #[arg(long, help = "Optional image URL for the stop")]
    pub image_url: Option<String>,
}

impl From<AddDestinationArgs> for AddDestination {
    fn from(val: AddDestinationArgs) -> Self {
        AddDestination {
            itinerary_id: val.itinerary_id,
            name: val.name,
            latitude: val.latitude,
            longitude: val.longitude,
            description: val.description,
            image_url: val.image_url,
        }
    }
}

/// Edit a destination's details; its position is unchanged
#[derive(Args)]
pub struct UpdateDestinationArgs {
    #[arg(help = "Unique identifier of the destination to update")]
    pub id: u64,
    #[arg(short, long, help = "New place name")]
    pub name: Option<String>,
    #[arg(long, allow_negative_numbers = true, help = "New latitude in degrees")]
    pub latitude: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "New longitude in degrees")]
    pub longitude: Option<f64>,
    #[arg(short, long, help = "New notes about the stop")]
    pub description: Option<String>,
    #[arg(long, help = "New image URL for the stop")]
    pub image_url: Option<String>,
}

impl UpdateDestinationArgs {
    /// Human-readable list of the fields this update sets.
    fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Name set to '{name}'"));
        }
        if self.latitude.is_some() || self.longitude.is_some() {
            changes.push("Coordinates updated".to_string());
        }
        if self.description.is_some() {
            changes.push("Description updated".to_string());
        }
        if self.image_url.is_some() {
            changes.push("Image URL updated".to_string());
        }
        changes
    }
}

impl From<UpdateDestinationArgs> for UpdateDestination {
    fn from(val: UpdateDestinationArgs) -> Self {
        UpdateDestination {
            id: val.id,
            name: val.name,
            latitude: val.latitude,
            longitude: val.longitude,
            description: val.description,
            image_url: val.image_url,
        }
    }
}

/// Remove a destination; later stops move up one position
#[derive(Args)]
pub struct RemoveDestinationArgs {
    #[arg(help = "Unique identifier of the destination to remove")]
    pub id: u64,
}

impl From<RemoveDestinationArgs> for Id {
    fn from(val: RemoveDestinationArgs) -> Self {
        Id { id: val.id }
    }
}

/// Replace the visit order of an itinerary
///
/// Every destination of the itinerary must appear exactly once.
#[derive(Args)]
pub struct ReorderDestinationsArgs {
    #[arg(help = "Unique identifier of the itinerary to reorder")]
    pub itinerary_id: u64,
    #[arg(
        required = true,
        value_delimiter = ',',
        help = "Destination IDs in the new visit order, e.g. 3,1,2"
    )]
    pub ordered_ids: Vec<u64>,
}

impl From<ReorderDestinationsArgs> for ReorderDestinations {
    fn from(val: ReorderDestinationsArgs) -> Self {
        ReorderDestinations {
            itinerary_id: val.itinerary_id,
            ordered_ids: val.ordered_ids,
        }
    }
}

/// Move one destination to a new 1-based position
#[derive(Args)]
pub struct MoveDestinationArgs {
    #[arg(help = "Unique identifier of the destination to move")]
    pub id: u64,
    #[arg(help = "Target position, 1 = first stop")]
    pub position: u32,
}

impl From<MoveDestinationArgs> for MoveDestination {
    fn from(val: MoveDestinationArgs) -> Self {
        MoveDestination {
            id: val.id,
            position: val.position,
        }
    }
}

/// List an itinerary's destinations in visit order
#[derive(Args)]
pub struct ListDestinationsArgs {
    #[arg(help = "Unique identifier of the itinerary")]
    pub itinerary_id: u64,
}

impl From<ListDestinationsArgs> for Id {
    fn from(val: ListDestinationsArgs) -> Self {
        Id {
            id: val.itinerary_id,
        }
    }
}

#[derive(Subcommand)]
pub enum DestinationCommands {
    /// Append a destination to an itinerary
    #[command(alias = "a")]
    Add(AddDestinationArgs),
    /// Update a destination's details
    #[command(alias = "u")]
    Update(UpdateDestinationArgs),
    /// Remove a destination
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveDestinationArgs),
    /// Set the full visit order of an itinerary
    #[command(alias = "o")]
    Reorder(ReorderDestinationsArgs),
    /// Move a destination to a new position
    #[command(alias = "m")]
    Move(MoveDestinationArgs),
    /// List destinations in visit order
    #[command(aliases = ["l", "ls"])]
    List(ListDestinationsArgs),
}

/// Compute the driving route through an itinerary
#[derive(Args)]
pub struct RouteArgs {
    #[arg(help = "Unique identifier of the itinerary to route")]
    pub id: u64,
}

impl From<RouteArgs> for Id {
    fn from(val: RouteArgs) -> Self {
        Id { id: val.id }
    }
}

// ============================================================================
// Command handler
// ============================================================================

/// Runs parsed commands against a planner and renders the markdown result.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_itinerary_command(&self, command: ItineraryCommands) -> Result<()> {
        match command {
            ItineraryCommands::Create(args) => {
                let itinerary = self
                    .planner
                    .create_itinerary(&args.into())
                    .await
                    .context("Failed to create itinerary")?;
                self.renderer
                    .render(&CreateResult::new(itinerary).to_string())
            }
            ItineraryCommands::List => self.list_itineraries().await,
            ItineraryCommands::Show(args) => {
                let itinerary = self
                    .planner
                    .require_itinerary(&args.into())
                    .await
                    .context("Failed to show itinerary")?;
                self.renderer.render(&itinerary.to_string())
            }
            ItineraryCommands::Delete(args) => {
                let itinerary = self
                    .planner
                    .delete_itinerary(&args.into())
                    .await
                    .context("Failed to delete itinerary")?;
                self.renderer
                    .render(&DeleteResult::new(itinerary).to_string())
            }
        }
    }

    pub async fn handle_destination_command(&self, command: DestinationCommands) -> Result<()> {
        match command {
            DestinationCommands::Add(args) => {
                let destination = self
                    .planner
                    .add_destination(&args.into())
                    .await
                    .context("Failed to add destination")?;
                self.renderer
                    .render(&CreateResult::new(destination).to_string())
            }
            DestinationCommands::Update(args) => {
                let changes = args.changes();
                let destination = self
                    .planner
                    .update_destination(&args.into())
                    .await
                    .context("Failed to update destination")?;
                self.renderer
                    .render(&UpdateResult::with_changes(destination, changes).to_string())
            }
            DestinationCommands::Remove(args) => {
                let destination = self
                    .planner
                    .delete_destination(&args.into())
                    .await
                    .context("Failed to remove destination")?;
                self.renderer
                    .render(&DeleteResult::new(destination).to_string())
            }
            DestinationCommands::Reorder(args) => {
                let destinations = self
                    .planner
                    .reorder_destinations(&args.into())
                    .await
                    .context("Failed to reorder destinations")?;
                self.renderer
                    .render(&UpdateResult::new(Destinations(destinations)).to_string())
            }
            DestinationCommands::Move(args) => {
                let destinations = self
                    .planner
                    .move_destination(&args.into())
                    .await
                    .context("Failed to move destination")?;
                self.renderer
                    .render(&UpdateResult::new(Destinations(destinations)).to_string())
            }
            DestinationCommands::List(args) => {
                let destinations = self
                    .planner
                    .list_destinations(&args.into())
                    .await
                    .context("Failed to list destinations")?;
                self.renderer.render(&destinations.to_string())
            }
        }
    }

    /// Routes the itinerary in its stored order.
    ///
    /// With fewer than two destinations nothing is sent to the provider, so
    /// this works without a maps API key.
    pub async fn route(&self, args: RouteArgs) -> Result<()> {
        let itinerary = self
            .planner
            .require_itinerary(&args.into())
            .await
            .context("Failed to load itinerary")?;

        if itinerary.destinations.len() < 2 {
            debug!(
                "Itinerary {} has {} destination(s), skipping route",
                itinerary.id,
                itinerary.destinations.len()
            );
            return self
                .renderer
                .render(&format!("# Route\n\n{NOT_ENOUGH_DESTINATIONS}\n"));
        }

        let summary = self
            .planner
            .compute_route_for(&itinerary.destinations)
            .await
            .context("Failed to compute route")?;
        self.renderer.render(&summary.to_string())
    }

    pub async fn list_itineraries(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_itineraries()
            .await
            .context("Failed to list itineraries")?;
        self.renderer
            .render(&format!("# Itineraries\n\n{summaries}"))
    }
}
