use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DestinationCommands, ItineraryCommands, RouteArgs};

/// Main command-line interface for the Waypoint trip planner
///
/// Waypoint keeps the destinations of an itinerary in a fixed visit order and
/// computes the driving route through them. It runs either as a local CLI or
/// as an MCP (Model Context Protocol) server over stdio for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key for the Google Directions service
    #[arg(long, global = true, env = "WAYPOINT_MAPS_API_KEY", hide_env_values = true)]
    pub maps_api_key: Option<String>,

    /// Base URL of the directions service
    #[arg(
        long,
        global = true,
        env = "WAYPOINT_MAPS_BASE_URL",
        default_value = "https://maps.googleapis.com"
    )]
    pub maps_base_url: String,

    /// Language for provider-formatted distances and durations
    #[arg(long, global = true, env = "WAYPOINT_ROUTE_LANGUAGE", default_value = "en")]
    pub route_language: String,

    /// Seconds to wait for a single leg before treating it as unroutable
    #[arg(long, global = true, default_value_t = 15)]
    pub leg_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage itineraries
    #[command(alias = "i")]
    Itinerary {
        #[command(subcommand)]
        command: ItineraryCommands,
    },
    /// Manage the destinations of an itinerary
    #[command(alias = "d")]
    Destination {
        #[command(subcommand)]
        command: DestinationCommands,
    },
    /// Compute the driving route through an itinerary
    #[command(alias = "r")]
    Route(RouteArgs),
    /// Start the MCP server
    Serve,
}
