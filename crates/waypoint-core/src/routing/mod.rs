//! Multi-leg route aggregation over a pluggable routing provider.
//!
//! [`compute_route`] takes destinations already in visit order, asks the
//! provider for one leg per consecutive pair, and classifies each leg as
//! drivable or unroutable. A failing leg never aborts the trip: it becomes
//! an unroutable leg and the next pair is tried. Only a provider that is not
//! configured at all is fatal.
//!
//! ```text
//! [A, B, C, D] ──▶ (A→B) (B→C) (C→D) ──▶ RouteSummary { legs, totals }
//!                    │     │     │
//!                    ▼     ▼     ▼
//!             RoutingProvider::compute_leg (bounded concurrency, ordered)
//! ```

use std::time::Duration;

use async_trait::async_trait;
use futures::{stream, StreamExt};
use log::{debug, warn};
use thiserror::Error;

use crate::{
    error::{ItineraryError, Result},
    models::{Coordinates, Destination, LegMetrics, RouteLeg, RouteSummary},
};

pub mod geo;
pub mod google;

pub use geo::great_circle_meters;
pub use google::{GoogleDirections, RoutingConfig};

/// Errors raised by a routing provider for a single request.
#[derive(Error, Debug)]
pub enum RoutingError {
    /// No API key configured
    #[error("No API key configured for the routing provider")]
    MissingCredential,
    /// Connection, TLS or body transfer failure
    #[error("Routing request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status
    #[error("Routing provider returned HTTP {status}")]
    HttpStatus { status: u16 },
    /// Body could not be decoded
    #[error("Malformed routing response: {message}")]
    MalformedResponse { message: String },
    /// No answer within the per-leg deadline
    #[error("Routing request timed out")]
    Timeout,
}

/// Provider verdict for one origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegStatus {
    /// A route was found
    Ok,
    /// The provider knows of no route between the points
    NotFound,
    /// The provider answered but reported a failure
    Error,
}

/// What the provider returned for a leg.
#[derive(Debug, Clone, PartialEq)]
pub struct LegResponse {
    pub status: LegStatus,
    pub metrics: Option<LegMetrics>,
}

impl LegResponse {
    pub fn ok(metrics: LegMetrics) -> Self {
        Self {
            status: LegStatus::Ok,
            metrics: Some(metrics),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: LegStatus::NotFound,
            metrics: None,
        }
    }

    pub fn error() -> Self {
        Self {
            status: LegStatus::Error,
            metrics: None,
        }
    }
}

/// A directions service that can route between two points.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Fails when the provider cannot possibly answer, e.g. a missing
    /// credential. Checked once per route before any leg is requested.
    fn check_configuration(&self) -> std::result::Result<(), RoutingError>;

    /// Routes a single leg.
    async fn compute_leg(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> std::result::Result<LegResponse, RoutingError>;
}

/// Tuning for [`compute_route`].
#[derive(Debug, Clone, Copy)]
pub struct RouteOptions {
    /// Deadline for each provider call
    pub leg_timeout: Duration,
    /// Maximum provider calls in flight at once
    pub max_concurrent_requests: usize,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            leg_timeout: Duration::from_secs(15),
            max_concurrent_requests: 4,
        }
    }
}

/// Computes every leg of an ordered itinerary and totals the drivable ones.
///
/// Fewer than two destinations yields an empty summary without contacting
/// the provider. Legs come back in itinerary order: leg `i` connects
/// `destinations[i]` to `destinations[i + 1]`.
///
/// # Errors
///
/// `RoutingConfiguration` if the provider's configuration check fails. No
/// other error is returned; per-leg failures become unroutable legs.
pub async fn compute_route(
    provider: &dyn RoutingProvider,
    destinations: &[Destination],
    options: &RouteOptions,
) -> Result<RouteSummary> {
    if destinations.len() < 2 {
        debug!(
            "Route requested for {} destination(s); nothing to compute",
            destinations.len()
        );
        return Ok(RouteSummary::default());
    }

    provider
        .check_configuration()
        .map_err(|e| ItineraryError::RoutingConfiguration {
            message: e.to_string(),
        })?;

    debug!(
        "Computing {} legs with up to {} concurrent requests",
        destinations.len() - 1,
        options.max_concurrent_requests
    );

    // `buffered` yields in input order regardless of completion order
    let leg_futures: Vec<_> = destinations
        .windows(2)
        .map(|pair| route_leg(provider, &pair[0], &pair[1], options.leg_timeout))
        .collect();
    let legs: Vec<RouteLeg> = stream::iter(leg_futures)
        .buffered(options.max_concurrent_requests.max(1))
        .collect()
        .await;

    Ok(RouteSummary::from_legs(legs))
}

async fn route_leg(
    provider: &dyn RoutingProvider,
    origin: &Destination,
    destination: &Destination,
    leg_timeout: Duration,
) -> RouteLeg {
    let great_circle = great_circle_meters(origin.coordinates, destination.coordinates);
    let outcome = tokio::time::timeout(
        leg_timeout,
        provider.compute_leg(origin.coordinates, destination.coordinates),
    )
    .await
    .unwrap_or(Err(RoutingError::Timeout));

    let reason = match outcome {
        Ok(LegResponse {
            status: LegStatus::Ok,
            metrics: Some(metrics),
        }) => {
            return RouteLeg::drivable(&origin.name, &destination.name, metrics, great_circle);
        }
        Ok(LegResponse {
            status: LegStatus::Ok,
            metrics: None,
        }) => "provider returned no leg".to_string(),
        Ok(LegResponse {
            status: LegStatus::NotFound,
            ..
        }) => "no drivable route".to_string(),
        Ok(LegResponse {
            status: LegStatus::Error,
            ..
        }) => "provider reported an error".to_string(),
        Err(e) => e.to_string(),
    };

    warn!(
        "Leg {} -> {} is unroutable: {reason}",
        origin.name, destination.name
    );
    RouteLeg::unroutable(&origin.name, &destination.name, great_circle)
}
