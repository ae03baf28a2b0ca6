//! Route computation for the TripPlanner.

use log::debug;

use super::TripPlanner;
use crate::{
    error::Result,
    models::{Destination, RouteSummary},
    params::Id,
    routing,
};

impl TripPlanner {
    /// Computes the multi-leg route of an itinerary in its current order.
    ///
    /// The ordered destinations are read first and then routed; the store is
    /// not held while the provider is queried.
    pub async fn compute_route(&self, params: &Id) -> Result<RouteSummary> {
        let destinations = self.list_destinations(params).await?.0;
        debug!(
            "Computing route for itinerary {} with {} destinations",
            params.id,
            destinations.len()
        );

        self.compute_route_for(&destinations).await
    }

    /// Computes the route through destinations in the given order.
    pub async fn compute_route_for(&self, destinations: &[Destination]) -> Result<RouteSummary> {
        routing::compute_route(self.router.as_ref(), destinations, &self.route_options).await
    }
}
