//! Destination operations for the TripPlanner.
//!
//! Each call runs one itinerary-manager operation inside a single database
//! transaction on the blocking pool.

use super::TripPlanner;
use crate::{
    display::Destinations,
    error::Result,
    models::Destination,
    params::{AddDestination, Id, MoveDestination, ReorderDestinations, UpdateDestination},
};

impl TripPlanner {
    /// Appends a destination to the end of an itinerary.
    pub async fn add_destination(&self, params: &AddDestination) -> Result<Destination> {
        let params = params.clone();

        self.with_database(move |db| db.add_destination(&params))
            .await
    }

    /// Edits name, coordinates, description or image of a destination.
    /// Its position is never changed.
    pub async fn update_destination(&self, params: &UpdateDestination) -> Result<Destination> {
        let params = params.clone();

        self.with_database(move |db| db.update_destination(&params))
            .await
    }

    /// Removes a destination and re-sequences the remaining ones. Returns the
    /// removed destination.
    pub async fn delete_destination(&self, params: &Id) -> Result<Destination> {
        let id = params.id;

        self.with_database(move |db| db.delete_destination(id))
            .await
    }

    /// Rewrites the visit order. `ordered_ids` must list every destination
    /// of the itinerary exactly once.
    pub async fn reorder_destinations(
        &self,
        params: &ReorderDestinations,
    ) -> Result<Vec<Destination>> {
        let params = params.clone();

        self.with_database(move |db| db.reorder_destinations(&params))
            .await
    }

    /// Moves one destination to a new 1-based position.
    pub async fn move_destination(&self, params: &MoveDestination) -> Result<Vec<Destination>> {
        let params = params.clone();

        self.with_database(move |db| db.move_destination(&params))
            .await
    }

    /// Destinations of an itinerary in visit order.
    pub async fn list_destinations(&self, params: &Id) -> Result<Destinations> {
        let itinerary_id = params.id;

        let destinations = self
            .with_database(move |db| db.list_destinations(itinerary_id))
            .await?;
        Ok(Destinations(destinations))
    }
}
