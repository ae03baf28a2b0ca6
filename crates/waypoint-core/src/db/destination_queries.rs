//! Destination operations. Each one runs the itinerary manager over a
//! [`SqliteStore`] inside a single write transaction.

use jiff::Timestamp;
use rusqlite::params;

use super::{itinerary_queries::TOUCH_ITINERARY_SQL, SqliteStore};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    itinerary::ItineraryManager,
    models::Destination,
    params::{AddDestination, MoveDestination, ReorderDestinations, UpdateDestination},
    store::DestinationStore,
};

/// Bumps the owning itinerary's `updated_at` after a destination change.
fn touch_itinerary(store: &SqliteStore<'_>, itinerary_id: u64) -> Result<()> {
    store
        .connection()
        .execute(
            TOUCH_ITINERARY_SQL,
            params![Timestamp::now().to_string(), itinerary_id as i64],
        )
        .db_context("Failed to update itinerary timestamp")?;
    Ok(())
}

impl super::Database {
    /// Appends a destination to the end of an itinerary.
    pub fn add_destination(&mut self, params: &AddDestination) -> Result<Destination> {
        self.write(|store| {
            let destination = ItineraryManager::new(store).add(params)?;
            touch_itinerary(store, destination.itinerary_id)?;
            Ok(destination)
        })
    }

    /// Edits a destination's name, coordinates, description or image.
    pub fn update_destination(&mut self, params: &UpdateDestination) -> Result<Destination> {
        self.write(|store| {
            let destination = ItineraryManager::new(store).update(params)?;
            if !params.is_empty() {
                touch_itinerary(store, destination.itinerary_id)?;
            }
            Ok(destination)
        })
    }

    /// Removes a destination and re-sequences the rest. Returns the removed
    /// destination.
    ///
    /// If re-sequencing fails the whole transaction, including the removal,
    /// is rolled back and `RenormalizationFailed` is returned.
    pub fn delete_destination(&mut self, id: u64) -> Result<Destination> {
        self.write(|store| {
            let removed = ItineraryManager::new(store).delete(id)?;
            touch_itinerary(store, removed.itinerary_id)?;
            Ok(removed)
        })
    }

    /// Rewrites the whole visit order of an itinerary.
    pub fn reorder_destinations(
        &mut self,
        params: &ReorderDestinations,
    ) -> Result<Vec<Destination>> {
        self.write(|store| {
            let ordered =
                ItineraryManager::new(store).reorder(params.itinerary_id, &params.ordered_ids)?;
            touch_itinerary(store, params.itinerary_id)?;
            Ok(ordered)
        })
    }

    /// Moves one destination to a new 1-based position.
    pub fn move_destination(&mut self, params: &MoveDestination) -> Result<Vec<Destination>> {
        self.write(|store| {
            let ordered = ItineraryManager::new(store).move_to(params.id, params.position)?;
            if let Some(first) = ordered.first() {
                touch_itinerary(store, first.itinerary_id)?;
            }
            Ok(ordered)
        })
    }

    /// Destinations of an itinerary in visit order.
    pub fn list_destinations(&self, itinerary_id: u64) -> Result<Vec<Destination>> {
        self.read(|store| {
            if !store.itinerary_exists(itinerary_id)? {
                return Err(ItineraryError::ItineraryNotFound { id: itinerary_id });
            }
            ItineraryManager::new(store).list(itinerary_id)
        })
    }
}
