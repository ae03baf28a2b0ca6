//! Itinerary operations for the TripPlanner.

use super::TripPlanner;
use crate::{
    display::ItinerarySummaries,
    error::{ItineraryError, Result},
    models::Itinerary,
    params::{CreateItinerary, DeleteItinerary, Id},
};

impl TripPlanner {
    /// Creates a new, empty itinerary.
    pub async fn create_itinerary(&self, params: &CreateItinerary) -> Result<Itinerary> {
        let title = params.validated_title()?;

        self.with_database(move |db| db.create_itinerary(&title))
            .await
    }

    /// Lists every itinerary with its destination count, newest first.
    pub async fn list_itineraries(&self) -> Result<ItinerarySummaries> {
        let summaries = self.with_database(|db| db.list_itineraries()).await?;
        Ok(ItinerarySummaries(summaries))
    }

    /// Retrieves an itinerary with its destinations in visit order.
    pub async fn show_itinerary(&self, params: &Id) -> Result<Option<Itinerary>> {
        let id = params.id;

        self.with_database(move |db| db.get_itinerary(id)).await
    }

    /// Permanently deletes an itinerary and all its destinations.
    ///
    /// # Errors
    ///
    /// `InvalidInput` unless `params.confirmed` is set, `ItineraryNotFound`
    /// if the itinerary does not exist.
    pub async fn delete_itinerary(&self, params: &DeleteItinerary) -> Result<Itinerary> {
        params.ensure_confirmed()?;
        let id = params.id;

        self.with_database(move |db| db.delete_itinerary(id)).await
    }

    /// Like [`Self::show_itinerary`], but a missing itinerary is an error.
    pub async fn require_itinerary(&self, params: &Id) -> Result<Itinerary> {
        self.show_itinerary(params)
            .await?
            .ok_or(ItineraryError::ItineraryNotFound { id: params.id })
    }
}
