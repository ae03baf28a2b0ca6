//! The itinerary manager: destination mutations that keep positions
//! contiguous.
//!
//! Every operation works against a [`DestinationStore`] and leaves the
//! itinerary with positions exactly `1..=N`. Callers that need atomicity
//! (the SQLite database) run a whole manager call inside one transaction.
//!
//! Name rule: two destinations with the same name may not be neighbours.
//! Add checks the current last destination; reorder and move check every
//! adjacency of the proposed order, including pairs a delete left behind.

use std::collections::HashMap;

use log::{debug, error, info};

use crate::{
    error::{ItineraryError, Result},
    models::{Coordinates, Destination, DestinationFields, NewDestination},
    params::{AddDestination, UpdateDestination},
    sequence,
    store::DestinationStore,
};

/// Upper bound on destinations per itinerary.
pub const MAX_DESTINATIONS: usize = 25;

/// Applies itinerary mutations to a borrowed store.
pub struct ItineraryManager<'a, S: DestinationStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: DestinationStore + ?Sized> ItineraryManager<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// All destinations of the itinerary, ascending by position.
    ///
    /// # Errors
    ///
    /// `CorruptSequence` if the stored positions are not exactly `1..=N`.
    pub fn list(&mut self, itinerary_id: u64) -> Result<Vec<Destination>> {
        let mut destinations = self.store.list_all(itinerary_id)?;
        sequence::sort_by_position(&mut destinations);
        sequence::check_contiguous(itinerary_id, &destinations)?;
        Ok(destinations)
    }

    /// Appends a destination at position `N + 1`.
    pub fn add(&mut self, params: &AddDestination) -> Result<Destination> {
        debug!("add destination to itinerary {}: {:?}", params.itinerary_id, params.name);

        let name = validated_name(&params.name)?;
        let coordinates = params.coordinates();
        coordinates.validate()?;

        self.ensure_itinerary(params.itinerary_id)?;
        let current = self.list(params.itinerary_id)?;

        if current.len() >= MAX_DESTINATIONS {
            return Err(ItineraryError::invalid_input(
                "itinerary_id",
                format!("An itinerary holds at most {MAX_DESTINATIONS} destinations"),
            ));
        }
        sequence::check_append(current.last(), &name)?;

        self.store.insert(NewDestination {
            itinerary_id: params.itinerary_id,
            name,
            coordinates,
            position: current.len() as u32 + 1,
            description: params.description.clone(),
            image_url: params.image_url.clone(),
        })
    }

    /// Edits name, coordinates, description or image. Position is untouched.
    pub fn update(&mut self, params: &UpdateDestination) -> Result<Destination> {
        debug!("update destination {}", params.id);

        let existing = self.find(params.id)?;
        if params.is_empty() {
            return Ok(existing);
        }

        let name = params.name.as_deref().map(validated_name).transpose()?;
        let coordinates = if params.latitude.is_some() || params.longitude.is_some() {
            let merged = Coordinates::new(
                params.latitude.unwrap_or(existing.coordinates.latitude),
                params.longitude.unwrap_or(existing.coordinates.longitude),
            );
            merged.validate()?;
            Some(merged)
        } else {
            None
        };

        let fields = DestinationFields {
            name,
            coordinates,
            description: params.description.clone(),
            image_url: params.image_url.clone(),
            position: None,
        };

        if self.store.update_fields(params.id, &fields)? == 0 {
            return Err(ItineraryError::DestinationNotFound { id: params.id });
        }
        self.find(params.id)
    }

    /// Removes a destination and re-sequences the survivors to `1..=N`.
    ///
    /// Returns the removed destination.
    ///
    /// # Errors
    ///
    /// `DestinationNotFound` if the id is unknown. `RenormalizationFailed` if
    /// the store fails while rewriting survivor positions; the itinerary
    /// must then be treated as inconsistent.
    pub fn delete(&mut self, id: u64) -> Result<Destination> {
        debug!("delete destination {id}");

        let removed = self.find(id)?;
        if !self.store.remove(id)? {
            return Err(ItineraryError::DestinationNotFound { id });
        }

        let itinerary_id = removed.itinerary_id;
        let rewritten = self
            .renormalize(itinerary_id)
            .map_err(|source| fatal_resequence(itinerary_id, source))?;
        info!(
            "Removed destination {id} from itinerary {itinerary_id}; re-sequenced {rewritten} survivors"
        );

        Ok(removed)
    }

    /// Rewrites the visit order. `ordered_ids` must be every destination id of
    /// the itinerary exactly once.
    pub fn reorder(&mut self, itinerary_id: u64, ordered_ids: &[u64]) -> Result<Vec<Destination>> {
        debug!("reorder itinerary {itinerary_id}: {ordered_ids:?}");

        self.ensure_itinerary(itinerary_id)?;
        let current = self.list(itinerary_id)?;
        sequence::validate_permutation(&current, ordered_ids)?;
        self.apply_order(itinerary_id, &current, ordered_ids)
    }

    /// Moves one destination to `position` (1-based), shifting the ones in
    /// between, like a drag-and-drop in a list.
    pub fn move_to(&mut self, id: u64, position: u32) -> Result<Vec<Destination>> {
        debug!("move destination {id} to position {position}");

        let target = self.find(id)?;
        let current = self.list(target.itinerary_id)?;

        if position == 0 || position as usize > current.len() {
            return Err(ItineraryError::invalid_input(
                "position",
                format!(
                    "Position {position} is out of range. Itinerary has {} destinations",
                    current.len()
                ),
            ));
        }

        let ids: Vec<u64> = current.iter().map(|d| d.id).collect();
        let from = target.position as usize - 1;
        let proposed = sequence::move_index(&ids, from, position as usize - 1);
        self.apply_order(target.itinerary_id, &current, &proposed)
    }

    fn apply_order(
        &mut self,
        itinerary_id: u64,
        current: &[Destination],
        ordered_ids: &[u64],
    ) -> Result<Vec<Destination>> {
        let by_id: HashMap<u64, &Destination> = current.iter().map(|d| (d.id, d)).collect();
        let proposed: Vec<&Destination> = ordered_ids
            .iter()
            .filter_map(|id| by_id.get(id).copied())
            .collect();

        sequence::check_adjacent_names(&proposed)?;

        for (index, destination) in proposed.iter().enumerate() {
            let position = index as u32 + 1;
            if destination.position != position {
                self.write_position(destination.id, position)
                    .map_err(|source| fatal_resequence(itinerary_id, source))?;
            }
        }

        self.list(itinerary_id)
    }

    fn renormalize(&mut self, itinerary_id: u64) -> Result<usize> {
        let mut survivors = self.store.list_all(itinerary_id)?;
        sequence::sort_by_position(&mut survivors);

        let changes = sequence::renumbered(&survivors);
        for (id, position) in &changes {
            self.write_position(*id, *position)?;
        }
        Ok(changes.len())
    }

    fn write_position(&mut self, id: u64, position: u32) -> Result<()> {
        match self
            .store
            .update_fields(id, &DestinationFields::position(position))?
        {
            0 => Err(ItineraryError::Storage {
                message: format!("Destination {id} vanished while writing position {position}"),
            }),
            _ => Ok(()),
        }
    }

    fn find(&mut self, id: u64) -> Result<Destination> {
        self.store
            .find(id)?
            .ok_or(ItineraryError::DestinationNotFound { id })
    }

    fn ensure_itinerary(&mut self, itinerary_id: u64) -> Result<()> {
        if self.store.itinerary_exists(itinerary_id)? {
            Ok(())
        } else {
            Err(ItineraryError::ItineraryNotFound { id: itinerary_id })
        }
    }
}

fn validated_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ItineraryError::invalid_input(
            "name",
            "Destination name cannot be empty",
        ));
    }
    Ok(name.to_string())
}

fn fatal_resequence(itinerary_id: u64, source: ItineraryError) -> ItineraryError {
    error!("Position invariant violated for itinerary {itinerary_id}: {source}");
    ItineraryError::RenormalizationFailed {
        itinerary_id,
        source: Box::new(source),
    }
}
