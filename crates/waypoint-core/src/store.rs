//! The ordered-collection abstraction the itinerary manager works against.
//!
//! A [`DestinationStore`] knows nothing about ordering. It lists, inserts,
//! patches and removes records; the manager in [`crate::itinerary`] owns the
//! position invariant. [`crate::db::SqliteStore`] is the implementation the
//! library ships.

use crate::{
    error::Result,
    models::{Destination, DestinationFields, NewDestination},
};

/// Record-level persistence for destinations.
pub trait DestinationStore {
    /// All destinations of an itinerary, in no particular order.
    fn list_all(&mut self, itinerary_id: u64) -> Result<Vec<Destination>>;

    /// Persists a new destination and returns it with its assigned id.
    fn insert(&mut self, destination: NewDestination) -> Result<Destination>;

    /// Applies the set fields to the record with `id`. Returns the number of
    /// matched records (0 or 1).
    fn update_fields(&mut self, id: u64, fields: &DestinationFields) -> Result<usize>;

    /// Deletes the record with `id`. Returns whether it existed.
    fn remove(&mut self, id: u64) -> Result<bool>;

    /// Looks up a single destination.
    fn find(&mut self, id: u64) -> Result<Option<Destination>>;

    /// Whether an itinerary with this id exists.
    fn itinerary_exists(&mut self, itinerary_id: u64) -> Result<bool>;
}

/// In-memory store for unit tests of the manager.
#[cfg(test)]
pub(crate) mod memory {
    use std::collections::BTreeMap;

    use jiff::Timestamp;

    use super::DestinationStore;
    use crate::{
        error::{ItineraryError, Result},
        models::{Destination, DestinationFields, NewDestination},
    };

    /// In-memory store with failure injection.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryStore {
        itineraries: Vec<u64>,
        records: BTreeMap<u64, Destination>,
        next_id: u64,
        position_writes: usize,
        fail_position_write_after: Option<usize>,
    }

    impl MemoryStore {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Registers an itinerary id so that `itinerary_exists` returns true.
        pub(crate) fn with_itinerary(mut self, itinerary_id: u64) -> Self {
            self.itineraries.push(itinerary_id);
            self
        }

        /// Makes every position-only update after the first `n` successful ones
        /// fail with a storage error.
        pub(crate) fn fail_position_writes_after(&mut self, n: usize) {
            self.position_writes = 0;
            self.fail_position_write_after = Some(n);
        }
    }

    impl DestinationStore for MemoryStore {
        fn list_all(&mut self, itinerary_id: u64) -> Result<Vec<Destination>> {
            // Reverse id order so callers cannot rely on insertion order.
            Ok(self
                .records
                .values()
                .rev()
                .filter(|d| d.itinerary_id == itinerary_id)
                .cloned()
                .collect())
        }

        fn insert(&mut self, destination: NewDestination) -> Result<Destination> {
            self.next_id += 1;
            let now = Timestamp::now();
            let record = Destination {
                id: self.next_id,
                itinerary_id: destination.itinerary_id,
                name: destination.name,
                coordinates: destination.coordinates,
                position: destination.position,
                description: destination.description,
                image_url: destination.image_url,
                created_at: now,
                updated_at: now,
            };
            self.records.insert(record.id, record.clone());
            Ok(record)
        }

        fn update_fields(&mut self, id: u64, fields: &DestinationFields) -> Result<usize> {
            let only_position = fields.position.is_some()
                && DestinationFields {
                    position: None,
                    ..fields.clone()
                }
                .is_empty();

            if only_position {
                if let Some(limit) = self.fail_position_write_after {
                    if self.position_writes >= limit {
                        return Err(ItineraryError::Storage {
                            message: format!("injected failure writing position of {id}"),
                        });
                    }
                }
                self.position_writes += 1;
            }

            let Some(record) = self.records.get_mut(&id) else {
                return Ok(0);
            };
            if let Some(name) = &fields.name {
                record.name = name.clone();
            }
            if let Some(coordinates) = fields.coordinates {
                record.coordinates = coordinates;
            }
            if let Some(description) = &fields.description {
                record.description = Some(description.clone());
            }
            if let Some(image_url) = &fields.image_url {
                record.image_url = Some(image_url.clone());
            }
            if let Some(position) = fields.position {
                record.position = position;
            }
            record.updated_at = Timestamp::now();
            Ok(1)
        }

        fn remove(&mut self, id: u64) -> Result<bool> {
            Ok(self.records.remove(&id).is_some())
        }

        fn find(&mut self, id: u64) -> Result<Option<Destination>> {
            Ok(self.records.get(&id).cloned())
        }

        fn itinerary_exists(&mut self, itinerary_id: u64) -> Result<bool> {
            Ok(self.itineraries.contains(&itinerary_id))
        }
    }
}
