//! Itinerary CRUD operations and queries.

use jiff::Timestamp;
use log::info;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use super::destination_store::timestamp_column;
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    itinerary::ItineraryManager,
    models::{Itinerary, ItinerarySummary},
};

const INSERT_ITINERARY_SQL: &str =
    "INSERT INTO itineraries (title, created_at, updated_at) VALUES (?1, ?2, ?3)";
const SELECT_ITINERARY_SQL: &str =
    "SELECT id, title, created_at, updated_at FROM itineraries WHERE id = ?1";
const SELECT_SUMMARIES_SQL: &str = "SELECT id, title, created_at, updated_at, destination_count FROM itinerary_summaries ORDER BY created_at DESC, id DESC";
const DELETE_ITINERARY_SQL: &str = "DELETE FROM itineraries WHERE id = ?1";
pub(super) const TOUCH_ITINERARY_SQL: &str = "UPDATE itineraries SET updated_at = ?1 WHERE id = ?2";

impl super::Database {
    /// Creates a new, empty itinerary.
    pub fn create_itinerary(&mut self, title: &str) -> Result<Itinerary> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(INSERT_ITINERARY_SQL, params![title, &now_str, &now_str])
            .map_err(|e| ItineraryError::database_error("Failed to insert itinerary", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        info!("Created itinerary {id}: {title}");

        Ok(Itinerary {
            id,
            title: title.into(),
            created_at: now,
            updated_at: now,
            destinations: Vec::new(),
        })
    }

    /// Retrieves an itinerary with its destinations in visit order.
    pub fn get_itinerary(&self, id: u64) -> Result<Option<Itinerary>> {
        let itinerary = self
            .connection
            .query_row(SELECT_ITINERARY_SQL, params![id as i64], |row| {
                Ok(Itinerary {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    created_at: timestamp_column(row, 2)?,
                    updated_at: timestamp_column(row, 3)?,
                    destinations: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query itinerary")?;

        match itinerary {
            Some(mut itinerary) => {
                itinerary.destinations =
                    self.read(|store| ItineraryManager::new(store).list(id))?;
                Ok(Some(itinerary))
            }
            None => Ok(None),
        }
    }

    /// Lists all itineraries, newest first, with destination counts.
    pub fn list_itineraries(&self) -> Result<Vec<ItinerarySummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(ItinerarySummary {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    created_at: timestamp_column(row, 2)?,
                    updated_at: timestamp_column(row, 3)?,
                    destination_count: row.get::<_, i64>(4)? as u32,
                })
            })
            .db_context("Failed to query itineraries")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch itineraries")?;

        Ok(summaries)
    }

    /// Permanently deletes an itinerary and all of its destinations.
    /// Returns the itinerary as it was before deletion.
    pub fn delete_itinerary(&mut self, id: u64) -> Result<Itinerary> {
        let itinerary = self
            .get_itinerary(id)?
            .ok_or(ItineraryError::ItineraryNotFound { id })?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        // Destinations go with it via ON DELETE CASCADE
        let deleted = tx
            .execute(DELETE_ITINERARY_SQL, params![id as i64])
            .map_err(|e| ItineraryError::database_error("Failed to delete itinerary", e))?;
        if deleted == 0 {
            return Err(ItineraryError::ItineraryNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;
        info!(
            "Deleted itinerary {id} with {} destinations",
            itinerary.destinations.len()
        );

        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use crate::db::Database;

    fn database() -> (Database, NamedTempFile) {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        let db = Database::new(file.path()).expect("Failed to create database");
        (db, file)
    }

    #[test]
    fn test_create_and_get_itinerary() {
        let (mut db, _file) = database();
        let created = db.create_itinerary("Iberia").unwrap();

        let fetched = db.get_itinerary(created.id).unwrap().unwrap();
        assert_eq!(fetched.title, "Iberia");
        assert!(fetched.destinations.is_empty());
        assert!(db.get_itinerary(created.id + 1).unwrap().is_none());
    }

    #[test]
    fn test_list_itineraries_newest_first() {
        let (mut db, _file) = database();
        let first = db.create_itinerary("First").unwrap();
        let second = db.create_itinerary("Second").unwrap();

        let listed = db.list_itineraries().unwrap();
        let ids: Vec<u64> = listed.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert!(listed.iter().all(|s| s.destination_count == 0));
    }

    #[test]
    fn test_delete_missing_itinerary() {
        let (mut db, _file) = database();
        let err = db.delete_itinerary(12).unwrap_err();
        assert!(err.is_not_found());
    }
}
