//! [`DestinationStore`] over a SQLite connection or open transaction.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row, ToSql};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Coordinates, Destination, DestinationFields, NewDestination},
    store::DestinationStore,
};

const DESTINATION_COLUMNS: &str = "id, itinerary_id, name, latitude, longitude, position, description, image_url, created_at, updated_at";
const CHECK_ITINERARY_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM itineraries WHERE id = ?1)";
const INSERT_DESTINATION_SQL: &str = "INSERT INTO destinations (itinerary_id, name, latitude, longitude, position, description, image_url, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const DELETE_DESTINATION_SQL: &str = "DELETE FROM destinations WHERE id = ?1";

/// Record-level destination persistence borrowing a connection.
///
/// Pass a `rusqlite::Transaction` (it derefs to `Connection`) to make a
/// sequence of calls atomic.
pub struct SqliteStore<'a> {
    connection: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    pub(crate) fn connection(&self) -> &Connection {
        self.connection
    }

    /// Maps a row selected with [`DESTINATION_COLUMNS`].
    pub(crate) fn destination_from_row(row: &Row) -> rusqlite::Result<Destination> {
        Ok(Destination {
            id: row.get::<_, i64>(0)? as u64,
            itinerary_id: row.get::<_, i64>(1)? as u64,
            name: row.get(2)?,
            coordinates: Coordinates::new(row.get(3)?, row.get(4)?),
            position: row.get::<_, i64>(5)? as u32,
            description: row.get(6)?,
            image_url: row.get(7)?,
            created_at: timestamp_column(row, 8)?,
            updated_at: timestamp_column(row, 9)?,
        })
    }
}

/// Reads a TEXT column holding an RFC 3339 timestamp.
pub(crate) fn timestamp_column(row: &Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl DestinationStore for SqliteStore<'_> {
    fn list_all(&mut self, itinerary_id: u64) -> Result<Vec<Destination>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {DESTINATION_COLUMNS} FROM destinations WHERE itinerary_id = ?1"
            ))
            .db_context("Failed to prepare query")?;

        let destinations = stmt
            .query_map(params![itinerary_id as i64], Self::destination_from_row)
            .db_context("Failed to query destinations")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch destinations")?;

        Ok(destinations)
    }

    fn insert(&mut self, destination: NewDestination) -> Result<Destination> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_DESTINATION_SQL,
                params![
                    destination.itinerary_id as i64,
                    &destination.name,
                    destination.coordinates.latitude,
                    destination.coordinates.longitude,
                    destination.position as i64,
                    destination.description.as_deref(),
                    destination.image_url.as_deref(),
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert destination")?;

        Ok(Destination {
            id: self.connection.last_insert_rowid() as u64,
            itinerary_id: destination.itinerary_id,
            name: destination.name,
            coordinates: destination.coordinates,
            position: destination.position,
            description: destination.description,
            image_url: destination.image_url,
            created_at: now,
            updated_at: now,
        })
    }

    fn update_fields(&mut self, id: u64, fields: &DestinationFields) -> Result<usize> {
        let mut assignments = vec!["updated_at = ?"];
        let mut values: Vec<Box<dyn ToSql>> = vec![Box::new(Timestamp::now().to_string())];

        if let Some(ref name) = fields.name {
            assignments.push("name = ?");
            values.push(Box::new(name.clone()));
        }
        if let Some(coordinates) = fields.coordinates {
            assignments.push("latitude = ?");
            values.push(Box::new(coordinates.latitude));
            assignments.push("longitude = ?");
            values.push(Box::new(coordinates.longitude));
        }
        if let Some(ref description) = fields.description {
            assignments.push("description = ?");
            values.push(Box::new(description.clone()));
        }
        if let Some(ref image_url) = fields.image_url {
            assignments.push("image_url = ?");
            values.push(Box::new(image_url.clone()));
        }
        if let Some(position) = fields.position {
            assignments.push("position = ?");
            values.push(Box::new(position as i64));
        }
        values.push(Box::new(id as i64));

        let sql = format!(
            "UPDATE destinations SET {} WHERE id = ?",
            assignments.join(", ")
        );
        let refs: Vec<&dyn ToSql> = values.iter().map(|b| &**b).collect();

        self.connection
            .execute(&sql, &refs[..])
            .db_context("Failed to update destination")
    }

    fn remove(&mut self, id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_DESTINATION_SQL, params![id as i64])
            .db_context("Failed to delete destination")?;
        Ok(removed > 0)
    }

    fn find(&mut self, id: u64) -> Result<Option<Destination>> {
        self.connection
            .query_row(
                &format!("SELECT {DESTINATION_COLUMNS} FROM destinations WHERE id = ?1"),
                params![id as i64],
                Self::destination_from_row,
            )
            .optional()
            .db_context("Failed to query destination")
    }

    fn itinerary_exists(&mut self, itinerary_id: u64) -> Result<bool> {
        self.connection
            .query_row(
                CHECK_ITINERARY_EXISTS_SQL,
                params![itinerary_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check itinerary existence")
    }
}
