//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Cascading deletes rely on this, and it is per connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use crate::db::Database;

    #[test]
    fn test_schema_initialization_is_repeatable() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        drop(Database::new(file.path()).expect("Failed to create database"));

        let db = Database::new(file.path()).expect("Failed to reopen database");
        let foreign_keys: i64 = db
            .connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(foreign_keys, 1);

        let columns: Vec<String> = db
            .connection
            .prepare("SELECT name FROM pragma_table_info('destinations') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert!(columns.iter().any(|c| c == "image_url"));
        assert!(columns.iter().any(|c| c == "position"));
    }
}
