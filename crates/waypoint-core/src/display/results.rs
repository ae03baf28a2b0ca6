//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::collections::Destinations;
use crate::models::{Destination, Itinerary};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::CreateResult, models::Itinerary};
/// use jiff::Timestamp;
///
/// let itinerary = Itinerary {
///     id: 1,
///     title: "Weekend in Porto".to_string(),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     destinations: vec![],
/// };
///
/// let output = CreateResult::new(itinerary).to_string();
/// assert!(output.starts_with("Created itinerary with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Itinerary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created itinerary with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Destination> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added destination with ID: {} at position {}",
            self.resource.id, self.resource.position
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Destination> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated destination with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// A reorder or move: the whole itinerary in its new order.
impl fmt::Display for UpdateResult<Destinations> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let itinerary_id = self.resource.iter().next().map(|d| d.itinerary_id);
        match itinerary_id {
            Some(id) => writeln!(f, "Reordered itinerary {id}")?,
            None => writeln!(f, "Reordered itinerary")?,
        }
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Itinerary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted itinerary '{}' (ID: {}) and {} destination(s)",
            self.resource.title,
            self.resource.id,
            self.resource.destinations.len()
        )
    }
}

impl fmt::Display for DeleteResult<Destination> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed destination '{}' (ID: {}) from position {}",
            self.resource.name, self.resource.id, self.resource.position
        )
    }
}
