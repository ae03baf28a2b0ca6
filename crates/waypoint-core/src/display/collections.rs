//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with their own `Display` impl and prints a
//! fixed message when empty.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{Destination, ItinerarySummary};

macro_rules! collection_wrapper {
    ($wrapper:ident, $item:ty, $empty:literal) => {
        impl $wrapper {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $wrapper {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $wrapper {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{item}")?;
                    }
                    Ok(())
                }
            }
        }
    };
}

/// Itinerary summaries for list views.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::ItinerarySummaries, models::ItinerarySummary};
/// use jiff::Timestamp;
///
/// let summaries = ItinerarySummaries(vec![ItinerarySummary {
///     id: 1,
///     title: "Road trip".to_string(),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     destination_count: 4,
/// }]);
/// assert!(summaries.to_string().contains("Road trip (ID: 1) (4 destinations)"));
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ItinerarySummaries(pub Vec<ItinerarySummary>);

/// Destinations of one itinerary, in visit order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Destinations(pub Vec<Destination>);

collection_wrapper!(ItinerarySummaries, ItinerarySummary, "No itineraries found.");
collection_wrapper!(Destinations, Destination, "No destinations found.");
