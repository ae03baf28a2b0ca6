//! Ordering and validation helpers shared by every itinerary mutation.
//!
//! Positions are 1-based and contiguous. These functions are pure: they
//! inspect or permute in-memory slices and never touch a store.

use std::collections::HashSet;

use crate::{
    error::{ItineraryError, Result},
    models::Destination,
};

/// Sorts destinations ascending by position, breaking ties by id so the
/// result is deterministic even for a corrupt sequence.
pub fn sort_by_position(destinations: &mut [Destination]) {
    destinations.sort_by_key(|d| (d.position, d.id));
}

/// Verifies that sorted destinations carry exactly the positions `1..=N`.
pub fn check_contiguous(itinerary_id: u64, sorted: &[Destination]) -> Result<()> {
    let contiguous = sorted
        .iter()
        .enumerate()
        .all(|(index, d)| d.position as usize == index + 1);

    if contiguous {
        Ok(())
    } else {
        Err(ItineraryError::CorruptSequence {
            itinerary_id,
            positions: sorted.iter().map(|d| d.position).collect(),
        })
    }
}

/// Pairs `(id, new_position)` for every destination whose position differs
/// from its index + 1 in `sorted`.
pub fn renumbered(sorted: &[Destination]) -> Vec<(u64, u32)> {
    sorted
        .iter()
        .enumerate()
        .filter_map(|(index, d)| {
            let position = index as u32 + 1;
            (d.position != position).then_some((d.id, position))
        })
        .collect()
}

/// Checks that `ordered_ids` is an exact permutation of the ids in `current`.
pub fn validate_permutation(current: &[Destination], ordered_ids: &[u64]) -> Result<()> {
    if ordered_ids.len() != current.len() {
        return Err(ItineraryError::invalid_input(
            "ordered_ids",
            format!(
                "Expected {} destination ids, got {}",
                current.len(),
                ordered_ids.len()
            ),
        ));
    }

    let known: HashSet<u64> = current.iter().map(|d| d.id).collect();
    let mut seen = HashSet::with_capacity(ordered_ids.len());
    for id in ordered_ids {
        if !known.contains(id) {
            return Err(ItineraryError::invalid_input(
                "ordered_ids",
                format!("Destination {id} does not belong to this itinerary"),
            ));
        }
        if !seen.insert(*id) {
            return Err(ItineraryError::invalid_input(
                "ordered_ids",
                format!("Destination {id} appears more than once"),
            ));
        }
    }
    Ok(())
}

/// Moves the element at `from` to `to`, shifting everything in between.
/// Both indices are 0-based and must be in range.
pub fn move_index<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Rejects a proposed order in which any two same-named destinations are
/// neighbours. Pairs that were already adjacent before the change are not
/// exempt.
pub fn check_adjacent_names(proposed: &[&Destination]) -> Result<()> {
    match proposed
        .windows(2)
        .find(|pair| same_name(&pair[0].name, &pair[1].name))
    {
        Some(pair) => Err(ItineraryError::AdjacentDuplicateName {
            name: pair[0].name.trim().to_string(),
        }),
        None => Ok(()),
    }
}

/// Rejects appending `name` directly after a destination with the same name.
pub fn check_append(last: Option<&Destination>, name: &str) -> Result<()> {
    match last {
        Some(last) if same_name(&last.name, name) => Err(ItineraryError::AdjacentDuplicateName {
            name: name.trim().to_string(),
        }),
        _ => Ok(()),
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}
