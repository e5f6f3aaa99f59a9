//! Tri-state selection resolution against the externally-owned selection set.
//!
//! The selection set lives with the persistence layer; this module only reads
//! it and builds full replacement sets for toggle requests, it never diffs or
//! retains a copy.

use std::collections::HashSet;

use crate::identifiers::{Direction, StopIdentifier};
use crate::models::{SelectionState, StationGroup, TransitKind};

/// Resolve the selection indicator for one station group.
///
/// Subway groups count their present variants: all selected is `Full`, some
/// selected is `Partial`. A group carrying only one directional record reaches
/// `Full` through that single record; there is no penalty for the direction
/// that does not exist. Singleton groups (buses) are keyed by their base id
/// and can only be `Full` or `None`.
pub fn selection_state(group: &StationGroup, selected: &HashSet<StopIdentifier>) -> SelectionState {
    if group.kind != TransitKind::Train {
        return if selected.contains(&StopIdentifier::new(group.base_id.as_str())) {
            SelectionState::Full
        } else {
            SelectionState::None
        };
    }

    let present = group.variants.len();
    let chosen = [Direction::North, Direction::South]
        .into_iter()
        .filter_map(|d| group.variant(d))
        .filter(|record| selected.contains(&record.id))
        .count();

    match chosen {
        0 => SelectionState::None,
        n if n == present => SelectionState::Full,
        _ => SelectionState::Partial,
    }
}

/// Build the replacement selection set for toggling one stop id.
///
/// The persistence service accepts whole sets, so the toggle produces the full
/// next state rather than a delta.
pub fn toggle(selected: &HashSet<StopIdentifier>, id: &StopIdentifier) -> HashSet<StopIdentifier> {
    let mut next = selected.clone();
    if !next.remove(id) {
        next.insert(id.clone());
    }
    next
}
