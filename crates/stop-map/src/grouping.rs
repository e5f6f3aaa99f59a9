//! Folds raw stop records into logical stations keyed by base id.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::identifiers::BaseIdentifier;
use crate::models::{StationGroup, StopRecord, TransitKind};

/// Merge an ordered sequence of stop records into station groups.
///
/// Subway records pair up by base id: the first record seen for a base id
/// seeds the group (its name and coordinates become representative and are
/// never overwritten), and a later record with the opposite suffix fills in
/// the other variant slot. Subway records without a direction suffix are
/// parent-station rows from the catalog and contribute nothing. Bus records
/// never merge, even when co-located; each becomes its own singleton group.
///
/// Pure and idempotent; callers re-run it whenever the stop set changes.
pub fn group_stops<I>(stops: I) -> HashMap<BaseIdentifier, StationGroup>
where
    I: IntoIterator<Item = StopRecord>,
{
    let mut groups: HashMap<BaseIdentifier, StationGroup> = HashMap::new();

    for record in stops {
        if record.kind != TransitKind::Train {
            let group = StationGroup::singleton(record);
            groups.insert(group.base_id.clone(), group);
            continue;
        }

        let Some(direction) = record.id.direction() else {
            debug!(stop_id = %record.id, "skipping suffix-less parent station record");
            continue;
        };

        let base_id = record.id.base();
        match groups.entry(base_id.clone()) {
            Entry::Occupied(mut slot) => slot.get_mut().variants.set(direction, record),
            Entry::Vacant(slot) => {
                slot.insert(StationGroup::seeded(base_id, direction, record));
            }
        }
    }

    groups
}
