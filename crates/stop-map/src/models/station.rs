//! Logical stations: co-located directional stops merged into one group.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::{BaseIdentifier, Direction, StopIdentifier};
use crate::models::stop::StopRecord;
use crate::models::types::{TransitKind, BUS_ROUTE};

/// Per-direction stop records of a station. Either slot may be absent; a
/// station seen only from one direction is still a valid group.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionalVariants {
    pub north: Option<StopRecord>,
    pub south: Option<StopRecord>,
}

impl DirectionalVariants {
    pub fn get(&self, direction: Direction) -> Option<&StopRecord> {
        match direction {
            Direction::North => self.north.as_ref(),
            Direction::South => self.south.as_ref(),
        }
    }

    pub fn set(&mut self, direction: Direction, record: StopRecord) {
        match direction {
            Direction::North => self.north = Some(record),
            Direction::South => self.south = Some(record),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.north.is_none() && self.south.is_none()
    }

    /// Number of populated directional slots.
    pub fn len(&self) -> usize {
        usize::from(self.north.is_some()) + usize::from(self.south.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StopRecord> {
        self.north.iter().chain(self.south.iter())
    }
}

/// A logical station merging co-located directional stops.
///
/// `name` and `location` come from the first constituent record seen and are
/// representative only; directional platforms may sit a few meters apart.
/// Bus stops never merge: each becomes its own group keyed by its own id,
/// with empty variants and the [`BUS_ROUTE`] sentinel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationGroup {
    pub base_id: BaseIdentifier,
    pub name: Arc<str>,
    #[cfg_attr(feature = "serde", serde(with = "crate::models::types::point_serde"))]
    pub location: Point,
    pub route: Arc<str>,
    pub kind: TransitKind,
    pub variants: DirectionalVariants,
}

impl StationGroup {
    /// Seed a subway group from the first directional record seen for its
    /// base id. The record's name and location become representative.
    pub fn seeded(base_id: BaseIdentifier, direction: Direction, record: StopRecord) -> Self {
        let mut variants = DirectionalVariants::default();
        let route: Arc<str> = record.id.route().into();
        let name = record.name.clone();
        let location = record.location;
        variants.set(direction, record);
        Self {
            base_id,
            name,
            location,
            route,
            kind: TransitKind::Train,
            variants,
        }
    }

    /// Wrap a non-merging record (bus stop) as its own singleton group.
    pub fn singleton(record: StopRecord) -> Self {
        Self {
            base_id: BaseIdentifier::new(record.id.as_str()),
            name: record.name.clone(),
            location: record.location,
            route: BUS_ROUTE.into(),
            kind: record.kind,
            variants: DirectionalVariants::default(),
        }
    }

    pub fn variant(&self, direction: Direction) -> Option<&StopRecord> {
        self.variants.get(direction)
    }

    /// Stop ids a selection toggle on this station operates over. Empty for
    /// singleton groups, whose base id doubles as their stop id.
    pub fn variant_ids(&self) -> impl Iterator<Item = &StopIdentifier> {
        self.variants.iter().map(|record| &record.id)
    }
}
