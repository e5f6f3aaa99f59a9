//! Shared enums for the stop-picker data model.

/// Kind of service a stop belongs to.
///
/// Subway stops carry directional suffixes and merge into stations; bus stops
/// are opaque singletons and never merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitKind {
    Train,
    Bus,
}

/// Route sentinel for stops whose id encodes no route (buses).
pub const BUS_ROUTE: &str = "Bus";

/// Tri-state selection indicator for a station group.
///
/// Derived from the externally-owned selection set on every read; never
/// stored on the group itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionState {
    /// No directional variant of the station is selected.
    None,
    /// Some but not all present variants are selected.
    Partial,
    /// Every variant present on the station is selected.
    Full,
}

/// Serde adapter for `geo::Point`, stored as a `[lon, lat]` pair.
#[cfg(feature = "serde")]
pub(crate) mod point_serde {
    use geo::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(point: &Point, serializer: S) -> Result<S::Ok, S::Error> {
        [point.x(), point.y()].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Point::new(x, y))
    }
}
