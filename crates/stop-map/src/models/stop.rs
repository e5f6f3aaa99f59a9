//! Raw stop records as sourced from the stop catalog.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::StopIdentifier;
use crate::models::types::TransitKind;

/// One directional transit stop, immutable for the duration of a session.
///
/// `id` is globally unique across the full stop set. Subway records come in
/// directional pairs (`"L12N"`/`"L12S"`) that share a name and near-identical
/// coordinates; bus records stand alone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopRecord {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    #[cfg_attr(feature = "serde", serde(with = "crate::models::types::point_serde"))]
    pub location: Point,
    pub kind: TransitKind,
}

impl StopRecord {
    pub fn new(
        id: impl Into<StopIdentifier>,
        name: impl AsRef<str>,
        location: Point,
        kind: TransitKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
            location,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_record_construction() {
        let stop = StopRecord::new(
            "L12N",
            "Graham Av",
            Point::new(-73.944, 40.714),
            TransitKind::Train,
        );

        assert_eq!(stop.id.as_str(), "L12N");
        assert_eq!(&*stop.name, "Graham Av");
        assert_eq!(stop.kind, TransitKind::Train);
    }
}
