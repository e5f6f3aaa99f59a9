//! Render-ready marker assembly.
//!
//! Composes grouping, selection resolution, and collision layout into one
//! value per station that the map surface can draw directly: where the marker
//! sits, which tri-state icon it shows, and the route tint it carries.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use geo::Point;
use tracing::debug;

use crate::identifiers::{BaseIdentifier, StopIdentifier};
use crate::layout::resolve_marker_positions;
use crate::models::{SelectionState, StationGroup, TransitKind};
use crate::selection::selection_state;

/// RGB tint for a marker, keyed by route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const GRAY: RouteColor = RouteColor { r: 90, g: 90, b: 90 };

/// Standard MTA line colors. Unknown routes fall back to gray.
pub fn route_color(route: &str) -> RouteColor {
    match route {
        "A" | "C" | "E" => RouteColor { r: 0, g: 10, b: 155 },
        "1" | "2" | "3" => RouteColor { r: 110, g: 0, b: 0 },
        "7X" => RouteColor { r: 200, g: 100, b: 200 },
        "7" => RouteColor { r: 200, g: 0, b: 200 },
        "B" | "D" | "F" | "M" => RouteColor { r: 255, g: 140, b: 0 },
        "N" | "Q" | "R" | "W" => RouteColor { r: 155, g: 155, b: 0 },
        "J" | "Z" => RouteColor { r: 59, g: 29, b: 12 },
        "4" | "5" | "6" => RouteColor { r: 6, g: 64, b: 43 },
        "L" => GRAY,
        _ => {
            debug!(route, "no color for route, using gray");
            GRAY
        }
    }
}

/// One drawable marker: a station group with its resolved position,
/// selection indicator, and route tint.
#[derive(Clone, Debug)]
pub struct Marker {
    pub group: Arc<StationGroup>,
    pub position: Point,
    pub selection: SelectionState,
    pub color: RouteColor,
}

impl Marker {
    pub fn base_id(&self) -> &BaseIdentifier {
        &self.group.base_id
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }
}

/// Assemble markers for the full group collection, sorted by base id.
///
/// Selection and layout are independent reads over the same groups; re-run
/// this whenever either the stop set or the selection set changes.
pub fn build_markers(
    groups: &HashMap<BaseIdentifier, StationGroup>,
    selected: &HashSet<StopIdentifier>,
) -> Vec<Marker> {
    let positions = resolve_marker_positions(groups);

    let mut markers: Vec<Marker> = groups
        .values()
        .map(|group| {
            let position = positions
                .get(&group.base_id)
                .copied()
                .unwrap_or(group.location);
            let color = match group.kind {
                TransitKind::Train => route_color(&group.route),
                TransitKind::Bus => GRAY,
            };
            Marker {
                group: Arc::new(group.clone()),
                position,
                selection: selection_state(group, selected),
                color,
            }
        })
        .collect();
    markers.sort_by(|a, b| a.base_id().as_str().cmp(b.base_id().as_str()));
    markers
}
