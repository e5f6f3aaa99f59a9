//! Deterministic marker layout with collision fan-out.
//!
//! Directional platforms and dense stop clusters frequently share
//! near-identical coordinates; drawn naively, their markers stack and all but
//! the last painted one disappear. This resolver nudges colliding markers
//! apart along a golden-angle spiral so clusters fan out evenly without any
//! global optimization pass.

use std::collections::HashMap;

use geo::Point;
use tracing::warn;

use crate::identifiers::BaseIdentifier;
use crate::models::StationGroup;

/// Minimum separation, in degrees of latitude and longitude, below which two
/// markers visually overlap at the map's default zoom.
pub const SEPARATION_DEG: f64 = 0.00025;

/// Bounded search: past this many candidates the last one is accepted as-is.
const ATTEMPT_BUDGET: usize = 20;

/// Successive candidate offsets rotate by the golden angle, which never
/// revisits an alignment and so spreads dense clusters evenly.
const GOLDEN_ANGLE_DEG: f64 = 137.5;

/// Assign every station group a display coordinate at least
/// [`SEPARATION_DEG`] away (in latitude or longitude) from every other,
/// best-effort within a fixed attempt budget.
pub fn resolve_marker_positions(
    groups: &HashMap<BaseIdentifier, StationGroup>,
) -> HashMap<BaseIdentifier, Point> {
    resolve_with_threshold(groups, SEPARATION_DEG)
}

/// [`resolve_marker_positions`] with an explicit separation threshold.
///
/// Groups are processed in ascending base-id order, so the result is a pure
/// function of the group collection regardless of map iteration order.
pub fn resolve_with_threshold(
    groups: &HashMap<BaseIdentifier, StationGroup>,
    threshold: f64,
) -> HashMap<BaseIdentifier, Point> {
    let mut order: Vec<&StationGroup> = groups.values().collect();
    order.sort_by(|a, b| a.base_id.as_str().cmp(b.base_id.as_str()));

    let mut placed: HashMap<BaseIdentifier, Point> = HashMap::with_capacity(order.len());
    for group in order {
        let raw = group.location;
        let mut candidate = raw;
        let mut separated = !collides(candidate, placed.values(), threshold);
        let mut attempt = 0;
        while !separated && attempt < ATTEMPT_BUDGET {
            candidate = spiral_candidate(raw, attempt, threshold);
            separated = !collides(candidate, placed.values(), threshold);
            attempt += 1;
        }
        if !separated {
            warn!(
                base_id = %group.base_id,
                "layout attempt budget exhausted, accepting overlapping marker position"
            );
        }
        placed.insert(group.base_id.clone(), candidate);
    }

    placed
}

/// Rectangular proximity test: a collision requires both axes to be within
/// the threshold, matching the square footprint of a fixed-size marker.
fn collides<'a>(
    candidate: Point,
    mut placed: impl Iterator<Item = &'a Point>,
    threshold: f64,
) -> bool {
    placed.any(|other| {
        (other.y() - candidate.y()).abs() < threshold
            && (other.x() - candidate.x()).abs() < threshold
    })
}

/// Candidate position for the given attempt: the raw coordinate displaced by
/// `threshold * (1 + attempt/8 * 0.5)` at `attempt * 137.5deg`. The radius
/// steps up every eight attempts to escape locally dense clusters.
fn spiral_candidate(raw: Point, attempt: usize, threshold: f64) -> Point {
    let angle = (attempt as f64 * GOLDEN_ANGLE_DEG).to_radians();
    let radius = threshold * (1.0 + (attempt / 8) as f64 * 0.5);
    // Latitude moves with cos, longitude with sin; Point is (lon, lat).
    Point::new(raw.x() + radius * angle.sin(), raw.y() + radius * angle.cos())
}
