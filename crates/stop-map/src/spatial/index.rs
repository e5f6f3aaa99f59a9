//! R-tree index over station groups for proximity queries.
//!
//! The picker's "stops near you" listing needs nearest-station lookups over
//! the full catalog. Queries filter in two stages: a coarse Euclidean pass in
//! degree space inside the R-tree, then an exact haversine check on the
//! survivors. Euclidean degrees overshoot real distance along longitude, so
//! the coarse radius is padded rather than exact.

use std::collections::HashMap;
use std::sync::Arc;

use geo::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::identifiers::BaseIdentifier;
use crate::models::StationGroup;
use crate::spatial::queries::{distance_miles, MILES_PER_DEGREE_APPROX};

#[derive(Clone)]
struct StationNode {
    group: Arc<StationGroup>,
    point: [f64; 2],
}

impl StationNode {
    fn new(group: Arc<StationGroup>) -> Self {
        let point = [group.location.x(), group.location.y()];
        Self { group, point }
    }
}

impl RTreeObject for StationNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StationNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Immutable spatial index over a station group collection.
///
/// Rebuilt whenever the stop set changes, like the groups themselves.
pub struct StationIndex {
    tree: RTree<StationNode>,
    by_base: HashMap<BaseIdentifier, Arc<StationGroup>>,
}

impl StationIndex {
    pub fn new(groups: impl IntoIterator<Item = StationGroup>) -> Self {
        let nodes: Vec<StationNode> = groups
            .into_iter()
            .map(|group| StationNode::new(Arc::new(group)))
            .collect();
        let by_base = nodes
            .iter()
            .map(|node| (node.group.base_id.clone(), node.group.clone()))
            .collect();
        Self {
            tree: RTree::bulk_load(nodes),
            by_base,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn get(&self, base_id: &BaseIdentifier) -> Option<Arc<StationGroup>> {
        self.by_base.get(base_id).cloned()
    }

    /// Stations within `radius_miles` of `origin`, unordered.
    pub fn stations_near(&self, origin: Point, radius_miles: f64) -> Vec<Arc<StationGroup>> {
        if radius_miles <= 0.0 || !radius_miles.is_finite() {
            return Vec::new();
        }

        // Padded coarse radius: a degree of longitude covers fewer miles than
        // a degree of latitude, so the unpadded box could drop real hits.
        let coarse_deg = 2.0 * radius_miles / MILES_PER_DEGREE_APPROX;
        self.tree
            .locate_within_distance([origin.x(), origin.y()], coarse_deg * coarse_deg)
            .filter(|node| distance_miles(origin, node.group.location) <= radius_miles)
            .map(|node| node.group.clone())
            .collect()
    }

    /// The `n` stations closest to `origin`, nearest first.
    pub fn nearest(&self, origin: Point, n: usize) -> Vec<Arc<StationGroup>> {
        self.tree
            .nearest_neighbor_iter(&[origin.x(), origin.y()])
            .take(n)
            .map(|node| node.group.clone())
            .collect()
    }
}
