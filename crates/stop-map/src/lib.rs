//! # transit-stop-map
//!
//! Station-map engine for the stop picker: merges directional stop records
//! into logical stations, derives each station's tri-state selection
//! indicator, spreads colliding markers apart deterministically, and runs the
//! hover/click/pin popup state machine per marker.
//!
//! ## Features
//!
//! - **Pure recomputation**: grouping, selection, and layout are side-effect
//!   free and re-run on every input change
//! - **Deterministic layout**: golden-angle fan-out, stable across runs
//! - **Spatial queries**: R-tree index for "stops near you" listings
//! - **Catalog loading** (feature `catalog`): GTFS `stops.txt` parsing
//!
//! ## Example
//!
//! ```
//! use transit_stop_map::prelude::*;
//! use geo::Point;
//! use std::collections::HashSet;
//!
//! let stops = vec![
//!     StopRecord::new("L12N", "Graham Av", Point::new(-73.944, 40.714), TransitKind::Train),
//!     StopRecord::new("L12S", "Graham Av", Point::new(-73.944, 40.714), TransitKind::Train),
//! ];
//!
//! let groups = group_stops(stops);
//! let selected: HashSet<StopIdentifier> = [StopIdentifier::new("L12N")].into();
//!
//! // One marker for the station, flagged partially selected.
//! let markers = build_markers(&groups, &selected);
//! assert_eq!(markers.len(), 1);
//! assert_eq!(markers[0].selection, SelectionState::Partial);
//!
//! // Toggling the other platform produces the full replacement set.
//! let next = toggle(&selected, &StopIdentifier::new("L12S"));
//! assert_eq!(next.len(), 2);
//! ```

#[cfg(feature = "catalog")]
pub mod catalog;
pub mod grouping;
pub mod identifiers;
pub mod layout;
pub mod marker;
pub mod models;
pub mod popup;
pub mod selection;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    #[cfg(feature = "catalog")]
    pub use crate::catalog::{load_stops, read_stops, CatalogError};
    pub use crate::grouping::group_stops;
    pub use crate::identifiers::{
        base_id_of, direction_of, route_of, BaseIdentifier, Direction, StopIdentifier,
    };
    pub use crate::layout::{resolve_marker_positions, resolve_with_threshold, SEPARATION_DEG};
    pub use crate::marker::{build_markers, route_color, Marker, RouteColor};
    pub use crate::models::{
        DirectionalVariants, SelectionState, StationGroup, StopRecord, TransitKind, BUS_ROUTE,
    };
    pub use crate::popup::{PopupController, PopupEvent, PopupPhase, CLOSE_DEBOUNCE};
    pub use crate::selection::{selection_state, toggle};
    pub use crate::spatial::{distance_miles, format_distance, sort_by_distance, StationIndex};
}

pub use prelude::*;
