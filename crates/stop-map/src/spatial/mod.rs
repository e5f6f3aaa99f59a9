//! Distance math and spatial indexing over station groups.

pub mod index;
pub mod queries;

pub use index::StationIndex;
pub use queries::{distance_miles, format_distance, sort_by_distance};
