//! Data model for the stop-picker map: raw stop records, merged station
//! groups, and the derived per-station state enums.

pub mod station;
pub mod stop;
pub mod types;

// Re-exports for convenience
pub use station::{DirectionalVariants, StationGroup};
pub use stop::StopRecord;
pub use types::{SelectionState, TransitKind, BUS_ROUTE};
