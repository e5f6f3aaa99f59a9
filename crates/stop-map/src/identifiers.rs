//! Type-safe identifiers for stops and stations, plus the stop-id decomposition
//! used to merge directional platforms into logical stations.
//!
//! Identifiers use Arc<str> for cheap cloning and minimal memory overhead.
//!
//! Subway stop ids follow the `{route}{seq}{N|S}` shape (e.g. `"L12N"` is the
//! northbound platform of station `"L12"` on the `L` line). Bus stop ids are
//! opaque numeric strings with no internal structure. The decomposition
//! functions here are total: malformed input degrades to a best-effort answer,
//! it never errors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::new(s))
            }
        }
    };
}

impl_identifier!(StopIdentifier);
impl_identifier!(BaseIdentifier);

/// Travel direction encoded by a trailing `N`/`S` on a subway stop id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
}

impl Direction {
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            _ => None,
        }
    }

    pub fn suffix(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "Northbound"),
            Self::South => write!(f, "Southbound"),
        }
    }
}

/// Classify a stop id by its trailing character, `None` if it carries no
/// direction suffix (parent-station records, bus stops).
pub fn direction_of(stop_id: &str) -> Option<Direction> {
    stop_id.chars().last().and_then(Direction::from_suffix)
}

/// Strip a trailing direction suffix if present, else return the input
/// unchanged. Directional siblings (`"L12N"`, `"L12S"`) share a base id.
pub fn base_id_of(stop_id: &str) -> &str {
    match direction_of(stop_id) {
        // The suffix is a single ASCII byte, so the slice is on a char boundary.
        Some(_) => &stop_id[..stop_id.len() - 1],
        None => stop_id,
    }
}

/// Derive the route code from a stop id: after stripping the direction suffix,
/// a leading digit is the route (numbered lines), otherwise the leading
/// character upper-cased (lettered lines). Total over any string; malformed
/// input yields the raw leading character rather than an error.
pub fn route_of(stop_id: &str) -> String {
    match base_id_of(stop_id).chars().next() {
        Some(c) if c.is_ascii_digit() => c.to_string(),
        Some(c) => c.to_uppercase().collect(),
        None => String::new(),
    }
}

impl StopIdentifier {
    /// Direction suffix of this stop id, if any.
    pub fn direction(&self) -> Option<Direction> {
        direction_of(self.as_str())
    }

    /// Base station id shared with the opposite-direction platform.
    pub fn base(&self) -> BaseIdentifier {
        BaseIdentifier::new(base_id_of(self.as_str()))
    }

    /// Route code derived from the id.
    pub fn route(&self) -> String {
        route_of(self.as_str())
    }
}
