//! GTFS `stops.txt` catalog loader.
//!
//! Reads the subset of columns the picker needs (`stop_id`, `stop_name`,
//! `stop_lat`, `stop_lon`) and tags every record with the caller's transit
//! kind, since subway and bus stops ship as separate GTFS bundles. Rows with
//! missing or unparseable coordinates are skipped rather than failing the
//! load; only file-level problems surface as errors.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use geo::Point;
use serde::Deserialize;
use tracing::debug;

use crate::models::{StopRecord, TransitKind};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open stops file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stops file: {0}")]
    Csv(#[from] csv::Error),
}

/// Raw stops.txt row. Coordinates stay strings here so a blank or junk cell
/// skips one row instead of failing the whole file.
#[derive(Debug, Deserialize)]
struct RawStop {
    stop_id: String,
    #[serde(default)]
    stop_name: String,
    #[serde(default)]
    stop_lat: String,
    #[serde(default)]
    stop_lon: String,
}

/// Load stop records from a GTFS `stops.txt` file.
pub fn load_stops(path: impl AsRef<Path>, kind: TransitKind) -> Result<Vec<StopRecord>, CatalogError> {
    read_stops(File::open(path)?, kind)
}

/// Parse stop records from any `stops.txt`-shaped byte stream.
pub fn read_stops<R: Read>(reader: R, kind: TransitKind) -> Result<Vec<StopRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut stops = Vec::new();
    for row in csv_reader.deserialize() {
        let raw: RawStop = row?;
        if raw.stop_id.is_empty() {
            continue;
        }
        let (Ok(lat), Ok(lon)) = (raw.stop_lat.parse::<f64>(), raw.stop_lon.parse::<f64>())
        else {
            debug!(stop_id = %raw.stop_id, "skipping stop without usable coordinates");
            continue;
        };
        stops.push(StopRecord::new(
            raw.stop_id,
            raw.stop_name,
            Point::new(lon, lat),
            kind,
        ));
    }

    Ok(stops)
}
