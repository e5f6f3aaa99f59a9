//! Distance calculations and display formatting.
//!
//! The picker works in miles end to end (its catalog and its users are both
//! US transit), so the haversine here uses the 3959-mile Earth radius and the
//! formatter switches to feet below a tenth of a mile.

use geo::Point;

use crate::models::StationGroup;

const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Distances shorter than this render in feet.
const FEET_CUTOFF_MILES: f64 = 0.1;
const FEET_PER_MILE: f64 = 5280.0;

/// Great-circle distance in miles between two points (haversine).
///
/// Symmetric, zero for identical points, monotonic in angular separation.
pub fn distance_miles(a: Point, b: Point) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lon = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

/// Render a distance for the stop list: feet (rounded to the nearest integer)
/// under a tenth of a mile, otherwise miles with one decimal place.
pub fn format_distance(miles: f64) -> String {
    if miles < FEET_CUTOFF_MILES {
        format!("{} ft", (miles * FEET_PER_MILE).round() as i64)
    } else {
        format!("{miles:.1} mi")
    }
}

/// Order stations for the picker list: ascending distance from `origin` when
/// the user's location is known, name order otherwise. The sort is stable, so
/// equidistant (or same-named) stations keep their input order.
pub fn sort_by_distance(stations: &mut [StationGroup], origin: Option<Point>) {
    match origin {
        Some(origin) => stations.sort_by(|a, b| {
            distance_miles(a.location, origin).total_cmp(&distance_miles(b.location, origin))
        }),
        None => stations.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }
}

/// Rough miles-per-degree of latitude, for coarse bounding-box prefilters.
pub(crate) const MILES_PER_DEGREE_APPROX: f64 = 69.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StationGroup, StopRecord, TransitKind};
    use approx::assert_relative_eq;

    fn station(name: &str, lat: f64, lon: f64) -> StationGroup {
        StationGroup::singleton(StopRecord::new(
            name,
            name,
            Point::new(lon, lat),
            TransitKind::Bus,
        ))
    }

    #[test]
    fn test_distance_zero_at_identity() {
        let p = Point::new(-73.944, 40.714);
        assert_eq!(distance_miles(p, p), 0.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);
        assert_relative_eq!(
            distance_miles(nyc, la),
            distance_miles(la, nyc),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_distance_known_value() {
        // NYC to LA is about 2,445 miles great-circle.
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);
        let dist = distance_miles(nyc, la);
        assert!((dist - 2445.0).abs() < 20.0, "got {dist}");
    }

    #[test]
    fn test_distance_monotonic_in_separation() {
        let origin = Point::new(-74.0, 40.7);
        let near = Point::new(-74.0, 40.71);
        let far = Point::new(-74.0, 40.75);
        assert!(distance_miles(origin, near) < distance_miles(origin, far));
    }

    #[test]
    fn test_format_distance_exact_strings() {
        assert_eq!(format_distance(0.05), "264 ft");
        assert_eq!(format_distance(0.1), "0.1 mi");
        assert_eq!(format_distance(2.34), "2.3 mi");
        assert_eq!(format_distance(0.0), "0 ft");
        assert_eq!(format_distance(0.099), "523 ft");
    }

    #[test]
    fn test_sort_with_origin_orders_by_distance() {
        let origin = Point::new(-73.944, 40.714);
        let mut stations = vec![
            station("far", 40.80, -73.90),
            station("near", 40.715, -73.944),
            station("mid", 40.73, -73.95),
        ];

        sort_by_distance(&mut stations, Some(origin));
        let names: Vec<&str> = stations.iter().map(|s| &*s.name).collect();
        assert_eq!(names, ["near", "mid", "far"]);
    }

    #[test]
    fn test_sort_without_origin_orders_by_name() {
        let mut stations = vec![
            station("bedford Av", 40.717, -73.956),
            station("Astor Pl", 40.730, -73.991),
            station("Canal St", 40.718, -74.000),
        ];

        sort_by_distance(&mut stations, None);
        let names: Vec<&str> = stations.iter().map(|s| &*s.name).collect();
        // Case-folded comparison: lowercase "bedford" sorts between the others.
        assert_eq!(names, ["Astor Pl", "bedford Av", "Canal St"]);
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let origin = Point::new(-74.0, 40.7);
        let mut stations = vec![
            station("first", 40.71, -74.0),
            station("second", 40.71, -74.0),
        ];

        sort_by_distance(&mut stations, Some(origin));
        assert_eq!(&*stations[0].name, "first");
        assert_eq!(&*stations[1].name, "second");
    }
}
