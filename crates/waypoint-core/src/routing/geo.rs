//! Great-circle distance.

use crate::models::Coordinates;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points, rounded to whole meters.
pub fn great_circle_meters(from: Coordinates, to: Coordinates) -> u64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    (EARTH_RADIUS_M * c).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let paris = Coordinates::new(48.8566, 2.3522);
        assert_eq!(great_circle_meters(paris, paris), 0);
    }

    #[test]
    fn test_known_distance() {
        // Paris to Lyon is roughly 392 km as the crow flies
        let paris = Coordinates::new(48.8566, 2.3522);
        let lyon = Coordinates::new(45.7640, 4.8357);
        let meters = great_circle_meters(paris, lyon);
        assert!(
            (385_000..400_000).contains(&meters),
            "Paris to Lyon should be ~392km, got {meters}"
        );
    }

    #[test]
    fn test_symmetric_and_antipodal() {
        let lisbon = Coordinates::new(38.7223, -9.1393);
        let new_york = Coordinates::new(40.7128, -74.0060);
        assert_eq!(
            great_circle_meters(lisbon, new_york),
            great_circle_meters(new_york, lisbon)
        );

        let north = Coordinates::new(90.0, 0.0);
        let south = Coordinates::new(-90.0, 0.0);
        let half_circumference = (std::f64::consts::PI * EARTH_RADIUS_M).round() as u64;
        assert_eq!(great_circle_meters(north, south), half_circumference);
    }
}
