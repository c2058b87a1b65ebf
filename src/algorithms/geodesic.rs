//! Geodesic helpers on a spherical Earth
//!
//! Bearings are degrees clockwise from north and distances are meters.
//! Latitudes are clamped just inside the poles before use, and returned
//! longitudes are wrapped into (-180, 180].

use crate::core::{GeoPoint, EARTH_RADIUS_M, LATITUDE_EPSILON};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn clamp_latitude(lat_rad: f64) -> f64 {
    lat_rad.clamp(-FRAC_PI_2 + LATITUDE_EPSILON, FRAC_PI_2 - LATITUDE_EPSILON)
}

fn wrap_longitude(lon_rad: f64) -> f64 {
    let wrapped = (lon_rad + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

/// Point reached from `origin` after travelling `distance_m` along `bearing_deg`.
///
/// Latitude advances linearly with the angular distance and the longitude
/// change is corrected by the rhumb-line stretch factor.
pub fn forward_position(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let lat1 = clamp_latitude(origin.lat.to_radians());
    let lon1 = origin.lon.to_radians();
    let tc = (-bearing_deg).to_radians();
    let d = distance_m / EARTH_RADIUS_M;

    let lat2 = clamp_latitude(lat1 + d * tc.cos());

    let q = if (lat2 - lat1).abs() < LATITUDE_EPSILON {
        lat1.cos()
    } else {
        let dphi = ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln();
        (lat2 - lat1) / dphi
    };

    let dlon = -d * tc.sin() / q;
    let lon2 = wrap_longitude(lon1 + dlon);

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Point displaced from `origin` by `east_m` and `north_m` meters
pub fn local_offset(origin: GeoPoint, east_m: f64, north_m: f64) -> GeoPoint {
    let bearing = east_m.atan2(north_m).to_degrees();
    let distance = east_m.hypot(north_m);
    forward_position(origin, bearing, distance)
}

/// Haversine great-circle distance between two points (m)
pub fn distance_between(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (p2.lon - p1.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
