//! Great-circle distance between geographic coordinates.
//!
//! Distances use the spherical law of cosines and are reported in
//! kilometers. Nautical miles per degree of arc are converted to statute
//! miles and then to kilometers, so results match the historical
//! `degrees * 60 * 1.1515 * 1.609344` formulation exactly.

use serde::{Deserialize, Serialize};

/// Nautical miles in one degree of arc.
pub const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;
/// Statute miles in one nautical mile.
pub const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.1515;
/// Kilometers in one statute mile.
pub const KILOMETERS_PER_STATUTE_MILE: f64 = 1.609344;

/// A latitude/longitude pair in degrees.
///
/// Ranges are nominal (`[-90, 90]` and `[-180, 180]`) and not enforced;
/// out-of-range values still produce a finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_km_to(&self, other: &Coordinate) -> f64 {
        distance_km(*self, *other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Great-circle distance in kilometers between `a` and `b`.
///
/// Total over finite inputs: the cosine of the central angle is clamped to
/// `[-1, 1]` before `acos`, so rounding on identical or antipodal points
/// never yields NaN. Identical coordinates return exactly `0.0`.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let theta = a.longitude - b.longitude;
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let cos_central =
        lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * theta.to_radians().cos();
    let central_angle_deg = cos_central.clamp(-1.0, 1.0).acos().to_degrees();

    central_angle_deg
        * NAUTICAL_MILES_PER_DEGREE
        * STATUTE_MILES_PER_NAUTICAL_MILE
        * KILOMETERS_PER_STATUTE_MILE
}
