#![allow(dead_code)]

use chrono::Utc;
use locations_api::domain::{Coordinate, Location, NewLocation};
use rand::seq::SliceRandom;
use rand::Rng;

/// Query point used across the proximity tests.
pub const REFERENCE: Coordinate = Coordinate::new(42.2312, 30.723);

pub const L1: &str = "Lokalizacja 1";
pub const L2: &str = "Lokalizacja 2";
pub const L3: &str = "Lokalizacja 3";

/// Three stored locations at roughly 2511 km (L1), 53 km (L2) and 2599 km
/// (L3) from [`REFERENCE`].
pub fn fixture_new_locations() -> Vec<NewLocation> {
    vec![
        NewLocation::new(L1, Coordinate::new(21.132312, 21.132312)),
        NewLocation::new(L2, Coordinate::new(42.03452, 31.3128)),
        NewLocation::new(L3, Coordinate::new(25.23161, 11.23161)),
    ]
}

pub fn fixture_locations() -> Vec<Location> {
    let now = Utc::now();
    fixture_new_locations()
        .into_iter()
        .zip(1..)
        .map(|(item, id)| item.into_location(id, now))
        .collect()
}

pub fn fixture_batch_json() -> serde_json::Value {
    serde_json::json!([
        {"name": L1, "lat": 21.132312, "lng": 21.132312},
        {"name": L2, "lat": 42.03452, "lng": 31.3128},
        {"name": L3, "lat": 25.23161, "lng": 11.23161}
    ])
}

const STREETS: &[&str] = &[
    "Dluga", "Mariacka", "Ogarna", "Piwna", "Szeroka", "Grobla", "Tkacka", "Chlebnicka",
];
const SUFFIXES: &[&str] = &["Street", "Avenue", "Lane", "Road", "Square"];

/// A random street-address-like location within nominal coordinate ranges.
pub fn random_new_location<R: Rng + ?Sized>(rng: &mut R) -> NewLocation {
    let street = STREETS.choose(rng).copied().unwrap_or("Main");
    let suffix = SUFFIXES.choose(rng).copied().unwrap_or("Street");
    let number: u16 = rng.gen_range(1..=250);

    NewLocation::new(
        format!("{number} {street} {suffix}"),
        Coordinate::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0)),
    )
}

pub fn random_new_locations(count: usize) -> Vec<NewLocation> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_new_location(&mut rng)).collect()
}
