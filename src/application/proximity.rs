//! Ranking and filtering of stored locations by distance to a reference
//! coordinate.
//!
//! Every query is a linear scan over one in-memory snapshot. Ties on
//! distance always resolve to the location that appears first in the
//! snapshot, so results are reproducible for a given storage order.

use crate::domain::{distance_km, Coordinate, Location};

/// A location paired with its distance from the query reference. Lives only
/// for the duration of one query.
#[derive(Debug, Clone, Copy)]
pub struct DistanceResult<'a> {
    pub location: &'a Location,
    pub distance_km: f64,
}

pub fn with_distances(
    all: &[Location],
    reference: Coordinate,
) -> impl Iterator<Item = DistanceResult<'_>> + '_ {
    all.iter().map(move |location| DistanceResult {
        location,
        distance_km: distance_km(location.coordinate(), reference),
    })
}

/// The location closest to `reference`, or `None` when `all` is empty.
///
/// Only a strictly smaller distance replaces the current best, so the
/// earliest of several equidistant locations wins.
pub fn nearest_one(all: &[Location], reference: Coordinate) -> Option<&Location> {
    let mut best: Option<DistanceResult<'_>> = None;

    for candidate in with_distances(all, reference) {
        let is_closer = best
            .as_ref()
            .map_or(true, |current| candidate.distance_km < current.distance_km);
        if is_closer {
            best = Some(candidate);
        }
    }

    best.map(|result| result.location)
}

/// Every location at most `threshold_km` away, nearest first.
///
/// The boundary is inclusive. Equal distances keep snapshot order because
/// `sort_by` is stable.
pub fn nearest_within(
    all: &[Location],
    reference: Coordinate,
    threshold_km: f64,
) -> Vec<&Location> {
    let mut matches: Vec<DistanceResult<'_>> = with_distances(all, reference)
        .filter(|result| result.distance_km <= threshold_km)
        .collect();

    matches.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));

    matches.into_iter().map(|result| result.location).collect()
}
