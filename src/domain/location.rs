use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// A validated location waiting to be stored. Timestamps are assigned per
/// batch by the caller that persists it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub coordinate: Coordinate,
}

impl NewLocation {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    pub fn into_location(self, id: i64, timestamp: DateTime<Utc>) -> Location {
        Location {
            id,
            name: self.name,
            lat: self.coordinate.latitude,
            lng: self.coordinate.longitude,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_reads_lat_and_lng() {
        let now = Utc::now();
        let location = NewLocation::new("Dock", Coordinate::new(54.35, 18.65)).into_location(7, now);

        assert_eq!(location.coordinate(), Coordinate::new(54.35, 18.65));
        assert_eq!(location.id, 7);
    }

    #[test]
    fn into_location_shares_one_timestamp() {
        let now = Utc::now();
        let location = NewLocation::new("Dock", Coordinate::new(0.0, 0.0)).into_location(1, now);

        assert_eq!(location.created_at, now);
        assert_eq!(location.updated_at, now);
    }

    #[test]
    fn location_deserialization_from_json() {
        let json = r#"{
            "id": 3,
            "name": "Lokalizacja 2",
            "lat": 42.03452,
            "lng": 31.3128,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let location: Location = serde_json::from_str(json).unwrap();

        assert_eq!(location.name, "Lokalizacja 2");
        assert_eq!(location.coordinate(), Coordinate::new(42.03452, 31.3128));
        assert_eq!(location.created_at, location.updated_at);
    }
}
