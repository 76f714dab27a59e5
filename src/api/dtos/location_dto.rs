use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use super::validation::{collect, json_number, json_string, query_number, query_string};
use crate::domain::{Coordinate, NewLocation};
use crate::error::{AppError, AppResult};

pub const LOCATIONS_ADDED_MESSAGE: &str = "locations_have_been_added";

/// One item of an ingestion batch. Fields stay loosely typed until
/// validation so that every problem can be reported per field.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewLocationRequest {
    #[schema(value_type = String, example = "Lokalizacja 1")]
    pub name: Option<Value>,
    /// Latitude in degrees. Numeric strings are accepted.
    #[schema(value_type = f64, example = 21.132312)]
    pub lat: Option<Value>,
    /// Longitude in degrees. Numeric strings are accepted.
    #[schema(value_type = f64, example = 21.132312)]
    pub lng: Option<Value>,
}

impl NewLocationRequest {
    pub fn to_new_location(&self) -> Result<NewLocation, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = collect(&mut errors, "name", json_string(self.name.as_ref()));
        let lat = collect(&mut errors, "lat", json_number(self.lat.as_ref()));
        let lng = collect(&mut errors, "lng", json_number(self.lng.as_ref()));

        match (name, lat, lng) {
            (Some(name), Some(lat), Some(lng)) => Ok(NewLocation::new(name, Coordinate::new(lat, lng))),
            _ => Err(errors),
        }
    }
}

impl From<Value> for NewLocationRequest {
    /// Anything but an object carries none of the fields.
    fn from(item: Value) -> Self {
        match item {
            Value::Object(mut fields) => Self {
                name: fields.remove("name"),
                lat: fields.remove("lat"),
                lng: fields.remove("lng"),
            },
            _ => Self::default(),
        }
    }
}

impl Validate for NewLocationRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.to_new_location().map(|_| ())
    }
}

/// Request body of the add endpoint: a bare JSON array of items. Items are
/// reported under `data.{index}` when invalid, including items that are not
/// objects at all.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[schema(value_type = Vec<NewLocationRequest>)]
pub struct AddLocationsRequest(pub Vec<Value>);

impl AddLocationsRequest {
    /// Validates every item. Nothing is returned unless the whole batch is
    /// valid.
    pub fn into_new_locations(self) -> AppResult<Vec<NewLocation>> {
        let items = self.0;
        if items.is_empty() {
            let mut errors = ValidationErrors::new();
            errors.add("data", ValidationError::new("required"));
            return Err(errors.into());
        }

        let mut accepted = Vec::with_capacity(items.len());
        let mut rejected = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            match NewLocationRequest::from(item).to_new_location() {
                Ok(location) => accepted.push(location),
                Err(errors) => rejected.push((Some(format!("data.{index}")), errors)),
            }
        }

        if rejected.is_empty() {
            Ok(accepted)
        } else {
            Err(AppError::from_nested_validation(rejected))
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearestLocationQuery {
    /// Required, not used for ranking.
    pub name: Option<String>,
    #[param(value_type = f64)]
    pub lat: Option<String>,
    #[param(value_type = f64)]
    pub lng: Option<String>,
}

impl NearestLocationQuery {
    pub fn reference(&self) -> AppResult<Coordinate> {
        let mut errors = ValidationErrors::new();
        match collect_reference(
            &mut errors,
            self.name.as_deref(),
            self.lat.as_deref(),
            self.lng.as_deref(),
        ) {
            Some(reference) => Ok(reference),
            None => Err(errors.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearestWithinQuery {
    /// Required, not used for ranking.
    pub name: Option<String>,
    #[param(value_type = f64)]
    pub lat: Option<String>,
    #[param(value_type = f64)]
    pub lng: Option<String>,
    /// Maximum distance in kilometers, inclusive.
    #[param(value_type = f64)]
    pub threshold: Option<String>,
}

impl NearestWithinQuery {
    pub fn criteria(&self) -> AppResult<(Coordinate, f64)> {
        let mut errors = ValidationErrors::new();
        let reference = collect_reference(
            &mut errors,
            self.name.as_deref(),
            self.lat.as_deref(),
            self.lng.as_deref(),
        );
        let threshold = collect(
            &mut errors,
            "threshold",
            query_number(self.threshold.as_deref()),
        );

        match (reference, threshold) {
            (Some(reference), Some(threshold)) => Ok((reference, threshold)),
            _ => Err(errors.into()),
        }
    }
}

fn collect_reference(
    errors: &mut ValidationErrors,
    name: Option<&str>,
    lat: Option<&str>,
    lng: Option<&str>,
) -> Option<Coordinate> {
    let name = collect(errors, "name", query_string(name));
    let lat = collect(errors, "lat", query_number(lat));
    let lng = collect(errors, "lng", query_number(lng));

    match (name, lat, lng) {
        (Some(_), Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddLocationsResponse {
    #[schema(example = "locations_have_been_added")]
    pub message: String,
    pub count: u64,
}

impl AddLocationsResponse {
    pub fn added(count: u64) -> Self {
        Self {
            message: LOCATIONS_ADDED_MESSAGE.to_string(),
            count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NearestLocationResponse {
    pub data: LocationResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NearestLocationsResponse {
    pub data: Vec<LocationResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> AddLocationsRequest {
        serde_json::from_value(value).expect("request should deserialize")
    }

    fn fields(error: &AppError) -> Vec<&str> {
        error.issues().iter().map(|issue| issue.field.as_str()).collect()
    }

    #[test]
    fn valid_batch_converts_in_order() {
        let batch = request(json!([
            {"name": "Lokalizacja 1", "lat": 21.132312, "lng": 21.132312},
            {"name": "Lokalizacja 2", "lat": "42.03452", "lng": "31.3128"}
        ]));

        let locations = batch.into_new_locations().expect("batch should be valid");

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name, "Lokalizacja 1");
        assert_eq!(locations[1].coordinate, Coordinate::new(42.03452, 31.3128));
    }

    #[test]
    fn empty_batch_is_required() {
        let error = request(json!([])).into_new_locations().unwrap_err();

        assert_eq!(fields(&error), vec!["data"]);
        assert_eq!(error.issues()[0].message, "The data field is required.");
    }

    #[test]
    fn non_array_body_does_not_deserialize() {
        assert!(serde_json::from_value::<AddLocationsRequest>(json!({"data": []})).is_err());
    }

    #[test]
    fn empty_item_reports_every_field() {
        let error = request(json!([{"name": "", "lng": "", "lat": ""}]))
            .into_new_locations()
            .unwrap_err();

        assert_eq!(fields(&error), vec!["data.0.lat", "data.0.lng", "data.0.name"]);
        let details = error.validation_details().unwrap();
        assert_eq!(details["data.0.name"], vec!["The data.0.name field is required."]);
        assert_eq!(details["data.0.lat"], vec!["The data.0.lat field is required."]);
        assert_eq!(details["data.0.lng"], vec!["The data.0.lng field is required."]);
    }

    #[test]
    fn invalid_items_are_reported_by_index() {
        let error = request(json!([
            {"name": "ok", "lat": 1, "lng": 2},
            {"name": 5, "lat": "north", "lng": 2}
        ]))
        .into_new_locations()
        .unwrap_err();

        let details = error.validation_details().unwrap();
        assert_eq!(details["data.1.name"], vec!["The data.1.name must be a string."]);
        assert_eq!(details["data.1.lat"], vec!["The data.1.lat must be a number."]);
        assert_eq!(details.len(), 2);
    }

    #[test]
    fn non_object_items_report_missing_fields() {
        let error = request(json!([
            null,
            {"name": "ok", "lat": 1, "lng": 2},
            "x"
        ]))
        .into_new_locations()
        .unwrap_err();

        assert_eq!(
            fields(&error),
            vec![
                "data.0.lat",
                "data.0.lng",
                "data.0.name",
                "data.2.lat",
                "data.2.lng",
                "data.2.name"
            ]
        );
        assert!(error
            .issues()
            .iter()
            .all(|issue| issue.code == "required"));
    }

    #[test]
    fn item_validate_matches_conversion() {
        let item = NewLocationRequest {
            name: Some(json!("Dock")),
            lat: Some(json!(1.0)),
            lng: None,
        };

        let errors = item.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("lng"));
    }

    #[test]
    fn nearest_query_requires_name_and_numeric_coordinates() {
        let query = NearestLocationQuery {
            name: None,
            lat: Some("abc".to_string()),
            lng: Some("30.723".to_string()),
        };

        let error = query.reference().unwrap_err();

        let details = error.validation_details().unwrap();
        assert_eq!(details["name"], vec!["The name field is required."]);
        assert_eq!(details["lat"], vec!["The lat must be a number."]);
        assert!(!details.contains_key("lng"));
    }

    #[test]
    fn nearest_query_builds_reference() {
        let query = NearestLocationQuery {
            name: Some("Lokalizacja 4".to_string()),
            lat: Some("42.2312".to_string()),
            lng: Some("30.723".to_string()),
        };

        assert_eq!(query.reference().unwrap(), Coordinate::new(42.2312, 30.723));
    }

    #[test]
    fn within_query_validates_threshold_alongside_reference() {
        let query = NearestWithinQuery {
            name: Some("x".to_string()),
            lat: Some("1".to_string()),
            lng: None,
            threshold: Some("far".to_string()),
        };

        let error = query.criteria().unwrap_err();

        assert_eq!(fields(&error), vec!["lng", "threshold"]);
    }

    #[test]
    fn within_query_accepts_negative_threshold() {
        let query = NearestWithinQuery {
            name: Some("x".to_string()),
            lat: Some("1".to_string()),
            lng: Some("2".to_string()),
            threshold: Some("-5".to_string()),
        };

        let (_, threshold) = query.criteria().unwrap();

        assert_eq!(threshold, -5.0);
    }

    #[test]
    fn added_response_uses_fixed_message() {
        let body = serde_json::to_value(AddLocationsResponse::added(3)).unwrap();

        assert_eq!(body, json!({"message": "locations_have_been_added", "count": 3}));
    }
}
