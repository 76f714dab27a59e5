use crate::api::dtos::LocationResponse;
use crate::domain::Location;

pub fn map_location_to_response(location: Location) -> LocationResponse {
    LocationResponse {
        id: location.id,
        name: location.name,
        lat: location.lat,
        lng: location.lng,
        created_at: location.created_at,
        updated_at: location.updated_at,
    }
}

pub fn map_locations_to_response<'a, I>(locations: I) -> Vec<LocationResponse>
where
    I: IntoIterator<Item = &'a Location>,
{
    locations
        .into_iter()
        .cloned()
        .map(map_location_to_response)
        .collect()
}
