pub mod common;
pub mod location_dto;
pub mod validation;

pub use common::ErrorResponse;
pub use location_dto::*;
