pub mod coordinate;
pub mod errors;
pub mod location;

pub use coordinate::{distance_km, Coordinate};
pub use errors::DomainError;
pub use location::{Location, NewLocation};
