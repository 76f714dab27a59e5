mod location;
pub mod proximity;

pub use location::mapper;
pub use location::LocationService;
