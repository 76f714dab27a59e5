mod location_repository;
mod traits;

pub use location_repository::LocationRepositoryImpl;
pub use traits::LocationRepository;
