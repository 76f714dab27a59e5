#[allow(dead_code, unused_imports)]
pub mod location_repo;

#[allow(dead_code, unused_imports)]
pub use location_repo::{FailingLocationRepo, MockLocationRepo};
