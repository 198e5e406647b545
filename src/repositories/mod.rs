pub mod google_places_repo;
pub mod places_repo;
