pub mod coordinate;
pub mod place;
pub mod resource;
