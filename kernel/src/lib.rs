pub mod face;
pub mod model;
pub mod repository;
