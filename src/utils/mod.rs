pub mod stops;
pub mod summary;
