pub mod place_repo;

pub use place_repo::*;
