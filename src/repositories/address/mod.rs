pub mod address_repo;

pub use address_repo::*;
