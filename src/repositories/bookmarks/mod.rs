pub mod bookmark_repo;

pub use bookmark_repo::*;
