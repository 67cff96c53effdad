//! 공통 DTO

pub mod pagination;

pub use pagination::{Page, PageRequest, MAX_PAGE_SIZE};
