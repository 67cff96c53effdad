//! Address Entity Module

pub mod address_depth;

pub use address_depth::{AddressDepth1, AddressDepth2};
