//! Places Entity Module

pub mod place;

pub use place::Place;
