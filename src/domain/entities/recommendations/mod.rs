//! Recommendations Entity Module

pub mod recommendation;

pub use recommendation::{Recommendation, RecommendationStatus};
