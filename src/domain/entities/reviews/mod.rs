//! Reviews Entity Module
//!
//! 리뷰와 리뷰가 소유하는 이미지, 리뷰에 기록되는 장소 상태를 정의합니다.

pub mod place_status;
pub mod review;
pub mod review_image;

pub use place_status::PlaceStatus;
pub use review::Review;
pub use review_image::ReviewImage;
