//! 내 북마크 / 내 리뷰 목록 응답 DTO
//!
//! 두 목록 모두 항목마다 장소의 현재 상태(가장 최근 리뷰의 상태)를 함께 돌려줍니다.
//! 리뷰가 하나도 없는 장소의 상태는 `None`입니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::entities::places::Place;
use crate::domain::entities::reviews::{PlaceStatus, Review};

/// 북마크 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBookmarkDetail {
    pub place_id: i64,
    pub name: String,
    pub address_depth2_id: i64,
    /// 장소의 현재 상태
    pub place_status: Option<PlaceStatus>,
}

impl UserBookmarkDetail {
    pub fn new(place: Place, place_status: Option<PlaceStatus>) -> Self {
        Self {
            place_id: place.id,
            name: place.name,
            address_depth2_id: place.address_depth2_id,
            place_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMyBookmarkResponse {
    /// 활성 북마크 전체 수
    pub total: u64,
    pub bookmarks: Vec<UserBookmarkDetail>,
    pub has_next: bool,
}

impl UserMyBookmarkResponse {
    pub fn new(total: u64, bookmarks: Vec<UserBookmarkDetail>, has_next: bool) -> Self {
        Self { total, bookmarks, has_next }
    }
}

/// 리뷰 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReviewDetail {
    pub place_id: i64,
    pub place_name: String,
    pub review_id: i64,
    pub review_date: NaiveDate,
    pub content: String,
    pub image_urls: Vec<String>,
    /// 이 리뷰에 기록된 상태
    pub review_place_status: PlaceStatus,
    /// 장소의 현재 상태 (가장 최근 리뷰 기준)
    pub place_status: Option<PlaceStatus>,
}

impl UserReviewDetail {
    pub fn new(place: Place, review: Review, place_status: Option<PlaceStatus>) -> Self {
        let image_urls = review.image_urls();

        Self {
            place_id: place.id,
            place_name: place.name,
            review_id: review.id,
            review_date: review.review_date,
            content: review.content,
            image_urls,
            review_place_status: review.place_status,
            place_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMyReviewsResponse {
    /// 작성한 리뷰 전체 수
    pub total: u64,
    pub reviews: Vec<UserReviewDetail>,
    pub has_next: bool,
}

impl UserMyReviewsResponse {
    pub fn new(total: u64, reviews: Vec<UserReviewDetail>, has_next: bool) -> Self {
        Self { total, reviews, has_next }
    }
}
