//! Review Entity Implementation
//!
//! 리뷰는 특정 날짜에 장소를 방문해 남긴 상태 기록입니다.
//! 장소의 "현재 상태"는 [`Review::latest`]가 고른 리뷰의 `place_status`입니다.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::domain::entities::common::TimeStamped;
use crate::errors::AppError;
use super::{PlaceStatus, ReviewImage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: i64,
    /// 방문 날짜 (`YYYY-MM-DD` 문자열로 저장, 연도는 0000..=9999)
    pub review_date: NaiveDate,
    pub place_status: PlaceStatus,
    pub content: String,
    /// 작성자 ID
    pub user_id: i64,
    pub place_id: i64,
    #[serde(default)]
    pub images: Vec<ReviewImage>,
    pub time_stamped: TimeStamped,
}

impl Review {
    pub fn new(
        id: i64,
        review_date: NaiveDate,
        place_status: PlaceStatus,
        content: String,
        user_id: i64,
        place_id: i64,
    ) -> Self {
        Self {
            id,
            review_date,
            place_status,
            content,
            user_id,
            place_id,
            images: Vec::new(),
            time_stamped: TimeStamped::now(),
        }
    }

    /// 저장 전에 방문 날짜가 4자리 연도인지 확인합니다.
    ///
    /// 저장소는 `review_date` 문자열을 사전순으로 정렬해 최근 리뷰를 고릅니다.
    /// `+10000-01-01`이나 `-0001-01-01`처럼 부호가 붙은 연도는 이 순서를 깨므로 거부합니다.
    pub fn validate_review_date(&self) -> Result<(), AppError> {
        if (0..=9999).contains(&self.review_date.year()) {
            Ok(())
        } else {
            Err(AppError::ValidationError(
                format!("리뷰 날짜는 0000년부터 9999년 사이여야 합니다: {}", self.review_date)
            ))
        }
    }

    /// 이미지를 이 리뷰에 등록합니다.
    ///
    /// 같은 ID의 이미지가 이미 있으면 아무 것도 하지 않고 `false`를 반환합니다.
    /// 등록된 이미지의 `review_id`는 항상 이 리뷰의 ID입니다.
    pub fn add_image(&mut self, mut image: ReviewImage) -> bool {
        if self.images.iter().any(|existing| existing.id == image.id) {
            return false;
        }

        image.review_id = Some(self.id);
        self.images.push(image);
        true
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.images.iter().map(|image| image.image_url.clone()).collect()
    }

    /// 가장 최근 리뷰를 고릅니다.
    ///
    /// `review_date`가 가장 늦은 리뷰, 같은 날짜라면 ID가 큰(나중에 작성된) 리뷰입니다.
    /// 리뷰가 없으면 `None`.
    pub fn latest<'a, I>(reviews: I) -> Option<&'a Review>
    where
        I: IntoIterator<Item = &'a Review>,
    {
        reviews
            .into_iter()
            .max_by_key(|review| (review.review_date, review.id))
    }
}
