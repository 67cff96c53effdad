use serde::{Deserialize, Serialize};
use crate::domain::entities::common::TimeStamped;

/// 리뷰 이미지
///
/// 리뷰 문서 안에 포함되어 저장되며, 소유 리뷰는 [`Review::add_image`]로만 지정됩니다.
///
/// [`Review::add_image`]: super::Review::add_image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewImage {
    pub id: i64,
    pub image_url: String,
    /// 소유 리뷰 ID. 등록 전에는 `None`
    pub review_id: Option<i64>,
    pub time_stamped: TimeStamped,
}

impl ReviewImage {
    pub fn new(id: i64, image_url: String) -> Self {
        Self {
            id,
            image_url,
            review_id: None,
            time_stamped: TimeStamped::now(),
        }
    }
}
