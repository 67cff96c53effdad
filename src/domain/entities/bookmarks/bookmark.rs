use serde::{Deserialize, Serialize};
use crate::domain::entities::common::TimeStamped;

/// 북마크 상태
///
/// `TRUE`인 북마크만 "내 북마크" 목록에 나옵니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookmarkStatus {
    #[serde(rename = "TRUE")]
    True,
    #[serde(rename = "FALSE")]
    False,
}

impl BookmarkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkStatus::True => "TRUE",
            BookmarkStatus::False => "FALSE",
        }
    }
}

/// 사용자-장소 북마크 (조인 엔티티)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "_id")]
    pub id: i64,
    pub user_id: i64,
    pub place_id: i64,
    pub status: BookmarkStatus,
    pub time_stamped: TimeStamped,
}

impl Bookmark {
    pub fn new(id: i64, user_id: i64, place_id: i64, status: BookmarkStatus) -> Self {
        Self {
            id,
            user_id,
            place_id,
            status,
            time_stamped: TimeStamped::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BookmarkStatus::True
    }
}
