use serde::{Deserialize, Serialize};
use crate::domain::entities::common::TimeStamped;

/// 장소 엔티티
///
/// 장소의 현재 상태는 저장하지 않고, 가장 최근 리뷰의 `place_status`에서 계산합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    /// 장소를 등록한 사용자 ID
    pub user_id: i64,
    /// 2단계 주소 ID
    pub address_depth2_id: i64,
    pub time_stamped: TimeStamped,
}

impl Place {
    pub fn new(id: i64, name: String, user_id: i64, address_depth2_id: i64) -> Self {
        Self {
            id,
            name,
            user_id,
            address_depth2_id,
            time_stamped: TimeStamped::now(),
        }
    }
}
