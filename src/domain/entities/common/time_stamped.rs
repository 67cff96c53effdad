//! 생성/수정 시각 값 객체
//!
//! 상속 대신 각 엔티티가 `time_stamped` 필드로 이 값을 포함합니다.
//! (JPA의 `@MappedSuperclass` + `@EntityListeners` 조합에 해당)

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeStamped {
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl TimeStamped {
    /// 현재 시각으로 생성/수정 시간을 채웁니다.
    pub fn now() -> Self {
        let now = DateTime::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// 수정 시간을 현재 시각으로 갱신합니다.
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

impl Default for TimeStamped {
    fn default() -> Self {
        Self::now()
    }
}
