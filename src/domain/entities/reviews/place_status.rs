use serde::{Deserialize, Serialize};

/// 리뷰 작성 시점의 장소 상태
///
/// 저장 형식은 `"FULL_BLOOM"`처럼 대문자 스네이크 케이스입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceStatus {
    /// 만개
    FullBloom,
    /// 개화 중
    Blooming,
    /// 다음에 (이미 졌거나 아직 이름)
    NextTime,
}

impl PlaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceStatus::FullBloom => "FULL_BLOOM",
            PlaceStatus::Blooming => "BLOOMING",
            PlaceStatus::NextTime => "NEXT_TIME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_status_serialization_matches_as_str() {
        for status in [PlaceStatus::FullBloom, PlaceStatus::Blooming, PlaceStatus::NextTime] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
