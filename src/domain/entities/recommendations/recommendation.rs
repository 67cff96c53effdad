use serde::{Deserialize, Serialize};
use crate::domain::entities::common::TimeStamped;

/// 추천 상태
///
/// 추천을 취소하면 문서를 지우지 않고 `FALSE`로 바꿉니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationStatus {
    #[serde(rename = "TRUE")]
    True,
    #[serde(rename = "FALSE")]
    False,
}

impl RecommendationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationStatus::True => "TRUE",
            RecommendationStatus::False => "FALSE",
        }
    }
}

/// 사용자-장소 추천 (조인 엔티티)
///
/// 사용자 한 명은 장소 하나에 추천 문서를 하나만 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "_id")]
    pub id: i64,
    pub user_id: i64,
    pub place_id: i64,
    pub status: RecommendationStatus,
    pub time_stamped: TimeStamped,
}

impl Recommendation {
    pub fn new(id: i64, user_id: i64, place_id: i64, status: RecommendationStatus) -> Self {
        Self {
            id,
            user_id,
            place_id,
            status,
            time_stamped: TimeStamped::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RecommendationStatus::True
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_document_shape() {
        let recommendation = Recommendation::new(3, 1, 7, RecommendationStatus::True);
        let document = mongodb::bson::to_document(&recommendation).unwrap();

        assert_eq!(document.get_i64("_id").unwrap(), 3);
        assert_eq!(document.get_i64("place_id").unwrap(), 7);
        assert_eq!(document.get_str("status").unwrap(), "TRUE");
        assert!(document.get_document("time_stamped").is_ok());
    }

    #[test]
    fn test_only_true_recommendation_is_active() {
        assert!(Recommendation::new(1, 1, 1, RecommendationStatus::True).is_active());
        assert!(!Recommendation::new(2, 1, 1, RecommendationStatus::False).is_active());
        assert_eq!(RecommendationStatus::False.as_str(), "FALSE");
    }
}
