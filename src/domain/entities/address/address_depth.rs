//! 주소 계층 엔티티
//!
//! 시/도(1단계)와 구/군(2단계)으로 이루어진 정적 참조 데이터입니다.
//! 2단계 주소는 `address_depth1_id`로 상위 주소를 가리킵니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::common::TimeStamped;
use crate::errors::AppError;
use crate::utils::string_utils::validate_required_string;

/// 1단계 주소 (예: 서울시)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDepth1 {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    pub time_stamped: TimeStamped,
}

impl AddressDepth1 {
    /// 이름이 비어 있으면 ValidationError를 반환합니다.
    pub fn new(id: i64, name: &str) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: validate_required_string(name, "주소 이름")?,
            time_stamped: TimeStamped::now(),
        })
    }
}

/// 2단계 주소 (예: 강남구)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDepth2 {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    /// 상위 1단계 주소 ID
    pub address_depth1_id: i64,
    pub time_stamped: TimeStamped,
}

impl AddressDepth2 {
    pub fn new(id: i64, name: &str, depth1: &AddressDepth1) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: validate_required_string(name, "주소 이름")?,
            address_depth1_id: depth1.id,
            time_stamped: TimeStamped::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth2_points_to_parent() {
        let seoul = AddressDepth1::new(1, "서울시").unwrap();
        let gangnam = AddressDepth2::new(10, "강남구", &seoul).unwrap();

        assert_eq!(gangnam.address_depth1_id, seoul.id);
        assert_eq!(gangnam.name, "강남구");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert!(matches!(AddressDepth1::new(1, "   "), Err(AppError::ValidationError(_))));

        let seoul = AddressDepth1::new(1, "서울시").unwrap();
        assert!(AddressDepth2::new(2, "", &seoul).is_err());
    }
}
