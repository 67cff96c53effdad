//! User Entity Implementation
//!
//! 소셜 로그인으로만 가입하는 어댜 사용자 모델입니다.

use serde::{Deserialize, Serialize};
use crate::config::OAuthProvider;
use crate::domain::entities::common::TimeStamped;

/// 기본 닉네임 접두사 (서비스 이름)
pub const SERVICE_NAME: &str = "어댜";

/// 사용자 엔티티
///
/// - `nickname`: 전체 사용자 사이에서 유니크 (`nickname_unique` 인덱스)
/// - `(oauth_provider, oauth_id)`: 외부 신원 식별자 (`oauth_identity_unique` 인덱스)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    /// 사용자 닉네임 (unique)
    pub nickname: String,
    /// 소셜 프로바이더가 발급한 사용자 식별자
    pub oauth_id: String,
    /// 소셜 프로바이더
    pub oauth_provider: OAuthProvider,
    pub time_stamped: TimeStamped,
}

impl User {
    /// 첫 로그인 사용자 생성
    ///
    /// 닉네임은 `어댜{id}` 형태로 채워지므로 ID를 먼저 발급받아야 합니다.
    pub fn new_oauth(id: i64, oauth_id: String, oauth_provider: OAuthProvider) -> Self {
        Self {
            id,
            nickname: Self::default_nickname(id),
            oauth_id,
            oauth_provider,
            time_stamped: TimeStamped::now(),
        }
    }

    pub fn default_nickname(id: i64) -> String {
        format!("{}{}", SERVICE_NAME, id)
    }

    /// 닉네임 변경. 유니크 검사는 서비스 계층의 몫입니다.
    pub fn update_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.time_stamped.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_oauth_user_gets_suffixed_nickname() {
        let user = User::new_oauth(42, "kakao-123".to_string(), OAuthProvider::Kakao);

        assert_eq!(user.nickname, "어댜42");
        assert_eq!(user.oauth_id, "kakao-123");
        assert_eq!(user.oauth_provider, OAuthProvider::Kakao);
    }

    #[test]
    fn test_update_nickname() {
        let mut user = User::new_oauth(1, "kakao-1".to_string(), OAuthProvider::Kakao);
        user.update_nickname("벚꽃헌터".to_string());

        assert_eq!(user.nickname, "벚꽃헌터");
        assert!(user.time_stamped.updated_at >= user.time_stamped.created_at);
    }

    #[test]
    fn test_user_document_shape() {
        let user = User::new_oauth(7, "kakao-7".to_string(), OAuthProvider::Kakao);
        let document = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(document.get_i64("_id").unwrap(), 7);
        assert_eq!(document.get_str("oauth_provider").unwrap(), "KAKAO");
        assert!(document.get_document("time_stamped").is_ok());
    }
}
