//! # 카카오 사용자 정보 모델
//!
//! `GET https://kapi.kakao.com/v2/user/me` 응답에서 서버가 쓰는 부분만 역직렬화합니다.
//!
//! ```json
//! {
//!   "id": 123456789,
//!   "connected_at": "2024-04-01T09:00:00Z",
//!   "kakao_account": { "profile": { "nickname": "홍길동" } }
//! }
//! ```
//!
//! 닉네임은 카카오 프로필이 아닌 `어댜{id}` 기본값을 쓰므로 `id`만 필수입니다.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct KakaoUserInfo {
    /// 카카오 회원번호 (앱별 고유)
    pub id: i64,
    #[serde(default)]
    pub connected_at: Option<String>,
}

impl KakaoUserInfo {
    /// 사용자 문서의 `oauth_id`로 저장되는 문자열
    pub fn oauth_id(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_me_response() {
        let body = r#"{
            "id": 3141592653,
            "connected_at": "2024-04-01T09:00:00Z",
            "kakao_account": { "profile_nickname_needs_agreement": false }
        }"#;

        let info: KakaoUserInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.id, 3141592653);
        assert_eq!(info.oauth_id(), "3141592653");
        assert_eq!(info.connected_at.as_deref(), Some("2024-04-01T09:00:00Z"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_str::<KakaoUserInfo>(r#"{"connected_at": "x"}"#).is_err());
    }
}
