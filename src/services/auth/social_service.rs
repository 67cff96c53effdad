//! 소셜 로그인 신원 확인 서비스
//!
//! 클라이언트가 소셜 SDK로 받아 온 액세스 토큰을 프로바이더 API에 보내
//! 외부 사용자 ID를 확인합니다. 인가 코드 교환 플로우는 다루지 않습니다.
//!
//! ```text
//! Client ──(kakao access token)──▶ UserService::login
//!                                      │
//!                                      ▼
//!                           KakaoAuthService::get_oauth_id
//!                                      │ GET /v2/user/me (Bearer)
//!                                      ▼
//!                              kapi.kakao.com ──▶ { "id": 123 }
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use singleton_macro::service;
use crate::{
    config::{KakaoOAuthConfig, OAuthProvider},
    domain::models::oauth::kakao_oauth_model::KakaoUserInfo,
    errors::AppError,
};

/// 외부 신원 확인 포트
#[async_trait]
pub trait SocialIdentityResolver: Send + Sync {
    /// 이 리졸버가 확인하는 프로바이더
    fn provider(&self) -> OAuthProvider;

    /// 토큰을 외부 사용자 ID로 바꿉니다.
    ///
    /// 토큰이 유효하지 않거나 만료되었으면 `AuthenticationError`입니다.
    async fn get_oauth_id(&self, token: &str) -> Result<String, AppError>;
}

/// 카카오 사용자 정보 API 주소 (기본값은 `KAKAO_USER_INFO_URI` 설정)
pub struct KakaoUserInfoUri(String);

impl Default for KakaoUserInfoUri {
    fn default() -> Self {
        Self(KakaoOAuthConfig::user_info_uri())
    }
}

/// 카카오 사용자 정보 API 기반 리졸버
#[service(name = "kakaoauth")]
pub struct KakaoAuthService {
    client: reqwest::Client,
    user_info_uri: KakaoUserInfoUri,
}

impl KakaoAuthService {
    /// 레지스트리를 거치지 않고 지정한 API 주소로 생성합니다.
    pub fn with_user_info_uri(user_info_uri: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_info_uri: KakaoUserInfoUri(user_info_uri),
        }
    }

    async fn get_user_info(&self, access_token: &str) -> Result<KakaoUserInfo, AppError> {
        let response = self.client
            .get(&self.user_info_uri.0)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 사용자 정보 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &error_text));
        }

        response
            .json::<KakaoUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 사용자 정보 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl SocialIdentityResolver for KakaoAuthService {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Kakao
    }

    async fn get_oauth_id(&self, token: &str) -> Result<String, AppError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::AuthenticationError("소셜 토큰이 비어 있습니다".to_string()));
        }

        let user_info = self.get_user_info(token).await?;
        log::debug!("카카오 사용자 확인: {}", user_info.id);

        Ok(user_info.oauth_id())
    }
}

/// 401/400은 토큰 문제, 그 외 실패는 카카오 쪽 장애로 봅니다.
fn status_error(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => AppError::AuthenticationError(
            format!("유효하지 않은 카카오 토큰입니다: {}", body),
        ),
        _ => AppError::ExternalServiceError(format!(
            "카카오 사용자 정보 조회 실패 ({}): {}", status, body
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_status_error_classification() {
        assert_eq!(
            status_error(StatusCode::UNAUTHORIZED, "{\"code\":-401}").kind(),
            ErrorKind::Authentication
        );
        assert_eq!(
            status_error(StatusCode::BAD_REQUEST, "").kind(),
            ErrorKind::Authentication
        );
        assert_eq!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "").kind(),
            ErrorKind::Infrastructure
        );
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "").kind(),
            ErrorKind::Infrastructure
        );
    }

    #[tokio::test]
    async fn test_blank_token_is_rejected_without_request() {
        let service = KakaoAuthService::with_user_info_uri("http://127.0.0.1:9/never-called".to_string());

        let result = service.get_oauth_id("   ").await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
        assert_eq!(service.provider(), OAuthProvider::Kakao);
    }
}
