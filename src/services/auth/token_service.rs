//! JWT 액세스 토큰 발급 서비스
//!
//! 로그인에 성공한 사용자 ID로 HMAC-SHA256 서명 액세스 토큰을 발급합니다.
//! 리프레시 토큰, 토큰 저장소는 다루지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    domain::models::token::AccessTokenClaims,
    errors::AppError,
};

/// 액세스 토큰 발급 포트
pub trait AccessTokenIssuer: Send + Sync {
    fn create_access_token(&self, user_id: i64) -> Result<String, AppError>;
}

/// 서명 키와 만료 시간
///
/// 기본값은 `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 환경 변수에서 읽습니다.
pub struct JwtSettings {
    secret: String,
    expiration_hours: i64,
}

impl JwtSettings {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self { secret, expiration_hours }
    }
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }
}

/// JWT 토큰 서비스
///
/// `TokenService::instance()`는 환경 설정의 키를 씁니다.
#[service(name = "token")]
pub struct TokenService {
    settings: JwtSettings,
}

impl TokenService {
    /// 레지스트리를 거치지 않고 지정한 키로 생성합니다.
    pub fn with_secret(secret: String, expiration_hours: i64) -> Self {
        Self { settings: JwtSettings::new(secret, expiration_hours) }
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> Result<AccessTokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.settings.secret.as_ref());
        let validation = Validation::default();

        decode::<AccessTokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                },
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e))
            })
    }

    /// 액세스 토큰으로부터 사용자 ID 추출
    pub fn extract_user_id(&self, token: &str) -> Result<i64, AppError> {
        let claims = self.verify_token(token)?;
        claims.sub
            .parse::<i64>()
            .map_err(|_| AppError::AuthenticationError("토큰의 사용자 ID 형식이 잘못되었습니다".to_string()))
    }
}

impl AccessTokenIssuer for TokenService {
    fn create_access_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.settings.expiration_hours);

        let claims = AccessTokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.settings.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> TokenService {
        TokenService::with_secret("test-secret-for-unit-tests".to_string(), 1)
    }

    #[test]
    fn test_access_token_is_bound_to_user_id() {
        let manager = manager();
        let token = manager.create_access_token(42).unwrap();

        let claims = manager.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(manager.extract_user_id(&token).unwrap(), 42);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = TokenService::with_secret("other-secret".to_string(), 1)
            .create_access_token(1)
            .unwrap();

        let result = manager().verify_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // 기본 leeway(60초)보다 충분히 과거
        let token = TokenService::with_secret("test-secret-for-unit-tests".to_string(), -2)
            .create_access_token(1)
            .unwrap();

        let result = manager().verify_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert!(manager().verify_token("not-a-jwt").is_err());
    }
}
