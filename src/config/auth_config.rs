//! 인증 관련 설정 관리 모듈
//!
//! JWT 발급 설정, 카카오 OAuth 엔드포인트, 인증 프로바이더 열거형을 제공합니다.

use std::env;
use serde::{Deserialize, Serialize};

/// 카카오 OAuth 설정
///
/// 클라이언트가 카카오 SDK로 받은 액세스 토큰을 서버가 검증할 때 사용하는
/// 사용자 정보 API 주소를 관리합니다.
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    /// 카카오 사용자 정보 조회 API 주소
    ///
    /// 기본값: `https://kapi.kakao.com/v2/user/me`
    pub fn user_info_uri() -> String {
        env::var("KAKAO_USER_INFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string())
    }
}

/// JWT 설정을 관리하는 구조체
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간
/// - **프로덕션**: 액세스 토큰 1시간 이하
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하고 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간(시간 단위). 기본값: 24
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 소셜 로그인 프로바이더
///
/// 사용자 문서에는 `"KAKAO"`처럼 대문자 문자열로 저장됩니다.
/// (프로바이더, 외부 ID) 쌍이 외부 신원을 식별합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OAuthProvider {
    /// 카카오 로그인
    Kakao,
}

impl OAuthProvider {
    /// 문자열에서 OAuthProvider를 생성합니다. (대소문자 무관)
    ///
    /// ```rust,ignore
    /// assert_eq!(OAuthProvider::from_str("kakao")?, OAuthProvider::Kakao);
    /// assert!(OAuthProvider::from_str("google").is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "kakao" => Ok(OAuthProvider::Kakao),
            _ => Err(format!("Unsupported oauth provider: {}", s)),
        }
    }

    /// 저장 형식과 같은 대문자 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Kakao => "KAKAO",
        }
    }
}
