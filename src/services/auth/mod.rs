//! 인증 협력 서비스 모듈
//!
//! 로그인 흐름에서 [`UserService`](crate::services::users::UserService)가 의존하는 두 포트와 구현입니다.
//!
//! | 포트 | 구현 | 역할 |
//! |------|------|------|
//! | [`SocialIdentityResolver`] | [`KakaoAuthService`] | 소셜 토큰 → 외부 사용자 ID |
//! | [`AccessTokenIssuer`] | [`TokenService`] | 사용자 ID → JWT 액세스 토큰 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AccessTokenIssuer, KakaoAuthService, TokenService};
//!
//! let oauth_id = KakaoAuthService::instance().get_oauth_id(&kakao_access_token).await?;
//! let token = TokenService::instance().create_access_token(user.id)?;
//! ```

pub mod token_service;
pub mod social_service;

pub use token_service::*;
pub use social_service::*;

use crate::core::registry::ServiceLocator;

/// 인증 포트를 카카오/JWT 서비스 싱글톤에 바인딩합니다.
pub fn register_auth_ports() {
    ServiceLocator::set::<dyn SocialIdentityResolver>(KakaoAuthService::instance());
    ServiceLocator::set::<dyn AccessTokenIssuer>(TokenService::instance());
}
