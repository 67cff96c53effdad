//! # OAuth 통합 모델
//!
//! 소셜 로그인 프로바이더 API 응답 모델입니다.
//! 현재는 카카오만 지원하며, 프로바이더가 늘어나면 `<provider>_oauth_model` 모듈을 추가합니다.

pub mod kakao_oauth_model;
