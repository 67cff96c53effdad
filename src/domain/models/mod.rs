//! # Domain Models Module
//!
//! 저장되지 않는 외부 시스템 통합 모델을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: MongoDB 컬렉션에 저장되는 객체
//! - **정체성**: `i64` 식별자를 가짐
//!
//! ### Models (`./`)
//! - **외부 계약**: JWT 클레임, 카카오 API 응답처럼 형식이 밖에서 정해진 값
//! - **불변성**: 읽기 전용 값 객체
//!
//! ```text
//! models/
//! ├── oauth/
//! │   └── kakao_oauth_model/  - 카카오 사용자 정보 응답
//! └── token/                  - JWT 액세스 토큰 클레임
//! ```

pub mod oauth;
pub mod token;
