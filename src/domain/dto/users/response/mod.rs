//! 사용자 응답 DTO 모듈
//!
//! [`UserService`](crate::services::users::UserService)가 돌려주는 값들입니다.
//! 민감 정보(외부 OAuth ID 등)는 응답에 포함하지 않습니다.

pub mod user_response;
pub mod user_activity_response;

pub use user_response::*;
pub use user_activity_response::*;
