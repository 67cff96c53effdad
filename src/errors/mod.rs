//! 에러 모듈
//!
//! [`errors`] 하위 모듈의 타입들을 `crate::errors` 경로로 다시 내보냅니다.

pub mod errors;

pub use errors::*;
