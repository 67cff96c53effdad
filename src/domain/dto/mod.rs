//! # Data Transfer Objects
//!
//! 서비스 경계에서 주고받는 값들입니다.
//!
//! ```text
//! dto/
//! ├── common/      - 페이지 요청/결과
//! └── users/
//!     └── response/ - 로그인, 내 정보, 내 북마크, 내 리뷰 응답
//! ```

pub mod common;
pub mod users;
