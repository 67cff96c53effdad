//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::config::OAuthProvider;
//! use crate::domain::entities::users::User;
//!
//! let id = user_store.next_id().await?;
//! let user = User::new_oauth(id, kakao_id, OAuthProvider::Kakao);
//! assert_eq!(user.nickname, format!("어댜{}", id));
//! ```

pub mod user;

pub use user::{User, SERVICE_NAME};
