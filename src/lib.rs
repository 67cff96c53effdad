//! 어댜(Eodya) 백엔드 코어
//!
//! 벚꽃 명소 리뷰/북마크 서비스의 사용자 도메인입니다.
//! 카카오 소셜 로그인, 닉네임 관리, 내 북마크와 내 리뷰 조회를 제공하며
//! 장소의 현재 개화 상태는 가장 최근 리뷰에서 계산합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← #[service] 싱글톤 (UserService, AddressService)
//! └─────────────────┘
//!          │  Arc<dyn Store> (ServiceLocator 바인딩)
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────┐
//! │  Repositories   │     │ Kakao API / JWT 발급 │ ← #[repository] / #[service]
//! └─────────────────┘     └──────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 유니크 인덱스, counters 시퀀스
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use eodya_api::core::registry::ServiceLocator;
//! use eodya_api::db::Database;
//! use eodya_api::{repositories, services};
//! use eodya_api::services::users::UserService;
//!
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! repositories::register_stores();
//! services::auth::register_auth_ports();
//!
//! let login = UserService::instance().login(&kakao_access_token).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
