//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `#[service]` 싱글톤이며, 저장소와 외부 연동을 트레이트 객체(`Arc<dyn ...>`)로 주입받습니다.
//! 테스트에서는 `with_stores` 같은 생성자로 메모리 저장소와 가짜 리졸버를 넣어 같은 로직을 검증합니다.
//!
//! - [`users`] - 로그인, 닉네임 변경, 내 정보, 내 북마크/리뷰
//! - [`auth`] - 소셜 신원 확인, 액세스 토큰 발급
//! - [`address`] - 주소 기준 데이터 조회와 시드
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{address::AddressService, users::UserService};
//!
//! let address_service = AddressService::instance();
//! address_service.seed_default_regions().await?;
//! ```

pub mod users;
pub mod auth;
pub mod address;
