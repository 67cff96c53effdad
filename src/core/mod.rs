//! # Core Framework Module
//!
//! `singleton_macro`의 `#[service]` / `#[repository]`가 생성하는 코드는
//! `crate::core::registry`의 [`ServiceLocator`](registry::ServiceLocator)와 등록 타입을 사용합니다.
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Service` | `#[service]` 매크로 |
//! | `@Repository` | `#[repository]` 매크로 |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | `Arc<T>` 필드 자동 주입 |
//!
//! ## 저장소 포트
//!
//! 서비스는 `Arc<dyn UserStore>`처럼 트레이트 객체 필드를 가집니다.
//! 운영 환경에서는 [`repositories::register_stores`](crate::repositories::register_stores)가
//! 각 포트를 MongoDB 리포지토리 싱글톤에 바인딩하고, 테스트는 메모리 저장소를 직접 넣어 생성합니다.

pub mod registry;

pub use registry::*;
