//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities     - 영속 도메인 객체 (User, Place, Review, Bookmark, Address)
//! ├── DTOs         - 페이지 요청과 서비스 응답 값
//! └── Models       - 외부 시스템 통합 모델 (JWT 클레임, 카카오 응답)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@Embeddable` | [`TimeStamped`](entities::common::TimeStamped) | 값 객체 표현 |
//! | `Pageable` / `Slice` | [`PageRequest`](dto::common::PageRequest) / [`Page`](dto::common::Page) | 페이지네이션 |
//! | `@Valid` | `validator` | 데이터 유효성 검사 |

pub mod entities;
pub mod dto;
pub mod models;
