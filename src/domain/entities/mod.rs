//! # Domain Entities Module
//!
//! 어댜 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 엔티티 관계
//!
//! ```text
//! AddressDepth1 ──1:N── AddressDepth2 ──1:N── Place ──1:N── Review ──1:N── ReviewImage
//!                                               │              │           (리뷰 문서에 포함)
//!                                               │              │
//! User ──1:N── Place     User ──1:N── Review    │              │
//!   │                                           │
//!   ├──1:N── Bookmark ──────N:1─────────────────┤
//!   └──1:N── Recommendation ──N:1───────────────┘
//! ```
//!
//! ## MongoDB 매핑
//!
//! | 엔티티 | 컬렉션 | 비고 |
//! |--------|--------|------|
//! | [`User`](users::User) | `users` | nickname, (oauth_provider, oauth_id) 유니크 |
//! | [`Place`](places::Place) | `places` | |
//! | [`Review`](reviews::Review) | `reviews` | 이미지 목록 포함 |
//! | [`Bookmark`](bookmarks::Bookmark) | `bookmarks` | |
//! | [`Recommendation`](recommendations::Recommendation) | `recommendations` | (user_id, place_id) 유니크 |
//! | [`AddressDepth1`](address::AddressDepth1) | `address_depth1` | 참조 데이터 |
//! | [`AddressDepth2`](address::AddressDepth2) | `address_depth2` | 참조 데이터 |
//!
//! 모든 엔티티는 `counters` 컬렉션에서 발급한 `i64` `_id`와
//! [`TimeStamped`](common::TimeStamped) 값을 가집니다.
//! 관계는 JPA 연관 매핑 대신 ID 필드로 표현합니다.

pub mod common;
pub mod address;
pub mod users;
pub mod places;
pub mod reviews;
pub mod bookmarks;
pub mod recommendations;
