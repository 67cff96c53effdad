//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 도메인별로 저장소 포트(trait)와 MongoDB 구현을 함께 둡니다.
//! MongoDB 구현은 `#[repository]` 싱글톤이고, 서비스는 `Arc<dyn XxxStore>`만 받으므로
//! 테스트에서는 메모리 구현으로 바꿔 끼울 수 있습니다.
//!
//! | 포트 | MongoDB 구현 | 컬렉션 |
//! |------|--------------|--------|
//! | [`UserStore`](users::UserStore) | [`UserRepository`](users::UserRepository) | `users` |
//! | [`PlaceStore`](places::PlaceStore) | [`PlaceRepository`](places::PlaceRepository) | `places` |
//! | [`ReviewStore`](reviews::ReviewStore) | [`ReviewRepository`](reviews::ReviewRepository) | `reviews` |
//! | [`BookmarkStore`](bookmarks::BookmarkStore) | [`BookmarkRepository`](bookmarks::BookmarkRepository) | `bookmarks` |
//! | [`RecommendationStore`](recommendations::RecommendationStore) | [`RecommendationRepository`](recommendations::RecommendationRepository) | `recommendations` |
//! | [`AddressStore`](address::AddressStore) | [`AddressRepository`](address::AddressRepository) | `address_depth1`, `address_depth2` |
//! | - | [`CounterRepository`](counters::CounterRepository) | `counters` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//! use crate::repositories::{self, users::UserStore};
//!
//! ServiceLocator::set(database.clone());
//! repositories::register_stores();
//!
//! let user_store = ServiceLocator::get::<dyn UserStore>();
//! let user = user_store.get_user_by_id(1).await?;
//! ```

pub mod counters;
pub mod users;
pub mod places;
pub mod reviews;
pub mod bookmarks;
pub mod recommendations;
pub mod address;

#[cfg(test)]
pub(crate) mod in_memory;

use crate::core::registry::ServiceLocator;
use self::{
    address::{AddressRepository, AddressStore},
    bookmarks::{BookmarkRepository, BookmarkStore},
    places::{PlaceRepository, PlaceStore},
    recommendations::{RecommendationRepository, RecommendationStore},
    reviews::{ReviewRepository, ReviewStore},
    users::{UserRepository, UserStore},
};

/// 저장소 포트를 MongoDB 리포지토리 싱글톤에 바인딩합니다.
///
/// `ServiceLocator::set(Arc<Database>)` 이후, 서비스 인스턴스를 만들기 전에 호출해야 합니다.
pub fn register_stores() {
    ServiceLocator::set::<dyn UserStore>(UserRepository::instance());
    ServiceLocator::set::<dyn PlaceStore>(PlaceRepository::instance());
    ServiceLocator::set::<dyn ReviewStore>(ReviewRepository::instance());
    ServiceLocator::set::<dyn BookmarkStore>(BookmarkRepository::instance());
    ServiceLocator::set::<dyn RecommendationStore>(RecommendationRepository::instance());
    ServiceLocator::set::<dyn AddressStore>(AddressRepository::instance());
}
