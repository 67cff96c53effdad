//! 테스트용 메모리 저장소
//!
//! MongoDB 구현과 같은 계약을 지킵니다: `_id` 오름차순 정렬, 0부터 시작하는 페이지,
//! 유니크 인덱스 위반 시 같은 인덱스 이름의 `AppError::DuplicateKey`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use crate::{
    config::OAuthProvider,
    domain::{
        dto::common::{Page, PageRequest},
        entities::{
            address::{AddressDepth1, AddressDepth2},
            bookmarks::{Bookmark, BookmarkStatus},
            places::Place,
            reviews::Review,
            users::User,
        },
    },
    errors::AppError,
    repositories::{
        address::AddressStore,
        bookmarks::BookmarkStore,
        places::PlaceStore,
        reviews::ReviewStore,
        users::{NICKNAME_INDEX, OAUTH_IDENTITY_INDEX, UserStore},
    },
};

fn paginate<T: Clone>(mut items: Vec<T>, page: &PageRequest, id_of: fn(&T) -> i64) -> Page<T> {
    items.sort_by_key(id_of);
    let total = items.len() as u64;
    let content = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.size as usize)
        .collect();

    Page::new(content, total, page)
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    sequence: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// 서비스를 거치지 않고 사용자를 넣습니다. 시퀀스도 함께 맞춥니다.
    pub fn seed(&self, user: User) {
        self.sequence.fetch_max(user.id, Ordering::SeqCst);
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_oauth_id(
        &self,
        provider: OAuthProvider,
        oauth_id: &str,
    ) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap()
            .iter()
            .find(|u| u.oauth_provider == provider && u.oauth_id == oauth_id)
            .cloned())
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.nickname == nickname).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn next_id(&self) -> Result<i64, AppError> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.oauth_provider == user.oauth_provider && u.oauth_id == user.oauth_id) {
            return Err(AppError::DuplicateKey(OAUTH_IDENTITY_INDEX.to_string()));
        }
        if users.iter().any(|u| u.nickname == user.nickname) {
            return Err(AppError::DuplicateKey(NICKNAME_INDEX.to_string()));
        }

        users.push(user.clone());
        Ok(())
    }

    async fn update_nickname(&self, id: i64, nickname: &str) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.id != id && u.nickname == nickname) {
            return Err(AppError::DuplicateKey(NICKNAME_INDEX.to_string()));
        }

        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.update_nickname(nickname.to_string());
            user.clone()
        }))
    }
}

#[derive(Default)]
pub struct InMemoryPlaceStore {
    places: Mutex<Vec<Place>>,
}

impl InMemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, place: Place) {
        self.places.lock().unwrap().push(place);
    }
}

#[async_trait]
impl PlaceStore for InMemoryPlaceStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, AppError> {
        Ok(self.places.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryReviewStore {
    reviews: Mutex<Vec<Review>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, review: Review) {
        self.reviews.lock().unwrap().push(review);
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn find_by_user_id(
        &self,
        user_id: i64,
        page: &PageRequest,
    ) -> Result<Page<Review>, AppError> {
        let owned: Vec<Review> = self.reviews.lock().unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();

        Ok(paginate(owned, page, |r| r.id))
    }

    async fn find_all_by_place_id(&self, place_id: i64) -> Result<Vec<Review>, AppError> {
        let mut reviews: Vec<Review> = self.reviews.lock().unwrap()
            .iter()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| r.id);

        Ok(reviews)
    }
}

#[derive(Default)]
pub struct InMemoryBookmarkStore {
    bookmarks: Mutex<Vec<Bookmark>>,
}

impl InMemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, bookmark: Bookmark) {
        self.bookmarks.lock().unwrap().push(bookmark);
    }
}

#[async_trait]
impl BookmarkStore for InMemoryBookmarkStore {
    async fn find_by_user_id_and_status(
        &self,
        user_id: i64,
        status: BookmarkStatus,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, AppError> {
        let matching: Vec<Bookmark> = self.bookmarks.lock().unwrap()
            .iter()
            .filter(|b| b.user_id == user_id && b.status == status)
            .cloned()
            .collect();

        Ok(paginate(matching, page, |b| b.id))
    }
}

#[derive(Default)]
pub struct InMemoryAddressStore {
    depth1: Mutex<Vec<AddressDepth1>>,
    depth2: Mutex<Vec<AddressDepth2>>,
    depth1_sequence: AtomicI64,
    depth2_sequence: AtomicI64,
}

impl InMemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressStore for InMemoryAddressStore {
    async fn find_all_depth1(&self) -> Result<Vec<AddressDepth1>, AppError> {
        Ok(self.depth1.lock().unwrap().clone())
    }

    async fn find_depth2_by_depth1_id(&self, depth1_id: i64) -> Result<Vec<AddressDepth2>, AppError> {
        Ok(self.depth2.lock().unwrap()
            .iter()
            .filter(|a| a.address_depth1_id == depth1_id)
            .cloned()
            .collect())
    }

    async fn find_depth1_by_name(&self, name: &str) -> Result<Option<AddressDepth1>, AppError> {
        Ok(self.depth1.lock().unwrap().iter().find(|a| a.name == name).cloned())
    }

    async fn find_depth2_by_name(
        &self,
        depth1_id: i64,
        name: &str,
    ) -> Result<Option<AddressDepth2>, AppError> {
        Ok(self.depth2.lock().unwrap()
            .iter()
            .find(|a| a.address_depth1_id == depth1_id && a.name == name)
            .cloned())
    }

    async fn next_depth1_id(&self) -> Result<i64, AppError> {
        Ok(self.depth1_sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn next_depth2_id(&self) -> Result<i64, AppError> {
        Ok(self.depth2_sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn insert_depth1(&self, address: &AddressDepth1) -> Result<(), AppError> {
        let mut depth1 = self.depth1.lock().unwrap();
        if depth1.iter().any(|a| a.name == address.name) {
            return Err(AppError::DuplicateKey("address_depth1_name_unique".to_string()));
        }
        depth1.push(address.clone());
        Ok(())
    }

    async fn insert_depth2(&self, address: &AddressDepth2) -> Result<(), AppError> {
        let mut depth2 = self.depth2.lock().unwrap();
        if depth2.iter().any(|a| a.address_depth1_id == address.address_depth1_id && a.name == address.name) {
            return Err(AppError::DuplicateKey("address_depth2_name_unique".to_string()));
        }
        depth2.push(address.clone());
        Ok(())
    }
}
