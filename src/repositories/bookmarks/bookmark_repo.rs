//! 북마크 리포지토리

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use crate::{
    db::{Database, map_write_error},
    domain::{
        dto::common::{Page, PageRequest},
        entities::bookmarks::{Bookmark, BookmarkStatus},
    },
    repositories::counters::CounterRepository,
    errors::AppError,
};
use singleton_macro::repository;

pub const BOOKMARK_COLLECTION: &str = "bookmarks";

/// 북마크 저장소 포트
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// 사용자의 특정 상태 북마크 페이지 (`_id` 오름차순 = 북마크한 순서)
    async fn find_by_user_id_and_status(
        &self,
        user_id: i64,
        status: BookmarkStatus,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, AppError>;
}

#[repository(name = "bookmark", collection = "bookmarks")]
pub struct BookmarkRepository {
    db: Arc<Database>,
    counters: Arc<CounterRepository>,
}

impl BookmarkRepository {
    /// 레지스트리를 거치지 않고 주어진 데이터베이스에 연결합니다.
    pub fn with_database(db: Arc<Database>) -> Self {
        let counters = Arc::new(CounterRepository::with_database(db.clone()));
        Self { db, counters }
    }


    pub async fn next_id(&self) -> Result<i64, AppError> {
        self.counters.next_id(BOOKMARK_COLLECTION).await
    }

    pub async fn insert(&self, bookmark: &Bookmark) -> Result<(), AppError> {
        self.collection::<Bookmark>()
            .insert_one(bookmark)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_status_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "status": 1, "_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id_status_id".to_string())
                .build())
            .build();

        self.collection::<Bookmark>()
            .create_index(user_status_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl BookmarkStore for BookmarkRepository {
    async fn find_by_user_id_and_status(
        &self,
        user_id: i64,
        status: BookmarkStatus,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, AppError> {
        let filter = doc! { "user_id": user_id, "status": status.as_str() };

        let total = self.collection::<Bookmark>()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let bookmarks: Vec<Bookmark> = self.collection::<Bookmark>()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(page.size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page::new(bookmarks, total, page))
    }
}
