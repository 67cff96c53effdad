//! # 리뷰 리포지토리
//!
//! 리뷰 이미지는 리뷰 문서의 `images` 배열에 함께 저장됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use crate::{
    db::{Database, map_write_error},
    domain::{
        dto::common::{Page, PageRequest},
        entities::reviews::Review,
    },
    repositories::counters::CounterRepository,
    errors::AppError,
};
use singleton_macro::repository;

pub const REVIEW_COLLECTION: &str = "reviews";

/// 리뷰 저장소 포트
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// 사용자가 작성한 리뷰 페이지 (`_id` 오름차순)
    async fn find_by_user_id(
        &self,
        user_id: i64,
        page: &PageRequest,
    ) -> Result<Page<Review>, AppError>;

    /// 장소의 모든 리뷰
    async fn find_all_by_place_id(&self, place_id: i64) -> Result<Vec<Review>, AppError>;

    /// 장소의 가장 최근 리뷰 ([`Review::latest`] 규칙)
    async fn find_latest_by_place_id(&self, place_id: i64) -> Result<Option<Review>, AppError> {
        let reviews = self.find_all_by_place_id(place_id).await?;
        Ok(Review::latest(&reviews).cloned())
    }
}

#[repository(name = "review", collection = "reviews")]
pub struct ReviewRepository {
    db: Arc<Database>,
    counters: Arc<CounterRepository>,
}

impl ReviewRepository {
    /// 레지스트리를 거치지 않고 주어진 데이터베이스에 연결합니다.
    pub fn with_database(db: Arc<Database>) -> Self {
        let counters = Arc::new(CounterRepository::with_database(db.clone()));
        Self { db, counters }
    }


    pub async fn next_id(&self) -> Result<i64, AppError> {
        self.counters.next_id(REVIEW_COLLECTION).await
    }

    /// 리뷰를 저장합니다. 4자리 연도가 아닌 방문 날짜는 `ValidationError`.
    pub async fn insert(&self, review: &Review) -> Result<(), AppError> {
        review.validate_review_date()?;

        self.collection::<Review>()
            .insert_one(review)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id_id".to_string())
                .build())
            .build();

        // 최근 리뷰 조회 정렬과 같은 순서
        let latest_index = IndexModel::builder()
            .keys(doc! { "place_id": 1, "review_date": -1, "_id": -1 })
            .options(IndexOptions::builder()
                .name("place_id_review_date_desc".to_string())
                .build())
            .build();

        self.collection::<Review>()
            .create_indexes([user_index, latest_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn find_by_user_id(
        &self,
        user_id: i64,
        page: &PageRequest,
    ) -> Result<Page<Review>, AppError> {
        let filter = doc! { "user_id": user_id };

        let total = self.collection::<Review>()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let reviews: Vec<Review> = self.collection::<Review>()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(page.size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page::new(reviews, total, page))
    }

    async fn find_all_by_place_id(&self, place_id: i64) -> Result<Vec<Review>, AppError> {
        self.collection::<Review>()
            .find(doc! { "place_id": place_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    // insert가 연도를 0000..=9999로 제한하므로 YYYY-MM-DD 사전순이 날짜순과 같다
    async fn find_latest_by_place_id(&self, place_id: i64) -> Result<Option<Review>, AppError> {
        self.collection::<Review>()
            .find_one(doc! { "place_id": place_id })
            .sort(doc! { "review_date": -1, "_id": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
