//! 추천 리포지토리
//!
//! (user_id, place_id) 쌍마다 추천 문서가 하나뿐이고, 추천 취소는 상태 변경으로 표현합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use crate::{
    db::{Database, map_write_error},
    domain::entities::recommendations::{Recommendation, RecommendationStatus},
    errors::AppError,
    repositories::counters::CounterRepository,
};
use singleton_macro::repository;

pub const RECOMMENDATION_COLLECTION: &str = "recommendations";
/// (user_id, place_id) 유니크 인덱스 이름
pub const USER_PLACE_INDEX: &str = "user_id_place_id_unique";

/// 추천 저장소 포트
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    async fn find_by_user_id_and_place_id(
        &self,
        user_id: i64,
        place_id: i64,
    ) -> Result<Option<Recommendation>, AppError>;

    /// 장소가 받은 특정 상태 추천 수
    async fn count_by_place_id_and_status(
        &self,
        place_id: i64,
        status: RecommendationStatus,
    ) -> Result<u64, AppError>;

    async fn next_id(&self) -> Result<i64, AppError>;

    /// 같은 (user_id, place_id) 추천이 이미 있으면 `DuplicateKey(user_id_place_id_unique)`.
    async fn insert(&self, recommendation: &Recommendation) -> Result<(), AppError>;
}

#[repository(name = "recommendation", collection = "recommendations")]
pub struct RecommendationRepository {
    db: Arc<Database>,
    counters: Arc<CounterRepository>,
}

impl RecommendationRepository {
    /// 레지스트리를 거치지 않고 주어진 데이터베이스에 연결합니다.
    pub fn with_database(db: Arc<Database>) -> Self {
        let counters = Arc::new(CounterRepository::with_database(db.clone()));
        Self { db, counters }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_place_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "place_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(USER_PLACE_INDEX.to_string())
                .build())
            .build();

        // 장소별 추천 수 집계용
        let place_status_index = IndexModel::builder()
            .keys(doc! { "place_id": 1, "status": 1 })
            .options(IndexOptions::builder()
                .name("place_id_status".to_string())
                .build())
            .build();

        self.collection::<Recommendation>()
            .create_indexes([user_place_index, place_status_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl RecommendationStore for RecommendationRepository {
    async fn find_by_user_id_and_place_id(
        &self,
        user_id: i64,
        place_id: i64,
    ) -> Result<Option<Recommendation>, AppError> {
        self.collection::<Recommendation>()
            .find_one(doc! { "user_id": user_id, "place_id": place_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count_by_place_id_and_status(
        &self,
        place_id: i64,
        status: RecommendationStatus,
    ) -> Result<u64, AppError> {
        self.collection::<Recommendation>()
            .count_documents(doc! { "place_id": place_id, "status": status.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn next_id(&self) -> Result<i64, AppError> {
        self.counters.next_id(RECOMMENDATION_COLLECTION).await
    }

    async fn insert(&self, recommendation: &Recommendation) -> Result<(), AppError> {
        self.collection::<Recommendation>()
            .insert_one(recommendation)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }
}
