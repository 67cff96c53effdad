//! 장소 리포지토리

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use crate::{
    db::{Database, map_write_error},
    domain::entities::places::Place,
    repositories::counters::CounterRepository,
    errors::AppError,
};
use singleton_macro::repository;

pub const PLACE_COLLECTION: &str = "places";

/// 장소 저장소 포트
#[async_trait]
pub trait PlaceStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, AppError>;
}

#[repository(name = "place", collection = "places")]
pub struct PlaceRepository {
    db: Arc<Database>,
    counters: Arc<CounterRepository>,
}

impl PlaceRepository {
    /// 레지스트리를 거치지 않고 주어진 데이터베이스에 연결합니다.
    pub fn with_database(db: Arc<Database>) -> Self {
        let counters = Arc::new(CounterRepository::with_database(db.clone()));
        Self { db, counters }
    }


    pub async fn next_id(&self) -> Result<i64, AppError> {
        self.counters.next_id(PLACE_COLLECTION).await
    }

    pub async fn insert(&self, place: &Place) -> Result<(), AppError> {
        self.collection::<Place>()
            .insert_one(place)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 지역별 장소 목록 조회용
        let address_index = IndexModel::builder()
            .keys(doc! { "address_depth2_id": 1 })
            .options(IndexOptions::builder()
                .name("address_depth2_id".to_string())
                .build())
            .build();

        self.collection::<Place>()
            .create_index(address_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PlaceStore for PlaceRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, AppError> {
        self.collection::<Place>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
