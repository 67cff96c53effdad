//! 주소 계층 리포지토리
//!
//! 시/도(`address_depth1`)와 구/군(`address_depth2`) 참조 데이터를 다룹니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, IndexModel, bson::doc, options::IndexOptions};
use crate::{
    db::{Database, map_write_error},
    domain::entities::address::{AddressDepth1, AddressDepth2},
    repositories::counters::CounterRepository,
    errors::AppError,
};
use singleton_macro::repository;

pub const ADDRESS_DEPTH1_COLLECTION: &str = "address_depth1";
pub const ADDRESS_DEPTH2_COLLECTION: &str = "address_depth2";

/// 주소 저장소 포트
#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn find_all_depth1(&self) -> Result<Vec<AddressDepth1>, AppError>;

    /// 1단계 주소에 속한 2단계 주소 목록
    async fn find_depth2_by_depth1_id(&self, depth1_id: i64) -> Result<Vec<AddressDepth2>, AppError>;

    async fn find_depth1_by_name(&self, name: &str) -> Result<Option<AddressDepth1>, AppError>;

    async fn find_depth2_by_name(
        &self,
        depth1_id: i64,
        name: &str,
    ) -> Result<Option<AddressDepth2>, AppError>;

    async fn next_depth1_id(&self) -> Result<i64, AppError>;

    async fn next_depth2_id(&self) -> Result<i64, AppError>;

    async fn insert_depth1(&self, address: &AddressDepth1) -> Result<(), AppError>;

    async fn insert_depth2(&self, address: &AddressDepth2) -> Result<(), AppError>;
}

#[repository(name = "address", collection = "address_depth1")]
pub struct AddressRepository {
    db: Arc<Database>,
    counters: Arc<CounterRepository>,
}

impl AddressRepository {
    /// 레지스트리를 거치지 않고 주어진 데이터베이스에 연결합니다.
    pub fn with_database(db: Arc<Database>) -> Self {
        let counters = Arc::new(CounterRepository::with_database(db.clone()));
        Self { db, counters }
    }

    fn depth1(&self) -> Collection<AddressDepth1> {
        self.collection::<AddressDepth1>()
    }

    // 매크로의 collection()은 address_depth1만 가리킨다
    fn depth2(&self) -> Collection<AddressDepth2> {
        self.db.get_database().collection::<AddressDepth2>(ADDRESS_DEPTH2_COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let depth1_name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("address_depth1_name_unique".to_string())
                .build())
            .build();

        let depth2_name_index = IndexModel::builder()
            .keys(doc! { "address_depth1_id": 1, "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("address_depth2_name_unique".to_string())
                .build())
            .build();

        self.depth1()
            .create_index(depth1_name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.depth2()
            .create_index(depth2_name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AddressStore for AddressRepository {
    async fn find_all_depth1(&self) -> Result<Vec<AddressDepth1>, AppError> {
        self.depth1()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_depth2_by_depth1_id(&self, depth1_id: i64) -> Result<Vec<AddressDepth2>, AppError> {
        self.depth2()
            .find(doc! { "address_depth1_id": depth1_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_depth1_by_name(&self, name: &str) -> Result<Option<AddressDepth1>, AppError> {
        self.depth1()
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_depth2_by_name(
        &self,
        depth1_id: i64,
        name: &str,
    ) -> Result<Option<AddressDepth2>, AppError> {
        self.depth2()
            .find_one(doc! { "address_depth1_id": depth1_id, "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn next_depth1_id(&self) -> Result<i64, AppError> {
        self.counters.next_id(ADDRESS_DEPTH1_COLLECTION).await
    }

    async fn next_depth2_id(&self) -> Result<i64, AppError> {
        self.counters.next_id(ADDRESS_DEPTH2_COLLECTION).await
    }

    async fn insert_depth1(&self, address: &AddressDepth1) -> Result<(), AppError> {
        self.depth1()
            .insert_one(address)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn insert_depth2(&self, address: &AddressDepth2) -> Result<(), AppError> {
        self.depth2()
            .insert_one(address)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }
}
