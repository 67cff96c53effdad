//! 컬렉션별 정수 ID 발급기
//!
//! `counters` 컬렉션에 `{ _id: <시퀀스 이름>, seq: <마지막 값> }` 문서를 두고
//! `$inc` + upsert를 원자적으로 실행해 1부터 증가하는 i64 ID를 발급합니다.

use std::sync::Arc;
use mongodb::{
    bson::{Document, doc},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use singleton_macro::repository;
use crate::db::Database;
use crate::errors::AppError;

/// 시퀀스 카운터 리포지토리
///
/// 다른 리포지토리가 `Arc<CounterRepository>` 필드로 주입받아 사용합니다.
#[repository(name = "counter", collection = "counters")]
pub struct CounterRepository {
    db: Arc<Database>,
}

impl CounterRepository {
    /// 레지스트리를 거치지 않고 주어진 데이터베이스에 연결합니다.
    pub fn with_database(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 다음 ID를 발급합니다.
    ///
    /// 같은 시퀀스에 대한 동시 호출도 서로 다른 값을 받습니다.
    pub async fn next_id(&self, sequence: &str) -> Result<i64, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.collection::<Document>()
            .find_one_and_update(doc! { "_id": sequence }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError(format!("시퀀스 발급 실패: {}", sequence)))?;

        read_sequence(&counter)
    }
}

// 서버 버전에 따라 seq가 int32로 돌아올 수 있다
fn read_sequence(counter: &Document) -> Result<i64, AppError> {
    counter
        .get_i64("seq")
        .or_else(|_| counter.get_i32("seq").map(i64::from))
        .map_err(|e| AppError::DatabaseError(format!("잘못된 시퀀스 문서: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sequence_accepts_int64_and_int32() {
        assert_eq!(read_sequence(&doc! { "_id": "users", "seq": 7_i64 }).unwrap(), 7);
        assert_eq!(read_sequence(&doc! { "_id": "users", "seq": 3_i32 }).unwrap(), 3);
    }

    #[test]
    fn test_read_sequence_rejects_missing_field() {
        let result = read_sequence(&doc! { "_id": "users" });
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
