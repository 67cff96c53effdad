//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//! 서비스는 [`UserStore`] trait에만 의존하고, MongoDB 구현은 [`UserRepository`]입니다.
//!
//! ## 특징
//!
//! - **저장소 수준 유니크 제약**: 닉네임, (프로바이더, 외부 ID) 유니크 인덱스
//! - **중복 키 변환**: 인덱스 위반은 인덱스 이름을 담은 `AppError::DuplicateKey`로 전달
//! - **정수 ID**: `counters` 컬렉션의 `users` 시퀀스로 발급

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    IndexModel,
    bson::{DateTime, doc},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};
use crate::{
    config::OAuthProvider,
    db::{Database, map_write_error},
    domain::entities::users::User,
    repositories::counters::CounterRepository,
    errors::{AppError, UserErrorCode},
};
use singleton_macro::repository;

/// `users` 컬렉션 이름
pub const USER_COLLECTION: &str = "users";
/// 닉네임 유니크 인덱스 이름
pub const NICKNAME_INDEX: &str = "nickname_unique";
/// (oauth_provider, oauth_id) 유니크 인덱스 이름
pub const OAUTH_IDENTITY_INDEX: &str = "oauth_identity_unique";

/// 사용자 저장소 포트
///
/// 유니크 인덱스를 위반하는 쓰기는 `AppError::DuplicateKey(<인덱스 이름>)`로 실패해야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 외부 신원으로 사용자 조회
    async fn find_by_oauth_id(
        &self,
        provider: OAuthProvider,
        oauth_id: &str,
    ) -> Result<Option<User>, AppError>;

    /// 닉네임으로 사용자 조회 (대소문자 구분, 정확히 일치)
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// ID로 사용자를 조회하고, 없으면 `NOT_FOUND_USER` 에러를 반환합니다.
    async fn get_user_by_id(&self, id: i64) -> Result<User, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or(AppError::UserError(UserErrorCode::NotFoundUser))
    }

    /// 새 사용자 ID 발급
    async fn next_id(&self) -> Result<i64, AppError>;

    async fn insert(&self, user: &User) -> Result<(), AppError>;

    /// 닉네임을 바꾸고 변경된 사용자를 반환합니다. 사용자가 없으면 `None`.
    async fn update_nickname(&self, id: i64, nickname: &str) -> Result<Option<User>, AppError>;
}

/// MongoDB 사용자 리포지토리
///
/// ## 인덱스
///
/// | 이름 | 키 | 속성 |
/// |------|----|------|
/// | `nickname_unique` | `nickname` | UNIQUE |
/// | `oauth_identity_unique` | `oauth_provider`, `oauth_id` | UNIQUE |
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,
    counters: Arc<CounterRepository>,
}

impl UserRepository {
    /// 레지스트리를 거치지 않고 주어진 데이터베이스에 연결합니다.
    pub fn with_database(db: Arc<Database>) -> Self {
        let counters = Arc::new(CounterRepository::with_database(db.clone()));
        Self { db, counters }
    }


    /// 데이터베이스 인덱스 생성
    ///
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let nickname_index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(NICKNAME_INDEX.to_string())
                .build())
            .build();

        let oauth_identity_index = IndexModel::builder()
            .keys(doc! { "oauth_provider": 1, "oauth_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(OAUTH_IDENTITY_INDEX.to_string())
                .build())
            .build();

        self.collection::<User>()
            .create_indexes([nickname_index, oauth_identity_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_oauth_id(
        &self,
        provider: OAuthProvider,
        oauth_id: &str,
    ) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "oauth_provider": provider.as_str(), "oauth_id": oauth_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "nickname": nickname })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn next_id(&self) -> Result<i64, AppError> {
        self.counters.next_id(USER_COLLECTION).await
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        self.collection::<User>()
            .insert_one(user)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn update_nickname(&self, id: i64, nickname: &str) -> Result<Option<User>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection::<User>()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": {
                    "nickname": nickname,
                    "time_stamped.updated_at": DateTime::now(),
                } },
            )
            .with_options(options)
            .await
            .map_err(map_write_error)
    }
}
