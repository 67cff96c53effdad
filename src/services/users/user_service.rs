//! # 사용자 서비스 구현
//!
//! 소셜 로그인, 닉네임 변경, 내 정보, 내 북마크/리뷰 목록을 담당합니다.
//! `#[service]` 싱글톤이며, 저장소 포트(`Arc<dyn XxxStore>`)는 `ServiceLocator`에
//! 바인딩된 구현이 주입됩니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  login            SocialIdentityResolver → UserStore → Issuer   │
//! │  update_nickname  UserStore (조회 → 중복 확인 → 변경)             │
//! │  get_my_info      UserStore                                     │
//! │  get_my_bookmarks BookmarkStore → PlaceStore → ReviewStore      │
//! │  get_my_reviews   ReviewStore → PlaceStore → ReviewStore        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 장소의 현재 상태
//!
//! 장소 상태는 저장하지 않고 매번 가장 최근 리뷰에서 계산합니다.
//! 날짜가 같으면 ID가 큰 리뷰가 최근이며, 리뷰가 없으면 `None`입니다.
//! 리뷰 목록에서는 같은 장소가 여러 번 나와도 항목마다 다시 계산합니다.
//!
//! ## 유니크 제약
//!
//! 닉네임과 외부 신원의 유일성은 유니크 인덱스가 최종적으로 보장합니다.
//! 서비스의 사전 조회는 친절한 에러를 위한 것이고, 경쟁 상태에서 인덱스가 막은
//! 쓰기는 `DuplicateKey`로 돌아와 아래처럼 변환됩니다.
//!
//! | 작업 | 위반 인덱스 | 결과 |
//! |------|-------------|------|
//! | 첫 로그인 | `oauth_identity_unique` | 먼저 가입된 사용자로 로그인 |
//! | 첫 로그인 | `nickname_unique` | 새 ID로 다시 가입 (최대 5회) |
//! | 닉네임 변경 | `nickname_unique` | `ALREADY_EXIST_NICKNAME` |

use std::sync::Arc;
use log::{debug, info, warn};
use singleton_macro::service;
use crate::{
    config::OAuthProvider,
    domain::{
        dto::{
            common::PageRequest,
            users::response::{
                UserBookmarkDetail, UserInfoResponse, UserLoginResponse,
                UserMyBookmarkResponse, UserMyReviewsResponse, UserReviewDetail,
            },
        },
        entities::{
            bookmarks::BookmarkStatus,
            places::Place,
            reviews::PlaceStatus,
            users::User,
        },
    },
    errors::{AppError, UserErrorCode},
    repositories::{
        bookmarks::BookmarkStore,
        places::PlaceStore,
        reviews::ReviewStore,
        users::{NICKNAME_INDEX, OAUTH_IDENTITY_INDEX, UserStore},
    },
    services::auth::{AccessTokenIssuer, SocialIdentityResolver},
    utils::string_utils::validate_required_string,
};

/// 기본 닉네임이 이미 쓰이고 있을 때 새 ID로 가입을 다시 시도하는 횟수
const MAX_REGISTER_ATTEMPTS: usize = 5;

/// 사용자 비즈니스 로직 서비스
///
/// ## 사용 예제
///
/// ```rust,ignore
/// ServiceLocator::set(database);
/// repositories::register_stores();
/// services::auth::register_auth_ports();
///
/// let user_service = UserService::instance();
/// let login = user_service.login(&kakao_token).await?;
/// let bookmarks = user_service
///     .get_my_bookmarks(login.user_id, PageRequest::of(0, 20))
///     .await?;
/// ```
#[service(name = "user")]
pub struct UserService {
    user_store: Arc<dyn UserStore>,
    bookmark_store: Arc<dyn BookmarkStore>,
    review_store: Arc<dyn ReviewStore>,
    place_store: Arc<dyn PlaceStore>,
    social_resolver: Arc<dyn SocialIdentityResolver>,
    token_issuer: Arc<dyn AccessTokenIssuer>,
}

impl UserService {
    /// 레지스트리를 거치지 않고 주어진 포트로 생성합니다.
    pub fn with_stores(
        user_store: Arc<dyn UserStore>,
        bookmark_store: Arc<dyn BookmarkStore>,
        review_store: Arc<dyn ReviewStore>,
        place_store: Arc<dyn PlaceStore>,
        social_resolver: Arc<dyn SocialIdentityResolver>,
        token_issuer: Arc<dyn AccessTokenIssuer>,
    ) -> Self {
        Self {
            user_store,
            bookmark_store,
            review_store,
            place_store,
            social_resolver,
            token_issuer,
        }
    }

    /// 소셜 로그인 (없으면 가입)
    ///
    /// 1. 소셜 토큰으로 외부 사용자 ID 확인
    /// 2. (프로바이더, 외부 ID)로 사용자 조회, 없으면 `어댜{id}` 닉네임으로 생성
    /// 3. 사용자 ID로 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 소셜 토큰이 거부됨
    /// * `AppError::ExternalServiceError` - 프로바이더 장애
    pub async fn login(&self, oauth_token: &str) -> Result<UserLoginResponse, AppError> {
        let start_time = std::time::Instant::now();

        let provider = self.social_resolver.provider();
        let oauth_id = self.social_resolver.get_oauth_id(oauth_token).await?;

        let user = match self.user_store.find_by_oauth_id(provider, &oauth_id).await? {
            Some(user) => user,
            None => self.register(provider, oauth_id).await?,
        };

        let token = self.token_issuer.create_access_token(user.id)?;

        info!("로그인 완료: user_id={} took: {:?}", user.id, start_time.elapsed());

        Ok(UserLoginResponse::new(token, user))
    }

    /// 새 사용자를 `어댜{id}` 닉네임으로 저장합니다.
    ///
    /// 다른 사용자가 닉네임을 `어댜{n}`으로 바꿔 두었다면 기본 닉네임이 겹칠 수 있습니다.
    /// 그때는 새 ID를 받아 [`MAX_REGISTER_ATTEMPTS`]번까지 다시 시도합니다.
    async fn register(&self, provider: OAuthProvider, oauth_id: String) -> Result<User, AppError> {
        for attempt in 1..=MAX_REGISTER_ATTEMPTS {
            let id = self.user_store.next_id().await?;
            let user = User::new_oauth(id, oauth_id.clone(), provider);

            match self.user_store.insert(&user).await {
                Ok(()) => {
                    info!("신규 사용자 가입: user_id={} provider={}", user.id, provider.as_str());
                    return Ok(user);
                }
                Err(AppError::DuplicateKey(index)) if index == OAUTH_IDENTITY_INDEX => {
                    // 동시 로그인으로 같은 외부 신원이 먼저 저장됨
                    warn!("동시 가입 감지, 기존 사용자로 로그인: provider={}", provider.as_str());
                    return self.user_store
                        .find_by_oauth_id(provider, &oauth_id)
                        .await?
                        .ok_or_else(|| AppError::InternalError(
                            "중복 가입 이후 사용자를 찾을 수 없습니다".to_string(),
                        ));
                }
                Err(AppError::DuplicateKey(index)) if index == NICKNAME_INDEX => {
                    warn!(
                        "기본 닉네임 사용 중, 새 ID로 재시도: nickname={} attempt={}/{}",
                        user.nickname, attempt, MAX_REGISTER_ATTEMPTS
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::InternalError(format!(
            "기본 닉네임 할당 실패: {}회 모두 사용 중인 닉네임이었습니다", MAX_REGISTER_ATTEMPTS
        )))
    }

    /// 닉네임 변경
    ///
    /// 앞뒤 공백을 제거한 값으로 저장합니다. 지금 닉네임과 같으면 그대로 성공합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 닉네임
    /// * `AppError::UserError(NotFoundUser)` - 사용자 없음
    /// * `AppError::UserError(AlreadyExistNickname)` - 다른 사용자가 사용 중
    pub async fn update_nickname(&self, user_id: i64, nickname: &str) -> Result<(), AppError> {
        let nickname = validate_required_string(nickname, "닉네임")?;
        let user = self.user_store.get_user_by_id(user_id).await?;

        if user.nickname == nickname {
            return Ok(());
        }

        if let Some(owner) = self.user_store.find_by_nickname(&nickname).await? {
            if owner.id != user.id {
                return Err(AppError::UserError(UserErrorCode::AlreadyExistNickname));
            }
        }

        match self.user_store.update_nickname(user.id, &nickname).await {
            Ok(Some(_)) => {
                info!("닉네임 변경: user_id={}", user.id);
                Ok(())
            }
            Ok(None) => Err(AppError::UserError(UserErrorCode::NotFoundUser)),
            Err(AppError::DuplicateKey(index)) if index == NICKNAME_INDEX => {
                Err(AppError::UserError(UserErrorCode::AlreadyExistNickname))
            }
            Err(e) => Err(e),
        }
    }

    /// 내 정보 조회
    pub async fn get_my_info(&self, user_id: i64) -> Result<UserInfoResponse, AppError> {
        let user = self.user_store.get_user_by_id(user_id).await?;

        Ok(UserInfoResponse::from(user))
    }

    /// 내 북마크 목록
    ///
    /// 상태가 `TRUE`인 북마크만 북마크한 순서대로 반환하며,
    /// 항목마다 장소의 현재 상태를 함께 담습니다.
    pub async fn get_my_bookmarks(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<UserMyBookmarkResponse, AppError> {
        let page = page.validated()?;

        let bookmarks = self.bookmark_store
            .find_by_user_id_and_status(user_id, BookmarkStatus::True, &page)
            .await?;
        let has_next = bookmarks.has_next();

        let mut details = Vec::with_capacity(bookmarks.content.len());
        for bookmark in &bookmarks.content {
            let place = self.load_place(bookmark.place_id).await?;
            let status = self.current_place_status(place.id).await?;
            details.push(UserBookmarkDetail::new(place, status));
        }

        debug!(
            "북마크 조회: user_id={} page={} count={} total={}",
            user_id, page.page, details.len(), bookmarks.total_elements
        );

        Ok(UserMyBookmarkResponse::new(bookmarks.total_elements, details, has_next))
    }

    /// 내가 쓴 리뷰 목록
    ///
    /// 각 리뷰에 그 장소의 현재 상태를 다시 계산해 담습니다.
    pub async fn get_my_reviews(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<UserMyReviewsResponse, AppError> {
        let page = page.validated()?;

        let reviews = self.review_store.find_by_user_id(user_id, &page).await?;
        let has_next = reviews.has_next();
        let total = reviews.total_elements;

        let mut details = Vec::with_capacity(reviews.content.len());
        for review in reviews.content {
            let place = self.load_place(review.place_id).await?;
            let status = self.current_place_status(place.id).await?;
            details.push(UserReviewDetail::new(place, review, status));
        }

        debug!(
            "리뷰 조회: user_id={} page={} count={} total={}",
            user_id, page.page, details.len(), total
        );

        Ok(UserMyReviewsResponse::new(total, details, has_next))
    }

    async fn load_place(&self, place_id: i64) -> Result<Place, AppError> {
        self.place_store
            .find_by_id(place_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("장소를 찾을 수 없습니다: {}", place_id)))
    }

    async fn current_place_status(&self, place_id: i64) -> Result<Option<PlaceStatus>, AppError> {
        Ok(self.review_store
            .find_latest_by_place_id(place_id)
            .await?
            .map(|review| review.place_status))
    }
}
