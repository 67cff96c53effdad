//! MongoDB 연동 테스트
//!
//! 실행 중인 MongoDB가 필요합니다.
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017 cargo test --test mongo_user_flow -- --ignored
//! ```

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use async_trait::async_trait;
use chrono::NaiveDate;
use eodya_api::config::OAuthProvider;
use eodya_api::db::Database;
use eodya_api::domain::dto::common::PageRequest;
use eodya_api::domain::entities::{
    bookmarks::{Bookmark, BookmarkStatus},
    places::Place,
    recommendations::{Recommendation, RecommendationStatus},
    reviews::{PlaceStatus, Review},
    users::User,
};
use eodya_api::errors::{AppError, UserErrorCode};
use eodya_api::repositories::{
    bookmarks::BookmarkRepository,
    places::PlaceRepository,
    recommendations::{RecommendationRepository, RecommendationStore, USER_PLACE_INDEX},
    reviews::{ReviewRepository, ReviewStore},
    users::{NICKNAME_INDEX, OAUTH_IDENTITY_INDEX, UserRepository, UserStore},
};
use eodya_api::services::auth::{SocialIdentityResolver, TokenService};
use eodya_api::services::users::UserService;

struct TokenIsIdResolver;

#[async_trait]
impl SocialIdentityResolver for TokenIsIdResolver {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Kakao
    }

    async fn get_oauth_id(&self, token: &str) -> Result<String, AppError> {
        Ok(token.to_string())
    }
}

struct TestContext {
    db: Arc<Database>,
    users: Arc<UserRepository>,
    places: Arc<PlaceRepository>,
    reviews: Arc<ReviewRepository>,
    bookmarks: Arc<BookmarkRepository>,
    recommendations: Arc<RecommendationRepository>,
    service: UserService,
}

impl TestContext {
    async fn new(prefix: &str) -> TestContext {
        let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let name = format!("eodya_it_{}_{}", prefix, nanos);

        let db = Arc::new(Database::connect(&uri, &name).await.unwrap());
        let users = Arc::new(UserRepository::with_database(db.clone()));
        let places = Arc::new(PlaceRepository::with_database(db.clone()));
        let reviews = Arc::new(ReviewRepository::with_database(db.clone()));
        let bookmarks = Arc::new(BookmarkRepository::with_database(db.clone()));
        let recommendations = Arc::new(RecommendationRepository::with_database(db.clone()));

        users.create_indexes().await.unwrap();
        places.create_indexes().await.unwrap();
        reviews.create_indexes().await.unwrap();
        bookmarks.create_indexes().await.unwrap();
        recommendations.create_indexes().await.unwrap();

        let service = UserService::with_stores(
            users.clone(),
            bookmarks.clone(),
            reviews.clone(),
            places.clone(),
            Arc::new(TokenIsIdResolver),
            Arc::new(TokenService::with_secret("integration-secret".to_string(), 1)),
        );

        TestContext { db, users, places, reviews, bookmarks, recommendations, service }
    }

    async fn drop_database(self) {
        self.db.get_database().drop().await.unwrap();
    }
}

#[tokio::test]
#[ignore = "requires MongoDB (MONGODB_URI)"]
async fn unique_indexes_reject_duplicate_users() {
    let ctx = TestContext::new("unique").await;

    let first = User::new_oauth(ctx.users.next_id().await.unwrap(), "k-1".to_string(), OAuthProvider::Kakao);
    ctx.users.insert(&first).await.unwrap();

    let same_identity = User::new_oauth(ctx.users.next_id().await.unwrap(), "k-1".to_string(), OAuthProvider::Kakao);
    match ctx.users.insert(&same_identity).await {
        Err(AppError::DuplicateKey(index)) => assert_eq!(index, OAUTH_IDENTITY_INDEX),
        other => panic!("unexpected: {:?}", other),
    }

    let second = User::new_oauth(ctx.users.next_id().await.unwrap(), "k-2".to_string(), OAuthProvider::Kakao);
    ctx.users.insert(&second).await.unwrap();

    match ctx.users.update_nickname(second.id, &first.nickname).await {
        Err(AppError::DuplicateKey(index)) => assert_eq!(index, NICKNAME_INDEX),
        other => panic!("unexpected: {:?}", other),
    }

    ctx.drop_database().await;
}

#[tokio::test]
#[ignore = "requires MongoDB (MONGODB_URI)"]
async fn login_and_nickname_flow() {
    let ctx = TestContext::new("login").await;

    let a = ctx.service.login("kakao-a").await.unwrap();
    let again = ctx.service.login("kakao-a").await.unwrap();
    assert_eq!(a.user_id, again.user_id);
    assert_eq!(a.nickname, format!("어댜{}", a.user_id));

    let b = ctx.service.login("kakao-b").await.unwrap();
    assert_ne!(a.user_id, b.user_id);

    ctx.service.update_nickname(a.user_id, "  X  ").await.unwrap();
    assert_eq!(ctx.service.get_my_info(a.user_id).await.unwrap().nickname, "X");

    assert!(matches!(
        ctx.service.update_nickname(b.user_id, "X").await,
        Err(AppError::UserError(UserErrorCode::AlreadyExistNickname))
    ));

    ctx.drop_database().await;
}

#[tokio::test]
#[ignore = "requires MongoDB (MONGODB_URI)"]
async fn login_skips_default_nickname_claimed_by_rename() {
    let ctx = TestContext::new("retry").await;

    let a = ctx.service.login("kakao-a").await.unwrap();
    let next_default = format!("어댜{}", a.user_id + 1);
    ctx.service.update_nickname(a.user_id, &next_default).await.unwrap();

    // nickname_unique가 다음 기본 닉네임을 막아도 가입은 성공한다
    let b = ctx.service.login("kakao-b").await.unwrap();
    assert_ne!(b.nickname, next_default);
    assert_eq!(b.nickname, format!("어댜{}", b.user_id));
    assert_eq!(ctx.users.find_by_oauth_id(OAuthProvider::Kakao, "kakao-b").await.unwrap().unwrap().id, b.user_id);

    ctx.drop_database().await;
}

#[tokio::test]
#[ignore = "requires MongoDB (MONGODB_URI)"]
async fn recommendations_are_unique_per_user_and_place() {
    let ctx = TestContext::new("recommend").await;

    let first = Recommendation::new(ctx.recommendations.next_id().await.unwrap(), 1, 10, RecommendationStatus::True);
    ctx.recommendations.insert(&first).await.unwrap();

    let again = Recommendation::new(ctx.recommendations.next_id().await.unwrap(), 1, 10, RecommendationStatus::False);
    match ctx.recommendations.insert(&again).await {
        Err(AppError::DuplicateKey(index)) => assert_eq!(index, USER_PLACE_INDEX),
        other => panic!("unexpected: {:?}", other),
    }

    let other_user = Recommendation::new(ctx.recommendations.next_id().await.unwrap(), 2, 10, RecommendationStatus::False);
    ctx.recommendations.insert(&other_user).await.unwrap();

    assert_eq!(ctx.recommendations.count_by_place_id_and_status(10, RecommendationStatus::True).await.unwrap(), 1);
    assert_eq!(ctx.recommendations.count_by_place_id_and_status(10, RecommendationStatus::False).await.unwrap(), 1);

    let found = ctx.recommendations.find_by_user_id_and_place_id(1, 10).await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert!(found.is_active());

    ctx.drop_database().await;
}

#[tokio::test]
#[ignore = "requires MongoDB (MONGODB_URI)"]
async fn review_with_five_digit_year_is_not_stored() {
    let ctx = TestContext::new("review_date").await;

    let review = Review::new(
        ctx.reviews.next_id().await.unwrap(),
        NaiveDate::from_ymd_opt(10000, 1, 1).unwrap(),
        PlaceStatus::FullBloom,
        String::new(),
        1,
        1,
    );

    assert!(matches!(ctx.reviews.insert(&review).await, Err(AppError::ValidationError(_))));
    assert!(ctx.reviews.find_all_by_place_id(1).await.unwrap().is_empty());

    ctx.drop_database().await;
}

#[tokio::test]
#[ignore = "requires MongoDB (MONGODB_URI)"]
async fn bookmarks_and_reviews_report_latest_status() {
    let ctx = TestContext::new("activity").await;
    let date = |d: u32| NaiveDate::from_ymd_opt(2024, 4, d).unwrap();

    let p1 = Place::new(ctx.places.next_id().await.unwrap(), "석촌호수".to_string(), 1, 1);
    let p2 = Place::new(ctx.places.next_id().await.unwrap(), "서울숲".to_string(), 1, 1);
    ctx.places.insert(&p1).await.unwrap();
    ctx.places.insert(&p2).await.unwrap();

    for (user_id, place_id, day, status) in [
        (7, p1.id, 1, PlaceStatus::Blooming),
        (8, p1.id, 5, PlaceStatus::FullBloom),
        (8, p1.id, 5, PlaceStatus::NextTime),
    ] {
        let review = Review::new(ctx.reviews.next_id().await.unwrap(), date(day), status, String::new(), user_id, place_id);
        ctx.reviews.insert(&review).await.unwrap();
    }

    let latest = ctx.reviews.find_latest_by_place_id(p1.id).await.unwrap().unwrap();
    assert_eq!(latest.place_status, PlaceStatus::NextTime);

    for (place_id, status) in [(p1.id, BookmarkStatus::True), (p2.id, BookmarkStatus::True), (p2.id, BookmarkStatus::False)] {
        let bookmark = Bookmark::new(ctx.bookmarks.next_id().await.unwrap(), 7, place_id, status);
        ctx.bookmarks.insert(&bookmark).await.unwrap();
    }

    let bookmarks = ctx.service.get_my_bookmarks(7, PageRequest::of(0, 10)).await.unwrap();
    assert_eq!(bookmarks.total, 2);
    assert_eq!(bookmarks.bookmarks[0].place_status, Some(PlaceStatus::NextTime));
    assert_eq!(bookmarks.bookmarks[1].place_status, None);

    let reviews = ctx.service.get_my_reviews(8, PageRequest::of(0, 1)).await.unwrap();
    assert_eq!(reviews.total, 2);
    assert!(reviews.has_next);
    assert_eq!(reviews.reviews[0].review_place_status, PlaceStatus::FullBloom);
    assert_eq!(reviews.reviews[0].place_status, Some(PlaceStatus::NextTime));

    ctx.drop_database().await;
}
