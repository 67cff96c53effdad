//! 어댜 데이터베이스 셋업 바이너리
//!
//! MongoDB에 연결해 서비스 레지스트리를 초기화하고, 컬렉션 인덱스를 만든 뒤
//! 기본 지역 데이터를 시드합니다. 여러 번 실행해도 결과가 같습니다.

use std::sync::Arc;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use eodya_api::core::registry::ServiceLocator;
use eodya_api::db::Database;
use eodya_api::errors::AppError;
use eodya_api::repositories::{
    self,
    address::AddressRepository,
    bookmarks::BookmarkRepository,
    places::PlaceRepository,
    recommendations::RecommendationRepository,
    reviews::ReviewRepository,
    users::UserRepository,
};
use eodya_api::services::{self, address::AddressService};
use eodya_api::utils::display_terminal::{
    print_boxed_title, print_setup_summary, print_step_complete, print_step_start, print_sub_task,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    load_env_file();
    init_logging();

    print_boxed_title("🌸 Eodya Setup");

    print_step_start(1, "Connecting to MongoDB");
    let database = Arc::new(Database::new().await.inspect_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
    })?);
    print_step_complete(1, "MongoDB connected", 1);

    let database_name = database.database_name().to_string();

    // ServiceLocator에 연결과 포트 바인딩 등록
    ServiceLocator::set(database);
    repositories::register_stores();
    services::auth::register_auth_ports();

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| AppError::InternalError(format!("서비스 레지스트리 초기화 실패: {}", e)))?;

    print_step_start(2, "Creating indexes");
    let indexed = create_indexes().await?;
    print_step_complete(2, "Indexes created", indexed);

    print_step_start(3, "Seeding default regions");
    let seeded = AddressService::instance().seed_default_regions().await?;
    print_step_complete(3, "Regions seeded", seeded);

    print_setup_summary(&database_name, indexed, seeded);
    info!("✅ 셋업 완료");

    Ok(())
}

/// 모든 컬렉션 인덱스를 만들고 처리한 컬렉션 그룹 수를 반환합니다.
async fn create_indexes() -> Result<usize, AppError> {
    UserRepository::instance().create_indexes().await?;
    print_sub_task("users", "OK");

    PlaceRepository::instance().create_indexes().await?;
    print_sub_task("places", "OK");

    ReviewRepository::instance().create_indexes().await?;
    print_sub_task("reviews", "OK");

    BookmarkRepository::instance().create_indexes().await?;
    print_sub_task("bookmarks", "OK");

    RecommendationRepository::instance().create_indexes().await?;
    print_sub_task("recommendations", "OK");

    AddressRepository::instance().create_indexes().await?;
    print_sub_task("address_depth1, address_depth2", "OK");

    Ok(6)
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => if let Err(e) = dotenv::from_filename(".env.prod") {
            eprintln!(".env.prod 파일 로드 실패: {}", e);
        },
        "dev" => if let Err(e) = dotenv::from_filename(".env.dev") {
            eprintln!(".env.dev 파일 로드 실패: {}", e);
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: info)
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
