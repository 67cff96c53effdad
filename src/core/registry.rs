//! # 의존성 주입 레지스트리
//!
//! `#[service]` / `#[repository]` 매크로가 생성하는 코드가 의존하는 전역 컨테이너입니다.
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 DI 컨테이너 |
//! | `@Component` | `#[service]` / `#[repository]` | 컴포넌트 자동 등록 |
//! | `@Autowired` | `Arc<T>` 필드 | 자동 의존성 주입 |
//! | 인터페이스 바인딩 | `ServiceLocator::set::<dyn Port>(...)` | 트레이트 객체 주입 |
//! | `@Lazy` | 기본 동작 | 모든 빈이 지연 초기화 |
//!
//! ## 해석 순서
//!
//! 1. `set()`으로 등록된 인스턴스 (`Database`, `dyn UserStore` 같은 포트 바인딩)
//! 2. 타입 이름이 `...Repository`면 `#[repository(name = "...")]` 등록에서 생성
//! 3. 타입 이름이 `...Service`면 `#[service(name = "...")]` 등록에서 생성
//!
//! 트레이트 객체(`dyn Trait`)는 이름으로 구현을 찾을 수 없으므로 반드시 `set()`으로 바인딩합니다.
//!
//! ```rust,ignore
//! ServiceLocator::set(database);
//! ServiceLocator::set::<dyn UserStore>(UserRepository::instance());
//!
//! let user_service = UserService::instance();
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// `#[service]` 매크로가 구현하는 서비스 공통 인터페이스
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 리포지토리 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;
    fn collection_name(&self) -> &str;
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보 (`inventory`로 수집)
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보 (`inventory`로 수집)
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// `user_service` → `user`, `user_repository` → `user`
fn clean_registration_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// `eodya_api::repositories::users::user_repo::UserRepository` → `UserRepository`
fn clean_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 전역 서비스 로케이터
///
/// 각 값은 `Arc<T>`를 담은 `Box<dyn Any>`로 보관하므로 `T`가 트레이트 객체여도 됩니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
    initializing: RwLock::new(HashSet::new()),
});

impl ServiceLocator {
    /// 인스턴스를 가져오거나 등록 정보로 생성합니다.
    ///
    /// # Panics
    ///
    /// * 등록되지 않은 타입 (특히 바인딩하지 않은 `dyn Trait`)
    /// * 순환 의존성
    pub fn get<T>() -> Arc<T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        if let Some(instance) = Self::lookup::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let mut initializing = LOCATOR.initializing
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        // 생성자가 다른 의존성을 get()하므로 락을 잡지 않은 상태에서 생성
        let created = Self::construct::<T>(clean_type_name(type_name));

        LOCATOR.initializing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&type_id);

        match created {
            Some(instance) => {
                LOCATOR.instances
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entry(type_id)
                    .or_insert_with(|| Box::new(instance.clone()));
                instance
            }
            None => panic!(
                "Service not found: {}. Register it with #[service] / #[repository] or bind it with ServiceLocator::set()",
                type_name
            ),
        }
    }

    /// 인스턴스를 직접 등록합니다. 같은 타입이 있으면 교체합니다.
    ///
    /// 트레이트 객체는 타입을 명시해 바인딩합니다:
    /// `ServiceLocator::set::<dyn UserStore>(UserRepository::instance())`
    pub fn set<T>(instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        log::debug!("📦 Registering: {}", clean_type_name(std::any::type_name::<T>()));

        LOCATOR.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), Box::new(instance));
    }

    fn lookup<T>() -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        LOCATOR.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<Arc<T>>())
            .cloned()
    }

    fn construct<T>(clean_name: &str) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let boxed = if let Some(entity) = clean_name.strip_suffix("Repository") {
            REPOSITORY_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| (registration.constructor)())
        } else if let Some(entity) = clean_name.strip_suffix("Service") {
            SERVICE_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| (registration.constructor)())
        } else {
            None
        }?;

        match boxed.downcast::<Arc<T>>() {
            Ok(instance) => Some(*instance),
            Err(_) => panic!("Type mismatch in ServiceLocator: {}", clean_name),
        }
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// `Database`와 포트 바인딩을 `set()`한 뒤 호출해야 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");
            for registration in repo_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");
            for registration in service_registrations {
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);
        Ok(())
    }
}
