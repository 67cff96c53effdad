//! 실행 환경 및 데이터베이스 설정 관리 모듈

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 데이터베이스 이름
    pub fn default_database_name(&self) -> &'static str {
        match self {
            Environment::Development => "eodya_dev",
            Environment::Test => "eodya_test",
            Environment::Staging => "eodya_stage",
            Environment::Production => "eodya",
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: `mongodb://localhost:27017`
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름
    ///
    /// `DATABASE_NAME`이 없으면 현재 환경의 기본 이름을 사용합니다.
    pub fn database_name() -> String {
        env::var("DATABASE_NAME")
            .unwrap_or_else(|_| Environment::current().default_database_name().to_string())
    }

    /// MongoDB에 보고할 애플리케이션 이름
    pub fn app_name() -> String {
        env::var("MONGODB_APP_NAME").unwrap_or_else(|_| "eodya_api".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_database_name_for_each_environment() {
        assert_eq!(Environment::Development.default_database_name(), "eodya_dev");
        assert_eq!(Environment::Test.default_database_name(), "eodya_test");
        assert_eq!(Environment::Staging.default_database_name(), "eodya_stage");
        assert_eq!(Environment::Production.default_database_name(), "eodya");
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("MONGODB_URI").is_err() {
            assert_eq!(DatabaseConfig::uri(), "mongodb://localhost:27017");
        }

        if env::var("MONGODB_APP_NAME").is_err() {
            assert_eq!(DatabaseConfig::app_name(), "eodya_api");
        }
    }
}
