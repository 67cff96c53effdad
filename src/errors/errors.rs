//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 어댜 백엔드 코어를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공하며,
//! 호출 측(HTTP 계층 등)은 [`AppError::kind`]로 분류만 보고 응답을 결정합니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 대표 변형 | 발생 상황 |
//! |------|-----------|-----------|
//! | `NotFound` | `NotFound`, `UserError(NotFoundUser)` | ID로 사용자 조회 실패 |
//! | `Conflict` | `DuplicateKey`, `UserError(AlreadyExistNickname)` | 닉네임 중복 |
//! | `Validation` | `ValidationError` | 빈 닉네임, 잘못된 페이지 요청 |
//! | `Authentication` | `AuthenticationError` | 소셜 토큰 거부 |
//! | `Infrastructure` | `DatabaseError`, `ExternalServiceError`, `InternalError` | 저장소/외부 서비스 장애 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, UserErrorCode};
//!
//! let taken = user_store.find_by_nickname(&nickname).await?;
//! if taken.is_some() {
//!     return Err(AppError::UserError(UserErrorCode::AlreadyExistNickname));
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// 사용자 도메인의 이름 있는 에러 코드
///
/// 클라이언트와 약속된 문자열 코드(`ALREADY_EXIST_NICKNAME` 등)를 그대로 유지합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserErrorCode {
    /// 존재하지 않는 사용자
    NotFoundUser,
    /// 다른 사용자가 이미 사용 중인 닉네임
    AlreadyExistNickname,
}

impl UserErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            UserErrorCode::NotFoundUser => "NOT_FOUND_USER",
            UserErrorCode::AlreadyExistNickname => "ALREADY_EXIST_NICKNAME",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            UserErrorCode::NotFoundUser => "사용자를 찾을 수 없습니다",
            UserErrorCode::AlreadyExistNickname => "이미 존재하는 닉네임입니다",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserErrorCode::NotFoundUser => ErrorKind::NotFound,
            UserErrorCode::AlreadyExistNickname => ErrorKind::Conflict,
        }
    }
}

impl fmt::Display for UserErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 에러 분류
///
/// 전송 계층이 상태 코드를 고를 때 사용하는 거친 분류입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Validation,
    Authentication,
    Infrastructure,
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 코어에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 인덱스 위반 (MongoDB code 11000)
    ///
    /// 위반한 인덱스 이름을 담습니다. 서비스 계층에서 도메인 에러로 변환됩니다.
    #[error("Duplicate key on index: {0}")]
    DuplicateKey(String),

    /// 사용자 도메인 에러
    #[error("User error [{code}]: {message}", code = .0.code(), message = .0.message())]
    UserError(UserErrorCode),

    /// 인증 실패 에러
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 분류를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::DuplicateKey(_) => ErrorKind::Conflict,
            AppError::UserError(code) => code.kind(),
            AppError::ValidationError(_) => ErrorKind::Validation,
            AppError::AuthenticationError(_) => ErrorKind::Authentication,
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => ErrorKind::Infrastructure,
        }
    }

    /// 클라이언트에 노출할 에러 코드
    ///
    /// 도메인 에러는 약속된 코드를, 그 외에는 분류 이름을 돌려줍니다.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UserError(code) => code.code(),
            other => match other.kind() {
                ErrorKind::NotFound => "NOT_FOUND",
                ErrorKind::Conflict => "CONFLICT",
                ErrorKind::Validation => "INVALID_REQUEST",
                ErrorKind::Authentication => "UNAUTHORIZED",
                ErrorKind::Infrastructure => "INTERNAL_ERROR",
            },
        }
    }
}
