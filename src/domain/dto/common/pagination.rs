//! 페이지네이션 DTO
//!
//! Spring Data의 `Pageable`/`Page`에 대응하는 0부터 시작하는 페이지 요청과 결과입니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::errors::AppError;

/// 한 페이지 최대 크기
pub const MAX_PAGE_SIZE: u64 = 100;

/// 페이지 요청
///
/// `page`는 0부터 시작하고 `size`는 1..=100 범위여야 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PageRequest {
    pub page: u64,

    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "페이지 크기는 1-100 사이여야 합니다"))]
    pub size: u64,
}

impl PageRequest {
    pub fn of(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// 건너뛸 항목 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// validator 검증 결과를 ValidationError로 변환합니다.
    pub fn validated(self) -> Result<Self, AppError> {
        self.validate()
            .map_err(|e| AppError::ValidationError(format!("잘못된 페이지 요청: {}", e)))?;
        Ok(self)
    }
}

/// 페이지 조회 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// 조건에 맞는 전체 항목 수
    pub total_elements: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        Self {
            content,
            total_elements,
            page: request.page,
            size: request.size,
        }
    }

    /// 다음 페이지 존재 여부: `(page + 1) * size < total`
    pub fn has_next(&self) -> bool {
        self.page
            .saturating_add(1)
            .saturating_mul(self.size)
            < self.total_elements
    }
}
