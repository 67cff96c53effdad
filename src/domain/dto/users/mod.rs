//! 사용자 DTO 모듈

pub mod response;
