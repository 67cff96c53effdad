//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 검증, 정리
//! - [`display_terminal`] - 셋업 바이너리의 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let nickname = validate_required_string("  벚꽃헌터  ", "닉네임")?;
//! print_boxed_title("Eodya Setup");
//! ```

pub mod string_utils;
pub mod display_terminal;
