//! 통합 에러 처리 모듈

pub mod errors;

pub use errors::*;
