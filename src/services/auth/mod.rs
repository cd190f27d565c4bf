//! 인증 토큰 서비스 모듈
//!
//! 로그인 성공 시 발급되는 세션 토큰의 발급과 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 만료 시각 검증 (leeway 없음)
//! - 서버 측 세션 상태 없음 (갱신/폐기 미지원)

pub mod token_service;

pub use token_service::*;
