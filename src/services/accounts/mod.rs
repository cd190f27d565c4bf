//! 백엔드 계정 서비스 모듈
//!
//! user rpc 서버가 호출하는 계정 생성, 자격 증명 검증, ID 조회 로직을 제공합니다.

pub mod account_service;

pub use account_service::*;
