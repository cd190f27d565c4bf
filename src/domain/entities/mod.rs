//! 도메인 엔티티 모듈
//!
//! 영속 저장소에 기록되는 레코드 타입을 정의합니다.

pub mod accounts;
