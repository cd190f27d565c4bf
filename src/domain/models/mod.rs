//! 도메인 모델 모듈
//!
//! 저장되지 않는 도메인 값 객체를 정의합니다.
//!
//! - [`token`] - 세션 토큰 페이로드와 JWT 클레임 (영속화하지 않음, 자기 완결적)
//! - [`context`] - 요청 ID와 데드라인을 담는 요청 컨텍스트

pub mod token;
pub mod context;
