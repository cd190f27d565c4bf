//! 데이터 전송 객체(DTO) 모듈
//!
//! - [`accounts`] - 게이트웨이 외부 요청/응답
//! - [`rpc`] - 게이트웨이와 백엔드 사이의 호출 메시지
//! - [`response`] - 모든 게이트웨이 응답에 쓰이는 `{code, data, msg}` 봉투

pub mod accounts;
pub mod rpc;
pub mod response;
