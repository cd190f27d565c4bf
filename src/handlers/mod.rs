//! HTTP 요청 핸들러 모듈
//!
//! 게이트웨이 엔드포인트를 담당합니다. 백엔드(user rpc) 측 핸들러는 [`crate::rpc::server`]에 있습니다.

pub mod accounts;
