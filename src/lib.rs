//! 2계층 계정 서비스
//!
//! 공개 HTTP 게이트웨이가 입력을 검증하고, 원격 호출(user rpc)로 백엔드에 위임한 뒤,
//! 결과를 `{code, data, msg}` 응답 봉투로 감싸 돌려줍니다.
//! 백엔드는 영속 저장소와 자격 증명 검사를 소유합니다.
//!
//! # Features
//!
//! - **계정 관리**: 생성, 자격 증명 검증, ID 조회 (수정/삭제 없음)
//! - **JWT 세션 토큰**: HS256 서명, 만료 시각 검증, 서버 측 상태 없음
//! - **데드라인 전파**: 느린 백엔드가 게이트웨이 요청을 붙잡지 못함
//! - **MongoDB / 인메모리 저장소**
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │ account_gateway (HTTP)  │ ← routes / handlers / 응답 봉투
//! └─────────────────────────┘
//!             │
//!             ▼
//! ┌─────────────────────────┐
//! │     AccountGateway      │ ← 검증, 토큰 발급, 에러 매핑
//! └─────────────────────────┘
//!             │  dyn UserRpc (HTTP/JSON, 데드라인)
//!             ▼
//! ┌─────────────────────────┐
//! │   user_rpc (backend)    │ ← rpc::server
//! └─────────────────────────┘
//!             │
//!             ▼
//! ┌─────────────────────────┐
//! │     AccountService      │ ← bcrypt, 생성/검증/조회
//! └─────────────────────────┘
//!             │
//!             ▼
//! ┌─────────────────────────┐
//! │ MongoDB | In-memory     │ ← AccountRepository
//! └─────────────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod rpc;
pub mod services;
