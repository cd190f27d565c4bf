//! # User RPC 모듈
//!
//! 게이트웨이가 백엔드 로직을 로컬 호출처럼 사용하기 위한 원격 호출 경계입니다.
//!
//! ```text
//! AccountGateway ──► dyn UserRpc ──┬─► HttpUserRpc  ──HTTP/JSON──► rpc::server ──► AccountService
//!                                  └─► LocalUserRpc ─────────────────────────────► AccountService
//! ```
//!
//! - [`client::HttpUserRpc`] - reqwest 기반 원격 클라이언트 (데드라인 전파)
//! - [`local::LocalUserRpc`] - 같은 프로세스 안에서 백엔드 로직을 직접 호출
//! - [`server`] - 백엔드 측 actix-web 핸들러 (`/rpc/user/*`)

use async_trait::async_trait;

use crate::domain::dto::rpc::{UserInfoRequest, UserRequest, UserResponse};
use crate::domain::models::context::RequestContext;
use crate::errors::AppResult;

pub mod client;
pub mod local;
pub mod server;

pub use client::HttpUserRpc;
pub use local::LocalUserRpc;

pub const USER_CREATE_PATH: &str = "/rpc/user/create";
pub const USER_LOGIN_PATH: &str = "/rpc/user/login";
pub const USER_INFO_PATH: &str = "/rpc/user/info";

/// 요청 ID 전파용 헤더
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 백엔드 계정 연산에 대한 원격 호출 인터페이스
///
/// 구현체는 `ctx`의 데드라인을 넘기지 않아야 하며, 실패한 호출을 재시도하지 않습니다.
#[async_trait]
pub trait UserRpc: Send + Sync {
    /// 계정 생성
    async fn user_create(&self, ctx: &RequestContext, request: UserRequest) -> AppResult<UserResponse>;

    /// 자격 증명 검증
    async fn login(&self, ctx: &RequestContext, request: UserRequest) -> AppResult<UserResponse>;

    /// ID로 계정 조회
    async fn user_info(&self, ctx: &RequestContext, request: UserInfoRequest) -> AppResult<UserResponse>;
}
