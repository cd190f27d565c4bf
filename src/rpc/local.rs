//! 프로세스 내부 user rpc 구현

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dto::rpc::{UserInfoRequest, UserRequest, UserResponse};
use crate::domain::models::context::RequestContext;
use crate::errors::AppResult;
use crate::rpc::UserRpc;
use crate::services::accounts::AccountService;

/// 네트워크 없이 [`AccountService`]를 직접 호출하는 클라이언트
///
/// 단일 프로세스 배포와 게이트웨이 테스트에 사용합니다.
/// 데드라인은 호출하는 게이트웨이 로직이 강제합니다.
#[derive(Clone)]
pub struct LocalUserRpc {
    service: Arc<AccountService>,
}

impl LocalUserRpc {
    pub fn new(service: Arc<AccountService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserRpc for LocalUserRpc {
    async fn user_create(&self, ctx: &RequestContext, request: UserRequest) -> AppResult<UserResponse> {
        log::debug!("[{}] local user_create", ctx.request_id());
        self.service.create_account(request).await.map(UserResponse::from)
    }

    async fn login(&self, ctx: &RequestContext, request: UserRequest) -> AppResult<UserResponse> {
        log::debug!("[{}] local login", ctx.request_id());
        self.service.verify_credentials(request).await.map(UserResponse::from)
    }

    async fn user_info(&self, ctx: &RequestContext, request: UserInfoRequest) -> AppResult<UserResponse> {
        log::debug!("[{}] local user_info", ctx.request_id());
        self.service.fetch_by_id(request.user_id).await.map(UserResponse::from)
    }
}
