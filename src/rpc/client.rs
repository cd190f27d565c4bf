//! reqwest 기반 user rpc 클라이언트
//!
//! 모든 호출은 `POST {endpoint}{path}` + JSON 본문이며,
//! 요청 타임아웃은 호출자 컨텍스트의 남은 시간으로 설정됩니다.
//!
//! 실패 응답 본문(`{"kind": .., "message": ..}`)은 타입이 있는 [`AppError`]로 복원됩니다.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::UserRpcConfig;
use crate::domain::dto::rpc::{UserInfoRequest, UserRequest, UserResponse};
use crate::domain::models::context::RequestContext;
use crate::errors::{AppError, AppResult, ErrorContext, RpcErrorBody, UpstreamError};
use crate::rpc::{UserRpc, REQUEST_ID_HEADER, USER_CREATE_PATH, USER_INFO_PATH, USER_LOGIN_PATH};

/// HTTP(JSON) user rpc 클라이언트
#[derive(Clone)]
pub struct HttpUserRpc {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUserRpc {
    pub fn new(endpoint: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("account-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    /// `USER_RPC_ENDPOINT` 설정으로 클라이언트를 만듭니다.
    pub fn from_env() -> AppResult<Self> {
        Self::new(UserRpcConfig::endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<B>(&self, ctx: &RequestContext, path: &str, body: &B) -> AppResult<UserResponse>
    where
        B: Serialize + Sync,
    {
        let budget = ctx.remaining();
        if budget.is_zero() {
            return Err(UpstreamError::Timeout(budget).into());
        }

        let url = format!("{}{}", self.endpoint, path);
        log::debug!("[{}] user rpc 호출: {} (budget {:?})", ctx.request_id(), url, budget);

        let response = self
            .client
            .post(&url)
            .header(REQUEST_ID_HEADER, ctx.request_id())
            .timeout(budget)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(e, budget))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<UserResponse>()
                .await
                .map_err(|e| transport_error(e, budget));
        }

        let bytes = response.bytes().await.map_err(|e| transport_error(e, budget))?;
        match serde_json::from_slice::<RpcErrorBody>(&bytes) {
            Ok(error) => Err(AppError::from_remote(error.kind, error.message)),
            Err(_) => Err(UpstreamError::Transport(format!(
                "{} 응답 상태 {} (본문 해석 불가)",
                path, status
            ))
            .into()),
        }
    }
}

fn transport_error(error: reqwest::Error, budget: Duration) -> AppError {
    if error.is_timeout() {
        UpstreamError::Timeout(budget).into()
    } else {
        UpstreamError::Transport(error.to_string()).into()
    }
}

#[async_trait]
impl UserRpc for HttpUserRpc {
    async fn user_create(&self, ctx: &RequestContext, request: UserRequest) -> AppResult<UserResponse> {
        self.call(ctx, USER_CREATE_PATH, &request).await
    }

    async fn login(&self, ctx: &RequestContext, request: UserRequest) -> AppResult<UserResponse> {
        self.call(ctx, USER_LOGIN_PATH, &request).await
    }

    async fn user_info(&self, ctx: &RequestContext, request: UserInfoRequest) -> AppResult<UserResponse> {
        self.call(ctx, USER_INFO_PATH, &request).await
    }
}
