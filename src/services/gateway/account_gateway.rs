//! # 게이트웨이 계정 로직
//!
//! 요청 검증 → 원격 호출(user rpc) → 결과 변환/토큰 발급 순서로 동작합니다.
//! 게이트웨이는 저장소에 직접 접근하지 않으며 요청 사이에 상태를 보관하지 않습니다.
//!
//! ## 에러 매핑
//!
//! | 연산 | 그대로 전달 | 나머지 |
//! |------|-------------|--------|
//! | `create_account` | - | `Upstream` |
//! | `login` | `AuthenticationError` | `Upstream` |
//! | `account_info` | `NotFound` | `Upstream` |
//!
//! 입력 검증 실패(`ValidationError`)는 원격 호출 이전에 반환됩니다.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use validator::Validate;

use crate::domain::dto::accounts::{
    AccountInfoRequest, AccountInfoResponse, CreateAccountRequest, LoginRequest, VerifyTokenRequest,
};
use crate::domain::dto::rpc::{UserInfoRequest, UserRequest, UserResponse};
use crate::domain::entities::accounts::AccountId;
use crate::domain::models::context::RequestContext;
use crate::domain::models::token::TokenPayload;
use crate::errors::{AppError, AppResult, UpstreamError};
use crate::rpc::UserRpc;
use crate::services::auth::TokenService;

/// 게이트웨이 계정 로직
///
/// 원격 호출 클라이언트와 토큰 설정은 생성자로 주입됩니다.
pub struct AccountGateway {
    rpc: Arc<dyn UserRpc>,
    token_secret: String,
    token_expiry_seconds: i64,
    request_timeout: Duration,
}

impl AccountGateway {
    pub fn new(
        rpc: Arc<dyn UserRpc>,
        token_secret: impl Into<String>,
        token_expiry_seconds: i64,
        request_timeout: Duration,
    ) -> Self {
        Self {
            rpc,
            token_secret: token_secret.into(),
            token_expiry_seconds,
            request_timeout,
        }
    }

    /// 설정된 요청 타임아웃을 데드라인으로 하는 새 컨텍스트
    pub fn new_context(&self) -> RequestContext {
        RequestContext::with_timeout(self.request_timeout)
    }

    /// 계정 생성
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 빈/과도한 길이의 사용자명 또는 비밀번호
    /// * `Upstream` - 원격 호출 실패 (중복 사용자명 포함) 또는 타임아웃
    pub async fn create_account(
        &self,
        ctx: &RequestContext,
        request: CreateAccountRequest,
    ) -> AppResult<AccountInfoResponse> {
        validate(&request)?;

        let call = UserRequest {
            username: request.username,
            password: request.password,
        };

        let response = self
            .call_backend(ctx, self.rpc.user_create(ctx, call))
            .await
            .map_err(into_upstream)?;

        log::info!("[{}] 계정 생성 완료 - id: {}", ctx.request_id(), response.user_id);
        Ok(AccountInfoResponse::from(response))
    }

    /// 자격 증명을 검증하고 세션 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 빈 사용자명 또는 비밀번호
    /// * `AuthenticationError` - 자격 증명 불일치
    /// * `Upstream` - 원격 호출 실패 또는 타임아웃
    /// * `InternalError` - 토큰 발급 실패
    pub async fn login(&self, ctx: &RequestContext, request: LoginRequest) -> AppResult<String> {
        validate(&request)?;

        let call = UserRequest {
            username: request.username,
            password: request.password,
        };

        let account = self
            .call_backend(ctx, self.rpc.login(ctx, call))
            .await
            .map_err(|e| match e {
                AppError::AuthenticationError(_) => e,
                other => into_upstream(other),
            })?;

        let payload = TokenPayload::new(account.user_id, account.username);
        let token = TokenService::issue(&payload, &self.token_secret, self.token_expiry_seconds)?;

        log::info!("[{}] 로그인 성공 - id: {}", ctx.request_id(), payload.user_id);
        Ok(token)
    }

    /// ID(10진수 문자열)로 계정 정보를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 숫자가 아닌 ID
    /// * `NotFound` - 해당 ID의 계정 없음
    /// * `Upstream` - 원격 호출 실패 또는 타임아웃
    pub async fn account_info(
        &self,
        ctx: &RequestContext,
        request: AccountInfoRequest,
    ) -> AppResult<AccountInfoResponse> {
        let user_id = parse_account_id(&request.id)?;

        let response = self
            .call_backend(ctx, self.rpc.user_info(ctx, UserInfoRequest { user_id }))
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => e,
                other => into_upstream(other),
            })?;

        Ok(AccountInfoResponse::from(response))
    }

    /// 토큰을 검증하고 담긴 페이로드를 반환합니다. 원격 호출은 없습니다.
    pub fn verify_token(&self, request: VerifyTokenRequest) -> AppResult<TokenPayload> {
        validate(&request)?;
        TokenService::verify(&request.token, &self.token_secret)
    }

    /// 컨텍스트 데드라인 안에서 원격 호출을 한 번 수행합니다.
    async fn call_backend<F>(&self, ctx: &RequestContext, call: F) -> AppResult<UserResponse>
    where
        F: Future<Output = AppResult<UserResponse>>,
    {
        let budget = ctx.remaining();
        match tokio::time::timeout_at(ctx.deadline(), call).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("[{}] user rpc 데드라인 초과 ({:?})", ctx.request_id(), budget);
                Err(UpstreamError::Timeout(budget).into())
            }
        }
    }
}

fn validate<T: Validate>(request: &T) -> AppResult<()> {
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

fn parse_account_id(raw: &str) -> AppResult<AccountId> {
    raw.parse::<AccountId>()
        .map_err(|_| AppError::ValidationError(format!("잘못된 ID 형식입니다: {:?}", raw)))
}

fn into_upstream(error: AppError) -> AppError {
    match error {
        AppError::Upstream(_) => error,
        other => AppError::Upstream(UpstreamError::Rejected(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::accounts::InMemoryAccountRepository;
    use crate::rpc::LocalUserRpc;
    use crate::services::accounts::AccountService;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SECRET: &str = "gateway-test-secret";

    fn gateway_with(rpc: Arc<dyn UserRpc>) -> AccountGateway {
        AccountGateway::new(rpc, SECRET, 3600, Duration::from_secs(2))
    }

    fn local_gateway() -> AccountGateway {
        let service = AccountService::new(Arc::new(InMemoryAccountRepository::new()), 4);
        gateway_with(Arc::new(LocalUserRpc::new(Arc::new(service))))
    }

    fn create(username: &str, password: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn info(id: &str) -> AccountInfoRequest {
        AccountInfoRequest { id: id.to_string() }
    }

    /// 호출 횟수를 세고 항상 같은 에러를 돌려주는 가짜 백엔드
    struct CountingRpc {
        calls: AtomicUsize,
        error: fn() -> AppError,
    }

    impl CountingRpc {
        fn failing(error: fn() -> AppError) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                error,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn fail(&self) -> AppResult<UserResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
    }

    #[async_trait]
    impl UserRpc for CountingRpc {
        async fn user_create(&self, _ctx: &RequestContext, _request: UserRequest) -> AppResult<UserResponse> {
            self.fail()
        }

        async fn login(&self, _ctx: &RequestContext, _request: UserRequest) -> AppResult<UserResponse> {
            self.fail()
        }

        async fn user_info(&self, _ctx: &RequestContext, _request: UserInfoRequest) -> AppResult<UserResponse> {
            self.fail()
        }
    }

    /// 응답하기 전에 오래 대기하는 백엔드
    struct SlowRpc(Duration);

    #[async_trait]
    impl UserRpc for SlowRpc {
        async fn user_create(&self, _ctx: &RequestContext, request: UserRequest) -> AppResult<UserResponse> {
            tokio::time::sleep(self.0).await;
            Ok(UserResponse {
                username: request.username,
                user_id: 1,
            })
        }

        async fn login(&self, ctx: &RequestContext, request: UserRequest) -> AppResult<UserResponse> {
            self.user_create(ctx, request).await
        }

        async fn user_info(&self, _ctx: &RequestContext, request: UserInfoRequest) -> AppResult<UserResponse> {
            tokio::time::sleep(self.0).await;
            Ok(UserResponse {
                username: "slow".to_string(),
                user_id: request.user_id,
            })
        }
    }

    #[actix_web::test]
    async fn test_create_login_info_example() {
        let gateway = local_gateway();
        let ctx = gateway.new_context();

        let created = gateway.create_account(&ctx, create("alice", "pw1")).await.unwrap();
        assert_eq!(created, AccountInfoResponse { username: "alice".to_string(), id: "1".to_string() });

        let token = gateway.login(&ctx, login("alice", "pw1")).await.unwrap();
        assert!(!token.is_empty());

        let fetched = gateway.account_info(&ctx, info("1")).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_login_token_verifies_to_account_identity() {
        let gateway = local_gateway();
        let ctx = gateway.new_context();
        gateway.create_account(&ctx, create("alice", "pw1")).await.unwrap();

        let token = gateway.login(&ctx, login("alice", "pw1")).await.unwrap();
        let payload = gateway.verify_token(VerifyTokenRequest { token }).unwrap();

        assert_eq!(payload, TokenPayload::new(1, "alice"));
    }

    #[actix_web::test]
    async fn test_wrong_password_is_auth_error() {
        let gateway = local_gateway();
        let ctx = gateway.new_context();
        gateway.create_account(&ctx, create("alice", "pw1")).await.unwrap();

        let result = gateway.login(&ctx, login("alice", "nope")).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_login_with_extended_password_issues_no_token() {
        let gateway = local_gateway();
        let ctx = gateway.new_context();
        let stored = "a".repeat(72);
        gateway.create_account(&ctx, create("alice", &stored)).await.unwrap();

        let result = gateway.login(&ctx, login("alice", &format!("{}WRONG", stored))).await;

        assert!(result.is_err());
        assert!(gateway.login(&ctx, login("alice", &stored)).await.is_ok());
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found() {
        let gateway = local_gateway();
        let ctx = gateway.new_context();

        let result = gateway.account_info(&ctx, info("42")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_duplicate_username_surfaces_as_upstream() {
        let gateway = local_gateway();
        let ctx = gateway.new_context();
        gateway.create_account(&ctx, create("alice", "pw1")).await.unwrap();

        let result = gateway.create_account(&ctx, create("alice", "pw2")).await;

        assert!(matches!(result, Err(AppError::Upstream(UpstreamError::Rejected(_)))));
    }

    #[actix_web::test]
    async fn test_validation_happens_before_remote_call() {
        let rpc = CountingRpc::failing(|| AppError::InternalError("unreachable".to_string()));
        let gateway = gateway_with(rpc.clone());
        let ctx = gateway.new_context();

        let bad_id = gateway.account_info(&ctx, info("abc")).await;
        let empty_create = gateway.create_account(&ctx, create("", "pw1")).await;
        let empty_login = gateway.login(&ctx, login("alice", "")).await;

        assert!(matches!(bad_id, Err(AppError::ValidationError(_))));
        assert!(matches!(empty_create, Err(AppError::ValidationError(_))));
        assert!(matches!(empty_login, Err(AppError::ValidationError(_))));
        assert_eq!(rpc.calls(), 0);
    }

    #[actix_web::test]
    async fn test_backend_failures_map_to_upstream_without_retry() {
        let rpc = CountingRpc::failing(|| AppError::DatabaseError("connection reset".to_string()));
        let gateway = gateway_with(rpc.clone());
        let ctx = gateway.new_context();

        let created = gateway.create_account(&ctx, create("alice", "pw1")).await;
        let logged_in = gateway.login(&ctx, login("alice", "pw1")).await;
        let fetched = gateway.account_info(&ctx, info("1")).await;

        assert!(matches!(created, Err(AppError::Upstream(_))));
        assert!(matches!(logged_in, Err(AppError::Upstream(_))));
        assert!(matches!(fetched, Err(AppError::Upstream(_))));
        assert_eq!(rpc.calls(), 3);
    }

    #[actix_web::test]
    async fn test_slow_backend_times_out() {
        let gateway = AccountGateway::new(
            Arc::new(SlowRpc(Duration::from_secs(5))),
            SECRET,
            3600,
            Duration::from_millis(50),
        );
        let ctx = gateway.new_context();

        let result = gateway.account_info(&ctx, info("1")).await;

        assert!(matches!(result, Err(AppError::Upstream(UpstreamError::Timeout(_)))));
    }

    #[test]
    fn test_verify_rejects_foreign_token() {
        let gateway = local_gateway();
        let token = TokenService::issue(&TokenPayload::new(1, "alice"), "other-secret", 60).unwrap();

        let result = gateway.verify_token(VerifyTokenRequest { token });

        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_parse_account_id() {
        assert_eq!(parse_account_id("17").unwrap(), 17);
        assert!(parse_account_id("-1").is_err());
        assert!(parse_account_id("4294967296").is_err());
        assert!(parse_account_id("").is_err());
        assert!(parse_account_id(" 1 ").is_err());
    }
}
