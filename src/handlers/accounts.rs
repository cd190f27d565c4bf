//! # Account Gateway HTTP Handlers
//!
//! 게이트웨이의 공개 엔드포인트입니다. 모든 응답은 `{code, data, msg}` 봉투이며
//! HTTP 상태는 항상 200입니다.
//!
//! | 메서드 | 경로 | 설명 | `data` |
//! |--------|------|------|--------|
//! | `POST` | `/api/v1/users` | 계정 생성 | `{username, id}` |
//! | `POST` | `/api/v1/users/login` | 로그인 | 토큰 문자열 |
//! | `GET` | `/api/v1/users/info?id=1` | 계정 정보 조회 | `{username, id}` |
//! | `POST` | `/api/v1/users/verify` | 토큰 검증 | `{userId, username}` |
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"username":"alice","password":"pw1"}'
//! # {"code":200,"data":{"username":"alice","id":"1"},"msg":"success"}
//! ```

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::accounts::{AccountInfoRequest, CreateAccountRequest, LoginRequest, VerifyTokenRequest};
use crate::domain::dto::response::respond;
use crate::services::gateway::AccountGateway;

#[post("")]
pub async fn create_account(
    gateway: web::Data<AccountGateway>,
    payload: web::Json<CreateAccountRequest>,
) -> HttpResponse {
    let ctx = gateway.new_context();
    log::info!("[{}] 계정 생성 요청 - username: {}", ctx.request_id(), payload.username);

    respond(gateway.create_account(&ctx, payload.into_inner()).await)
}

#[post("/login")]
pub async fn login(
    gateway: web::Data<AccountGateway>,
    payload: web::Json<LoginRequest>,
) -> HttpResponse {
    let ctx = gateway.new_context();
    log::info!("[{}] 로그인 요청 - username: {}", ctx.request_id(), payload.username);

    respond(gateway.login(&ctx, payload.into_inner()).await)
}

#[get("/info")]
pub async fn account_info(
    gateway: web::Data<AccountGateway>,
    query: web::Query<AccountInfoRequest>,
) -> HttpResponse {
    let ctx = gateway.new_context();
    log::info!("[{}] 계정 조회 요청 - id: {}", ctx.request_id(), query.id);

    respond(gateway.account_info(&ctx, query.into_inner()).await)
}

/// 로그인 토큰의 서명과 만료를 검증합니다.
#[post("/verify")]
pub async fn verify_token(
    gateway: web::Data<AccountGateway>,
    payload: web::Json<VerifyTokenRequest>,
) -> HttpResponse {
    respond(gateway.verify_token(payload.into_inner()))
}
