//! # User RPC 서버 핸들러 (백엔드)
//!
//! | 메서드 | 경로 | 연산 |
//! |--------|------|------|
//! | `POST` | `/rpc/user/create` | 계정 생성 |
//! | `POST` | `/rpc/user/login` | 자격 증명 검증 |
//! | `POST` | `/rpc/user/info` | ID로 계정 조회 |
//!
//! 성공 시 `UserResponse` JSON, 실패 시 에러 종류별 상태 코드와
//! `{"kind": .., "message": ..}` 본문으로 응답합니다.

use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::domain::dto::rpc::{UserInfoRequest, UserRequest, UserResponse};
use crate::errors::AppError;
use crate::rpc::REQUEST_ID_HEADER;
use crate::services::accounts::AccountService;

fn request_id(req: &HttpRequest) -> &str {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}

#[post("/user/create")]
pub async fn user_create(
    req: HttpRequest,
    service: web::Data<AccountService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("[{}] user_create - username: {}", request_id(&req), payload.username);

    let account = service.create_account(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(account)))
}

#[post("/user/login")]
pub async fn login(
    req: HttpRequest,
    service: web::Data<AccountService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("[{}] login - username: {}", request_id(&req), payload.username);

    let account = service.verify_credentials(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(account)))
}

#[post("/user/info")]
pub async fn user_info(
    req: HttpRequest,
    service: web::Data<AccountService>,
    payload: web::Json<UserInfoRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("[{}] user_info - id: {}", request_id(&req), payload.user_id);

    let account = service.fetch_by_id(payload.user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(account)))
}

/// 본문 파싱 실패를 `ValidationError` 응답으로 바꾸는 JSON 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
    })
}

/// RPC 라우트를 등록합니다. `AccountService`는 `web::Data`로 등록되어 있어야 합니다.
pub fn configure_rpc_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rpc")
            .app_data(json_config())
            .service(user_create)
            .service(login)
            .service(user_info),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorKind, RpcErrorBody};
    use crate::repositories::accounts::InMemoryAccountRepository;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;
    use std::sync::Arc;

    fn account_service() -> web::Data<AccountService> {
        web::Data::new(AccountService::new(Arc::new(InMemoryAccountRepository::new()), 4))
    }

    #[actix_web::test]
    async fn test_create_then_info() {
        let app = test::init_service(
            App::new()
                .app_data(account_service())
                .configure(configure_rpc_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/rpc/user/create")
            .set_json(json!({ "username": "alice", "password": "pw1" }))
            .to_request();
        let created: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.user_id, 1);

        let req = test::TestRequest::post()
            .uri("/rpc/user/info")
            .set_json(json!({ "user_id": 1 }))
            .to_request();
        let info: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info, created);
    }

    #[actix_web::test]
    async fn test_errors_carry_kind() {
        let app = test::init_service(
            App::new()
                .app_data(account_service())
                .configure(configure_rpc_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/rpc/user/info")
            .set_json(json!({ "user_id": 7 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: RpcErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::NotFound);

        let req = test::TestRequest::post()
            .uri("/rpc/user/login")
            .set_json(json!({ "username": "nobody", "password": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: RpcErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::Auth);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(account_service())
                .configure(configure_rpc_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/rpc/user/info")
            .set_json(json!({ "user_id": "abc" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: RpcErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::Validation);
    }
}
