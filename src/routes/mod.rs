//! API 라우트 설정 모듈
//!
//! 게이트웨이 라우트와 두 계층이 공유하는 헬스체크 엔드포인트를 제공합니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(gateway))
//!     .configure(configure_gateway_routes);
//! ```

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::domain::dto::response::ResponseEnvelope;
use crate::errors::AppError;
use crate::handlers;

/// 게이트웨이 라우트를 설정합니다
///
/// `AccountGateway`는 `web::Data`로 등록되어 있어야 합니다.
///
/// # Route Groups
///
/// - `GET /health` - 헬스체크
/// - `/api/v1/users` - 계정 생성, 로그인, 조회, 토큰 검증
pub fn configure_gateway_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1/users")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(handlers::accounts::create_account)
            .service(handlers::accounts::login)
            .service(handlers::accounts::account_info)
            .service(handlers::accounts::verify_token),
    );
}

/// 본문/쿼리 파싱 실패도 봉투 형태(`code = 500`)로 응답합니다.
fn envelope_error(error: AppError) -> actix_web::Error {
    let envelope: ResponseEnvelope<()> = ResponseEnvelope::wrap(Err(error));
    actix_web::error::InternalError::from_response(
        "malformed request",
        envelope.into_response(),
    )
    .into()
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    envelope_error(AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)))
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    envelope_error(AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::accounts::InMemoryAccountRepository;
    use crate::rpc::LocalUserRpc;
    use crate::services::accounts::AccountService;
    use crate::services::gateway::AccountGateway;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;

    fn gateway() -> web::Data<AccountGateway> {
        let service = AccountService::new(Arc::new(InMemoryAccountRepository::new()), 4);
        web::Data::new(AccountGateway::new(
            Arc::new(LocalUserRpc::new(Arc::new(service))),
            "routes-test-secret",
            3600,
            Duration::from_secs(2),
        ))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_gateway_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_enveloped() {
        let app = test::init_service(
            App::new().app_data(gateway()).configure(configure_gateway_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 500);
        assert!(body["data"].is_null());
        assert!(body["msg"].as_str().unwrap().starts_with("Validation error"));
    }

    #[actix_web::test]
    async fn test_missing_query_id_is_enveloped() {
        let app = test::init_service(
            App::new().app_data(gateway()).configure(configure_gateway_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users/info").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["code"], 500);
        assert!(body["msg"].as_str().unwrap().starts_with("Validation error"));
    }
}
