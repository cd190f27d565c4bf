//! 게이트웨이 → user rpc → 계정 서비스 → 인메모리 저장소 전체 파이프라인 테스트

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{test, web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};

use account_service::domain::dto::rpc::UserInfoRequest;
use account_service::errors::{AppError, UpstreamError};
use account_service::repositories::accounts::InMemoryAccountRepository;
use account_service::routes::configure_gateway_routes;
use account_service::rpc::server::configure_rpc_routes;
use account_service::rpc::{HttpUserRpc, LocalUserRpc, UserRpc, USER_INFO_PATH};
use account_service::services::accounts::AccountService;
use account_service::services::gateway::AccountGateway;

const SECRET: &str = "pipeline-test-secret";

fn account_service() -> Arc<AccountService> {
    Arc::new(AccountService::new(Arc::new(InMemoryAccountRepository::new()), 4))
}

fn gateway(rpc: Arc<dyn UserRpc>, timeout: Duration) -> web::Data<AccountGateway> {
    web::Data::new(AccountGateway::new(rpc, SECRET, 3600, timeout))
}

fn local_gateway() -> web::Data<AccountGateway> {
    gateway(Arc::new(LocalUserRpc::new(account_service())), Duration::from_secs(2))
}

/// 임의 포트에 user rpc 서버를 띄우고 기본 URL과 핸들을 돌려줍니다.
fn spawn_backend<F>(configure: F) -> (String, ServerHandle)
where
    F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (format!("http://{}", addr), handle)
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
        let value: Value = test::call_and_read_body_json(&$app, req).await;
        value
    }};
}

#[actix_web::test]
async fn test_create_login_info_round_trip() {
    let app = test::init_service(
        App::new().app_data(local_gateway()).configure(configure_gateway_routes),
    )
    .await;

    let created = post_json!(app, "/api/v1/users", json!({ "username": "alice", "password": "pw1" }));
    assert_eq!(
        created,
        json!({ "code": 200, "data": { "username": "alice", "id": "1" }, "msg": "success" })
    );

    let login = post_json!(app, "/api/v1/users/login", json!({ "username": "alice", "password": "pw1" }));
    assert_eq!(login["code"], 200);
    let token = login["data"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    let req = test::TestRequest::get().uri("/api/v1/users/info?id=1").to_request();
    let info: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(info["data"], json!({ "username": "alice", "id": "1" }));

    let verified = post_json!(app, "/api/v1/users/verify", json!({ "token": token }));
    assert_eq!(verified["code"], 200);
    assert_eq!(verified["data"], json!({ "userId": 1, "username": "alice" }));
}

#[actix_web::test]
async fn test_failures_collapse_to_code_500() {
    let app = test::init_service(
        App::new().app_data(local_gateway()).configure(configure_gateway_routes),
    )
    .await;
    post_json!(app, "/api/v1/users", json!({ "username": "alice", "password": "pw1" }));

    let wrong_password = post_json!(app, "/api/v1/users/login", json!({ "username": "alice", "password": "nope" }));
    assert_eq!(wrong_password["code"], 500);
    assert!(wrong_password["data"].is_null());
    assert!(wrong_password["msg"].as_str().unwrap().starts_with("Authentication error"));

    let req = test::TestRequest::get().uri("/api/v1/users/info?id=abc").to_request();
    let bad_id: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bad_id["code"], 500);
    assert!(bad_id["msg"].as_str().unwrap().starts_with("Validation error"));

    let req = test::TestRequest::get().uri("/api/v1/users/info?id=99").to_request();
    let missing: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(missing["code"], 500);
    assert!(missing["msg"].as_str().unwrap().starts_with("Not found"));

    let duplicate = post_json!(app, "/api/v1/users", json!({ "username": "alice", "password": "pw2" }));
    assert_eq!(duplicate["code"], 500);
    assert!(duplicate["msg"].as_str().unwrap().starts_with("Upstream error"));
}

#[actix_web::test]
async fn test_gateway_over_http_rpc() {
    let service = web::Data::from(account_service());
    let (endpoint, handle) = spawn_backend(move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(service.clone());
        configure_rpc_routes(cfg);
    });

    let rpc = Arc::new(HttpUserRpc::new(endpoint).unwrap());
    let app = test::init_service(
        App::new()
            .app_data(gateway(rpc, Duration::from_secs(5)))
            .configure(configure_gateway_routes),
    )
    .await;

    let created = post_json!(app, "/api/v1/users", json!({ "username": "alice", "password": "pw1" }));
    assert_eq!(created["data"], json!({ "username": "alice", "id": "1" }));

    let wrong_password = post_json!(app, "/api/v1/users/login", json!({ "username": "alice", "password": "nope" }));
    assert!(wrong_password["msg"].as_str().unwrap().starts_with("Authentication error"));

    let req = test::TestRequest::get().uri("/api/v1/users/info?id=7").to_request();
    let missing: Value = test::call_and_read_body_json(&app, req).await;
    assert!(missing["msg"].as_str().unwrap().starts_with("Not found"));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_http_rpc_honours_deadline() {
    let (endpoint, handle) = spawn_backend(|cfg: &mut web::ServiceConfig| {
        cfg.route(
            USER_INFO_PATH,
            web::post().to(|| async {
                actix_web::rt::time::sleep(Duration::from_secs(2)).await;
                HttpResponse::Ok().json(json!({ "username": "late", "user_id": 1 }))
            }),
        );
    });

    let rpc = HttpUserRpc::new(endpoint).unwrap();
    let ctx = account_service::domain::models::context::RequestContext::with_timeout(
        Duration::from_millis(100),
    );

    let result = rpc.user_info(&ctx, UserInfoRequest { user_id: 1 }).await;
    assert!(matches!(result, Err(AppError::Upstream(UpstreamError::Timeout(_)))));

    handle.stop(false).await;
}
