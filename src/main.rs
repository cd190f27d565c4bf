//! 계정 게이트웨이 메인 애플리케이션
//!
//! 공개 HTTP 서버를 구동합니다. 저장소에는 접근하지 않으며,
//! 모든 계정 연산을 user rpc 백엔드(`USER_RPC_ENDPOINT`)에 위임합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use log::info;

use account_service::config::{
    init_logging, load_env_file, log_env_file_status, JwtConfig, RateLimitConfig, ServerConfig, UserRpcConfig,
};
use account_service::routes::configure_gateway_routes;
use account_service::rpc::HttpUserRpc;
use account_service::services::gateway::AccountGateway;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let env_file = load_env_file();
    init_logging();
    log_env_file_status(&env_file);

    info!("🚀 계정 게이트웨이 시작중...");

    let rpc = HttpUserRpc::from_env().map_err(|e| io::Error::other(e.to_string()))?;
    info!("🔗 user rpc 엔드포인트: {} (timeout {}ms)", rpc.endpoint(), UserRpcConfig::timeout_ms());

    let gateway = web::Data::new(AccountGateway::new(
        Arc::new(rpc),
        JwtConfig::secret(),
        JwtConfig::expiration_seconds(),
        UserRpcConfig::timeout(),
    ));

    start_http_server(gateway).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(gateway: web::Data<AccountGateway>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 게이트웨이가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/users", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(gateway.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_gateway_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 로컬 프론트엔드 개발 서버와의 통신을 허용하는 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
