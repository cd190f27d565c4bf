//! user rpc 백엔드 애플리케이션
//!
//! 계정 저장소와 자격 증명 검사를 소유하며, 게이트웨이가 호출하는
//! `/rpc/user/*` 엔드포인트를 제공합니다.
//!
//! ```bash
//! ACCOUNT_STORE=memory RPC_PORT=8081 cargo run --bin user_rpc
//! ```

use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use log::{info, warn};

use account_service::config::{
    init_logging, load_env_file, log_env_file_status, PasswordConfig, RpcServerConfig, StoreBackend, StoreConfig,
};
use account_service::db::Database;
use account_service::repositories::accounts::{InMemoryAccountRepository, MongoAccountRepository};
use account_service::repositories::AccountRepository;
use account_service::routes::health_check;
use account_service::rpc::server::configure_rpc_routes;
use account_service::services::accounts::AccountService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let env_file = load_env_file();
    init_logging();
    log_env_file_status(&env_file);

    info!("🚀 user rpc 백엔드 시작중...");

    let repo = initialize_store().await?;
    let service = web::Data::new(AccountService::new(repo, PasswordConfig::bcrypt_cost()));

    let bind_address = RpcServerConfig::bind_address();
    info!("🌐 user rpc가 http://{} 에서 실행중입니다", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(middleware::Logger::default())
            .service(health_check)
            .configure(configure_rpc_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// `ACCOUNT_STORE` 설정에 따라 계정 저장소를 초기화합니다
async fn initialize_store() -> io::Result<Arc<dyn AccountRepository>> {
    match StoreConfig::backend() {
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new()
                .await
                .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;
            let repo = MongoAccountRepository::initialize(Arc::new(database))
                .await
                .map_err(|e| io::Error::other(e.to_string()))?;

            Ok(Arc::new(repo))
        }
        StoreBackend::Memory => {
            warn!("인메모리 저장소 사용 - 재시작 시 모든 계정이 사라집니다");
            Ok(Arc::new(InMemoryAccountRepository::new()))
        }
    }
}
