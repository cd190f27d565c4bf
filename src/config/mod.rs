//! # Configuration Module
//!
//! 환경 변수 기반 설정을 중앙집중식으로 관리합니다.
//! 각 설정은 유닛 구조체의 연관 함수로 노출되며, 호출 시점에 환경 변수를 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 저장소, bcrypt, Rate Limiting
//! - [`auth_config`] - 토큰 서명 키와 만료 시간
//! - [`rpc_config`] - 게이트웨이의 백엔드 호출 주소와 타임아웃
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 게이트웨이
//! export PORT="8080"
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_SECONDS="3600"
//! export USER_RPC_ENDPOINT="http://127.0.0.1:8081"
//! export USER_RPC_TIMEOUT_MS="3000"
//!
//! # 백엔드
//! export RPC_PORT="8081"
//! export ACCOUNT_STORE="mongo"     # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_service_dev"
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;
pub mod rpc_config;

pub use data_config::*;
pub use auth_config::*;
pub use rpc_config::*;

use env_logger::Env;
use log::{info, warn};

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - `.env.dev` 파일 로드 (기본값)
/// * `PROFILE=prod` - `.env.prod` 파일 로드
/// * 기타 - 기본 `.env` 파일 로드
///
/// `RUST_LOG`도 이 파일에서 올 수 있으므로 로깅 초기화보다 먼저 호출하고,
/// 결과는 [`log_env_file_status`]로 초기화 이후에 기록합니다.
pub fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let file = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    match dotenv::from_filename(file) {
        Ok(_) => Ok(format!("{} 파일 로드 됨 (profile: {})", file, profile)),
        Err(e) => Err(format!("{} 파일 로드 실패 (profile: {}): {}", file, profile, e)),
    }
}

pub fn log_env_file_status(status: &Result<String, String>) {
    match status {
        Ok(message) => info!("{}", message),
        Err(message) => warn!("{}", message),
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=debug")
pub fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
