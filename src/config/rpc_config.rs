//! 게이트웨이 → 백엔드 원격 호출 설정

use std::env;
use std::time::Duration;

/// user rpc 클라이언트 설정
pub struct UserRpcConfig;

impl UserRpcConfig {
    /// 백엔드 기본 URL. `USER_RPC_ENDPOINT`, 기본값 "http://127.0.0.1:8081"
    pub fn endpoint() -> String {
        env::var("USER_RPC_ENDPOINT")
            .unwrap_or_else(|_| "http://127.0.0.1:8081".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 요청 하나에 허용되는 원격 호출 시간(ms). `USER_RPC_TIMEOUT_MS`, 기본값 3000
    pub fn timeout_ms() -> u64 {
        env::var("USER_RPC_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(3000)
    }

    pub fn timeout() -> Duration {
        Duration::from_millis(Self::timeout_ms())
    }
}
