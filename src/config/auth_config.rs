//! # Authentication Configuration Module
//!
//! 세션 토큰(JWT) 서명 비밀키와 만료 시간을 관리합니다.
//! 두 값 모두 배포 설정이며, 토큰 발급 로직 자체에는 포함되지 않습니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_SECONDS="3600"
//! ```

use std::env;

use super::Environment;

/// 개발/테스트 환경에서만 허용되는 기본 서명 키
const DEV_FALLBACK_SECRET: &str = "account-service-dev-secret";

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 서명에 사용하는 HMAC 비밀키 (`JWT_SECRET`)
    ///
    /// # Panics
    ///
    /// 프로덕션/스테이징 환경에서 `JWT_SECRET`이 설정되지 않은 경우 패닉이 발생합니다.
    pub fn secret() -> String {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => match Environment::current() {
                Environment::Development | Environment::Test => {
                    log::warn!("JWT_SECRET 미설정 - 개발용 기본 키를 사용합니다");
                    DEV_FALLBACK_SECRET.to_string()
                }
                _ => panic!("JWT_SECRET must be set"),
            },
        }
    }

    /// 토큰 만료 시간(초). `JWT_EXPIRATION_SECONDS`, 기본값 3600
    pub fn expiration_seconds() -> i64 {
        env::var("JWT_EXPIRATION_SECONDS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_default_is_positive() {
        if env::var("JWT_EXPIRATION_SECONDS").is_err() {
            assert_eq!(JwtConfig::expiration_seconds(), 3600);
        }
        assert!(JwtConfig::expiration_seconds() > 0);
    }
}
