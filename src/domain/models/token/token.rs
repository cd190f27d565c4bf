//! 세션 토큰 페이로드와 JWT 클레임
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::AccountId;

/// 토큰이 주장하는 계정 신원
///
/// 직렬화 시 필드명은 `userId`, `username`입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    #[serde(rename = "userId")]
    pub user_id: AccountId,
    pub username: String,
}

impl TokenPayload {
    pub fn new(user_id: AccountId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

/// JWT 클레임: 페이로드 + 표준 `iat`/`exp` (Unix timestamp, 초)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(flatten)]
    pub payload: TokenPayload,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// 만료 시각. 표현할 수 없는 값이면 `None`
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}
