//! JWT 세션 토큰 서비스 구현
//!
//! HMAC-SHA256 대칭 서명으로 기간 제한 토큰을 발급하고 검증합니다.
//! 서버 측 세션 상태는 없으며, 검증은 토큰 자체의 서명과 만료 시각만으로 수행됩니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::models::token::{TokenClaims, TokenPayload};
use crate::errors::{AppError, AppResult};

/// 상태 없는 토큰 발급/검증 서비스
///
/// 서명 키와 만료 시간은 호출자가 넘기는 배포 설정입니다.
///
/// ```rust,ignore
/// let payload = TokenPayload::new(1, "alice");
/// let token = TokenService::issue(&payload, "secret", 3600)?;
/// assert_eq!(TokenService::verify(&token, "secret")?, payload);
/// ```
pub struct TokenService;

impl TokenService {
    /// 페이로드에 만료 시각(현재 + `expiry_seconds`)을 더해 서명된 토큰을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 만료 시간이 0 이하이거나 서명 실패
    pub fn issue(payload: &TokenPayload, secret: &str, expiry_seconds: i64) -> AppResult<String> {
        Self::issue_at(payload, secret, expiry_seconds, Utc::now())
    }

    pub(crate) fn issue_at(
        payload: &TokenPayload,
        secret: &str,
        expiry_seconds: i64,
        now: DateTime<Utc>,
    ) -> AppResult<String> {
        if expiry_seconds <= 0 {
            return Err(AppError::InternalError(format!(
                "토큰 만료 시간은 양수여야 합니다: {}",
                expiry_seconds
            )));
        }

        let claims = TokenClaims {
            payload: payload.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 담긴 페이로드를 그대로 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 서명 불일치, 형식 오류, 만료
    pub fn verify(token: &str, secret: &str) -> AppResult<TokenPayload> {
        Self::decode_claims(token, secret).map(|claims| claims.payload)
    }

    /// 토큰을 검증하고 만료 시각을 포함한 전체 클레임을 돌려줍니다.
    pub fn decode_claims(token: &str, secret: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::InvalidToken("토큰이 만료되었습니다".to_string())
                }
                ErrorKind::InvalidSignature => {
                    AppError::InvalidToken("토큰 서명이 일치하지 않습니다".to_string())
                }
                _ => AppError::InvalidToken(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }
}
