//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 게이트웨이와 백엔드(user rpc) 두 계층이 공유하는 통합 에러 타입입니다.
//! 에러 종류는 끝까지 타입으로 유지되고, 게이트웨이의 응답 봉투(envelope)에서만
//! 단일 코드(500)로 평탄화됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn fetch(id: &str) -> Result<Account, AppError> {
//!     let id: u32 = id.parse()
//!         .map_err(|_| AppError::ValidationError(format!("잘못된 ID 형식입니다: {}", id)))?;
//!
//!     repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// | 변형 | 의미 | RPC 상태 코드 |
/// |------|------|---------------|
/// | `ValidationError` | 잘못된/파싱 불가 입력 | 400 |
/// | `AuthenticationError` | 자격 증명 불일치 | 401 |
/// | `InvalidToken` | 서명 불일치, 형식 오류, 만료 토큰 | 401 |
/// | `NotFound` | 해당 ID의 레코드 없음 | 404 |
/// | `ConflictError` | 사용자명 중복 | 409 |
/// | `DatabaseError` | 저장소 연산 실패 | 500 |
/// | `Upstream` | 원격 호출 실패 또는 타임아웃 | 502 / 504 |
/// | `InternalError` | 예상하지 못한 오류 | 500 |
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (잘못된 사용자명 또는 비밀번호)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 토큰 검증 실패
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스(영속 저장소) 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 백엔드 원격 호출 에러
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 원격 호출(게이트웨이 → 백엔드) 실패 유형
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// 호출자의 데드라인 안에 응답이 오지 않음
    #[error("user rpc timed out after {0:?}")]
    Timeout(Duration),

    /// 연결 실패, 응답 디코딩 실패 등 전송 계층 오류
    #[error("user rpc transport failure: {0}")]
    Transport(String),

    /// 백엔드가 요청을 거부함 (중복 사용자명, 저장소 오류 등)
    #[error("user rpc rejected the call: {0}")]
    Rejected(String),
}

/// 로깅과 RPC 와이어 형식에 쓰이는 에러 종류 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Auth,
    InvalidToken,
    NotFound,
    Conflict,
    Persistence,
    Upstream,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Auth => "auth",
            ErrorKind::InvalidToken => "invalid_token",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Persistence => "persistence",
            ErrorKind::Upstream => "upstream",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

impl AppError {
    /// 에러 종류 태그를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_) => ErrorKind::Validation,
            AppError::AuthenticationError(_) => ErrorKind::Auth,
            AppError::InvalidToken(_) => ErrorKind::InvalidToken,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ConflictError(_) => ErrorKind::Conflict,
            AppError::DatabaseError(_) => ErrorKind::Persistence,
            AppError::Upstream(_) => ErrorKind::Upstream,
            AppError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// 클라이언트 입력 때문에 발생한 에러인지 여부
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Validation
                | ErrorKind::Auth
                | ErrorKind::InvalidToken
                | ErrorKind::NotFound
                | ErrorKind::Conflict
        )
    }

    /// 백엔드가 보낸 (종류, 메시지) 쌍으로부터 에러를 복원합니다.
    ///
    /// 메시지는 백엔드 측 `Display` 결과가 아니라 원래 변형의 내부 문자열입니다.
    pub fn from_remote(kind: ErrorKind, message: String) -> Self {
        match kind {
            ErrorKind::Validation => AppError::ValidationError(message),
            ErrorKind::Auth => AppError::AuthenticationError(message),
            ErrorKind::InvalidToken => AppError::InvalidToken(message),
            ErrorKind::NotFound => AppError::NotFound(message),
            ErrorKind::Conflict => AppError::ConflictError(message),
            ErrorKind::Persistence => AppError::DatabaseError(message),
            ErrorKind::Upstream => AppError::Upstream(UpstreamError::Rejected(message)),
            ErrorKind::Internal => AppError::InternalError(message),
        }
    }

    /// 변형 안에 담긴 원본 메시지
    pub fn detail(&self) -> String {
        match self {
            AppError::ValidationError(m)
            | AppError::AuthenticationError(m)
            | AppError::InvalidToken(m)
            | AppError::NotFound(m)
            | AppError::ConflictError(m)
            | AppError::DatabaseError(m)
            | AppError::InternalError(m) => m.clone(),
            AppError::Upstream(e) => e.to_string(),
        }
    }
}

/// 백엔드 RPC 표면은 에러 종류별 HTTP 상태 코드로 응답합니다.
///
/// 게이트웨이는 이 구현을 사용하지 않고 항상 응답 봉투로 응답합니다.
impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::Upstream(UpstreamError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(RpcErrorBody {
            kind: self.kind(),
            message: self.detail(),
        })
    }
}

/// RPC 에러 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
