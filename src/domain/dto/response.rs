//! 통일된 응답 봉투
//!
//! 게이트웨이의 모든 응답은 같은 형태로 직렬화됩니다.
//!
//! ```json
//! { "code": 200, "data": { "username": "alice", "id": "1" }, "msg": "success" }
//! { "code": 500, "data": null, "msg": "Not found: account 7 does not exist" }
//! ```
//!
//! 에러 종류는 이 경계까지 타입으로 유지되며, 평탄화 직전에 종류와 함께 로깅됩니다.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const SUCCESS_CODE: i32 = 200;
pub const FAILURE_CODE: i32 = 500;
pub const SUCCESS_MESSAGE: &str = "success";

/// `{code, data, msg}` 응답 봉투
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub code: i32,
    pub data: Option<T>,
    pub msg: String,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(data),
            msg: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// 에러 종류와 관계없이 코드 500, `data = null`, 에러 문구를 `msg`로 담습니다.
    pub fn failure(error: &AppError) -> Self {
        Self {
            code: FAILURE_CODE,
            data: None,
            msg: error.to_string(),
        }
    }

    /// 처리 결과를 봉투로 감쌉니다.
    pub fn wrap(result: AppResult<T>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => {
                if error.is_client_error() {
                    log::warn!("요청 실패 [kind={}]: {}", error.kind(), error);
                } else {
                    log::error!("요청 실패 [kind={}]: {}", error.kind(), error);
                }
                Self::failure(&error)
            }
        }
    }
}

impl<T: Serialize> ResponseEnvelope<T> {
    /// HTTP 응답으로 변환합니다. 봉투 응답의 HTTP 상태는 항상 200입니다.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

/// 핸들러용 단축 함수: `wrap` 후 HTTP 응답으로 변환
pub fn respond<T: Serialize>(result: AppResult<T>) -> HttpResponse {
    ResponseEnvelope::wrap(result).into_response()
}
