//! 게이트웨이 요청 DTO
//!
//! 클라이언트 입력의 형식 검증을 담당합니다. 검증은 원격 호출 이전에 수행됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 계정 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// 사용자명 (1-32자, 공백만으로 구성 불가)
    #[validate(length(min = 1, max = 32, message = "사용자명은 1-32자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    /// 비밀번호 (1-72바이트, bcrypt 입력 한계)
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,
}

/// 로그인 요청
///
/// 형태는 [`CreateAccountRequest`]와 같지만 삽입이 아닌 조회에 쓰입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,
}

/// 계정 정보 조회 요청 (`id`는 10진수 문자열)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfoRequest {
    pub id: String,
}

/// 토큰 검증 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyTokenRequest {
    #[validate(length(min = 1, message = "토큰을 입력해주세요"))]
    pub token: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로 구성될 수 없습니다".into()));
    }
    Ok(())
}

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > 72 {
        return Err(ValidationError::new("password_too_long")
            .with_message("비밀번호는 72바이트 이하여야 합니다".into()));
    }
    Ok(())
}
