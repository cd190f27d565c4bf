//! 게이트웨이와 백엔드 사이의 원격 호출 메시지
//!
//! 백엔드 경계에서는 ID를 숫자 그대로 전달하고,
//! 게이트웨이가 외부로 내보낼 때만 10진수 문자열로 바꿉니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::{Account, AccountId};

/// 계정 생성/로그인 호출 인자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRequest {
    pub username: String,
    pub password: String,
}

/// ID 조회 호출 인자
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserInfoRequest {
    pub user_id: AccountId,
}

/// 세 호출 모두의 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub user_id: AccountId,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            user_id: account.id,
        }
    }
}
