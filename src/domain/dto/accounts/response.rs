use serde::{Deserialize, Serialize};

use crate::domain::dto::rpc::UserResponse;
use crate::domain::entities::accounts::AccountId;

/// 계정 정보 응답
///
/// 외부 표현에서 정밀도/형식 모호함을 피하기 위해 `id`는 10진수 문자열로 전달합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfoResponse {
    pub username: String,
    pub id: String,
}

impl AccountInfoResponse {
    pub fn new(username: String, id: AccountId) -> Self {
        Self {
            username,
            id: id.to_string(),
        }
    }
}

impl From<UserResponse> for AccountInfoResponse {
    fn from(resp: UserResponse) -> Self {
        Self::new(resp.username, resp.user_id)
    }
}
