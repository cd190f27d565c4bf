//! Account Entity Implementation
//!
//! 백엔드가 소유하는 계정 레코드입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 저장소가 부여하는 계정 식별자 (단조 증가, 유일)
pub type AccountId = u32;

/// 계정 엔티티
///
/// `id`는 저장소가 부여한 뒤로 변하지 않습니다.
/// 비밀번호는 bcrypt 해시로만 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// 아직 ID가 부여되지 않은 신규 계정
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
}

impl NewAccount {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
        }
    }

    /// 저장소가 부여한 ID로 엔티티를 완성합니다.
    pub fn into_account(self, id: AccountId, created_at: DateTime<Utc>) -> Account {
        Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            created_at,
        }
    }
}
