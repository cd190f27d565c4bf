//! 메모리 기반 계정 저장소

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::accounts::{Account, AccountId, NewAccount};
use crate::errors::{AppError, AppResult};
use crate::repositories::{AccountRepository, USERNAME_LOOKUP_LIMIT};

#[derive(Default)]
struct Inner {
    accounts: BTreeMap<AccountId, Account>,
    last_id: AccountId,
}

/// 프로세스 메모리에 계정을 보관하는 저장소
///
/// ID는 1부터 1씩 증가합니다. 모든 연산은 하나의 락 아래에서 실행됩니다.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    inner: RwLock<Inner>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.accounts.len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: NewAccount) -> AppResult<Account> {
        let mut inner = self.inner.write().await;

        if inner.accounts.values().any(|a| a.username == account.username) {
            return Err(AppError::ConflictError(format!(
                "사용자명이 이미 사용 중입니다: {}",
                account.username
            )));
        }

        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::DatabaseError("계정 ID 공간이 소진되었습니다".to_string()))?;

        let account = account.into_account(id, Utc::now());
        inner.last_id = id;
        inner.accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Vec<Account>> {
        let inner = self.inner.read().await;

        Ok(inner
            .accounts
            .values()
            .filter(|a| a.username == username)
            .take(USERNAME_LOOKUP_LIMIT)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>> {
        Ok(self.inner.read().await.accounts.get(&id).cloned())
    }
}
