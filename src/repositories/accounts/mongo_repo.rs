//! # MongoDB 계정 저장소
//!
//! - **컬렉션**: `accounts` (`_id` = 계정 ID, `username` 유니크 인덱스)
//! - **ID 발급**: `counters` 컬렉션의 `{ _id: "accounts", seq }` 문서를
//!   `findOneAndUpdate` + `$inc` (upsert)로 증가시켜 단조 증가 ID를 얻습니다.
//! - **에러 매핑**: 중복 키(11000) → `ConflictError`, 그 외 드라이버 오류 → `DatabaseError`

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::domain::entities::accounts::{Account, AccountId, NewAccount};
use crate::errors::{AppError, AppResult};
use crate::repositories::{AccountRepository, USERNAME_LOOKUP_LIMIT};

const ACCOUNTS_COLLECTION: &str = "accounts";
const COUNTERS_COLLECTION: &str = "counters";
const ACCOUNT_SEQUENCE: &str = "accounts";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `accounts` 컬렉션의 문서 형태
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountDocument {
    #[serde(rename = "_id")]
    id: i64,
    username: String,
    password_hash: String,
    created_at: bson::DateTime,
}

impl AccountDocument {
    fn from_account(account: &Account) -> Self {
        Self {
            id: i64::from(account.id),
            username: account.username.clone(),
            password_hash: account.password_hash.clone(),
            created_at: bson::DateTime::from_millis(account.created_at.timestamp_millis()),
        }
    }

    fn into_account(self) -> AppResult<Account> {
        let id = AccountId::try_from(self.id)
            .map_err(|_| AppError::DatabaseError(format!("잘못된 계정 ID가 저장되어 있습니다: {}", self.id)))?;
        let created_at = Utc
            .timestamp_millis_opt(self.created_at.timestamp_millis())
            .single()
            .unwrap_or_else(Utc::now);

        Ok(Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            created_at,
        })
    }
}

/// MongoDB 기반 계정 저장소
pub struct MongoAccountRepository {
    db: Arc<Database>,
}

impl MongoAccountRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 저장소를 만들고 `username` 유니크 인덱스를 보장합니다.
    pub async fn initialize(db: Arc<Database>) -> AppResult<Self> {
        let repo = Self::new(db);
        repo.ensure_indexes().await?;
        Ok(repo)
    }

    fn accounts(&self) -> Collection<AccountDocument> {
        self.db.get_database().collection(ACCOUNTS_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.db.get_database().collection(COUNTERS_COLLECTION)
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        self.accounts()
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(format!("인덱스 생성 실패: {}", e)))?;

        log::info!("✅ accounts 컬렉션 인덱스 확인 완료");
        Ok(())
    }

    async fn next_id(&self) -> AppResult<AccountId> {
        let counter = self
            .counters()
            .find_one_and_update(
                doc! { "_id": ACCOUNT_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(format!("계정 ID 발급 실패: {}", e)))?
            .ok_or_else(|| AppError::DatabaseError("계정 ID 카운터가 없습니다".to_string()))?;

        let seq = counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("계정 ID 카운터 형식 오류: {}", e)))?;

        AccountId::try_from(seq)
            .map_err(|_| AppError::DatabaseError("계정 ID 공간이 소진되었습니다".to_string()))
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn insert(&self, account: NewAccount) -> AppResult<Account> {
        let username = account.username.clone();
        let id = self.next_id().await?;
        let account = account.into_account(id, Utc::now());

        self.accounts()
            .insert_one(AccountDocument::from_account(&account))
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(format!("사용자명이 이미 사용 중입니다: {}", username))
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        log::debug!("계정 저장 완료 - id: {}", account.id);
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Vec<Account>> {
        let documents: Vec<AccountDocument> = self
            .accounts()
            .find(doc! { "username": username })
            .limit(USERNAME_LOOKUP_LIMIT as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        documents.into_iter().map(AccountDocument::into_account).collect()
    }

    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>> {
        self.accounts()
            .find_one(doc! { "_id": i64::from(id) })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(AccountDocument::into_account)
            .transpose()
    }
}
