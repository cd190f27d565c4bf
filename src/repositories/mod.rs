//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 백엔드 로직은 [`AccountRepository`] trait에만 의존하며,
//! 실제 저장소는 실행 시 설정으로 선택됩니다.
//!
//! - [`accounts::mongo_repo::MongoAccountRepository`] - MongoDB `accounts` 컬렉션
//! - [`accounts::memory_repo::InMemoryAccountRepository`] - 프로세스 메모리 (테스트, 단일 프로세스)
//!
//! 각 메서드는 저장소에 대한 단일 원자적 읽기 또는 쓰기로 실행됩니다.

use async_trait::async_trait;

use crate::domain::entities::accounts::{Account, AccountId, NewAccount};
use crate::errors::AppResult;

pub mod accounts;

/// 사용자명 조회 시 가져오는 최대 레코드 수
///
/// 2개를 가져오면 "정확히 하나"인지 "모호함"인지 구분할 수 있습니다.
pub const USERNAME_LOOKUP_LIMIT: usize = 2;

/// 계정 저장소 인터페이스
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// 새 ID를 부여하여 계정을 삽입합니다.
    ///
    /// 사용자명이 이미 있으면 `ConflictError`, 저장소 오류는 `DatabaseError`
    async fn insert(&self, account: NewAccount) -> AppResult<Account>;

    /// 사용자명이 정확히 일치하는 계정을 최대 [`USERNAME_LOOKUP_LIMIT`]개 조회합니다.
    async fn find_by_username(&self, username: &str) -> AppResult<Vec<Account>>;

    /// ID로 계정을 조회합니다.
    async fn find_by_id(&self, id: AccountId) -> AppResult<Option<Account>>;
}
