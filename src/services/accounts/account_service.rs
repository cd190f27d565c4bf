//! # 계정 백엔드 로직
//!
//! 영속 저장소와 자격 증명 검사를 소유하는 백엔드 계층의 비즈니스 규칙입니다.
//! 노출되는 연산은 생성, 자격 증명 검증, ID 조회 세 가지뿐이며 수정/삭제는 없습니다.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        AccountService        │
//! │ • create_account             │
//! │ • verify_credentials         │
//! │ • fetch_by_id                │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  dyn AccountRepository       │
//! │  (MongoDB | In-memory)       │
//! └──────────────────────────────┘
//! ```
//!
//! ## 보안
//!
//! - 비밀번호는 bcrypt로 해싱하여 저장하고, 검증 시 해시를 비교합니다.
//! - 존재하지 않는 사용자명과 틀린 비밀번호는 같은 에러 문구로 응답합니다.

use std::sync::Arc;
use std::time::Instant;

use bcrypt::BcryptError;

use crate::domain::dto::rpc::UserRequest;
use crate::domain::entities::accounts::{Account, AccountId, NewAccount};
use crate::errors::{AppError, AppResult};
use crate::repositories::AccountRepository;

const INVALID_CREDENTIALS: &str = "잘못된 사용자명 또는 비밀번호입니다";
const PASSWORD_TOO_LONG: &str = "비밀번호는 72바이트 이하여야 합니다";

/// 계정 관리 비즈니스 로직 서비스
///
/// 저장소와 bcrypt cost를 생성자로 주입받습니다.
///
/// ```rust,ignore
/// let repo = Arc::new(InMemoryAccountRepository::new());
/// let service = AccountService::new(repo, PasswordConfig::bcrypt_cost());
///
/// let account = service.create_account(UserRequest {
///     username: "alice".to_string(),
///     password: "pw1".to_string(),
/// }).await?;
/// assert_eq!(account.id, 1);
/// ```
pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepository>, bcrypt_cost: u32) -> Self {
        Self { repo, bcrypt_cost }
    }

    /// 새 계정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 사용자명 또는 비밀번호가 비어 있거나 비밀번호가 72바이트 초과
    /// * `AppError::ConflictError` - 사용자명 중복
    /// * `AppError::DatabaseError` - 저장소 오류
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn create_account(&self, request: UserRequest) -> AppResult<Account> {
        let start_time = Instant::now();
        ensure_credentials_present(&request)?;

        let hash_start = Instant::now();
        let password_hash = bcrypt::non_truncating_hash(&request.password, self.bcrypt_cost)
            .map_err(|e| match e {
                BcryptError::Truncation(_) => {
                    AppError::ValidationError(PASSWORD_TOO_LONG.to_string())
                }
                other => AppError::InternalError(format!("비밀번호 해싱 실패: {}", other)),
            })?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let account = self
            .repo
            .insert(NewAccount::new(request.username, password_hash))
            .await?;

        log::info!(
            "계정 생성 완료 - id: {}, username: {} ({:?})",
            account.id,
            account.username,
            start_time.elapsed()
        );
        Ok(account)
    }

    /// 사용자명과 비밀번호가 모두 일치하는 유일한 계정을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 일치하는 계정이 없거나, 둘 이상이거나, 비밀번호 불일치
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn verify_credentials(&self, request: UserRequest) -> AppResult<Account> {
        let mut matches = self.repo.find_by_username(&request.username).await?;

        let account = match matches.len() {
            0 => {
                log::warn!("로그인 실패 - 존재하지 않는 사용자명: {}", request.username);
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
            1 => matches.remove(0),
            _ => {
                log::error!("로그인 실패 - 사용자명 중복 레코드: {}", request.username);
                return Err(AppError::AuthenticationError(
                    "계정을 특정할 수 없습니다".to_string(),
                ));
            }
        };

        let verify_start = Instant::now();
        let is_valid = match bcrypt::non_truncating_verify(&request.password, &account.password_hash) {
            Ok(valid) => valid,
            Err(BcryptError::Truncation(_)) => false,
            Err(e) => {
                return Err(AppError::InternalError(format!("비밀번호 검증 실패: {}", e)));
            }
        };
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", request.username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(account)
    }

    /// ID로 계정을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 계정 없음
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn fetch_by_id(&self, id: AccountId) -> AppResult<Account> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", id)))
    }
}

fn ensure_credentials_present(request: &UserRequest) -> AppResult<()> {
    if request.username.trim().is_empty() {
        return Err(AppError::ValidationError("사용자명을 입력해주세요".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::ValidationError("비밀번호를 입력해주세요".to_string()));
    }
    Ok(())
}
