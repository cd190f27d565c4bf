//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! - [`accounts`] - 백엔드: 계정 생성, 자격 증명 검증, ID 조회
//! - [`auth`] - 상태 없는 세션 토큰 발급/검증
//! - [`gateway`] - 게이트웨이: 입력 검증, 원격 호출 위임, 결과 변환
//!
//! 서비스 간 의존성은 생성자로 명시적으로 주입됩니다.
//!
//! ```rust,ignore
//! let service = Arc::new(AccountService::new(repo, PasswordConfig::bcrypt_cost()));
//! let gateway = AccountGateway::new(
//!     Arc::new(LocalUserRpc::new(service)),
//!     JwtConfig::secret(),
//!     JwtConfig::expiration_seconds(),
//!     UserRpcConfig::timeout(),
//! );
//! ```

pub mod accounts;
pub mod auth;
pub mod gateway;
