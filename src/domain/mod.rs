//! # Domain Layer
//!
//! 계정 서비스의 도메인 타입을 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장소 레코드 (Account)
//! ├── dto/        ← 외부 요청/응답, RPC 메시지, 응답 봉투
//! └── models/     ← 토큰 페이로드, 요청 컨텍스트
//! ```
//!
//! ## 생명주기
//!
//! - `Account`: 계정 생성 시 백엔드가 한 번 만들고, 로그인/조회에서는 읽기만 합니다.
//! - `TokenPayload`: 로그인 성공마다 만들어지며 저장되지 않습니다.
//!   검증은 서명과 만료 시각만으로 수행되고 서버 측 세션 상태는 없습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::accounts;
pub use models::token;

