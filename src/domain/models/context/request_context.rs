//! 요청 단위 실행 컨텍스트
//!
//! 게이트웨이 로직의 각 연산은 이 컨텍스트를 받아 데드라인을 원격 호출까지 전파합니다.

use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

/// 요청 ID와 데드라인을 담는 컨텍스트
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
    deadline: Instant,
}

impl RequestContext {
    /// 지금부터 `timeout` 뒤를 데드라인으로 하는 컨텍스트를 만듭니다.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            deadline: Instant::now() + timeout,
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// 데드라인까지 남은 시간 (이미 지났으면 0)
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}
