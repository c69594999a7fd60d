// 목적:
// - tracing 구독자를 초기화한다.
//
// 설명:
// - RUST_LOG가 있으면 우선하고, 없으면 설정된 레벨을 쓴다.
// - 표준 출력은 검색 결과 전용이므로 로그는 stderr로 보낸다.

use tracing_subscriber::EnvFilter;

use crate::core::errors::{CoreError, CoreResult};

pub fn init_tracing(level: &str) -> CoreResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|error| {
            CoreError::InvalidConfig(format!("log_level 해석 실패: {}, error={}", level, error))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| CoreError::InvalidConfig(format!("로그 초기화 실패: {}", error)))
}
