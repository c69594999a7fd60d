// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 적재 형식/인자/설정/입출력/직렬화 오류를 명시적으로 구분한다.
// - 도시 이름 미발견은 조회 함수에서는 None이지만, 페이로드 파이프라인에서는 NotFound로 승격된다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/ingestion_pipeline.rs
// - src_rs/core/search_pipeline.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("적재 데이터 형식이 올바르지 않습니다 (line {line}): {message}")]
    Format { line: usize, message: String },
    #[error("인자값이 유효하지 않습니다: {0}")]
    InvalidArgument(String),
    #[error("도시를 찾을 수 없습니다: {0}")]
    NotFound(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("입출력 작업에 실패했습니다: {0}")]
    Io(String),
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
}

impl CoreError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
