// 목적:
// - 실행 설정(JSON)을 정의하고 적재한다.
//
// 설명:
// - 모든 필드는 생략 가능하며 기본값을 가진다.
// - CLI 인자는 설정 파일 값을 덮어쓴다.
//
// 참조:
// - src_rs/cli/args.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{CoreError, CoreResult};

pub const DEFAULT_DATA_PATH: &str = "data.txt";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_EXIT_SENTINEL: &str = "0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitySearchConfig {
    pub data_path: PathBuf,
    pub log_level: String,
    pub exit_sentinel: String,
}

impl Default for CitySearchConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            exit_sentinel: DEFAULT_EXIT_SENTINEL.to_string(),
        }
    }
}

impl CitySearchConfig {
    /// JSON 설정 파일을 읽고 검증한다.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = fs::read_to_string(path).map_err(|error| {
            CoreError::Io(format!(
                "설정 파일 읽기 실패: path={}, error={}",
                path.display(),
                error
            ))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|error| {
            CoreError::Serialization(format!("설정 JSON 파싱에 실패했습니다: {}", error))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(CoreError::InvalidConfig(
                "data_path는 비어 있을 수 없습니다".to_string(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "log_level은 비어 있을 수 없습니다".to_string(),
            ));
        }

        if self.exit_sentinel.is_empty() {
            return Err(CoreError::InvalidConfig(
                "exit_sentinel은 비어 있을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }
}
