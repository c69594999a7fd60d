// 목적:
// - city-search 실행 파일의 명령행 인자를 정의한다.
//
// 설명:
// - --city가 주어지면 단발 검색(JSON 출력), 없으면 대화형 셸을 실행한다.
// - 인자는 설정 파일 값을 덮어쓴다.
//
// 참조:
// - src_rs/core/config.rs
// - src_rs/bin/city_search.rs

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::CitySearchConfig;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::metric::DistanceMetric;
use crate::core::search_pipeline::SearchRequestPayload;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "city-search",
    version,
    about = "반경 안의 도시를 거리 순으로 찾고 북쪽 도시 수를 센다"
)]
pub struct CliArgs {
    /// JSON 설정 파일 경로
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 도시 데이터 파일 경로 (설정의 data_path를 덮어씀)
    #[arg(short = 'd', long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(short = 'l', long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// 단발 검색 기준 도시 이름
    #[arg(long, value_name = "NAME")]
    pub city: Option<String>,

    /// 단발 검색 반경
    #[arg(long, value_name = "RADIUS", requires = "city", allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// 거리 노름 (0|l2, 1|linf, 2|l1)
    #[arg(long, value_name = "NORM", default_value = "0", value_parser = parse_metric)]
    pub norm: DistanceMetric,
}

impl CliArgs {
    /// 설정 파일(있다면)을 읽고 인자 값으로 덮어쓴다.
    pub fn resolve_config(&self) -> CoreResult<CitySearchConfig> {
        let mut config = match &self.config {
            Some(path) => CitySearchConfig::load(path)?,
            None => CitySearchConfig::default(),
        };

        if let Some(data) = &self.data {
            config.data_path = data.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// 단발 검색 요청을 만든다. --city가 없으면 None이다.
    pub fn one_shot_request(&self) -> CoreResult<Option<SearchRequestPayload>> {
        let Some(city) = &self.city else {
            return Ok(None);
        };

        let radius = self.radius.ok_or_else(|| {
            CoreError::InvalidArgument("--city에는 --radius가 필요합니다".to_string())
        })?;

        Ok(Some(SearchRequestPayload {
            city: city.clone(),
            radius,
            norm: self.norm.tag(),
        }))
    }
}

fn parse_metric(value: &str) -> CoreResult<DistanceMetric> {
    value.parse()
}
