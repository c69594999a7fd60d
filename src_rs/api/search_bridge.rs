// 목적:
// - Python에서 호출 가능한 도시 검색 브릿지 클래스를 제공한다.
//
// 설명:
// - 생성 시 도시 데이터를 한 번 적재하고, 이후 JSON 페이로드로 검색을 실행한다.
// - 결과는 JSON 문자열로 반환한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/search_pipeline.rs

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use std::path::Path;

use crate::core::point::Point;
use crate::core::point_store::PointStore;
use crate::core::search_pipeline::{execute_search, SearchRequestPayload};

/// Python에 노출되는 검색 브릿지 클래스다.
#[pyclass(name = "CitySearchBridge")]
pub struct PyCitySearchBridge {
    data_path: String,
    store: PointStore,
}

#[pymethods]
impl PyCitySearchBridge {
    /// 도시 데이터 파일을 적재해 브릿지 객체를 생성한다.
    #[new]
    pub fn new(data_path: String) -> PyResult<Self> {
        let store = PointStore::load_from_path(Path::new(&data_path))
            .map_err(|error| PyRuntimeError::new_err(error.to_string()))?;
        Ok(Self { data_path, store })
    }

    /// 적재 상태 정보를 반환한다.
    pub fn status(&self) -> String {
        format!("loaded: path={}, points={}", self.data_path, self.store.len())
    }

    pub fn __len__(&self) -> usize {
        self.store.len()
    }

    /// 이름으로 도시 좌표를 찾는다. 없으면 None이다.
    pub fn find(&self, name: &str) -> Option<(f64, f64)> {
        self.store
            .find_by_name(name)
            .map(Point::coordinates)
            .map(|coordinates| (coordinates.x, coordinates.y))
    }

    /// 검색 페이로드(JSON)를 실행하고 결과 JSON을 반환한다.
    pub fn execute(&self, payload_json: &str) -> PyResult<String> {
        let payload: SearchRequestPayload = serde_json::from_str(payload_json).map_err(|error| {
            PyRuntimeError::new_err(format!(
                "검색 페이로드 JSON 파싱에 실패했습니다: {}",
                error
            ))
        })?;

        let result = execute_search(&self.store, &payload)
            .map_err(|error| PyRuntimeError::new_err(error.to_string()))?;

        serde_json::to_string(&result)
            .map_err(|error| PyRuntimeError::new_err(format!("검색 결과 직렬화 실패: {}", error)))
    }
}
