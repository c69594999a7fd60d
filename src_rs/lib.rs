#![allow(non_local_definitions)]

// 목적:
// - City Search Rust 모듈의 진입점을 제공한다.
//
// 설명:
// - 코어(적재/거리/검색)는 의존성 없는 순수 Rust 계층이다.
// - Python 바인딩은 `python` 기능에서만 노출하고, 실행 파일은 cli 계층을 사용한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/cli/core).
//
// 참조:
// - src_rs/core/search_pipeline.rs
// - src_rs/api/search_bridge.rs

pub mod api;
pub mod cli;
pub mod core;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn city_search(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<api::search_bridge::PyCitySearchBridge>()?;
    Ok(())
}
