// 목적:
// - Python FFI 경계 모듈을 선언한다.
//
// 설명:
// - `python` 기능이 켜진 경우에만 컴파일된다.
//
// 참조:
// - src_rs/api/search_bridge.rs

#[cfg(feature = "python")]
pub mod search_bridge;
