// 목적:
// - 실행 파일 계층 모듈을 선언한다.
//
// 설명:
// - 인자 해석, 로그 초기화, 대화형 셸을 분리한다. 코어 의미는 추가하지 않는다.
//
// 참조:
// - src_rs/bin/city_search.rs

pub mod args;
pub mod logging;
pub mod shell;
