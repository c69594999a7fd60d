// 목적:
// - 평면 위의 이름 붙은 점(도시)과 좌표 값을 정의한다.
//
// 설명:
// - 점은 적재 이후 변경되지 않는 값 타입이며, 거리 키를 보관하지 않는다.
//
// 참조:
// - src_rs/core/point_store.rs

use serde::{Deserialize, Serialize};

/// 질의 기준점으로 쓰이는 2차원 좌표다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 이름과 좌표를 가진 도시 레코드다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.x, self.y)
    }
}
