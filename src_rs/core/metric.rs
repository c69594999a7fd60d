// 목적:
// - 세 가지 거리 노름(L2, L∞, L1)을 제공한다.
//
// 설명:
// - 노름은 닫힌 열거형으로 표현하고 match로 순수 함수에 분기한다.
// - 정수 태그는 0=L2, 1=L∞, 2=L1 규약을 따른다.
//
// 디자인 패턴:
// - 태그 기반 전략(Strategy via Tagged Variant).
//
// 참조:
// - src_rs/core/search_pipeline.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::{CoreError, CoreResult};

/// 질의에 사용할 거리 노름이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    L2,
    LInf,
    L1,
}

impl DistanceMetric {
    pub const ALL: [DistanceMetric; 3] = [Self::L2, Self::LInf, Self::L1];

    /// 두 점 사이의 거리를 계산한다.
    pub fn distance(self, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
        match self {
            Self::L2 => l2_distance(x0, y0, x1, y1),
            Self::LInf => linf_distance(x0, y0, x1, y1),
            Self::L1 => l1_distance(x0, y0, x1, y1),
        }
    }

    pub fn tag(self) -> i64 {
        match self {
            Self::L2 => 0,
            Self::LInf => 1,
            Self::L1 => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::L2 => "L2 (Euclidean)",
            Self::LInf => "Linf (Chebyshev)",
            Self::L1 => "L1 (Manhattan)",
        }
    }
}

impl TryFrom<i64> for DistanceMetric {
    type Error = CoreError;

    fn try_from(tag: i64) -> CoreResult<Self> {
        match tag {
            0 => Ok(Self::L2),
            1 => Ok(Self::LInf),
            2 => Ok(Self::L1),
            _ => Err(CoreError::InvalidArgument(format!(
                "norm은 0, 1, 2 중 하나여야 합니다: {}",
                tag
            ))),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = CoreError;

    fn from_str(value: &str) -> CoreResult<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "l2" | "euclidean" => Ok(Self::L2),
            "linf" | "chebyshev" => Ok(Self::LInf),
            "l1" | "manhattan" => Ok(Self::L1),
            other => {
                let tag = other.parse::<i64>().map_err(|_| {
                    CoreError::InvalidArgument(format!("지원하지 않는 norm입니다: {}", value))
                })?;
                Self::try_from(tag)
            }
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 유클리드 거리(L2 노름).
pub fn l2_distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    // hypot는 제곱합 단계의 오버플로 없이 sqrt(dx^2 + dy^2)를 계산한다.
    (x0 - x1).hypot(y0 - y1)
}

/// 체비쇼프 거리(L∞ 노름).
pub fn linf_distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (x0 - x1).abs().max((y0 - y1).abs())
}

/// 맨해튼 거리(L1 노름).
pub fn l1_distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (x0 - x1).abs() + (y0 - y1).abs()
}
