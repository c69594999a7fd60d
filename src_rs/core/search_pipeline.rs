// 목적:
// - 반경 검색과 방향 집계, 그리고 페이로드 기반 검색 파이프라인을 실행한다.
//
// 설명:
// - 전체 스캔 -> 노름 거리 계산 -> 반경 필터 -> 거리 오름차순 안정 정렬 순서로 처리한다.
// - 같은 거리는 저장소 삽입 순서를 유지한다.
// - "북쪽"은 y가 감소하는 방향이며, 기준점보다 y가 엄격히 작은 결과만 센다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline).
//
// 참조:
// - src_rs/core/point_store.rs
// - src_rs/core/metric.rs

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::core::errors::{CoreError, CoreResult};
use crate::core::metric::DistanceMetric;
use crate::core::point::{Coordinates, Point};
use crate::core::point_store::PointStore;

/// 검색 결과의 한 원소다.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    pub distance: f64,
    pub point: Point,
}

/// 거리 오름차순으로 정렬된 검색 결과다. 저장소와 독립적으로 호출자가 소유한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    matches: Vec<SearchMatch>,
}

impl QueryResult {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchMatch> {
        self.matches.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.matches
            .iter()
            .map(|matched| matched.point.name.as_str())
            .collect()
    }

    pub fn into_matches(self) -> Vec<SearchMatch> {
        self.matches
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a SearchMatch;
    type IntoIter = std::slice::Iter<'a, SearchMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// 기준점에서 반경 이내의 도시를 거리 오름차순으로 반환한다.
pub fn query(
    store: &PointStore,
    reference: Coordinates,
    radius: f64,
    metric: DistanceMetric,
) -> CoreResult<QueryResult> {
    validate_radius(radius)?;

    let mut matches = store
        .snapshot()
        .iter()
        .filter_map(|point| {
            let distance = metric.distance(reference.x, reference.y, point.x, point.y);
            (distance <= radius).then(|| SearchMatch {
                distance,
                point: point.clone(),
            })
        })
        .collect::<Vec<_>>();

    // sort_by는 안정 정렬이므로 동일 거리에서 삽입 순서가 유지된다.
    matches.sort_by(|left, right| left.distance.total_cmp(&right.distance));

    debug!(
        metric = %metric,
        radius,
        scanned = store.len(),
        matched = matches.len(),
        "반경 검색 완료"
    );

    Ok(QueryResult { matches })
}

/// 결과 중 기준점보다 북쪽(y가 더 작은)에 있는 도시 수를 센다.
pub fn count_north(results: &QueryResult, reference: Coordinates) -> usize {
    results
        .iter()
        .filter(|matched| matched.point.y < reference.y)
        .count()
}

fn validate_radius(radius: f64) -> CoreResult<()> {
    if radius.is_nan() || radius < 0.0 {
        return Err(CoreError::InvalidArgument(format!(
            "radius는 0 이상이어야 합니다: {}",
            radius
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequestPayload {
    pub city: String,
    pub radius: f64,
    pub norm: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatchPayload {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMetricsPayload {
    pub scanned_count: usize,
    pub matched_count: usize,
    pub north_count: usize,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultPayload {
    pub city: String,
    pub metric: DistanceMetric,
    pub reference: Coordinates,
    pub matches: Vec<SearchMatchPayload>,
    pub metrics: SearchMetricsPayload,
}

/// 검색 페이로드를 실행한다.
pub fn execute_search(
    store: &PointStore,
    payload: &SearchRequestPayload,
) -> CoreResult<SearchResultPayload> {
    validate_payload(payload)?;
    let metric = DistanceMetric::try_from(payload.norm)?;

    let started = Instant::now();
    let reference = store
        .find_by_name(&payload.city)
        .map(Point::coordinates)
        .ok_or_else(|| CoreError::NotFound(payload.city.clone()))?;

    let results = query(store, reference, payload.radius, metric)?;
    let north_count = count_north(&results, reference);

    let metrics = SearchMetricsPayload {
        scanned_count: store.len(),
        matched_count: results.len(),
        north_count,
        elapsed_ms: started.elapsed().as_millis(),
    };
    info!(
        city = %payload.city,
        matched = metrics.matched_count,
        north = metrics.north_count,
        "검색 페이로드 처리 완료"
    );

    let matches = results
        .into_matches()
        .into_iter()
        .map(|matched| SearchMatchPayload {
            name: matched.point.name,
            x: matched.point.x,
            y: matched.point.y,
            distance: matched.distance,
        })
        .collect();

    Ok(SearchResultPayload {
        city: payload.city.clone(),
        metric,
        reference,
        matches,
        metrics,
    })
}

fn validate_payload(payload: &SearchRequestPayload) -> CoreResult<()> {
    if payload.city.is_empty() {
        return Err(CoreError::InvalidArgument(
            "city는 비어 있을 수 없습니다".to_string(),
        ));
    }

    validate_radius(payload.radius)
}
