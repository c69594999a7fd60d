// 목적:
// - 도시 검색 대화형 셸을 제공한다.
//
// 설명:
// - 도시 이름 -> 반경 -> 노름 순서로 입력받아 검색 결과를 출력한다.
// - 잘못된 입력은 오류 메시지를 출력하고 다시 묻는다. 프로세스를 종료하지 않는다.
// - 종료 문자열(기본 "0") 또는 입력 종료(EOF)에서 루프를 끝낸다.
//
// 디자인 패턴:
// - 명시적 소유(Explicit Ownership): 셸은 전달받은 저장소만 읽는다.
//
// 참조:
// - src_rs/core/search_pipeline.rs

use std::io::{BufRead, Write};
use tracing::debug;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::metric::DistanceMetric;
use crate::core::point_store::PointStore;
use crate::core::search_pipeline::{count_north, query, QueryResult};

const CITY_PROMPT: &str = "도시 이름을 입력하세요 (종료하려면 종료 문자열 입력): ";
const RADIUS_PROMPT: &str = "검색 반경을 입력하세요: ";
const NORM_PROMPT: &str =
    "노름을 입력하세요 (0 - L2 유클리드, 1 - Linf 체비쇼프, 2 - L1 맨해튼): ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub queries_served: usize,
    pub rejected_inputs: usize,
}

/// 입력이 끝나거나 종료 문자열이 들어올 때까지 검색 루프를 실행한다.
pub fn run_session<R: BufRead, W: Write>(
    store: &PointStore,
    mut input: R,
    mut output: W,
    exit_sentinel: &str,
) -> CoreResult<SessionSummary> {
    let mut summary = SessionSummary::default();

    loop {
        let Some(city_name) = prompt(&mut input, &mut output, CITY_PROMPT)? else {
            break;
        };

        if city_name == exit_sentinel {
            writeln!(output, "종료합니다.")?;
            break;
        }

        let Some(city) = store.find_by_name(&city_name) else {
            writeln!(
                output,
                "오류: \"{}\" 도시를 목록에서 찾을 수 없습니다. 다시 시도하세요.",
                city_name
            )?;
            writeln!(output)?;
            summary.rejected_inputs += 1;
            continue;
        };
        let reference = city.coordinates();

        let Some(raw_radius) = prompt(&mut input, &mut output, RADIUS_PROMPT)? else {
            break;
        };
        let radius = match parse_radius(&raw_radius) {
            Ok(radius) => radius,
            Err(error) => {
                reject(&mut output, &error, &mut summary)?;
                continue;
            }
        };

        let Some(raw_norm) = prompt(&mut input, &mut output, NORM_PROMPT)? else {
            break;
        };
        let metric = match raw_norm.parse::<DistanceMetric>() {
            Ok(metric) => metric,
            Err(error) => {
                reject(&mut output, &error, &mut summary)?;
                continue;
            }
        };

        let results = query(store, reference, radius, metric)?;
        let north_count = count_north(&results, reference);
        write_results(&mut output, &results, north_count)?;
        writeln!(output)?;

        summary.queries_served += 1;
        debug!(city = %city_name, matched = results.len(), "셸 검색 처리");
    }

    output.flush()?;
    Ok(summary)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> CoreResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(Some(line.to_string()))
}

fn parse_radius(raw: &str) -> CoreResult<f64> {
    let radius = raw.trim().parse::<f64>().map_err(|_| {
        CoreError::InvalidArgument(format!("반경은 숫자여야 합니다: {}", raw))
    })?;

    if radius.is_nan() || radius < 0.0 {
        return Err(CoreError::InvalidArgument(format!(
            "반경은 0 이상이어야 합니다: {}",
            raw
        )));
    }
    Ok(radius)
}

fn reject<W: Write>(
    output: &mut W,
    error: &CoreError,
    summary: &mut SessionSummary,
) -> CoreResult<()> {
    writeln!(output, "{}", error)?;
    writeln!(output)?;
    summary.rejected_inputs += 1;
    Ok(())
}

/// 검색 결과를 순서대로 출력한다.
pub fn write_results<W: Write>(
    output: &mut W,
    results: &QueryResult,
    north_count: usize,
) -> CoreResult<()> {
    writeln!(output, "검색 결과:")?;
    writeln!(output, "반경 안에서 {}개 도시를 찾았습니다.", results.len())?;
    writeln!(
        output,
        "{}개 도시가 선택한 도시의 북쪽에 있습니다.",
        north_count
    )?;
    writeln!(output, "도시 목록:")?;
    for matched in results {
        writeln!(output, "{} ({:.3})", matched.point.name, matched.distance)?;
    }
    Ok(())
}
