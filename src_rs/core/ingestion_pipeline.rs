// 목적:
// - 줄 단위 텍스트 원본을 도시 레코드로 변환한다.
//
// 설명:
// - 레코드 하나는 정확히 두 줄(이름, "<x>-<y>")이다.
// - 음수 좌표의 부호와 구분자를 구분하기 위해, 양쪽이 모두 실수로 해석되는 '-' 위치를 찾는다.
// - 실패 시 줄 번호(1부터)를 담은 Format 오류를 반환하고, 부분 결과는 버린다.
//
// 디자인 패턴:
// - 실패 빠르게(Fail Fast) + 전부 아니면 전무(All-or-Nothing).
//
// 참조:
// - src_rs/core/point_store.rs

use tracing::debug;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::point::{Coordinates, Point};

const COORDINATE_SEPARATOR: char = '-';

/// 줄 시퀀스를 도시 레코드 목록으로 해석한다.
pub fn parse_records<I, S>(lines: I) -> CoreResult<Vec<Point>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut points = Vec::new();
    let mut pending_name: Option<(usize, String)> = None;

    for (index, raw_line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let line = strip_line_ending(raw_line.as_ref());

        match pending_name.take() {
            None => {
                if line.trim().is_empty() {
                    return Err(CoreError::format(line_no, "도시 이름은 비어 있을 수 없습니다"));
                }
                pending_name = Some((line_no, line.to_string()));
            }
            Some((_, name)) => {
                let coordinates = parse_coordinates(line, line_no)?;
                points.push(Point::new(name, coordinates.x, coordinates.y));
            }
        }
    }

    if let Some((line_no, name)) = pending_name {
        return Err(CoreError::format(
            line_no,
            format!("'{}' 레코드에 좌표 줄이 없습니다 (불완전한 레코드)", name),
        ));
    }

    debug!(record_count = points.len(), "도시 레코드 해석 완료");
    Ok(points)
}

/// "<x>-<y>" 형식의 좌표 줄을 해석한다.
pub fn parse_coordinates(line: &str, line_no: usize) -> CoreResult<Coordinates> {
    let line = strip_line_ending(line);
    let mut saw_separator = false;

    for (split_at, _) in line.match_indices(COORDINATE_SEPARATOR) {
        // 맨 앞의 '-'는 x의 부호다.
        if line[..split_at].trim().is_empty() {
            continue;
        }
        saw_separator = true;

        let left = parse_finite(&line[..split_at]);
        let right = parse_finite(&line[split_at + COORDINATE_SEPARATOR.len_utf8()..]);
        if let (Some(x), Some(y)) = (left, right) {
            return Ok(Coordinates::new(x, y));
        }
    }

    if !saw_separator {
        return Err(CoreError::format(
            line_no,
            format!("좌표 구분자('-')가 없습니다: '{}'", line),
        ));
    }

    Err(CoreError::format(
        line_no,
        format!("좌표를 두 개의 유한한 실수로 해석할 수 없습니다: '{}'", line),
    ))
}

fn parse_finite(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
