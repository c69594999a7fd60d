// 목적:
// - 적재된 도시 레코드를 메모리에 보관하는 저장소를 제공한다.
//
// 설명:
// - 적재는 한 번만 수행되고, 이후에는 읽기 전용 뷰와 이름 조회만 노출한다.
// - 삽입 순서(원본 파일 순서)를 그대로 유지한다.
// - 중복 이름은 거부하지 않지만, 이름 조회가 첫 번째 레코드로 해석되므로 경고 로그를 남긴다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/core/ingestion_pipeline.rs
// - src_rs/core/search_pipeline.rs

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{info, warn};

use crate::core::errors::{CoreError, CoreResult};
use crate::core::ingestion_pipeline::parse_records;
use crate::core::point::Point;

#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// 줄 시퀀스에서 저장소를 만든다. 실패 시 부분 결과는 남지 않는다.
    pub fn ingest<I, S>(lines: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let points = parse_records(lines)?;
        let store = Self { points };
        store.warn_on_duplicates();
        Ok(store)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> CoreResult<Self> {
        let mut lines = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            match line {
                Ok(line) => lines.push(line),
                Err(error) if error.kind() == ErrorKind::InvalidData => {
                    return Err(CoreError::format(
                        index + 1,
                        format!("UTF-8로 해석할 수 없는 줄입니다: {}", error),
                    ));
                }
                Err(error) => {
                    return Err(CoreError::Io(format!("원본 줄 읽기 실패: {}", error)));
                }
            }
        }
        Self::ingest(lines)
    }

    /// 파일 경로에서 도시 데이터를 적재한다.
    pub fn load_from_path(path: &Path) -> CoreResult<Self> {
        let file = File::open(path).map_err(|error| {
            CoreError::Io(format!("파일 열기 실패: path={}, error={}", path.display(), error))
        })?;
        let store = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), point_count = store.len(), "도시 데이터 적재 완료");
        Ok(store)
    }

    /// 저장된 도시의 읽기 전용 뷰를 반환한다.
    pub fn snapshot(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 이름이 정확히 일치하는 첫 번째 도시를 찾는다.
    pub fn find_by_name(&self, name: &str) -> Option<&Point> {
        self.points.iter().find(|point| point.name == name)
    }

    /// 두 번 이상 나타나는 이름을 중복이 발견된 순서대로 반환한다.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::<&str>::new();
        let mut reported = HashSet::<&str>::new();
        let mut duplicates = Vec::new();

        for point in &self.points {
            let name = point.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    fn warn_on_duplicates(&self) {
        let duplicates = self.duplicate_names();
        if !duplicates.is_empty() {
            warn!(
                duplicates = ?duplicates,
                "중복된 도시 이름이 있습니다. 이름 조회는 첫 번째 레코드로 해석됩니다"
            );
        }
    }
}
