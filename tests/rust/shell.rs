use rstest::{fixture, rstest};
use std::io::Cursor;

use city_search::cli::shell::{run_session, SessionSummary};
use city_search::core::point_store::PointStore;

use crate::{nordic_lines, store_from};

#[fixture]
fn nordic() -> PointStore {
    store_from(&nordic_lines())
}

fn drive(store: &PointStore, script: &str) -> (SessionSummary, String) {
    let mut output = Vec::new();
    let summary = run_session(store, Cursor::new(script.to_string()), &mut output, "0").unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[rstest]
fn serves_query_and_prints_in_order(nordic: PointStore) {
    let (summary, output) = drive(&nordic, "Oslo\n5\n0\n0\n");

    assert_eq!(
        summary,
        SessionSummary {
            queries_served: 1,
            rejected_inputs: 0
        }
    );
    assert!(output.contains("반경 안에서 3개 도시를 찾았습니다."));
    assert!(output.contains("0개 도시가 선택한 도시의 북쪽에 있습니다."));

    let oslo = output.find("Oslo (0.000)").unwrap();
    let stavanger = output.find("Stavanger (2.236)").unwrap();
    let bergen = output.find("Bergen (5.000)").unwrap();
    assert!(oslo < stavanger && stavanger < bergen);
    assert!(output.ends_with("종료합니다.\n"));
}

#[rstest]
fn unknown_city_reprompts(nordic: PointStore) {
    let (summary, output) = drive(&nordic, "Tromso\nBergen\n1\n2\n0\n");

    assert!(output.contains("\"Tromso\" 도시를 목록에서 찾을 수 없습니다"));
    assert_eq!(summary.rejected_inputs, 1);
    assert_eq!(summary.queries_served, 1);
    assert!(output.contains("반경 안에서 1개 도시를 찾았습니다."));
}

#[rstest]
#[case("Oslo\n-1\n0\n")]
#[case("Oslo\nfar\n0\n")]
#[case("Oslo\n5\n7\n0\n")]
fn invalid_radius_or_norm_is_rejected_without_exit(nordic: PointStore, #[case] script: &str) {
    let (summary, output) = drive(&nordic, script);

    assert_eq!(summary.queries_served, 0);
    assert_eq!(summary.rejected_inputs, 1);
    assert!(output.contains("인자값이 유효하지 않습니다"));
    assert!(output.ends_with("종료합니다.\n"));
}

#[rstest]
fn end_of_input_ends_session(nordic: PointStore) {
    let (summary, output) = drive(&nordic, "Stavanger\n3\n");

    assert_eq!(summary, SessionSummary::default());
    assert!(!output.contains("종료합니다."));
}

#[rstest]
fn crlf_input_is_trimmed(nordic: PointStore) {
    let (summary, output) = drive(&nordic, "Stavanger\r\n3\r\nlinf\r\n0\r\n");

    assert_eq!(summary.queries_served, 1);
    assert!(output.contains("1개 도시가 선택한 도시의 북쪽에 있습니다."));
}
