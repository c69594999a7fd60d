use rstest::rstest;

use city_search::core::errors::CoreError;
use city_search::core::metric::{l1_distance, l2_distance, linf_distance, DistanceMetric};

#[rstest]
#[case(DistanceMetric::L2, 5.0)]
#[case(DistanceMetric::LInf, 4.0)]
#[case(DistanceMetric::L1, 7.0)]
fn distance_from_origin_to_three_four(#[case] metric: DistanceMetric, #[case] expected: f64) {
    assert_eq!(metric.distance(0.0, 0.0, 3.0, 4.0), expected);
    assert_eq!(metric.distance(3.0, 4.0, 0.0, 0.0), expected);
}

#[rstest]
fn identical_points_are_exactly_zero(
    #[values(DistanceMetric::L2, DistanceMetric::LInf, DistanceMetric::L1)] metric: DistanceMetric,
) {
    assert_eq!(metric.distance(-7.25, 13.5, -7.25, 13.5), 0.0);
}

#[test]
fn free_functions_match_dispatch() {
    assert_eq!(l2_distance(1.0, 1.0, 4.0, 5.0), 5.0);
    assert_eq!(linf_distance(-1.0, 2.0, 3.0, -4.0), 6.0);
    assert_eq!(l1_distance(-1.0, 2.0, 3.0, -4.0), 10.0);
}

#[rstest]
#[case(0, DistanceMetric::L2)]
#[case(1, DistanceMetric::LInf)]
#[case(2, DistanceMetric::L1)]
fn tags_map_to_metrics(#[case] tag: i64, #[case] expected: DistanceMetric) {
    let metric = DistanceMetric::try_from(tag).unwrap();
    assert_eq!(metric, expected);
    assert_eq!(metric.tag(), tag);
}

#[rstest]
#[case(-1)]
#[case(3)]
#[case(i64::MAX)]
fn out_of_range_tag_is_invalid_argument(#[case] tag: i64) {
    let error = DistanceMetric::try_from(tag).unwrap_err();
    assert!(matches!(error, CoreError::InvalidArgument(_)));
}

#[rstest]
#[case("0", DistanceMetric::L2)]
#[case("Euclidean", DistanceMetric::L2)]
#[case(" linf ", DistanceMetric::LInf)]
#[case("chebyshev", DistanceMetric::LInf)]
#[case("2", DistanceMetric::L1)]
#[case("MANHATTAN", DistanceMetric::L1)]
fn metric_from_str(#[case] raw: &str, #[case] expected: DistanceMetric) {
    assert_eq!(raw.parse::<DistanceMetric>().unwrap(), expected);
}

#[rstest]
#[case("7")]
#[case("cosine")]
#[case("")]
fn unknown_metric_text_is_rejected(#[case] raw: &str) {
    assert!(matches!(
        raw.parse::<DistanceMetric>(),
        Err(CoreError::InvalidArgument(_))
    ));
}

#[test]
fn l2_does_not_overflow_for_large_finite_coordinates() {
    let distance = l2_distance(0.0, 0.0, 1e200, 1e200);

    assert!(distance.is_finite());
    let expected = 1e200 * std::f64::consts::SQRT_2;
    assert!((distance - expected).abs() <= expected * 1e-12);
}
