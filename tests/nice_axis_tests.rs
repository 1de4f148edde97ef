use approx::assert_relative_eq;
use linechart_rs::core::{SeriesPoint, build_scales, nice_axis_spec};

fn weekly_values() -> Vec<f64> {
    vec![13.0, 5.0, 3.0, 7.0, 5.0, 2.0, 4.0]
}

#[test]
fn weekly_series_snaps_to_five_step() {
    let spec = nice_axis_spec(&weekly_values()).expect("axis spec");

    assert_eq!(spec.tick_count, 4);
    assert_relative_eq!(spec.step, 5.0);
    assert_relative_eq!(spec.min, 0.0);
    assert_relative_eq!(spec.max, 20.0);
    assert_eq!(spec.below_zero_ticks, 0);
}

#[test]
fn weekly_series_tick_values_are_round() {
    let spec = nice_axis_spec(&weekly_values()).expect("axis spec");
    assert_eq!(spec.tick_values(), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
}

#[test]
fn negative_minimum_is_covered_by_whole_steps() {
    let spec = nice_axis_spec(&[-7.3, 4.0, 9.5]).expect("axis spec");

    assert_relative_eq!(spec.step, 5.0);
    assert_eq!(spec.below_zero_ticks, 2);
    assert_relative_eq!(spec.min, -10.0);
    assert!(spec.min <= -7.3, "rounded lower bound must not clip data");
    assert_relative_eq!(spec.min, -(spec.below_zero_ticks as f64) * spec.step);
}

#[test]
fn span_is_exact_multiple_of_step() {
    for values in [
        weekly_values(),
        vec![-7.3, 4.0, 9.5],
        vec![0.02, 0.07, 0.04],
        vec![120.0, 980.0, 455.0],
    ] {
        let spec = nice_axis_spec(&values).expect("axis spec");
        let quotient = (spec.max - spec.min) / spec.step;
        assert_relative_eq!(quotient, quotient.round(), epsilon = 1e-9);
    }
}

#[test]
fn normalized_fraction_is_canonical() {
    let canonical = [0.1, 0.2, 0.25, 0.3, 0.5, 1.0];
    for values in [
        weekly_values(),
        vec![-7.3, 4.0, 9.5],
        vec![1.0, 2.0],
        vec![3.0, 33.0, 333.0],
    ] {
        let spec = nice_axis_spec(&values).expect("axis spec");
        let fraction = spec.normalized_fraction();
        assert!(
            canonical
                .iter()
                .any(|candidate| (fraction - candidate).abs() <= 1e-9),
            "fraction {fraction} is not canonical for {values:?}"
        );
    }
}

#[test]
fn axis_spec_is_a_pure_function_of_input() {
    let first = nice_axis_spec(&weekly_values()).expect("axis spec");
    let second = nice_axis_spec(&weekly_values()).expect("axis spec");
    assert_eq!(first, second);
}

#[test]
fn all_equal_values_still_produce_a_positive_step() {
    let spec = nice_axis_spec(&[4.0, 4.0, 4.0, 4.0]).expect("axis spec");
    assert!(spec.step > 0.0);
    assert!(spec.max > spec.min);
}

#[test]
fn scale_bundle_matches_axis_domain() {
    let points: Vec<SeriesPoint> = [
        ("Mon", 13.0),
        ("Tue", 5.0),
        ("Wed", 3.0),
        ("Thu", 7.0),
        ("Fri", 5.0),
        ("Sat", 2.0),
        ("Sun", 4.0),
    ]
    .into_iter()
    .map(|(name, value)| SeriesPoint::new(name, value))
    .collect();

    let bundle = build_scales(&points, 750.0, 440.0).expect("scale bundle");
    assert_eq!(bundle.band.len(), 7);
    assert_relative_eq!(bundle.zero_offset_px, 0.0);

    let (domain_min, domain_max) = bundle.value.domain();
    assert_relative_eq!(domain_min, 0.0);
    assert_relative_eq!(domain_max, 20.0);
    assert_relative_eq!(bundle.value.value_to_pixel(20.0).expect("pixel"), 440.0);
}

#[test]
fn scale_bundle_keeps_bands_for_gap_points() {
    let points = vec![
        SeriesPoint::new("a", 1.0),
        SeriesPoint::gap("b"),
        SeriesPoint::new("c", 3.0),
    ];

    let bundle = build_scales(&points, 300.0, 100.0).expect("scale bundle");
    assert_eq!(bundle.band.len(), 3);
    assert_relative_eq!(bundle.band.position("b").expect("band"), 150.0);
}

#[test]
fn gap_only_series_is_rejected() {
    let points = vec![SeriesPoint::gap("a"), SeriesPoint::gap("b")];
    assert!(build_scales(&points, 300.0, 100.0).is_err());
}
