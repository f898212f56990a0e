use algebraic_laws::law::report::{ReportConfig, ReportFormat, render_verdict};
use algebraic_laws::prelude::*;

fn set(intervals: &[(i64, i64)]) -> IntervalSet {
    intervals
        .iter()
        .map(|&(lower, upper)| Interval::new(lower, upper))
        .collect()
}

#[test]
fn single_interval_has_no_gaps() {
    let x = set(&[(2, 10)]);

    let record = check_length_as_distance(&x);
    assert_eq!(record.obj_dist, 0);
    assert!(record.in_between.is_empty());

    let record = check_length_complementarity(&x);
    assert_eq!((record.obj_len, record.obj_dist, record.hull_len), (8, 0, 8));

    let record = check_inner_complementarity(&x);
    assert_eq!(record.lhs, set(&[(2, 10)]));
}

#[test]
fn extreme_coordinates_are_measured_exactly() {
    for x in [
        set(&[(i64::MIN, i64::MIN + 1), (i64::MAX - 1, i64::MAX)]),
        set(&[(i64::MIN, 0), (1, i64::MAX)]),
    ] {
        assert!(has_length_as_distance(&x));
        assert!(has_length_complementarity(&x));
        assert!(has_inner_complementarity(&x));
        let record = check_length_complementarity(&x);
        assert_eq!(record.hull_len, i128::from(u64::MAX));
    }
}

#[test]
fn gapped_set_measures() {
    let x = set(&[(2, 5), (8, 10)]);

    let record = check_length_as_distance(&x);
    assert_eq!(record.in_between, set(&[(5, 8)]));
    assert_eq!(record.between_len, 3);
    assert_eq!(record.obj_dist, 3);

    let record = check_length_complementarity(&x);
    assert_eq!((record.obj_len, record.obj_dist, record.hull_len), (5, 3, 8));

    let record = check_inner_complementarity(&x);
    assert_eq!(record.rhs, IntervalSet::from(Interval::new(2, 10)));
    assert_eq!(record.lhs, record.rhs);
}

#[test]
fn touching_segments_join_into_the_hull() {
    let x = set(&[(0, 3), (3, 6), (9, 12)]);
    let record = check_inner_complementarity(&x);
    assert_eq!(record.in_between, set(&[(6, 9)]));
    assert_eq!(record.lhs.segments(), &[Interval::new(0, 12)]);
}

#[test]
fn empty_set_satisfies_every_interval_law() {
    let empty = IntervalSet::new();
    check_intersection_containedness(&empty, &empty);
    check_union_containedness(&empty, &set(&[(1, 4)]));
    check_length_as_distance(&empty);
    check_length_complementarity(&empty);
    check_inner_complementarity(&empty);
    check_domain_containedness(&IntervalMap::<i32>::new());
}

#[test]
fn sets_satisfy_containment_with_mixed_operands() {
    let a = set(&[(0, 4), (6, 9)]);
    check_intersection_containedness(&a, &set(&[(2, 7)]));
    check_intersection_containedness(&a, &Interval::new(3, 8));
    check_intersection_containedness(&a, &7_i64);
    check_union_containedness(&a, &set(&[(2, 7)]));
    check_union_containedness(&a, &Interval::new(-5, -1));
    check_union_containedness(&a, &20_i64);
}

#[test]
fn maps_satisfy_domain_and_complement_laws() {
    let map: IntervalMap<i32> = [
        (Interval::new(0, 5), 1),
        (Interval::new(3, 7), 2),
        (Interval::new(10, 12), 3),
    ]
    .into_iter()
    .collect();
    check_domain_containedness(&map);
    let record = check_length_as_distance(&map);
    assert_eq!(record.obj_dist, 3);
    let record = check_inner_complementarity(&map);
    assert_eq!(record.lhs.segments(), &[Interval::new(0, 12)]);
}

#[test]
fn value_combining_map_intersection_is_outside_the_containment_laws() {
    let a: IntervalMap<i32> = [(Interval::new(0, 6), 1)].into_iter().collect();
    let b: IntervalMap<i32> = [(Interval::new(4, 9), 5)].into_iter().collect();
    let verdict = verify_intersection_containedness(&a, &b);
    assert!(verdict.violates(Law::IntersectionContainedness));
    assert_eq!(verdict.violations().len(), 4);
}

#[test]
fn has_agrees_with_verify() {
    for x in [
        IntervalSet::new(),
        set(&[(2, 10)]),
        set(&[(2, 5), (8, 10)]),
        set(&[(-4, -1), (0, 1), (1, 2), (30, 31)]),
    ] {
        assert_eq!(has_length_as_distance(&x), verify_length_as_distance(&x).holds());
        assert_eq!(
            has_length_complementarity(&x),
            verify_length_complementarity(&x).holds()
        );
        assert_eq!(
            has_inner_complementarity(&x),
            verify_inner_complementarity(&x).holds()
        );
    }
}

#[test]
fn repeated_checks_are_idempotent() {
    let x = set(&[(2, 5), (8, 10)]);
    let first = verify_length_complementarity(&x);
    let second = verify_length_complementarity(&x);
    assert_eq!(first, second);
    assert_eq!(x, set(&[(2, 5), (8, 10)]));
}

#[test]
fn json_report_lists_every_violation() {
    let a: IntervalMap<i32> = [(Interval::new(0, 6), 1)].into_iter().collect();
    let b: IntervalMap<i32> = [(Interval::new(4, 9), 5)].into_iter().collect();
    let verdict = verify_intersection_containedness(&a, &b);
    let config = ReportConfig::default().with_format(ReportFormat::Json);
    let report: serde_json::Value =
        serde_json::from_str(&render_verdict(&verdict, &config)).expect("report is JSON");
    assert_eq!(report["evaluated"], 4);
    assert_eq!(report["violations"].as_array().map(Vec::len), Some(4));
    assert_eq!(report["violations"][0]["law"], "intersection_containedness");
    assert_eq!(report["violations"][0]["operator"], "et");
}
