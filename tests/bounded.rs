mod common;

use common::approx_eq;
use numscan::{Limit, ScanOptions, SegmentKind, evaluate_bounded, evaluate_bounded_with, scan};

fn uncharged(source: &str, max_length: usize) -> i32 {
    evaluate_bounded_with(source, Limit::chars(max_length).uncharged(), &ScanOptions::default())
}

#[test]
fn within_the_limit() {
    assert_eq!(evaluate_bounded::<i32>("123", 3), 123);
    assert_eq!(evaluate_bounded::<i32>("0x1A3", 5), 0x1A3);
}

#[test]
fn prefix_is_charged_by_default() {
    assert_eq!(evaluate_bounded::<i32>("0x1A3", 4), 0x1A);
    assert_eq!(evaluate_bounded::<i32>("0x12345", 4), 0x12);
    assert_eq!(evaluate_bounded::<i32>("0b101010", 4), 0b10);
}

#[test]
fn uncharged_prefix_is_free() {
    assert_eq!(uncharged("0x1A3", 3), 0x1A3);
    assert_eq!(uncharged("-0b1111", 2), -0b11);
}

#[test]
fn exceeding_the_limit_truncates() {
    assert_eq!(evaluate_bounded::<i32>("12345", 4), 1234);
    assert_eq!(evaluate_bounded::<u64>("12345", 0), 0);
}

#[test]
fn edge_cases() {
    assert_eq!(evaluate_bounded::<i32>("0", 1), 0);
    assert_eq!(evaluate_bounded::<i32>("-1", 2), -1);
    assert_eq!(evaluate_bounded::<i32>("-12", 2), -1, "the sign uses one of the two slots");
    assert_eq!(evaluate_bounded::<i32>("0x1", 2), 0, "the prefix alone spends the cap");
}

#[test]
fn cap_is_shared_across_float_stages() {
    assert!(approx_eq(evaluate_bounded::<f64>("12.345", 4), 12.3, 1e-12));
    assert!(
        approx_eq(evaluate_bounded::<f64>("12.5", 3), 12.0, 1e-12),
        "the '.' takes the last slot"
    );
    assert!(approx_eq(evaluate_bounded::<f64>("-12.5", 4), -12.0, 1e-12));
    assert!(approx_eq(evaluate_bounded::<f64>("1e5", 2), 1.0, 1e-12), "the 'e' takes the last slot");
    assert!(approx_eq(evaluate_bounded::<f64>("1.5e22", 3), 1.5, 1e-12));

    let scanned = scan::<f64>("1.5e22", &ScanOptions::default(), Limit::chars(3));
    assert_eq!(scanned.consumed, 3, "every marker is charged");
    assert!(scanned.segment(SegmentKind::Exponent).is_none());
}

#[test]
fn cap_runs_out_inside_the_exponent() {
    let scanned = scan::<f64>("1e123", &ScanOptions::default(), Limit::chars(4));
    assert!(approx_eq(scanned.value, 1e12, 1e-3), "value={}", scanned.value);
    assert_eq!(scanned.consumed, 4);
    assert_eq!(scanned.segment(SegmentKind::Exponent).map(|s| s.span()), Some(1..4));

    let scanned = scan::<f64>("-2e-34", &ScanOptions::default(), Limit::chars(2).uncharged());
    assert!(approx_eq(scanned.value, -2e-3, 1e-15), "value={}", scanned.value);
    assert_eq!(scanned.consumed, 5, "sign, 'e' and '-' are free when uncharged");
}

#[test]
fn uncharged_float_counts_digits_only() {
    let limit = Limit::chars(3).uncharged();
    let scanned = scan::<f64>("-1.25e3", &ScanOptions::default(), limit);
    assert!(approx_eq(scanned.value, -1.25, 1e-12), "value={}", scanned.value);
    assert_eq!(scanned.consumed, 5, "the spent cap refuses the 'e'");
    assert_eq!(scanned.segment(SegmentKind::Fraction).map(|s| s.span()), Some(2..5));
    assert!(scanned.segment(SegmentKind::Exponent).is_none());

    let value: f32 =
        evaluate_bounded_with("-1.25e3", Limit::chars(4).uncharged(), &ScanOptions::default());
    assert!(approx_eq(value as f64, -1250.0, 1e-3), "the fourth slot buys the exponent digit");
}

#[test]
fn consumed_never_exceeds_cap_plus_markers() {
    let scanned = scan::<i64>("98765", &ScanOptions::default(), Limit::chars(3).uncharged());
    assert_eq!(scanned.value, 987);
    assert_eq!(scanned.consumed, 3);
    assert!(!scanned.is_complete("98765"));
}
