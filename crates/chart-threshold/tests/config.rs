// File: crates/chart-threshold/tests/config.rs
// Purpose: Option defaults, merging, precedence and validation.

use chart_threshold::{Band, BandNames, Config, ThresholdError, ThresholdOptions};

#[test]
fn defaults_match_documented_values() {
    let c = Config::default();
    assert_eq!(c.thresholds().as_slice(), &[0.0]);
    assert_eq!(c.mask_padding(), 10.0);
    assert_eq!(c.prefix(), "ct-threshold-");
    assert_eq!(c.class_name(Band::Above), "ct-threshold-above");
    assert_eq!(c.class_name(Band::Interior(2)), "ct-threshold-area-2");
    assert_eq!(c.class_name(Band::Below), "ct-threshold-below");
    assert_eq!(c.mask_id(Band::Above), "ct-threshold-mask-above");
    assert_eq!(c.mask_id(Band::Interior(0)), "ct-threshold-mask-area-0");
    assert_eq!(c.mask_url(Band::Below), "url(#ct-threshold-mask-below)");

    assert_eq!(Config::resolve(ThresholdOptions::default()).unwrap(), c);
    assert_eq!(Config::from_json("{}").unwrap(), c);
}

#[test]
fn scalar_threshold_is_normalized() {
    let c = Config::from_json(r#"{ "threshold": 42.5 }"#).unwrap();
    assert_eq!(c.thresholds().as_slice(), &[42.5]);
    assert_eq!(c.thresholds().band_count(), 2);
}

#[test]
fn thresholds_take_precedence_over_scalar() {
    let c = Config::from_json(r#"{ "threshold": 9, "thresholds": [3, 1] }"#).unwrap();
    assert_eq!(c.thresholds().as_slice(), &[3.0, 1.0]);
}

#[test]
fn partial_name_maps_merge_onto_defaults() {
    let c = Config::from_json(
        r#"{ "maskPadding": 4, "classNames": { "aboveThreshold": "hot" }, "maskNames": { "belowThreshold": "m-cold" } }"#,
    )
    .unwrap();
    assert_eq!(c.mask_padding(), 4.0);
    assert_eq!(c.class_names(), &BandNames::new("hot", "area-", "below"));
    assert_eq!(c.mask_names(), &BandNames::new("mask-above", "mask-area-", "m-cold"));
}

#[test]
fn builder_mirrors_json_options() {
    let built = Config::builder()
        .thresholds([80.0, 50.0, 20.0])
        .mask_padding(2.0)
        .prefix("t-")
        .class_names(BandNames::new("hi", "mid-", "lo"))
        .build()
        .unwrap();
    let parsed = Config::from_json(
        r#"{ "thresholds": [80, 50, 20], "maskPadding": 2, "prefix": "t-",
             "classNames": { "aboveThreshold": "hi", "prefixThreshold": "mid-", "belowThreshold": "lo" } }"#,
    )
    .unwrap();
    assert_eq!(built, parsed);
    assert_eq!(built.class_name(Band::Interior(1)), "t-mid-1");
}

#[test]
fn empty_thresholds_are_rejected() {
    let err = Config::from_json(r#"{ "thresholds": [] }"#).unwrap_err();
    assert!(matches!(err, ThresholdError::EmptyThresholds));
    let err = Config::builder().thresholds(Vec::new()).build().unwrap_err();
    assert!(matches!(err, ThresholdError::EmptyThresholds));
}

#[test]
fn ascending_thresholds_are_rejected() {
    let err = Config::builder().thresholds([10.0, 20.0]).build().unwrap_err();
    match err {
        ThresholdError::UnorderedThresholds { index, previous, next } => {
            assert_eq!((index, previous, next), (1, 10.0, 20.0));
        }
        other => panic!("unexpected error: {other}"),
    }
    // Equal neighbours are allowed.
    assert!(Config::builder().thresholds([10.0, 10.0]).build().is_ok());
}

#[test]
fn non_finite_values_are_rejected() {
    let err = Config::builder().thresholds([5.0, f64::NAN]).build().unwrap_err();
    assert!(matches!(err, ThresholdError::NonFiniteThreshold { index: 1, .. }));
    let err = Config::builder().threshold(f64::INFINITY).build().unwrap_err();
    assert!(matches!(err, ThresholdError::NonFiniteThreshold { index: 0, .. }));
    let err = Config::builder().mask_padding(-1.0).build().unwrap_err();
    assert!(matches!(err, ThresholdError::InvalidMaskPadding(_)));
}

#[test]
fn malformed_or_unknown_options_fail_to_parse() {
    assert!(matches!(Config::from_json("{ not json"), Err(ThresholdError::Options(_))));
    assert!(matches!(Config::from_json(r#"{ "tresholds": [1] }"#), Err(ThresholdError::Options(_))));
    assert!(matches!(Config::from_json(r#"{ "thresholds": "high" }"#), Err(ThresholdError::Options(_))));
}

#[test]
fn options_round_trip_through_json() {
    let opts = ThresholdOptions { thresholds: Some(vec![3.0, 1.0]), prefix: Some("p-".into()), ..Default::default() };
    let json = serde_json::to_string(&opts).unwrap();
    assert_eq!(json, r#"{"thresholds":[3.0,1.0],"prefix":"p-"}"#);
}
