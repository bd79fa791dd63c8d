mod common;

use common::{collection, feature};
use rack_core::normalizer::{ingest, parse_payload, resolve_district};
use rack_core::{IngestError, RackId};
use serde_json::json;

#[test]
fn reference_feature_normalizes() {
    let body = collection(vec![feature(1, json!(28177), json!(10), json!([126.7, 37.4]))]);
    let racks = ingest(&body).unwrap();

    assert_eq!(racks.len(), 1);
    let rack = &racks[0];
    assert_eq!(rack.id, RackId::Feed(1));
    assert_eq!(rack.details.name, "자전거 보관소 1");
    assert_eq!(rack.details.district, "연수구");
    assert_eq!(rack.details.capacity, 10);
    assert!((rack.details.lat.unwrap() - 37.4).abs() < 1e-9);
    assert!((rack.details.lng.unwrap() - 126.7).abs() < 1e-9);
    assert_eq!(rack.details.updated_at, "");
    assert_eq!(rack.details.manager, "");
}

#[test]
fn keeps_length_and_source_order() {
    let features = (1..=25)
        .rev()
        .map(|id| feature(id, json!(28200), json!(1), json!([126.7, 37.5])))
        .collect();
    let racks = ingest(&collection(features)).unwrap();

    let ids: Vec<_> = racks.iter().map(|r| r.id.clone()).collect();
    let expected: Vec<_> = (1..=25).rev().map(RackId::Feed).collect();
    assert_eq!(ids, expected);
}

#[test]
fn unknown_district_code_gets_placeholder() {
    assert_eq!(resolve_district(Some(&json!(99999))), "구역(99999)");
    assert_eq!(resolve_district(Some(&json!("28245"))), "서구");
    assert_eq!(resolve_district(None), "");
    assert_eq!(resolve_district(Some(&json!(null))), "");
}

#[test]
fn whole_float_codes_resolve_like_integers() {
    assert_eq!(resolve_district(Some(&json!(28177.0))), "연수구");
    assert_eq!(resolve_district(Some(&json!(99999.0))), "구역(99999)");
    assert_eq!(resolve_district(Some(&json!(28177.5))), "구역(28177.5)");

    let body = collection(vec![json!({
        "id": 9,
        "properties": { "gucd": 28260.0, "ridn": 4412.0 },
    })]);
    let rack = &ingest(&body).unwrap()[0];
    assert_eq!(rack.details.district, "강화군");
    assert_eq!(rack.details.road_segment, "4412");
}

#[test]
fn empty_and_zero_codes_are_distinct() {
    assert_eq!(resolve_district(Some(&json!(""))), "");
    assert_eq!(resolve_district(Some(&json!(0))), "구역(0)");
}

#[test]
fn text_and_float_ids_are_kept() {
    let body = collection(vec![
        feature(1, json!(28177), json!(1), json!([126.7, 37.4])),
        json!({ "id": "A-17", "properties": { "gucd": 28185 } }),
        json!({ "id": 3.0, "properties": {} }),
    ]);
    let racks = ingest(&body).unwrap();

    assert_eq!(racks.len(), 3);
    assert_eq!(racks[1].id, RackId::External("A-17".to_string()));
    assert_eq!(racks[1].details.name, "자전거 보관소 A-17");
    assert_eq!(racks[1].details.district, "남동구");
    assert_eq!(racks[2].id, RackId::Feed(3));
}

#[test]
fn missing_optional_fields_use_defaults() {
    let body = collection(vec![json!({ "id": 7, "properties": {}, "geometry": null })]);
    let racks = ingest(&body).unwrap();
    let rack = &racks[0];

    assert_eq!(rack.details.district, "");
    assert_eq!(rack.details.capacity, 0);
    assert_eq!(rack.details.lat, None);
    assert_eq!(rack.details.lng, None);
    assert!(rack.marker().is_none());
}

#[test]
fn coordinates_are_cut_to_fixed_digits() {
    let body = collection(vec![feature(
        3,
        json!(28185),
        json!(2),
        json!([126.1234567890121, 37.12345678901231]),
    )]);
    let rack = &ingest(&body).unwrap()[0];

    assert_eq!(rack.details.lng, Some(126.123456789012));
    assert_eq!(rack.details.lat, Some(37.1234567890123));
}

#[test]
fn descriptive_properties_are_carried_as_text() {
    let body = collection(vec![json!({
        "id": "12",
        "properties": {
            "gucd": 28710,
            "sto_cnt": "8",
            "update_ymd": "2022-11-03",
            "ist_ymd": 20190401,
            "mngt": "옹진군청",
            "ridn": 4412,
            "ftc": "F-17"
        },
        "geometry": { "coordinates": [126.4, 37.2] }
    })]);
    let rack = &ingest(&body).unwrap()[0];

    assert_eq!(rack.id, RackId::Feed(12));
    assert_eq!(rack.details.district, "옹진군");
    assert_eq!(rack.details.capacity, 8);
    assert_eq!(rack.details.updated_at, "2022. 11. 3.");
    assert_eq!(rack.details.installation_date, "2019. 4. 1.");
    assert_eq!(rack.details.manager, "옹진군청");
    assert_eq!(rack.details.road_segment, "4412");
    assert_eq!(rack.details.ftc_number, "F-17");
}

#[test]
fn missing_features_is_a_shape_error() {
    let err = ingest(r#"{"type":"FeatureCollection","error":{"code":400}}"#).unwrap_err();
    assert!(matches!(err, IngestError::MissingFeatures));

    let err = parse_payload(r#"{"features": {"not": "a list"}}"#).unwrap_err();
    assert!(matches!(err, IngestError::MissingFeatures));
}

#[test]
fn invalid_json_is_rejected() {
    assert!(matches!(ingest("<html>"), Err(IngestError::Json(_))));
}

#[test]
fn bad_feature_fails_the_whole_batch() {
    let body = collection(vec![
        feature(1, json!(28177), json!(1), json!([126.7, 37.4])),
        json!("not a feature"),
    ]);
    assert!(matches!(
        ingest(&body),
        Err(IngestError::MalformedFeature { index: 1, .. })
    ));

    let body = collection(vec![json!({ "properties": {} })]);
    assert!(matches!(ingest(&body), Err(IngestError::MissingId { index: 0 })));
}

#[test]
fn repeated_ids_are_rejected() {
    let body = collection(vec![
        feature(4, json!(28177), json!(1), json!([126.7, 37.4])),
        json!({ "id": "4", "properties": {} }),
    ]);
    assert!(matches!(
        ingest(&body),
        Err(IngestError::DuplicateId { index: 1, .. })
    ));
}
