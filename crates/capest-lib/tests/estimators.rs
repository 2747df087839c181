//! Integration tests across the estimators, driven through the facade.

use approx::assert_relative_eq;
use capest_lib::adx::{MAX_AVG_LATENCY_MINUTES, MAX_MAX_LATENCY_MINUTES, MAX_PERCENT};
use capest_lib::prelude::*;
use chrono::NaiveDate;

fn start() -> NaiveDate {
    parse_month("2026-10").unwrap()
}

#[test]
fn test_adx_metrics_stay_capped() {
    let estimator = AdxEstimator::default();
    let ingests = [0.001, 1.0, 195.0, 1_000.0, 50_000.0, 1e9];
    let clusters = [1, 2, 3, 10, 300, 10_000];

    for &ingest in &ingests {
        for &count in &clusters {
            let e = estimator.estimate(&AdxInputs::new(ingest, count).unwrap());
            assert!(e.avg_latency_minutes <= MAX_AVG_LATENCY_MINUTES);
            assert!(e.max_latency_minutes <= MAX_MAX_LATENCY_MINUTES);
            assert!(e.cpu_percent <= MAX_PERCENT);
            assert!(e.cache_utilization_percent <= MAX_PERCENT);
        }
    }
}

#[test]
fn test_adx_reference_scenario() {
    let estimate = AdxEstimator::default().estimate_raw("195", "300").unwrap();
    assert_relative_eq!(estimate.avg_latency_minutes, 1.18 / 300f64.sqrt(), max_relative = 1e-12);
    assert_relative_eq!(estimate.avg_latency_minutes, 0.068, epsilon = 1e-3);
    assert_relative_eq!(estimate.cpu_percent, 0.05, epsilon = 1e-12);
}

#[test]
fn test_projections_compound_ten_percent() {
    let adx = AdxEstimator::default().report_raw("250", "4", start()).unwrap();
    for pair in adx.projection.windows(2) {
        assert_eq!(pair[1].ingest_tb_per_day, pair[0].ingest_tb_per_day * 1.1);
    }

    let storage = StorageEstimator::default().report_raw("750", start()).unwrap();
    for pair in storage.projection.windows(2) {
        assert_eq!(
            pair[1].estimate.daily_volume_tb,
            pair[0].estimate.daily_volume_tb * 1.1
        );
    }

    let mut session = MessagingSession::default();
    session
        .estimate_partitions("3", IngressUnit::GibPerSec, "2")
        .unwrap();
    let messaging = session.projection(start()).unwrap();
    assert_eq!(messaging.rows.len(), 7);
    for pair in messaging.rows.windows(2) {
        assert_eq!(
            pair[1].projected_partitions,
            pair[0].projected_partitions * 1.1
        );
    }
}

#[test]
fn test_identical_inputs_identical_outputs() {
    let adx = AdxEstimator::default();
    assert_eq!(
        adx.report_raw("812.5", "7", start()).unwrap(),
        adx.report_raw("812.5", "7", start()).unwrap()
    );

    let storage = StorageEstimator::default();
    assert_eq!(
        storage.report_raw("3333.3", start()).unwrap(),
        storage.report_raw("3333.3", start()).unwrap()
    );
}

#[test]
fn test_storage_single_account_boundary() {
    let estimate = StorageEstimator::default().estimate_raw("5184").unwrap();
    assert_eq!(estimate.required_accounts, 1);
    assert_eq!(estimate.utilization_percent, 100.0);
    assert_eq!(estimate.status, CapacityStatus::Bad);
}

#[test]
fn test_messaging_reference_scenario() {
    let estimate = MessagingEstimator::default()
        .estimate_partitions_raw("1", IngressUnit::GibPerSec, "1")
        .unwrap();
    assert_eq!(estimate.partitions_per_topic, 18);
    assert_eq!(estimate.required_capacity_units, 1);
}

#[test]
fn test_invalid_input_yields_no_report() {
    let err = AdxEstimator::default()
        .report_raw("-5", "3", start())
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().starts_with("Please enter a valid"));

    assert!(StorageEstimator::default().report_raw("lots", start()).is_err());

    let mut session = MessagingSession::default();
    assert!(
        session
            .estimate_partitions("0", IngressUnit::GibPerSec, "1")
            .is_err()
    );
    assert!(session.check_capacity().is_err());
}

#[test]
fn test_share_queries_restore_inputs() {
    let adx = AdxEstimator::default().report_raw("420", "5", start()).unwrap();
    let restored = AdxInputs::from_query(&QueryParams::parse(&adx.share_query)).unwrap();
    assert_eq!(restored, adx.inputs);

    let storage = StorageEstimator::default().report_raw("90.5", start()).unwrap();
    let restored = StorageInputs::from_query(&QueryParams::parse(&storage.share_query)).unwrap();
    assert_eq!(restored, storage.inputs);

    let estimator = MessagingEstimator::default();
    let request = MessagingRequest::from_query(&QueryParams::parse(
        "ingress=40&ingressUnit=tb-per-day&numTopics=4&numClusters=2&tier=dedicated&cusPerCluster=6",
    ))
    .unwrap();
    let report = estimator.report(&request, start()).unwrap();
    let again = MessagingRequest::from_query(&QueryParams::parse(&report.share_query)).unwrap();
    assert_eq!(again, request);
}

#[test]
fn test_session_walkthrough() {
    let mut session = MessagingSession::default();
    assert_eq!(
        session.check_capacity().unwrap_err().to_string(),
        "Please estimate partition count first."
    );

    // 20 GiB/s over 2 topics needs 179 partitions per topic, 3 capacity units.
    let estimate = session
        .estimate_partitions("20", IngressUnit::GibPerSec, "2")
        .unwrap();
    assert_eq!(estimate.partitions_per_topic, 179);
    assert_eq!(estimate.required_capacity_units, 3);

    session.set_capacity_units_per_cluster(2).unwrap();
    let check = session.check_capacity().unwrap();
    assert_eq!(check.capacity_status, CapacityStatus::Bad);
    let projection = session.projection(start()).unwrap();
    assert_eq!(projection.first_over_capacity(), Some(0));
    assert_eq!(projection.over_capacity_label(), "October 2026");

    session.set_tier(Tier::Custom);
    assert_eq!(session.config().capacity_units_per_cluster(), 36);
    let check = session.check_capacity().unwrap();
    assert_eq!(check.capacity_status, CapacityStatus::Ok);
    assert_eq!(check.overall_max_partitions, 1008 * 2);
    assert_eq!(
        session.projection(start()).unwrap().over_capacity_label(),
        "the next 7 months"
    );
}
