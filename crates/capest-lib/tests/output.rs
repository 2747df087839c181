//! Configured estimators rendered through the formatters.

use capest_lib::prelude::*;

fn render(formatter: &dyn Formatter, report: &Report) -> String {
    let mut out = Vec::new();
    formatter.write_report(report, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_configured_window_and_growth() {
    let mut config = CapestConfig::default();
    config.projection.months = 12;
    config.projection.monthly_growth_rate = 0.05;
    config.storage.max_ingress_gb_per_sec = 30.0;
    config.validate().unwrap();

    let start = parse_month("2026-10").unwrap();
    let adx = config.adx_estimator().report_raw("195", "300", start).unwrap();
    assert_eq!(adx.projection.len(), 12);
    assert_eq!(
        adx.projection[1].ingest_tb_per_day,
        adx.projection[0].ingest_tb_per_day * 1.05
    );

    // Storage keeps its own growth rate but shares the window.
    let storage = config.storage_estimator().report_raw("5184", start).unwrap();
    assert_eq!(storage.projection.len(), 12);
    assert_eq!(storage.estimate.required_accounts, 2);
    assert_eq!(
        storage.projection[1].estimate.daily_volume_tb,
        storage.projection[0].estimate.daily_volume_tb * 1.1
    );
}

#[test]
fn test_text_and_json_agree() {
    let start = parse_month("2026-10").unwrap();
    let report: Report = AdxEstimator::default()
        .report_raw("600", "2", start)
        .unwrap()
        .into();

    let text = render(&TextFormatter::new(), &report);
    assert!(text.starts_with("Estimated ADX Performance Metrics:"));
    assert!(text.contains("Baseline Comparison"));
    assert!(text.contains("Projected Performance"));
    assert!(text.contains("Recommendation: Consider scaling to 4 clusters"));
    assert!(text.trim_end().ends_with("Share: ?ingestTBPerDay=600&clusterCount=2"));

    let json = render(&JsonFormatter::new(), &report);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["kind"], "adx");
    assert_eq!(value["analysis"]["recommended_clusters"], 4);
    assert_eq!(value["projection"].as_array().unwrap().len(), 7);
    assert_eq!(value["projection"][6]["label"], "April 2027");
    assert!(text.contains("April 2027"));
}

#[test]
fn test_messaging_text_output() {
    let start = parse_month("2026-10").unwrap();
    let estimator = MessagingEstimator::default();
    let request = MessagingRequest {
        inputs: MessagingInputs::new(Ingress::gib_per_sec(8.0).unwrap(), 1).unwrap(),
        config: MessagingConfig::new(Tier::Dedicated, 1, 1, estimator.limits()).unwrap(),
    };
    let report: Report = estimator.report(&request, start).unwrap().into();
    let text = render(&*OutputFormat::Text.formatter(), &report);

    assert!(text.contains("Required number of partitions per topic: 144 (across 1 topic)"));
    assert!(text.contains("Projected CUs exceed the cluster config in November 2026"));
    assert!(text.contains("Capacity Check"));
    assert!(text.contains("[bad]"));
}
