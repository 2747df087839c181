//! Reports and their tables.

use std::fmt;

use capest_adx::AdxReport;
use capest_messaging::{MessagingReport, PartitionEstimate};
use capest_storage::StorageReport;
use serde::Serialize;

use crate::table::{Cell, Table};

/// Any estimator output that can be formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Analytics-cluster report.
    Adx(AdxReport),
    /// Storage account report.
    Storage(StorageReport),
    /// Partition estimate without a capacity check.
    Partitions(PartitionEstimate),
    /// Messaging capacity report.
    Messaging(MessagingReport),
}

impl Report {
    /// Returns the share query reproducing the inputs, if the report has one.
    #[must_use]
    pub fn share_query(&self) -> Option<&str> {
        match self {
            Self::Adx(r) => Some(&r.share_query),
            Self::Storage(r) => Some(&r.share_query),
            Self::Messaging(r) => Some(&r.share_query),
            Self::Partitions(_) => None,
        }
    }

    /// Builds the tables shown after the summary.
    #[must_use]
    pub fn tables(&self) -> Vec<Table> {
        match self {
            Self::Adx(r) => adx_tables(r),
            Self::Storage(r) => storage_tables(r),
            Self::Messaging(r) => messaging_tables(r),
            Self::Partitions(_) => Vec::new(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adx(r) => write!(f, "{r}"),
            Self::Storage(r) => write!(f, "{r}"),
            Self::Partitions(e) => write!(f, "{}", e.summary()),
            Self::Messaging(r) => write!(f, "{r}"),
        }
    }
}

impl From<AdxReport> for Report {
    fn from(report: AdxReport) -> Self {
        Self::Adx(report)
    }
}

impl From<StorageReport> for Report {
    fn from(report: StorageReport) -> Self {
        Self::Storage(report)
    }
}

impl From<PartitionEstimate> for Report {
    fn from(estimate: PartitionEstimate) -> Self {
        Self::Partitions(estimate)
    }
}

impl From<MessagingReport> for Report {
    fn from(report: MessagingReport) -> Self {
        Self::Messaging(report)
    }
}

fn adx_tables(report: &AdxReport) -> Vec<Table> {
    let mut comparison = Table::new("Baseline Comparison", &["Metric", "Baseline", "Estimated"]);
    for row in &report.comparison {
        comparison.push(vec![
            row.metric.into(),
            row.baseline.clone().into(),
            row.estimated.clone().into(),
        ]);
    }

    let mut analysis = Table::new("Performance Analysis", &["Assessment"]);
    for (status, message) in report.analysis.messages() {
        analysis.push(vec![Cell::marked(message, status)]);
    }

    let mut projection = Table::new(
        "Projected Performance",
        &[
            "Month",
            "Ingest (TB/day)",
            "Avg Latency (min)",
            "Max Latency (min)",
            "CPU",
            "Cache",
            "Status",
        ],
    );
    for row in &report.projection {
        let e = &row.estimate;
        projection.push(vec![
            row.label.to_string().into(),
            format!("{:.1}", row.ingest_tb_per_day).into(),
            format!("{:.2}", e.avg_latency_minutes).into(),
            format!("{:.2}", e.max_latency_minutes).into(),
            format!("{:.1}%", e.cpu_percent).into(),
            format!("{:.1}%", e.cache_utilization_percent).into(),
            Cell::marked(row.status.label(), row.status.capacity_status()),
        ]);
    }

    vec![comparison, analysis, projection]
}

fn storage_tables(report: &StorageReport) -> Vec<Table> {
    let mut config = Table::new("Storage Configuration", &["Metric", "Value", "Details"]);
    for row in &report.config {
        config.push(vec![
            row.metric.into(),
            Cell::with_status(row.value.clone(), row.status),
            row.details.clone().into(),
        ]);
    }

    let mut projection = Table::new(
        "Projected Storage Accounts",
        &[
            "Month",
            "Daily Volume (TB)",
            "Peak Ingress (GB/sec)",
            "Accounts",
            "Utilization",
        ],
    );
    for row in &report.projection {
        let e = &row.estimate;
        projection.push(vec![
            row.label.to_string().into(),
            format!("{:.1}", e.daily_volume_tb).into(),
            format!("{:.2}", e.peak_ingress_gb_per_sec).into(),
            e.required_accounts.to_string().into(),
            Cell::marked(format!("{:.1}%", e.utilization_percent), e.status),
        ]);
    }

    vec![config, projection]
}

fn messaging_tables(report: &MessagingReport) -> Vec<Table> {
    let c = &report.capacity;
    let p = &c.partitions;
    let mut capacity = Table::new(
        "Capacity Check",
        &[
            "Required Partitions",
            "Max Partitions",
            "Required CUs",
            "Configured CUs",
            "Tier Max CUs",
        ],
    );
    capacity.push(vec![
        Cell::marked(
            format!(
                "{} ({} per topic)",
                p.total_required_partitions, p.partitions_per_topic
            ),
            c.partition_status,
        ),
        Cell::marked(
            format!(
                "{} ({} per topic)",
                c.overall_max_partitions,
                c.max_partitions_per_topic_overall()
            ),
            c.partition_status,
        ),
        Cell::marked(p.required_capacity_units.to_string(), c.capacity_status),
        Cell::marked(c.cluster_config_capacity_units.to_string(), c.capacity_status),
        c.tier_max_capacity_units.to_string().into(),
    ]);

    let mut projection = Table::new(
        "Projected Partitions",
        &["Month", "Partitions per Topic", "Required CUs", "CU Headroom"],
    );
    for row in &report.projection.rows {
        projection.push(vec![
            row.label.to_string().into(),
            Cell::marked(row.partitions_per_topic.to_string(), row.partition_status),
            Cell::marked(row.required_capacity_units.to_string(), row.capacity_status),
            format!("{:.1}%", row.headroom_percent).into(),
        ]);
    }

    vec![capacity, projection]
}

#[cfg(test)]
mod tests {
    use super::*;
    use capest_adx::AdxEstimator;
    use capest_messaging::{
        Ingress, MessagingConfig, MessagingEstimator, MessagingInputs, MessagingRequest,
    };
    use capest_storage::StorageEstimator;
    use capest_types::CapacityStatus;
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    #[test]
    fn test_adx_tables() {
        let report: Report = AdxEstimator::default()
            .report_raw("195", "300", start())
            .unwrap()
            .into();
        let tables = report.tables();
        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0].len(), 5);
        assert_eq!(tables[2].len(), 7);
        assert_eq!(tables[2].rows[0][0].text, "October 2026");
        assert_eq!(
            report.share_query(),
            Some("ingestTBPerDay=195&clusterCount=300")
        );
    }

    #[test]
    fn test_storage_tables() {
        let report: Report = StorageEstimator::default()
            .report_raw("5184", start())
            .unwrap()
            .into();
        let tables = report.tables();
        assert_eq!(tables[0].rows[3][1].status, Some(CapacityStatus::Bad));
        assert_eq!(tables[0].rows[0][1].status, None);
        assert_eq!(tables[1].rows[0][4].text, "100.0%");
    }

    #[test]
    fn test_messaging_tables() {
        let estimator = MessagingEstimator::default();
        let request = MessagingRequest {
            inputs: MessagingInputs::new(Ingress::gib_per_sec(1.0).unwrap(), 1).unwrap(),
            config: MessagingConfig::default(),
        };
        let report: Report = estimator.report(&request, start()).unwrap().into();
        let tables = report.tables();

        assert_eq!(tables[0].rows[0][0].text, "18 (18 per topic)");
        assert_eq!(tables[0].rows[0][1].text, "1024 (1024 per topic)");
        assert_eq!(tables[0].rows[0][3].text, "10");
        assert_eq!(tables[1].len(), 7);
        assert_eq!(tables[1].rows[0][3].text, "90.0%");
    }

    #[test]
    fn test_partitions_only() {
        let estimate = MessagingEstimator::default()
            .estimate_partitions_raw("1", capest_messaging::IngressUnit::GibPerSec, "1")
            .unwrap();
        let report = Report::from(estimate);
        assert!(report.tables().is_empty());
        assert!(report.share_query().is_none());
        assert_eq!(
            report.to_string(),
            "Required number of partitions per topic: 18 (across 1 topic)"
        );
    }
}
