//! Messaging command implementations.
//!
//! `partitions` only sizes the ingress. `capacity` also checks a cluster
//! configuration and projects it.

use super::Context;
use crate::display::{merge_inputs, print_report};
use anyhow::{Context as _, Result};
use capest_lib::messaging::{
    QUERY_CAPACITY_UNITS, QUERY_CLUSTERS, QUERY_INGRESS, QUERY_INGRESS_UNIT, QUERY_MAX_PARTITIONS,
    QUERY_TIER, QUERY_TOPICS,
};
use capest_lib::prelude::*;
use clap::Args;

/// Ingress arguments shared by the messaging commands.
#[derive(Args)]
pub(crate) struct IngressArgs {
    /// Ingress rate, in the unit given by --unit
    #[arg(short, long)]
    ingress: Option<String>,

    /// Ingress unit (gib-per-sec, tb-per-day)
    #[arg(short, long)]
    unit: Option<String>,

    /// Number of topics (defaults to 1)
    #[arg(short, long)]
    topics: Option<String>,

    /// Share query to seed the inputs (explicit arguments win)
    #[arg(long)]
    query: Option<String>,
}

/// Cluster configuration arguments.
#[derive(Args)]
pub(crate) struct ClusterArgs {
    /// Cluster tier (dedicated, custom)
    #[arg(long)]
    tier: Option<String>,

    /// Number of clusters
    #[arg(short, long)]
    clusters: Option<String>,

    /// Capacity units per cluster (defaults to the tier maximum)
    #[arg(long)]
    cus: Option<String>,

    /// Override the tier's maximum partitions per topic
    #[arg(long)]
    max_partitions: Option<String>,
}

impl IngressArgs {
    fn overrides(&self) -> [(&'static str, Option<&str>); 3] {
        [
            (QUERY_INGRESS, self.ingress.as_deref()),
            (QUERY_INGRESS_UNIT, self.unit.as_deref()),
            (QUERY_TOPICS, self.topics.as_deref()),
        ]
    }
}

impl ClusterArgs {
    fn overrides(&self) -> [(&'static str, Option<&str>); 4] {
        [
            (QUERY_TIER, self.tier.as_deref()),
            (QUERY_CLUSTERS, self.clusters.as_deref()),
            (QUERY_CAPACITY_UNITS, self.cus.as_deref()),
            (QUERY_MAX_PARTITIONS, self.max_partitions.as_deref()),
        ]
    }
}

/// Estimate partitions and capacity units for an ingress rate.
pub(crate) fn partitions(ctx: &Context, args: &IngressArgs) -> Result<()> {
    let params = merge_inputs(args.query.as_deref(), &args.overrides());
    let inputs = MessagingInputs::from_query(&params).context("Invalid messaging inputs")?;

    let estimate = ctx
        .config
        .messaging_estimator()
        .estimate_partitions(&inputs)
        .context("Invalid messaging inputs")?;
    print_report(&estimate.into(), ctx.format)
}

/// Check a cluster configuration against the estimate and project it.
pub(crate) fn capacity(ctx: &Context, ingress: &IngressArgs, cluster: &ClusterArgs) -> Result<()> {
    let mut overrides = ingress.overrides().to_vec();
    overrides.extend(cluster.overrides());
    let params = merge_inputs(ingress.query.as_deref(), &overrides);

    let estimator = ctx.config.messaging_estimator();
    let request = MessagingRequest::from_query_with(&params, estimator.limits())
        .context("Invalid messaging inputs")?;

    let report = estimator
        .report(&request, ctx.start_month)
        .context("Capacity check failed")?;
    if report.projection.first_over_capacity().is_some() {
        tracing::warn!(
            month = %report.over_capacity,
            "projected capacity units exceed the cluster config"
        );
    }
    print_report(&report.into(), ctx.format)
}
