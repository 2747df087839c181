//! ADX command implementation.

use super::Context;
use crate::display::{merge_inputs, print_report};
use anyhow::{Context as _, Result};
use capest_lib::adx::{QUERY_CLUSTERS, QUERY_INGEST};
use capest_lib::prelude::*;

/// Estimate cluster performance and project it forward.
pub(crate) fn adx(
    ctx: &Context,
    ingest: Option<&str>,
    clusters: Option<&str>,
    query: Option<&str>,
) -> Result<()> {
    let params = merge_inputs(query, &[(QUERY_INGEST, ingest), (QUERY_CLUSTERS, clusters)]);
    let inputs = AdxInputs::from_query(&params).context("Invalid ADX inputs")?;

    let report = ctx.config.adx_estimator().report(&inputs, ctx.start_month);
    tracing::info!(share = %report.share_query, "ADX report ready");
    print_report(&report.into(), ctx.format)
}
