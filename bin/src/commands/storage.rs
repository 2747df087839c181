//! Storage command implementation.

use super::Context;
use crate::display::{merge_inputs, print_report};
use anyhow::{Context as _, Result};
use capest_lib::prelude::*;
use capest_lib::storage::QUERY_DAILY_VOLUME;

/// Size storage accounts for a daily volume and project them forward.
pub(crate) fn storage(ctx: &Context, volume: Option<&str>, query: Option<&str>) -> Result<()> {
    let params = merge_inputs(query, &[(QUERY_DAILY_VOLUME, volume)]);
    let inputs = StorageInputs::from_query(&params).context("Invalid storage inputs")?;

    let report = ctx.config.storage_estimator().report(&inputs, ctx.start_month);
    print_report(&report.into(), ctx.format)
}
