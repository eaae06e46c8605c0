//! Schema command: JSON schema of the analysis report.

use clap::Args;
use tracing::{debug, instrument};

use study_lens_core::AnalysisReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON schema of [`AnalysisReport`].
///
/// The schema is JSON regardless of `--json`.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    println!("{}", serde_json::to_string_pretty(&report_schema())?);
    Ok(())
}

fn report_schema() -> schemars::Schema {
    schemars::schema_for!(AnalysisReport)
}
