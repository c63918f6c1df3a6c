use crate::cli::Cli;
use crate::domain::models::{CountOrigin, RisksDocument};
use crate::services::config::load_config;
use crate::services::eis::fetch_risks;
use crate::services::output::{print_one, render_stats};
use crate::services::stats::{aggregate, finalize_all};
use crate::services::storage::load_raw_response;

pub fn handle_run(cli: &Cli) -> anyhow::Result<()> {
    let doc: RisksDocument = match &cli.input {
        Some(path) => {
            tracing::info!(input = %path.display(), "aggregating saved EIS response");
            load_raw_response(path)?
        }
        None => {
            let config = load_config(&cli.config)?;
            fetch_risks(&config, &cli.raw_out)?
        }
    };

    let origin = if cli.legacy_count {
        CountOrigin::Legacy
    } else {
        CountOrigin::Zero
    };
    let stats = finalize_all(aggregate(&doc.risks, origin))?;
    tracing::info!(records = doc.risks.len(), total = stats.total, "aggregation complete");

    print_one(cli.json, stats, render_stats)
}
