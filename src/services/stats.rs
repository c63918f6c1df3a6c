use crate::domain::models::{CountOrigin, Details, Metrics, RiskRecord, StatsResult, METRICS};
use crate::errors::RraStatsError;

impl RiskRecord {
    fn details(&self) -> Option<&Details> {
        self.rra.as_ref()?.rra_details.as_ref()?.details.as_ref()
    }

    pub fn median_label(&self) -> Option<&str> {
        self.risk.as_ref()?.median_label.as_deref()
    }

    pub fn has_linked_services(&self) -> bool {
        self.details()
            .and_then(|d| d.metadata.as_ref())
            .and_then(|m| m.linked_services.as_ref())
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// Two or more default-data entries only show up when the data dict exists.
    pub fn has_data_dict_and_default_data(&self) -> bool {
        self.details()
            .and_then(|d| d.data.as_ref())
            .and_then(|d| d.default.as_ref())
            .map(|d| d.len() > 1)
            .unwrap_or(false)
    }

    pub fn has_assets(&self) -> bool {
        self.rra
            .as_ref()
            .map(|r| r.asset_groups.is_some())
            .unwrap_or(false)
    }
}

pub fn aggregate(records: &[RiskRecord], origin: CountOrigin) -> StatsResult {
    let start = origin.start();
    let mut metrics = Metrics::starting_at(start);
    let mut total = start;

    for record in records {
        tracing::debug!(median_label = ?record.median_label(), "evaluating record");
        if record.has_linked_services() {
            metrics.services_linked.count += 1;
        }
        if record.has_data_dict_and_default_data() {
            metrics.with_data_dict_and_default_data.count += 1;
        }
        if record.has_assets() {
            metrics.have_assets.count += 1;
        }
        total += 1;
    }

    StatsResult {
        total,
        origin,
        metrics,
    }
}

/// Stores `count * 100 / total` for `metric`. Percent stays unset when total is not positive.
pub fn finalize_percentage(mut stats: StatsResult, metric: &str) -> anyhow::Result<StatsResult> {
    let total = stats.total;
    let counter = stats
        .metrics
        .get_mut(metric)
        .ok_or_else(|| RraStatsError::Schema(metric.to_string()))?;
    counter.percent = if total > 0 {
        Some(counter.count as f64 * 100.0 / total as f64)
    } else {
        None
    };
    Ok(stats)
}

pub fn finalize_all(stats: StatsResult) -> anyhow::Result<StatsResult> {
    METRICS
        .iter()
        .try_fold(stats, |acc, m| finalize_percentage(acc, m))
}
