use crate::domain::models::{JsonOut, StatsResult};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn render_stats(stats: &StatsResult) -> String {
    let mut lines = vec![format!("total: {}", stats.total)];
    for (name, c) in stats.metrics.iter() {
        let percent = c
            .percent
            .map(|p| format!("{:.2}%", p))
            .unwrap_or_else(|| "n/a".to_string());
        lines.push(format!("{}\t{}\t{}", name, c.count, percent));
    }
    lines.join("\n")
}
