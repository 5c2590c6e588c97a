use std::path::Path;

use anyhow::{Context, Result};
use gadget_core::pipeline::dataset::find_shards;
use gadget_core::pipeline::stats::analyze_distribution;
use gadget_core::text::LeakMasker;

/// Print the post-dedup label distribution across corpus shards.
pub fn stats_command(input_dir: &str, json: bool) -> Result<()> {
    let input_dir = Path::new(input_dir);
    let shards = find_shards(input_dir)
        .with_context(|| format!("Failed to list shards in {}", input_dir.display()))?;

    let masker = LeakMasker;
    let report =
        analyze_distribution(&shards, &masker).context("Failed to analyze distribution")?;

    if json {
        let serialized = serde_json::to_string_pretty(&report)
            .context("Failed to serialize distribution report to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Analyzing {} files...", shards.len());
        print!("{}", report.render());
    }

    Ok(())
}
