use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// Gadget extraction and dataset assembly CLI.
///
/// This CLI is a thin wrapper around `gadget-core` (exposed in code as
/// `gadget_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "vulnslice",
    version,
    about = "Builds vulnerability-classification datasets from static-analysis candidates",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the analysis engine on a target and aggregate labeled gadgets
    /// into a per-target corpus shard (`gadgets_<target>.jsonl`).
    ///
    /// Any shard left over from a previous run of the same target is
    /// truncated first, so a run always rebuilds its shard from scratch.
    GenerateTraining {
        /// Path to the C file or directory to analyze.
        target: String,

        /// Directory where corpus shards are written.
        #[arg(long, default_value = "gadgets_results")]
        results_dir: String,

        /// Consume an existing engine record file instead of invoking the engine.
        #[arg(long)]
        engine_output: Option<String>,

        /// Query script passed to the analysis engine.
        #[arg(long, default_value = "query_gadgets.sc")]
        engine_script: String,

        /// Skip the external indentation formatter.
        #[arg(long, default_value_t = false)]
        no_format: bool,
    },

    /// Assemble all corpus shards into a shuffled, deduplicated
    /// train/test split (`train.jsonl` / `test.jsonl`).
    PrepareDataset {
        /// Directory containing the corpus shards.
        #[arg(long, default_value = "gadgets_results")]
        input_dir: String,

        /// Directory to write train.jsonl / test.jsonl to.
        #[arg(long, default_value = "dataset")]
        output_dir: String,

        /// Fraction of records assigned to the train split.
        #[arg(long, default_value_t = 0.8)]
        train_ratio: f64,

        /// Shuffle seed; same inputs and seed reproduce the split exactly.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Run the analysis engine on a target and emit unlabeled,
    /// inference-ready records (no masking, no dedup).
    GenerateInference {
        /// Path to the C file or directory to analyze.
        target: String,

        /// Output file for the inference records.
        #[arg(long, default_value = "inference_ready.jsonl")]
        output: String,

        /// Consume an existing engine record file instead of invoking the engine.
        #[arg(long)]
        engine_output: Option<String>,

        /// Query script passed to the analysis engine.
        #[arg(long, default_value = "query_gadgets.sc")]
        engine_script: String,

        /// Skip the external indentation formatter.
        #[arg(long, default_value_t = false)]
        no_format: bool,
    },

    /// Report the post-dedup label distribution across corpus shards.
    Stats {
        /// Directory containing the corpus shards.
        #[arg(long, default_value = "gadgets_results")]
        input_dir: String,

        /// Emit JSON instead of the plain-text table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateTraining { target, results_dir, engine_output, engine_script, no_format } => {
            commands::training::generate_training_command(
                &target,
                &results_dir,
                engine_output,
                &engine_script,
                no_format,
            )?
        }
        Command::PrepareDataset { input_dir, output_dir, train_ratio, seed } => {
            commands::dataset::prepare_dataset_command(&input_dir, &output_dir, train_ratio, seed)?
        }
        Command::GenerateInference { target, output, engine_output, engine_script, no_format } => {
            commands::inference::generate_inference_command(
                &target,
                &output,
                engine_output,
                &engine_script,
                no_format,
            )?
        }
        Command::Stats { input_dir, json } => commands::stats::stats_command(&input_dir, json)?,
    }

    Ok(())
}
