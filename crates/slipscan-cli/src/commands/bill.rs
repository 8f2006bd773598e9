//! Bill command - interpret OCR text of receipts and bills.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, error, info, warn};

use slipscan_core::DocumentInterpreter;

use super::input::{expand_inputs, interpret_all};
use super::output::{emit, format_bills, BillReport, OutputFormat};

/// Arguments for the bill command.
#[derive(Args)]
pub struct BillArgs {
    /// OCR text files or glob patterns ("-" reads stdin)
    #[arg(required = true)]
    input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Number of documents read and interpreted concurrently
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BillArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let sources = expand_inputs(&args.input)?;
    info!("Interpreting {} bills", sources.len());

    let interpreter = Arc::new(DocumentInterpreter::from_config(&config.extraction));
    let jobs = args.jobs.unwrap_or(config.batch.jobs);
    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;

    let results =
        interpret_all(sources, jobs, move |text: &str| interpreter.interpret_bill(text)).await?;

    let mut reports = Vec::with_capacity(results.len());
    let mut failed = Vec::new();

    for result in results {
        let name = result.source.name();
        match result.outcome {
            Ok(facts) => {
                debug!("Interpreted {} in {}ms", name, result.processing_time_ms);
                if !facts.has_total() {
                    warn!("No total found in {}", name);
                }
                reports.push(BillReport { file: name, facts });
            }
            Err(e) if continue_on_error => {
                warn!("Failed to process {}: {}", name, e);
                failed.push((name, e.to_string()));
            }
            Err(e) => {
                error!("Failed to process {}: {}", name, e);
                anyhow::bail!("Processing failed: {}", e);
            }
        }
    }

    let output = format_bills(&reports, args.format)?;
    emit(&output, args.output.as_deref())?;

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for (name, reason) in &failed {
            eprintln!("  - {}: {}", name, reason);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
