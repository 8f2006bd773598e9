//! Salary command - interpret OCR text of a payslip.

use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use slipscan_core::DocumentInterpreter;

use super::input::InputSource;
use super::output::{emit, format_salary, OutputFormat, SalaryReport};

/// Arguments for the salary command.
#[derive(Args)]
pub struct SalaryArgs {
    /// OCR text file of the payslip ("-" reads stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: SalaryArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let source = InputSource::from_arg(&args.input);
    if let InputSource::File(path) = &source {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
    }

    info!("Interpreting payslip {}", source.name());

    let text = source.read().await?;
    let facts = DocumentInterpreter::from_config(&config.extraction).interpret_salary(&text);

    if !facts.has_amount() {
        warn!("No salary amount found in {}", source.name());
    }

    let report = SalaryReport {
        file: source.name(),
        facts,
    };

    let output = format_salary(&report, args.format)?;
    emit(&output, args.output.as_deref())
}
