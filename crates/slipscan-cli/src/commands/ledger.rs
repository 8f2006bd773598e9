//! Ledger command - record bills and a payslip, then report savings.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tracing::{debug, info, warn};

use slipscan_core::{
    DocumentInterpreter, Expense, InMemoryLedger, Income, LedgerRepository, LedgerSummary,
};

use super::input::{expand_inputs, interpret_all, InputSource};
use super::output::emit;

/// Arguments for the ledger command.
#[derive(Args)]
pub struct LedgerArgs {
    /// OCR text file of the payslip ("-" reads stdin)
    #[arg(short, long)]
    salary: Option<String>,

    /// OCR text files or glob patterns of bills
    bills: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of bills read and interpreted concurrently
    #[arg(short = 'j', long)]
    jobs: Option<usize>,
}

#[derive(Serialize)]
struct NewExpense {
    amount: f64,
    date: String,
    category: String,
}

#[derive(Serialize)]
struct LedgerReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    detected_income: Option<f64>,
    new_expenses_added: Vec<NewExpense>,
    #[serde(flatten)]
    summary: LedgerSummary,
}

pub async fn run(args: LedgerArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    if args.salary.is_none() && args.bills.is_empty() {
        anyhow::bail!("Nothing to record: pass --salary and/or bill files");
    }

    let config = super::load_config(config_path)?;
    let interpreter = Arc::new(DocumentInterpreter::from_config(&config.extraction));
    let ledger = InMemoryLedger::new();

    let mut detected_income = None;
    if let Some(salary) = &args.salary {
        let source = InputSource::from_arg(salary);
        let facts = interpreter.interpret_salary(&source.read().await?);

        if !facts.has_amount() {
            warn!("No salary amount found in {}", source.name());
        }

        ledger.set_income(Income::from_salary(&facts, Income::SALARY_SLIP))?;
        detected_income = Some(facts.amount);
    }

    let mut new_expenses_added = Vec::new();
    if !args.bills.is_empty() {
        let sources = expand_inputs(&args.bills)?;
        info!("Recording {} bills", sources.len());

        let jobs = args.jobs.unwrap_or(config.batch.jobs);
        let interpreter = Arc::clone(&interpreter);
        let results =
            interpret_all(sources, jobs, move |text: &str| interpreter.interpret_bill(text))
                .await?;

        for result in results {
            let name = result.source.name();
            let facts = result.outcome?;
            debug!("Recording {} from {}", facts.total_amount, name);

            new_expenses_added.push(NewExpense {
                amount: facts.total_amount,
                date: facts.date.clone(),
                category: facts.category.to_string(),
            });
            ledger.append_expense(Expense::from_bill(&facts, name))?;
        }
    }

    let report = LedgerReport {
        detected_income,
        new_expenses_added,
        summary: LedgerSummary::from_repository(&ledger)?,
    };

    emit(&serde_json::to_string_pretty(&report)?, args.output.as_deref())
}
