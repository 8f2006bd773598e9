//! Report formatting.

use std::fs;
use std::path::Path;

use console::style;
use serde::Serialize;

use slipscan_core::{BillFacts, SalaryFacts};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Bill facts for one input document.
#[derive(Debug, Serialize)]
pub struct BillReport {
    pub file: String,
    #[serde(flatten)]
    pub facts: BillFacts,
}

/// Salary facts for one input document.
#[derive(Debug, Serialize)]
pub struct SalaryReport {
    pub file: String,
    #[serde(flatten)]
    pub facts: SalaryFacts,
}

pub fn format_bills(reports: &[BillReport], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(reports)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["file", "total_amount", "date", "category"])?;

            for report in reports {
                let total = format!("{:.2}", report.facts.total_amount);
                wtr.write_record([
                    report.file.as_str(),
                    total.as_str(),
                    report.facts.date.as_str(),
                    report.facts.category.as_str(),
                ])?;
            }

            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();

            for report in reports {
                output.push_str(&format!("{}\n", report.file));
                output.push_str(&format!("  Total:    {:.2}\n", report.facts.total_amount));
                output.push_str(&format!("  Date:     {}\n", report.facts.date));
                output.push_str(&format!("  Category: {}\n", report.facts.category));
            }

            Ok(output)
        }
    }
}

pub fn format_salary(report: &SalaryReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["file", "amount"])?;
            let amount = format!("{:.2}", report.facts.amount);
            wtr.write_record([report.file.as_str(), amount.as_str()])?;

            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => Ok(format!(
            "{}\n  Salary: {:.2}\n",
            report.file, report.facts.amount
        )),
    }
}

/// Write to `path`, or stdout when no path is given.
pub fn emit(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)?;
            eprintln!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output.trim_end()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipscan_core::Category;

    fn reports() -> Vec<BillReport> {
        vec![BillReport {
            file: "dinner.txt".to_string(),
            facts: BillFacts {
                total_amount: 588.0,
                date: "15/08/2024".to_string(),
                category: Category::Food,
            },
        }]
    }

    #[test]
    fn test_bill_json_is_flat() {
        let json = format_bills(&reports(), OutputFormat::Json).unwrap();
        assert_eq!(
            json,
            r#"[{"file":"dinner.txt","total_amount":588.0,"date":"15/08/2024","category":"Food"}]"#
        );
    }

    #[test]
    fn test_bill_csv() {
        let csv = format_bills(&reports(), OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "file,total_amount,date,category\ndinner.txt,588.00,15/08/2024,Food\n"
        );
    }

    #[test]
    fn test_salary_text() {
        let report = SalaryReport {
            file: "march.txt".to_string(),
            facts: SalaryFacts { amount: 45000.0 },
        };

        let text = format_salary(&report, OutputFormat::Text).unwrap();
        assert_eq!(text, "march.txt\n  Salary: 45000.00\n");
    }
}
