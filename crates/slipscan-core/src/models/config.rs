//! Configuration structures for document interpretation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::facts::Category;
use crate::error::Result;

/// Main configuration for slipscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipscanConfig {
    /// Extraction rules.
    pub extraction: ExtractionConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

/// Keyword tables and numeric bounds used by the extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Category keyword groups, checked in order. The first group with a
    /// matching keyword decides the category.
    pub categories: Vec<CategoryRule>,

    /// Bill total rules.
    pub bill: BillRules,

    /// Salary rules.
    pub salary: SalaryRules,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryRule::new(Category::Food, &["restaurant", "food", "cafe", "dine"]),
                CategoryRule::new(Category::Transport, &["uber", "ola", "rapido", "taxi"]),
                CategoryRule::new(
                    Category::Shopping,
                    &["amazon", "flipkart", "myntra", "meesho"],
                ),
                CategoryRule::new(Category::Utilities, &["electricity", "water", "gas"]),
            ],
            bill: BillRules::default(),
            salary: SalaryRules::default(),
        }
    }
}

/// A category and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    /// Lower-case substrings.
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Bill total extraction rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillRules {
    /// Keywords marking the most reliable total lines.
    pub priority_keywords: Vec<String>,

    /// Keyword for the generic total tier.
    pub total_keyword: String,

    /// Lines containing this are skipped by the generic total tier.
    pub exclude_keyword: String,

    /// Values on keyword lines must be strictly greater than this.
    pub line_floor: f64,

    /// Inclusive lower bound for the whole-text fallback.
    pub fallback_min: f64,

    /// Inclusive upper bound for the whole-text fallback.
    pub fallback_max: f64,
}

impl Default for BillRules {
    fn default() -> Self {
        Self {
            priority_keywords: [
                "bill total",
                "grand total",
                "amount payable",
                "amount due",
                "net payable",
                "total amount",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            total_keyword: "total".to_string(),
            exclude_keyword: "sub".to_string(),
            line_floor: 10.0,
            fallback_min: 10.0,
            fallback_max: 50_000.0,
        }
    }
}

/// Salary extraction rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRules {
    /// Keywords marking salary lines.
    pub priority_keywords: Vec<String>,

    /// Values on keyword lines must be strictly greater than this.
    pub line_floor: f64,

    /// Inclusive lower bound for the whole-text fallback.
    pub fallback_min: f64,

    /// Inclusive upper bound for the whole-text fallback.
    pub fallback_max: f64,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            priority_keywords: [
                "net salary",
                "net pay",
                "take home",
                "take-home",
                "gross salary",
                "gross pay",
                "salary credited",
                "amount credited",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            line_floor: 1000.0,
            fallback_min: 1000.0,
            fallback_max: 10_000_000.0,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of documents read and interpreted concurrently.
    pub jobs: usize,

    /// Keep going when a document cannot be read.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: 4,
            continue_on_error: false,
        }
    }
}

impl SlipscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that the numeric bounds are usable.
    pub fn validate(&self) -> Result<()> {
        let bill = &self.extraction.bill;
        if bill.fallback_min > bill.fallback_max {
            return Err(crate::SlipscanError::Config(format!(
                "bill fallback bounds are inverted: {} > {}",
                bill.fallback_min, bill.fallback_max
            )));
        }

        let salary = &self.extraction.salary;
        if salary.fallback_min > salary.fallback_max {
            return Err(crate::SlipscanError::Config(format!(
                "salary fallback bounds are inverted: {} > {}",
                salary.fallback_min, salary.fallback_max
            )));
        }

        if self.batch.jobs == 0 {
            return Err(crate::SlipscanError::Config(
                "batch.jobs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
