//! Salary extraction for payslips.
//!
//! Two tiers: salary keyword lines ("net pay", "take home", ...) with a higher
//! floor than bills, then the largest in-bounds number in the whole text.
//! Payslips have no generic "total" tier.

use super::numbers::max_amount_within;
use super::{scan_keyword_lines, ExtractionMatch, FieldExtractor, MatchTier};
use crate::models::config::{ExtractionConfig, SalaryRules};

/// Salary amount extractor.
pub struct SalaryExtractor {
    rules: SalaryRules,
}

impl SalaryExtractor {
    /// Create an extractor with the default rules.
    pub fn new() -> Self {
        Self::with_rules(SalaryRules::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_rules(config.salary.clone())
    }

    pub fn with_rules(mut rules: SalaryRules) -> Self {
        rules.priority_keywords = rules
            .priority_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { rules }
    }

    /// First salary keyword line with an amount above the line floor.
    pub fn from_keyword_lines(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        scan_keyword_lines(text, MatchTier::PriorityKeyword, self.rules.line_floor, |lower| {
            self.rules
                .priority_keywords
                .iter()
                .any(|keyword| lower.contains(keyword.as_str()))
        })
    }

    /// Largest in-bounds amount anywhere in the text.
    pub fn from_bounded_scan(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        max_amount_within(text, self.rules.fallback_min, self.rules.fallback_max)
            .map(|value| ExtractionMatch::new(value, MatchTier::BoundedFallback, value.to_string()))
    }
}

impl Default for SalaryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SalaryExtractor {
    type Output = f64;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        self.from_keyword_lines(text)
            .or_else(|| self.from_bounded_scan(text))
    }
}
