//! Rule-based field extractors for receipts and payslips.
//!
//! Every extractor is a pure function of the text it is given. The free
//! functions at the bottom of this module use the default rule tables and
//! return the plain sentinel values (`0.0`, `"Not Found"`, `Category::Other`)
//! when nothing qualifies.

pub mod category;
pub mod dates;
pub mod numbers;
pub mod patterns;
pub mod salary;
pub mod totals;

pub use category::CategoryClassifier;
pub use dates::{DateExtractor, DateFormat, DateMatch, DATE_NOT_FOUND};
pub use numbers::{max_amount_within, numeric_tokens, parse_amount, trailing_amount_above};
pub use salary::SalaryExtractor;
pub use totals::BillTotalExtractor;

use tracing::trace;

use crate::models::facts::Category;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text, `None` when nothing qualifies.
    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>>;
}

/// Which rule produced an extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// A line carrying one of the priority keywords.
    PriorityKeyword,
    /// A generic "total" line.
    GenericTotal,
    /// Largest in-bounds number anywhere in the text.
    BoundedFallback,
    /// A fixed text pattern (date shapes, category keywords).
    Pattern,
}

impl MatchTier {
    /// Confidence attached to values found by this rule.
    pub fn confidence(&self) -> f32 {
        match self {
            MatchTier::PriorityKeyword => 0.95,
            MatchTier::Pattern => 0.9,
            MatchTier::GenericTotal => 0.8,
            MatchTier::BoundedFallback => 0.5,
        }
    }
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Rule that produced the value.
    pub tier: MatchTier,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Byte range in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched (a line, a keyword, or the matched span).
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, tier: MatchTier, source: impl Into<String>) -> Self {
        Self {
            value,
            tier,
            confidence: tier.confidence(),
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Scan `text` line by line and return the trailing amount above `floor` from
/// the first line that `selects` accepts and that has one.
///
/// `selects` receives the lower-cased line.
pub(crate) fn scan_keyword_lines<F>(
    text: &str,
    tier: MatchTier,
    floor: f64,
    selects: F,
) -> Option<ExtractionMatch<f64>>
where
    F: Fn(&str) -> bool,
{
    let mut offset = 0;

    for line in text.split('\n') {
        let start = offset;
        offset += line.len() + 1;

        let lower = line.to_lowercase();
        if !selects(lower.as_str()) {
            continue;
        }

        match trailing_amount_above(line, floor) {
            Some(value) => {
                return Some(
                    ExtractionMatch::new(value, tier, line)
                        .with_position(start, start + line.len()),
                );
            }
            None => trace!("{:?} line has no amount above {}: {}", tier, floor, line),
        }
    }

    None
}

/// Classify a bill's spending category with the default keyword table.
pub fn classify_category(text: &str) -> Category {
    CategoryClassifier::new().classify(text)
}

/// First date-shaped substring of `text`, or `"Not Found"`.
pub fn extract_date(text: &str) -> String {
    DateExtractor::new()
        .extract(text)
        .map(|m| m.value.text)
        .unwrap_or_else(|| DATE_NOT_FOUND.to_string())
}

/// Bill total with the default rules, `0.0` when undetermined.
pub fn extract_bill_total(text: &str) -> f64 {
    BillTotalExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(0.0)
}

/// Salary amount with the default rules, `0.0` when undetermined.
pub fn extract_salary(text: &str) -> f64 {
    SalaryExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECEIPT: &str = "\
Cafe Aroma
Invoice date 15-08-2024 paid
Latte 2 x 180.00
Subtotal 360.00
CGST 2.5% 9.00
Grand Total: 378.00
Call 9876543210";

    #[test]
    fn test_free_functions_on_receipt() {
        assert_eq!(classify_category(RECEIPT), Category::Food);
        assert_eq!(extract_date(RECEIPT), "15-08-2024");
        assert_eq!(extract_bill_total(RECEIPT), 378.0);
    }

    #[test]
    fn test_empty_text_yields_sentinels() {
        assert_eq!(classify_category(""), Category::Other);
        assert_eq!(extract_date(""), DATE_NOT_FOUND);
        assert_eq!(extract_bill_total(""), 0.0);
        assert_eq!(extract_salary(""), 0.0);
    }

    #[test]
    fn test_garbage_text_yields_sentinels() {
        let text = "\u{0}\u{fffd}@@##,,,..\n\n\t~~";

        assert_eq!(classify_category(text), Category::Other);
        assert_eq!(extract_date(text), DATE_NOT_FOUND);
        assert_eq!(extract_bill_total(text), 0.0);
        assert_eq!(extract_salary(text), 0.0);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        for _ in 0..3 {
            assert_eq!(extract_bill_total(RECEIPT), 378.0);
            assert_eq!(extract_date(RECEIPT), "15-08-2024");
            assert_eq!(classify_category(RECEIPT), Category::Food);
        }
    }

    #[test]
    fn test_tier_confidence_ordering() {
        assert!(MatchTier::PriorityKeyword.confidence() > MatchTier::GenericTotal.confidence());
        assert!(MatchTier::GenericTotal.confidence() > MatchTier::BoundedFallback.confidence());
    }
}
