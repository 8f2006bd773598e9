//! Bill total extraction.
//!
//! Three tiers, each tried only when the previous one found nothing:
//!
//! 1. Lines with a priority keyword ("grand total", "amount due", ...). The
//!    rightmost number above the line floor is taken, from the first such
//!    line that has one.
//! 2. Lines containing "total" but not "sub", same rule.
//! 3. The largest number anywhere in the text within the fallback bounds.
//!
//! The bounds keep phone numbers, receipt IDs and near-zero noise out of the
//! last tier.

use super::numbers::max_amount_within;
use super::{scan_keyword_lines, ExtractionMatch, FieldExtractor, MatchTier};
use crate::models::config::{BillRules, ExtractionConfig};

/// Bill total extractor.
pub struct BillTotalExtractor {
    rules: BillRules,
}

impl BillTotalExtractor {
    /// Create an extractor with the default rules.
    pub fn new() -> Self {
        Self::with_rules(BillRules::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_rules(config.bill.clone())
    }

    pub fn with_rules(mut rules: BillRules) -> Self {
        rules.priority_keywords = rules
            .priority_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        rules.total_keyword = rules.total_keyword.to_lowercase();
        rules.exclude_keyword = rules.exclude_keyword.to_lowercase();
        Self { rules }
    }

    /// Tier 1: first priority-keyword line with a qualifying amount.
    pub fn from_priority_lines(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        scan_keyword_lines(text, MatchTier::PriorityKeyword, self.rules.line_floor, |lower| {
            self.rules
                .priority_keywords
                .iter()
                .any(|keyword| lower.contains(keyword.as_str()))
        })
    }

    /// Tier 2: first generic total line (not a subtotal) with a qualifying amount.
    pub fn from_total_lines(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        if self.rules.total_keyword.is_empty() {
            return None;
        }

        scan_keyword_lines(text, MatchTier::GenericTotal, self.rules.line_floor, |lower| {
            lower.contains(self.rules.total_keyword.as_str())
                && (self.rules.exclude_keyword.is_empty()
                    || !lower.contains(self.rules.exclude_keyword.as_str()))
        })
    }

    /// Tier 3: largest in-bounds amount anywhere in the text.
    pub fn from_bounded_scan(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        max_amount_within(text, self.rules.fallback_min, self.rules.fallback_max)
            .map(|value| ExtractionMatch::new(value, MatchTier::BoundedFallback, value.to_string()))
    }
}

impl Default for BillTotalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BillTotalExtractor {
    type Output = f64;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<f64>> {
        self.from_priority_lines(text)
            .or_else(|| self.from_total_lines(text))
            .or_else(|| self.from_bounded_scan(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn total(text: &str) -> Option<(f64, MatchTier)> {
        BillTotalExtractor::new()
            .extract(text)
            .map(|m| (m.value, m.tier))
    }

    #[test]
    fn test_grand_total_beats_larger_numbers() {
        let text = "\
Store #4521
Item A 499.00
Item B 751.00
Grand Total: 1,250.00
Order ID 30412";

        assert_eq!(total(text), Some((1250.0, MatchTier::PriorityKeyword)));
    }

    #[test]
    fn test_rightmost_number_on_keyword_line() {
        let text = "Amount Due (2 items) 845.50";
        assert_eq!(total(text), Some((845.5, MatchTier::PriorityKeyword)));
    }

    #[test]
    fn test_first_qualifying_keyword_line_wins() {
        let text = "\
Net Payable 5
Bill Total 320.00
Amount Payable 999.00";

        // The first keyword line has nothing above 10, the second one does.
        assert_eq!(total(text), Some((320.0, MatchTier::PriorityKeyword)));
    }

    #[test]
    fn test_generic_total_line() {
        let text = "\
Coffee 120
TOTAL 240.00
Cash 500";

        assert_eq!(total(text), Some((240.0, MatchTier::GenericTotal)));
    }

    #[test]
    fn test_priority_tier_beats_earlier_generic_total() {
        let text = "Total 500\nGrand Total 600";
        assert_eq!(total(text), Some((600.0, MatchTier::PriorityKeyword)));
    }

    #[test]
    fn test_generic_total_after_empty_priority_line() {
        let text = "Grand Total 5\nTotal 300";
        assert_eq!(total(text), Some((300.0, MatchTier::GenericTotal)));
    }

    #[test]
    fn test_devanagari_and_fullwidth_totals() {
        assert_eq!(
            total("Grand Total: १,२५०.००"),
            Some((1250.0, MatchTier::PriorityKeyword))
        );
        assert_eq!(
            total("Grand Total: ２５０"),
            Some((250.0, MatchTier::PriorityKeyword))
        );
    }

    #[test]
    fn test_subtotal_lines_skipped() {
        let extractor = BillTotalExtractor::new();
        let text = "Subtotal 900\nTotal items 3";

        assert_eq!(extractor.from_total_lines(text), None);
        assert_eq!(total(text), Some((900.0, MatchTier::BoundedFallback)));
    }

    #[test]
    fn test_bounded_fallback() {
        let text = "Table 5\nCovers 23\nPhone 61234\nPaid 900";
        assert_eq!(total(text), Some((900.0, MatchTier::BoundedFallback)));
    }

    #[test]
    fn test_line_floor_is_strict() {
        let text = "Grand Total: 10\nCovers 12";
        let extractor = BillTotalExtractor::new();

        assert_eq!(extractor.from_priority_lines(text), None);
        assert_eq!(total(text), Some((12.0, MatchTier::BoundedFallback)));

        let text = "Grand Total: 10.01\nCovers 12";
        assert_eq!(total(text), Some((10.01, MatchTier::PriorityKeyword)));
    }

    #[test]
    fn test_nothing_qualifies() {
        assert_eq!(total("Thanks! Visit again"), None);
        assert_eq!(total("qty 1 2 3"), None);
        assert_eq!(total("ref 123456789"), None);
        assert_eq!(super::super::extract_bill_total("qty 1 2 3"), 0.0);
    }

    #[test]
    fn test_custom_bounds() {
        let rules = BillRules {
            fallback_max: 100_000.0,
            ..BillRules::default()
        };
        let extractor = BillTotalExtractor::with_rules(rules);

        assert_eq!(extractor.extract("Ref 61234").map(|m| m.value), Some(61234.0));
    }

    #[test]
    fn test_match_position_covers_line() {
        let text = "Shop\nGrand Total 450";
        let result = BillTotalExtractor::new().extract(text).unwrap();

        assert_eq!(result.source, "Grand Total 450");
        assert_eq!(result.position, Some((5, 20)));
    }
}
