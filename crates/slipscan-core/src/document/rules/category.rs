//! Spending category classification by keyword.

use super::{ExtractionMatch, FieldExtractor, MatchTier};
use crate::models::config::{CategoryRule, ExtractionConfig};
use crate::models::facts::Category;

/// Keyword-based category classifier.
///
/// Rules are checked in order and the first rule with any keyword contained
/// in the lower-cased text wins, so a text mentioning both a restaurant and a
/// taxi is Food under the default table. Matching is by substring, not whole
/// word.
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
}

impl CategoryClassifier {
    /// Create a classifier with the default keyword table.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_rules(config.categories.clone())
    }

    pub fn with_rules(rules: Vec<CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| CategoryRule {
                category: rule.category,
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        Self { rules }
    }

    /// Classify the text, falling back to `Category::Other`.
    pub fn classify(&self, text: &str) -> Category {
        self.extract(text)
            .map(|m| m.value)
            .unwrap_or_default()
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CategoryClassifier {
    type Output = Category;

    /// The winning rule's category, with the keyword that selected it as
    /// source. `None` means no rule matched.
    fn extract(&self, text: &str) -> Option<ExtractionMatch<Category>> {
        let lower = text.to_lowercase();

        self.rules.iter().find_map(|rule| {
            rule.keywords
                .iter()
                .find(|keyword| !keyword.is_empty() && lower.contains(keyword.as_str()))
                .map(|keyword| ExtractionMatch::new(rule.category, MatchTier::Pattern, keyword))
        })
    }
}
