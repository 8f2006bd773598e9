//! Structured facts derived from receipt and payslip text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::rules::DATE_NOT_FOUND;

/// Spending category assigned to a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Utilities,
    /// Fallback when no keyword group matches.
    #[default]
    Other,
}

impl Category {
    /// All categories, in the default classification priority order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Utilities,
        Category::Other,
    ];

    /// Category name as stored in ledger records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of document being interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Receipt or bill (an expense).
    Bill,
    /// Payslip (income).
    Salary,
}

/// Facts extracted from a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillFacts {
    /// Bill total, `0.0` when undetermined.
    pub total_amount: f64,

    /// Date exactly as it appeared in the text, or `"Not Found"`.
    pub date: String,

    /// Spending category.
    pub category: Category,
}

impl BillFacts {
    /// Whether a total was determined.
    pub fn has_total(&self) -> bool {
        self.total_amount > 0.0
    }

    /// Whether a date was found.
    pub fn has_date(&self) -> bool {
        self.date != DATE_NOT_FOUND
    }
}

/// Facts extracted from a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryFacts {
    /// Salary amount, `0.0` when undetermined.
    pub amount: f64,
}

impl SalaryFacts {
    /// Whether a salary was determined.
    pub fn has_amount(&self) -> bool {
        self.amount > 0.0
    }
}

/// Facts for either kind of document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentFacts {
    Bill(BillFacts),
    Salary(SalaryFacts),
}

impl DocumentFacts {
    /// Kind of document these facts came from.
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentFacts::Bill(_) => DocumentKind::Bill,
            DocumentFacts::Salary(_) => DocumentKind::Salary,
        }
    }

    /// The monetary value, whichever kind of document.
    pub fn amount(&self) -> f64 {
        match self {
            DocumentFacts::Bill(bill) => bill.total_amount,
            DocumentFacts::Salary(salary) => salary.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_serializes_by_name() {
        let json = serde_json::to_string(&Category::Utilities).unwrap();
        assert_eq!(json, "\"Utilities\"");

        let parsed: Category = serde_json::from_str("\"Food\"").unwrap();
        assert_eq!(parsed, Category::Food);
    }

    #[test]
    fn test_bill_facts_sentinels() {
        let facts = BillFacts {
            total_amount: 0.0,
            date: DATE_NOT_FOUND.to_string(),
            category: Category::Other,
        };

        assert!(!facts.has_total());
        assert!(!facts.has_date());
    }

    #[test]
    fn test_document_facts_tagged() {
        let facts = DocumentFacts::Salary(SalaryFacts { amount: 45000.0 });
        let json = serde_json::to_value(&facts).unwrap();

        assert_eq!(json["kind"], serde_json::json!("salary"));
        assert_eq!(json["amount"], serde_json::json!(45000.0));
        assert_eq!(facts.kind(), DocumentKind::Salary);
    }
}
