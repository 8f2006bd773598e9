//! Expense and income ledger.
//!
//! The ledger records what the interpreter found; the interpreter itself never
//! touches it. Storage sits behind [`LedgerRepository`] so callers can share
//! one store across request handlers or worker tasks.

mod memory;

pub use memory::InMemoryLedger;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::facts::{BillFacts, Category, SalaryFacts};

/// Result type for ledger operations.
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: Category,
    /// Date as found on the bill, or `"Not Found"`.
    pub date: String,
    /// Usually the name of the uploaded file.
    pub description: String,
}

impl Expense {
    /// Build an expense from interpreted bill facts.
    pub fn from_bill(facts: &BillFacts, description: impl Into<String>) -> Self {
        Self {
            amount: facts.total_amount,
            category: facts.category,
            date: facts.date.clone(),
            description: description.into(),
        }
    }
}

/// The recorded income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub amount: f64,
    pub source: String,
}

impl Income {
    /// Default source label for payslip uploads.
    pub const SALARY_SLIP: &'static str = "Salary Slip Upload";

    /// Build an income record from interpreted payslip facts.
    pub fn from_salary(facts: &SalaryFacts, source: impl Into<String>) -> Self {
        Self {
            amount: facts.amount,
            source: source.into(),
        }
    }
}

/// Storage for expenses and the current income.
///
/// Implementations must be thread-safe.
pub trait LedgerRepository: Send + Sync {
    /// Append an expense.
    fn append_expense(&self, expense: Expense) -> LedgerResult<()>;

    /// Replace the current income.
    fn set_income(&self, income: Income) -> LedgerResult<()>;

    /// Current income, if any has been recorded.
    fn income(&self) -> LedgerResult<Option<Income>>;

    /// All expenses, in insertion order.
    fn expenses(&self) -> LedgerResult<Vec<Expense>>;
}

/// Totals over a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_expense: f64,
    /// `0.0` when no income is recorded.
    pub income: f64,
    /// Income minus total expense; negative when overspent.
    pub savings: f64,
}

impl LedgerSummary {
    /// Compute totals from the repository's current contents.
    pub fn from_repository(repository: &dyn LedgerRepository) -> LedgerResult<Self> {
        let total_expense: f64 = repository.expenses()?.iter().map(|e| e.amount).sum();
        let income = repository.income()?.map(|i| i.amount).unwrap_or(0.0);

        Ok(Self {
            total_expense,
            income,
            savings: income - total_expense,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expense_from_bill() {
        let facts = BillFacts {
            total_amount: 588.0,
            date: "15/08/2024".to_string(),
            category: Category::Food,
        };

        let expense = Expense::from_bill(&facts, "dinner.jpg");

        assert_eq!(expense.amount, 588.0);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.date, "15/08/2024");
        assert_eq!(expense.description, "dinner.jpg");
    }

    #[test]
    fn test_summary_without_income() {
        let ledger = InMemoryLedger::new();
        ledger
            .append_expense(Expense::from_bill(
                &BillFacts {
                    total_amount: 250.0,
                    date: "Not Found".to_string(),
                    category: Category::Other,
                },
                "a.png",
            ))
            .unwrap();

        let summary = LedgerSummary::from_repository(&ledger).unwrap();
        assert_eq!(
            summary,
            LedgerSummary {
                total_expense: 250.0,
                income: 0.0,
                savings: -250.0,
            }
        );
    }

    #[test]
    fn test_summary_with_income() {
        let ledger = InMemoryLedger::new();
        for amount in [1200.0, 800.0] {
            ledger
                .append_expense(Expense {
                    amount,
                    category: Category::Shopping,
                    date: "Not Found".to_string(),
                    description: "order".to_string(),
                })
                .unwrap();
        }
        ledger
            .set_income(Income::from_salary(
                &SalaryFacts { amount: 45000.0 },
                Income::SALARY_SLIP,
            ))
            .unwrap();

        let summary = LedgerSummary::from_repository(&ledger).unwrap();
        assert_eq!(summary.total_expense, 2000.0);
        assert_eq!(summary.income, 45000.0);
        assert_eq!(summary.savings, 43000.0);
    }
}
