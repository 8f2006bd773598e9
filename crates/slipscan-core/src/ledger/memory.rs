//! In-memory ledger.

use std::sync::{Arc, RwLock};

use super::{Expense, Income, LedgerRepository, LedgerResult};
use crate::error::LedgerError;

#[derive(Debug, Default)]
struct LedgerState {
    expenses: Vec<Expense>,
    income: Option<Income>,
}

/// Process-local ledger. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    state: Arc<RwLock<LedgerState>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerRepository for InMemoryLedger {
    fn append_expense(&self, expense: Expense) -> LedgerResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| LedgerError::Poisoned("write"))?;
        state.expenses.push(expense);
        Ok(())
    }

    fn set_income(&self, income: Income) -> LedgerResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| LedgerError::Poisoned("write"))?;
        state.income = Some(income);
        Ok(())
    }

    fn income(&self) -> LedgerResult<Option<Income>> {
        let state = self
            .state
            .read()
            .map_err(|_| LedgerError::Poisoned("read"))?;
        Ok(state.income.clone())
    }

    fn expenses(&self) -> LedgerResult<Vec<Expense>> {
        let state = self
            .state
            .read()
            .map_err(|_| LedgerError::Poisoned("read"))?;
        Ok(state.expenses.clone())
    }
}
