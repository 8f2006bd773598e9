//! Core library for receipt and payslip interpretation.
//!
//! This crate provides:
//! - Bill interpretation (total amount, transaction date, spending category)
//! - Payslip interpretation (salary amount)
//! - Extraction configuration (keyword tables and numeric bounds)
//! - An in-memory expense/income ledger behind a repository trait
//!
//! OCR is not part of this crate: every entry point takes the plain text an
//! OCR engine produced for one document.

pub mod error;
pub mod models;
pub mod document;
pub mod ledger;

pub use error::{SlipscanError, LedgerError, Result};
pub use models::facts::{BillFacts, Category, DocumentFacts, DocumentKind, SalaryFacts};
pub use models::config::{ExtractionConfig, SlipscanConfig};
pub use document::{DocumentInterpreter, ExtractionMatch, MatchTier};
pub use document::rules::{
    classify_category, extract_bill_total, extract_date, extract_salary, parse_amount,
    DATE_NOT_FOUND,
};
pub use ledger::{Expense, InMemoryLedger, Income, LedgerRepository, LedgerSummary};
