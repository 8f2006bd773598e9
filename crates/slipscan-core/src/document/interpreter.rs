//! Document interpreter combining the field extractors.

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::facts::{BillFacts, DocumentFacts, DocumentKind, SalaryFacts};

use super::rules::{
    BillTotalExtractor, CategoryClassifier, DateExtractor, FieldExtractor, SalaryExtractor,
    DATE_NOT_FOUND,
};

/// Interprets OCR text from receipts and payslips.
///
/// Each field is extracted independently from the same text; no extractor
/// sees another's result. Interpretation never fails: fields that cannot be
/// determined come back as their sentinel values.
pub struct DocumentInterpreter {
    classifier: CategoryClassifier,
    dates: DateExtractor,
    totals: BillTotalExtractor,
    salary: SalaryExtractor,
}

impl DocumentInterpreter {
    /// Create an interpreter with the default rule tables.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an interpreter from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            classifier: CategoryClassifier::from_config(config),
            dates: DateExtractor::new(),
            totals: BillTotalExtractor::from_config(config),
            salary: SalaryExtractor::from_config(config),
        }
    }

    /// Interpret a receipt or bill.
    pub fn interpret_bill(&self, text: &str) -> BillFacts {
        info!("Interpreting bill from {} characters of text", text.len());

        let total_amount = match self.totals.extract(text) {
            Some(m) => {
                debug!("Bill total {} from {:?} ({})", m.value, m.tier, m.source);
                m.value
            }
            None => {
                debug!("No bill total found");
                0.0
            }
        };

        let date = match self.dates.extract(text) {
            Some(m) => {
                debug!("Bill date {:?} as {:?}", m.value.text, m.value.format);
                m.value.text
            }
            None => {
                debug!("No bill date found");
                DATE_NOT_FOUND.to_string()
            }
        };

        let category = match self.classifier.extract(text) {
            Some(m) => {
                debug!("Category {} from keyword {:?}", m.value, m.source);
                m.value
            }
            None => Default::default(),
        };

        BillFacts {
            total_amount,
            date,
            category,
        }
    }

    /// Interpret a payslip.
    pub fn interpret_salary(&self, text: &str) -> SalaryFacts {
        info!("Interpreting payslip from {} characters of text", text.len());

        let amount = match self.salary.extract(text) {
            Some(m) => {
                debug!("Salary {} from {:?} ({})", m.value, m.tier, m.source);
                m.value
            }
            None => {
                debug!("No salary amount found");
                0.0
            }
        };

        SalaryFacts { amount }
    }

    /// Interpret a document of the given kind.
    pub fn interpret(&self, kind: DocumentKind, text: &str) -> DocumentFacts {
        match kind {
            DocumentKind::Bill => DocumentFacts::Bill(self.interpret_bill(text)),
            DocumentKind::Salary => DocumentFacts::Salary(self.interpret_salary(text)),
        }
    }
}

impl Default for DocumentInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
