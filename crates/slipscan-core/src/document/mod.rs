//! Receipt and payslip interpretation.

mod interpreter;
pub mod rules;

pub use interpreter::DocumentInterpreter;
pub use rules::{ExtractionMatch, FieldExtractor, MatchTier};
