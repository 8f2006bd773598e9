//! Common regex patterns for receipt and payslip text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A digit, then digits or grouping commas, an optional decimal point and
    // trailing digits: "900", "1,250.00", "12,34,567.50", "45."
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"\d[\d,]*\.?\d*"
    ).unwrap();

    // A single Unicode decimal digit (general category Nd)
    pub static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").unwrap();

    // DD/MM/YYYY or DD-MM-YYYY
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(?i)\b\d{2}[/-]\d{2}[/-]\d{4}\b"
    ).unwrap();

    // YYYY/MM/DD or YYYY-MM-DD
    pub static ref DATE_YMD: Regex = Regex::new(
        r"(?i)\b\d{4}[/-]\d{2}[/-]\d{2}\b"
    ).unwrap();

    // "Aug 15 2024", "August 15 2024"
    pub static ref DATE_MONTH_DAY_YEAR: Regex = Regex::new(
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s\d{2}\s\d{4}\b"
    ).unwrap();

    // "15 Aug 2024", "15 August 2024"
    pub static ref DATE_DAY_MONTH_YEAR: Regex = Regex::new(
        r"(?i)\b\d{2}\s(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s\d{4}\b"
    ).unwrap();

    // "Aug 15 2024 09:30 PM"
    pub static ref DATE_MONTH_DAY_YEAR_TIME: Regex = Regex::new(
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s\d{2}\s\d{4}\s\d{2}:\d{2}\s?(AM|PM)?\b"
    ).unwrap();
}
